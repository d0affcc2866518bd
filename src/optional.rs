//! Defines the [`Optional`] type

use std::any::type_name;

use log::trace;

use crate::{empty::Empty, error::AbsentValue, nullable::Nullable};

/// Either a value or nothing at all
///
/// It is functionally equivalent to an [`Option`], but it is meant to be
/// built with the folding constructors, which turn every representation of
/// "no value" into [`Optional::None`].
///
/// The [`Optional::into_option`] method maps an [`Optional`] back to an
/// [`Option`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Optional<T> {
    Some(T),
    None,
}

impl<T> Optional<T> {
    /// Wrap a value
    ///
    /// This does not fold: the result is always [`Optional::Some`], even for
    /// a null pointer or an empty [`Option`]. Values that might be null,
    /// pointers included, go through [`Optional::of_nullable`].
    ///
    /// ```rust
    /// use optional::Optional;
    ///
    /// assert_eq!(Optional::of(1), Optional::Some(1));
    /// ```
    pub fn of(value: T) -> Self {
        Self::Some(value)
    }

    /// Wrap a value that may be null
    ///
    /// Null values, such as [`Option::None`] or a null pointer, become
    /// [`Optional::None`]. Everything else becomes [`Optional::Some`].
    ///
    /// ```rust
    /// use optional::Optional;
    ///
    /// assert_eq!(Optional::of_nullable(Some(1)), Optional::Some(1));
    /// assert_eq!(Optional::<u32>::of_nullable(None), Optional::None);
    /// ```
    pub fn of_nullable<N>(value: N) -> Self
    where
        N: Nullable<Value = T>,
    {
        match value.into_nullable() {
            Some(value) => Self::of(value),
            None => {
                trace!("null {} folded into Optional::None", type_name::<N>());
                Self::None
            }
        }
    }

    /// Wrap the contents of an [`Option`] that may itself be missing
    ///
    /// The outer layer is the holder, the inner layer is its content. Both a
    /// missing holder and an empty one result in [`Optional::None`]. The
    /// content is taken as given, like [`Optional::of`] does. Use
    /// [`Optional::of_optional_nullable`] when the content can be null.
    ///
    /// ```rust
    /// use optional::Optional;
    ///
    /// assert_eq!(Optional::of_optional(Some(Some(1))), Optional::Some(1));
    /// assert_eq!(Optional::<u32>::of_optional(Some(None)), Optional::None);
    /// assert_eq!(Optional::<u32>::of_optional(None), Optional::None);
    /// ```
    pub fn of_optional(holder: Option<Option<T>>) -> Self {
        let Some(holder) = holder else {
            trace!(
                "missing Option<{}> folded into Optional::None",
                type_name::<T>()
            );
            return Self::None;
        };
        Self::of_nullable(holder)
    }

    /// Wrap the contents of an [`Option`] holding something that may be null
    ///
    /// Like [`Optional::of_optional`], but the content is folded with
    /// [`Optional::of_nullable`] as well, so a missing holder, an empty
    /// holder and a holder containing null all result in [`Optional::None`].
    ///
    /// ```rust
    /// use std::ptr;
    ///
    /// use optional::Optional;
    ///
    /// let null = ptr::null::<u8>();
    /// assert!(Optional::of_optional_nullable(Some(Some(null))).is_none());
    /// assert_eq!(
    ///     Optional::of_optional_nullable(Some(Some(Some(1)))),
    ///     Optional::Some(1)
    /// );
    /// ```
    pub fn of_optional_nullable<N>(holder: Option<Option<N>>) -> Self
    where
        N: Nullable<Value = T>,
    {
        match Optional::of_optional(holder) {
            Optional::Some(value) => Self::of_nullable(value),
            Optional::None => Self::None,
        }
    }

    /// The absent value, typed as such
    ///
    /// Use this instead of [`Optional::None`] where the absence itself
    /// should be visible in the type. It converts into an [`Optional`] or an
    /// [`Option`] with [`From`].
    pub fn empty() -> Empty<T> {
        Empty::new()
    }

    /// Turn this into an [`Option`], moving the value out
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }

    /// Take the value out, failing with [`AbsentValue`] if there is none
    pub fn into_value(self) -> Result<T, AbsentValue> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(AbsentValue::of::<T>()),
        }
    }

    /// Returns `true` if this holds a value.
    pub fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if this holds nothing.
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Converts from `&Optional<T>` to `Optional<&T>`.
    pub fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Some(value) => Optional::Some(value),
            Self::None => Optional::None,
        }
    }

    /// Converts from `&mut Optional<T>` to `Optional<&mut T>`.
    pub fn as_mut(&mut self) -> Optional<&mut T> {
        match self {
            Self::Some(value) => Optional::Some(value),
            Self::None => Optional::None,
        }
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::None
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Self::of_nullable(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}

impl<T> From<Empty<T>> for Optional<T> {
    fn from(_: Empty<T>) -> Self {
        Self::None
    }
}

impl<T> PartialEq<Empty<T>> for Optional<T> {
    fn eq(&self, _: &Empty<T>) -> bool {
        self.is_none()
    }
}
