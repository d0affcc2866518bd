//! Defines the [`Empty`] type

use std::{
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
};

use crate::optional::Optional;

/// The absence of a `T`
///
/// This is what [`Optional::empty`] returns. It carries no data and
/// compares equal to [`Optional::None`].
///
/// The trait implementations are written by hand so that they do not
/// require anything of `T`.
pub struct Empty<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> Empty<T> {
    /// Creates the absent value; same as [`Optional::empty`].
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }

    /// Turn this into an [`Option`], which is always `None`.
    pub fn into_option(self) -> Option<T> {
        None
    }
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Empty<T> {}

impl<T> Default for Empty<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Empty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Empty")
    }
}

impl<T> PartialEq for Empty<T> {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl<T> Eq for Empty<T> {}

impl<T> PartialEq<Optional<T>> for Empty<T> {
    fn eq(&self, other: &Optional<T>) -> bool {
        other.is_none()
    }
}

impl<T> Hash for Empty<T> {
    fn hash<H: Hasher>(&self, _: &mut H) {}
}

impl<T> From<Empty<T>> for Option<T> {
    fn from(value: Empty<T>) -> Self {
        value.into_option()
    }
}
