//! Values with a null sentinel
//!
//! Rust types can't be null, but some of them have a value that means
//! "nothing": an empty [`Option`] or a null pointer. The [`Nullable`] trait
//! separates that value from the real ones, which is what
//! [`Optional::of_nullable`] uses to fold them.

use std::ptr::NonNull;

use crate::optional::Optional;

/// A type that has a null sentinel
pub trait Nullable {
    /// The type of the non-null values
    type Value;

    /// Returns `None` for the null sentinel and the value otherwise
    fn into_nullable(self) -> Option<Self::Value>;
}

impl<T> Nullable for Option<T> {
    type Value = T;

    fn into_nullable(self) -> Option<T> {
        self
    }
}

impl<T> Nullable for Optional<T> {
    type Value = T;

    fn into_nullable(self) -> Option<T> {
        self.into_option()
    }
}

impl<T: ?Sized> Nullable for *mut T {
    type Value = NonNull<T>;

    fn into_nullable(self) -> Option<NonNull<T>> {
        NonNull::new(self)
    }
}

impl<T: ?Sized> Nullable for *const T {
    type Value = NonNull<T>;

    fn into_nullable(self) -> Option<NonNull<T>> {
        NonNull::new(self.cast_mut())
    }
}
