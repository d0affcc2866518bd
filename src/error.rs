use std::{any::type_name, fmt};

/// Returned by [`Optional::into_value`](crate::Optional::into_value) when
/// there is no value to take
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AbsentValue {
    /// Rust name of the type that was expected
    pub type_name: &'static str,
}

impl AbsentValue {
    pub(crate) fn of<T>() -> Self {
        Self {
            type_name: type_name::<T>(),
        }
    }
}

impl fmt::Display for AbsentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected a value of type `{}`, found none", self.type_name)
    }
}

impl std::error::Error for AbsentValue {}
