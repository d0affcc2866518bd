//! A destructurable option type
//!
//! [`Optional`] is a closed sum type with two variants: [`Optional::Some`]
//! holding a value and [`Optional::None`] holding nothing. It is meant to be
//! taken apart with `match`, `if let` and `let else`:
//!
//! ```rust
//! use optional::Optional;
//!
//! fn describe(found: Optional<&str>) -> String {
//!     match found {
//!         Optional::Some(name) if name.is_empty() => "blank".into(),
//!         Optional::Some(name) => format!("found {name}"),
//!         Optional::None => "nothing".into(),
//!     }
//! }
//!
//! assert_eq!(describe(Optional::of("file.txt")), "found file.txt");
//! assert_eq!(describe(Optional::of_nullable(None)), "nothing");
//! ```
//!
//! Values coming from the outside world can be folded into an [`Optional`]
//! from anything that may be "null" (see [`Nullable`]) and from an
//! [`Option`] that may itself be missing, see [`Optional::of_optional`].
//! Converting back to an [`Option`] is done with [`Optional::into_option`].
//!
//! Every `match` on an [`Optional`] has to handle both variants:
//!
//! ```rust,compile_fail
//! use optional::Optional;
//!
//! let answer = match Optional::of(42) {
//!     Optional::Some(x) => x,
//! };
//! ```
mod empty;
mod error;
mod nullable;
mod optional;


pub use empty::Empty;
pub use error::AbsentValue;
pub use nullable::Nullable;
pub use optional::Optional;
