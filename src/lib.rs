#![cfg_attr(feature = "nightly", feature(test))]
#[cfg(feature = "nightly")]
extern crate test;

mod classify;
pub mod error;
pub mod iter;
pub mod maybe;
pub mod ops;
pub mod outcome;
pub mod value;

pub use error::OptionError;
pub use maybe::Maybe;
pub use outcome::Outcome;
pub use value::{DynMaybe, Value, ValueKind};

#[must_use]
pub const fn some<T>(value: T) -> Maybe<T> {
    Maybe::present(value)
}
#[must_use]
pub const fn none<T>() -> Maybe<T> {
    Maybe::absent()
}
