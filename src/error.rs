use thiserror::Error;

use crate::value::ValueKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptionError {
    #[error("Unwrapped a None")]
    Unwrap,
    /// A chaining callback handed back something that is not an optional value
    #[error("`{combinator}` callback returned {found}, expected an optional value")]
    CombinatorType {
        combinator: &'static str,
        found: ValueKind,
    },
    #[error("expected an iterable, found {found}")]
    InputType { found: ValueKind },
}
