use core::fmt;

use crate::maybe::Maybe;

/// Success or failure, carrying the same extra payload as [`Maybe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome<T, E, X = ()> {
    Ok { value: T, extra: X },
    Err { error: E, extra: X },
}

impl<T, E> Outcome<T, E> {
    #[must_use]
    pub const fn ok(value: T) -> Self {
        Self::Ok { value, extra: () }
    }
    #[must_use]
    pub const fn err(error: E) -> Self {
        Self::Err { error, extra: () }
    }
}

impl<T, E, X> Outcome<T, E, X> {
    #[must_use]
    pub const fn ok_with(value: T, extra: X) -> Self {
        Self::Ok { value, extra }
    }
    #[must_use]
    pub const fn err_with(error: E, extra: X) -> Self {
        Self::Err { error, extra }
    }

    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok { .. })
    }
    #[must_use]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err { .. })
    }
    #[must_use]
    pub const fn extra(&self) -> &X {
        match self {
            Self::Ok { extra, .. } | Self::Err { extra, .. } => extra,
        }
    }

    /// # Panics
    ///
    /// If this is an [`Outcome::Err`].
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Self::Ok { value, .. } => value,
            Self::Err { error, .. } => panic!("Unwrapped an Err: {error:?}"),
        }
    }
    /// # Panics
    ///
    /// If this is an [`Outcome::Ok`].
    #[track_caller]
    pub fn unwrap_err(self) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Self::Ok { value, .. } => panic!("Unwrapped an Ok: {value:?}"),
            Self::Err { error, .. } => error,
        }
    }
    pub fn try_unwrap(self) -> Result<T, Self> {
        match self {
            Self::Ok { value, .. } => Ok(value),
            err @ Self::Err { .. } => Err(err),
        }
    }
    pub fn try_unwrap_err(self) -> Result<E, Self> {
        match self {
            Self::Err { error, .. } => Ok(error),
            ok @ Self::Ok { .. } => Err(ok),
        }
    }

    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Ok { value, .. } => Ok(value),
            Self::Err { error, .. } => Err(error),
        }
    }
    /// Keeps the payload
    #[must_use]
    pub fn into_ok(self) -> Maybe<T, X> {
        match self {
            Self::Ok { value, extra } => Maybe::Present { value, extra },
            Self::Err { extra, .. } => Maybe::Absent { extra },
        }
    }
    /// Keeps the payload
    #[must_use]
    pub fn into_err(self) -> Maybe<E, X> {
        match self {
            Self::Ok { extra, .. } => Maybe::Absent { extra },
            Self::Err { error, extra } => Maybe::Present {
                value: error,
                extra,
            },
        }
    }
}

impl<T, E, X> From<Outcome<T, E, X>> for Result<T, E> {
    fn from(value: Outcome<T, E, X>) -> Self {
        value.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_back() {
        let ok: Outcome<&str, u8> = Outcome::ok("v");
        assert!(ok.is_ok());
        assert_eq!(ok.unwrap(), "v");
        let err: Outcome<&str, u8> = Outcome::err(3);
        assert!(err.is_err());
        assert_eq!(err.unwrap_err(), 3);
        assert_eq!(err.try_unwrap(), Err(err));
        assert_eq!(ok.try_unwrap_err(), Err(ok));
    }

    #[test]
    #[should_panic(expected = "Unwrapped an Err: 3")]
    fn test_unwrap_err_variant() {
        Outcome::<&str, u8>::err(3).unwrap();
    }

    #[test]
    fn test_back_to_maybe() {
        let ok = Outcome::<_, u8, _>::ok_with("v", ("x",));
        assert_eq!(ok.into_ok(), Maybe::present_with("v", ("x",)));
        assert_eq!(ok.into_err(), Maybe::absent_with(("x",)));
        let err = Outcome::<&str, _, _>::err_with(1, 2);
        assert_eq!(err.extra(), &2);
        assert_eq!(err.into_err(), Maybe::present_with(1, 2));
    }

    #[test]
    fn test_question_mark() {
        fn half(m: Maybe<u32>) -> Result<u32, &'static str> {
            let v = m.ok_or("missing").into_result()?;
            Ok(v / 2)
        }
        assert_eq!(half(Maybe::present(8)), Ok(4));
        assert_eq!(half(Maybe::absent()), Err("missing"));
    }
}
