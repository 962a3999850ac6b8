use core::mem;

use crate::{
    error::OptionError,
    iter::{IntoIter, Iter, IterMut},
    outcome::Outcome,
};

/// An optional value that carries an extra payload alongside it.
///
/// The extra payload `X` is never looked at by the combinators. It is handed to
/// every caller callback as the trailing argument, so a chain can reach context
/// beyond the wrapped value. Use a tuple for several values and `()` for none.
///
/// ```
/// use maybe::Maybe;
///
/// let greeting = Maybe::present("foo")
///     .map(|v, _| format!("{v}bar"))
///     .unwrap();
/// assert_eq!(greeting, "foobar");
///
/// let fallback = Maybe::<&str>::absent()
///     .with(("a", "b"))
///     .map_or_else(|(a, b)| format!("{a}{b}"), |v, _| v.to_string());
/// assert_eq!(fallback, "ab");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Maybe<T, X = ()> {
    Absent { extra: X },
    Present { value: T, extra: X },
}

impl<T> Maybe<T> {
    #[must_use]
    pub const fn present(value: T) -> Self {
        Self::Present { value, extra: () }
    }
    #[must_use]
    pub const fn absent() -> Self {
        Self::Absent { extra: () }
    }
}

impl<T, X> Maybe<T, X> {
    #[must_use]
    pub const fn present_with(value: T, extra: X) -> Self {
        Self::Present { value, extra }
    }
    #[must_use]
    pub const fn absent_with(extra: X) -> Self {
        Self::Absent { extra }
    }

    #[must_use]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present { .. })
    }
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent { .. })
    }
    #[must_use]
    pub fn is_present_and(&self, f: impl FnOnce(&T, &X) -> bool) -> bool {
        match self {
            Self::Absent { .. } => false,
            Self::Present { value, extra } => f(value, extra),
        }
    }

    #[must_use]
    pub const fn extra(&self) -> &X {
        match self {
            Self::Absent { extra } | Self::Present { extra, .. } => extra,
        }
    }
    #[must_use]
    pub fn extra_mut(&mut self) -> &mut X {
        match self {
            Self::Absent { extra } | Self::Present { extra, .. } => extra,
        }
    }
    #[must_use]
    pub fn into_extra(self) -> X {
        match self {
            Self::Absent { extra } | Self::Present { extra, .. } => extra,
        }
    }
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Absent { .. } => None,
            Self::Present { value, .. } => Some(value),
        }
    }

    #[must_use]
    pub const fn as_ref(&self) -> Maybe<&T, &X> {
        match self {
            Self::Absent { extra } => Maybe::Absent { extra },
            Self::Present { value, extra } => Maybe::Present { value, extra },
        }
    }
    #[must_use]
    pub fn as_mut(&mut self) -> Maybe<&mut T, &mut X> {
        match self {
            Self::Absent { extra } => Maybe::Absent { extra },
            Self::Present { value, extra } => Maybe::Present { value, extra },
        }
    }

    /// Returns the value, or hands back `err` untouched
    pub fn expect<E>(self, err: E) -> Result<T, E> {
        match self {
            Self::Absent { .. } => Err(err),
            Self::Present { value, .. } => Ok(value),
        }
    }

    /// # Panics
    ///
    /// If the value is absent.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Absent { .. } => panic!("{}", OptionError::Unwrap),
            Self::Present { value, .. } => value,
        }
    }
    pub fn try_unwrap(self) -> Result<T, OptionError> {
        self.expect(OptionError::Unwrap)
    }
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Absent { .. } => default,
            Self::Present { value, .. } => value,
        }
    }
    pub fn unwrap_or_else(self, f: impl FnOnce(&X) -> T) -> T {
        match self {
            Self::Absent { extra } => f(&extra),
            Self::Present { value, .. } => value,
        }
    }
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(|_| T::default())
    }

    pub fn inspect(self, f: impl FnOnce(&T, &X)) -> Self {
        if let Self::Present { value, extra } = &self {
            f(value, extra);
        }
        self
    }

    /// An absent value keeps its current extra payload.
    /// A present one is rebuilt with a default payload, hence `X: Default`;
    /// see [`Maybe::map_keep_extra`] for payloads without a default.
    pub fn map<U>(self, f: impl FnOnce(T, &X) -> U) -> Maybe<U, X>
    where
        X: Default,
    {
        match self {
            Self::Absent { extra } => Maybe::Absent { extra },
            Self::Present { value, extra } => Maybe::Present {
                value: f(value, &extra),
                extra: X::default(),
            },
        }
    }
    /// Like [`Maybe::map`], but both variants keep their extra payload
    pub fn map_keep_extra<U>(self, f: impl FnOnce(T, &X) -> U) -> Maybe<U, X> {
        match self {
            Self::Absent { extra } => Maybe::Absent { extra },
            Self::Present { value, extra } => Maybe::Present {
                value: f(value, &extra),
                extra,
            },
        }
    }
    pub fn map_or<U>(self, default: U, f: impl FnOnce(T, &X) -> U) -> U {
        match self {
            Self::Absent { .. } => default,
            Self::Present { value, extra } => f(value, &extra),
        }
    }
    pub fn map_or_else<U>(self, default: impl FnOnce(&X) -> U, f: impl FnOnce(T, &X) -> U) -> U {
        match self {
            Self::Absent { extra } => default(&extra),
            Self::Present { value, extra } => f(value, &extra),
        }
    }

    pub fn ok_or<E>(self, err: E) -> Outcome<T, E, X> {
        match self {
            Self::Absent { extra } => Outcome::Err { error: err, extra },
            Self::Present { value, extra } => Outcome::Ok { value, extra },
        }
    }
    pub fn ok_or_else<E>(self, f: impl FnOnce(&X) -> E) -> Outcome<T, E, X> {
        match self {
            Self::Absent { extra } => Outcome::Err {
                error: f(&extra),
                extra,
            },
            Self::Present { value, extra } => Outcome::Ok { value, extra },
        }
    }

    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        match self {
            Self::Absent { .. } => Iter::new(None),
            Self::Present { value, .. } => Iter::new(Some(value)),
        }
    }
    #[must_use]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        match self {
            Self::Absent { .. } => IterMut::new(None),
            Self::Present { value, .. } => IterMut::new(Some(value)),
        }
    }

    pub fn and<U>(self, optb: Maybe<U, X>) -> Maybe<U, X> {
        match self {
            Self::Absent { extra } => Maybe::Absent { extra },
            Self::Present { .. } => optb,
        }
    }
    pub fn and_then<U>(self, f: impl FnOnce(T, &X) -> Maybe<U, X>) -> Maybe<U, X> {
        match self {
            Self::Absent { extra } => Maybe::Absent { extra },
            Self::Present { value, extra } => f(value, &extra),
        }
    }
    /// A rejected value becomes absent with a default payload, hence
    /// `X: Default`
    pub fn filter(self, predicate: impl FnOnce(&T, &X) -> bool) -> Self
    where
        X: Default,
    {
        match self {
            Self::Present { value, extra } => {
                if predicate(&value, &extra) {
                    return Self::Present { value, extra };
                }
                Self::Absent {
                    extra: X::default(),
                }
            }
            absent @ Self::Absent { .. } => absent,
        }
    }
    pub fn or(self, optb: Self) -> Self {
        match self {
            Self::Absent { .. } => optb,
            present @ Self::Present { .. } => present,
        }
    }
    pub fn or_else(self, f: impl FnOnce(&X) -> Self) -> Self {
        match self {
            Self::Absent { extra } => f(&extra),
            present @ Self::Present { .. } => present,
        }
    }
    #[must_use]
    pub fn xor(self, optb: Self) -> Self
    where
        X: Default,
    {
        match (self, optb) {
            (present @ Self::Present { .. }, Self::Absent { .. })
            | (Self::Absent { .. }, present @ Self::Present { .. }) => present,
            (absent @ Self::Absent { .. }, Self::Absent { .. }) => absent,
            (Self::Present { .. }, Self::Present { .. }) => Self::Absent {
                extra: X::default(),
            },
        }
    }
    /// The result keeps `self`'s payload
    pub fn zip<U, Y>(self, other: Maybe<U, Y>) -> Maybe<(T, U), X> {
        match (self, other) {
            (Self::Present { value, extra }, Maybe::Present { value: u, .. }) => Maybe::Present {
                value: (value, u),
                extra,
            },
            (Self::Absent { extra } | Self::Present { extra, .. }, _) => Maybe::Absent { extra },
        }
    }

    /// Replaces the extra payload wholesale
    pub fn with<Y>(self, extra: Y) -> Maybe<T, Y> {
        match self {
            Self::Absent { .. } => Maybe::Absent { extra },
            Self::Present { value, .. } => Maybe::Present { value, extra },
        }
    }
    pub fn set_extra(&mut self, extra: X) -> &mut Self {
        *self.extra_mut() = extra;
        self
    }

    /// Moves the value out and leaves an absent value with the same payload
    pub fn take(&mut self) -> Option<T>
    where
        X: Default,
    {
        let extra = mem::take(self.extra_mut());
        match mem::replace(self, Self::Absent { extra }) {
            Self::Absent { .. } => None,
            Self::Present { value, .. } => Some(value),
        }
    }
    pub fn replace(&mut self, value: T) -> Option<T>
    where
        X: Default,
    {
        let old = self.take();
        let extra = mem::take(self.extra_mut());
        *self = Self::Present { value, extra };
        old
    }
}

impl<T: Copy, X> Maybe<&T, X> {
    #[must_use]
    pub fn copied(self) -> Maybe<T, X> {
        match self {
            Self::Absent { extra } => Maybe::Absent { extra },
            Self::Present { value, extra } => Maybe::Present {
                value: *value,
                extra,
            },
        }
    }
}
impl<T: Clone, X> Maybe<&T, X> {
    #[must_use]
    pub fn cloned(self) -> Maybe<T, X> {
        match self {
            Self::Absent { extra } => Maybe::Absent { extra },
            Self::Present { value, extra } => Maybe::Present {
                value: value.clone(),
                extra,
            },
        }
    }
}

impl<T, X> Maybe<Maybe<T, X>, X> {
    #[must_use]
    pub fn flatten(self) -> Maybe<T, X> {
        self.and_then(|inner, _| inner)
    }
}

impl<T, X: Default> Default for Maybe<T, X> {
    fn default() -> Self {
        Self::Absent {
            extra: X::default(),
        }
    }
}

impl<T, X: Default> From<Option<T>> for Maybe<T, X> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Present {
                value,
                extra: X::default(),
            },
            None => Self::default(),
        }
    }
}
impl<T, X> From<Maybe<T, X>> for Option<T> {
    fn from(value: Maybe<T, X>) -> Self {
        value.into_option()
    }
}

impl<T, X> IntoIterator for Maybe<T, X> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.into_option())
    }
}
impl<'a, T, X> IntoIterator for &'a Maybe<T, X> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
impl<'a, T, X> IntoIterator for &'a mut Maybe<T, X> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}


#[cfg(feature = "nightly")]
#[cfg(test)]
#[bench]
fn bench_pipeline(bencher: &mut test::Bencher) {
    use test::black_box;
    bencher.iter(|| {
        for i in 0..1024_u32 {
            let m = if i % 3 == 0 {
                Maybe::absent_with((i,))
            } else {
                Maybe::present_with(i, (i,))
            };
            let out = m
                .map(|v, (x,)| v.wrapping_add(*x))
                .filter(|v, _| v % 2 == 0)
                .or_else(|(x,)| Maybe::present_with(*x, (*x,)))
                .unwrap_or(0);
            black_box(out);
        }
    });
}
