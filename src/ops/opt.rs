use crate::maybe::Maybe;

/// Anything that is either a value or nothing
pub trait Opt<T>: From<Option<T>> + Into<Option<T>> {
    fn none() -> Self;
    fn some(v: T) -> Self;
    fn get(&self) -> Option<&T>;
    fn take(&mut self) -> Option<T>;
    fn map<U>(mut self, f: impl FnOnce(T) -> U) -> Option<U> {
        let o = self.take();
        o.map(f)
    }
}

impl<T> Opt<T> for Option<T> {
    fn none() -> Self {
        None
    }
    fn some(v: T) -> Self {
        Some(v)
    }
    fn get(&self) -> Option<&T> {
        self.as_ref()
    }
    fn take(&mut self) -> Option<T> {
        Option::take(self)
    }
}

impl<T, X: Default> Opt<T> for Maybe<T, X> {
    fn none() -> Self {
        Self::default()
    }
    fn some(v: T) -> Self {
        Self::Present {
            value: v,
            extra: X::default(),
        }
    }
    fn get(&self) -> Option<&T> {
        self.iter().next()
    }
    fn take(&mut self) -> Option<T> {
        Maybe::take(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bump<O: Opt<u32>>(mut o: O) -> O {
        match o.take() {
            Some(v) => O::some(v + 1),
            None => O::none(),
        }
    }

    #[test]
    fn test_generic_over_both() {
        assert_eq!(bump(Some(1)), Some(2));
        assert_eq!(bump(None::<u32>), None);
        assert_eq!(bump(Maybe::present(1)), Maybe::present(2));
        assert_eq!(
            bump(Maybe::<u32, (u8,)>::absent_with((3,))),
            Maybe::absent_with((0,))
        );
        assert_eq!(Opt::get(&Maybe::present(4)), Some(&4));
        assert_eq!(Opt::map(Maybe::present(4), |v| v * 2), Some(8));
    }
}
