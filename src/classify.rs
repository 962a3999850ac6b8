use crate::{
    maybe::Maybe,
    ops::{empty::Emptyable, keyed::Keyed, opt::Opt},
};

impl<T> Maybe<T> {
    /// Present iff `x` holds something
    ///
    /// A held [`Value::Null`](crate::Value::Null) still counts as something;
    /// use [`Maybe::from_nullable_value`] to treat it as nothing.
    pub fn from_nullable(x: impl Opt<T>) -> Self {
        let x: Option<T> = x.into();
        x.into()
    }

    /// Present iff `x` is not loosely empty, see [`Emptyable`]
    pub fn from_emptyable(x: T) -> Self
    where
        T: Emptyable,
    {
        if x.is_empty_value() {
            return Self::absent();
        }
        Self::present(x)
    }

    /// The first item of `iterable`, if it yields any
    pub fn from_first(iterable: impl IntoIterator<Item = T>) -> Self {
        iterable.into_iter().next().into()
    }
}

impl<'a, V> Maybe<&'a V> {
    /// Present iff `key` exists in `coll`, whatever is stored under it
    pub fn from_key<C, Q>(coll: &'a C, key: &Q) -> Self
    where
        C: Keyed<Q, Value = V> + ?Sized,
        Q: ?Sized,
    {
        coll.get_keyed(key).into()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, HashMap};

    use super::*;

    #[test]
    fn test_from_nullable() {
        assert_eq!(Maybe::from_nullable(Some("foo")), Maybe::present("foo"));
        assert_eq!(Maybe::<&str>::from_nullable(None), Maybe::absent());
        assert_eq!(Maybe::from_nullable(Some(0)).unwrap(), 0);
        let inner = Maybe::present_with(1, ("x",));
        assert_eq!(Maybe::from_nullable(inner), Maybe::present(1));
    }

    #[test]
    fn test_from_key() {
        let map = HashMap::from([("bar", "foo")]);
        assert_eq!(Maybe::from_key(&map, &"bar"), Maybe::present(&"foo"));
        assert!(Maybe::from_key(&map, &"foo").is_absent());

        let empty: HashMap<&str, u8> = HashMap::new();
        assert!(Maybe::from_key(&empty, &"missing").is_absent());
    }

    #[test]
    fn test_from_key_stored_none() {
        let map = BTreeMap::from([(String::from("k"), None::<u8>)]);
        let got = Maybe::from_key(&map, "k");
        assert!(got.is_present());
        assert_eq!(got.copied(), Maybe::present(None));
    }

    #[test]
    fn test_from_key_index() {
        let list = ["a", "b"];
        assert_eq!(Maybe::from_key(&list, &1).copied(), Maybe::present("b"));
        assert!(Maybe::from_key(&list, &2).is_absent());
    }

    #[test]
    fn test_from_emptyable_absent() {
        assert!(Maybe::from_emptyable("").is_absent());
        assert!(Maybe::from_emptyable(None::<&str>).is_absent());
        assert!(Maybe::from_emptyable(false).is_absent());
        assert!(Maybe::from_emptyable(0).is_absent());
        assert!(Maybe::from_emptyable("0").is_absent());
        assert!(Maybe::from_emptyable(Vec::<&str>::new()).is_absent());
    }

    #[test]
    fn test_from_emptyable_present() {
        assert_eq!(Maybe::from_emptyable(vec!["x"]), Maybe::present(vec!["x"]));
        assert_eq!(Maybe::from_emptyable(true), Maybe::present(true));
        assert_eq!(Maybe::from_emptyable(1), Maybe::present(1));
        assert_eq!(Maybe::from_emptyable("1"), Maybe::present("1"));
        assert_eq!(Maybe::from_emptyable("foo"), Maybe::present("foo"));
    }

    #[test]
    fn test_from_first() {
        assert!(Maybe::from_first(Vec::<&str>::new()).is_absent());
        assert_eq!(Maybe::from_first(["a", "b"]), Maybe::present("a"));
        assert_eq!(
            Maybe::from_first(["foo", "bar"].iter()),
            Maybe::present(&"foo")
        );
        assert_eq!(Maybe::from_first(3..), Maybe::present(3));
    }

    #[test]
    fn test_from_first_stops_early() {
        let mut pulled = 0;
        let got = Maybe::from_first((0..10).inspect(|_| pulled += 1));
        assert_eq!(got, Maybe::present(0));
        assert_eq!(pulled, 1);
    }
}
