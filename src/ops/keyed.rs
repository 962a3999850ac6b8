use core::{
    borrow::Borrow,
    hash::{BuildHasher, Hash},
};
use std::collections::{BTreeMap, HashMap, VecDeque};

/// Lookup by key that tells a missing key apart from whatever is stored under it
pub trait Keyed<Q: ?Sized> {
    type Value;
    fn get_keyed(&self, key: &Q) -> Option<&Self::Value>;
    #[must_use]
    fn contains_keyed(&self, key: &Q) -> bool {
        self.get_keyed(key).is_some()
    }
}

impl<K, V, S, Q> Keyed<Q> for HashMap<K, V, S>
where
    K: Borrow<Q> + Hash + Eq,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
{
    type Value = V;
    fn get_keyed(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }
}
impl<K, V, Q> Keyed<Q> for BTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    type Value = V;
    fn get_keyed(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }
}

impl<T> Keyed<usize> for [T] {
    type Value = T;
    fn get_keyed(&self, key: &usize) -> Option<&T> {
        self.get(*key)
    }
}
impl<T, const N: usize> Keyed<usize> for [T; N] {
    type Value = T;
    fn get_keyed(&self, key: &usize) -> Option<&T> {
        self.get(*key)
    }
}
impl<T> Keyed<usize> for Vec<T> {
    type Value = T;
    fn get_keyed(&self, key: &usize) -> Option<&T> {
        self.get(*key)
    }
}
impl<T> Keyed<usize> for VecDeque<T> {
    type Value = T;
    fn get_keyed(&self, key: &usize) -> Option<&T> {
        self.get(*key)
    }
}

#[cfg(feature = "indexmap")]
impl<K, V, S, Q> Keyed<Q> for indexmap::IndexMap<K, V, S>
where
    K: Hash + Eq,
    Q: Hash + indexmap::Equivalent<K> + ?Sized,
    S: BuildHasher,
{
    type Value = V;
    fn get_keyed(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }
}

#[cfg(feature = "hashbrown")]
impl<K, V, S, Q> Keyed<Q> for hashbrown::HashMap<K, V, S>
where
    K: Hash + Eq,
    Q: Hash + hashbrown::Equivalent<K> + ?Sized,
    S: BuildHasher,
{
    type Value = V;
    fn get_keyed(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }
}
