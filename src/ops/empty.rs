use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

/// Loose emptiness: `None`, `false`, zero, `""`, `"0"`, and empty containers
pub trait Emptyable {
    #[must_use]
    fn is_empty_value(&self) -> bool;
}

macro_rules! impl_zero_empty {
    ($($t:ty),* $(,)?) => {
        $(
            impl Emptyable for $t {
                fn is_empty_value(&self) -> bool {
                    num_traits::Zero::is_zero(self)
                }
            }
        )*
    };
}
impl_zero_empty!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

impl Emptyable for bool {
    fn is_empty_value(&self) -> bool {
        !*self
    }
}
impl Emptyable for str {
    fn is_empty_value(&self) -> bool {
        self.is_empty() || self == "0"
    }
}
impl Emptyable for String {
    fn is_empty_value(&self) -> bool {
        self.as_str().is_empty_value()
    }
}
impl<T: Emptyable> Emptyable for Option<T> {
    fn is_empty_value(&self) -> bool {
        self.as_ref().is_none_or(Emptyable::is_empty_value)
    }
}
impl<T: Emptyable + ?Sized> Emptyable for &T {
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}
impl<T: Emptyable + ?Sized> Emptyable for Box<T> {
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}

impl<T> Emptyable for [T] {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}
impl<T, const N: usize> Emptyable for [T; N] {
    fn is_empty_value(&self) -> bool {
        N == 0
    }
}
impl<T> Emptyable for Vec<T> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}
impl<T> Emptyable for VecDeque<T> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}
impl<T, S> Emptyable for HashSet<T, S> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}
impl<T> Emptyable for BTreeSet<T> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}
impl<K, V, S> Emptyable for HashMap<K, V, S> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}
impl<K, V> Emptyable for BTreeMap<K, V> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_scalars() {
        assert!(0_u8.is_empty_value());
        assert!(0.0_f64.is_empty_value());
        assert!((-0.0_f32).is_empty_value());
        assert!(!f64::NAN.is_empty_value());
        assert!(!(-1_i64).is_empty_value());
        assert!(false.is_empty_value());
        assert!(!true.is_empty_value());
    }

    #[test]
    fn test_empty_strings() {
        assert!("".is_empty_value());
        assert!("0".is_empty_value());
        assert!(String::from("0").is_empty_value());
        assert!(!"00".is_empty_value());
        assert!(!" ".is_empty_value());
        assert!(!"0.0".is_empty_value());
    }

    #[test]
    fn test_empty_containers() {
        assert!(Vec::<u8>::new().is_empty_value());
        assert!(![0].is_empty_value());
        assert!([0_u8; 0].is_empty_value());
        assert!(HashMap::<u8, u8>::new().is_empty_value());
        assert!(!BTreeSet::from([1]).is_empty_value());
        assert!(None::<u8>.is_empty_value());
        assert!(Some(0).is_empty_value());
        assert!(!Some(1).is_empty_value());
    }
}
