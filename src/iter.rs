use core::iter::FusedIterator;

/// Yields the borrowed value of a [`crate::Maybe`] at most once
#[derive(Debug)]
pub struct Iter<'a, T> {
    next: Option<&'a T>,
}
impl<'a, T> Iter<'a, T> {
    #[must_use]
    pub(crate) const fn new(next: Option<&'a T>) -> Self {
        Self { next }
    }
}
impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { next: self.next }
    }
}
impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<Self::Item> {
        self.next.take()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.next.is_some());
        (n, Some(n))
    }
}
impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.next.take()
    }
}
impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

#[derive(Debug)]
pub struct IterMut<'a, T> {
    next: Option<&'a mut T>,
}
impl<'a, T> IterMut<'a, T> {
    #[must_use]
    pub(crate) const fn new(next: Option<&'a mut T>) -> Self {
        Self { next }
    }
}
impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;
    fn next(&mut self) -> Option<Self::Item> {
        self.next.take()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.next.is_some());
        (n, Some(n))
    }
}
impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.next.take()
    }
}
impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    next: Option<T>,
}
impl<T> IntoIter<T> {
    #[must_use]
    pub(crate) const fn new(next: Option<T>) -> Self {
        Self { next }
    }
}
impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<Self::Item> {
        self.next.take()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.next.is_some());
        (n, Some(n))
    }
}
impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.next.take()
    }
}
impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

#[cfg(test)]
mod tests {
    use crate::Maybe;

    #[test]
    fn test_iter_restartable() {
        let m: Maybe<&str> = Maybe::present("a");
        let iter = m.iter();
        assert_eq!(iter.len(), 1);
        assert_eq!(iter.clone().collect::<Vec<_>>(), [&"a"]);
        assert_eq!(iter.collect::<Vec<_>>(), [&"a"]);
        assert_eq!(m.iter().count(), 1);
        assert_eq!(m.iter().count(), 1);
    }

    #[test]
    fn test_iter_absent() {
        let m: Maybe<&str> = Maybe::absent();
        assert_eq!(m.iter().len(), 0);
        assert!(m.iter().next().is_none());
        assert_eq!(m.into_iter().count(), 0);
    }

    #[test]
    fn test_iter_mut() {
        let mut m: Maybe<u32> = Maybe::present(1);
        for v in &mut m {
            *v += 1;
        }
        assert_eq!(m, Maybe::present(2));
        let mut total = 0;
        for v in &m {
            total += v;
        }
        assert_eq!(total, 2);
    }

    #[test]
    fn test_into_iter_chain() {
        let xs: Vec<u32> = vec![1, 2];
        let all: Vec<u32> = xs
            .into_iter()
            .chain(Maybe::<u32>::present(3))
            .chain(Maybe::<u32>::absent())
            .collect();
        assert_eq!(all, [1, 2, 3]);
    }
}
