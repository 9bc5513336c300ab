use super::FixedString;
use crate::{AsUnits, Unit, UnitTraits, internal::impl_cmp};

use core::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

#[cfg(feature = "alloc")]
use alloc::{string::String, vec::Vec};

/// Initial value of [`FixedString::fold_hash`], shared by every capacity.
const HASH_SEED: usize = 0x9e37_79b9;

/// Compares `a` and `b` over their common prefix, then by the unit that
/// follows it in each, where a missing unit acts as the terminator.
fn three_way<C: Unit, T: UnitTraits<C>>(a: &[C], b: &[C]) -> Ordering {
    let common = a.len().min(b.len());
    let prefix = T::compare_units(&a[..common], &b[..common]);
    if prefix.is_ne() {
        return prefix;
    }
    let next_a = a.get(common).copied().unwrap_or(C::NUL);
    let next_b = b.get(common).copied().unwrap_or(C::NUL);
    if T::unit_lt(next_a, next_b) {
        Ordering::Less
    } else if T::unit_lt(next_b, next_a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

impl<C: Unit, const N: usize, T: UnitTraits<C>> FixedString<C, N, T> {
    /// Three-way comparison of the content against a bounded sequence.
    ///
    /// Units are compared through `T` over the common prefix; after that, a
    /// string that ends first orders before its extension.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::cmp::Ordering;
    /// use fixed_string::FixedStr;
    ///
    /// let s = FixedStr::<6>::from("test1");
    /// assert_eq!(s.compare("test2"), Ordering::Less);
    /// assert_eq!(s.compare("test0"), Ordering::Greater);
    /// assert_eq!(s.compare("test11"), Ordering::Less);
    /// assert_eq!(s.compare("test"), Ordering::Greater);
    /// assert_eq!(s.compare(&FixedStr::<32>::from("test1")), Ordering::Equal);
    /// ```
    #[must_use]
    #[inline]
    pub fn compare<S: AsUnits<C>>(&self, other: S) -> Ordering {
        three_way::<C, T>(self.as_units(), other.as_units())
    }

    /// Order-dependent fold of the logical content, independent of capacity.
    ///
    /// Strings that compare equal fold to the same value, whatever their
    /// capacities. [`Hash`] feeds this value to the hasher.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_string::FixedStr;
    ///
    /// let small = FixedStr::<4>::from("key");
    /// let large = FixedStr::<64>::from("key");
    /// assert_eq!(small.fold_hash(), large.fold_hash());
    /// assert_ne!(small.fold_hash(), FixedStr::<4>::from("yek").fold_hash());
    /// ```
    #[must_use]
    #[inline]
    pub fn fold_hash(&self) -> usize {
        self.as_units()
            .iter()
            .fold(HASH_SEED, |acc, &u| acc.wrapping_mul(3) ^ T::hash_unit(u))
    }
}

impl_cmp! {
    [C: Unit, const N: usize, const M: usize, T: UnitTraits<C>]
        FixedString<C, N, T>, FixedString<C, M, T> => |a, b| a.compare(b);

    [C: Unit, const N: usize, T: UnitTraits<C>] FixedString<C, N, T>, [C] => |a, b| a.compare(b);
    [C: Unit, const N: usize, T: UnitTraits<C>] FixedString<C, N, T>, &[C] => |a, b| a.compare(*b);
    [C: Unit, const N: usize, const K: usize, T: UnitTraits<C>] FixedString<C, N, T>, [C; K] => |a, b| a.compare(b);
    [C: Unit, const N: usize, const K: usize, T: UnitTraits<C>] FixedString<C, N, T>, &[C; K] => |a, b| a.compare(*b);
    [const N: usize, T: UnitTraits<u8>] FixedString<u8, N, T>, str => |a, b| a.compare(b);
    [const N: usize, T: UnitTraits<u8>] FixedString<u8, N, T>, &str => |a, b| a.compare(*b);

    [C: Unit, const N: usize, T: UnitTraits<C>] [C], FixedString<C, N, T> => |a, b| b.compare(a).reverse();
    [C: Unit, const N: usize, T: UnitTraits<C>] &[C], FixedString<C, N, T> => |a, b| b.compare(*a).reverse();
    [C: Unit, const N: usize, const K: usize, T: UnitTraits<C>] [C; K], FixedString<C, N, T> => |a, b| b.compare(a).reverse();
    [const N: usize, T: UnitTraits<u8>] str, FixedString<u8, N, T> => |a, b| b.compare(a).reverse();
    [const N: usize, T: UnitTraits<u8>] &str, FixedString<u8, N, T> => |a, b| b.compare(*a).reverse();
}

#[cfg(feature = "alloc")]
impl_cmp! {
    [const N: usize, T: UnitTraits<u8>] FixedString<u8, N, T>, String => |a, b| a.compare(b);
    [C: Unit, const N: usize, T: UnitTraits<C>] FixedString<C, N, T>, Vec<C> => |a, b| a.compare(b);

    [const N: usize, T: UnitTraits<u8>] String, FixedString<u8, N, T> => |a, b| b.compare(a).reverse();
    [C: Unit, const N: usize, T: UnitTraits<C>] Vec<C>, FixedString<C, N, T> => |a, b| b.compare(a).reverse();
}

impl<C: Unit, const N: usize, T: UnitTraits<C>> Eq for FixedString<C, N, T> {}

impl<C: Unit, const N: usize, T: UnitTraits<C>> Ord for FixedString<C, N, T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl<C: Unit, const N: usize, T: UnitTraits<C>> Hash for FixedString<C, N, T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.fold_hash());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AsciiCaseInsensitive, DefaultTraits, FixedStr};

    use alloc::{collections::BTreeSet, vec::Vec};
    use std::collections::HashMap;

    #[test]
    fn relational_operators_across_capacities() {
        let s = FixedStr::<6>::from("test1");
        let shorter = FixedStr::<3>::from("test2");
        let longer = FixedStr::<16>::from("test11");

        assert!(s < FixedStr::<16>::from("test2"));
        assert!(s > FixedStr::<16>::from("test0"));
        assert!(s < longer);
        assert!(longer > s);
        assert!(s > shorter);
        assert!(s == FixedStr::<16>::from("test1"));
        assert!(s != FixedStr::<16>::from("test"));
    }

    #[test]
    fn foreign_left_hand_sides_mirror() {
        let s = FixedStr::<6>::from("test1");
        assert!("test2" > s);
        assert!(*"test0" < s);
        assert!(b"test11"[..] > s);
        assert!(*b"test1" == s);
        assert!(&b"test1"[..] == s);
        assert_eq!(s.partial_cmp(&"test0"), Some(Ordering::Greater));
    }

    #[test]
    fn prefix_orders_first() {
        assert_eq!(three_way::<u8, DefaultTraits>(b"ab", b"abc"), Ordering::Less);
        assert_eq!(three_way::<u8, DefaultTraits>(b"abc", b"ab"), Ordering::Greater);
        assert_eq!(three_way::<u8, DefaultTraits>(b"", b""), Ordering::Equal);
    }

    #[test]
    fn ord_is_usable_in_sorted_sets() {
        let set: BTreeSet<FixedStr<8>> = ["b", "a", "ab", "a"].into_iter().map(FixedStr::<8>::from).collect();
        let sorted: Vec<_> = set.iter().map(|s| s.to_str().unwrap()).collect();
        assert_eq!(sorted, ["a", "ab", "b"]);
    }

    #[test]
    fn hash_ignores_unused_tail() {
        let mut s = FixedStr::<8>::from("abcdefg");
        s.erase_from(3);
        assert_eq!(s.fold_hash(), FixedStr::<8>::from("abc").fold_hash());

        let mut map = HashMap::new();
        map.insert(FixedStr::<8>::from("key"), 1);
        assert_eq!(map.get(&s), None);
        assert_eq!(map.get(&FixedStr::<8>::from("key")), Some(&1));
    }

    #[test]
    fn case_insensitive_equality_and_hash_agree() {
        let a: FixedString<u8, 8, AsciiCaseInsensitive> = "MiXeD".into();
        let b: FixedString<u8, 16, AsciiCaseInsensitive> = "mixed".into();
        assert!(a == b);
        assert_eq!(a.fold_hash(), b.fold_hash());
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn owned_sequences() {
        use alloc::{string::String, vec};

        let s = FixedStr::<8>::from("abc");
        assert!(s == String::from("abc"));
        assert!(String::from("abd") > s);
        assert!(s < vec![b'b']);
    }
}
