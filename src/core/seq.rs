// SliceUtils - core/seq.rs
//
// Generic sequence helpers: filter, indexed map, in-place push.
// Core layer: pure logic, no I/O. Inputs are borrowed and never mutated,
// except the explicit `&mut Vec<T>` target of `push`.

use std::fmt;
use std::str::FromStr;

/// Capacity reservation policy applied by [`push_with`] before appending.
///
/// Growth affects capacity only; the resulting contents are identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Growth {
    /// `Vec::reserve`: geometric growth, amortised O(1) append.
    #[default]
    Amortized,
    /// `Vec::reserve_exact`: request exactly the required capacity. The
    /// allocator may still hand back more.
    Exact,
}

impl fmt::Display for Growth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Amortized => f.write_str("amortized"),
            Self::Exact => f.write_str("exact"),
        }
    }
}

impl FromStr for Growth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "amortized" | "amortised" => Ok(Self::Amortized),
            "exact" => Ok(Self::Exact),
            other => Err(format!(
                "unknown growth policy '{other}', expected \"amortized\" or \"exact\""
            )),
        }
    }
}

/// Return a new `Vec` holding, in their original order, the elements of
/// `seq` for which `predicate` returns true.
///
/// The result is an order-preserving subsequence of `seq`; `seq` itself is
/// left untouched.
///
/// ```
/// use sliceutils::core::seq::filter;
///
/// let evens = filter(&[1, 2, 3, 4, 5], |n| n % 2 == 0);
/// assert_eq!(evens, vec![2, 4]);
/// ```
pub fn filter<T, P>(seq: &[T], mut predicate: P) -> Vec<T>
where
    T: PartialEq + Clone,
    P: FnMut(&T) -> bool,
{
    let kept: Vec<T> = seq.iter().filter(|item| predicate(*item)).cloned().collect();
    tracing::trace!(input = seq.len(), kept = kept.len(), "filter");
    kept
}

/// Return a new `Vec` where element `i` is `transform(&seq[i], i, seq)`.
///
/// The transform sees the whole original sequence, which allows
/// neighbour-dependent results such as deltas or running sums. The output
/// type `U` is independent of the element type.
///
/// ```
/// use sliceutils::core::seq::map;
///
/// let doubled = map(&[1, 2, 3], |n, _, _| n * 2);
/// assert_eq!(doubled, vec![2, 4, 6]);
///
/// let labels = map(&[10, 20], |n, i, _| format!("{i}={n}"));
/// assert_eq!(labels, vec!["0=10", "1=20"]);
/// ```
pub fn map<T, U, F>(seq: &[T], mut transform: F) -> Vec<U>
where
    T: PartialEq,
    F: FnMut(&T, usize, &[T]) -> U,
{
    let mapped: Vec<U> = seq
        .iter()
        .enumerate()
        .map(|(index, item)| transform(item, index, seq))
        .collect();
    tracing::trace!(len = mapped.len(), "map");
    mapped
}

/// Fallible [`map`]: stops at the first `Err` returned by `transform` and
/// propagates it. On success the output has the same length as `seq`.
pub fn try_map<T, U, E, F>(seq: &[T], mut transform: F) -> Result<Vec<U>, E>
where
    T: PartialEq,
    F: FnMut(&T, usize, &[T]) -> Result<U, E>,
{
    let mapped = seq
        .iter()
        .enumerate()
        .map(|(index, item)| transform(item, index, seq))
        .collect::<Result<Vec<U>, E>>()?;
    tracing::trace!(len = mapped.len(), "try_map");
    Ok(mapped)
}

/// Append every element of `elems` to the end of `seq`, in order.
///
/// Existing elements keep their positions; an empty `elems` is a no-op.
/// Uses [`Growth::Amortized`].
///
/// ```
/// use sliceutils::core::seq::push;
///
/// let mut seq = vec![1, 2, 3];
/// push(&mut seq, [4, 5]);
/// assert_eq!(seq, vec![1, 2, 3, 4, 5]);
/// ```
pub fn push<T, I>(seq: &mut Vec<T>, elems: I)
where
    T: PartialEq,
    I: IntoIterator<Item = T>,
{
    push_with(seq, elems, Growth::Amortized);
}

/// [`push`] with an explicit capacity [`Growth`] policy.
///
/// Reservation uses the iterator's lower size bound.
pub fn push_with<T, I>(seq: &mut Vec<T>, elems: I, growth: Growth)
where
    T: PartialEq,
    I: IntoIterator<Item = T>,
{
    let elems = elems.into_iter();
    let (additional, _) = elems.size_hint();
    match growth {
        Growth::Amortized => seq.reserve(additional),
        Growth::Exact => seq.reserve_exact(additional),
    }

    let before = seq.len();
    seq.extend(elems);
    tracing::trace!(
        before,
        appended = seq.len() - before,
        capacity = seq.capacity(),
        %growth,
        "push"
    );
}

/// Variadic form of [`push`]: `push!(&mut seq, a, b, c)`.
///
/// `push!(&mut seq)` with no elements leaves `seq` unchanged.
///
/// ```
/// use sliceutils::push;
///
/// let mut seq = vec![1, 2, 3];
/// push!(&mut seq, 4, 5);
/// assert_eq!(seq, vec![1, 2, 3, 4, 5]);
/// ```
#[macro_export]
macro_rules! push {
    ($seq:expr $(, $elem:expr)* $(,)?) => {
        $crate::core::seq::push($seq, [$($elem),*])
    };
}
