//! Higher-order map, zip and reduce
//!
//! Each combinator takes the operator first and returns a function over
//! sequences. Sequences are anything implementing `IntoIterator`; `map` and
//! `zip_combine` are lazy and work on infinite inputs.

use std::iter::{FusedIterator, Map};

/// Lift a unary operator over a sequence.
///
/// The returned function yields `f(x)` for each element, in order, as the
/// caller pulls from it. Restartable only if the input iterator is `Clone`.
///
/// ```
/// use torchlet::functional::map;
/// use torchlet::ops::neg;
///
/// let negated: Vec<f64> = map(neg)(vec![1.0, -2.0]).collect();
/// assert_eq!(negated, vec![-1.0, 2.0]);
/// ```
pub fn map<I, F>(f: F) -> impl Fn(I) -> Map<I::IntoIter, F>
where
    I: IntoIterator,
    F: Fn(I::Item) -> I::Item + Clone,
{
    move |xs: I| xs.into_iter().map(f.clone())
}

/// Lift a fallible unary operator over a sequence.
///
/// Yields one `Result` per element. Collecting into `Result<Vec<_>, _>`
/// stops at the first error and returns it unchanged.
pub fn try_map<I, F, E>(f: F) -> impl Fn(I) -> Map<I::IntoIter, F>
where
    I: IntoIterator,
    F: Fn(I::Item) -> Result<I::Item, E> + Clone,
{
    move |xs: I| xs.into_iter().map(f.clone())
}

/// Lift a binary operator over two sequences, pairwise.
///
/// Stops at the end of the shorter sequence.
///
/// ```
/// use torchlet::functional::zip_combine;
/// use torchlet::ops::mul;
///
/// let out: Vec<f64> = zip_combine(mul)(vec![1.0, 2.0, 3.0], vec![4.0, 5.0]).collect();
/// assert_eq!(out, vec![4.0, 10.0]);
/// ```
pub fn zip_combine<A, B, F>(f: F) -> impl Fn(A, B) -> ZipWith<A::IntoIter, B::IntoIter, F>
where
    A: IntoIterator,
    B: IntoIterator<Item = A::Item>,
    F: Fn(A::Item, A::Item) -> A::Item + Clone,
{
    move |xs: A, ys: B| ZipWith::new(xs.into_iter(), ys.into_iter(), f.clone())
}

/// Lift a fallible binary operator over two sequences, pairwise.
///
/// Typical use is a backward form over inputs and upstream gradients:
/// `try_zip_combine(log_back)(xs, grads)`.
pub fn try_zip_combine<A, B, F, E>(f: F) -> impl Fn(A, B) -> ZipWith<A::IntoIter, B::IntoIter, F>
where
    A: IntoIterator,
    B: IntoIterator<Item = A::Item>,
    F: Fn(A::Item, A::Item) -> Result<A::Item, E> + Clone,
{
    move |xs: A, ys: B| ZipWith::new(xs.into_iter(), ys.into_iter(), f.clone())
}

/// Left fold with a binary operator and a starting accumulator.
///
/// `acc = start; for x in xs { acc = f(acc, x) }`. An empty sequence
/// returns `start`. Application order is strictly left to right.
///
/// ```
/// use torchlet::functional::reduce;
/// use torchlet::ops::add;
///
/// assert_eq!(reduce(add, 0.0)(vec![1.0, 2.0, 3.0, 4.0]), 10.0);
/// ```
pub fn reduce<I, T, F>(f: F, start: T) -> impl Fn(I) -> T
where
    I: IntoIterator<Item = T>,
    T: Clone,
    F: Fn(T, T) -> T,
{
    move |xs: I| xs.into_iter().fold(start.clone(), &f)
}

/// Pairwise combination of two iterators, produced by [`zip_combine`]
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct ZipWith<A, B, F> {
    a: A,
    b: B,
    f: F,
}

impl<A, B, F> ZipWith<A, B, F> {
    fn new(a: A, b: B, f: F) -> Self {
        Self { a, b, f }
    }
}

impl<A, B, F, R> Iterator for ZipWith<A, B, F>
where
    A: Iterator,
    B: Iterator,
    F: Fn(A::Item, B::Item) -> R,
{
    type Item = R;

    #[inline]
    fn next(&mut self) -> Option<R> {
        let x = self.a.next()?;
        let y = self.b.next()?;
        Some((self.f)(x, y))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (a_lo, a_hi) = self.a.size_hint();
        let (b_lo, b_hi) = self.b.size_hint();
        let hi = match (a_hi, b_hi) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (Some(a), None) => Some(a),
            (None, hi) => hi,
        };
        (a_lo.min(b_lo), hi)
    }
}

impl<A, B, F, R> FusedIterator for ZipWith<A, B, F>
where
    A: FusedIterator,
    B: FusedIterator,
    F: Fn(A::Item, B::Item) -> R,
{
}
