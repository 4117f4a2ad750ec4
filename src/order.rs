//! Comparator plumbing: the total-preorder capability a machine sorts by.
//!
//! A machine never inspects its elements directly; every ordering decision
//! goes through an [`Order`] value fixed at construction. The trait is the
//! Rust rendition of a two-argument comparator returning a three-way sign.
//! Stock implementations cover the common cases: [`Natural`] for `T: Ord`,
//! [`Reversed`] to flip any order, and [`OrderFn`] to lift a plain function.

use std::cmp::Ordering;

/// A total preorder over `T`, injected into a machine at construction.
///
/// Implementations must satisfy, for all `a`, `b`, `c`:
///
/// - **Totality**: `compare(a, b)` always returns (every pair is comparable).
/// - **Transitivity**: if `compare(a, b) != Greater` and
///   `compare(b, c) != Greater`, then `compare(a, c) != Greater`.
/// - **Antisymmetry is NOT required**: distinct elements may compare
///   [`Equal`](Ordering::Equal); the machine treats them as interchangeable
///   and promises nothing about their relative extraction order.
///
/// The machine assumes these properties from construction and never
/// re-checks them. `compare` must also be pure: a total function of the two
/// borrowed arguments, with no observable side effects and no hidden state.
/// A comparator that violates the contract cannot cause memory unsafety or
/// non-termination, but the extraction order becomes unspecified.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use phasesort::Order;
///
/// /// Orders strings by length only; unequal strings of equal length
/// /// compare `Equal`. A total preorder, not a total order.
/// struct ByLen;
///
/// impl Order<String> for ByLen {
///     fn compare(&self, a: &String, b: &String) -> Ordering {
///         a.len().cmp(&b.len())
///     }
/// }
///
/// assert_eq!(ByLen.compare(&"hi".into(), &"hello".into()), Ordering::Less);
/// assert_eq!(ByLen.compare(&"abc".into(), &"xyz".into()), Ordering::Equal);
/// ```
pub trait Order<T> {
    /// Compares two elements, returning the three-way sign of `a` relative
    /// to `b` under this order.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// The natural order of `T: Ord`.
///
/// Zero-sized; two `Natural` values are always equal, so machines over the
/// natural order compare as having the same comparator.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use phasesort::{Natural, Order};
///
/// assert_eq!(Natural.compare(&3, &7), Ordering::Less);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Natural;

impl<T: Ord> Order<T> for Natural {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Adapter inverting an inner order.
///
/// A machine over `Reversed<O>` extracts greatest-first under `O`. The
/// reverse of a total preorder is itself a total preorder.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use phasesort::{Natural, Order, Reversed};
///
/// assert_eq!(Reversed(Natural).compare(&3, &7), Ordering::Greater);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reversed<O>(
    /// The order being inverted.
    pub O,
);

impl<T, O: Order<T>> Order<T> for Reversed<O> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// Adapter lifting a plain comparison function into an [`Order`].
///
/// The function must uphold the [`Order`] contract. It is shared-borrowed
/// on every decision, so the bound is `Fn`, not `FnMut`: a comparator
/// cannot carry mutable state.
///
/// Two `OrderFn`s wrapping the same function pointer compare equal, so
/// machines built over named functions support `==`. Closures implement no
/// equality, and neither do machines built over them.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use phasesort::{Order, OrderFn};
///
/// fn magnitude(a: &i32, b: &i32) -> Ordering {
///     a.abs().cmp(&b.abs())
/// }
///
/// let order = OrderFn(magnitude as fn(&i32, &i32) -> Ordering);
/// assert_eq!(order.compare(&-9, &4), Ordering::Greater);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderFn<F>(
    /// The comparison function.
    pub F,
);

impl<T, F> Order<T> for OrderFn<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b)
    }
}
