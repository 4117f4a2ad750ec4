//! The sorting machine: a two-phase container with an explicit mode.
//!
//! Elements enter while the machine is in insertion mode. A single,
//! irreversible switch restructures the buffer; after it the machine
//! yields its elements smallest-first under the order it was built with.

use std::fmt;
use std::iter::FusedIterator;
use std::slice;

use crate::error::{MachineError, MachineResult};
use crate::heap;
use crate::order::Order;

/// The lifecycle phase of a [`SortingMachine`].
///
/// A machine starts in [`Mode::Inserting`] and moves to
/// [`Mode::Extracting`] at most once; there is no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Mode {
    /// Accepting elements; extraction operations are rejected.
    Inserting,
    /// Yielding elements in order; insertion operations are rejected.
    Extracting,
}

impl Mode {
    /// True while the machine still accepts elements.
    #[must_use]
    pub const fn is_inserting(self) -> bool {
        matches!(self, Mode::Inserting)
    }

    /// True once the machine yields elements in order.
    #[must_use]
    pub const fn is_extracting(self) -> bool {
        matches!(self, Mode::Extracting)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Inserting => f.write_str("insertion"),
            Mode::Extracting => f.write_str("extraction"),
        }
    }
}

/// A container that accepts elements in any order, then yields them in
/// non-decreasing order under a caller-supplied [`Order`].
///
/// The lifecycle has exactly two phases. A new machine is in insertion
/// mode: [`add`](Self::add) accepts elements and nothing can be read back.
/// [`change_to_extraction_mode`](Self::change_to_extraction_mode) ends
/// that phase for good; afterwards [`remove_first`](Self::remove_first)
/// consumes elements smallest-first and `add` is rejected. The switch is
/// where the ordering work happens: it restructures the buffer in place
/// in O(n) without allocating. Insertion stays O(1) amortized no matter
/// how pathological the order is, and each extraction costs O(log n).
///
/// The order is fixed at construction and never consulted before the mode
/// switch. Elements that compare equal under it are yielded in an
/// unspecified but deterministic sequence.
///
/// Equality (`==`) compares the mode, the order value, and the multiset
/// of held elements. The internal arrangement of the buffer never
/// matters: two machines that received the same elements in different
/// sequences are equal.
///
/// # Examples
///
/// ```
/// use phasesort::{Natural, SortingMachine};
///
/// let mut machine = SortingMachine::new(Natural);
/// machine.add(3)?;
/// machine.add(1)?;
/// machine.add(2)?;
///
/// machine.change_to_extraction_mode()?;
/// assert_eq!(machine.remove_first()?, 1);
/// assert_eq!(machine.remove_first()?, 2);
/// assert_eq!(machine.remove_first()?, 3);
/// assert!(machine.is_empty());
/// # Ok::<(), phasesort::MachineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SortingMachine<T, O> {
    order: O,
    mode: Mode,
    data: Vec<T>,
}

impl<T, O: Order<T>> SortingMachine<T, O> {
    /// Creates an empty machine in insertion mode, owning `order` for the
    /// rest of its life.
    #[must_use]
    pub fn new(order: O) -> Self {
        Self {
            order,
            mode: Mode::Inserting,
            data: Vec::new(),
        }
    }

    /// Like [`new`](Self::new), with room for `capacity` elements before
    /// the buffer has to grow.
    #[must_use]
    pub fn with_capacity(order: O, capacity: usize) -> Self {
        Self {
            order,
            mode: Mode::Inserting,
            data: Vec::with_capacity(capacity),
        }
    }

    /// Accepts `element` into the machine.
    ///
    /// O(1) amortized; the order is not consulted.
    ///
    /// # Errors
    ///
    /// [`MachineError::InvalidState`] if the machine has already switched
    /// to extraction mode. The machine is unchanged and the element is
    /// dropped with the error.
    pub fn add(&mut self, element: T) -> MachineResult<()> {
        if self.mode.is_extracting() {
            return Err(MachineError::InvalidState {
                operation: "add",
                mode: self.mode,
            });
        }
        self.data.push(element);
        Ok(())
    }

    /// Ends the insertion phase, irreversibly.
    ///
    /// Restructures the buffer in place in O(n); no allocation, no copy
    /// of the elements. Valid on an empty machine. Once this returns
    /// `Ok`, [`add`](Self::add) is rejected forever.
    ///
    /// # Errors
    ///
    /// [`MachineError::InvalidState`] if the machine is already in
    /// extraction mode. The machine is unchanged.
    pub fn change_to_extraction_mode(&mut self) -> MachineResult<()> {
        if self.mode.is_extracting() {
            return Err(MachineError::InvalidState {
                operation: "change_to_extraction_mode",
                mode: self.mode,
            });
        }
        heap::build(&mut self.data, &self.order);
        debug_assert!(heap::is_min_heap(&self.data, &self.order));
        self.mode = Mode::Extracting;
        Ok(())
    }

    /// Removes and returns a smallest element under the machine's order.
    ///
    /// O(log n). Among elements that compare equal the choice is
    /// unspecified but deterministic for a given insertion history.
    ///
    /// # Errors
    ///
    /// [`MachineError::InvalidState`] if the machine is still in insertion
    /// mode, [`MachineError::EmptyMachine`] if every element has already
    /// been removed. The machine is unchanged in both cases.
    pub fn remove_first(&mut self) -> MachineResult<T> {
        if self.mode.is_inserting() {
            return Err(MachineError::InvalidState {
                operation: "remove_first",
                mode: self.mode,
            });
        }
        heap::pop(&mut self.data, &self.order).ok_or(MachineError::EmptyMachine)
    }

    /// Borrows the element [`remove_first`](Self::remove_first) would
    /// return next, without removing it.
    ///
    /// # Errors
    ///
    /// Same contract as [`remove_first`](Self::remove_first):
    /// [`MachineError::InvalidState`] in insertion mode,
    /// [`MachineError::EmptyMachine`] when nothing is left.
    pub fn peek_first(&self) -> MachineResult<&T> {
        if self.mode.is_inserting() {
            return Err(MachineError::InvalidState {
                operation: "peek_first",
                mode: self.mode,
            });
        }
        self.data.first().ok_or(MachineError::EmptyMachine)
    }

    /// The machine's current [`Mode`].
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// True until [`change_to_extraction_mode`](Self::change_to_extraction_mode)
    /// succeeds.
    #[must_use]
    pub const fn is_in_insertion_mode(&self) -> bool {
        self.mode.is_inserting()
    }

    /// Borrows the order this machine sorts by.
    ///
    /// Available in both modes; reading it never disturbs the elements.
    #[must_use]
    pub const fn order(&self) -> &O {
        &self.order
    }

    /// The number of elements currently held.
    ///
    /// Grows with [`add`](Self::add), shrinks with
    /// [`remove_first`](Self::remove_first), and is untouched by the mode
    /// switch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when the machine holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The number of elements the buffer can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Visits the held elements in an unspecified order, without
    /// consuming them.
    ///
    /// Works in both modes. The sequence reflects the internal buffer,
    /// not the sorted order; use the by-value iterator or
    /// [`into_sorted_vec`](Self::into_sorted_vec) for sorted output.
    #[must_use]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consumes the machine and returns its elements sorted
    /// non-decreasingly under its order.
    ///
    /// Performs the mode switch first if the machine is still inserting.
    #[must_use]
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }
}

impl<T, O> PartialEq for SortingMachine<T, O>
where
    T: PartialEq,
    O: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.mode == other.mode
            && self.order == other.order
            && multiset_eq(&self.data, &other.data)
    }
}

impl<T: Eq, O: Eq> Eq for SortingMachine<T, O> {}

/// Count-based multiset comparison. Quadratic, but it asks nothing of `T`
/// beyond `PartialEq`, so it works for any element the machine accepts.
fn multiset_eq<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().all(|x| {
        let occurrences = |side: &[T]| side.iter().filter(|&y| y == x).count();
        occurrences(a) == occurrences(b)
    })
}

impl<T, O> Default for SortingMachine<T, O>
where
    O: Order<T> + Default,
{
    fn default() -> Self {
        Self::new(O::default())
    }
}

impl<T, O> FromIterator<T> for SortingMachine<T, O>
where
    O: Order<T> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut machine = Self::default();
        machine.extend(iter);
        machine
    }
}

/// Bulk insertion. Panics if the machine has left insertion mode; use
/// [`SortingMachine::add`] when a fallible insert is needed.
impl<T, O: Order<T>> Extend<T> for SortingMachine<T, O> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        assert!(
            self.mode.is_inserting(),
            "cannot extend a machine in extraction mode"
        );
        self.data.extend(iter);
    }
}

/// By-value iterator over a machine's elements in non-decreasing order.
///
/// Created by consuming a [`SortingMachine`] with `into_iter`. Each call
/// to `next` extracts one minimum, so iteration costs O(log n) per
/// element.
#[derive(Debug, Clone)]
pub struct IntoSortedIter<T, O> {
    order: O,
    data: Vec<T>,
}

impl<T, O: Order<T>> Iterator for IntoSortedIter<T, O> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        heap::pop(&mut self.data, &self.order)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.data.len(), Some(self.data.len()))
    }
}

impl<T, O: Order<T>> ExactSizeIterator for IntoSortedIter<T, O> {}

impl<T, O: Order<T>> FusedIterator for IntoSortedIter<T, O> {}

impl<T, O: Order<T>> IntoIterator for SortingMachine<T, O> {
    type Item = T;
    type IntoIter = IntoSortedIter<T, O>;

    /// Consumes the machine into a sorted iterator, switching modes first
    /// if it was still inserting.
    fn into_iter(mut self) -> Self::IntoIter {
        if self.mode.is_inserting() {
            heap::build(&mut self.data, &self.order);
        }
        IntoSortedIter {
            order: self.order,
            data: self.data,
        }
    }
}

impl<'a, T, O> IntoIterator for &'a SortingMachine<T, O> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    /// Borrowing iteration in an unspecified order; see
    /// [`SortingMachine::iter`].
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

#[cfg(feature = "serde")]
impl<T, O> serde::Serialize for SortingMachine<T, O>
where
    T: serde::Serialize,
    O: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("SortingMachine", 3)?;
        state.serialize_field("order", &self.order)?;
        state.serialize_field("mode", &self.mode)?;
        state.serialize_field("elements", &self.data)?;
        state.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T, O> serde::Deserialize<'de> for SortingMachine<T, O>
where
    T: serde::Deserialize<'de>,
    O: Order<T> + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(rename = "SortingMachine")]
        struct Wire<T, O> {
            order: O,
            mode: Mode,
            elements: Vec<T>,
        }

        let wire = Wire::<T, O>::deserialize(deserializer)?;
        let mut machine = SortingMachine {
            order: wire.order,
            mode: wire.mode,
            data: wire.elements,
        };
        // The wire format carries elements in arbitrary order. Rebuild the
        // heap rather than trusting the sender's layout.
        if machine.mode.is_extracting() {
            heap::build(&mut machine.data, &machine.order);
        }
        Ok(machine)
    }
}
