//! # Phasesort - Two-Phase Sorting Machines
//!
//! A [`SortingMachine`] accepts elements in arbitrary order while it is in
//! insertion mode. A single irreversible switch ends that phase; afterwards
//! the machine yields its elements in non-decreasing order under a
//! caller-supplied [`Order`]. All comparison work is deferred: insertion is
//! O(1) amortized no matter how expensive the order is. The switch
//! restructures the buffer in place in O(n) without allocating, and each
//! extraction then costs O(log n).
//!
//! ## Core Concepts
//!
//! - **Machine**: A container whose permitted operations depend on its [`Mode`]
//! - **Mode**: The lifecycle phase, insertion or extraction; the switch is one-way
//! - **Order**: A total preorder over the element type, fixed at construction
//! - **Contract errors**: Calling an operation in the wrong mode returns a
//!   typed [`MachineError`] and leaves the machine untouched
//!
//! ## Usage
//!
//! ```rust
//! use phasesort::{Natural, SortingMachine};
//!
//! let mut machine = SortingMachine::new(Natural);
//! machine.add("pear")?;
//! machine.add("apple")?;
//! machine.add("quince")?;
//!
//! machine.change_to_extraction_mode()?;
//!
//! assert_eq!(machine.remove_first()?, "apple");
//! assert_eq!(machine.remove_first()?, "pear");
//! assert_eq!(machine.remove_first()?, "quince");
//! # Ok::<(), phasesort::MachineError>(())
//! ```
//!
//! Orders are plain values implementing [`Order`]; [`Natural`] wraps a
//! type's `Ord`, [`Reversed`] flips any order, and [`OrderFn`] lifts a
//! comparison closure. The `serde` feature adds serialization for machines
//! whose element and order types support it.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod machine;
pub mod order;

// Heap algorithms backing the extraction phase; not part of the public API.
mod heap;

// Re-export primary types at crate root for convenience
pub use error::{MachineError, MachineResult};
pub use machine::{IntoSortedIter, Mode, SortingMachine};
pub use order::{Natural, Order, OrderFn, Reversed};
