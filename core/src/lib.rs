//! Algebraic value wrappers: [`Maybe`] for presence/absence and [`Outcome`] for success/failure.
//!
//! Absence and failure are data that flow through combinators (`map`, `and_then`, `or_else`, `zip`, ...). Only the
//! explicitly named extraction methods (`unwrap`, `expect`, ...) and the construction of a present variant from an
//! [absent](Absent) value raise, with a [`ContractError`] naming the misuse.

pub mod absent;
pub mod unit;
pub mod fault;
pub mod error;

pub mod maybe;
pub mod outcome;
pub mod interop;
pub mod sequence;
pub mod validate;
pub mod catch;

#[cfg(feature = "future")]
pub mod future;
#[cfg(feature = "diagnostics")]
pub mod diagnostics;

pub use absent::{Absent, Present};
pub use error::{ContractError, ContractErrorKind, Detail, ErrorDetail};
pub use fault::Fault;
pub use maybe::Maybe;
pub use outcome::Outcome;
pub use sequence::{MaybeIterExt, OutcomeIterExt};
pub use unit::Unit;
