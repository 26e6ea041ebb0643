//! The boundary between panicking code and [`Outcome`] pipelines.
//!
//! A panic escaping the caller-supplied computation is converted into an `Err` exactly once, here. Only the
//! computation runs inside the boundary: wrapping its value into `Ok` happens outside, so a contract violation raised
//! by that construction still propagates.

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::absent::Absent;
use crate::error::ContractError;
use crate::fault::Fault;
use crate::outcome::Outcome;

pub(crate) type PanicPayload = Box<dyn Any + Send + 'static>;

impl Fault {
  /// Creates a fault from the payload of a caught panic.
  ///
  /// String payloads become the message; a [`ContractError`] payload is kept as the cause; a [`Fault`] payload is
  /// returned as is.
  pub fn from_panic(payload: PanicPayload) -> Self {
    let payload = match payload.downcast::<Fault>() {
      Ok(fault) => return *fault,
      Err(payload) => payload,
    };
    let payload = match payload.downcast::<ContractError>() {
      Ok(error) => return Fault::from_error(*error),
      Err(payload) => payload,
    };
    if let Some(message) = payload.downcast_ref::<&'static str>() {
      Fault::new(*message)
    } else if let Some(message) = payload.downcast_ref::<String>() {
      Fault::new(message.clone())
    } else {
      Fault::new("panicked with a non-string payload")
    }
  }
}

/// Settles the result of running a computation inside the boundary.
#[track_caller]
pub(crate) fn settle<T, E>(result: Result<T, PanicPayload>, map_fault: impl FnOnce(Fault) -> E) -> Outcome<T, E> where
  T: Absent,
  E: Absent,
{
  match result {
    Ok(value) => Outcome::ok(value),
    Err(payload) => {
      let fault = Fault::from_panic(payload);
      tracing::debug!(%fault, "converted panic into an error outcome");
      Outcome::err(map_fault(fault))
    }
  }
}

impl<T, E> Outcome<T, E> {
  /// Runs `f`, converting a panic raised by it into an `Err` through `map_fault`.
  ///
  /// `map_fault` is the explicit mapping from the caught [`Fault`] to the error type of the outcome.
  #[track_caller]
  pub fn try_run(f: impl FnOnce() -> T, map_fault: impl FnOnce(Fault) -> E) -> Self where
    T: Absent,
    E: Absent,
  {
    settle(catch_unwind(AssertUnwindSafe(f)), map_fault)
  }
}

impl<T> Outcome<T, Fault> {
  /// Runs `f`, converting a panic raised by it into an `Err` holding the caught [`Fault`].
  #[track_caller]
  pub fn try_run_fault(f: impl FnOnce() -> T) -> Self where
    T: Absent,
  {
    Self::try_run(f, |fault| fault)
  }
}
