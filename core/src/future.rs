//! Asynchronous counterpart of the [catch boundary](crate::catch): awaiting a future and packaging its outcome.
//!
//! The produced [`Outcome`] is always fully resolved; cancellation and timeouts stay with the caller that drives the
//! future.

use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;

use crate::absent::Absent;
use crate::catch::settle;
use crate::fault::Fault;
use crate::outcome::Outcome;

/// Awaits `future`, converting a panic raised while polling it into an `Err` through `map_fault`.
pub async fn try_run_future<F, E>(future: F, map_fault: impl FnOnce(Fault) -> E) -> Outcome<F::Output, E> where
  F: Future,
  F::Output: Absent,
  E: Absent,
{
  let result = AssertUnwindSafe(future).catch_unwind().await;
  settle(result, map_fault)
}

/// Awaits `future`, converting a panic raised while polling it into an `Err` holding the caught [`Fault`].
pub async fn try_run_future_fault<F>(future: F) -> Outcome<F::Output, Fault> where
  F: Future,
  F::Output: Absent,
{
  try_run_future(future, |fault| fault).await
}

pub trait OutcomeFutureExt: Future + Sized {
  fn catch_outcome<E>(self, map_fault: impl FnOnce(Fault) -> E) -> impl Future<Output=Outcome<Self::Output, E>> where
    Self::Output: Absent,
    E: Absent;

  fn catch_fault(self) -> impl Future<Output=Outcome<Self::Output, Fault>> where
    Self::Output: Absent;
}

impl<F: Future> OutcomeFutureExt for F {
  #[inline]
  fn catch_outcome<E>(self, map_fault: impl FnOnce(Fault) -> E) -> impl Future<Output=Outcome<Self::Output, E>> where
    Self::Output: Absent,
    E: Absent,
  {
    try_run_future(self, map_fault)
  }

  #[inline]
  fn catch_fault(self) -> impl Future<Output=Outcome<Self::Output, Fault>> where
    Self::Output: Absent,
  {
    try_run_future_fault(self)
  }
}


#[cfg(test)]
mod tests {
  use futures::executor::block_on;

  use super::*;

  async fn connect(fail: bool) -> i32 {
    if fail { panic!("lost connection") }
    7
  }

  #[test]
  fn resolved_value_becomes_ok() {
    let outcome = block_on(async { 21 * 2 }.catch_fault());
    assert_eq!(outcome, Outcome::ok(42));
  }

  #[test]
  fn panic_while_polling_becomes_err() {
    let outcome: Outcome<i32, String> = block_on(try_run_future(connect(true), |f| f.message().to_owned()));
    assert_eq!(outcome, Outcome::err("lost connection".to_owned()));
    let outcome = block_on(connect(false).catch_outcome(|f| f.message().to_owned()));
    assert_eq!(outcome, Outcome::ok(7));
  }
}
