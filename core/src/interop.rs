//! Conversions between [`Maybe`] and [`Outcome`].
//!
//! The two transposes are mutual inverses:
//!
//! | `Maybe<Outcome<T, E>>` | `Outcome<Maybe<T>, E>` |
//! |------------------------|------------------------|
//! | `None`                 | `Ok(None)`             |
//! | `Some(Ok(v))`          | `Ok(Some(v))`          |
//! | `Some(Err(e))`         | `Err(e)`               |

use crate::maybe::Maybe;
use crate::outcome::Outcome;

impl<T> Maybe<T> {
  /// `Some(v)` becomes `Ok(v)`, `None` becomes `Err(error)`.
  #[inline]
  pub fn ok_or<E>(self, error: E) -> Outcome<T, E> { Outcome::wrap(self.into_std().ok_or(error)) }

  /// Like [`ok_or`](Self::ok_or), but the error is only computed for `None`.
  #[inline]
  pub fn ok_or_else<E>(self, error: impl FnOnce() -> E) -> Outcome<T, E> {
    Outcome::wrap(self.into_std().ok_or_else(error))
  }
}

impl<T, E> Outcome<T, E> {
  /// Keeps the value, discarding the error: `Ok(v)` becomes `Some(v)`, `Err` becomes `None`.
  #[inline]
  pub fn into_ok(self) -> Maybe<T> { Maybe::wrap(self.into_std().ok()) }

  /// Keeps the error, discarding the value: `Err(e)` becomes `Some(e)`, `Ok` becomes `None`.
  #[inline]
  pub fn into_err(self) -> Maybe<E> { Maybe::wrap(self.into_std().err()) }
}

impl<T, E> Maybe<Outcome<T, E>> {
  #[inline]
  pub fn transpose(self) -> Outcome<Maybe<T>, E> {
    match self.into_std() {
      None => Outcome::success(Maybe::none()),
      Some(outcome) => outcome.map(Maybe::present),
    }
  }
}

impl<T, E> Outcome<Maybe<T>, E> {
  #[inline]
  pub fn transpose(self) -> Maybe<Outcome<T, E>> {
    match self.into_std() {
      Ok(maybe) => maybe.map(Outcome::success),
      Err(error) => Maybe::present(Outcome::failure(error)),
    }
  }
}
