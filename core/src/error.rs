use std::borrow::Cow;
use std::error::Error;
use std::fmt::Debug;
use std::io;

use crate::absent::Present;
use crate::fault::Fault;
use crate::unit::Unit;

/// Misuse of the [`Maybe`](crate::Maybe) / [`Outcome`](crate::Outcome) API.
///
/// An `Err` outcome is business data; a `ContractError` means a caller asked for something the value cannot give:
/// wrapping an absent value into a present variant, or extracting from the wrong variant. The `try_*` forms return it;
/// the panicking forms panic with its message.
#[derive(Debug, thiserror::Error)]
pub enum ContractError {
  #[error("cannot construct `Some` from an absent value")]
  InvalidSomeConstruction,
  #[error("cannot construct `Ok` from an absent value")]
  InvalidOkConstruction,
  #[error("cannot construct `Err` from an absent value")]
  InvalidErrConstruction,
  #[error("{message}")]
  EmptyOptionAccess {
    message: String,
  },
  #[error("called `unwrap` on an `Err` value: {detail}")]
  ResultUnwrap {
    detail: String,
    #[source]
    cause: Option<Fault>,
  },
  #[error("called `unwrap_err` on an `Ok` value: {detail}")]
  ResultUnwrapErr {
    detail: String,
  },
  #[error("{context}: {detail}")]
  ResultExpect {
    context: String,
    detail: String,
    #[source]
    cause: Option<Fault>,
  },
  #[error("{context}: {detail}")]
  ResultExpectErr {
    context: String,
    detail: String,
  },
}

/// Discriminant of a [`ContractError`].
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum ContractErrorKind {
  InvalidSomeConstruction,
  InvalidOkConstruction,
  InvalidErrConstruction,
  EmptyOptionAccess,
  ResultUnwrap,
  ResultUnwrapErr,
  ResultExpect,
  ResultExpectErr,
}

impl ContractError {
  pub fn kind(&self) -> ContractErrorKind {
    match self {
      ContractError::InvalidSomeConstruction => ContractErrorKind::InvalidSomeConstruction,
      ContractError::InvalidOkConstruction => ContractErrorKind::InvalidOkConstruction,
      ContractError::InvalidErrConstruction => ContractErrorKind::InvalidErrConstruction,
      ContractError::EmptyOptionAccess { .. } => ContractErrorKind::EmptyOptionAccess,
      ContractError::ResultUnwrap { .. } => ContractErrorKind::ResultUnwrap,
      ContractError::ResultUnwrapErr { .. } => ContractErrorKind::ResultUnwrapErr,
      ContractError::ResultExpect { .. } => ContractErrorKind::ResultExpect,
      ContractError::ResultExpectErr { .. } => ContractErrorKind::ResultExpectErr,
    }
  }

  pub(crate) fn empty_access(context: Option<&str>) -> Self {
    let message = match context {
      Some(context) => format!("{}: called `expect` on a `None` value", context),
      None => "called `unwrap` on a `None` value".to_owned(),
    };
    ContractError::EmptyOptionAccess { message }
  }

  pub(crate) fn unwrap_failed(error: impl ErrorDetail) -> Self {
    let (detail, cause) = error.into_detail().into_parts();
    ContractError::ResultUnwrap { detail, cause }
  }

  pub(crate) fn expect_failed(context: &str, error: impl ErrorDetail) -> Self {
    let (detail, cause) = error.into_detail().into_parts();
    ContractError::ResultExpect { context: context.to_owned(), detail, cause }
  }

  pub(crate) fn unwrap_err_failed(value: impl Debug) -> Self {
    ContractError::ResultUnwrapErr { detail: format!("{:?}", value) }
  }

  pub(crate) fn expect_err_failed(context: &str, value: impl Debug) -> Self {
    ContractError::ResultExpectErr { context: context.to_owned(), detail: format!("{:?}", value) }
  }
}

/// Logs `error` and panics with its message at the caller's location.
#[cold]
#[track_caller]
pub(crate) fn raise(error: ContractError) -> ! {
  let location = std::panic::Location::caller();
  tracing::error!(kind = ?error.kind(), %location, "{}", error);
  panic!("{}", error)
}


/// How an error payload is described when an extraction on the wrong variant fails.
pub enum Detail {
  /// The payload is a fault in its own right; it becomes the `source` of the raised [`ContractError`].
  Cause(Fault),
  /// The payload only has a textual form, which is embedded in the message.
  Text(String),
}

impl Detail {
  fn into_parts(self) -> (String, Option<Fault>) {
    match self {
      Detail::Cause(fault) => (fault.to_string(), Some(fault)),
      Detail::Text(text) => (text, None),
    }
  }
}

/// Capability of an error type to describe itself to [`Outcome::unwrap`](crate::Outcome::unwrap) and friends.
///
/// Error types that are faults (implement [`std::error::Error`]) should return [`Detail::Cause`]; plain data errors
/// return [`Detail::Text`]. [`text_detail`](crate::text_detail) and [`fault_detail`](crate::fault_detail) implement this
/// trait for your own types.
pub trait ErrorDetail {
  fn into_detail(self) -> Detail;
}

impl ErrorDetail for Fault {
  #[inline]
  fn into_detail(self) -> Detail { Detail::Cause(self) }
}
impl ErrorDetail for Box<dyn Error + Send + Sync + 'static> {
  #[inline]
  fn into_detail(self) -> Detail { Detail::Cause(Fault::from_boxed(self)) }
}
impl ErrorDetail for io::Error {
  #[inline]
  fn into_detail(self) -> Detail { Detail::Cause(Fault::from_error(self)) }
}
impl ErrorDetail for ContractError {
  #[inline]
  fn into_detail(self) -> Detail { Detail::Cause(Fault::from_error(self)) }
}

impl ErrorDetail for String {
  #[inline]
  fn into_detail(self) -> Detail { Detail::Text(self) }
}
impl ErrorDetail for &str {
  #[inline]
  fn into_detail(self) -> Detail { Detail::Text(self.to_owned()) }
}
impl ErrorDetail for Cow<'_, str> {
  #[inline]
  fn into_detail(self) -> Detail { Detail::Text(self.into_owned()) }
}
impl<E: Debug> ErrorDetail for Vec<E> {
  #[inline]
  fn into_detail(self) -> Detail { Detail::Text(format!("{:?}", self)) }
}

/// Implements [`ErrorDetail`] for types whose [`Display`](std::fmt::Display) form is their description.
#[macro_export]
macro_rules! text_detail {
  ($($ty:ty),* $(,)?) => {
    $(impl $crate::error::ErrorDetail for $ty {
      #[inline]
      fn into_detail(self) -> $crate::error::Detail { $crate::error::Detail::Text(self.to_string()) }
    })*
  };
}

/// Implements [`ErrorDetail`] for [`std::error::Error`] types, which are chained as the cause.
#[macro_export]
macro_rules! fault_detail {
  ($($ty:ty),* $(,)?) => {
    $(impl $crate::error::ErrorDetail for $ty {
      #[inline]
      fn into_detail(self) -> $crate::error::Detail { $crate::error::Detail::Cause($crate::fault::Fault::from_error(self)) }
    })*
  };
}

text_detail!(
  Unit, bool, char,
  u8, u16, u32, u64, u128, usize,
  i8, i16, i32, i64, i128, isize,
  f32, f64,
);

fault_detail!(
  std::fmt::Error, std::convert::Infallible,
  std::num::ParseIntError, std::num::ParseFloatError, std::num::TryFromIntError,
  std::str::ParseBoolError, std::str::Utf8Error, std::string::FromUtf8Error, std::char::ParseCharError,
  std::net::AddrParseError, std::time::SystemTimeError, std::env::VarError,
);

impl<E: Error + Send + Sync + 'static> ErrorDetail for Present<E> {
  #[inline]
  fn into_detail(self) -> Detail { Detail::Cause(Fault::from_error(self.into_inner())) }
}


#[cfg(test)]
mod tests {
  use std::fmt;
  use std::panic::{catch_unwind, AssertUnwindSafe};
  use std::ptr;
  use std::sync::{Arc, Mutex};

  use tracing::field::{Field, Visit};
  use tracing::{Event, Subscriber};
  use tracing_subscriber::layer::{Context, SubscriberExt};
  use tracing_subscriber::Layer;

  use crate::maybe::Maybe;
  use crate::outcome::Outcome;

  use super::*;

  #[derive(Clone, Default)]
  struct Locations(Arc<Mutex<Vec<String>>>);

  impl<S: Subscriber> Layer<S> for Locations {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
      struct LocationField<'a>(&'a mut Vec<String>);
      impl Visit for LocationField<'_> {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
          if field.name() == "location" { self.0.push(format!("{:?}", value)); }
        }
      }
      let mut locations = self.0.lock().unwrap();
      event.record(&mut LocationField(&mut locations));
    }
  }

  /// Runs `f`, which must raise, and returns the location logged for the violation.
  fn logged_location(f: impl FnOnce()) -> String {
    let locations = Locations::default();
    let subscriber = tracing_subscriber::registry().with(locations.clone());
    tracing::subscriber::with_default(subscriber, || {
      assert!(catch_unwind(AssertUnwindSafe(f)).is_err());
    });
    let locations = locations.0.lock().unwrap();
    assert_eq!(locations.len(), 1);
    locations[0].clone()
  }

  #[test]
  fn violations_are_reported_at_the_caller() {
    let line = line!() + 1;
    let location = logged_location(|| { Maybe::some(ptr::null::<u8>()); });
    assert!(location.starts_with(&format!("{}:{}:", file!(), line)), "{location}");

    let line = line!() + 1;
    let location = logged_location(|| { Outcome::<Option<u8>, u8>::ok(None); });
    assert!(location.starts_with(&format!("{}:{}:", file!(), line)), "{location}");

    let line = line!() + 1;
    let location = logged_location(|| { Outcome::<u8, Option<u8>>::err(None); });
    assert!(location.starts_with(&format!("{}:{}:", file!(), line)), "{location}");

    let line = line!() + 1;
    let location = logged_location(|| { Maybe::<u8>::none().unwrap(); });
    assert!(location.starts_with(&format!("{}:{}:", file!(), line)), "{location}");
  }

  #[test]
  fn kinds_match_variants() {
    assert_eq!(ContractError::InvalidSomeConstruction.kind(), ContractErrorKind::InvalidSomeConstruction);
    assert_eq!(ContractError::empty_access(None).kind(), ContractErrorKind::EmptyOptionAccess);
    assert_eq!(ContractError::unwrap_failed("x").kind(), ContractErrorKind::ResultUnwrap);
    assert_eq!(ContractError::unwrap_err_failed(1).kind(), ContractErrorKind::ResultUnwrapErr);
    assert_eq!(ContractError::expect_failed("ctx", "x").kind(), ContractErrorKind::ResultExpect);
    assert_eq!(ContractError::expect_err_failed("ctx", 1).kind(), ContractErrorKind::ResultExpectErr);
  }

  #[test]
  fn text_errors_are_embedded_in_the_message() {
    let error = ContractError::unwrap_failed("connection refused");
    assert_eq!(error.to_string(), "called `unwrap` on an `Err` value: connection refused");
    assert!(error.source().is_none());
  }

  #[test]
  fn fault_errors_are_chained_as_source() {
    let error = ContractError::unwrap_failed(Fault::new("timed out"));
    assert_eq!(error.to_string(), "called `unwrap` on an `Err` value: timed out");
    assert_eq!(error.source().unwrap().to_string(), "timed out");
  }

  #[test]
  fn std_errors_are_chained_as_source() {
    let parse_error = "x".parse::<u8>().unwrap_err();
    let error = ContractError::unwrap_failed(parse_error.clone());
    assert_eq!(error.to_string(), format!("called `unwrap` on an `Err` value: {}", parse_error));
    let fault = error.source().unwrap().downcast_ref::<Fault>().unwrap();
    assert_eq!(fault.source().unwrap().downcast_ref::<std::num::ParseIntError>(), Some(&parse_error));
  }

  #[test]
  fn present_errors_are_chained_as_source() {
    #[derive(Debug)]
    struct Timeout;
    impl fmt::Display for Timeout {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str("timed out after 5s") }
    }
    impl Error for Timeout {}

    let error = ContractError::expect_failed("polling", Present(Timeout));
    assert_eq!(error.to_string(), "polling: timed out after 5s");
    assert!(error.source().is_some());
  }

  #[test]
  fn expect_prefixes_context() {
    let error = ContractError::expect_failed("loading user 7", 404u16);
    assert_eq!(error.to_string(), "loading user 7: 404");
    let error = ContractError::expect_err_failed("validation should fail", 3);
    assert_eq!(error.to_string(), "validation should fail: 3");
  }

  #[test]
  fn empty_access_message() {
    assert_eq!(ContractError::empty_access(None).to_string(), "called `unwrap` on a `None` value");
    assert_eq!(
      ContractError::empty_access(Some("user id must be set")).to_string(),
      "user id must be set: called `expect` on a `None` value"
    );
  }
}
