use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::sync::Arc;

use crate::absent::Absent;

type Cause = Arc<dyn Error + Send + Sync + 'static>;

/// General-purpose error container: a human-readable message plus an optional originating cause.
///
/// Used as the error type of an [`Outcome`](crate::Outcome) when callers do not want to define their own error enum.
/// The cause is shared, so faults are cheap to clone.
#[derive(Clone, Debug)]
pub struct Fault {
  message: String,
  cause: Option<Cause>,
}

impl Fault {
  #[inline]
  pub fn new(message: impl Into<String>) -> Self {
    Self { message: message.into(), cause: None }
  }

  #[inline]
  pub fn with_cause(message: impl Into<String>, cause: impl Error + Send + Sync + 'static) -> Self {
    Self { message: message.into(), cause: Some(Arc::new(cause)) }
  }

  /// Creates a fault that reuses the display form of `error` as its message and keeps `error` as its cause.
  pub fn from_error(error: impl Error + Send + Sync + 'static) -> Self {
    let message = error.to_string();
    Self { message, cause: Some(Arc::new(error)) }
  }

  pub fn from_boxed(error: Box<dyn Error + Send + Sync + 'static>) -> Self {
    let message = error.to_string();
    Self { message, cause: Some(Arc::from(error)) }
  }


  #[inline]
  pub fn message(&self) -> &str { &self.message }

  #[inline]
  pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> { self.cause.as_deref() }

  #[inline]
  pub fn has_cause(&self) -> bool { self.cause.is_some() }
}

impl Display for Fault {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result { f.write_str(&self.message) }
}

// The shared cause is exposed directly, not through `Arc`, so it can be downcast.
impl Error for Fault {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    self.cause.as_deref().map(|cause| cause as &(dyn Error + 'static))
  }
}

/// Faults are equal when their messages are equal and their causes display the same way.
impl PartialEq for Fault {
  fn eq(&self, other: &Self) -> bool {
    if self.message != other.message { return false; }
    match (&self.cause, &other.cause) {
      (None, None) => true,
      (Some(a), Some(b)) => a.to_string() == b.to_string(),
      _ => false,
    }
  }
}
impl Eq for Fault {}

impl Absent for Fault {}
