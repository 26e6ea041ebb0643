//! Installs a `tracing` subscriber that shows the events this crate emits: contract violations at `ERROR`, caught
//! panics at `DEBUG`, validation summaries at `TRACE`.

use std::io;

use tracing_subscriber::{EnvFilter, Layer};
use tracing_subscriber::fmt::TestWriter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

/// Environment variable read for the console filter when none is given explicitly.
pub const FILTER_ENV: &str = "VESSEL_LOG";

#[derive(Debug, thiserror::Error)]
#[error("Failed to install diagnostics subscriber: {0}")]
pub struct DiagnosticsError(#[from] TryInitError);

#[derive(Default)]
pub struct DiagnosticsBuilder {
  console_filter: Option<EnvFilter>,
  test_writer: bool,
  ansi: Option<bool>,
}
impl DiagnosticsBuilder {
  pub fn with_console_filter(mut self, console_filter: EnvFilter) -> Self {
    self.console_filter = Some(console_filter);
    self
  }

  /// Write through the test harness' captured output instead of stderr.
  pub fn with_test_writer(mut self) -> Self {
    self.test_writer = true;
    self
  }

  pub fn with_ansi(mut self, ansi: bool) -> Self {
    self.ansi = Some(ansi);
    self
  }

  /// Installs the subscriber as the global default.
  pub fn try_init(self) -> Result<Diagnostics, DiagnosticsError> {
    let console_filter = self.console_filter.unwrap_or_else(|| EnvFilter::try_from_env(FILTER_ENV).unwrap_or_default());
    let filter = console_filter.to_string();

    let writer = if self.test_writer {
      BoxMakeWriter::new(TestWriter::default())
    } else {
      BoxMakeWriter::new(io::stderr)
    };
    let ansi = self.ansi.unwrap_or(!self.test_writer);

    tracing_subscriber::registry()
      .with(
        tracing_subscriber::fmt::layer()
          .with_writer(writer)
          .with_ansi(ansi)
          .with_filter(console_filter)
      )
      .try_init()?;
    Ok(Diagnostics { filter })
  }

  /// Installs the subscriber, logging a warning instead of failing when one is already installed.
  pub fn init(self) -> Option<Diagnostics> {
    match self.try_init() {
      Ok(diagnostics) => Some(diagnostics),
      Err(e) => {
        tracing::warn!("Cannot install diagnostics subscriber: {}", e);
        None
      }
    }
  }
}

/// Handle to an installed diagnostics subscriber.
#[derive(Debug)]
pub struct Diagnostics {
  filter: String,
}
impl Diagnostics {
  #[inline]
  pub fn builder() -> DiagnosticsBuilder { DiagnosticsBuilder::default() }

  /// The directives of the console filter that was installed.
  #[inline]
  pub fn filter(&self) -> &str { &self.filter }
}
