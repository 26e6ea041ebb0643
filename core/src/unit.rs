use std::fmt::{self, Display, Formatter};

use crate::absent::Absent;

/// Marker for "no meaningful value", used as the success type of side-effecting operations: `Outcome<Unit, E>`.
///
/// All instances compare equal.
#[derive(Default, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Unit;

impl Display for Unit {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result { f.write_str("()") }
}

impl Absent for Unit {}

impl From<()> for Unit {
  #[inline]
  fn from(_: ()) -> Self { Unit }
}
impl From<Unit> for () {
  #[inline]
  fn from(_: Unit) -> Self {}
}
