use std::borrow::Cow;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::convert::Infallible;
use std::ffi::{CStr, CString, OsStr, OsString};
use std::fmt::{self, Display, Formatter};
use std::net::{AddrParseError, IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6};
use std::num::{
  NonZeroI128, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI8, NonZeroIsize, NonZeroU128, NonZeroU16, NonZeroU32,
  NonZeroU64, NonZeroU8, NonZeroUsize, ParseFloatError, ParseIntError, TryFromIntError, Wrapping,
};
use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::str::{ParseBoolError, Utf8Error};
use std::string::FromUtf8Error;
use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime, SystemTimeError};

/// Capability to report whether a value is the "nothing" representation of its type.
///
/// [`Maybe::some`](crate::Maybe::some), [`Outcome::ok`](crate::Outcome::ok), and
/// [`Outcome::err`](crate::Outcome::err) refuse to wrap a value for which `is_absent` returns `true`. Most types can
/// never be absent and use the default implementation; pointer-like types that do have such a representation override
/// it.
///
/// ```
/// use vessel_core::Absent;
///
/// struct Handle(u32);
/// impl Absent for Handle {
///   fn is_absent(&self) -> bool { self.0 == 0 }
/// }
/// ```
pub trait Absent {
  #[inline]
  fn is_absent(&self) -> bool { false }
}

macro_rules! never_absent {
  ($($ty:ty),* $(,)?) => {
    $(impl Absent for $ty {})*
  };
}

never_absent!(
  (), bool, char,
  u8, u16, u32, u64, u128, usize,
  i8, i16, i32, i64, i128, isize,
  f32, f64,
  str, String, CStr, CString, OsStr, OsString, Path, PathBuf,
  Ordering, Infallible,
  Duration, Instant, SystemTime,
  IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6,
  NonZeroU8, NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU128, NonZeroUsize,
  NonZeroI8, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI128, NonZeroIsize,
  std::io::Error, std::io::ErrorKind, fmt::Error,
  ParseIntError, ParseFloatError, ParseBoolError, std::char::ParseCharError, TryFromIntError,
  Utf8Error, FromUtf8Error, AddrParseError, SystemTimeError, std::env::VarError,
);

impl<T: ?Sized> Absent for &T {}
impl<T: ?Sized> Absent for &mut T {}
impl<T: ?Sized> Absent for Box<T> {}
impl<T: ?Sized> Absent for Rc<T> {}
impl<T: ?Sized> Absent for Arc<T> {}
impl<B: ToOwned + ?Sized> Absent for Cow<'_, B> {}
impl<T> Absent for [T] {}
impl<T, const N: usize> Absent for [T; N] {}
impl<T> Absent for Vec<T> {}
impl<T> Absent for VecDeque<T> {}
impl<T> Absent for LinkedList<T> {}
impl<T> Absent for BinaryHeap<T> {}
impl<T> Absent for Wrapping<T> {}
impl<T> Absent for BTreeSet<T> {}
impl<K, V> Absent for BTreeMap<K, V> {}
impl<T, S> Absent for HashSet<T, S> {}
impl<K, V, S> Absent for HashMap<K, V, S> {}

macro_rules! tuple_never_absent {
  ($($name:ident)+) => {
    impl<$($name),+> Absent for ($($name,)+) {}
  };
}

tuple_never_absent!(A);
tuple_never_absent!(A B);
tuple_never_absent!(A B C);
tuple_never_absent!(A B C D);
tuple_never_absent!(A B C D E);
tuple_never_absent!(A B C D E F);
tuple_never_absent!(A B C D E F G);
tuple_never_absent!(A B C D E F G H);
tuple_never_absent!(A B C D E F G H I);
tuple_never_absent!(A B C D E F G H I J);
tuple_never_absent!(A B C D E F G H I J K);
tuple_never_absent!(A B C D E F G H I J K L);

impl<T: ?Sized> Absent for *const T {
  #[inline]
  fn is_absent(&self) -> bool { self.is_null() }
}
impl<T: ?Sized> Absent for *mut T {
  #[inline]
  fn is_absent(&self) -> bool { self.is_null() }
}

/// A `std` option is the language's own encoding of absence: `None` is absent.
impl<T> Absent for Option<T> {
  #[inline]
  fn is_absent(&self) -> bool { self.is_none() }
}


/// Marks a value of a foreign type as present, so it can be wrapped without an [`Absent`] implementation of its own.
///
/// Trait coherence only lets this crate or the defining crate implement [`Absent`]; `Present` is the route for any
/// other type that has no "nothing" representation. The wrapper can be dropped again with
/// [`Maybe::map`](crate::Maybe::map), which does not re-check its output.
///
/// ```
/// use vessel_core::{Maybe, Present};
///
/// struct Celsius(f64); // defined in some other crate, without an `Absent` implementation
///
/// let reading = Maybe::some(Present(Celsius(21.5))).map(Present::into_inner);
/// assert_eq!(reading.unwrap().0, 21.5);
/// ```
#[derive(Default, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Present<T>(pub T);

impl<T> Present<T> {
  #[inline]
  pub fn into_inner(self) -> T { self.0 }
}

impl<T> Absent for Present<T> {}

impl<T> Deref for Present<T> {
  type Target = T;
  #[inline]
  fn deref(&self) -> &T { &self.0 }
}
impl<T> DerefMut for Present<T> {
  #[inline]
  fn deref_mut(&mut self) -> &mut T { &mut self.0 }
}

impl<T: Display> Display for Present<T> {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result { self.0.fmt(f) }
}

impl<T: std::error::Error> std::error::Error for Present<T> {
  #[inline]
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> { self.0.source() }
}
