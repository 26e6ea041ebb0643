use std::fmt::{self, Debug, Formatter};

use crate::absent::Absent;
use crate::error::{raise, ContractError};

/// A value of type `T`, or nothing.
///
/// A `Maybe` is either `Some` or `None`. It can only be built through its factories: [`some`](Self::some) refuses an
/// [absent](Absent) value, [`none`](Self::none) always succeeds, and [`from_nullable`](Self::from_nullable) maps an
/// absent value to `None`. Once built, a `Maybe` is immutable and transformed through combinators; absence flows
/// through them as data.
///
/// Two `None`s are equal; two `Some`s are equal when their payloads are. `None` orders before every `Some`.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Maybe<T> {
  inner: Option<T>,
}

// Construction

impl<T> Maybe<T> {
  /// Creates a `Some` holding `value`.
  ///
  /// # Panics
  ///
  /// Raises [`ContractError::InvalidSomeConstruction`] when `value` is absent.
  #[inline]
  #[track_caller]
  pub fn some(value: T) -> Self where
    T: Absent
  {
    match Self::try_some(value) {
      Ok(maybe) => maybe,
      Err(error) => raise(error),
    }
  }

  /// Creates a `Some` holding `value`, or fails with [`ContractError::InvalidSomeConstruction`] when `value` is absent.
  #[inline]
  pub fn try_some(value: T) -> Result<Self, ContractError> where
    T: Absent
  {
    if value.is_absent() {
      Err(ContractError::InvalidSomeConstruction)
    } else {
      Ok(Self::present(value))
    }
  }

  #[inline]
  pub const fn none() -> Self { Self { inner: None } }

  /// Creates a `Some` holding `value` if it is present, or `None` if it is absent.
  #[inline]
  pub fn from_nullable(value: T) -> Self where
    T: Absent
  {
    if value.is_absent() { Self::none() } else { Self::present(value) }
  }

  /// Converts from a `std` option.
  ///
  /// # Panics
  ///
  /// Raises [`ContractError::InvalidSomeConstruction`] when `option` is `Some` of an absent value.
  #[inline]
  #[track_caller]
  pub fn from_std(option: Option<T>) -> Self where
    T: Absent
  {
    match option {
      Some(value) => Self::some(value),
      None => Self::none(),
    }
  }

  #[inline]
  pub(crate) const fn present(value: T) -> Self { Self { inner: Some(value) } }

  #[inline]
  pub(crate) fn wrap(inner: Option<T>) -> Self { Self { inner } }
}

// Inspection

impl<T> Maybe<T> {
  #[inline]
  pub const fn is_some(&self) -> bool { self.inner.is_some() }

  #[inline]
  pub const fn is_none(&self) -> bool { self.inner.is_none() }

  #[inline]
  pub fn is_some_and(&self, predicate: impl FnOnce(&T) -> bool) -> bool {
    self.inner.as_ref().is_some_and(predicate)
  }

  #[inline]
  pub fn contains<U>(&self, other: &U) -> bool where
    T: PartialEq<U>
  {
    self.is_some_and(|value| value == other)
  }

  /// Non-failing accessor: a reference to the payload if `Some`.
  #[inline]
  pub fn try_get(&self) -> Option<&T> { self.inner.as_ref() }

  #[inline]
  pub fn try_get_mut(&mut self) -> Option<&mut T> { self.inner.as_mut() }

  #[inline]
  pub fn into_std(self) -> Option<T> { self.inner }

  #[inline]
  pub fn as_std(&self) -> &Option<T> { &self.inner }

  #[inline]
  pub fn as_ref(&self) -> Maybe<&T> { Maybe::wrap(self.inner.as_ref()) }

  #[inline]
  pub fn as_mut(&mut self) -> Maybe<&mut T> { Maybe::wrap(self.inner.as_mut()) }

  /// Iterates over the payload: one item if `Some`, none if `None`.
  #[inline]
  pub fn iter(&self) -> std::option::Iter<'_, T> { self.inner.iter() }
}

// Extraction

impl<T> Maybe<T> {
  /// Returns the payload.
  ///
  /// # Panics
  ///
  /// Raises [`ContractError::EmptyOptionAccess`] when `None`.
  #[inline]
  #[track_caller]
  pub fn unwrap(self) -> T {
    match self.inner {
      Some(value) => value,
      None => raise(ContractError::empty_access(None)),
    }
  }

  #[inline]
  pub fn try_unwrap(self) -> Result<T, ContractError> {
    self.inner.ok_or_else(|| ContractError::empty_access(None))
  }

  /// Returns the payload.
  ///
  /// # Panics
  ///
  /// Raises [`ContractError::EmptyOptionAccess`] carrying `message` when `None`.
  #[inline]
  #[track_caller]
  pub fn expect(self, message: &str) -> T {
    match self.inner {
      Some(value) => value,
      None => raise(ContractError::empty_access(Some(message))),
    }
  }

  #[inline]
  pub fn try_expect(self, message: &str) -> Result<T, ContractError> {
    self.inner.ok_or_else(|| ContractError::empty_access(Some(message)))
  }

  #[inline]
  pub fn unwrap_or(self, default: T) -> T { self.inner.unwrap_or(default) }

  #[inline]
  pub fn unwrap_or_else(self, default: impl FnOnce() -> T) -> T { self.inner.unwrap_or_else(default) }

  #[inline]
  pub fn unwrap_or_default(self) -> T where
    T: Default
  {
    self.inner.unwrap_or_default()
  }
}

// Transformation

impl<T> Maybe<T> {
  #[inline]
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Maybe<U> { Maybe::wrap(self.inner.map(f)) }

  #[inline]
  pub fn and_then<U>(self, f: impl FnOnce(T) -> Maybe<U>) -> Maybe<U> {
    match self.inner {
      Some(value) => f(value),
      None => Maybe::none(),
    }
  }

  #[inline]
  pub fn and<U>(self, other: Maybe<U>) -> Maybe<U> {
    match self.inner {
      Some(_) => other,
      None => Maybe::none(),
    }
  }

  #[inline]
  pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self { Self::wrap(self.inner.filter(predicate)) }

  #[inline]
  pub fn or(self, alternative: Self) -> Self {
    match self.inner {
      Some(_) => self,
      None => alternative,
    }
  }

  /// Like [`or`](Self::or), but `alternative` is only called when `self` is `None`.
  #[inline]
  pub fn or_else(self, alternative: impl FnOnce() -> Self) -> Self {
    match self.inner {
      Some(_) => self,
      None => alternative(),
    }
  }

  /// `Some` if exactly one of `self` and `other` is `Some`.
  #[inline]
  pub fn xor(self, other: Self) -> Self { Self::wrap(self.inner.xor(other.inner)) }

  #[inline]
  pub fn map_or<U>(self, default: U, f: impl FnOnce(T) -> U) -> U { self.inner.map_or(default, f) }

  #[inline]
  pub fn map_or_else<U>(self, default: impl FnOnce() -> U, f: impl FnOnce(T) -> U) -> U {
    self.inner.map_or_else(default, f)
  }

  #[inline]
  pub fn zip<U>(self, other: Maybe<U>) -> Maybe<(T, U)> { Maybe::wrap(self.inner.zip(other.inner)) }

  #[inline]
  pub fn zip_with<U, R>(self, other: Maybe<U>, f: impl FnOnce(T, U) -> R) -> Maybe<R> {
    self.zip(other).map(|(a, b)| f(a, b))
  }

  /// Calls `f` with the payload if `Some`, then returns `self` unchanged.
  #[inline]
  pub fn inspect(self, f: impl FnOnce(&T)) -> Self {
    if let Some(value) = &self.inner {
      f(value);
    }
    self
  }

  /// Exhaustive match: `some` is applied to the payload, or `none` is called.
  ///
  /// Handlers returning `()` make this the side-effect-only form.
  #[inline]
  pub fn match_with<R>(self, some: impl FnOnce(T) -> R, none: impl FnOnce() -> R) -> R {
    match self.inner {
      Some(value) => some(value),
      None => none(),
    }
  }
}

impl<T> Maybe<Maybe<T>> {
  #[inline]
  pub fn flatten(self) -> Maybe<T> { self.and_then(|inner| inner) }
}

impl<A, B> Maybe<(A, B)> {
  #[inline]
  pub fn unzip(self) -> (Maybe<A>, Maybe<B>) {
    let (a, b) = self.inner.unzip();
    (Maybe::wrap(a), Maybe::wrap(b))
  }
}

impl<T: Clone> Maybe<&T> {
  #[inline]
  pub fn cloned(self) -> Maybe<T> { Maybe::wrap(self.inner.cloned()) }
}


impl<T> Absent for Maybe<T> {}

impl<T> From<Maybe<T>> for Option<T> {
  #[inline]
  fn from(maybe: Maybe<T>) -> Self { maybe.inner }
}

impl<T> IntoIterator for Maybe<T> {
  type Item = T;
  type IntoIter = std::option::IntoIter<T>;
  #[inline]
  fn into_iter(self) -> Self::IntoIter { self.inner.into_iter() }
}
impl<'a, T> IntoIterator for &'a Maybe<T> {
  type Item = &'a T;
  type IntoIter = std::option::Iter<'a, T>;
  #[inline]
  fn into_iter(self) -> Self::IntoIter { self.inner.iter() }
}

impl<T: Debug> Debug for Maybe<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match &self.inner {
      Some(value) => f.debug_tuple("Some").field(value).finish(),
      None => f.write_str("None"),
    }
  }
}
