use crate::error::Error;

use super::types::Never;

/// A value of type `T` that may be null
///
/// Nullable is used in place of sentinel values to represent "a `T`, or
/// nothing". The element type is part of the container's type; converting
/// to another element type always produces a new container (see
/// [`super::coercion`]). Containers are never written into in place.
///
#[derive(Default, Clone, Copy)]
pub enum Nullable<T> {
    #[default]
    Null,
    Value(T),
}

/// A null container whose element type is the uninhabited [`Never`]
#[inline]
pub const fn empty() -> Nullable<Never> {
    Nullable::Null
}

impl<T> Nullable<T> {
    #[inline]
    pub const fn new(value: T) -> Self {
        Nullable::Value(value)
    }

    /// Wrap `value`, or produce a null if `is_null` is set
    ///
    /// When flagged null the payload is dropped; it can never be observed
    /// through the container.
    #[inline]
    pub fn with_null_flag(value: T, is_null: bool) -> Self {
        if is_null {
            Nullable::Null
        } else {
            Nullable::Value(value)
        }
    }

    #[inline]
    pub const fn null() -> Self {
        Nullable::Null
    }

    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Nullable::Null)
    }

    #[inline]
    pub const fn is_value(&self) -> bool {
        !self.is_null()
    }

    /// Unwrap the value, failing with [`Error::NullAccess`] when null
    #[inline]
    pub fn get(self) -> Result<T, Error> {
        match self {
            Nullable::Value(x) => Ok(x),
            Nullable::Null => Err(Error::NullAccess),
        }
    }

    #[inline]
    pub fn get_ref(&self) -> Result<&T, Error> {
        match self {
            Nullable::Value(x) => Ok(x),
            Nullable::Null => Err(Error::NullAccess),
        }
    }

    #[inline]
    pub fn get_or(self, default: T) -> T {
        match self {
            Nullable::Value(x) => x,
            Nullable::Null => default,
        }
    }

    #[inline]
    pub fn get_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Nullable::Value(x) => x,
            Nullable::Null => f(),
        }
    }

    #[inline]
    pub const fn as_ref(&self) -> Nullable<&T> {
        match self {
            Nullable::Value(x) => Nullable::Value(x),
            Nullable::Null => Nullable::Null,
        }
    }

    pub fn map<F, U>(self, f: F) -> Nullable<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Nullable::Value(x) => Nullable::Value(f(x)),
            Nullable::Null => Nullable::Null,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Nullable::Value(x) => Option::Some(x),
            Nullable::Null => Option::None,
        }
    }
}

impl Nullable<Never> {
    /// Give a bottom-typed null a concrete element type
    #[inline]
    pub fn widen<T>(self) -> Nullable<T> {
        Nullable::Null
    }
}

impl<T> From<Option<T>> for Nullable<T> {
    fn from(x: Option<T>) -> Self {
        match x {
            Some(x) => Nullable::Value(x),
            None => Nullable::Null,
        }
    }
}

impl<T> From<Nullable<T>> for Option<T> {
    fn from(x: Nullable<T>) -> Self {
        x.into_option()
    }
}
