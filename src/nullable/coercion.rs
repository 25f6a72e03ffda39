use std::convert::Infallible;

use crate::error::Error;

use super::types::NoValue;
use super::Nullable;

/// Element conversion
///
/// `CoercibleInto` converts a plain element value into another element type.
/// Every type coerces into itself without error. Between the atomic element
/// types (`bool`, `i32`, `i64`, `f64`, `String`) conversions are registered
/// below; other types may implement it with their own error type, which
/// container conversions propagate as-is.
///
pub trait CoercibleInto<T>: Sized {
    type Error;
    fn coerce_into(self) -> Result<T, Self::Error>;
}

impl<T> CoercibleInto<T> for T {
    type Error = Infallible;

    #[inline]
    fn coerce_into(self) -> Result<T, Infallible> {
        Ok(self)
    }
}

/// Conversion into a `Nullable<T>`
///
/// Implemented for containers of any coercible element type, the
/// [`NoValue`] marker, and plain atomic values.
///
pub trait IntoNullable<T> {
    type Error;
    fn into_nullable(self) -> Result<Nullable<T>, Self::Error>;
}

impl<T, U> IntoNullable<T> for Nullable<U>
where
    U: CoercibleInto<T>,
{
    type Error = U::Error;

    fn into_nullable(self) -> Result<Nullable<T>, Self::Error> {
        match self {
            Nullable::Value(x) => CoercibleInto::<T>::coerce_into(x).map(Nullable::Value),
            Nullable::Null => Ok(Nullable::Null),
        }
    }
}

impl<T> IntoNullable<T> for NoValue {
    type Error = Infallible;

    #[inline]
    fn into_nullable(self) -> Result<Nullable<T>, Infallible> {
        Ok(Nullable::Null)
    }
}

impl<T> From<NoValue> for Nullable<T> {
    #[inline]
    fn from(_: NoValue) -> Self {
        Nullable::Null
    }
}

impl<T> Nullable<T> {
    /// Build a container from anything convertible into one
    pub fn convert<S>(src: S) -> Result<Self, S::Error>
    where
        S: IntoNullable<T>,
    {
        src.into_nullable()
    }

    /// Wrap a plain value after coercing it into the element type
    pub fn from_value<U>(value: U) -> Result<Self, U::Error>
    where
        U: CoercibleInto<T>,
    {
        CoercibleInto::<T>::coerce_into(value).map(Nullable::Value)
    }

    /// Convert into a container of another element type
    ///
    /// Nulls stay null without consulting the element conversion.
    pub fn coerce<U>(self) -> Result<Nullable<U>, T::Error>
    where
        T: CoercibleInto<U>,
    {
        IntoNullable::<U>::into_nullable(self)
    }
}

macro_rules! register {
    // plain atomic values convert into containers through their coercions
    ( atomic: $($ty:ty),+ ) => {
        $(
        impl<T> IntoNullable<T> for $ty
        where
            $ty: CoercibleInto<T>,
        {
            type Error = <$ty as CoercibleInto<T>>::Error;

            #[inline]
            fn into_nullable(self) -> Result<Nullable<T>, Self::Error> {
                Nullable::from_value(self)
            }
        }
        )+
    };

    ( lossless: $from:ty => $($to:ty),+ ) => {
        $(
        impl CoercibleInto<$to> for $from {
            type Error = Infallible;

            #[inline]
            fn coerce_into(self) -> Result<$to, Infallible> {
                Ok(<$to>::from(self))
            }
        }
        )+
    };

    ( narrowing: $from:ty => $($to:ty),+ ) => {
        $(
        impl CoercibleInto<$to> for $from {
            type Error = Error;

            #[inline]
            fn coerce_into(self) -> Result<$to, Error> {
                <$to>::try_from(self)
                    .map_err(|_| Error::CannotBeCoercedTo(stringify!($to)))
            }
        }
        )+
    };

    ( truncating: $from:ty => $($to:ty),+ ) => {
        $(
        impl CoercibleInto<$to> for $from {
            type Error = Error;

            fn coerce_into(self) -> Result<$to, Error> {
                let x = self.trunc();
                let in_range = x >= <$to>::MIN as $from && x < <$to>::MAX as $from + 1.0;
                if x.is_finite() && in_range {
                    Ok(x as $to)
                } else {
                    Err(Error::CannotBeCoercedTo(stringify!($to)))
                }
            }
        }
        )+
    };

    ( logical: $($from:ty),+ ) => {
        $(
        impl CoercibleInto<bool> for $from {
            type Error = Infallible;

            #[inline]
            fn coerce_into(self) -> Result<bool, Infallible> {
                Ok(self != 0)
            }
        }
        )+
    };

    ( character: $($from:ty),+ ) => {
        $(
        impl CoercibleInto<String> for $from {
            type Error = Infallible;

            #[inline]
            fn coerce_into(self) -> Result<String, Infallible> {
                Ok(self.to_string())
            }
        }
        )+
    };

    ( parse: $($to:ty),+ ) => {
        $(
        impl CoercibleInto<$to> for String {
            type Error = Error;

            #[inline]
            fn coerce_into(self) -> Result<$to, Error> {
                CoercibleInto::<$to>::coerce_into(self.as_str())
            }
        }

        impl CoercibleInto<$to> for &str {
            type Error = Error;

            fn coerce_into(self) -> Result<$to, Error> {
                self.trim()
                    .parse::<$to>()
                    .map_err(|_| Error::CannotBeCoercedTo(stringify!($to)))
            }
        }
        )+
    };
}

register!(atomic: bool, i32, i64, f64, String);

impl<'a, T> IntoNullable<T> for &'a str
where
    &'a str: CoercibleInto<T>,
{
    type Error = <&'a str as CoercibleInto<T>>::Error;

    #[inline]
    fn into_nullable(self) -> Result<Nullable<T>, Self::Error> {
        Nullable::from_value(self)
    }
}

register!(lossless: bool => i32, i64);
register!(lossless: i32 => i64, f64);
register!(narrowing: i64 => i32);
register!(truncating: f64 => i32, i64);
register!(logical: i32, i64);

// NaN is neither zero nor non-zero
impl CoercibleInto<bool> for f64 {
    type Error = Error;

    #[inline]
    fn coerce_into(self) -> Result<bool, Error> {
        match self.partial_cmp(&0.0) {
            Some(std::cmp::Ordering::Equal) => Ok(false),
            Some(_) => Ok(true),
            None => Err(Error::CannotBeCoercedTo("bool")),
        }
    }
}
register!(character: bool, i32, i64, f64, &str);
register!(parse: i32, i64, f64);

impl CoercibleInto<f64> for bool {
    type Error = Infallible;

    #[inline]
    fn coerce_into(self) -> Result<f64, Infallible> {
        Ok(self as i32 as f64)
    }
}

// booleans parse regardless of case, so `TRUE` and `True` are accepted
impl CoercibleInto<bool> for &str {
    type Error = Error;

    fn coerce_into(self) -> Result<bool, Error> {
        self.trim()
            .to_lowercase()
            .parse()
            .map_err(|_| Error::CannotBeCoercedTo("bool"))
    }
}

impl CoercibleInto<bool> for String {
    type Error = Error;

    #[inline]
    fn coerce_into(self) -> Result<bool, Error> {
        CoercibleInto::<bool>::coerce_into(self.as_str())
    }
}
