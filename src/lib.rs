//! Null-aware optional values
//!
//! [`Nullable<T>`] holds either a value of type `T` or nothing at all. It
//! exists so that "no value" never has to be encoded as a sentinel that could
//! also be a real value.
//!
//! ```
//! use nullable::{nullable, Nullable};
//!
//! let x = nullable!(3);
//! let y: Nullable<i32> = nullable!(NULL: i32);
//!
//! assert_eq!(x.get_or(0) + y.get_or(0), 3);
//! assert_eq!(format!("{} {:#}", y, x), "#NULL Nullable<i32>(3)");
//! ```

pub mod cli;
pub mod error;
pub mod nullable;

pub use nullable::*;

/// Construct a [`Nullable`]
///
/// - `nullable!(x)` wraps a value
/// - `nullable!(NULL: T)` is a null with element type `T`
/// - `nullable!()` is a null with the bottom element type
///
#[macro_export]
macro_rules! nullable {
    () => {
        $crate::nullable::empty()
    };
    ( NULL: $t:ty ) => {
        $crate::nullable::Nullable::<$t>::null()
    };
    ( $x:expr ) => {
        $crate::nullable::Nullable::new($x)
    };
}
