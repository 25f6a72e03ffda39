use std::fmt::{Debug, Display};
use std::hash::{Hash, Hasher};

use super::Nullable;

/// The bottom element type
///
/// `Never` has no values, so a `Nullable<Never>` can only ever be null. It is
/// the element type produced when no type is given, see [`super::empty`].
///
#[derive(Clone, Copy)]
pub enum Never {}

impl<T: ?Sized> PartialEq<T> for Never {
    fn eq(&self, _: &T) -> bool {
        match *self {}
    }
}

impl Eq for Never {}

impl Hash for Never {
    fn hash<H: Hasher>(&self, _: &mut H) {
        match *self {}
    }
}

impl Debug for Never {
    fn fmt(&self, _: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {}
    }
}

impl Display for Never {
    fn fmt(&self, _: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {}
    }
}

/// Explicit "no value" marker
///
/// Converts into a null container of any element type, and compares equal
/// to exactly the null containers.
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NoValue;

pub type Logical = Nullable<bool>;
pub type Integer = Nullable<i32>;
pub type Double = Nullable<f64>;
pub type Character = Nullable<String>;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum ElementType {
    Logical,
    Integer,
    Double,
    #[default]
    Character,
}
