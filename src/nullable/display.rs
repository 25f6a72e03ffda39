use std::fmt::{Debug, Display};

use super::Nullable;

pub const NULL_LITERAL: &str = "#NULL";

/// How a container is rendered
///
/// `Compact` is what appears when a container is embedded in larger output
/// (`{}`); `Full` also names the element type (`{:#}`).
///
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum Format {
    #[default]
    Compact,
    Full,
}

/// Element type name with module paths removed
///
/// `alloc::vec::Vec<alloc::string::String>` becomes `Vec<String>`.
pub fn element_type_name<T: ?Sized>() -> String {
    let full = std::any::type_name::<T>();
    let mut name = String::with_capacity(full.len());
    let mut segment = 0;
    let mut rest = full;

    while let Some(c) = rest.chars().next() {
        if rest.starts_with("::") {
            name.truncate(segment);
            rest = &rest[2..];
            continue;
        }

        name.push(c);
        if !(c.is_alphanumeric() || c == '_') {
            segment = name.len();
        }
        rest = &rest[c.len_utf8()..];
    }

    name
}

impl<T> Nullable<T> {
    pub fn format(&self, format: Format) -> String
    where
        T: Display,
    {
        match format {
            Format::Compact => format!("{}", self),
            Format::Full => format!("{:#}", self),
        }
    }
}

impl<T> Display for Nullable<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            write!(f, "Nullable<{}>(", element_type_name::<T>())?;
            if let Nullable::Value(x) = self {
                write!(f, "{}", x)?;
            }
            write!(f, ")")
        } else {
            match self {
                Nullable::Value(x) => write!(f, "{}", x),
                Nullable::Null => write!(f, "{}", NULL_LITERAL),
            }
        }
    }
}

impl<T> Debug for Nullable<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Nullable<{}>(", element_type_name::<T>())?;
        if let Nullable::Value(x) = self {
            write!(f, "{:?}", x)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nullable::empty;
    use crate::nullable::types::*;
    use std::str::FromStr;

    #[test]
    fn compact() {
        assert_eq!(Integer::null().to_string(), "#NULL");
        assert_eq!(Nullable::new(5).to_string(), "5");
        assert_eq!(Nullable::new("text").to_string(), "text");
        assert_eq!(Nullable::new(Integer::null()).to_string(), "#NULL");
    }

    #[test]
    fn full() {
        assert_eq!(format!("{:#}", Integer::null()), "Nullable<i32>()");
        assert_eq!(format!("{:#}", Nullable::new(2.5)), "Nullable<f64>(2.5)");
        assert_eq!(format!("{:#}", empty()), "Nullable<Never>()");
        assert_eq!(
            Nullable::new(Integer::null()).format(Format::Full),
            "Nullable<Nullable<i32>>(#NULL)"
        );
        assert_eq!(
            Nullable::new(String::from("x")).format(Format::Full),
            "Nullable<String>(x)"
        );
    }

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", Nullable::new("x")), "Nullable<&str>(\"x\")");
        assert_eq!(format!("{:?}", Character::null()), "Nullable<String>()");
    }

    #[test]
    fn type_names() {
        assert_eq!(element_type_name::<Vec<String>>(), "Vec<String>");
        assert_eq!(element_type_name::<(i32, Option<bool>)>(), "(i32, Option<bool>)");
        assert_eq!(element_type_name::<[u8]>(), "[u8]");
    }

    #[test]
    fn format_names() {
        assert_eq!(Format::from_str("full"), Ok(Format::Full));
        assert_eq!(Format::Compact.to_string(), "compact");
    }
}
