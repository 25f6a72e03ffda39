use core::fmt;
use std::convert::Infallible;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    NullAccess,
    CannotBeCoercedTo(&'static str),
}

impl Error {
    fn as_str(&self) -> String {
        match self {
            Error::NullAccess => "attempted to access the value of a null".to_string(),
            Error::CannotBeCoercedTo(to) => {
                format!("object cannot be coerced to type '{to}'")
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Error: {}", self.as_str())
    }
}

impl std::error::Error for Error {}

impl From<Infallible> for Error {
    fn from(val: Infallible) -> Self {
        match val {}
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn messages() {
        assert_eq!(
            Error::NullAccess.to_string(),
            "Error: attempted to access the value of a null"
        );
        assert_eq!(
            Error::CannotBeCoercedTo("i32").to_string(),
            "Error: object cannot be coerced to type 'i32'"
        );
    }
}
