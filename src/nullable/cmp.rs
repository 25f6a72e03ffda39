use crate::error::Error;

use super::types::NoValue;
use super::Nullable;

impl<T> Nullable<T> {
    /// Structural equality
    ///
    /// Two nulls are equal regardless of their element types, a null never
    /// equals a value, and two values are compared with their own `==`.
    ///
    pub fn equals_structurally<U>(&self, other: &Nullable<U>) -> bool
    where
        T: PartialEq<U>,
    {
        match (self, other) {
            (Nullable::Value(l), Nullable::Value(r)) => l == r,
            (Nullable::Null, Nullable::Null) => true,
            _ => false,
        }
    }

    /// Strict equality, which refuses to compare nullable containers
    ///
    /// Always fails with [`Error::NullAccess`], whatever the operands hold.
    /// Forces callers to pick either [`Nullable::equals_structurally`] (also
    /// available as `==`) or an explicit null check.
    #[deprecated(note = "no strict equality for nullables; use `equals_structurally` or `is_null`")]
    pub fn try_eq<U>(&self, _other: &Nullable<U>) -> Result<bool, Error> {
        Err(Error::NullAccess)
    }
}

impl<T, U> PartialEq<Nullable<U>> for Nullable<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &Nullable<U>) -> bool {
        self.equals_structurally(other)
    }
}

impl<T: Eq> Eq for Nullable<T> {}

impl<T> PartialEq<NoValue> for Nullable<T> {
    #[inline]
    fn eq(&self, _: &NoValue) -> bool {
        self.is_null()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nullable::types::*;
    use crate::nullable;
    use crate::nullable::empty;
    use hashbrown::HashSet;

    #[test]
    fn nulls_are_equal() {
        assert!(Integer::null().equals_structurally(&Integer::null()));
        assert!(empty().equals_structurally(&Character::null()));
        assert!(empty().equals_structurally(&Logical::null()));
        assert_eq!(Double::null(), Double::null());
    }

    #[test]
    fn null_is_not_a_value() {
        assert!(!Nullable::new(0).equals_structurally(&Integer::null()));
        assert!(!Integer::null().equals_structurally(&Nullable::new(0)));
        assert!(!empty().equals_structurally(&Nullable::new(String::new())));
        assert_ne!(Nullable::new(false), Logical::null());
    }

    #[test]
    fn values_compare_inner() {
        assert!(Nullable::new(2).equals_structurally(&Nullable::new(2)));
        assert!(!Nullable::new(2).equals_structurally(&Nullable::new(3)));
        assert!(Nullable::new(String::from("a")).equals_structurally(&Nullable::new("a")));
        assert!(!Nullable::new(f64::NAN).equals_structurally(&Nullable::new(f64::NAN)));
    }

    #[test]
    fn nested_nulls() {
        let inner_null: Nullable<Integer> = Nullable::new(Integer::null());
        assert_eq!(inner_null, Nullable::new(Integer::null()));
        assert_ne!(inner_null, Nullable::<Integer>::null());
        assert_eq!(nullable!(nullable!(1)), nullable!(nullable!(1)));
    }

    #[test]
    fn compare_to_no_value() {
        assert!(Character::null() == NoValue);
        assert!(Nullable::new(1) != NoValue);
    }

    #[test]
    #[allow(deprecated)]
    fn strict_equality_always_fails() {
        assert_eq!(Integer::null().try_eq(&Integer::null()), Err(Error::NullAccess));
        assert_eq!(Nullable::new(1).try_eq(&Nullable::new(1)), Err(Error::NullAccess));
        assert_eq!(Nullable::new(1).try_eq(&Character::null()), Err(Error::NullAccess));
        assert_eq!(empty().try_eq(&empty()), Err(Error::NullAccess));
    }

    #[test]
    fn usable_as_set_keys() {
        let mut seen: HashSet<Integer> = HashSet::new();
        seen.insert(Integer::null());
        seen.insert(Nullable::new(1));
        seen.insert(Integer::null());
        seen.insert(Nullable::new(1));
        assert_eq!(seen.len(), 2);
        assert!(seen.contains(&Integer::null()));
    }
}
