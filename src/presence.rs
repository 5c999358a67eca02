//! Explicit "not provided by this version" marker for canonical fields

use serde::{Serialize, Serializer};

/// A canonical field that older wire versions do not carry.
///
/// `Unset` means the source payload had no such key. It is distinct from a
/// present `null`, which nullable fields express as `Presence::Set(None)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Presence<T> {
    Unset,
    Set(T),
}

impl<T> Presence<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, Presence::Unset)
    }

    pub fn is_set(&self) -> bool {
        !self.is_unset()
    }

    pub fn as_ref(&self) -> Presence<&T> {
        match self {
            Presence::Unset => Presence::Unset,
            Presence::Set(value) => Presence::Set(value),
        }
    }

    /// The provided value, if any
    pub fn get(&self) -> Option<&T> {
        match self {
            Presence::Unset => None,
            Presence::Set(value) => Some(value),
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Presence::Unset => None,
            Presence::Set(value) => Some(value),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Presence<U> {
        match self {
            Presence::Unset => Presence::Unset,
            Presence::Set(value) => Presence::Set(f(value)),
        }
    }
}

impl<T: AsRef<str>> Presence<T> {
    pub fn as_deref(&self) -> Presence<&str> {
        match self {
            Presence::Unset => Presence::Unset,
            Presence::Set(value) => Presence::Set(value.as_ref()),
        }
    }
}

impl<T> Default for Presence<T> {
    fn default() -> Self {
        Presence::Unset
    }
}

impl<T> From<T> for Presence<T> {
    fn from(value: T) -> Self {
        Presence::Set(value)
    }
}

/// Canonical records skip unset fields with `skip_serializing_if`; an unset
/// value reached anyway serializes as `null`.
impl<T: Serialize> Serialize for Presence<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Presence::Unset => serializer.serialize_none(),
            Presence::Set(value) => value.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_is_not_null() {
        let unset: Presence<Option<String>> = Presence::Unset;
        let null: Presence<Option<String>> = Presence::Set(None);
        assert_ne!(unset, null);
        assert!(null.is_set());
        assert_eq!(null.get(), Some(&None));
    }

    #[test]
    fn test_as_deref() {
        let roman = Presence::Set("Tokyo".to_string());
        assert_eq!(roman.as_deref(), Presence::Set("Tokyo"));
        assert_eq!(Presence::<String>::Unset.as_deref(), Presence::Unset);
        assert_eq!(roman.map(|r| r.len()), Presence::Set(5));
    }
}
