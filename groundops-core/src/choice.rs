use serde::{Deserialize, Serialize};

/// A categorical selector: either the "match-all" sentinel or one exact value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Choice<T> {
    Any,
    Only(T),
}

impl<T> Choice<T> {
    /// Exact, case-sensitive comparison against the record's field.
    pub fn admits<U>(&self, value: &U) -> bool
    where
        T: PartialEq<U>,
        U: ?Sized,
    {
        match self {
            Choice::Any => true,
            Choice::Only(expected) => expected == value,
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Choice::Any)
    }

    pub fn selected(&self) -> Option<&T> {
        match self {
            Choice::Any => None,
            Choice::Only(value) => Some(value),
        }
    }
}

impl<T> Default for Choice<T> {
    fn default() -> Self {
        Choice::Any
    }
}

impl<T> From<Option<T>> for Choice<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Choice::Any, Choice::Only)
    }
}
