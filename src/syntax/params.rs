use super::enumeration::Enum;
use crate::base::Ident;
use std::fmt;

/// One fully parsed cell: the parameter names and their legal values.
///
/// Both lists are non-empty; the parser substitutes placeholders for
/// degenerate cells.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Params {
    pub names: Vec<Ident>,
    pub values: Vec<Enum>,
}

impl Params {
    /// Values that fell through to the `Other` fallback
    pub fn unrecognized(&self) -> impl Iterator<Item = &str> {
        self.values.iter().filter_map(|value| match value {
            Enum::Other(text) => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn has_name(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.names.iter().map(Ident::as_str).collect();
        let values: Vec<String> = self.values.iter().map(ToString::to_string).collect();
        write!(f, "{}: {}", names.join(", "), values.join(", "))
    }
}
