use super::expansion::Expansion;
use super::see::SeeDecl;
use super::section::SectionRef;
use crate::base::Ident;
use std::fmt;

/// One classified legal-value description.
///
/// Classification is total: anything the grammar does not recognize is kept
/// verbatim in [`Enum::Other`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Enum {
    /// `[Table 8.14]`
    TableRef(SectionRef),
    /// `[Tables 8.14, 8.15]`, never empty
    TableRefs(Vec<SectionRef>),
    /// `See TexImage1D`
    See(SeeDecl),
    /// `Bitwise OR of ...`
    Bitwise(Formula),
    /// `or ...` continuing a bitwise list
    Or(Formula),
    /// A bare all-caps enumerant (`[A-Z_]+`)
    Variant(Ident),
    /// A templated all-caps family (`TEXTURE_{WIDTH, HEIGHT}`, `CLIP_DISTANCEi`)
    Family(Family),
    /// Anything else, verbatim
    Other(String),
}

impl Enum {
    pub fn is_other(&self) -> bool {
        matches!(self, Self::Other(_))
    }

    /// Referenced tables, if this value is a table delegation
    pub fn table_refs(&self) -> &[SectionRef] {
        match self {
            Self::TableRef(section) => std::slice::from_ref(section),
            Self::TableRefs(sections) => sections,
            _ => &[],
        }
    }
}

impl fmt::Display for Enum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TableRef(section) => write!(f, "[Table {section}]"),
            Self::TableRefs(sections) => {
                let sections: Vec<String> = sections.iter().map(ToString::to_string).collect();
                write!(f, "[Tables {}]", sections.join(", "))
            }
            Self::See(decl) => write!(f, "{decl}"),
            Self::Bitwise(formula) => write!(f, "Bitwise {formula}"),
            Self::Or(formula) => write!(f, "or {formula}"),
            Self::Variant(name) => f.write_str(name),
            Self::Family(family) => f.write_str(&family.template),
            Self::Other(text) => f.write_str(text),
        }
    }
}

/// An opaque bitwise/logical expression fragment with whitespace collapsed
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Formula(String);

impl Formula {
    pub fn new(text: &str) -> Self {
        Self(text.split_whitespace().collect::<Vec<_>>().join(" "))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Append `or <continuation>` to this formula
    pub fn or(&self, continuation: &Formula) -> Self {
        Self(format!("{} or {}", self.0, continuation.0))
    }

    /// Append one more comma-listed operand
    pub fn then(&self, operand: &str) -> Self {
        Self(format!("{}, {}", self.0, Formula::new(operand).0))
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A templated identifier family with its members
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Family {
    /// Source text of the template, whitespace collapsed
    pub template: String,
    pub members: Expansion,
}
