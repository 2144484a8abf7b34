use super::ident::{MultiIdent, Recipy};
use std::fmt;

/// A parsed cross-reference phrase.
///
/// The variant is chosen by which clauses follow `See`:
///
/// ```text
/// See X                 → Delegation(X)
/// See X for Y           → ParamDelegation(X, Y)
/// See X [for Y] in Z    → Fallback(X, Y?, Z)
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SeeDecl {
    Delegation(MultiIdent),
    ParamDelegation(MultiIdent, MultiIdent),
    Fallback(MultiIdent, Option<MultiIdent>, Option<Recipy>),
}

impl SeeDecl {
    /// The identifier family the reader is sent to first
    pub fn subject(&self) -> &MultiIdent {
        match self {
            Self::Delegation(subject)
            | Self::ParamDelegation(subject, _)
            | Self::Fallback(subject, _, _) => subject,
        }
    }
}

impl fmt::Display for SeeDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Delegation(subject) => write!(f, "See {subject}"),
            Self::ParamDelegation(param, target) => write!(f, "See {param} for {target}"),
            Self::Fallback(subject, target, recipy) => {
                write!(f, "See {subject}")?;
                if let Some(target) = target {
                    write!(f, " for {target}")?;
                }
                if let Some(recipy) = recipy {
                    write!(f, " in {recipy}")?;
                }
                Ok(())
            }
        }
    }
}
