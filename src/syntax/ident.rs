use crate::base::Ident;
use indexmap::IndexSet;
use std::fmt;

/// A templated identifier family: `base{alt alt ...}suffix`.
///
/// `TEXTURE_{WIDTH, HEIGHT}` has base `TEXTURE_` and two expansions, a plain
/// `TexImage1D` has an empty expansion set and no suffix. Expansions keep
/// source order; duplicates collapse.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiIdent {
    pub base: Ident,
    pub expansions: IndexSet<Ident>,
    pub suffix: Option<Ident>,
}

impl MultiIdent {
    /// An ordinary identifier with no placeholder group
    pub fn plain(base: impl Into<Ident>) -> Self {
        Self {
            base: base.into(),
            expansions: IndexSet::new(),
            suffix: None,
        }
    }

    pub fn templated<I, S>(base: impl Into<Ident>, expansions: I, suffix: Option<Ident>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Ident>,
    {
        Self {
            base: base.into(),
            expansions: expansions.into_iter().map(Into::into).collect(),
            suffix,
        }
    }

    pub fn is_templated(&self) -> bool {
        !self.expansions.is_empty()
    }

    /// The signature used for Pattern Library lookups: `base` + `suffix`.
    pub fn signature(&self) -> Ident {
        match &self.suffix {
            Some(suffix) => format!("{}{}", self.base, suffix).into(),
            None => self.base.clone(),
        }
    }
}

impl fmt::Display for MultiIdent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base)?;
        if self.is_templated() {
            let alternatives: Vec<&str> = self.expansions.iter().map(Ident::as_str).collect();
            write!(f, "{{{}}}", alternatives.join(", "))?;
        }
        if let Some(suffix) = &self.suffix {
            f.write_str(suffix)?;
        }
        Ok(())
    }
}

/// A bare labeling word, as in `See X for Y in <recipy>`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recipy(pub Ident);

impl fmt::Display for Recipy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
