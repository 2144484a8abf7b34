//! Registry of known templated identifier families
//!
//! Some families in the reference tables are written with a lower-case
//! placeholder whose range depends on an implementation limit, e.g.
//! `CLIP_DISTANCEi` for `i` in `[0, MAX_CLIP_DISTANCES-1]`. The library maps
//! such signatures to an expansion rule so the grammar itself stays free of
//! family-specific logic.
//!
//! The built-in catalog is created once on first use and never mutated.

use crate::base::{Ident, is_upper_ident};
use crate::syntax::{Bound, Expansion, SymbolicRange};
use indexmap::IndexSet;
use rustc_hash::FxHashMap;
use std::sync::LazyLock;

static BUILTIN: LazyLock<PatternLibrary> = LazyLock::new(|| {
    PatternLibrary::builder()
        .range("CLIP_DISTANCE", 'i', 0, Bound::last_index_of("MAX_CLIP_DISTANCES"))
        .range(
            "TEXTURE",
            'i',
            0,
            Bound::last_index_of_max(["MAX_TEXTURE_COORDS", "MAX_COMBINED_TEXTURE_IMAGE_UNITS"]),
        )
        .range("COLOR_ATTACHMENT", 'i', 0, Bound::last_index_of("MAX_COLOR_ATTACHMENTS"))
        .range("DRAW_BUFFER", 'i', 0, Bound::last_index_of("MAX_DRAW_BUFFERS"))
        .build()
});

/// How a registered family expands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FamilyRule {
    /// A fixed member list
    Literal(IndexSet<Ident>),
    /// Members depend on a limit resolved by the caller
    Range(SymbolicRange),
}

impl FamilyRule {
    pub fn expansion(&self) -> Expansion {
        match self {
            Self::Literal(members) => Expansion::Literal(members.clone()),
            Self::Range(range) => Expansion::Range(range.clone()),
        }
    }
}

/// Read-only mapping from family signature to [`FamilyRule`]
#[derive(Debug, Clone, Default)]
pub struct PatternLibrary {
    families: FxHashMap<Ident, FamilyRule>,
}

impl PatternLibrary {
    /// The process-wide built-in catalog
    pub fn builtin() -> &'static PatternLibrary {
        &BUILTIN
    }

    /// A library with no registered families
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builder() -> PatternLibraryBuilder {
        PatternLibraryBuilder::default()
    }

    pub fn lookup(&self, signature: &str) -> Option<&FamilyRule> {
        self.families.get(signature)
    }

    pub fn contains(&self, signature: &str) -> bool {
        self.families.contains_key(signature)
    }

    pub fn signatures(&self) -> impl Iterator<Item = &Ident> {
        self.families.keys()
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }
}

/// Builder for custom catalogs
#[derive(Debug, Default)]
pub struct PatternLibraryBuilder {
    families: FxHashMap<Ident, FamilyRule>,
}

impl PatternLibraryBuilder {
    /// Register `prefix` + `placeholder` as an index family running from
    /// `start` to `end`.
    pub fn range(mut self, prefix: &str, placeholder: char, start: u32, end: Bound) -> Self {
        let range = SymbolicRange::new(prefix, placeholder, start, end);
        self.families.insert(range.signature(), FamilyRule::Range(range));
        self
    }

    /// Register `signature` as a family with a fixed member list.
    pub fn literal<I, S>(mut self, signature: &str, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Ident>,
    {
        let members = members.into_iter().map(Into::into).collect();
        self.families.insert(signature.into(), FamilyRule::Literal(members));
        self
    }

    pub fn build(self) -> PatternLibrary {
        PatternLibrary {
            families: self.families,
        }
    }
}

/// Split `CLIP_DISTANCEi` into `("CLIP_DISTANCE", 'i')`.
///
/// The signature must be an all-caps prefix followed by exactly one
/// lower-case ASCII placeholder letter.
pub fn split_placeholder(signature: &str) -> Option<(&str, char)> {
    let placeholder = signature.chars().last()?;
    if !placeholder.is_ascii_lowercase() {
        return None;
    }
    let prefix = &signature[..signature.len() - 1];
    is_upper_ident(prefix).then_some((prefix, placeholder))
}
