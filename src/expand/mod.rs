//! Expansion of templated identifier families
//!
//! Two engines live here:
//! - [`expand`] turns a parsed [`MultiIdent`] into its members, consulting
//!   the [`PatternLibrary`] for families whose size depends on an
//!   implementation limit.
//! - [`expand_template`] expands free-standing all-caps templates with
//!   nested `{...}` and optional `[...]` groups, e.g.
//!   `[UN]PACK_{ALIGNMENT, SKIP_{ROWS, PIXELS}}`.

mod library;
mod template;

pub use crate::syntax::{Bound, Expansion, SymbolicRange};
pub use library::{FamilyRule, PatternLibrary, PatternLibraryBuilder, split_placeholder};
pub use template::{TemplateError, expand_template, is_template};

use crate::base::Ident;
use crate::syntax::MultiIdent;
use indexmap::IndexSet;

/// Expand a [`MultiIdent`] into its members.
///
/// - With listed alternatives: `base + alternative + suffix` for each one.
/// - Without alternatives but with a signature known to `library`: the
///   library's rule (possibly a symbolic range).
/// - Otherwise the singleton `{base}`.
pub fn expand(ident: &MultiIdent, library: &PatternLibrary) -> Expansion {
    if ident.is_templated() {
        let suffix = ident.suffix.as_deref().unwrap_or("");
        let members: IndexSet<Ident> = ident
            .expansions
            .iter()
            .map(|alternative| Ident::from(format!("{}{}{}", ident.base, alternative, suffix)))
            .collect();
        return Expansion::Literal(members);
    }

    if let Some(rule) = library.lookup(&ident.base) {
        tracing::trace!(signature = %ident.base, "family resolved from pattern library");
        return rule.expansion();
    }

    Expansion::literal([ident.base.clone()])
}
