//! Result model for parsed parameter cells
//!
//! Every type here is plain data: created by the parser, immutable
//! afterwards, and handed to the caller. With the `serde` feature enabled the
//! whole model can be serialized.

mod enumeration;
mod expansion;
mod ident;
mod params;
mod section;
mod see;

pub use enumeration::{Enum, Family, Formula};
pub use expansion::{Bound, Expansion, SymbolicRange};
pub use ident::{MultiIdent, Recipy};
pub use params::Params;
pub use section::{SectionDef, SectionHeading, SectionRef};
pub use see::SeeDecl;
