//! Parser error handling module
//!
//! Parsing never fails as a whole. Structural problems inside one value are
//! reported as [`SyntaxError`]s next to the parsed result, and the offending
//! value is kept as verbatim text.
//!
//! - [`ErrorKind`] categorizes errors and carries a stable code
//! - [`SyntaxError`] adds the message, source range, hint and related spans

mod codes;
mod error;

pub use codes::ErrorKind;
pub use error::{RelatedInfo, SyntaxError, SyntaxErrorBuilder};

#[cfg(test)]
mod tests;
