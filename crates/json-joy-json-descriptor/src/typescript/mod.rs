//! Inferred TypeScript types for descriptors.

pub mod converter;
pub mod to_text;
pub mod types;

pub use converter::{alias_to_ts, to_typescript_ast};
pub use to_text::{declaration_to_text, to_text};
pub use types::{TsDeclaration, TsMember, TsType};
