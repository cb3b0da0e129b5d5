//! Core libraries for the `qraft` GraphQL client generator.
//!
//! The pipeline is a pure transformation over fully-materialized inputs:
//!
//! 1. [`schema::Schema`] indexes a parsed GraphQL schema document.
//! 2. [`document::QueryDocument`] wraps a parsed executable document plus
//!    its raw source text.
//! 3. [`closure::ClosureResolver`] walks every operation against the
//!    schema and produces a [`closure::TypeClosure`]: the minimal mapping
//!    of schema type name -> selected field names needed to satisfy the
//!    document.
//! 4. [`model::CodeModelBuilder`] turns the closure plus the operations
//!    into a language-agnostic [`model::CodeModel`].
//! 5. [`emit::RustEmitter`] renders the model as one formatted Rust
//!    module.
//!
//! [`generate()`] runs the whole pipeline over raw schema/query text.
//! Raw GraphQL parsing is delegated to the `graphql-parser` crate; see
//! the [`ast`] facade.

pub mod ast;
pub mod casing;
pub mod closure;
pub mod document;
pub mod emit;
mod error;
mod generate;
pub mod model;
pub mod schema;

pub use error::GenerateError;
pub use generate::generate;
pub use generate::GenerateConfig;
