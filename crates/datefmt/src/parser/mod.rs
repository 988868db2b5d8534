//! Format-template scanner.
//!
//! Produces the segment AST the engine substitutes over. Scanning is
//! infallible: text matching no token in the active vocabulary passes
//! through as literal segments.

pub mod ast;
mod template;

pub use ast::*;
pub use template::scan;
