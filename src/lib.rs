pub mod cli;
pub mod mappings;
pub mod rewriter;
