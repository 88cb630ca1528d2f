//! Link Match (workspace facade crate).
//!
//! Re-exports the member crates under one name so the binary, integration
//! tests and benchmarks can write `link_match::{core,input,term,types}`.

pub use link_match_core as core;
pub use link_match_input as input;
pub use link_match_term as term;
pub use link_match_types as types;
