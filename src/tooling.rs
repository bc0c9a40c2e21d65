//! Tooling & Integration Layer
//!
//! Command-line surface for the scaffolder. Commands are workspace-scoped and
//! idempotent: re-running against an already-scaffolded workspace is a no-op.

pub mod cli;

pub use cli::{Cli, CliContext, Commands};
