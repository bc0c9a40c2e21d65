//! create-ers-web: Idempotent Web Project Scaffolder
//!
//! Creates the fixed directory tree and boilerplate files of an ERS web
//! project (a REST route, a GraphQL endpoint, a websocket channel, and a
//! React single-page app), then drives the Bun toolchain to initialize and
//! populate the dependency manifests. Every filesystem operation is
//! idempotent: existing directories and files are never touched.

pub mod config;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod scaffold;
pub mod templates;
pub mod toolchain;
pub mod tooling;
pub mod workspace;
