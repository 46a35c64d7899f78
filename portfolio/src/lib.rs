//! Contact form and project listing pipelines for a personal portfolio site.
//!
//! The crate keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (field validation, the submission
//!   state machine, pagination, card text). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (config files, project data, the
//!   webhook transport). Isolated behind traits so tests never hit the network.
//!
//! Orchestration modules ([`contact`], [`listing`]) combine the two and back
//! the `portfolio` CLI and the `portfolio-ui` server.

pub mod contact;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod listing;
pub mod logging;
pub mod project;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
