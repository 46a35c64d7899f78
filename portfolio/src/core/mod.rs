//! Deterministic, pure logic for the contact form and the project listing.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data structures and return deterministic outputs suitable for tests.

pub mod catalog;
pub mod form;
pub mod paging;
pub mod submission;
