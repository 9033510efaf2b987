//! Deterministic, pure logic behind the checklist widget.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data structures and return deterministic outputs suitable for tests.

pub mod layout;
pub mod progress;
pub mod projection;
pub mod snapshot;
pub mod state;
pub mod transition;
pub mod types;
