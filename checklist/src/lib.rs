//! State synchronizer for a checklist/accordion widget.
//!
//! The widget renders a fixed sequence of collapsible step panels, tracks which
//! steps are complete, remembers the single open step across sessions, and keeps
//! a side navigation and progress indicator in sync. The architecture keeps the
//! same split throughout:
//!
//! - **[`core`]**: Pure, deterministic logic (state store, snapshot codec,
//!   projections, event transitions). No I/O, fully testable in isolation.
//! - **[`io`]**: The host-facing seams: the key-value store behind persistence,
//!   the document surface the view is projected onto, and configuration.
//!
//! [`controller`] wires core logic to the I/O seams and [`sync`] applies
//! projections to a [`io::view::View`]. A browser host implements
//! [`io::view::View`] over the DOM and [`io::store::KeyValueStore`] over
//! `localStorage`; [`io::document::StaticDocument`] and the bundled stores cover
//! headless hosting and tests.

pub mod controller;
pub mod core;
pub mod io;
pub mod logging;
pub mod sync;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
