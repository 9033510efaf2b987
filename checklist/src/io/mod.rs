//! Host-facing seams: storage, document surface, configuration.

pub mod config;
pub mod document;
pub mod persistence;
pub mod store;
pub mod view;
