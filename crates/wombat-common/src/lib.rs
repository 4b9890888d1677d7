//! Common utilities for the Wombat renderer.
//!
//! This crate provides shared infrastructure used by all renderer components:
//! - **Warning System** - colored terminal output for unsupported features

pub mod warning;
