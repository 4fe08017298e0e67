//! Common utilities for selcraft.
//!
//! This crate provides shared infrastructure used by the selcraft tools:
//! - **Warning System** - deduplicated, colored terminal warnings

pub mod warning;
