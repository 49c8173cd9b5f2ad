//! Common utilities for the Wallaby layout engine.
//!
//! This crate provides shared infrastructure used by the other components:
//! - **Warning System** - deduplicated, re-armable warnings with colored
//!   terminal output

pub mod warning;
