//! Core data types and structures
//!
//! This module contains the fundamental data types used throughout
//! graph-analyzer, separated from their implementation logic.

pub mod types;

pub use types::*;
