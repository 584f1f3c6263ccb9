//! Foundation types for termfolio.
//!
//! This crate contains the core types shared by all termfolio crates:
//! command outcome kinds, scrollback output records, the closed directory
//! and theme enums, terminal configuration, and error types.

pub mod config;
pub mod error;
pub mod outcome;
pub mod path;
pub mod theme;
pub mod timestamp;
