//! Library module for section management
//!
//! Holds the fixed set of topical sections and their backing folders.

mod section;

pub use section::*;
