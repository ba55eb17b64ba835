//! prune-empty: Remove empty files and empty directory trees
//!
//! This library scans directory trees bottom-up, collects zero-byte files and
//! directories that would be empty once those files are gone, and removes them.

pub mod cli;
pub mod config;
pub mod error;
pub mod ordered_set;
pub mod path_checker;
pub mod remover;
pub mod scanner;
pub mod signals;
