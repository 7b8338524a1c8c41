#![forbid(unsafe_code)]
//! dirtree — print a directory as a text tree, leaving out entries that
//! match built-in or user-supplied ignore patterns.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod ignore_file;
pub mod matcher;
pub mod render;
pub mod tree;
