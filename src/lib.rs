//! Library entry point for the msf-inventory CLI.

pub mod aggregate;
pub mod commands;
pub mod config;
pub mod enumerator;
pub mod error;
pub mod filter;
pub mod model;
pub mod parsers;
pub mod runner;
pub mod utils;
