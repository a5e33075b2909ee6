// file: src/exec/mod.rs
// version: 1.0.0
// guid: 8b3e5d7f-0a2c-4e6b-8d1f-3a5c7e9b0d2f

//! Command execution abstraction

pub mod runner;

pub use runner::{CommandRunner, LocalRunner};
