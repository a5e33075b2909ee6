// file: src/cli/mod.rs
// version: 1.0.0
// guid: 3d5f7b9c-1e2a-4d6b-8f0a-2c4e6a8c0d2c

//! Command line interface for the host bootstrap agent

pub mod args;
pub mod commands;
