// file: src/logging/mod.rs
// version: 1.0.0
// guid: 5e8a1c3d-7f2b-4d9e-a0c6-3b5f7d9e1a4c

//! Logging setup for the host bootstrap agent

pub mod logger;
