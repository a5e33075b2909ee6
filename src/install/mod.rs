// file: src/install/mod.rs
// version: 1.0.0
// guid: 5d7f9b1c-3e4a-4b6d-8f0c-4a6e8c0d2f4a

//! Package installation with retry through transient failures

pub mod installer;
pub mod pip;
pub mod retry;

pub use installer::PackageInstaller;
pub use retry::RetryPolicy;
