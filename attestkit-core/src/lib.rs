//! Core functionality for `AttestKit`, an app-attestation client for mobile
//! hosts. This crate currently ships the debug-mode credential provider used
//! in test and CI environments.
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]

mod debug_provider;
pub use debug_provider::*;

mod environment;
pub use environment::*;

mod error;
pub use error::*;

pub mod logger;

mod request;
pub use request::*;

pub mod storage;

// private modules
mod token;

uniffi::setup_scaffolding!("attestkit_core");
