//! Runtime orchestration and lifecycle management.
//!
//! This module contains the infrastructure for running the forms:
//!
//! - **Form lifecycle management**: Starting, wiring, and shutting down form actors
//! - **Observability setup**: Initializing tracing and logging
//!
//! # Main Components
//!
//! - [`ProductConsole`] - Owns one actor per form and their shared transport
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod console;
pub mod tracing;

pub use self::console::{ConsoleError, ProductConsole};
pub use self::tracing::setup_tracing;
