//! hostrun - run the active editor file in an automation host
//!
//! Finds the TypeScript project governing a file, checks (through a
//! membership cache) whether the project compiles it, compiles, picks the
//! emitted script that corresponds to the file and launches it in the
//! configured script host.

pub mod cli;
pub mod config;
pub mod error;
pub mod host;
pub mod project;
pub mod runner;
pub mod toolchain;
pub mod ui;

pub use error::{HostrunError, HostrunResult};
