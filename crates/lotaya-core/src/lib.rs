//! Shared domain types for the Lotaya gateway
//!
//! The generation record and its state machine live here so the store,
//! the provider crates, and the server all agree on one vocabulary.

#![allow(clippy::must_use_candidate)]

mod error;
mod record;

pub use error::HttpError;
pub use record::{
    GenerationKind, GenerationRecord, GenerationResult, GenerationStatus, TerminalState,
};
