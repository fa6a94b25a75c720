//! Shared contracts for the product inquiry assistant.
//!
//! Wire DTOs for every backend endpoint plus the client-side logic that does
//! not need a browser: text heuristics, response classification, lead
//! validation, preview parsing and the voice input state machine.

pub mod domain;
pub mod shared;
pub mod usecases;
