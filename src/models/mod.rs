//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod event;
pub mod participant;

pub use event::*;
pub use participant::*;
