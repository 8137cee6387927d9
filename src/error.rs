//! Centralized error type for the crescendo umbrella crate.
//!
//! Wraps the subsystem errors so `?` propagates naturally across crate
//! boundaries.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] crescendo_core::Error),

    #[error(transparent)]
    Automation(#[from] crescendo_automation::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
