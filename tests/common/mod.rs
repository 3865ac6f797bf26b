//! Shared test utilities for sensorhub integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file.

pub mod assertions;
pub mod builders;
pub mod faulty_store;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use faulty_store::*;
pub use fixtures::*;
