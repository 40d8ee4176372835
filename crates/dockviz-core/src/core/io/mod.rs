//! Provides input functionality for docking score tables.
//!
//! Tables are read into typed [`DockingRecord`](crate::core::models::record::DockingRecord)s
//! with validation at the boundary: required columns must be present and every non-blank
//! cell must parse. The [`traits::ScoreTable`] trait gives a uniform entry point; the
//! delimited-text implementation lives in [`table`].

pub mod columns;
pub mod table;
pub mod traits;
