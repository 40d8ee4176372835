//! # Core Module
//!
//! Fundamental building blocks for working with docking results.
//!
//! - **Data Models** ([`models`]) - Docking records and derived summary statistics
//! - **Score Analysis** ([`analysis`]) - Best-pose filtering, hit classification,
//!   display ranking and histogram binning
//! - **File I/O** ([`io`]) - Reading docking score tables with validation at the boundary
//!
//! Everything in this module is side-effect free except [`io`], which only reads.

pub mod analysis;
pub mod io;
pub mod models;
