//! # Workflows Module
//!
//! High-level entry points that run a complete procedure over one score table.
//!
//! - **Analysis Workflow** ([`analyze`]) - Read a table, summarize its best poses and
//!   rank them for display. An input without best poses yields an explicit "no data"
//!   outcome instead of an error.
//! - **Plot Workflow** ([`plot`]) - Run the analysis and draw a histogram or a ranked
//!   bar chart from it, skipping rendering when there is no data.
//!
//! Both workflows are synchronous and side-effect free apart from reading the input
//! table and writing the chart.

pub mod analyze;
pub mod config;
pub mod error;
pub mod plot;
