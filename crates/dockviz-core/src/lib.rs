//! # DockViz Core Library
//!
//! Summarization, hit classification and charting of molecular docking scores.
//!
//! ## Architectural Philosophy
//!
//! The library follows a strict three-layer architecture so that the numeric logic stays
//! independent of file formats and drawing backends.
//!
//! - **[`core`]: The Foundation.** Typed data models (`DockingRecord`, `SummaryStats`),
//!   the pure score analysis (summarization, classification, ranking, binning) and the
//!   score table reader.
//!
//! - **[`render`]: The Drawing Layer.** Turns analysis results into SVG charts through
//!   `plotters`. It knows nothing about where the data came from.
//!
//! - **[`workflows`]: The Public API.** Ties `core` and `render` together into complete
//!   procedures (`analyze`, `plot`) with validated configuration.

pub mod core;
pub mod render;
pub mod workflows;
