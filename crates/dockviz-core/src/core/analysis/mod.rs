//! Score analysis over docking records.
//!
//! All functions here are pure: they borrow records, never mutate them, and never
//! touch the filesystem.
//!
//! - [`threshold`] - The validated hit threshold and the hit/non-hit classification rule
//! - [`summarize`] - Best-pose filtering and summary statistics
//! - [`ranking`] - Deterministic display order for ranked charts and listings
//! - [`histogram`] - Equal-width binning of best-pose scores

pub mod histogram;
pub mod ranking;
pub mod summarize;
pub mod threshold;
