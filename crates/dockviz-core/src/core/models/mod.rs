//! Data models for docking results.
//!
//! A [`record::DockingRecord`] is one pose of one ligand as produced by a docking run.
//! Statistics derived from a set of records live in [`summary`].

pub mod record;
pub mod summary;
