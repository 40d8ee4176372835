use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Default hit cutoff in kcal/mol.
pub const DEFAULT_THRESHOLD_KCAL_MOL: f64 = -8.0;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ThresholdError {
    #[error("Threshold must be a finite number of kcal/mol, got {0}")]
    NotFinite(f64),
}

/// Whether a pose counts as a hit against a [`Threshold`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Classification {
    Hit,
    NonHit,
}

impl Classification {
    pub fn is_hit(self) -> bool {
        self == Classification::Hit
    }
}

/// A binding-affinity cutoff in kcal/mol. Lower values are stricter.
///
/// A pose is a hit iff its affinity is less than or equal to the threshold, so a pose
/// scoring exactly at the cutoff is a hit.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Threshold(f64);

impl Threshold {
    pub fn new(value: f64) -> Result<Self, ThresholdError> {
        if value.is_finite() {
            Ok(Self(value))
        } else {
            Err(ThresholdError::NotFinite(value))
        }
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn is_hit(self, affinity: f64) -> bool {
        affinity <= self.0
    }

    pub fn classify(self, affinity: f64) -> Classification {
        if self.is_hit(affinity) {
            Classification::Hit
        } else {
            Classification::NonHit
        }
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(DEFAULT_THRESHOLD_KCAL_MOL)
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}
