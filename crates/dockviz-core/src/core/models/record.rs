use serde::{Deserialize, Serialize};

/// Pose rank that docking programs assign to the best-scoring conformation of a ligand.
pub const BEST_POSE_MODE: u32 = 1;

/// Represents one pose of one ligand as reported by a docking run.
///
/// Docking programs emit several poses per ligand, ranked by predicted binding energy.
/// Each pose becomes one record; records of the same ligand share a `ligand_id` and
/// differ in `mode`. Only the best pose (`mode == 1`) takes part in summary statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DockingRecord {
    /// Identifier of the docked ligand (e.g., "ZINC000001234567").
    pub ligand_id: String,
    /// Pose rank within the ligand's results, where `1` is the best pose.
    pub mode: u32,
    /// Predicted binding affinity in kcal/mol. More negative means stronger binding.
    pub affinity: f64,
}

impl DockingRecord {
    pub fn new(ligand_id: impl Into<String>, mode: u32, affinity: f64) -> Self {
        Self {
            ligand_id: ligand_id.into(),
            mode,
            affinity,
        }
    }

    /// Returns `true` if this record is the best-ranked pose of its ligand.
    #[inline]
    pub fn is_best_pose(&self) -> bool {
        self.mode == BEST_POSE_MODE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_borrowed_and_owned_ids() {
        let a = DockingRecord::new("L1", 1, -9.2);
        let b = DockingRecord::new(String::from("L1"), 1, -9.2);
        assert_eq!(a, b);
    }

    #[test]
    fn only_mode_one_is_best_pose() {
        assert!(DockingRecord::new("L1", 1, -9.2).is_best_pose());
        assert!(!DockingRecord::new("L1", 2, -8.7).is_best_pose());
        assert!(!DockingRecord::new("L1", 0, -9.9).is_best_pose());
    }
}
