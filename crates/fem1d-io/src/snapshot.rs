use std::fs;
use std::path::Path;

use fem1d_assembly::GlobalSystem;
use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

use crate::error::{IoError, Result};

pub const SNAPSHOT_SCHEMA_VERSION: u32 = 1;

/// Serializable copy of an assembled system (K stored row by row)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SystemSnapshot {
    pub schema_version: u32,
    pub num_dofs: usize,
    pub stiffness: Vec<Vec<f64>>,
    pub force: Vec<f64>,
    /// Snapshots written before this field existed load as "not applied"
    #[serde(default)]
    pub boundary_conditions_applied: bool,
}

impl SystemSnapshot {
    pub fn from_system(system: &GlobalSystem) -> Self {
        let n = system.num_dofs;
        let stiffness = (0..n)
            .map(|i| (0..n).map(|j| system.stiffness[(i, j)]).collect())
            .collect();
        Self {
            schema_version: SNAPSHOT_SCHEMA_VERSION,
            num_dofs: n,
            stiffness,
            force: system.force.iter().copied().collect(),
            boundary_conditions_applied: system.boundary_conditions_applied(),
        }
    }

    /// Rebuild the system, checking that every row and the force vector
    /// have `num_dofs` entries
    pub fn to_system(&self) -> Result<GlobalSystem> {
        let n = self.num_dofs;
        if self.stiffness.len() != n {
            return Err(IoError::InvalidData(format!(
                "stiffness has {} rows, expected {}",
                self.stiffness.len(),
                n
            )));
        }
        if let Some((i, row)) = self.stiffness.iter().enumerate().find(|(_, r)| r.len() != n) {
            return Err(IoError::InvalidData(format!(
                "stiffness row {} has {} entries, expected {}",
                i,
                row.len(),
                n
            )));
        }
        if self.force.len() != n {
            return Err(IoError::InvalidData(format!(
                "force has {} entries, expected {}",
                self.force.len(),
                n
            )));
        }

        Ok(GlobalSystem::from_parts(
            DMatrix::from_fn(n, n, |i, j| self.stiffness[i][j]),
            DVector::from_column_slice(&self.force),
            self.boundary_conditions_applied,
        )?)
    }
}

pub fn save_system(path: impl AsRef<Path>, system: &GlobalSystem) -> Result<()> {
    let path = path.as_ref();
    crate::ensure_parent_dir(path)?;
    let bytes = serde_json::to_vec_pretty(&SystemSnapshot::from_system(system))?;
    fs::write(path, bytes)?;
    Ok(())
}

pub fn load_system(path: impl AsRef<Path>) -> Result<GlobalSystem> {
    let bytes = crate::read_file(path.as_ref())?;
    let snapshot: SystemSnapshot = serde_json::from_slice(&bytes)?;
    if snapshot.schema_version != SNAPSHOT_SCHEMA_VERSION {
        return Err(IoError::InvalidData(format!(
            "unsupported snapshot schema version {}",
            snapshot.schema_version
        )));
    }
    snapshot.to_system()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fem1d_assembly::reference_problem;
    use tempfile::tempdir;

    #[test]
    fn snapshot_stores_rows_in_order() {
        let system = GlobalSystem::assemble(&reference_problem()).unwrap();
        let snapshot = SystemSnapshot::from_system(&system);

        assert_eq!(snapshot.num_dofs, 5);
        assert_eq!(snapshot.stiffness[0], vec![2.0, -1.0, 0.0, 0.0, 0.0]);
        assert_eq!(snapshot.stiffness[4], vec![0.0, 0.0, 0.0, -1.0, 1.0]);
        assert_eq!(snapshot.force[1], 2.0);
    }

    #[test]
    fn saved_system_loads_back_identical() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("system.json");
        let system = GlobalSystem::assemble(&reference_problem()).unwrap();

        save_system(&path, &system).expect("save should succeed");
        let loaded = load_system(&path).expect("load should succeed");
        assert_eq!(loaded, system);
    }

    #[test]
    fn rejects_ragged_rows() {
        let snapshot = SystemSnapshot {
            schema_version: SNAPSHOT_SCHEMA_VERSION,
            num_dofs: 2,
            stiffness: vec![vec![1.0, 0.0], vec![0.0]],
            force: vec![0.0, 0.0],
            boundary_conditions_applied: false,
        };
        let err = snapshot.to_system().unwrap_err();
        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn rejects_unknown_schema_version() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("future.json");
        let snapshot = SystemSnapshot {
            schema_version: 99,
            num_dofs: 1,
            stiffness: vec![vec![1.0]],
            force: vec![1.0],
            boundary_conditions_applied: true,
        };
        fs::write(&path, serde_json::to_vec(&snapshot).unwrap()).unwrap();
        assert!(matches!(load_system(&path), Err(IoError::InvalidData(_))));
    }

    #[test]
    fn load_system_fails_for_missing_file() {
        let dir = tempdir().expect("create temp dir");
        let err = load_system(dir.path().join("missing.json")).expect_err("missing file");
        assert!(matches!(err, IoError::FileNotFound(ref name) if name.ends_with("missing.json")));
    }

    #[test]
    fn loaded_system_keeps_boundary_condition_state() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("system.json");
        save_system(&path, &GlobalSystem::assemble(&reference_problem()).unwrap()).unwrap();

        let mut loaded = load_system(&path).unwrap();
        assert!(loaded.boundary_conditions_applied());
        assert!(
            loaded
                .apply_boundary_conditions(&reference_problem())
                .is_err()
        );
    }

    #[test]
    fn snapshot_without_state_field_loads_as_pending() {
        let json = r#"{"schema_version":1,"num_dofs":1,"stiffness":[[1.0]],"force":[2.0]}"#;
        let snapshot: SystemSnapshot = serde_json::from_str(json).unwrap();
        assert!(!snapshot.boundary_conditions_applied);
        assert!(!snapshot.to_system().unwrap().boundary_conditions_applied());
    }
}
