use std::fs;
use std::path::Path;

use fem1d_assembly::ProblemDescription;
use log::debug;

use crate::error::Result;

/// Read a problem description from a JSON file.
///
/// Both the short (`E`, `A`, `u0`, `f`, `t`, `h`) and the long field names
/// are accepted. The description is not validated here; assembly does that.
pub fn load_problem(path: impl AsRef<Path>) -> Result<ProblemDescription> {
    let path = path.as_ref();
    let bytes = crate::read_file(path)?;
    let problem: ProblemDescription = serde_json::from_slice(&bytes)?;
    debug!(
        "Loaded problem from {}: {} DOFs",
        path.display(),
        problem.num_dofs()
    );
    Ok(problem)
}

/// Parse a problem description from a JSON string
pub fn parse_problem(json: &str) -> Result<ProblemDescription> {
    Ok(serde_json::from_str(json)?)
}

/// Write a problem description as pretty JSON with the long field names
pub fn save_problem(path: impl AsRef<Path>, problem: &ProblemDescription) -> Result<()> {
    let path = path.as_ref();
    crate::ensure_parent_dir(path)?;
    let bytes = serde_json::to_vec_pretty(problem)?;
    fs::write(path, bytes)?;
    Ok(())
}
