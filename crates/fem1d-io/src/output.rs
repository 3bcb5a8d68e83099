use std::fs;
use std::path::Path;

use chrono::Utc;
use fem1d_assembly::GlobalSystem;

use crate::error::Result;

const SYMMETRY_TOLERANCE: f64 = 1e-12;

/// Summary of an assembly run, written at the top of the DAT report
#[derive(Debug, Clone, PartialEq)]
pub struct JobReport {
    pub job_name: String,
    pub num_dofs: usize,
    pub num_elements: usize,
    pub bandwidth: usize,
    pub symmetric: bool,
}

impl JobReport {
    pub fn from_system(job_name: impl Into<String>, system: &GlobalSystem) -> Self {
        Self {
            job_name: job_name.into(),
            num_dofs: system.num_dofs,
            num_elements: system.num_dofs.saturating_sub(1),
            bandwidth: system.bandwidth(),
            symmetric: system.is_symmetric(SYMMETRY_TOLERANCE),
        }
    }
}

/// Render the DAT report text (header, K row by row, then F)
pub fn format_dat(report: &JobReport, system: &GlobalSystem) -> String {
    let mut body = format!(
        "*FEM1D DAT REPORT\n\
         JOB: {}\n\
         GENERATED: {}\n\
         DOFS: {}\n\
         ELEMENTS: {}\n\
         BANDWIDTH: {}\n\
         SYMMETRIC: {}\n",
        report.job_name,
        Utc::now().to_rfc3339(),
        report.num_dofs,
        report.num_elements,
        report.bandwidth,
        if report.symmetric { "YES" } else { "NO" },
    );

    body.push_str("*STIFFNESS\n");
    for i in 0..system.num_dofs {
        let row: Vec<String> = (0..system.num_dofs)
            .map(|j| format!("{:.6e}", system.stiffness[(i, j)]))
            .collect();
        body.push_str(&row.join(" "));
        body.push('\n');
    }

    body.push_str("*FORCE\n");
    for (i, value) in system.force.iter().enumerate() {
        body.push_str(&format!("{:>6} {:.6e}\n", i, value));
    }

    body
}

pub fn write_dat(path: impl AsRef<Path>, report: &JobReport, system: &GlobalSystem) -> Result<()> {
    let path = path.as_ref();
    crate::ensure_parent_dir(path)?;
    fs::write(path, format_dat(report, system))?;
    Ok(())
}
