//! I/O support for fem1d.
//!
//! This crate provides:
//! - **Problem files**: JSON problem descriptions (load/save)
//! - **System snapshots**: JSON copies of an assembled K and F for external solvers
//! - **DAT reports**: plain-text dump of the assembled system

pub mod error;
mod output;
mod problem_file;
mod snapshot;

use std::fs;
use std::io;
use std::path::Path;

pub use error::{IoError, Result};
pub use output::{JobReport, format_dat, write_dat};
pub use problem_file::{load_problem, parse_problem, save_problem};
pub use snapshot::{SNAPSHOT_SCHEMA_VERSION, SystemSnapshot, load_system, save_system};

fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => IoError::FileNotFound(path.display().to_string()),
        _ => IoError::Io(err),
    })
}

fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
