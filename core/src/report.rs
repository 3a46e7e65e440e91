//! Output tree plumbing: directory layout, CSV and SVG writing.
//!
//! RULE: only this module touches the output tree. Pipeline stages
//! hand finished rows and documents here; they never open files
//! themselves.

use crate::error::DeskResult;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Where a run writes. Consumers of the report expect this exact
/// shape: raw records under data/raw, tables under outputs, charts
/// under images.
#[derive(Debug, Clone)]
pub struct OutputLayout {
    pub raw_dir: PathBuf,
    pub out_dir: PathBuf,
    pub img_dir: PathBuf,
}

impl OutputLayout {
    /// The standard layout rooted at `root`.
    pub fn under(root: &Path) -> Self {
        Self {
            raw_dir: root.join("data").join("raw"),
            out_dir: root.join("outputs"),
            img_dir: root.join("images"),
        }
    }

    /// Create all three directories. Failure here is fatal to the run.
    pub fn create_all(&self) -> DeskResult<()> {
        fs::create_dir_all(&self.raw_dir)?;
        fs::create_dir_all(&self.out_dir)?;
        fs::create_dir_all(&self.img_dir)?;
        Ok(())
    }
}

/// Serialize `rows` to a headered CSV at `path`. Headers come from the
/// row type's field names.
pub fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> DeskResult<PathBuf> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    log::debug!("wrote {} rows to {}", rows.len(), path.display());
    Ok(path.to_path_buf())
}

/// Write a finished SVG document at `path`.
pub fn write_svg(path: &Path, document: &str) -> DeskResult<PathBuf> {
    fs::write(path, document)?;
    log::debug!("wrote chart {}", path.display());
    Ok(path.to_path_buf())
}
