pub mod apply;
pub mod compile;
pub mod layouts;
pub mod new;

pub use apply::{apply, ApplyArgs};
pub use compile::{compile, CompileArgs};
pub use layouts::{layouts, LayoutsArgs};
pub use new::{new, NewArgs};

use anyhow::{Context, Result};
use mailgrid_model::Document;
use std::path::{Path, PathBuf};

/// Resolve `path` against the working directory
pub(crate) fn resolve(cwd: &str, path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        PathBuf::from(cwd).join(path)
    }
}

pub(crate) fn read_template(path: &Path) -> Result<Document> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read template {}", path.display()))?;
    Document::from_json(&source).with_context(|| format!("Invalid template {}", path.display()))
}

pub(crate) fn write_template(path: &Path, document: &Document) -> Result<()> {
    let json = document.to_json_pretty()?;
    std::fs::write(path, json + "\n")
        .with_context(|| format!("Cannot write template {}", path.display()))
}
