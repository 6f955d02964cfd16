//! Content-directory loading and output-sink writes.
//!
//! The rendering core stays pure; everything that touches the filesystem
//! lives here.

use std::path::{Path, PathBuf};

use crate::assemble::RenderedPage;
use crate::error::SiteError;
use crate::schema::{parse_module, Module};

/// Manifest entry for one written page.
#[derive(Debug, Clone)]
pub struct BuiltPage {
    /// Path relative to the output directory.
    pub relative_path: PathBuf,
    /// Absolute path where the page was written.
    pub absolute_path: PathBuf,
    /// Number of bytes written.
    pub bytes: usize,
}

/// Load every `*.yaml` module file in `dir`, slug taken from the file stem.
///
/// Returns `(slug, module)` pairs sorted by slug.
///
/// # Errors
///
/// Returns [`SiteError::Io`] if the directory cannot be read and
/// [`SiteError::Yaml`] for the first malformed module file.
pub fn load_modules(dir: &Path) -> Result<Vec<(String, Module)>, SiteError> {
    let mut modules = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("yaml") {
            continue;
        }
        let slug = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown")
            .to_string();
        let module = parse_module(&path)?;
        modules.push((slug, module));
    }
    modules.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(modules)
}

/// Write assembled pages into `output_dir` as `{slug}.html`.
///
/// Creates the directory if needed and returns the manifest in page order.
///
/// # Errors
///
/// Returns [`SiteError::Io`] if directory creation or any write fails.
pub fn write_pages(
    pages: &[RenderedPage],
    output_dir: &Path,
) -> Result<Vec<BuiltPage>, SiteError> {
    std::fs::create_dir_all(output_dir)?;

    let mut manifest = Vec::with_capacity(pages.len());
    for page in pages {
        let relative_path = PathBuf::from(format!("{}.html", page.slug));
        let absolute_path = output_dir.join(&relative_path);
        std::fs::write(&absolute_path, &page.html)?;
        manifest.push(BuiltPage {
            relative_path,
            absolute_path,
            bytes: page.html.len(),
        });
    }
    Ok(manifest)
}
