use std::path::Path;

use tracing::{info, warn};

use refpress::assemble::assemble_site;
use refpress::config::{load_config, SiteConfig};
use refpress::index::update_index;
use refpress::site::{load_modules, write_pages};

pub fn run(
    content_dir: &Path,
    output_dir: &Path,
    config_path: Option<&Path>,
    update_index_flag: bool,
    index_path: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = match config_path {
        Some(cp) => load_config(cp)?,
        None => SiteConfig::default(),
    };

    let modules = load_modules(content_dir)?;
    info!(modules = modules.len(), "content loaded");
    if modules.is_empty() {
        warn!(dir = %content_dir.display(), "no module files found");
    }

    // Render everything before writing anything: a malformed module must
    // leave the output directory untouched.
    let pages = assemble_site(&config, &modules)?;
    let manifest = write_pages(&pages, output_dir)?;

    if update_index_flag {
        let index = match index_path {
            Some(p) => p.to_path_buf(),
            None => output_dir.join("index.html"),
        };
        let existing = std::fs::read_to_string(&index).unwrap_or_default();
        let pairs: Vec<(&str, &str)> = modules
            .iter()
            .map(|(slug, module)| (slug.as_str(), module.title.as_str()))
            .collect();
        let updated = update_index(&existing, &pairs);
        std::fs::write(&index, &updated)?;
        println!("Updated {}", index.display());
    }

    println!("Generated {} module pages:", manifest.len());
    for built in &manifest {
        println!(
            "  {}/{} ({} bytes)",
            output_dir.display(),
            built.relative_path.display(),
            built.bytes
        );
    }

    Ok(())
}
