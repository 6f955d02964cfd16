use std::path::Path;

use refpress::assemble::assemble_page;
use refpress::config::{load_config, SiteConfig};
use refpress::schema::parse_module;

pub fn run(path: &Path, config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let module = parse_module(path)?;

    let config = match config_path {
        Some(cp) => load_config(cp)?,
        None => SiteConfig::default(),
    };

    let slug = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown");

    let page = assemble_page(&config, &module, slug)?;
    print!("{page}");

    Ok(())
}
