use std::path::Path;

use refpress::schema::parse_module;

pub fn run(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let module = parse_module(path)?;
    let slug = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown");

    println!("Table of contents for {}", module.title);
    println!("{}", "=".repeat(22 + module.title.len()));
    println!();

    for entry in &module.entries {
        println!("  {}  ->  {slug}.html#{}", entry.name, entry.name);
    }
    println!();
    println!("{} entries", module.entries.len());

    Ok(())
}
