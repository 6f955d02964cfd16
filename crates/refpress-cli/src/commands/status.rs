use std::path::Path;

use refpress::schema::parse_module;

pub fn run(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let module = parse_module(path)?;

    println!("Module: {}", module.title);
    println!("Entries: {}", module.entries.len());

    let parameters: usize = module
        .entries
        .iter()
        .map(|e| e.parameters.len())
        .sum();
    println!("Parameters documented: {parameters}");

    let zero_arg = module
        .entries
        .iter()
        .filter(|e| e.parameters.is_empty())
        .count();
    println!("Zero-parameter entries: {zero_arg}");

    if let Some(ref href) = module.source_href {
        println!("Source link: {href}");
    } else {
        println!("Source link: not defined");
    }

    Ok(())
}
