use std::path::Path;

use refpress::error::Severity;
use refpress::schema::{parse_module, validate_module};

pub fn run(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let module = parse_module(path)?;
    let violations = validate_module(&module);

    let errors: Vec<_> = violations
        .iter()
        .filter(|v| v.severity == Severity::Error)
        .collect();
    let warnings: Vec<_> = violations
        .iter()
        .filter(|v| v.severity == Severity::Warning)
        .collect();

    for v in &violations {
        println!("{v}");
    }

    println!(
        "\n{} error(s), {} warning(s)",
        errors.len(),
        warnings.len()
    );

    if errors.is_empty() {
        println!("Module is valid.");
        Ok(())
    } else {
        Err(format!(
            "Module has {} validation error(s)",
            errors.len()
        )
        .into())
    }
}
