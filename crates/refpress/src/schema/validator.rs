use std::collections::HashSet;

use crate::error::{Severity, Violation};
use crate::schema::types::Module;

/// Validate a parsed module for completeness and consistency.
///
/// Returns a list of violations. If any violation has
/// [`Severity::Error`], the module is considered invalid.
pub fn validate_module(module: &Module) -> Vec<Violation> {
    let mut violations = Vec::new();

    validate_title(module, &mut violations);
    validate_entries(module, &mut violations);

    violations
}

fn validate_title(module: &Module, violations: &mut Vec<Violation>) {
    if module.title.is_empty() {
        violations.push(Violation {
            severity: Severity::Error,
            rule: "PAGE-001".to_string(),
            message: "title must not be empty".to_string(),
            location: Some("title".to_string()),
        });
    }
}

fn validate_entries(module: &Module, violations: &mut Vec<Violation>) {
    if module.entries.is_empty() {
        violations.push(Violation {
            severity: Severity::Warning,
            rule: "PAGE-002".to_string(),
            message: "module has no entries — the page will render with an \
                      empty body"
                .to_string(),
            location: Some("entries".to_string()),
        });
    }

    let mut names = HashSet::new();
    for (i, entry) in module.entries.iter().enumerate() {
        if entry.name.is_empty() {
            violations.push(Violation {
                severity: Severity::Error,
                rule: "PAGE-003".to_string(),
                message: format!("entries[{i}].name must not be empty"),
                location: Some(format!("entries[{i}].name")),
            });
        } else if !names.insert(&entry.name) {
            violations.push(Violation {
                severity: Severity::Error,
                rule: "PAGE-004".to_string(),
                message: format!(
                    "Duplicate entry name: {} — anchors must be unique \
                     within a page",
                    entry.name
                ),
                location: Some(format!("entries[{i}].name")),
            });
        }

        if entry.summary.is_empty() {
            violations.push(Violation {
                severity: Severity::Warning,
                rule: "PAGE-005".to_string(),
                message: format!("entries.{}.summary is empty", entry.name),
                location: Some(format!("entries[{i}].summary")),
            });
        }

        if entry.signature.is_empty() {
            violations.push(Violation {
                severity: Severity::Warning,
                rule: "PAGE-006".to_string(),
                message: format!(
                    "entries.{}.signature is empty — the call-shape block \
                     will render blank",
                    entry.name
                ),
                location: Some(format!("entries[{i}].signature")),
            });
        }

        for (j, param) in entry.parameters.iter().enumerate() {
            if param.name.is_empty() {
                violations.push(Violation {
                    severity: Severity::Error,
                    rule: "PAGE-007".to_string(),
                    message: format!(
                        "entries.{}.parameters[{j}].name must not be empty",
                        entry.name
                    ),
                    location: Some(format!(
                        "entries[{i}].parameters[{j}].name"
                    )),
                });
            }
            if param.description.is_empty() {
                violations.push(Violation {
                    severity: Severity::Warning,
                    rule: "PAGE-008".to_string(),
                    message: format!(
                        "entries.{}.parameters[{j}].description is empty",
                        entry.name
                    ),
                    location: Some(format!(
                        "entries[{i}].parameters[{j}].description"
                    )),
                });
            }
        }
    }
}
