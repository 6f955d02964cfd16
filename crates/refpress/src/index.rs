//! Index-page updater.
//!
//! Manages the auto-generated module list in a hand-authored index page
//! using HTML comment markers to delimit the managed region.

use crate::escape::{escape_attr, escape_text};

/// Update index-page content by inserting/replacing the module list.
///
/// Uses `<!-- MODULES:BEGIN -->` and `<!-- MODULES:END -->` markers.
/// Module links are sorted by slug. Content outside the markers is
/// preserved unchanged.
///
/// `modules` is a list of `(slug, title)` pairs.
pub fn update_index(existing: &str, modules: &[(&str, &str)]) -> String {
    let begin_marker = "<!-- MODULES:BEGIN -->";
    let end_marker = "<!-- MODULES:END -->";

    let mut sorted: Vec<(&str, &str)> = modules.to_vec();
    sorted.sort_unstable_by_key(|(slug, _)| *slug);

    let mut module_section = String::new();
    module_section.push_str(begin_marker);
    module_section.push('\n');
    for (slug, title) in &sorted {
        module_section.push_str(&format!(
            "<li><a href=\"{}.html\">{}</a></li>\n",
            escape_attr(slug),
            escape_text(title)
        ));
    }
    module_section.push_str(end_marker);

    if let Some(begin_pos) = existing.find(begin_marker) {
        if let Some(end_pos) = existing.find(end_marker) {
            let end_of_marker = end_pos + end_marker.len();
            // Consume trailing newline if present
            let end_of_marker = if existing[end_of_marker..].starts_with('\n') {
                end_of_marker + 1
            } else {
                end_of_marker
            };
            let mut result = String::new();
            result.push_str(&existing[..begin_pos]);
            result.push_str(&module_section);
            result.push('\n');
            result.push_str(&existing[end_of_marker..]);
            return result;
        }
    }

    // Markers not found — append before final newlines
    let trimmed = existing.trim_end();
    let mut result = String::new();
    result.push_str(trimmed);
    result.push_str("\n\n");
    result.push_str(&module_section);
    result.push('\n');
    result
}
