//! Per-module content block: table of contents plus entry records.

use std::collections::HashSet;
use std::fmt::Write;

use crate::error::SiteError;
use crate::escape::{escape_attr, escape_text};
use crate::schema::{Entry, Module};

/// Render the body of one module page: the table-of-contents paragraph
/// followed by every entry, in order.
///
/// `slug` names the page itself; TOC anchors link to `{slug}.html#{name}`.
///
/// # Errors
///
/// Returns [`SiteError::EmptyEntryName`] or [`SiteError::DuplicateEntryName`]
/// when the entry-name invariant is violated. Nothing is rendered partially.
pub fn render_content(module: &Module, slug: &str) -> Result<String, SiteError> {
    check_entry_names(module, slug)?;

    let mut out = String::new();
    write_toc(&mut out, module, slug);
    for entry in &module.entries {
        write_entry(&mut out, entry, module.source_href.as_deref());
    }
    Ok(out)
}

/// Enforce the anchor invariant before any markup is produced: every entry
/// name non-empty and unique within the module.
fn check_entry_names(module: &Module, slug: &str) -> Result<(), SiteError> {
    let mut seen = HashSet::new();
    for (index, entry) in module.entries.iter().enumerate() {
        if entry.name.is_empty() {
            return Err(SiteError::EmptyEntryName {
                module: slug.to_string(),
                index,
            });
        }
        if !seen.insert(&entry.name) {
            return Err(SiteError::DuplicateEntryName {
                module: slug.to_string(),
                name: entry.name.clone(),
            });
        }
    }
    Ok(())
}

fn write_toc(out: &mut String, module: &Module, slug: &str) {
    if module.entries.is_empty() {
        return;
    }
    let links: Vec<String> = module
        .entries
        .iter()
        .map(|e| {
            format!(
                "<a href=\"{slug}.html#{}\">{}</a>",
                escape_attr(&e.name),
                escape_text(&e.name)
            )
        })
        .collect();
    let _ = writeln!(out, "<p class=\"text-center\">{}</p>", links.join(" &bull; "));
    let _ = writeln!(out);
}

fn write_entry(out: &mut String, entry: &Entry, source_href: Option<&str>) {
    let href = source_href.unwrap_or("#");
    let _ = writeln!(
        out,
        "<h2><a href=\"{}\" id=\"{}\">{}</a></h2>",
        escape_attr(href),
        escape_attr(&entry.name),
        escape_text(&entry.name)
    );
    let _ = writeln!(out);

    for paragraph in paragraphs(&entry.summary) {
        let _ = writeln!(out, "<p>{}</p>", escape_text(paragraph));
        let _ = writeln!(out);
    }

    let _ = writeln!(
        out,
        "<p>The format of the {} method is:</p>",
        escape_text(&entry.name)
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "<pre class=\"text\">");
    let _ = writeln!(out, "{}", escape_text(&entry.signature));
    let _ = writeln!(out, "</pre>");
    let _ = writeln!(out);
    let _ = writeln!(out, "<p>A description of each parameter follows:</p>");
    let _ = writeln!(out);
    let _ = writeln!(out, "<dl class=\"dl-horizontal\">");
    for param in &entry.parameters {
        let _ = writeln!(out, "<dt>{}</dt>", escape_text(&param.name));
        let _ = writeln!(out, "<dd>{}</dd>", escape_text(&param.description));
    }
    let _ = writeln!(out, "</dl>");
    let _ = writeln!(out);
}

/// Split a summary into blank-line-separated paragraphs, skipping empty
/// chunks so stray blank lines in content files don't emit empty `<p>`.
fn paragraphs(summary: &str) -> impl Iterator<Item = &str> {
    summary
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
}
