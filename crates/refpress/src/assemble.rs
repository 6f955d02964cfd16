//! Page assembly: shell + content composed into complete documents.

use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::render::{footer_fragment, head_fragment, render_content};
use crate::schema::Module;

/// One fully rendered page, ready for the output sink.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// Output file stem; the page is written as `{slug}.html`.
    pub slug: String,
    pub html: String,
}

/// Assemble one complete page for a module.
///
/// # Errors
///
/// Propagates the content block's validation errors; no partial document
/// is produced.
pub fn assemble_page(
    config: &SiteConfig,
    module: &Module,
    slug: &str,
) -> Result<String, SiteError> {
    let content = render_content(module, slug)?;
    let mut page = head_fragment(config, &module.title);
    page.push_str(&content);
    page.push_str(&footer_fragment(config, slug));
    Ok(page)
}

/// Assemble every module page, failing fast on the first malformed module.
///
/// All pages are rendered in memory before any caller writes output, so a
/// validation error anywhere yields zero output files.
pub fn assemble_site(
    config: &SiteConfig,
    modules: &[(String, Module)],
) -> Result<Vec<RenderedPage>, SiteError> {
    let mut pages = Vec::with_capacity(modules.len());
    for (slug, module) in modules {
        let html = assemble_page(config, module, slug)?;
        pages.push(RenderedPage {
            slug: slug.clone(),
            html,
        });
    }
    Ok(pages)
}
