//! Shared page shell.
//!
//! Every generated page carries the same head, masthead navigation, and
//! footer markup, parameterized only by the module title, the page slug,
//! and the site chrome. Pure string formatting, no I/O.

use std::fmt::Write;

use crate::config::SiteConfig;
use crate::escape::{escape_attr, escape_text};

/// Render the opening shell: doctype, head, masthead navigation, and the
/// containers the content block is nested in.
pub fn head_fragment(config: &SiteConfig, title: &str) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "<!DOCTYPE html>");
    let _ = writeln!(out, "<html lang=\"en\">");
    let _ = writeln!(out, "<head>");
    let _ = writeln!(
        out,
        "  <title>{}: {}</title>",
        escape_text(&config.site_name),
        escape_text(title)
    );
    let _ = writeln!(
        out,
        "  <meta http-equiv=\"content-type\" content=\"text/html; charset=utf-8\"/>"
    );
    let _ = writeln!(
        out,
        "  <meta name=\"application-name\" content=\"{}\"/>",
        escape_attr(&config.site_name)
    );
    if !config.description.is_empty() {
        let _ = writeln!(
            out,
            "  <meta name=\"description\" content=\"{}\"/>",
            escape_attr(&config.description)
        );
    }
    let _ = writeln!(out, "  <meta name=\"generator\" content=\"refpress\"/>");
    let _ = writeln!(out, "  <meta name=\"rating\" content=\"GENERAL\"/>");
    let _ = writeln!(out, "  <meta name=\"robots\" content=\"INDEX, FOLLOW\"/>");
    let _ = writeln!(out, "  <meta name=\"resource-type\" content=\"document\"/>");
    if !config.copyright.is_empty() {
        let _ = writeln!(
            out,
            "  <meta name=\"copyright\" content=\"{}\"/>",
            escape_attr(&config.copyright)
        );
    }
    let _ = writeln!(
        out,
        "  <link rel=\"icon\" href=\"{}/image/icon.png\"/>",
        escape_attr(&config.asset_base)
    );
    let _ = writeln!(
        out,
        "  <link rel=\"stylesheet\" href=\"{}/css/style.css\"/>",
        escape_attr(&config.asset_base)
    );
    let _ = writeln!(out, "</head>");
    let _ = writeln!(out, "<body>");
    let _ = writeln!(out, "<div class=\"main\">");
    let _ = writeln!(out, "<div class=\"masthead\">");
    let _ = writeln!(out, "  <div class=\"container\">");
    let _ = writeln!(out, "    <nav class=\"nav\">");
    for link in &config.nav {
        let _ = writeln!(
            out,
            "      <a class=\"nav-item\" href=\"{}\">{}</a>",
            escape_attr(&link.href),
            escape_text(&link.label)
        );
    }
    let _ = writeln!(out, "    </nav>");
    let _ = writeln!(out, "  </div>");
    let _ = writeln!(out, "</div>");
    let _ = writeln!(out, "<div class=\"container\">");
    let _ = writeln!(out, "<div class=\"header\">");

    out
}

/// Render the closing shell: footer navigation, back-to-top link, and the
/// copyright line.
pub fn footer_fragment(config: &SiteConfig, slug: &str) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "</div>");
    let _ = writeln!(out, "  <footer class=\"footer\">");
    if !config.footer_nav.is_empty() {
        let links: Vec<String> = config
            .footer_nav
            .iter()
            .map(|link| {
                format!(
                    "<a href=\"{}\">{}</a>",
                    escape_attr(&link.href),
                    escape_text(&link.label)
                )
            })
            .collect();
        let _ = writeln!(out, "    <p>{}</p>", links.join(" • "));
    }
    let _ = writeln!(
        out,
        "    <p><a href=\"{}.html#\">Back to top</a></p>",
        escape_attr(slug)
    );
    if !config.copyright.is_empty() {
        let _ = writeln!(
            out,
            "    <p><small>{}</small></p>",
            escape_text(&config.copyright)
        );
    }
    let _ = writeln!(out, "  </footer>");
    let _ = writeln!(out, "</div><!-- /.container -->");
    let _ = writeln!(out, "</div>");
    let _ = writeln!(out, "</body>");
    let _ = writeln!(out, "</html>");

    out
}
