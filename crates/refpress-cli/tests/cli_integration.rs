use std::path::Path;

/// Helper to get the path to a module fixture.
fn module_path(name: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../modules")
        .join(name)
}

/// Helper to get the modules directory path.
fn modules_dir() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../modules")
}

/// Helper to get the site chrome path.
fn chrome_path() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../site.yaml")
}

/// Helper to get the rp binary path.
fn rp_bin() -> std::path::PathBuf {
    std::path::PathBuf::from(env!("CARGO_BIN_EXE_rp"))
}

// ================================================================
// validate command
// ================================================================

mod validate {
    use refpress::error::Severity;
    use refpress::schema::{parse_module, validate_module};

    #[test]
    fn pixel_wand_fixture_is_valid() {
        let module = parse_module(&super::module_path("pixel-wand.yaml")).unwrap();
        let violations = validate_module(&module);
        let errors: Vec<_> = violations
            .iter()
            .filter(|v| v.severity == Severity::Error)
            .collect();
        assert!(errors.is_empty());
    }

    #[test]
    fn all_fixtures_are_valid() {
        for entry in std::fs::read_dir(super::modules_dir()).unwrap() {
            let path = entry.unwrap().path();
            if path.extension().and_then(|e| e.to_str()) != Some("yaml") {
                continue;
            }
            let module = parse_module(&path).unwrap();
            let violations = validate_module(&module);
            assert!(
                !violations.iter().any(|v| v.severity == Severity::Error),
                "{} has validation errors",
                path.display()
            );
        }
    }

    #[test]
    fn cli_validate_reports_valid() {
        let output = std::process::Command::new(super::rp_bin())
            .arg("validate")
            .arg(super::module_path("pixel-wand.yaml"))
            .output()
            .unwrap();
        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("Module is valid."));
    }

    #[test]
    fn cli_validate_rejects_duplicate_names() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("bad.yaml");
        std::fs::write(
            &bad,
            r#"
title: "Broken"
entries:
  - name: DrawArc
    summary: "first."
    signature: "void DrawArc(DrawingWand *wand)"
  - name: DrawArc
    summary: "second."
    signature: "void DrawArc(DrawingWand *wand)"
"#,
        )
        .unwrap();

        let output = std::process::Command::new(super::rp_bin())
            .arg("validate")
            .arg(&bad)
            .output()
            .unwrap();
        assert!(!output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("PAGE-004"));
    }
}

// ================================================================
// render command
// ================================================================

mod render {
    use super::{chrome_path, module_path, rp_bin};
    use std::process::Command;

    #[test]
    fn renders_complete_document_to_stdout() {
        let output = Command::new(rp_bin())
            .arg("render")
            .arg(module_path("pixel-wand.yaml"))
            .arg("--config")
            .arg(chrome_path())
            .output()
            .unwrap();
        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.starts_with("<!DOCTYPE html>"));
        assert!(stdout.contains("<title>ImageMagick: Pixel Wand Methods</title>"));
        assert!(stdout.contains("id=\"NewPixelWand\""));
        assert!(stdout.trim_end().ends_with("</html>"));
    }

    #[test]
    fn render_without_chrome_uses_defaults() {
        let output = Command::new(rp_bin())
            .arg("render")
            .arg(module_path("morphology.yaml"))
            .output()
            .unwrap();
        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("<title>API Reference: Morphology Methods</title>"));
    }

    #[test]
    fn render_missing_file_fails() {
        let output = Command::new(rp_bin())
            .arg("render")
            .arg("no-such-module.yaml")
            .output()
            .unwrap();
        assert!(!output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("error:"));
    }
}

// ================================================================
// toc / status commands
// ================================================================

mod inspect {
    use super::{module_path, rp_bin};
    use std::process::Command;

    #[test]
    fn toc_lists_anchors_in_order() {
        let output = Command::new(rp_bin())
            .arg("toc")
            .arg(module_path("drawing-wand.yaml"))
            .output()
            .unwrap();
        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("drawing-wand.html#ClearDrawingWand"));
        let clear = stdout.find("ClearDrawingWand").unwrap();
        let push = stdout.find("PushDrawingWand").unwrap();
        assert!(clear < push);
    }

    #[test]
    fn status_counts_entries() {
        let output = Command::new(rp_bin())
            .arg("status")
            .arg(module_path("pixel-wand.yaml"))
            .output()
            .unwrap();
        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("Module: Pixel Wand Methods"));
        assert!(stdout.contains("Entries: 6"));
        assert!(stdout.contains("Zero-parameter entries: 1"));
    }
}

// ================================================================
// build command
// ================================================================

mod build {
    use super::{chrome_path, modules_dir, rp_bin};
    use std::process::Command;

    #[test]
    fn builds_all_fixture_pages() {
        let out = tempfile::tempdir().unwrap();
        let output = Command::new(rp_bin())
            .arg("build")
            .arg(modules_dir())
            .arg("--output")
            .arg(out.path())
            .arg("--config")
            .arg(chrome_path())
            .output()
            .unwrap();
        assert!(
            output.status.success(),
            "stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        for slug in [
            "drawing-wand",
            "magick-image",
            "magick-property",
            "morphology",
            "pixel-wand",
        ] {
            let page = out.path().join(format!("{slug}.html"));
            assert!(page.exists(), "missing {slug}.html");
            let html = std::fs::read_to_string(&page).unwrap();
            assert!(html.starts_with("<!DOCTYPE html>"));
            assert!(html.trim_end().ends_with("</html>"));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("Generated 5 module pages:"));
    }

    #[test]
    fn build_updates_index_page() {
        let out = tempfile::tempdir().unwrap();
        let index = out.path().join("index.html");
        std::fs::write(&index, "<h1>API</h1>\n<ul>\n</ul>\n").unwrap();

        let output = Command::new(rp_bin())
            .arg("build")
            .arg(modules_dir())
            .arg("--output")
            .arg(out.path())
            .arg("--update-index")
            .output()
            .unwrap();
        assert!(output.status.success());

        let updated = std::fs::read_to_string(&index).unwrap();
        assert!(updated.contains("<h1>API</h1>"));
        assert!(updated.contains("<!-- MODULES:BEGIN -->"));
        assert!(updated.contains("<li><a href=\"pixel-wand.html\">Pixel Wand Methods</a></li>"));
    }

    #[test]
    fn malformed_module_writes_nothing() {
        let content = tempfile::tempdir().unwrap();
        std::fs::write(
            content.path().join("good.yaml"),
            "title: \"Good\"\nentries: []\n",
        )
        .unwrap();
        std::fs::write(
            content.path().join("bad.yaml"),
            r#"
title: "Broken"
entries:
  - name: ""
    summary: "nameless."
    signature: "void f(void)"
"#,
        )
        .unwrap();

        let out = tempfile::tempdir().unwrap();
        let dest = out.path().join("site");
        let output = Command::new(rp_bin())
            .arg("build")
            .arg(content.path())
            .arg("--output")
            .arg(&dest)
            .output()
            .unwrap();
        assert!(!output.status.success());
        // Fail-fast: the good page must not have been written either.
        assert!(!dest.join("good.html").exists());
    }
}
