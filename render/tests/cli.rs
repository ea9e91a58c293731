//! End-to-end tests for the ghost-render CLI.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn ghost_render() -> Command {
    cargo_bin_cmd!("ghost-render")
}

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        ghost_render()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("build"))
            .stdout(predicate::str::contains("sitemap"))
            .stdout(predicate::str::contains("metadata"));
    }

    #[test]
    fn shows_version() {
        ghost_render()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn rejects_unknown_subcommand() {
        ghost_render().arg("deploy").assert().failure();
    }
}

mod build {
    use super::*;

    #[test]
    fn writes_site_files() {
        let temp = TempDir::new().expect("temp dir");
        let out = temp.path().join("dist");

        ghost_render()
            .current_dir(temp.path())
            .args(["build", "--out"])
            .arg(&out)
            .args(["--date", "2025-01-20"])
            .assert()
            .success()
            .stdout(predicate::str::contains("index.html"));

        let index = std::fs::read_to_string(out.join("index.html")).unwrap();
        assert!(index.starts_with("<!DOCTYPE html>"));
        assert!(index.contains("id=\"faq\""));

        let sitemap = std::fs::read_to_string(out.join("sitemap.xml")).unwrap();
        assert!(sitemap.contains("<lastmod>2025-01-20</lastmod>"));
        assert!(out.join("robots.txt").exists());
    }

    #[test]
    fn reads_explicit_config() {
        let temp = TempDir::new().expect("temp dir");
        let config = temp.path().join("staging.toml");
        std::fs::write(
            &config,
            "[site]\nbase_url = \"https://staging.ghostprotocol.lk\"\n\n[faq]\ndefault_open = \"item-0\"\n",
        )
        .unwrap();
        let out = temp.path().join("dist");

        ghost_render()
            .args(["build", "--out"])
            .arg(&out)
            .arg("--config")
            .arg(&config)
            .assert()
            .success();

        let robots = std::fs::read_to_string(out.join("robots.txt")).unwrap();
        assert!(robots.contains("https://staging.ghostprotocol.lk/sitemap.xml"));
        let index = std::fs::read_to_string(out.join("index.html")).unwrap();
        assert!(index.contains("aria-expanded=\"true\""));
    }

    #[test]
    fn missing_explicit_config_fails() {
        let temp = TempDir::new().expect("temp dir");
        ghost_render()
            .current_dir(temp.path())
            .args(["build", "--config", "nope.toml"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("nope.toml"));
    }

    #[test]
    fn bad_faq_default_fails() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(
            temp.path().join("site.toml"),
            "[faq]\ndefault_open = \"item-42\"\n",
        )
        .unwrap();

        ghost_render()
            .current_dir(temp.path())
            .args(["build", "--out", "dist"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("item-42"));
    }
}

mod inspect {
    use super::*;

    #[test]
    fn prints_sitemap() {
        let temp = TempDir::new().expect("temp dir");
        ghost_render()
            .current_dir(temp.path())
            .args(["sitemap", "--date", "2025-02-02"])
            .assert()
            .success()
            .stdout(predicate::str::contains("<urlset"))
            .stdout(predicate::str::contains("https://ghostprotocol.lk/portfolio/real-estate-platform"))
            .stdout(predicate::str::contains("<lastmod>2025-02-02</lastmod>"));
    }

    #[test]
    fn sitemap_honours_base_url_flag() {
        let temp = TempDir::new().expect("temp dir");
        ghost_render()
            .current_dir(temp.path())
            .args(["sitemap", "--base-url", "https://example.lk/"])
            .assert()
            .success()
            .stdout(predicate::str::contains("<loc>https://example.lk/contact</loc>"));
    }

    #[test]
    fn prints_metadata_json() {
        let temp = TempDir::new().expect("temp dir");
        let output = ghost_render()
            .current_dir(temp.path())
            .arg("metadata")
            .output()
            .unwrap();
        assert!(output.status.success());

        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["open_graph"]["site_name"], "Ghost Protocol");
        assert_eq!(json["twitter"]["card"], "summary_large_image");
    }

    #[test]
    fn prints_content_json() {
        let temp = TempDir::new().expect("temp dir");
        ghost_render()
            .current_dir(temp.path())
            .arg("content")
            .assert()
            .success()
            .stdout(predicate::str::contains("\"ghosts.lk@proton.me\""));
    }
}
