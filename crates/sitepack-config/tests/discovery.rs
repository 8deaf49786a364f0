//! Tests for page discovery in the source root

use sitepack_config::{discover_pages, ConfigError};
use std::fs;
use tempfile::TempDir;

#[test]
fn one_page_per_template() {
    let dir = TempDir::new().unwrap();
    for name in ["index.html", "about.html", "contact.html"] {
        fs::write(dir.path().join(name), "<html></html>").unwrap();
    }

    let pages = discover_pages(dir.path()).unwrap();

    assert_eq!(pages.len(), 3);
    for page in &pages {
        assert_eq!(
            page.template.file_name().unwrap().to_str().unwrap(),
            page.filename
        );
    }
}

#[test]
fn pages_are_sorted_by_filename() {
    let dir = TempDir::new().unwrap();
    for name in ["zeta.html", "alpha.html", "index.html"] {
        fs::write(dir.path().join(name), "").unwrap();
    }

    let names: Vec<_> = discover_pages(dir.path())
        .unwrap()
        .into_iter()
        .map(|page| page.filename)
        .collect();

    assert_eq!(names, vec!["alpha.html", "index.html", "zeta.html"]);
}

#[test]
fn ignores_other_files_and_subdirectories() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("index.html"), "").unwrap();
    fs::write(dir.path().join("index.js"), "").unwrap();
    fs::write(dir.path().join("page.htm"), "").unwrap();
    fs::write(dir.path().join("notes.html.bak"), "").unwrap();
    fs::create_dir_all(dir.path().join("partials")).unwrap();
    fs::write(dir.path().join("partials/header.html"), "").unwrap();
    fs::create_dir_all(dir.path().join("folder.html")).unwrap();

    let pages = discover_pages(dir.path()).unwrap();

    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].filename, "index.html");
}

#[test]
fn empty_source_root_has_no_pages() {
    let dir = TempDir::new().unwrap();
    assert!(discover_pages(dir.path()).unwrap().is_empty());
}

#[test]
fn missing_source_root_is_a_discovery_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("src");

    let err = discover_pages(&missing).unwrap_err();

    assert!(matches!(err, ConfigError::Discovery { ref path, .. } if *path == missing));
    assert!(err.is_fatal());
}
