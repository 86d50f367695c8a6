use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use serde_json::json;

use PkgStore::{ManifestStore, StoreConfig, StoreError, StoreOptions};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

fn unique_root(prefix: &str) -> PathBuf {
    let pid = std::process::id();
    let t = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    let base = std::env::temp_dir();
    base.join(format!("pkgstore-open-{prefix}-{pid}-{t}-{id}"))
}

#[test]
fn store_at_given_cwd() -> Result<()> {
    let root = unique_root("cwd");
    let dir = root.join("foo");
    fs::create_dir_all(&dir)?;
    fs::write(dir.join("package.json"), "{}")?;

    let mut pkg = ManifestStore::open(&dir)?;
    pkg.set("foo", "bar");
    assert_eq!(pkg.path().file_name().unwrap(), "package.json");
    assert_eq!(pkg.cwd(), dir.as_path());
    assert!(pkg.has_own("foo"));
    assert_eq!(pkg.get("foo").unwrap(), "bar");
    assert!(dir.join("package.json").exists());
    Ok(())
}

#[test]
fn store_at_explicit_path() -> Result<()> {
    let root = unique_root("path");
    let file = root.join("foo").join("bar.json");
    fs::create_dir_all(file.parent().unwrap())?;
    fs::write(&file, r#"{"name":"x"}"#)?;

    let mut pkg = ManifestStore::with_options(StoreOptions::new().with_path(&file))?;
    pkg.set("foo", "bar");
    assert_eq!(pkg.path(), file.as_path());
    assert_eq!(pkg.path().file_name().unwrap(), "bar.json");
    assert_eq!(pkg.get("name").unwrap(), "x");
    assert_eq!(pkg.get("foo").unwrap(), "bar");
    Ok(())
}

#[test]
fn relative_path_resolves_against_cwd() -> Result<()> {
    let root = unique_root("rel");
    fs::create_dir_all(root.join("sub"))?;

    let opts = StoreOptions::new()
        .with_cwd(root.join("sub"))
        .with_path("../meta/./manifest.json");
    let pkg = ManifestStore::with_options(opts)?;
    assert_eq!(pkg.path(), root.join("meta").join("manifest.json").as_path());
    assert!(pkg.data().is_empty());
    Ok(())
}

#[test]
fn options_cwd_wins_over_positional() -> Result<()> {
    let root = unique_root("create");
    let a = root.join("a");
    let b = root.join("b");
    fs::create_dir_all(&a)?;
    fs::create_dir_all(&b)?;

    let pkg = ManifestStore::create(&a, StoreOptions::new().with_cwd(&b))?;
    assert_eq!(pkg.cwd(), b.as_path());
    assert_eq!(pkg.path(), b.join("package.json").as_path());

    let pkg2 = ManifestStore::create(&a, StoreOptions::new())?;
    assert_eq!(pkg2.cwd(), a.as_path());
    Ok(())
}

#[test]
fn missing_file_starts_empty_without_creating_it() -> Result<()> {
    let root = unique_root("missing");
    let pkg = ManifestStore::open(&root)?;
    assert!(pkg.data().is_empty());
    assert!(!pkg.path().exists());
    Ok(())
}

#[test]
fn invalid_json_is_read_error() -> Result<()> {
    let root = unique_root("badjson");
    fs::create_dir_all(&root)?;
    let file = root.join("package.json");
    fs::write(&file, "{ not json")?;

    match ManifestStore::open(&root) {
        Err(StoreError::Read { path, reason }) => {
            assert_eq!(path, file);
            assert!(reason.contains("invalid JSON"), "reason: {reason}");
        }
        other => panic!("expected Read error, got {other:?}"),
    }
    Ok(())
}

#[test]
fn non_object_top_level_is_read_error() -> Result<()> {
    let root = unique_root("array");
    fs::create_dir_all(&root)?;
    fs::write(root.join("package.json"), "[1, 2]")?;

    let err = ManifestStore::open(&root).unwrap_err();
    assert!(matches!(err, StoreError::Read { .. }));
    assert!(err.to_string().contains("array"), "{err}");
    Ok(())
}

#[test]
fn custom_filename_from_config() -> Result<()> {
    let root = unique_root("filename");
    fs::create_dir_all(&root)?;
    fs::write(root.join("bower.json"), r#"{"main": "index.js"}"#)?;

    let cfg = StoreConfig::default().with_filename("bower.json");
    let pkg = ManifestStore::open_with_config(StoreOptions::new().with_cwd(&root), cfg)?;
    assert_eq!(pkg.get("main").unwrap(), "index.js");
    Ok(())
}

#[test]
fn load_keeps_file_key_order() -> Result<()> {
    let root = unique_root("order");
    fs::create_dir_all(&root)?;
    fs::write(
        root.join("package.json"),
        r#"{"name":"p","version":"1.0.0","dependencies":{"z":"1","a":"2"}}"#,
    )?;

    let pkg = ManifestStore::open(&root)?;
    let keys: Vec<&str> = pkg.data().keys().collect();
    assert_eq!(keys, vec!["name", "version", "dependencies"]);
    assert_eq!(pkg.get("dependencies").unwrap(), &json!({"z": "1", "a": "2"}));
    let deps: Vec<&String> = pkg.get("dependencies").unwrap().as_object().unwrap().keys().collect();
    assert_eq!(deps, vec!["z", "a"]);
    Ok(())
}

#[test]
fn unreadable_manifest_is_read_error() -> Result<()> {
    let root = unique_root("isdir");
    let dir_as_file = root.join("package.json");
    fs::create_dir_all(&dir_as_file)?;

    match ManifestStore::with_options(StoreOptions::new().with_path(&dir_as_file)) {
        Err(StoreError::Read { path, reason }) => {
            assert_eq!(path, dir_as_file);
            assert!(!reason.contains("invalid JSON"), "reason: {reason}");
        }
        other => panic!("expected Read error, got {other:?}"),
    }
    Ok(())
}
