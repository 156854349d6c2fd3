use super::*;

#[test]
fn test_fixture_writes_nested_files() {
    let fixture = SourceTreeFixture::new().unwrap();
    let path = fixture.write_file("a/b/c.js", "x").unwrap();

    assert!(path.starts_with(fixture.path()));
    assert!(fixture.file_exists("a/b/c.js"));
    assert_eq!(fixture.read_file("a/b/c.js").unwrap(), "x");
}

#[test]
fn test_write_module_emits_declarations() {
    let fixture = SourceTreeFixture::new().unwrap();
    fixture
        .write_module("app.js", &["app.main"], &["app.util", "app.dom"])
        .unwrap();

    assert_eq!(
        fixture.read_file("app.js").unwrap(),
        "goog.provide('app.main');\ngoog.require('app.util');\ngoog.require('app.dom');\n"
    );
}

#[test]
fn test_with_base_writes_runtime() {
    let fixture = SourceTreeFixture::with_base().unwrap();
    assert_eq!(fixture.read_file("base.js").unwrap(), BASE_RUNTIME_TEXT);
}

#[test]
fn test_fixture_cleans_up_on_drop() {
    let fixture = SourceTreeFixture::new().unwrap();
    let root = fixture.path().to_path_buf();
    drop(fixture);
    assert!(!root.exists());
}
