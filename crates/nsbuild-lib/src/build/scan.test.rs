// Tests for source discovery

use super::*;
use tempfile::TempDir;

fn write(dir: &Path, relative: &str, content: &str) -> PathBuf {
    let path = dir.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    path
}

fn js() -> Vec<String> {
    vec!["js".to_string()]
}

fn relative(root: &Path, paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|p| {
            p.strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

#[test]
fn test_scan_tree_is_sorted_and_recursive() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "b.js", "");
    write(root, "a.js", "");
    write(root, "sub/z.js", "");
    write(root, "sub/deeper/y.js", "");
    write(root, "c/x.js", "");

    let found = scan_tree(root, &js()).unwrap();
    assert_eq!(
        relative(root, &found),
        vec!["a.js", "b.js", "c/x.js", "sub/deeper/y.js", "sub/z.js"]
    );
}

#[test]
fn test_scan_tree_skips_hidden_and_other_extensions() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "keep.js", "");
    write(root, ".hidden.js", "");
    write(root, ".git/objects/pack.js", "");
    write(root, "notes.txt", "");
    write(root, "module.jsx", "");

    let found = scan_tree(root, &js()).unwrap();
    assert_eq!(relative(root, &found), vec!["keep.js"]);

    let found = scan_tree(root, &["js".to_string(), "jsx".to_string()]).unwrap();
    assert_eq!(relative(root, &found), vec!["keep.js", "module.jsx"]);
}

#[test]
fn test_scan_missing_root_is_io_error() {
    let temp = TempDir::new().unwrap();
    let err = scan_tree(&temp.path().join("absent"), &js()).unwrap_err();
    assert!(matches!(err, BuildError::Io { .. }));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_load_source_records_origin() {
    let temp = TempDir::new().unwrap();
    let path = write(temp.path(), "a.js", "goog.provide('a');\n");

    let source = load_source(&path, &DeclarationConvention::default()).unwrap();
    assert_eq!(source.origin(), Some(path.as_path()));
    assert_eq!(source.provides()[0], "a");
}

#[test]
fn test_collect_sources_dedupes_by_identity() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    let a = write(root, "a.js", "goog.provide('a');\n");
    write(root, "b.js", "goog.provide('b');\n");
    let outside = TempDir::new().unwrap();
    let extra = write(outside.path(), "extra.js", "goog.provide('extra');\n");

    // a.js is reached both through the root and as an explicit file
    let set = collect_sources(
        &[root.to_path_buf()],
        &[a.clone(), extra.clone(), root.join(".").join("a.js")],
        &js(),
        &DeclarationConvention::default(),
    )
    .unwrap();

    assert_eq!(set.len(), 3);
    let labels: Vec<PathBuf> = set
        .sources()
        .iter()
        .map(|s| s.origin().unwrap().to_path_buf())
        .collect();
    assert_eq!(labels, vec![a, root.join("b.js"), extra]);
}

#[test]
fn test_missing_explicit_file_is_io_error() {
    let temp = TempDir::new().unwrap();
    let mut set = SourceSet::new();
    let err = set
        .add_path(&temp.path().join("nope.js"), &DeclarationConvention::default())
        .unwrap_err();
    assert!(matches!(err, BuildError::Io { .. }));
    assert!(set.is_empty());
}
