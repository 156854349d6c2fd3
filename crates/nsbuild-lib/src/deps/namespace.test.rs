use super::*;

#[test]
fn test_accepts_dotted_identifiers() {
    for value in ["goog", "goog.array", "a.b.c", "$jscomp.polyfill", "my_app.ui2"] {
        let ns = Namespace::new(value).unwrap();
        assert_eq!(ns.as_str(), value);
        assert_eq!(ns.to_string(), value);
    }
}

#[test]
fn test_rejects_empty() {
    assert_eq!(Namespace::new(""), Err(NamespaceError::Empty));
}

#[test]
fn test_rejects_malformed() {
    for value in ["a..b", ".a", "a.", "1abc", "a.2b", "a b", "a-b", "a.b;"] {
        assert!(
            matches!(Namespace::new(value), Err(NamespaceError::Malformed { .. })),
            "'{}' should be rejected",
            value
        );
    }
}

#[test]
fn test_root_and_segments() {
    let ns: Namespace = "goog.ui.Component".parse().unwrap();
    assert_eq!(ns.root(), "goog");
    assert_eq!(ns.segments().collect::<Vec<_>>(), vec!["goog", "ui", "Component"]);

    let single: Namespace = "goog".parse().unwrap();
    assert_eq!(single.root(), "goog");
}

#[test]
fn test_borrow_allows_str_lookup() {
    let mut map = std::collections::HashMap::new();
    map.insert(Namespace::new("a.b").unwrap(), 1);
    assert_eq!(map.get("a.b"), Some(&1));
    assert_eq!(map.get("a"), None);
}
