// Tests for declaration scanning

use super::*;

fn names(list: &[Namespace]) -> Vec<&str> {
    list.iter().map(Namespace::as_str).collect()
}

// ============================================================================
// Declaration Forms
// ============================================================================

#[test]
fn test_parse_provides_and_requires() {
    let source = SourceDescriptor::parse(
        r#"
goog.provide('app.widgets.Button');
goog.provide("app.widgets.ButtonRenderer");

goog.require('app.dom');
goog.require("goog.events");

app.widgets.Button = function() {};
"#,
    );

    assert_eq!(
        names(source.provides()),
        vec!["app.widgets.Button", "app.widgets.ButtonRenderer"]
    );
    assert_eq!(names(source.requires()), vec!["app.dom", "goog.events"]);
    assert!(!source.is_base_runtime());
}

#[test]
fn test_parse_tolerates_whitespace_and_missing_semicolon() {
    let source = SourceDescriptor::parse(
        "   goog.provide(  'a.b'  );\n\tgoog.require( \"c.d\" )\n",
    );
    assert_eq!(names(source.provides()), vec!["a.b"]);
    assert_eq!(names(source.requires()), vec!["c.d"]);
}

#[test]
fn test_parse_keeps_declared_order_without_duplicates() {
    let source = SourceDescriptor::parse(
        "goog.require('z');\ngoog.require('a');\ngoog.require('z');\ngoog.require('m');\n",
    );
    assert_eq!(names(source.requires()), vec!["z", "a", "m"]);
}

#[test]
fn test_parse_ignores_declarations_not_at_line_start() {
    let source = SourceDescriptor::parse(
        r#"
// goog.require('commented.out');
var x = "goog.require('in.a.string')";
foo(); goog.require('trailing.call');
"#,
    );
    assert!(source.requires().is_empty());
}

#[test]
fn test_parse_ignores_block_comments() {
    let source = SourceDescriptor::parse(
        r#"
/**
 * @fileoverview Example.
goog.require('inside.comment');
 */
goog.provide('real.ns');
/* goog.require('inline.comment'); */
goog.require('real.dep');
"#,
    );
    assert_eq!(names(source.provides()), vec!["real.ns"]);
    assert_eq!(names(source.requires()), vec!["real.dep"]);
}

#[test]
fn test_parse_rejects_malformed_literals() {
    let source = SourceDescriptor::parse(
        "goog.require('a..b');\ngoog.require('mixed\");\ngoog.require(variable);\ngoog.require('');\n",
    );
    assert!(source.requires().is_empty());
}

#[test]
fn test_parse_keeps_raw_text() {
    let text = "/* header */\ngoog.provide('a');\n";
    let source = SourceDescriptor::parse(text);
    assert_eq!(source.text(), text);
}

// ============================================================================
// Base Runtime
// ============================================================================

#[test]
fn test_base_marker_implies_runtime_provide() {
    let source = SourceDescriptor::parse(
        "/** @provideGoog */\nvar goog = goog || {}; // Identifies this file as the base.\ngoog.global = this;\n",
    );
    assert!(source.is_base_runtime());
    assert_eq!(names(source.provides()), vec!["goog"]);
    assert!(source.requires().is_empty());
}

#[test]
fn test_custom_convention() {
    let convention = DeclarationConvention::new("lib.declare", "lib.needs").unwrap();
    assert_eq!(convention.runtime_namespace().map(Namespace::as_str), Some("lib"));
    assert_eq!(convention.base_marker(), Some("var lib = lib || {};"));

    let source = SourceDescriptor::parse_with(
        "lib.declare('x.y');\nlib.needs('x.z');\ngoog.require('ignored');\n",
        &convention,
    );
    assert_eq!(names(source.provides()), vec!["x.y"]);
    assert_eq!(names(source.requires()), vec!["x.z"]);
}

#[test]
fn test_undotted_keywords_have_no_runtime() {
    let convention = DeclarationConvention::new("provide", "require").unwrap();
    assert!(convention.runtime_namespace().is_none());
    assert!(convention.base_marker().is_none());

    let source = SourceDescriptor::parse_with("provide('a');\nrequire('b');\n", &convention);
    assert_eq!(names(source.provides()), vec!["a"]);
    assert_eq!(names(source.requires()), vec!["b"]);
}

#[test]
fn test_invalid_keyword_rejected() {
    assert!(DeclarationConvention::new("goog provide", "goog.require").is_err());
    assert!(DeclarationConvention::new("goog.provide", "").is_err());
}

// ============================================================================
// Origin
// ============================================================================

#[test]
fn test_origin_and_label() {
    let anonymous = SourceDescriptor::parse("goog.provide('a');");
    assert_eq!(anonymous.origin(), None);
    assert_eq!(anonymous.label(), "<anonymous source>");

    let named = SourceDescriptor::parse("goog.provide('a');").with_origin("src/a.js");
    assert_eq!(named.origin(), Some(Path::new("src/a.js")));
    assert_eq!(named.label(), "src/a.js");
}
