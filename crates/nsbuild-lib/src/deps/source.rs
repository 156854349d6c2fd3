//! Source descriptors and the provide/require declaration convention
//!
//! A descriptor is built once from the raw text of one source and never
//! rescanned. Only the fixed call forms are recognized:
//!
//! ```text
//! goog.provide('app.widgets.Button');
//! goog.require("app.dom");
//! ```
//!
//! Each form must open its line (leading whitespace allowed) and take a
//! single quoted namespace literal. Anything inside `/* ... */` is ignored.

use super::namespace::NAMESPACE_PATTERN;
use super::{Namespace, NamespaceError};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::trace;

static BLOCK_COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("comment pattern is valid"));

/// Keywords used by sources to declare namespaces
#[derive(Debug, Clone)]
pub struct DeclarationConvention {
    provide_keyword: Namespace,
    require_keyword: Namespace,
    provide_re: Regex,
    require_re: Regex,
    runtime_namespace: Option<Namespace>,
    base_marker: Option<String>,
}

impl DeclarationConvention {
    pub const DEFAULT_PROVIDE_KEYWORD: &'static str = "goog.provide";
    pub const DEFAULT_REQUIRE_KEYWORD: &'static str = "goog.require";

    /// Build a convention from the two call keywords
    ///
    /// Keywords follow namespace syntax. When the provide keyword is dotted,
    /// its root segment names the runtime namespace implicitly provided by
    /// the base runtime source (`goog` for `goog.provide`).
    pub fn new(provide_keyword: &str, require_keyword: &str) -> Result<Self, NamespaceError> {
        let provide_keyword = Namespace::new(provide_keyword)?;
        let require_keyword = Namespace::new(require_keyword)?;

        let runtime_namespace = if provide_keyword.as_str().contains('.') {
            Some(Namespace::from_matched(provide_keyword.root()))
        } else {
            None
        };
        let base_marker = runtime_namespace
            .as_ref()
            .map(|rt| format!("var {0} = {0} || {{}};", rt));

        Ok(Self {
            provide_re: declaration_regex(&provide_keyword),
            require_re: declaration_regex(&require_keyword),
            provide_keyword,
            require_keyword,
            runtime_namespace,
            base_marker,
        })
    }

    pub fn provide_keyword(&self) -> &str {
        self.provide_keyword.as_str()
    }

    pub fn require_keyword(&self) -> &str {
        self.require_keyword.as_str()
    }

    /// Namespace implicitly provided by the base runtime, if the convention has one
    pub fn runtime_namespace(&self) -> Option<&Namespace> {
        self.runtime_namespace.as_ref()
    }

    /// Line that identifies the base runtime source, e.g. `var goog = goog || {};`
    pub fn base_marker(&self) -> Option<&str> {
        self.base_marker.as_deref()
    }

    fn match_provide(&self, line: &str) -> Option<Namespace> {
        capture_namespace(&self.provide_re, line)
    }

    fn match_require(&self, line: &str) -> Option<Namespace> {
        capture_namespace(&self.require_re, line)
    }

    fn is_base_marker(&self, line: &str) -> bool {
        self.base_marker
            .as_deref()
            .is_some_and(|marker| line.trim_start().starts_with(marker))
    }
}

impl Default for DeclarationConvention {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PROVIDE_KEYWORD, Self::DEFAULT_REQUIRE_KEYWORD)
            .expect("default keywords are valid namespaces")
    }
}

fn declaration_regex(keyword: &Namespace) -> Regex {
    let pattern = format!(
        r#"^\s*{kw}\(\s*(?:'({ns})'|"({ns})")\s*\)"#,
        kw = regex::escape(keyword.as_str()),
        ns = NAMESPACE_PATTERN,
    );
    Regex::new(&pattern).expect("escaped keyword pattern is valid")
}

fn capture_namespace(re: &Regex, line: &str) -> Option<Namespace> {
    let caps = re.captures(line)?;
    caps.get(1)
        .or_else(|| caps.get(2))
        .map(|m| Namespace::from_matched(m.as_str()))
}

fn push_unique(list: &mut Vec<Namespace>, ns: Namespace) {
    if !list.contains(&ns) {
        list.push(ns);
    }
}

/// One unit of source text with its declared namespaces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDescriptor {
    text: String,
    origin: Option<PathBuf>,
    provides: Vec<Namespace>,
    requires: Vec<Namespace>,
    base_runtime: bool,
}

impl SourceDescriptor {
    /// Parse text using the default `goog.provide` / `goog.require` convention
    pub fn parse(text: impl Into<String>) -> Self {
        Self::parse_with(text, &DeclarationConvention::default())
    }

    /// Parse text using an explicit convention
    pub fn parse_with(text: impl Into<String>, convention: &DeclarationConvention) -> Self {
        let text = text.into();
        let scanned = BLOCK_COMMENT_RE.replace_all(&text, "");

        let mut provides = Vec::new();
        let mut requires = Vec::new();
        let mut base_runtime = false;

        for line in scanned.lines() {
            if let Some(ns) = convention.match_provide(line) {
                push_unique(&mut provides, ns);
            } else if let Some(ns) = convention.match_require(line) {
                push_unique(&mut requires, ns);
            } else if convention.is_base_marker(line) {
                base_runtime = true;
            }
        }

        if base_runtime {
            if let Some(runtime) = convention.runtime_namespace() {
                push_unique(&mut provides, runtime.clone());
            }
        }

        trace!(
            provides = provides.len(),
            requires = requires.len(),
            base_runtime,
            "Scanned source declarations"
        );

        Self {
            text,
            origin: None,
            provides,
            requires,
            base_runtime,
        }
    }

    /// Attach the path this source was read from
    pub fn with_origin(mut self, path: impl Into<PathBuf>) -> Self {
        self.origin = Some(path.into());
        self
    }

    /// Provided namespaces in first-declared order
    pub fn provides(&self) -> &[Namespace] {
        &self.provides
    }

    /// Required namespaces in first-declared order
    pub fn requires(&self) -> &[Namespace] {
        &self.requires
    }

    /// Raw source text, untouched
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn origin(&self) -> Option<&Path> {
        self.origin.as_deref()
    }

    /// Human-readable name for diagnostics
    pub fn label(&self) -> String {
        match &self.origin {
            Some(path) => path.display().to_string(),
            None => "<anonymous source>".to_string(),
        }
    }

    /// Whether the text carries the base runtime marker line
    pub fn is_base_runtime(&self) -> bool {
        self.base_runtime
    }
}

#[cfg(test)]
mod tests {
    include!("source.test.rs");
}
