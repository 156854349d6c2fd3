//! Rendering of resolved sources for the `list` and `script` output modes

use super::BuildError;
use super::flags::FeatureFlags;
use crate::deps::SourceDescriptor;

/// One origin path per line
pub fn render_list(sources: &[&SourceDescriptor]) -> String {
    let mut out = String::new();
    for source in sources {
        out.push_str(&source.label());
        out.push('\n');
    }
    out
}

/// Source texts concatenated in order, feature flags substituted
pub fn render_script(
    sources: &[&SourceDescriptor],
    feature_flags: &FeatureFlags,
) -> Result<String, BuildError> {
    let script: String = sources.iter().map(|source| source.text()).collect();
    if feature_flags.is_empty() {
        return Ok(script);
    }
    feature_flags.substitute(&script)
}

#[cfg(test)]
mod tests {
    include!("output.test.rs");
}
