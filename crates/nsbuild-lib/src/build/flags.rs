//! Feature flags: `key=value` overrides for constants defined in the sources
//!
//! A key is a namespace path ending in a CONSTANT_CASE name, e.g.
//! `app.features.ENABLE_CHAT=true`. Script output rewrites the constant's
//! definition in place; compiled output forwards each flag as `--define=`.

use super::BuildError;
use regex::{NoExpand, Regex};
use std::collections::HashSet;
use std::str::FromStr;
use std::sync::LazyLock;
use tracing::debug;

static FLAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z_$][A-Za-z0-9_$]*(?:\.[A-Za-z_$][A-Za-z0-9_$]*)*\.[A-Z0-9_]+)=(.*)$")
        .expect("flag pattern is valid")
});

/// One `key=value` override
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureFlag {
    pub key: String,
    pub value: String,
}

impl FeatureFlag {
    /// Definition pattern the key must match inside the script
    fn definition_regex(&self) -> Regex {
        let pattern = format!(r"{}\s*=\s*(.*)\s*;", regex::escape(&self.key));
        Regex::new(&pattern).expect("escaped flag key pattern is valid")
    }

    /// Compiler argument overriding the constant
    pub fn define_arg(&self) -> String {
        format!("--define={}={}", self.key, self.value)
    }
}

impl FromStr for FeatureFlag {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = FLAG_RE
            .captures(s)
            .ok_or_else(|| BuildError::InvalidFeatureFlag {
                flag: s.to_string(),
            })?;
        Ok(Self {
            key: caps[1].to_string(),
            value: caps[2].to_string(),
        })
    }
}

/// Validated flags with unique keys, in command-line order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureFlags {
    flags: Vec<FeatureFlag>,
}

impl FeatureFlags {
    /// Parse every raw flag, rejecting malformed ones and repeated keys
    pub fn parse<S: AsRef<str>>(raw: &[S]) -> Result<Self, BuildError> {
        let mut flags = Vec::with_capacity(raw.len());
        let mut keys = HashSet::new();

        for value in raw {
            let flag: FeatureFlag = value.as_ref().parse()?;
            if !keys.insert(flag.key.clone()) {
                return Err(BuildError::DuplicateFeatureFlag { key: flag.key });
            }
            flags.push(flag);
        }

        Ok(Self { flags })
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FeatureFlag> {
        self.flags.iter()
    }

    /// Rewrite `key = ...;` definitions to `key = value;`
    ///
    /// Every flag must find at least one definition.
    pub fn substitute(&self, script: &str) -> Result<String, BuildError> {
        let mut script = script.to_string();

        for flag in &self.flags {
            let re = flag.definition_regex();
            if !re.is_match(&script) {
                return Err(BuildError::FeatureFlagNotFound {
                    key: flag.key.clone(),
                });
            }

            let replacement = format!("{} = {};", flag.key, flag.value);
            script = re.replace_all(&script, NoExpand(&replacement)).into_owned();
            debug!("Substituted {}", replacement);
        }

        Ok(script)
    }

    /// `--define=key=value` for every flag
    pub fn define_args(&self) -> Vec<String> {
        self.flags.iter().map(FeatureFlag::define_arg).collect()
    }
}

#[cfg(test)]
mod tests {
    include!("flags.test.rs");
}
