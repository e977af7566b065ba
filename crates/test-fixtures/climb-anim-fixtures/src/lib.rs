//! Shared JSON fixtures for climb-anim tests.
//!
//! Fixture files live in `fixtures/` at the workspace root and are listed in
//! `fixtures/manifest.json` under one table per [`Kind`].

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

static INDEX: Lazy<Index> = Lazy::new(|| {
    serde_json::from_str(include_str!("../../../../fixtures/manifest.json"))
        .expect("fixtures/manifest.json should parse")
});

/// Manifest tables, name -> path relative to `fixtures/`.
#[derive(Debug, Deserialize)]
struct Index {
    scenarios: BTreeMap<String, String>,
    #[serde(default)]
    configs: BTreeMap<String, String>,
}

/// Fixture category, one manifest table each.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Kind {
    Scenario,
    Config,
}

impl Kind {
    fn table(self) -> &'static BTreeMap<String, String> {
        match self {
            Kind::Scenario => &INDEX.scenarios,
            Kind::Config => &INDEX.configs,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Kind::Scenario => "scenario",
            Kind::Config => "config",
        }
    }
}

/// Names listed for `kind`, in sorted order.
pub fn names(kind: Kind) -> Vec<String> {
    kind.table().keys().cloned().collect()
}

/// Absolute path of a named fixture.
pub fn locate(kind: Kind, name: &str) -> Result<PathBuf> {
    let rel = kind
        .table()
        .get(name)
        .ok_or_else(|| anyhow!("unknown {} fixture '{name}'", kind.label()))?;
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.extend(["..", "..", "..", "fixtures"]);
    path.push(rel);
    Ok(path)
}

/// Raw text of a named fixture.
pub fn text(kind: Kind, name: &str) -> Result<String> {
    let path = locate(kind, name)?;
    std::fs::read_to_string(&path)
        .with_context(|| format!("reading {} fixture {}", kind.label(), path.display()))
}

/// Parse a named fixture into `T`.
pub fn parse<T: DeserializeOwned>(kind: Kind, name: &str) -> Result<T> {
    let raw = text(kind, name)?;
    serde_json::from_str(&raw)
        .with_context(|| format!("{} fixture '{name}' is not valid for the target type", kind.label()))
}

/// Frame-by-frame driver scenarios.
pub mod scenarios {
    use super::*;

    pub fn keys() -> Vec<String> {
        names(Kind::Scenario)
    }

    pub fn json(name: &str) -> Result<String> {
        text(Kind::Scenario, name)
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        parse(Kind::Scenario, name)
    }

    pub fn path(name: &str) -> Result<PathBuf> {
        locate(Kind::Scenario, name)
    }
}

/// Driver configuration files.
pub mod configs {
    use super::*;

    pub fn keys() -> Vec<String> {
        names(Kind::Config)
    }

    pub fn json(name: &str) -> Result<String> {
        text(Kind::Config, name)
    }
}
