//! Configuration file loading and parsing.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use anyhow::{Context, Result, bail};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::PackageMap;

pub const CONFIG_FILE_NAME: &str = "repkg.json";

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap());

/// One pipeline target: a flat Java source directory plus the dependent
/// artifacts that reference its classes by name. A project typically lists
/// two roots (a working copy and the Android Studio copy) and both get the
/// same treatment.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RootConfig {
    /// Flat directory holding the `.java` files to relocate.
    pub java_dir: PathBuf,
    /// AndroidManifest.xml to rewrite, if any.
    #[serde(default)]
    pub manifest: Option<PathBuf>,
    /// Directory of layout XMLs to rewrite, if any.
    #[serde(default)]
    pub layout_dir: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// The package every class currently declares, e.g. `com.example.app`.
    pub base_package: String,
    #[serde(default)]
    pub roots: Vec<RootConfig>,
    /// Target subpackage -> class names assigned to it.
    pub packages: BTreeMap<String, Vec<String>>,
}

impl Config {
    /// Load and validate a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Package segments and class names must be Java identifiers, at least
    /// one root must be configured, and the assignment table must not be
    /// empty.
    pub fn validate(&self) -> Result<()> {
        if self.base_package.is_empty()
            || !self.base_package.split('.').all(|s| IDENTIFIER.is_match(s))
        {
            bail!("Invalid basePackage: \"{}\"", self.base_package);
        }

        if self.roots.is_empty() {
            bail!("No roots configured: add at least one entry with a javaDir");
        }

        if self.packages.is_empty() {
            bail!("No packages configured: nothing to migrate");
        }

        for (group, classes) in &self.packages {
            if !IDENTIFIER.is_match(group) {
                bail!("Invalid package name: \"{}\"", group);
            }
            for class in classes {
                if !IDENTIFIER.is_match(class) {
                    bail!("Invalid class name \"{}\" in package \"{}\"", class, group);
                }
            }
        }

        Ok(())
    }

    /// Build the immutable assignment table this run is driven by.
    pub fn package_map(&self) -> Result<PackageMap> {
        PackageMap::new(&self.base_package, &self.packages)
    }
}

/// Starter configuration written by `repkg init`.
pub fn default_config_json() -> Result<String> {
    let config = Config {
        base_package: "com.example.app".to_string(),
        roots: vec![RootConfig {
            java_dir: PathBuf::from("app/src/main/java/com/example/app"),
            manifest: Some(PathBuf::from("app/src/main/AndroidManifest.xml")),
            layout_dir: Some(PathBuf::from("app/src/main/res/layout")),
        }],
        packages: BTreeMap::from([("core".to_string(), vec!["MainActivity".to_string()])]),
    };

    let json = serde_json::to_string_pretty(&config)?;
    Ok(format!("{}\n", json))
}
