// SPDX-License-Identifier: PMPL-1.0-or-later

//! Service configuration and startup.

use crate::derive::{KeyDeriver, KeyRuleKind};
use crate::dictionary::{ItemTypeDictionary, StaticDictionary};
use crate::error::ItemNameError;
use crate::i18n::Lang;
use crate::resolver::ItemNameService;
use crate::storage::{load_table_file, persist_table};
use crate::table::{parse_bundled, LabelMap, TranslationTable};
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemNameConfig {
    /// Default table. The bundled table is used when unset.
    pub defaults: Option<PathBuf>,
    /// Writable override table.
    pub overrides: PathBuf,
    /// Protocol dictionary file.
    pub dictionary: Option<PathBuf>,
    /// Key rules in priority order. All built-in rules when unset.
    pub rules: Option<Vec<KeyRuleKind>>,
    pub lang: Lang,
    pub log_level: Option<String>,
}

impl Default for ItemNameConfig {
    fn default() -> Self {
        Self {
            defaults: None,
            overrides: PathBuf::from("translations.yml"),
            dictionary: None,
            rules: None,
            lang: Lang::default(),
            log_level: None,
        }
    }
}

impl ItemNameConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content).map_err(|err| malformed(path, err))?,
            Some("yaml") | Some("yml") => {
                if content.trim().is_empty() {
                    Self::default()
                } else {
                    serde_yaml::from_str(&content).map_err(|err| malformed(path, err))?
                }
            }
            _ => return Err(ItemNameError::UnsupportedFormat(path.to_path_buf()).into()),
        };
        Ok(config)
    }

    /// Parsed tracing level, `warn` when unset.
    pub fn tracing_level(&self) -> Result<tracing::Level> {
        match self.log_level.as_deref() {
            None => Ok(tracing::Level::WARN),
            Some(raw) => raw
                .parse()
                .map_err(|_| anyhow!("unknown log level '{}'", raw)),
        }
    }

    pub fn deriver(&self) -> KeyDeriver {
        match &self.rules {
            Some(rules) => KeyDeriver::with_rules(rules),
            None => KeyDeriver::new(),
        }
    }

    pub fn load_defaults(&self) -> Result<LabelMap> {
        match &self.defaults {
            Some(path) => {
                if !path.exists() {
                    return Err(anyhow!("default table {} not found", path.display()));
                }
                load_table_file(path)
            }
            None => Ok(parse_bundled()?),
        }
    }

    pub fn load_dictionary(&self) -> Result<StaticDictionary> {
        match &self.dictionary {
            Some(path) => Ok(StaticDictionary::from_file(path)?),
            None => Ok(StaticDictionary::default()),
        }
    }

    /// Load every file the service needs and build it. Any malformed file
    /// aborts startup.
    pub fn build_service(&self) -> Result<ItemNameService> {
        let defaults = self.load_defaults()?;
        let overrides = load_table_file(&self.overrides)?;
        let dictionary: Arc<dyn ItemTypeDictionary> = Arc::new(self.load_dictionary()?);
        Ok(ItemNameService::with_deriver(
            TranslationTable::new(defaults, overrides),
            dictionary,
            self.deriver(),
        ))
    }

    /// Shut `service` down, writing the override table if it changed.
    /// Returns the number of labels written.
    pub fn persist_on_shutdown(&self, service: ItemNameService) -> Result<Option<usize>> {
        match service.shutdown() {
            Some(table) => {
                persist_table(&self.overrides, &table)?;
                Ok(Some(table.len()))
            }
            None => Ok(None),
        }
    }
}

fn malformed(path: &Path, err: impl std::fmt::Display) -> ItemNameError {
    ItemNameError::MalformedConfig {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn yaml_config_with_partial_fields() {
        let dir = TempDir::new().expect("tempdir should create");
        let path = dir.path().join("item-names.yml");
        fs::write(&path, "lang: en\nrules: [tiered_tool, colored]\nlog_level: debug\n")
            .expect("config should write");
        let config = ItemNameConfig::from_file(&path).expect("config should load");
        assert_eq!(config.lang, Lang::En);
        assert_eq!(config.overrides, PathBuf::from("translations.yml"));
        assert_eq!(
            config.deriver().rule_names(),
            vec!["tiered_tool", "colored"]
        );
        assert_eq!(config.tracing_level().expect("level"), tracing::Level::DEBUG);
    }

    #[test]
    fn unset_defaults_use_bundled_table() {
        let defaults = ItemNameConfig::default()
            .load_defaults()
            .expect("bundled defaults should load");
        assert_eq!(defaults, parse_bundled().expect("bundled table should parse"));
        assert!(defaults.contains_key("wooden_pickaxe"));
    }

    #[test]
    fn unknown_rule_is_rejected() {
        let dir = TempDir::new().expect("tempdir should create");
        let path = dir.path().join("item-names.yml");
        fs::write(&path, "rules: [teleport]\n").expect("config should write");
        assert!(ItemNameConfig::from_file(&path).is_err());
    }

    #[test]
    fn bad_log_level_is_rejected() {
        let config = ItemNameConfig {
            log_level: Some("loud".to_string()),
            ..ItemNameConfig::default()
        };
        assert!(config.tracing_level().is_err());
    }

    #[test]
    fn malformed_override_aborts_startup() {
        let dir = TempDir::new().expect("tempdir should create");
        let overrides = dir.path().join("translations.yml");
        fs::write(&overrides, "stone: [unclosed\n").expect("override should write");
        let config = ItemNameConfig {
            overrides,
            ..ItemNameConfig::default()
        };
        assert!(config.build_service().is_err());
    }

    #[test]
    fn persists_only_dirty_tables() {
        let dir = TempDir::new().expect("tempdir should create");
        let overrides = dir.path().join("translations.yml");
        let config = ItemNameConfig {
            overrides: overrides.clone(),
            ..ItemNameConfig::default()
        };

        let service = config.build_service().expect("service should build");
        assert_eq!(config.persist_on_shutdown(service).expect("shutdown"), None);
        assert!(!overrides.exists());

        let service = config.build_service().expect("service should build");
        service.register("Example Item", "예시 아이템");
        assert!(config.persist_on_shutdown(service).expect("shutdown").is_some());
        let saved = load_table_file(&overrides).expect("saved table should load");
        assert_eq!(saved.get("example_item").map(String::as_str), Some("예시 아이템"));
    }
}
