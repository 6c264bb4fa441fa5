use serde::Deserialize;

/// Plugin configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CsvStorePluginConfig {
    /// Field delimiter; must be a single ASCII character.
    pub delimiter: char,
}

impl Default for CsvStorePluginConfig {
    fn default() -> Self {
        Self { delimiter: ',' }
    }
}
