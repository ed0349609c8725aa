use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// Import PhraseBook from faultbook_query to avoid duplication
use faultbook_query::PhraseBook;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    /// Optional override of the built-in phrase lists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phrases: Option<PhraseBook>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StorageConfig {
    #[serde(default = "StorageConfig::default_csv_path")]
    pub csv_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            csv_path: Self::default_csv_path(),
        }
    }
}

impl StorageConfig {
    fn default_csv_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_default()
            .join("faultbook")
            .join("knowledge.csv")
    }
}

impl Config {
    /// Phrase lists to use: the configured override, or the built-ins.
    #[must_use]
    pub fn phrase_book(&self) -> PhraseBook {
        self.phrases.clone().unwrap_or_default()
    }

    pub fn load() -> anyhow::Result<Self> {
        let config_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("faultbook");

        let config_path = config_dir.join("config.json");

        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'faultbook init' to create config.",
                config_path.display()
            );
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = serde_json::from_str(&content)?;

        Ok(config)
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("faultbook");

        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        let template = Self::default();
        let content = serde_json::to_string_pretty(&template)?;
        std::fs::write(&config_path, content)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Point storage.csv_path at your knowledge-base CSV (or keep the default)");
        println!("   2. Run 'faultbook chat' to start asking about known issues");
        println!();
        println!("🔧 Configuration options:");
        println!("   - storage.csv_path: location of the knowledge-base sheet");
        println!("   - phrases: override the built-in greeting/entry/add/delete phrase lists");
        println!();
        Ok(())
    }
}
