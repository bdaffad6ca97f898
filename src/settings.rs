use std::path::{Path, PathBuf};

use anyhow::Result;
use tokio::sync::RwLock;
use tracing::warn;

use crate::models::{AppConfig, PersistedAppConfig};

pub struct SettingsManager {
    path: PathBuf,
    data: RwLock<PersistedAppConfig>,
}

impl SettingsManager {
    pub async fn new(path: PathBuf) -> Result<Self> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let initial = match tokio::fs::read(&path).await {
            Ok(bytes) if !bytes.is_empty() => {
                serde_json::from_slice::<PersistedAppConfig>(&bytes).unwrap_or_else(|e| {
                    warn!("配置文件解析失败，使用默认配置: {}", e);
                    PersistedAppConfig::default()
                })
            }
            _ => {
                let default = PersistedAppConfig::default();
                let json = serde_json::to_string_pretty(&default)?;
                tokio::fs::write(&path, json).await?;
                default
            }
        };

        Ok(Self {
            path,
            data: RwLock::new(initial),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn get(&self) -> PersistedAppConfig {
        self.data.read().await.clone()
    }

    pub async fn update(&self, update: AppConfig) -> Result<PersistedAppConfig> {
        let mut current = self.data.write().await;
        let mut config = current.clone();

        if let Some(key) = update.storage_key {
            config.storage_key = key;
        }
        if let Some(level) = update.log_level {
            config.log_level = level;
        }
        if let Some(format) = update.date_format {
            config.date_format = format;
        }
        if let Some(enabled) = update.log_broadcast_enabled {
            config.log_broadcast_enabled = enabled;
        }

        // 写入成功后才替换内存中的配置
        self.save(&config).await?;
        *current = config.clone();
        Ok(config)
    }

    async fn save(&self, config: &PersistedAppConfig) -> Result<()> {
        let json = serde_json::to_string_pretty(config)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}
