//! 应用程序初始化和启动
//!
//! 负责应用核心的完整启动流程，包括：
//! - 设置加载
//! - 日志系统初始化
//! - 本地存储初始化
//! - 各领域模块组装

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::domains::{StorageDomain, SystemDomain};
use crate::event_bus::EventBus;
use crate::logger::{self, LogBroadcaster};
use crate::settings::SettingsManager;
use crate::storage::{FileKeyValueStore, PetStore};
use crate::utils::file_system::{get_data_dir, get_log_dir};
use crate::AppState;

const EVENT_BUS_CAPACITY: usize = 100;
const LOG_BUFFER_CAPACITY: usize = 500;

/// 应用程序入口点
///
/// 宿主启动时调用一次：
/// 1. 加载设置（决定日志级别）
/// 2. 初始化日志系统
/// 3. 组装存储与领域模块
pub async fn run(data_dir: Option<PathBuf>) -> Result<AppState> {
    let data_dir = data_dir.unwrap_or_else(get_data_dir);

    let settings = SettingsManager::new(data_dir.join("settings.json"))
        .await
        .context("加载设置失败")?;
    let config = settings.get().await;

    let log_broadcaster = Arc::new(LogBroadcaster::new(LOG_BUFFER_CAPACITY));
    log_broadcaster.set_enabled(config.log_broadcast_enabled);
    logger::init_with_broadcaster(
        log_broadcaster.clone(),
        &get_log_dir(),
        config.tracing_level(),
    )?;

    info!("初始化 PetJio...");
    bootstrap(data_dir, Arc::new(settings), log_broadcaster).await
}

/// 组装应用状态（不初始化全局日志，便于测试和宿主自行接管日志）
pub async fn bootstrap(
    data_dir: PathBuf,
    settings: Arc<SettingsManager>,
    log_broadcaster: Arc<LogBroadcaster>,
) -> Result<AppState> {
    let config = settings.get().await;

    let backend = FileKeyValueStore::new(data_dir.join("storage"))
        .await
        .context("初始化本地存储失败")?;
    info!("本地存储目录: {:?}", backend.root());

    let event_bus = Arc::new(EventBus::new(EVENT_BUS_CAPACITY));
    let store = Arc::new(
        PetStore::with_key(Arc::new(backend), config.storage_key.clone())
            .with_event_bus(event_bus.clone()),
    );

    let storage_domain = Arc::new(StorageDomain::new(store, settings));
    let system_domain = Arc::new(SystemDomain::new(log_broadcaster, data_dir));

    info!("PetJio 初始化完成，存储键: {}", config.storage_key);
    Ok(AppState {
        storage_domain,
        system_domain,
        event_bus,
    })
}
