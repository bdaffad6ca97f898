// 数据模型模块 - 定义应用配置等数据结构

use serde::{Deserialize, Serialize};

// 重新导出存储层的类型
pub use crate::storage::{NewPet, PetRecord};

/// 应用配置（部分更新，未提供的字段保持不变）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// 宠物集合的存储键
    pub storage_key: Option<String>,
    /// 日志级别
    pub log_level: Option<String>,
    /// 详情页日期格式
    pub date_format: Option<String>,
    /// 是否向宿主推送日志
    pub log_broadcast_enabled: Option<bool>,
}

/// 持久化的应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedAppConfig {
    /// 宠物集合的存储键
    pub storage_key: String,
    /// 日志级别（trace/debug/info/warn/error）
    pub log_level: String,
    /// 详情页日期格式（chrono 格式串）
    pub date_format: String,
    /// 是否向宿主推送日志
    pub log_broadcast_enabled: bool,
}

impl Default for PersistedAppConfig {
    fn default() -> Self {
        Self {
            storage_key: crate::storage::STORAGE_KEY.to_string(),
            log_level: "info".to_string(),
            date_format: "%Y-%m-%d %H:%M:%S".to_string(),
            log_broadcast_enabled: true,
        }
    }
}

impl PersistedAppConfig {
    /// 解析日志级别，无法识别时使用 INFO
    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level
            .trim()
            .parse()
            .unwrap_or(tracing::Level::INFO)
    }
}

/// 宠物种类选项（表单下拉框）
///
/// 第一项是占位，值为空
pub const PET_TYPE_OPTIONS: &[(&str, &str)] = &[
    ("Select type", ""),
    ("Dog", "Dog"),
    ("Cat", "Cat"),
    ("Other", "Other"),
];
