//! 文件系统路径工具
//!
//! 提供跨平台的数据目录、日志目录定位

use std::path::PathBuf;

const APP_DIR_NAME: &str = "petjio";

fn home_dir() -> PathBuf {
    PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
}

/// 获取应用数据目录路径（跨平台）
///
/// - macOS: ~/Library/Application Support/petjio
/// - Windows: %APPDATA%/petjio
/// - Linux: ~/.local/share/petjio
pub fn get_data_dir() -> PathBuf {
    if cfg!(target_os = "macos") {
        home_dir().join("Library/Application Support").join(APP_DIR_NAME)
    } else if cfg!(target_os = "windows") {
        let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(appdata).join(APP_DIR_NAME)
    } else {
        home_dir().join(".local/share").join(APP_DIR_NAME)
    }
}

/// 获取日志目录路径（跨平台）
///
/// - macOS: ~/Library/Logs/petjio
/// - 其它平台: <数据目录>/logs
pub fn get_log_dir() -> PathBuf {
    if cfg!(target_os = "macos") {
        home_dir().join("Library/Logs").join(APP_DIR_NAME)
    } else {
        get_data_dir().join("logs")
    }
}
