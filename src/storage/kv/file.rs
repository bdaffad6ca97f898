// 文件键值存储 - 每个键对应目录下的一个 JSON 文件

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::debug;

use super::KeyValueStore;

/// 落盘的键值存储
///
/// 写入先落到临时文件再 rename 覆盖，写入失败时旧值保持完整。
pub struct FileKeyValueStore {
    root: PathBuf,
}

impl FileKeyValueStore {
    /// 创建存储，目录不存在时自动创建
    pub async fn new(root: PathBuf) -> Result<Self> {
        tokio::fs::create_dir_all(&root)
            .await
            .with_context(|| format!("创建存储目录失败: {:?}", root))?;
        Ok(Self { root })
    }

    /// 存储目录
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// 键对应的文件路径
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", encode_key(key)))
    }
}

/// 把任意键编码成安全的文件名（字母数字、`-`、`_` 原样保留，其余转成 `%XX`）
fn encode_key(key: &str) -> String {
    let mut encoded = String::with_capacity(key.len());
    for byte in key.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_' {
            encoded.push(byte as char);
        } else {
            encoded.push_str(&format!("%{:02X}", byte));
        }
    }
    encoded
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("读取存储文件失败: {:?}", path)),
        }
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        let tmp_path = path.with_extension("json.tmp");

        tokio::fs::write(&tmp_path, value)
            .await
            .with_context(|| format!("写入临时文件失败: {:?}", tmp_path))?;
        tokio::fs::rename(&tmp_path, &path)
            .await
            .with_context(|| format!("替换存储文件失败: {:?}", path))?;

        debug!("已写入 {} ({} 字节)", key, value.len());
        Ok(())
    }

    fn backend_type(&self) -> &str {
        "file"
    }
}
