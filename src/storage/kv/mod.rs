// 键值存储抽象层 - 定义本地持久化接口

pub mod file;
pub mod memory;

#[cfg(test)]
pub(crate) mod testing;

use anyhow::Result;
use async_trait::async_trait;

/// 键值存储接口 - 所有本地存储实现必须实现此 trait
///
/// 语义与移动端的异步键值存储一致：值是完整的字符串，读写都是整体替换。
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// 读取键对应的值，键不存在时返回 None
    async fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// 写入键值（整体覆盖）
    async fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// 获取存储类型标识
    fn backend_type(&self) -> &str;
}
