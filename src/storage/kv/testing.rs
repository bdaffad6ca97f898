// 测试辅助 - 可注入故障的键值存储

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use anyhow::{bail, Result};
use async_trait::async_trait;

use super::memory::MemoryKeyValueStore;
use super::KeyValueStore;

/// 包装内存存储，可以让读或写失败，并统计写入次数
#[derive(Default)]
pub struct FlakyStore {
    inner: MemoryKeyValueStore,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    hang_writes: AtomicBool,
    writes: AtomicUsize,
}

impl FlakyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(key: &str, value: &str) -> Self {
        Self {
            inner: MemoryKeyValueStore::with_items([(key, value)]),
            ..Default::default()
        }
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// 写入永远挂起，模拟被宿主放弃的保存
    pub fn set_hang_writes(&self, hang: bool) {
        self.hang_writes.store(hang, Ordering::SeqCst);
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// 绕过故障注入直接读取
    pub async fn raw(&self, key: &str) -> Option<String> {
        self.inner.get_item(key).await.ok().flatten()
    }
}

#[async_trait]
impl KeyValueStore for FlakyStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            bail!("模拟读取失败");
        }
        self.inner.get_item(key).await
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            bail!("模拟写入失败");
        }
        if self.hang_writes.load(Ordering::SeqCst) {
            std::future::pending::<()>().await;
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.set_item(key, value).await
    }

    fn backend_type(&self) -> &str {
        "flaky"
    }
}
