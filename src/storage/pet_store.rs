// 宠物档案存储 - 整个集合序列化后存放在同一个键下
//
// 每次修改都是"读取全部 -> 修改 -> 整体写回"，
// 写操作之间由一把互斥锁串行化，避免并发写入相互覆盖

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use super::error::StoreError;
use super::kv::KeyValueStore;
use super::models::{now_millis, NewPet, PetRecord};
use crate::event_bus::{AppEvent, EventBus};
use crate::storage::PetField;
use crate::utils::validation::{optional_text, require_text};

/// 默认存储键
pub const STORAGE_KEY: &str = "@petjio_pets_v1";

/// 宠物档案存储
pub struct PetStore {
    /// 底层键值存储
    backend: Arc<dyn KeyValueStore>,
    /// 集合所在的键
    key: String,
    /// 写锁：同一时间只允许一个读改写流程
    write_lock: Mutex<()>,
    /// 事件总线（可选）
    event_bus: Option<Arc<EventBus>>,
}

impl PetStore {
    /// 使用默认键创建存储
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(backend, STORAGE_KEY)
    }

    /// 使用指定键创建存储
    pub fn with_key(backend: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
            write_lock: Mutex::new(()),
            event_bus: None,
        }
    }

    /// 写入成功后向事件总线发布变更
    pub fn with_event_bus(mut self, event_bus: Arc<EventBus>) -> Self {
        self.event_bus = Some(event_bus);
        self
    }

    /// 集合所在的键
    pub fn key(&self) -> &str {
        &self.key
    }

    /// 获取全部宠物（新建的在前）
    ///
    /// 读取失败或数据损坏时记录日志并返回空列表，不向调用方传播错误。
    pub async fn list_all(&self) -> Vec<PetRecord> {
        match self.load().await {
            Ok(pets) => pets,
            Err(e) => {
                warn!("加载宠物列表失败，按空列表处理: {}", e);
                self.publish(AppEvent::StorageReadFailed {
                    error: e.to_string(),
                });
                Vec::new()
            }
        }
    }

    /// 按ID查找宠物，未找到返回 None
    pub async fn get_by_id(&self, id: &str) -> Option<PetRecord> {
        self.list_all().await.into_iter().find(|pet| pet.id == id)
    }

    /// 新建宠物
    ///
    /// 校验名字和种类（名字优先），生成唯一ID后插入到集合最前面并整体写回。
    pub async fn create(&self, input: NewPet) -> Result<PetRecord, StoreError> {
        let name = require_text(PetField::Name, &input.name)?;
        let kind = require_text(PetField::Type, &input.kind)?;

        let _guard = self.write_lock.lock().await;
        let mut pets = self.load().await?;

        let pet = PetRecord {
            id: unique_id(&pets),
            name,
            kind,
            age: input.age,
            breed: optional_text(input.breed.as_deref()),
            favorite: false,
            created_at: now_millis(),
        };

        pets.insert(0, pet.clone());
        self.save(&pets).await?;

        info!("已保存宠物: {} ({})", pet.name, pet.id);
        self.publish(AppEvent::PetCreated {
            pet_id: pet.id.clone(),
            name: pet.name.clone(),
        });
        Ok(pet)
    }

    /// 设置收藏状态
    ///
    /// 只修改 `favorite` 字段；未找到对应ID时返回 `Ok(None)` 且不写入。
    pub async fn set_favorite(
        &self,
        id: &str,
        value: bool,
    ) -> Result<Option<PetRecord>, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut pets = self.load().await?;

        let Some(pet) = pets.iter_mut().find(|pet| pet.id == id) else {
            debug!("设置收藏时未找到宠物: {}", id);
            return Ok(None);
        };
        pet.favorite = value;
        let updated = pet.clone();

        self.save(&pets).await?;

        info!("宠物 {} 收藏状态已更新为 {}", id, value);
        self.publish(AppEvent::FavoriteChanged {
            pet_id: updated.id.clone(),
            favorite: value,
        });
        Ok(Some(updated))
    }

    /// 严格读取集合，键不存在时为空集合
    async fn load(&self) -> Result<Vec<PetRecord>, StoreError> {
        let raw = self
            .backend
            .get_item(&self.key)
            .await
            .map_err(|e| StoreError::StorageRead(format!("{:#}", e)))?;

        match raw {
            None => Ok(Vec::new()),
            Some(json) if json.trim().is_empty() => Ok(Vec::new()),
            Some(json) => serde_json::from_str(&json)
                .map_err(|e| StoreError::StorageRead(format!("数据格式错误: {}", e))),
        }
    }

    /// 整体写回集合
    async fn save(&self, pets: &[PetRecord]) -> Result<(), StoreError> {
        let json =
            serde_json::to_string(pets).map_err(|e| StoreError::StorageWrite(e.to_string()))?;

        self.backend
            .set_item(&self.key, &json)
            .await
            .map_err(|e| {
                error!("写入宠物数据失败 ({}): {:#}", self.backend.backend_type(), e);
                StoreError::StorageWrite(format!("{:#}", e))
            })
    }

    fn publish(&self, event: AppEvent) {
        if let Some(bus) = &self.event_bus {
            bus.publish(event);
        }
    }
}

/// 生成集合内唯一的ID
fn unique_id(pets: &[PetRecord]) -> String {
    loop {
        let id = uuid::Uuid::new_v4().to_string();
        if !pets.iter().any(|pet| pet.id == id) {
            return id;
        }
    }
}
