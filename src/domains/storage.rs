// 存储领域管理器
//
// 负责宠物档案存储和设置管理相关的功能

use std::sync::Arc;

use crate::settings::SettingsManager;
use crate::storage::PetStore;

/// 存储领域管理器 - 负责宠物存储和设置
#[derive(Clone)]
pub struct StorageDomain {
    store: Arc<PetStore>,
    settings: Arc<SettingsManager>,
}

impl StorageDomain {
    /// 创建新的存储领域管理器
    pub fn new(store: Arc<PetStore>, settings: Arc<SettingsManager>) -> Self {
        Self { store, settings }
    }

    /// 获取宠物存储
    pub fn get_store(&self) -> &Arc<PetStore> {
        &self.store
    }

    /// 获取设置管理器
    pub fn get_settings(&self) -> &Arc<SettingsManager> {
        &self.settings
    }
}
