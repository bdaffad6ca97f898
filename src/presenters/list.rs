//! 宠物列表页

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use super::{Route, ScreenHost, ScreenLifecycle};
use crate::storage::{PetRecord, PetStore};
use crate::utils::format::pet_subtitle;

pub const LIST_HEADER: &str = "PetJio — My Pets";
pub const ADD_PET_LABEL: &str = "+ Add Pet";
pub const EMPTY_MESSAGE: &str = "No pets added yet. Tap \"+ Add Pet\" to create one.";
pub const FAVORITE_BADGE: &str = "★ Favorite";

/// 列表项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetListItem {
    pub id: String,
    pub name: String,
    pub subtitle: String,
    pub favorite_badge: Option<&'static str>,
}

impl From<&PetRecord> for PetListItem {
    fn from(pet: &PetRecord) -> Self {
        Self {
            id: pet.id.clone(),
            name: pet.name.clone(),
            subtitle: pet_subtitle(&pet.kind, pet.age),
            favorite_badge: pet.favorite.then_some(FAVORITE_BADGE),
        }
    }
}

/// 列表页渲染数据
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetListView {
    pub header: &'static str,
    pub add_label: &'static str,
    pub items: Vec<PetListItem>,
    /// 列表为空时显示的提示
    pub empty_message: Option<&'static str>,
}

/// 宠物列表 Presenter
pub struct PetListPresenter {
    store: Arc<PetStore>,
    host: Arc<dyn ScreenHost>,
    lifecycle: ScreenLifecycle,
    pets: RwLock<Vec<PetRecord>>,
}

impl PetListPresenter {
    pub fn new(store: Arc<PetStore>, host: Arc<dyn ScreenHost>) -> Self {
        Self {
            store,
            host,
            lifecycle: ScreenLifecycle::new(),
            pets: RwLock::new(Vec::new()),
        }
    }

    pub fn lifecycle(&self) -> &ScreenLifecycle {
        &self.lifecycle
    }

    /// 页面获得焦点：重新加载全部宠物
    pub async fn on_focus(&self) {
        let pets = self.store.list_all().await;
        if !self.lifecycle.is_mounted() {
            debug!("列表页已销毁，丢弃加载结果");
            return;
        }
        *self.pets.write().await = pets;
    }

    /// 当前渲染数据（保持存储顺序，新建的在前）
    pub async fn view(&self) -> PetListView {
        let pets = self.pets.read().await;
        let items: Vec<PetListItem> = pets.iter().map(PetListItem::from).collect();
        let empty_message = items.is_empty().then_some(EMPTY_MESSAGE);

        PetListView {
            header: LIST_HEADER,
            add_label: ADD_PET_LABEL,
            items,
            empty_message,
        }
    }

    /// 点击列表项
    pub fn open_details(&self, pet_id: &str) {
        self.host.navigate(Route::PetDetails {
            pet_id: pet_id.to_string(),
        });
    }

    /// 点击"新增"
    pub fn add_pet(&self) {
        self.host.navigate(Route::AddPet);
    }

    /// 页面销毁
    pub fn teardown(&self) {
        self.lifecycle.teardown();
    }
}
