//! 宠物详情页

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, warn};

use super::{ScreenHost, ScreenLifecycle};
use crate::storage::{PetRecord, PetStore};
use crate::utils::format::{display_or_placeholder, format_created_at};

pub const NOT_FOUND_MESSAGE: &str = "Pet not found.";
const MARK_FAVORITE_LABEL: &str = "☆ Mark Favorite";
const UNMARK_FAVORITE_LABEL: &str = "★ Unmark Favorite";
const TOGGLE_FAILED_MESSAGE: &str = "Could not update favorite.";

/// 详情页渲染数据
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PetDetailView {
    NotFound { message: &'static str },
    Found {
        /// (标签, 值)
        rows: Vec<(&'static str, String)>,
        favorite: bool,
        toggle_label: &'static str,
    },
}

/// 宠物详情 Presenter
pub struct PetDetailPresenter {
    store: Arc<PetStore>,
    host: Arc<dyn ScreenHost>,
    lifecycle: ScreenLifecycle,
    pet_id: String,
    date_format: String,
    pet: RwLock<Option<PetRecord>>,
}

impl PetDetailPresenter {
    pub fn new(
        store: Arc<PetStore>,
        host: Arc<dyn ScreenHost>,
        pet_id: impl Into<String>,
        date_format: impl Into<String>,
    ) -> Self {
        Self {
            store,
            host,
            lifecycle: ScreenLifecycle::new(),
            pet_id: pet_id.into(),
            date_format: date_format.into(),
            pet: RwLock::new(None),
        }
    }

    pub fn pet_id(&self) -> &str {
        &self.pet_id
    }

    pub fn lifecycle(&self) -> &ScreenLifecycle {
        &self.lifecycle
    }

    /// 页面获得焦点：重新加载该宠物
    pub async fn on_focus(&self) {
        let pet = self.store.get_by_id(&self.pet_id).await;
        if !self.lifecycle.is_mounted() {
            debug!("详情页已销毁，丢弃加载结果");
            return;
        }
        *self.pet.write().await = pet;
    }

    pub async fn view(&self) -> PetDetailView {
        let pet = self.pet.read().await;
        let Some(pet) = pet.as_ref() else {
            return PetDetailView::NotFound {
                message: NOT_FOUND_MESSAGE,
            };
        };

        PetDetailView::Found {
            rows: vec![
                ("Name", pet.name.clone()),
                ("Type", pet.kind.clone()),
                ("Age", display_or_placeholder(pet.age.as_ref())),
                ("Breed", display_or_placeholder(pet.breed.as_ref())),
                ("Added", format_created_at(&pet.created_at, &self.date_format)),
            ],
            favorite: pet.favorite,
            toggle_label: if pet.favorite {
                UNMARK_FAVORITE_LABEL
            } else {
                MARK_FAVORITE_LABEL
            },
        }
    }

    /// 切换收藏
    ///
    /// 存储确认后才更新显示的状态；失败时弹出提示，显示保持不变。
    pub async fn toggle_favorite(&self) {
        let Some(current) = self.pet.read().await.as_ref().map(|p| p.favorite) else {
            debug!("宠物未加载，忽略收藏切换");
            return;
        };

        let result = self.store.set_favorite(&self.pet_id, !current).await;
        if !self.lifecycle.is_mounted() {
            debug!("详情页已销毁，丢弃收藏切换结果");
            return;
        }

        match result {
            Ok(updated) => {
                // 记录已不存在时显示"未找到"
                *self.pet.write().await = updated;
            }
            Err(e) => {
                warn!("切换收藏失败: {}", e);
                self.host.alert("Error", TOGGLE_FAILED_MESSAGE);
            }
        }
    }

    /// 页面销毁
    pub fn teardown(&self) {
        self.lifecycle.teardown();
    }
}
