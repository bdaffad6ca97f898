// PetJio - 本地宠物档案应用核心库

// 声明模块
pub mod app;
pub mod domains;
pub mod event_bus;
pub mod logger;
pub mod models;
pub mod presenters;
pub mod settings;
pub mod storage;
pub mod utils;

use std::sync::Arc;

use anyhow::Result;

use domains::{StorageDomain, SystemDomain};
use event_bus::{AppEvent, EventBus};
use models::{AppConfig, PersistedAppConfig};
use presenters::{CreatePetPresenter, PetDetailPresenter, PetListPresenter, ScreenHost};

pub use app::{bootstrap, run};

/// 应用状态（按领域分组）
///
/// - 存储领域：宠物存储和设置
/// - 系统领域：日志推送和应用目录
/// - 事件总线：存储变更通知
#[derive(Clone)]
pub struct AppState {
    /// 存储领域管理器
    pub storage_domain: Arc<StorageDomain>,
    /// 系统领域管理器
    pub system_domain: Arc<SystemDomain>,
    /// 事件总线
    pub event_bus: Arc<EventBus>,
}

impl AppState {
    /// 创建列表页
    pub fn list_presenter(&self, host: Arc<dyn ScreenHost>) -> PetListPresenter {
        PetListPresenter::new(self.storage_domain.get_store().clone(), host)
    }

    /// 创建新增页
    pub fn create_presenter(&self, host: Arc<dyn ScreenHost>) -> CreatePetPresenter {
        CreatePetPresenter::new(self.storage_domain.get_store().clone(), host)
    }

    /// 创建详情页（使用当前配置的日期格式）
    pub async fn detail_presenter(
        &self,
        host: Arc<dyn ScreenHost>,
        pet_id: &str,
    ) -> PetDetailPresenter {
        let config = self.storage_domain.get_settings().get().await;
        PetDetailPresenter::new(
            self.storage_domain.get_store().clone(),
            host,
            pet_id,
            config.date_format,
        )
    }

    /// 更新配置
    ///
    /// 存储键的修改在下次启动时生效
    pub async fn update_config(&self, update: AppConfig) -> Result<PersistedAppConfig> {
        let config = self.storage_domain.get_settings().update(update).await?;
        self.system_domain
            .get_logger()
            .set_enabled(config.log_broadcast_enabled);
        self.event_bus.publish(AppEvent::ConfigUpdated);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::LogBroadcaster;
    use crate::presenters::testing::{HostCall, RecordingHost};
    use crate::presenters::{PetDetailView, Route, SubmitOutcome};
    use crate::settings::SettingsManager;
    use tempfile::tempdir;

    async fn new_state(data_dir: std::path::PathBuf) -> AppState {
        let settings = Arc::new(
            SettingsManager::new(data_dir.join("settings.json"))
                .await
                .unwrap(),
        );
        bootstrap(data_dir, settings, Arc::new(LogBroadcaster::new(16)))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_full_flow_across_screens() {
        let temp_dir = tempdir().unwrap();
        let state = new_state(temp_dir.path().to_path_buf()).await;
        let host = Arc::new(RecordingHost::new());

        // 空列表
        let list = state.list_presenter(host.clone());
        list.on_focus().await;
        assert!(list.view().await.empty_message.is_some());

        // 新增
        list.add_pet();
        let form = state.create_presenter(host.clone());
        form.set_name("Buddy").await;
        form.set_kind("Dog").await;
        form.set_age("3").await;
        form.set_breed("Labrador").await;
        let SubmitOutcome::Saved(pet) = form.submit().await else {
            panic!("应该保存成功");
        };

        // 返回列表后重新加载
        list.on_focus().await;
        let view = list.view().await;
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].id, pet.id);

        // 详情页收藏
        list.open_details(&pet.id);
        let detail = state.detail_presenter(host.clone(), &pet.id).await;
        detail.on_focus().await;
        detail.toggle_favorite().await;
        assert!(matches!(
            detail.view().await,
            PetDetailView::Found { favorite: true, .. }
        ));

        list.on_focus().await;
        assert!(list.view().await.items[0].favorite_badge.is_some());

        assert_eq!(
            host.calls(),
            vec![
                HostCall::Navigate(Route::AddPet),
                HostCall::GoBack,
                HostCall::Navigate(Route::PetDetails {
                    pet_id: pet.id.clone()
                }),
            ]
        );
    }

    #[tokio::test]
    async fn test_data_survives_restart() {
        let temp_dir = tempdir().unwrap();
        let pet_id = {
            let state = new_state(temp_dir.path().to_path_buf()).await;
            let form = state.create_presenter(Arc::new(RecordingHost::new()));
            form.set_name("Milo").await;
            form.set_kind("Cat").await;
            match form.submit().await {
                SubmitOutcome::Saved(pet) => pet.id,
                other => panic!("保存失败: {:?}", other),
            }
        };

        let state = new_state(temp_dir.path().to_path_buf()).await;
        let pet = state.storage_domain.get_store().get_by_id(&pet_id).await;
        assert_eq!(pet.unwrap().name, "Milo");
    }

    #[tokio::test]
    async fn test_update_config_notifies_and_toggles_logs() {
        let temp_dir = tempdir().unwrap();
        let state = new_state(temp_dir.path().to_path_buf()).await;
        let mut events = state.event_bus.subscribe();

        let config = state
            .update_config(AppConfig {
                log_broadcast_enabled: Some(false),
                ..Default::default()
            })
            .await
            .unwrap();

        assert!(!config.log_broadcast_enabled);
        assert!(!state.system_domain.get_logger().is_enabled());
        assert_eq!(events.try_recv().unwrap(), AppEvent::ConfigUpdated);
    }
}
