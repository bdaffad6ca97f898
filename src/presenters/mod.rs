//! 页面展示层
//!
//! 每个页面对应一个 Presenter，宿主界面负责渲染与输入控件：
//! - list: 宠物列表
//! - create: 新增宠物表单
//! - detail: 宠物详情与收藏切换
//!
//! Presenter 不缓存持久数据，每次页面获得焦点都从存储重新加载。

pub mod create;
pub mod detail;
pub mod list;

#[cfg(test)]
pub(crate) mod testing;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub use create::{CreatePetPresenter, CreatePetView, PetDraft, SubmitOutcome};
pub use detail::{PetDetailPresenter, PetDetailView};
pub use list::{PetListItem, PetListPresenter, PetListView};

/// 页面路由
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// 首页列表（不显示导航栏）
    PetList,
    /// 新增宠物
    AddPet,
    /// 宠物详情
    PetDetails { pet_id: String },
}

impl Route {
    /// 导航栏标题
    pub fn title(&self) -> Option<&'static str> {
        match self {
            Self::PetList => None,
            Self::AddPet => Some("Add Pet"),
            Self::PetDetails { .. } => Some("Pet Details"),
        }
    }
}

/// 宿主界面接口 - 导航与弹窗
pub trait ScreenHost: Send + Sync {
    /// 打开新页面
    fn navigate(&self, route: Route);

    /// 返回上一页
    fn go_back(&self);

    /// 弹出提示
    fn alert(&self, title: &str, message: &str);
}

/// 页面生命周期
///
/// 页面销毁后，仍在进行中的加载/保存结果直接丢弃，不再更新状态或弹窗。
#[derive(Debug, Clone)]
pub struct ScreenLifecycle {
    mounted: Arc<AtomicBool>,
}

impl Default for ScreenLifecycle {
    fn default() -> Self {
        Self {
            mounted: Arc::new(AtomicBool::new(true)),
        }
    }
}

impl ScreenLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// 页面是否仍然存在
    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::SeqCst)
    }

    /// 页面已销毁
    pub fn teardown(&self) {
        self.mounted.store(false, Ordering::SeqCst);
    }
}
