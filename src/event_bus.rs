// 事件总线 - 用于存储层与界面层解耦通信
//
// 存储层在写入成功后发布事件，宿主可以订阅事件刷新界面，
// 也可以继续沿用"页面获得焦点时重新加载"的方式，两者行为一致
// 使用 tokio::sync::broadcast 实现事件分发

use tokio::sync::broadcast;

/// 应用事件枚举 - 定义所有可能的存储事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// 新宠物已保存
    PetCreated { pet_id: String, name: String },

    /// 收藏状态已更新
    FavoriteChanged { pet_id: String, favorite: bool },

    /// 读取失败，已降级为空列表
    StorageReadFailed { error: String },

    /// 配置更新事件
    ConfigUpdated,
}

/// 事件总线
///
/// 使用 broadcast channel 实现发布/订阅模式
/// 支持多个订阅者同时接收事件
pub struct EventBus {
    sender: broadcast::Sender<AppEvent>,
}

impl EventBus {
    /// 创建新的事件总线
    ///
    /// # 参数
    /// - `capacity`: 事件缓冲区大小
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// 发布事件
    ///
    /// 如果没有订阅者,事件会被丢弃
    pub fn publish(&self, event: AppEvent) {
        match self.sender.send(event) {
            Ok(receiver_count) => {
                tracing::trace!("事件已发布，订阅者数量: {}", receiver_count);
            }
            Err(_) => {
                tracing::trace!("事件已发布但无订阅者");
            }
        }
    }

    /// 订阅事件
    pub fn subscribe(&self) -> broadcast::Receiver<AppEvent> {
        self.sender.subscribe()
    }

    /// 获取当前订阅者数量
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}
