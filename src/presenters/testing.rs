// 测试辅助 - 记录宿主调用

use std::sync::Mutex;

use super::{Route, ScreenHost};

/// 宿主调用记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    Navigate(Route),
    GoBack,
    Alert { title: String, message: String },
}

/// 记录所有调用的宿主
#[derive(Default)]
pub struct RecordingHost {
    calls: Mutex<Vec<HostCall>>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn alerts(&self) -> Vec<(String, String)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                HostCall::Alert { title, message } => Some((title, message)),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: HostCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl ScreenHost for RecordingHost {
    fn navigate(&self, route: Route) {
        self.record(HostCall::Navigate(route));
    }

    fn go_back(&self) {
        self.record(HostCall::GoBack);
    }

    fn alert(&self, title: &str, message: &str) {
        self.record(HostCall::Alert {
            title: title.to_string(),
            message: message.to_string(),
        });
    }
}
