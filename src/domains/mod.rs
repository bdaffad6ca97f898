// 领域模块 - 用于组织应用的业务逻辑
//
// 按业务领域分组应用状态
// 包含2个领域:存储、系统

pub mod storage;
pub mod system;

pub use storage::StorageDomain;
pub use system::SystemDomain;
