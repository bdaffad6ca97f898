// 存储模块 - 本地键值存储与宠物档案集合

// 子模块
pub mod error;
pub mod kv;
pub mod models;
pub mod pet_store;

// 重新导出主要类型
pub use error::{PetField, StoreError};
pub use kv::KeyValueStore;
pub use models::*;
pub use pet_store::{PetStore, STORAGE_KEY};

// 重新导出具体实现
pub use kv::file::FileKeyValueStore;
pub use kv::memory::MemoryKeyValueStore;
