// 存储数据模型 - 宠物档案及其创建参数

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// 时间戳精度与移动端 `toISOString()` 保持一致（毫秒）
pub fn now_millis() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// 宠物档案
///
/// 序列化字段名与持久化的 JSON 数组保持一致（`type`、`createdAt`），
/// 可选字段写出为 `null`，读取时 `null` 与缺省等价。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetRecord {
    /// 唯一ID（UUID v4），创建后不可变
    pub id: String,
    /// 名字
    pub name: String,
    /// 种类（Dog / Cat / Other，存储层不做限制）
    #[serde(rename = "type")]
    pub kind: String,
    /// 年龄（岁）
    #[serde(default, deserialize_with = "lenient_age")]
    pub age: Option<u64>,
    /// 品种
    #[serde(default, deserialize_with = "blank_as_none")]
    pub breed: Option<String>,
    /// 是否收藏
    #[serde(default)]
    pub favorite: bool,
    /// 创建时间
    pub created_at: DateTime<Utc>,
}

/// 新建宠物的输入参数
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPet {
    pub name: String,
    pub kind: String,
    pub age: Option<u64>,
    pub breed: Option<String>,
}

impl NewPet {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            ..Default::default()
        }
    }

    pub fn with_age(mut self, age: u64) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_breed(mut self, breed: impl Into<String>) -> Self {
        self.breed = Some(breed.into());
        self
    }
}

// 其它客户端写入的年龄可能不是合法整数，单条记录异常时只丢弃该字段
fn lenient_age<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| {
        v.as_u64().or_else(|| {
            v.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= u64::MAX as f64)
                .map(|f| f as u64)
        })
    }))
}

// 旧数据里空白品种会被写成 ""，读取时统一视为缺省
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }))
}
