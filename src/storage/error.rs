// 存储层错误定义

use std::fmt;

use thiserror::Error;

/// 需要校验的宠物字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PetField {
    Name,
    Type,
    Age,
}

impl PetField {
    /// 表单上显示的字段名
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Pet Name",
            Self::Type => "Pet Type",
            Self::Age => "Age",
        }
    }

    /// 校验失败时给用户的提示
    pub fn validation_message(&self) -> String {
        match self {
            Self::Age => "Age must be a whole number".to_string(),
            other => format!("{} is required", other.label()),
        }
    }
}

impl fmt::Display for PetField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 宠物存储错误
///
/// 未找到记录不是错误，由 `Option::None` 表示。
#[derive(Debug, Error)]
pub enum StoreError {
    /// 底层存储不可读或内容无法解析
    #[error("读取宠物数据失败: {0}")]
    StorageRead(String),

    /// 底层存储写入失败，之前持久化的数据保持不变
    #[error("写入宠物数据失败: {0}")]
    StorageWrite(String),

    /// 字段校验失败
    #[error("{}", .field.validation_message())]
    Validation { field: PetField },
}

impl StoreError {
    /// 校验失败的字段（其它错误返回 None）
    pub fn invalid_field(&self) -> Option<PetField> {
        match self {
            Self::Validation { field } => Some(*field),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_names_field() {
        let err = StoreError::Validation {
            field: PetField::Name,
        };
        assert_eq!(err.to_string(), "Pet Name is required");
        assert_eq!(err.invalid_field(), Some(PetField::Name));

        let err = StoreError::Validation {
            field: PetField::Type,
        };
        assert_eq!(err.to_string(), "Pet Type is required");

        let err = StoreError::Validation {
            field: PetField::Age,
        };
        assert_eq!(err.to_string(), "Age must be a whole number");
    }

    #[test]
    fn test_storage_errors_have_no_field() {
        assert_eq!(
            StoreError::StorageWrite("disk full".into()).invalid_field(),
            None
        );
        assert_eq!(StoreError::StorageRead("bad json".into()).invalid_field(), None);
    }
}
