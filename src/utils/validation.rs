//! 输入验证工具函数
//!
//! 提供宠物表单字段的校验与规整功能

use crate::storage::{PetField, StoreError};

/// 校验必填文本字段，返回去除首尾空白后的值
///
/// # 参数
/// - `field`: 字段，用于错误提示
/// - `value`: 用户输入
///
/// # 返回
/// - `Ok(String)`: 去除空白后的值
/// - `Err(StoreError::Validation)`: 字段为空
pub fn require_text(field: PetField, value: &str) -> Result<String, StoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(StoreError::Validation { field });
    }
    Ok(trimmed.to_string())
}

/// 规整可选文本：去除空白，空串视为缺省
pub fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// 只保留数字字符（年龄输入框）
pub fn digits_only(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// 解析年龄输入，空输入为缺省
pub fn parse_age(input: &str) -> Result<Option<u64>, StoreError> {
    let digits = digits_only(input);
    if digits.is_empty() {
        return Ok(None);
    }
    digits
        .parse::<u64>()
        .map(Some)
        .map_err(|_| StoreError::Validation {
            field: PetField::Age,
        })
}
