//! 展示格式化工具

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, Utc};

/// 可选字段缺省时的占位符
pub const PLACEHOLDER: &str = "—";

/// 按本地时区格式化创建时间
///
/// 格式串无效时退回 RFC 3339
pub fn format_created_at(created_at: &DateTime<Utc>, date_format: &str) -> String {
    let local = created_at.with_timezone(&Local);

    let items: Vec<Item<'_>> = StrftimeItems::new(date_format).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return local.to_rfc3339();
    }

    let mut out = String::new();
    if write!(out, "{}", local.format_with_items(items.into_iter())).is_err() {
        return local.to_rfc3339();
    }
    out
}

/// 可选值的展示文本
pub fn display_or_placeholder<T: ToString>(value: Option<&T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// 列表项副标题：种类，有年龄时追加 " • N yr"
pub fn pet_subtitle(kind: &str, age: Option<u64>) -> String {
    match age {
        Some(age) if age > 0 => format!("{} • {} yr", kind, age),
        _ => kind.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pet_subtitle() {
        assert_eq!(pet_subtitle("Dog", Some(3)), "Dog • 3 yr");
        assert_eq!(pet_subtitle("Cat", None), "Cat");
        assert_eq!(pet_subtitle("Cat", Some(0)), "Cat");
    }

    #[test]
    fn test_display_or_placeholder() {
        assert_eq!(display_or_placeholder(Some(&3u64)), "3");
        assert_eq!(display_or_placeholder::<String>(None), "—");
    }

    #[test]
    fn test_format_created_at() {
        let ts: DateTime<Utc> = "2024-05-01T10:00:00.000Z".parse().unwrap();
        let expected = ts.with_timezone(&Local).format("%Y-%m-%d").to_string();
        assert_eq!(format_created_at(&ts, "%Y-%m-%d"), expected);
    }

    #[test]
    fn test_invalid_format_falls_back() {
        let ts: DateTime<Utc> = "2024-05-01T10:00:00.000Z".parse().unwrap();
        let formatted = format_created_at(&ts, "%Q%");
        assert_eq!(formatted, ts.with_timezone(&Local).to_rfc3339());
    }
}
