//! Общий интерфейс записей, отображаемых в списках
//!
//! Любая строка списка (лекарство, склад, аптека, представитель) отдаёт
//! значения своих полей по строковому ключу. Ключи совпадают с именами полей
//! в JSON API (camelCase).

use std::borrow::Cow;

/// Значение поля записи
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    /// Логический признак: сортируется как 0/1, в поиске не участвует
    Flag(bool),
    /// Поле отсутствует или не заполнено
    Missing,
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// `None` превращается в `Missing`
    pub fn opt_text(value: Option<&str>) -> Self {
        match value {
            Some(v) => FieldValue::Text(v.to_string()),
            None => FieldValue::Missing,
        }
    }

    pub fn number(value: impl Into<f64>) -> Self {
        FieldValue::Number(value.into())
    }

    pub fn opt_number(value: Option<i64>) -> Self {
        match value {
            Some(v) => FieldValue::Number(v as f64),
            None => FieldValue::Missing,
        }
    }

    /// Текст, по которому выполняется поиск подстроки.
    /// Для отсутствующих полей и флагов пустая строка.
    pub fn search_text(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Text(s) => Cow::Borrowed(s.as_str()),
            FieldValue::Number(n) => {
                if n.fract() == 0.0 && n.is_finite() {
                    Cow::Owned(format!("{}", *n as i64))
                } else {
                    Cow::Owned(n.to_string())
                }
            }
            FieldValue::Flag(_) | FieldValue::Missing => Cow::Borrowed(""),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, FieldValue::Missing)
    }
}

/// Запись списка с уникальным идентификатором и полями по ключу
pub trait Record {
    /// Идентификатор, уникальный в пределах загруженной коллекции
    fn record_id(&self) -> i64;

    /// Значение поля по ключу; неизвестный ключ даёт `FieldValue::Missing`
    fn field(&self, key: &str) -> FieldValue;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_text() {
        assert_eq!(FieldValue::text("Aspirin").search_text(), "Aspirin");
        assert_eq!(FieldValue::number(12).search_text(), "12");
        assert_eq!(FieldValue::number(12.5).search_text(), "12.5");
        assert_eq!(FieldValue::Flag(true).search_text(), "");
        assert_eq!(FieldValue::Missing.search_text(), "");
    }

    #[test]
    fn test_optional_constructors() {
        assert!(FieldValue::opt_text(None).is_missing());
        assert_eq!(FieldValue::opt_text(Some("x")), FieldValue::text("x"));
        assert!(FieldValue::opt_number(None).is_missing());
        assert_eq!(FieldValue::opt_number(Some(3)), FieldValue::Number(3.0));
    }
}
