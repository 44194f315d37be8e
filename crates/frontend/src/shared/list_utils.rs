/// Универсальные утилиты для работы со списками (поиск, сортировка, постраничная нарезка)
use contracts::shared::{FetchedPage, FieldValue, ListQuery, Record, SortDirection};
use std::cmp::Ordering;

/// Активный поисковый фильтр и поля, по которым он применяется
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchSpec {
    pub term: String,
    pub keys: Vec<String>,
}

impl SearchSpec {
    pub fn new(keys: Vec<String>) -> Self {
        Self {
            term: String::new(),
            keys,
        }
    }

    /// Нормализованная строка поиска; `None` означает «без фильтрации»
    pub fn needle(&self) -> Option<String> {
        let trimmed = self.term.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        }
    }
}

/// Активная сортировка: поле и направление, либо исходный порядок
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortSpec {
    pub key: Option<String>,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn by(key: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            key: Some(key.into()),
            direction,
        }
    }

    /// Клик по заголовку: то же поле меняет направление, новое поле сортируется по возрастанию
    pub fn toggled(&self, field: &str) -> Self {
        if self.key.as_deref() == Some(field) {
            let direction = match self.direction {
                SortDirection::Asc => SortDirection::Desc,
                SortDirection::Desc => SortDirection::Asc,
            };
            Self::by(field, direction)
        } else {
            Self::by(field, SortDirection::Asc)
        }
    }
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(sort: &SortSpec, field: &str) -> &'static str {
    if sort.key.as_deref() == Some(field) {
        if sort.direction.is_ascending() {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// Проверяет, содержит ли хотя бы одно из полей строку поиска.
/// `needle` уже обрезан и приведён к нижнему регистру.
pub fn matches_needle<R: Record>(item: &R, keys: &[String], needle: &str) -> bool {
    keys.iter().any(|key| {
        item.field(key)
            .search_text()
            .to_lowercase()
            .contains(needle)
    })
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Ключ сортировки: числа (и признаки) всегда идут перед текстом,
/// поэтому порядок полный даже для колонок со смешанными типами
enum SortKey<'a> {
    Number(f64),
    Text(&'a str),
}

// Отсутствующее значение и пустая строка равны нулю
fn sort_key(value: &FieldValue) -> SortKey<'_> {
    match value {
        FieldValue::Number(n) => SortKey::Number(*n),
        FieldValue::Flag(f) => SortKey::Number(if *f { 1.0 } else { 0.0 }),
        FieldValue::Text(s) if !s.is_empty() => SortKey::Text(s),
        FieldValue::Text(_) | FieldValue::Missing => SortKey::Number(0.0),
    }
}

/// Сравнивает значения полей. Отсутствующее значение считается нулём
/// типа второй стороны: 0 для чисел, "" для строк.
pub fn compare_field_values(a: &FieldValue, b: &FieldValue) -> Ordering {
    match (sort_key(a), sort_key(b)) {
        (SortKey::Number(x), SortKey::Number(y)) => x.total_cmp(&y),
        (SortKey::Number(_), SortKey::Text(_)) => Ordering::Less,
        (SortKey::Text(_), SortKey::Number(_)) => Ordering::Greater,
        (SortKey::Text(x), SortKey::Text(y)) => compare_text(x, y),
    }
}

/// Сравнивает две записи по указанному полю с учётом направления
pub fn compare_by_field<R: Record>(a: &R, b: &R, field: &str, direction: SortDirection) -> Ordering {
    let cmp = compare_field_values(&a.field(field), &b.field(field));
    if direction.is_ascending() {
        cmp
    } else {
        cmp.reverse()
    }
}

/// Индексы записей, прошедших фильтр, в исходном порядке
pub fn filter_indices<R: Record>(items: &[R], search: &SearchSpec) -> Vec<usize> {
    match search.needle() {
        None => (0..items.len()).collect(),
        Some(needle) => items
            .iter()
            .enumerate()
            .filter(|(_, item)| matches_needle(*item, &search.keys, &needle))
            .map(|(i, _)| i)
            .collect(),
    }
}

/// Устойчиво сортирует индексы по `sort`; равные записи сохраняют порядок
pub fn sort_indices<R: Record>(items: &[R], indices: &mut [usize], sort: &SortSpec) {
    let Some(field) = sort.key.as_deref() else {
        return;
    };
    indices.sort_by(|&a, &b| compare_by_field(&items[a], &items[b], field, sort.direction));
}

/// Фильтрует список по поисковому запросу
pub fn filter_list<'a, R: Record>(items: &'a [R], search: &SearchSpec) -> Vec<&'a R> {
    filter_indices(items, search)
        .into_iter()
        .map(|i| &items[i])
        .collect()
}

/// Сортирует список по указанному полю
pub fn sort_list<R: Record>(items: &mut [R], sort: &SortSpec) {
    if let Some(field) = sort.key.as_deref() {
        items.sort_by(|a, b| compare_by_field(a, b, field, sort.direction));
    }
}

/// Фильтр, сортировка и нарезка страницы над полной коллекцией.
/// Используется источниками, которые получают от API весь массив сразу.
pub fn shape_page<R: Record>(items: Vec<R>, keys: &[String], query: &ListQuery) -> FetchedPage<R> {
    let search = SearchSpec {
        term: query.search_term.clone(),
        keys: keys.to_vec(),
    };
    let sort = SortSpec {
        key: query.sort_key.clone(),
        direction: query.sort_dir,
    };

    let mut order = filter_indices(&items, &search);
    sort_indices(&items, &mut order, &sort);
    let total_count = order.len();

    let mut slots: Vec<Option<R>> = items.into_iter().map(Some).collect();
    let page_items = order
        .into_iter()
        .skip(query.offset())
        .take(query.page_size)
        .filter_map(|i| slots[i].take())
        .collect();

    FetchedPage::new(page_items, total_count)
}

#[cfg(test)]
pub(crate) mod test_support {
    use contracts::shared::{FieldValue, Record};

    /// Простая запись для тестов списков
    #[derive(Debug, Clone, PartialEq)]
    pub struct Row {
        pub id: i64,
        pub name: String,
        pub city: Option<String>,
        pub qty: Option<i64>,
    }

    pub fn row(id: i64, name: &str) -> Row {
        Row {
            id,
            name: name.to_string(),
            city: None,
            qty: None,
        }
    }

    impl Record for Row {
        fn record_id(&self) -> i64 {
            self.id
        }

        fn field(&self, key: &str) -> FieldValue {
            match key {
                "id" => FieldValue::number(self.id as f64),
                "name" => FieldValue::text(&self.name),
                "city" => FieldValue::opt_text(self.city.as_deref()),
                "qty" => FieldValue::opt_number(self.qty),
                _ => FieldValue::Missing,
            }
        }
    }

    pub fn names<'a>(rows: impl IntoIterator<Item = &'a Row>) -> Vec<&'a str> {
        rows.into_iter().map(|r| r.name.as_str()).collect()
    }
}
