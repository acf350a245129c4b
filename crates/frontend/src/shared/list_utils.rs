/// Утилиты сортировки списков для табличных экранов
use std::cmp::Ordering;

/// Trait для типов данных, поддерживающих сортировку
pub trait Sortable {
    /// Сравнивает два объекта по указанному полю
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Сортировка списка по полю с учётом направления
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let ordering = a.compare_by_field(b, field);
        if ascending {
            ordering
        } else {
            ordering.reverse()
        }
    });
}

/// Индикатор сортировки для заголовка колонки
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field != field {
        return "";
    }
    if ascending {
        " ▲"
    } else {
        " ▼"
    }
}

/// CSS-класс индикатора сортировки
pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "sort-indicator sort-indicator--active"
    } else {
        "sort-indicator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item(&'static str, i64);

    impl Sortable for Item {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => self.0.cmp(other.0),
                "amount" => self.1.cmp(&other.1),
                _ => Ordering::Equal,
            }
        }
    }

    #[test]
    fn test_sort_list_both_directions() {
        let mut items = vec![Item("b", 2), Item("a", 3), Item("c", 1)];
        sort_list(&mut items, "name", true);
        assert_eq!(items.iter().map(|i| i.0).collect::<Vec<_>>(), ["a", "b", "c"]);
        sort_list(&mut items, "amount", false);
        assert_eq!(items.iter().map(|i| i.1).collect::<Vec<_>>(), [3, 2, 1]);
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("name", "name", true), " ▲");
        assert_eq!(get_sort_indicator("name", "name", false), " ▼");
        assert_eq!(get_sort_indicator("name", "amount", true), "");
    }
}
