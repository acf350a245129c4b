//! Реестр справочников ценообразования.
//!
//! Каждая сущность описана декларативно: slug для REST-пути,
//! названия для вкладки и модального окна, список скалярных полей.
//! Универсальный CRUD-экран строит по этому описанию и таблицу,
//! и форму редактирования.

use crate::schema::{FieldDescriptor, SelectChoice};

const CURRENCIES: &[SelectChoice] = &[
    SelectChoice::new("RUB", "₽ Рубль"),
    SelectChoice::new("USD", "$ Доллар США"),
    SelectChoice::new("EUR", "€ Евро"),
    SelectChoice::new("CNY", "¥ Юань"),
];

const PRICE_UNITS: &[SelectChoice] = &[
    SelectChoice::new("month", "в месяц"),
    SelectChoice::new("unit", "за единицу"),
    SelectChoice::new("gb_month", "за ГБ в месяц"),
];

/// Описание одной справочной сущности ценообразования
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceEntity {
    /// Сегмент REST-пути: `pricing/{slug}/`
    pub slug: &'static str,
    /// Название вкладки
    pub list_name: &'static str,
    /// Название элемента в заголовке модального окна
    pub element_name: &'static str,
    /// Скалярные поля таблицы и формы
    pub fields: &'static [FieldDescriptor],
}

pub const REFERENCE_ENTITIES: &[ReferenceEntity] = &[
    ReferenceEntity {
        slug: "prices",
        list_name: "Ценовые позиции",
        element_name: "Ценовая позиция",
        fields: &[
            FieldDescriptor::text("name", "Наименование"),
            FieldDescriptor::text("category", "Категория"),
            FieldDescriptor::number("price", "Цена"),
            FieldDescriptor::select("currency", "Валюта", CURRENCIES),
            FieldDescriptor::select("unit", "Единица", PRICE_UNITS),
        ],
    },
    ReferenceEntity {
        slug: "categories",
        list_name: "Категории",
        element_name: "Категория",
        fields: &[
            FieldDescriptor::text("name", "Наименование"),
            FieldDescriptor::number("sort_order", "Порядок"),
        ],
    },
    ReferenceEntity {
        slug: "exchange-rates",
        list_name: "Курсы валют",
        element_name: "Курс валюты",
        fields: &[
            FieldDescriptor::select("currency", "Валюта", CURRENCIES),
            FieldDescriptor::number("rate", "Курс к рублю"),
        ],
    },
    ReferenceEntity {
        slug: "veeam-licenses",
        list_name: "Лицензии Veeam",
        element_name: "Лицензия Veeam",
        fields: &[
            FieldDescriptor::text("license_type", "Код лицензии"),
            FieldDescriptor::text("name", "Наименование"),
            FieldDescriptor::number("price", "Цена"),
        ],
    },
    ReferenceEntity {
        slug: "office365-products",
        list_name: "Продукты Office 365",
        element_name: "Продукт Office 365",
        fields: &[
            FieldDescriptor::text("product_id", "Код продукта"),
            FieldDescriptor::text("name", "Наименование"),
            FieldDescriptor::number("price", "Цена"),
        ],
    },
    ReferenceEntity {
        slug: "bandwidth-prices",
        list_name: "Тарифы каналов",
        element_name: "Тариф канала",
        fields: &[
            FieldDescriptor::number_in("bandwidth", "Полоса", 1.0, 10000.0, "Мбит/с"),
            FieldDescriptor::number("monthly_price", "Цена в месяц"),
        ],
    },
];

/// Найти описание по slug
pub fn reference_entity(slug: &str) -> Option<&'static ReferenceEntity> {
    REFERENCE_ENTITIES.iter().find(|e| e.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_slugs_unique() {
        let mut seen = HashSet::new();
        for entity in REFERENCE_ENTITIES {
            assert!(seen.insert(entity.slug), "duplicate slug: {}", entity.slug);
        }
    }

    #[test]
    fn test_reference_fields_are_scalar() {
        // Справочные формы строятся только из скалярных контролов
        for entity in REFERENCE_ENTITIES {
            for field in entity.fields {
                assert!(
                    !field.kind.is_composite(),
                    "composite field {} in {}",
                    field.name,
                    entity.slug
                );
            }
        }
    }

    #[test]
    fn test_lookup_by_slug() {
        assert_eq!(reference_entity("prices").unwrap().slug, "prices");
        assert!(reference_entity("unknown").is_none());
    }
}
