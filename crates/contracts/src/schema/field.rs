//! Декларативное описание полей формы предложения.
//!
//! Все структуры — compile-time константы со 'static ссылками,
//! схема решения собирается из них в `registry`.

/// Один вариант выбора: хранимое значение + отображаемая подпись
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectChoice {
    pub value: &'static str,
    pub label: &'static str,
}

impl SelectChoice {
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }
}

/// Тип поля с параметрами, специфичными для типа.
///
/// По одному варианту на тип — диспетчеризация рендера и коэрции
/// получает проверку полноты от компилятора.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// Числовой ввод; в записи формы хранится сырая строка
    Number {
        step: f64,
        min: Option<f64>,
        max: Option<f64>,
        unit: Option<&'static str>,
    },
    Text,
    Textarea,
    Checkbox,
    Select {
        choices: &'static [SelectChoice],
    },
    /// Список виртуальных машин; вложенные поля одного уровня
    Vms {
        fields: &'static [FieldDescriptor],
    },
    /// Список стоек, та же табличная форма что и у ВМ
    Racks {
        fields: &'static [FieldDescriptor],
    },
    /// Лицензии Veeam: строки {license_type, quantity}
    Licenses {
        catalog: &'static [SelectChoice],
    },
    /// Продукты Office 365: строки {product_id, quantity}
    LicensesOffice {
        catalog: &'static [SelectChoice],
    },
    /// Подключения {bandwidth}, не более max_connections строк
    Connections {
        max_connections: usize,
        bandwidth_options: &'static [u32],
    },
}

impl FieldKind {
    /// Значение поля — список структурированных строк, а не скаляр
    pub fn is_composite(&self) -> bool {
        matches!(
            self,
            FieldKind::Vms { .. }
                | FieldKind::Racks { .. }
                | FieldKind::Licenses { .. }
                | FieldKind::LicensesOffice { .. }
                | FieldKind::Connections { .. }
        )
    }

    /// Имена вложенных полей, из которых фабрика собирает пустую строку
    pub fn row_field_names(&self) -> Vec<&'static str> {
        match self {
            FieldKind::Vms { fields } | FieldKind::Racks { fields } => {
                fields.iter().map(|f| f.name).collect()
            }
            FieldKind::Licenses { .. } => vec!["license_type", "quantity"],
            FieldKind::LicensesOffice { .. } => vec!["product_id", "quantity"],
            FieldKind::Connections { .. } => vec!["bandwidth"],
            _ => Vec::new(),
        }
    }

    /// Имя поля-селектора для лицензионных типов
    pub fn selector_name(&self) -> Option<&'static str> {
        match self {
            FieldKind::Licenses { .. } => Some("license_type"),
            FieldKind::LicensesOffice { .. } => Some("product_id"),
            _ => None,
        }
    }

    /// Верхняя граница числа строк (только для подключений)
    pub fn max_rows(&self) -> Option<usize> {
        match self {
            FieldKind::Connections {
                max_connections, ..
            } => Some(*max_connections),
            _ => None,
        }
    }

    /// Редактор обязан показывать минимум одну строку и запрещать
    /// удаление последней (ВМ и оба лицензионных типа)
    pub fn keeps_last_row(&self) -> bool {
        matches!(
            self,
            FieldKind::Vms { .. } | FieldKind::Licenses { .. } | FieldKind::LicensesOffice { .. }
        )
    }
}

/// Описание одного настраиваемого поля формы
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldDescriptor {
    /// Уникальный ключ внутри схемы
    pub name: &'static str,
    /// Отображаемая подпись
    pub label: &'static str,
    pub kind: FieldKind,
}

impl FieldDescriptor {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { name, label, kind }
    }

    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    pub const fn textarea(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Textarea)
    }

    pub const fn checkbox(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Checkbox)
    }

    pub const fn number(name: &'static str, label: &'static str) -> Self {
        Self::new(
            name,
            label,
            FieldKind::Number {
                step: 1.0,
                min: None,
                max: None,
                unit: None,
            },
        )
    }

    pub const fn number_in(
        name: &'static str,
        label: &'static str,
        min: f64,
        max: f64,
        unit: &'static str,
    ) -> Self {
        Self::new(
            name,
            label,
            FieldKind::Number {
                step: 1.0,
                min: Some(min),
                max: Some(max),
                unit: Some(unit),
            },
        )
    }

    pub const fn select(
        name: &'static str,
        label: &'static str,
        choices: &'static [SelectChoice],
    ) -> Self {
        Self::new(name, label, FieldKind::Select { choices })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VM_FIELDS: &[FieldDescriptor] = &[
        FieldDescriptor::text("name", "Имя"),
        FieldDescriptor::number("vcpu", "vCPU"),
    ];

    #[test]
    fn test_row_field_names() {
        let vms = FieldKind::Vms { fields: VM_FIELDS };
        assert_eq!(vms.row_field_names(), vec!["name", "vcpu"]);

        let licenses = FieldKind::Licenses { catalog: &[] };
        assert_eq!(licenses.row_field_names(), vec!["license_type", "quantity"]);
        assert_eq!(licenses.selector_name(), Some("license_type"));

        let office = FieldKind::LicensesOffice { catalog: &[] };
        assert_eq!(office.selector_name(), Some("product_id"));
    }

    #[test]
    fn test_composite_flags() {
        assert!(!FieldKind::Text.is_composite());
        assert!(FieldKind::Connections {
            max_connections: 4,
            bandwidth_options: &[10, 100],
        }
        .is_composite());
        assert_eq!(
            FieldKind::Connections {
                max_connections: 4,
                bandwidth_options: &[10, 100],
            }
            .max_rows(),
            Some(4)
        );
        assert!(FieldKind::Vms { fields: VM_FIELDS }.keeps_last_row());
        assert!(!FieldKind::Racks { fields: VM_FIELDS }.keeps_last_row());
    }
}
