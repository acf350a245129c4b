//! Запись формы: значения полей по имени + операции над табличными полями.

use std::collections::BTreeMap;

use uuid::Uuid;

use crate::enums::Solution;
use crate::schema::registry::solution_schema;
use crate::schema::{FieldDescriptor, FieldKind};

/// Одна строка табличного поля (ВМ, лицензия, подключение, стойка).
///
/// `key` — клиентский ключ для стабильного рендера списков,
/// в полезную нагрузку не попадает.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub key: Uuid,
    values: BTreeMap<String, String>,
}

impl Row {
    /// Пустая строка по списку вложенных полей дескриптора
    pub fn empty(kind: &FieldKind) -> Self {
        let values = kind
            .row_field_names()
            .into_iter()
            .map(|name| (name.to_string(), String::new()))
            .collect();
        Self {
            key: Uuid::new_v4(),
            values,
        }
    }

    pub fn get(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: &str, value: String) {
        self.values.insert(field.to_string(), value);
    }
}

/// Значение одного поля; форма значения определяется типом дескриптора
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// number/text/select/textarea — сырая строка из контрола
    Text(String),
    Flag(bool),
    Rows(Vec<Row>),
}

impl FieldValue {
    /// Пустое значение, корректное для типа поля
    pub fn empty_for(kind: &FieldKind) -> Self {
        match kind {
            FieldKind::Checkbox => FieldValue::Flag(false),
            k if k.is_composite() => FieldValue::Rows(Vec::new()),
            _ => FieldValue::Text(String::new()),
        }
    }

    /// Текст значения; для нетекстовых форм — пустая строка.
    /// Это же и запасной текстовый рендер для значения,
    /// форма которого не совпала с дескриптором.
    pub fn text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            _ => "",
        }
    }

    pub fn flag(&self) -> bool {
        matches!(self, FieldValue::Flag(true))
    }

    pub fn rows(&self) -> &[Row] {
        match self {
            FieldValue::Rows(rows) => rows,
            _ => &[],
        }
    }
}

// ============================================================================
// Операции над списками строк: каждая возвращает новый список,
// исходный не трогает (замена значения целиком, см. контракт редакторов)
// ============================================================================

/// Добавить пустую строку. `None` — достигнут лимит строк поля.
pub fn add_row(rows: &[Row], kind: &FieldKind) -> Option<Vec<Row>> {
    if let Some(max) = kind.max_rows() {
        if rows.len() >= max {
            return None;
        }
    }
    let mut next = rows.to_vec();
    next.push(Row::empty(kind));
    Some(next)
}

/// Удалить строку, сохранив относительный порядок остальных
pub fn remove_row(rows: &[Row], index: usize) -> Vec<Row> {
    let mut next = rows.to_vec();
    if index < next.len() {
        next.remove(index);
    }
    next
}

/// Заменить одно поле одной строки; остальные строки не меняются
pub fn update_row(rows: &[Row], index: usize, field: &str, value: String) -> Vec<Row> {
    let mut next = rows.to_vec();
    if let Some(row) = next.get_mut(index) {
        row.set(field, value);
    }
    next
}

// ============================================================================
// FormRecord
// ============================================================================

/// Значения полей формы по имени поля
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormRecord {
    values: BTreeMap<String, FieldValue>,
}

impl FormRecord {
    /// По одному пустому значению на каждый дескриптор схемы
    pub fn initialize(schema: &[FieldDescriptor]) -> Self {
        let values = schema
            .iter()
            .map(|d| (d.name.to_string(), FieldValue::empty_for(&d.kind)))
            .collect();
        Self { values }
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    pub fn text(&self, name: &str) -> &str {
        self.values.get(name).map(FieldValue::text).unwrap_or("")
    }

    pub fn flag(&self, name: &str) -> bool {
        self.values.get(name).map(FieldValue::flag).unwrap_or(false)
    }

    pub fn rows(&self, name: &str) -> &[Row] {
        self.values.get(name).map(FieldValue::rows).unwrap_or(&[])
    }

    /// Заменить значение поля целиком
    pub fn set(&mut self, name: &str, value: FieldValue) {
        self.values.insert(name.to_string(), value);
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

// ============================================================================
// Форма предложения: общие поля + решение + запись по схеме решения
// ============================================================================

/// Общие поля, не зависящие от решения
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommonFields {
    pub client_id: String,
    pub engineer_id: String,
    pub subject: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OfferForm {
    pub common: CommonFields,
    pub solution: Solution,
    pub fields: FormRecord,
}

impl OfferForm {
    /// Запись из общих полей seed + пустых значений схемы решения
    pub fn initialize(solution: Solution, seed: CommonFields) -> Self {
        Self {
            common: seed,
            solution,
            fields: FormRecord::initialize(solution_schema(solution)),
        }
    }

    /// Смена решения: специфичные поля сбрасываются на пустые значения
    /// новой схемы, общие поля сохраняются
    pub fn switch_solution(&mut self, solution: Solution) {
        self.solution = solution;
        self.fields = FormRecord::initialize(solution_schema(solution));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONNECTIONS: FieldKind = FieldKind::Connections {
        max_connections: 2,
        bandwidth_options: &[10, 100],
    };

    fn seed() -> CommonFields {
        CommonFields {
            client_id: "42".into(),
            engineer_id: "7".into(),
            subject: "Тестовое предложение".into(),
        }
    }

    #[test]
    fn test_initialize_defaults_for_every_solution() {
        for solution in Solution::all() {
            let form = OfferForm::initialize(solution, seed());
            assert_eq!(form.common, seed());
            let schema = solution_schema(solution);
            assert_eq!(form.fields.field_names().count(), schema.len());
            for descriptor in schema {
                let value = form.fields.get(descriptor.name).expect("field missing");
                match descriptor.kind {
                    FieldKind::Checkbox => assert_eq!(*value, FieldValue::Flag(false)),
                    ref k if k.is_composite() => assert_eq!(value.rows().len(), 0),
                    _ => assert_eq!(value.text(), ""),
                }
            }
        }
    }

    #[test]
    fn test_switch_solution_keeps_common_fields() {
        let mut form = OfferForm::initialize(Solution::Vmware, seed());
        form.fields
            .set("internet_mbps", FieldValue::Text("500".into()));
        assert!(form.fields.get("vms").is_some());

        form.switch_solution(Solution::Office365);

        assert_eq!(form.common, seed());
        assert_eq!(form.solution, Solution::Office365);
        // Специфичные для VMware поля исчезли, новые пустые
        assert!(form.fields.get("vms").is_none());
        assert!(form.fields.get("internet_mbps").is_none());
        assert_eq!(form.fields.rows("products").len(), 0);
        assert_eq!(form.fields.text("billing_term"), "");
    }

    #[test]
    fn test_add_then_remove_restores_list() {
        let kind = FieldKind::Licenses { catalog: &[] };
        let base = vec![{
            let mut row = Row::empty(&kind);
            row.set("license_type", "baas_license_standard".into());
            row.set("quantity", "3".into());
            row
        }];

        let grown = add_row(&base, &kind).expect("unbounded add");
        assert_eq!(grown.len(), 2);

        let restored = remove_row(&grown, grown.len() - 1);
        assert_eq!(restored, base);
    }

    #[test]
    fn test_update_touches_single_row() {
        let kind = FieldKind::Licenses { catalog: &[] };
        let rows: Vec<Row> = (0..3).map(|_| Row::empty(&kind)).collect();

        let updated = update_row(&rows, 1, "quantity", "5".into());

        assert_eq!(updated[0], rows[0]);
        assert_eq!(updated[2], rows[2]);
        assert_eq!(updated[1].get("quantity"), "5");
        assert_eq!(updated[1].get("license_type"), "");
        assert_eq!(updated[1].key, rows[1].key);
    }

    #[test]
    fn test_connections_add_is_bounded() {
        let mut rows = Vec::new();
        rows = add_row(&rows, &CONNECTIONS).unwrap();
        rows = add_row(&rows, &CONNECTIONS).unwrap();
        assert_eq!(rows.len(), 2);
        // Сверх лимита — no-op
        assert!(add_row(&rows, &CONNECTIONS).is_none());
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_remove_preserves_order() {
        let kind = FieldKind::Connections {
            max_connections: 4,
            bandwidth_options: &[10, 100],
        };
        let mut rows = Vec::new();
        for bandwidth in ["10", "100", "500"] {
            rows = add_row(&rows, &kind).unwrap();
            let last = rows.len() - 1;
            rows = update_row(&rows, last, "bandwidth", bandwidth.into());
        }

        let remaining = remove_row(&rows, 1);
        let bandwidths: Vec<&str> = remaining.iter().map(|r| r.get("bandwidth")).collect();
        assert_eq!(bandwidths, vec!["10", "500"]);
    }
}
