//! Наложение загруженной с сервера сущности на инициализированную запись
//! формы (режим редактирования).

use anyhow::{bail, Result};
use serde_json::{Map, Number, Value};

use super::payload::LICENSE_VALUE_PREFIX;
use super::record::{FieldValue, FormRecord, Row};
use crate::schema::{FieldDescriptor, FieldKind, SelectChoice};

/// Число из JSON в строку для контрола: целые без дробной части
pub fn number_to_input(number: &Number) -> String {
    if let Some(int) = number.as_i64() {
        return int.to_string();
    }
    number
        .as_f64()
        .map(|f| format!("{}", f))
        .unwrap_or_default()
}

fn scalar_to_input(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(number_to_input(n)),
        _ => None,
    }
}

/// Обратное отображение серверного кода лицензии на значение каталога:
/// точное совпадение, иначе совпадение по значению без каталожного
/// префикса, иначе пустой селектор (строка при этом сохраняется и
/// остаётся редактируемой).
pub fn remap_license_value(server: &str, catalog: &[SelectChoice]) -> String {
    for entry in catalog {
        if entry.value == server {
            return entry.value.to_string();
        }
    }
    for entry in catalog {
        if entry.value.strip_prefix(LICENSE_VALUE_PREFIX) == Some(server) {
            return entry.value.to_string();
        }
    }
    String::new()
}

fn expect_array<'a>(field: &str, value: &'a Value) -> Result<&'a Vec<Value>> {
    match value {
        Value::Array(items) => Ok(items),
        other => bail!("поле {field}: ожидался массив, получено {other}"),
    }
}

fn table_rows_from(
    field: &str,
    value: &Value,
    fields: &'static [FieldDescriptor],
) -> Result<Vec<Row>> {
    let mut rows = Vec::new();
    for item in expect_array(field, value)? {
        let Value::Object(object) = item else {
            bail!("поле {field}: элемент списка не является объектом");
        };
        let mut row = Row::empty(&FieldKind::Vms { fields });
        for sub in fields {
            if let Some(raw) = object.get(sub.name).and_then(scalar_to_input) {
                row.set(sub.name, raw);
            }
        }
        rows.push(row);
    }
    Ok(rows)
}

fn license_rows_from(
    field: &str,
    value: &Value,
    kind: &FieldKind,
    selector_name: &str,
    catalog: &[SelectChoice],
) -> Result<Vec<Row>> {
    let mut rows = Vec::new();
    for item in expect_array(field, value)? {
        let Value::Object(object) = item else {
            bail!("поле {field}: элемент списка не является объектом");
        };
        let mut row = Row::empty(kind);
        if let Some(server) = object.get(selector_name).and_then(Value::as_str) {
            row.set(selector_name, remap_license_value(server, catalog));
        }
        if let Some(raw) = object.get("quantity").and_then(scalar_to_input) {
            row.set("quantity", raw);
        }
        rows.push(row);
    }
    Ok(rows)
}

fn connection_rows_from(field: &str, value: &Value, kind: &FieldKind) -> Result<Vec<Row>> {
    let mut rows = Vec::new();
    for item in expect_array(field, value)? {
        let Value::Object(object) = item else {
            bail!("поле {field}: элемент списка не является объектом");
        };
        let mut row = Row::empty(kind);
        if let Some(raw) = object.get("bandwidth").and_then(scalar_to_input) {
            row.set("bandwidth", raw);
        }
        rows.push(row);
    }
    Ok(rows)
}

/// Наложить значения сущности на запись. Скаляры неожиданной формы
/// пропускаются (поле остаётся пустым), табличное поле неожиданной
/// формы — ошибка загрузки.
pub fn overlay_entity(
    record: &mut FormRecord,
    schema: &[FieldDescriptor],
    entity: &Map<String, Value>,
) -> Result<()> {
    for descriptor in schema {
        let Some(value) = entity.get(descriptor.name) else {
            continue;
        };
        if value.is_null() {
            continue;
        }
        match descriptor.kind {
            FieldKind::Checkbox => {
                if let Value::Bool(flag) = value {
                    record.set(descriptor.name, FieldValue::Flag(*flag));
                }
            }
            FieldKind::Number { .. }
            | FieldKind::Text
            | FieldKind::Textarea
            | FieldKind::Select { .. } => {
                if let Some(raw) = scalar_to_input(value) {
                    record.set(descriptor.name, FieldValue::Text(raw));
                }
            }
            FieldKind::Vms { fields } | FieldKind::Racks { fields } => {
                let rows = table_rows_from(descriptor.name, value, fields)?;
                record.set(descriptor.name, FieldValue::Rows(rows));
            }
            FieldKind::Licenses { catalog } => {
                let rows = license_rows_from(
                    descriptor.name,
                    value,
                    &descriptor.kind,
                    "license_type",
                    catalog,
                )?;
                record.set(descriptor.name, FieldValue::Rows(rows));
            }
            FieldKind::LicensesOffice { catalog } => {
                let rows = license_rows_from(
                    descriptor.name,
                    value,
                    &descriptor.kind,
                    "product_id",
                    catalog,
                )?;
                record.set(descriptor.name, FieldValue::Rows(rows));
            }
            FieldKind::Connections { .. } => {
                let rows = connection_rows_from(descriptor.name, value, &descriptor.kind)?;
                record.set(descriptor.name, FieldValue::Rows(rows));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::Solution;
    use crate::schema::registry::{solution_schema, VEEAM_LICENSES};
    use serde_json::json;

    fn as_map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_remap_by_stripped_suffix() {
        assert_eq!(
            remap_license_value("enterprise", VEEAM_LICENSES),
            "baas_license_enterprise"
        );
    }

    #[test]
    fn test_remap_exact_match_wins() {
        assert_eq!(
            remap_license_value("baas_license_standard", VEEAM_LICENSES),
            "baas_license_standard"
        );
    }

    #[test]
    fn test_remap_unknown_code_gives_empty_selector() {
        assert_eq!(remap_license_value("platinum", VEEAM_LICENSES), "");
    }

    #[test]
    fn test_overlay_baas_entity() {
        let schema = solution_schema(Solution::Baas);
        let mut record = FormRecord::initialize(schema);
        let entity = as_map(json!({
            "licenses": [
                { "license_type": "enterprise", "quantity": 10 },
                { "license_type": "platinum", "quantity": 2 }
            ],
            "storage_tb": 4,
            "protected_agents": 25
        }));

        overlay_entity(&mut record, schema, &entity).unwrap();

        let rows = record.rows("licenses");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("license_type"), "baas_license_enterprise");
        assert_eq!(rows[0].get("quantity"), "10");
        // Несопоставленный код сохраняется строкой с пустым селектором
        assert_eq!(rows[1].get("license_type"), "");
        assert_eq!(rows[1].get("quantity"), "2");
        assert_eq!(record.text("storage_tb"), "4");
        assert_eq!(record.text("protected_agents"), "25");
    }

    #[test]
    fn test_overlay_vmware_entity() {
        let schema = solution_schema(Solution::Vmware);
        let mut record = FormRecord::initialize(schema);
        let entity = as_map(json!({
            "vms": [ { "name": "app-01", "vcpu": 4, "ram_gb": 8, "storage_gb": 100.5 } ],
            "backup": true,
            "storage_tier": "ssd",
            "internet_mbps": 500
        }));

        overlay_entity(&mut record, schema, &entity).unwrap();

        let rows = record.rows("vms");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("name"), "app-01");
        assert_eq!(rows[0].get("vcpu"), "4");
        assert_eq!(rows[0].get("storage_gb"), "100.5");
        assert!(record.flag("backup"));
        assert_eq!(record.text("storage_tier"), "ssd");
        assert_eq!(record.text("internet_mbps"), "500");
    }

    #[test]
    fn test_overlay_rejects_malformed_table() {
        let schema = solution_schema(Solution::Vmware);
        let mut record = FormRecord::initialize(schema);
        let entity = as_map(json!({ "vms": "не массив" }));
        assert!(overlay_entity(&mut record, schema, &entity).is_err());
    }
}
