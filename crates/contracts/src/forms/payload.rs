//! Нормализация записи формы в полезную нагрузку API.
//!
//! Каждому типу поля — своя коэрция; запись формы при этом не меняется,
//! при ошибке сохранения пользователь продолжает с того же места.

use serde_json::{Map, Number, Value};

use super::record::{CommonFields, FormRecord, Row};
use crate::enums::Solution;
use crate::schema::{FieldDescriptor, FieldKind};

/// Префикс значений каталога лицензий. Сервер хранит код без префикса,
/// поэтому селектор обрезается перед отправкой. Назван по каталогу,
/// а не по решению: DRaaS использует тот же каталог.
pub const LICENSE_VALUE_PREFIX: &str = "baas_license_";

/// Срезать каталожный префикс перед отправкой на сервер
pub fn strip_license_prefix(selector: &str) -> &str {
    selector.strip_prefix(LICENSE_VALUE_PREFIX).unwrap_or(selector)
}

/// Числовая коэрция строки из контрола: пустая или нечисловая строка — 0.
/// Целые значения уходят целыми, дробные — как есть.
pub fn number_value(raw: &str) -> Number {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Number::from(0);
    }
    if let Ok(int) = trimmed.parse::<i64>() {
        return Number::from(int);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .unwrap_or_else(|| Number::from(0))
}

/// Число строго больше нуля, иначе None
fn positive_number(raw: &str) -> Option<Number> {
    let number = number_value(raw);
    if number.as_f64().unwrap_or(0.0) > 0.0 {
        Some(number)
    } else {
        None
    }
}

/// Строка таблицы пуста целиком: текстовые поля пустые,
/// числовые — нулевые
fn row_is_blank(row: &Row, fields: &[FieldDescriptor]) -> bool {
    fields.iter().all(|sub| {
        let raw = row.get(sub.name);
        match sub.kind {
            FieldKind::Number { .. } => number_value(raw).as_f64().unwrap_or(0.0) == 0.0,
            _ => raw.trim().is_empty(),
        }
    })
}

fn table_rows(rows: &[Row], fields: &[FieldDescriptor]) -> Value {
    let kept: Vec<Value> = rows
        .iter()
        .filter(|row| !row_is_blank(row, fields))
        .map(|row| {
            let mut object = Map::new();
            for sub in fields {
                let raw = row.get(sub.name);
                let value = match sub.kind {
                    FieldKind::Number { .. } => Value::Number(number_value(raw)),
                    _ => Value::String(raw.to_string()),
                };
                object.insert(sub.name.to_string(), value);
            }
            Value::Object(object)
        })
        .collect();
    Value::Array(kept)
}

fn license_rows(rows: &[Row], selector_name: &str) -> Value {
    let kept: Vec<Value> = rows
        .iter()
        .filter_map(|row| {
            let selector = row.get(selector_name);
            if selector.is_empty() {
                return None;
            }
            let quantity = positive_number(row.get("quantity"))?;
            let mut object = Map::new();
            object.insert(
                selector_name.to_string(),
                Value::String(strip_license_prefix(selector).to_string()),
            );
            object.insert("quantity".to_string(), Value::Number(quantity));
            Some(Value::Object(object))
        })
        .collect();
    Value::Array(kept)
}

fn connection_rows(rows: &[Row]) -> Value {
    let kept: Vec<Value> = rows
        .iter()
        .filter_map(|row| {
            let bandwidth = positive_number(row.get("bandwidth"))?;
            let mut object = Map::new();
            object.insert("bandwidth".to_string(), Value::Number(bandwidth));
            Some(Value::Object(object))
        })
        .collect();
    Value::Array(kept)
}

/// Пройти схему и собрать нормализованные значения полей
pub fn build_payload(record: &FormRecord, schema: &[FieldDescriptor]) -> Map<String, Value> {
    let mut payload = Map::new();
    for descriptor in schema {
        let value = match descriptor.kind {
            FieldKind::Number { .. } => {
                Value::Number(number_value(record.text(descriptor.name)))
            }
            FieldKind::Checkbox => Value::Bool(record.flag(descriptor.name)),
            FieldKind::Text | FieldKind::Textarea | FieldKind::Select { .. } => {
                Value::String(record.text(descriptor.name).to_string())
            }
            FieldKind::Vms { fields } | FieldKind::Racks { fields } => {
                table_rows(record.rows(descriptor.name), fields)
            }
            FieldKind::Licenses { .. } => {
                license_rows(record.rows(descriptor.name), "license_type")
            }
            FieldKind::LicensesOffice { .. } => {
                license_rows(record.rows(descriptor.name), "product_id")
            }
            FieldKind::Connections { .. } => connection_rows(record.rows(descriptor.name)),
        };
        payload.insert(descriptor.name.to_string(), value);
    }
    payload
}

/// Общие поля коэрцируются и добавляются явно, мимо обхода схемы
fn insert_common(payload: &mut Map<String, Value>, common: &CommonFields) {
    payload.insert(
        "client_id".to_string(),
        Value::Number(number_value(&common.client_id)),
    );
    payload.insert(
        "engineer_id".to_string(),
        Value::Number(number_value(&common.engineer_id)),
    );
    payload.insert(
        "subject".to_string(),
        Value::String(common.subject.clone()),
    );
}

/// Полезная нагрузка облачного предложения
pub fn offer_payload(
    common: &CommonFields,
    solution: Solution,
    record: &FormRecord,
    schema: &[FieldDescriptor],
) -> Value {
    let mut payload = build_payload(record, schema);
    insert_common(&mut payload, common);
    payload.insert(
        "solution".to_string(),
        Value::String(solution.code().to_string()),
    );
    Value::Object(payload)
}

/// Полезная нагрузка SOC-подписки: те же общие поля, без решения
pub fn soc_payload(
    common: &CommonFields,
    record: &FormRecord,
    schema: &[FieldDescriptor],
) -> Value {
    let mut payload = build_payload(record, schema);
    insert_common(&mut payload, common);
    Value::Object(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::record::{add_row, update_row, FieldValue, OfferForm};
    use crate::schema::registry::solution_schema;
    use serde_json::json;

    fn common() -> CommonFields {
        CommonFields {
            client_id: "42".into(),
            engineer_id: "7".into(),
            subject: "Облако для 1С".into(),
        }
    }

    #[test]
    fn test_number_value() {
        assert_eq!(number_value(""), Number::from(0));
        assert_eq!(number_value("  "), Number::from(0));
        assert_eq!(number_value("12"), Number::from(12));
        assert_eq!(number_value("-5"), Number::from(-5));
        assert_eq!(number_value("2.5"), Number::from_f64(2.5).unwrap());
        assert_eq!(number_value("мусор"), Number::from(0));
    }

    #[test]
    fn test_untouched_number_field_becomes_zero() {
        let form = OfferForm::initialize(Solution::Staas, common());
        let payload = build_payload(&form.fields, solution_schema(Solution::Staas));
        assert_eq!(payload["storage_tb"], json!(0));
        assert_eq!(payload["iops_limit"], json!(0));
        assert_eq!(payload["replication"], json!(false));
        assert_eq!(payload["storage_tier"], json!(""));
    }

    #[test]
    fn test_connections_drop_non_positive_bandwidth() {
        let mut form = OfferForm::initialize(Solution::Connectivity, common());
        let kind = FieldKind::Connections {
            max_connections: 4,
            bandwidth_options: &[10, 100],
        };
        let mut rows = Vec::new();
        for bandwidth in ["10", "", "-5"] {
            rows = add_row(&rows, &kind).unwrap();
            let last = rows.len() - 1;
            rows = update_row(&rows, last, "bandwidth", bandwidth.into());
        }
        form.fields.set("connections", FieldValue::Rows(rows));

        let payload = build_payload(&form.fields, solution_schema(Solution::Connectivity));
        assert_eq!(payload["connections"], json!([{ "bandwidth": 10 }]));
    }

    #[test]
    fn test_vmware_offer_scenario() {
        let mut form = OfferForm::initialize(Solution::Vmware, common());
        let vms_kind = solution_schema(Solution::Vmware)[0].kind;

        let mut rows = add_row(&[], &vms_kind).unwrap();
        rows = update_row(&rows, 0, "vcpu", "4".into());
        rows = update_row(&rows, 0, "ram_gb", "8".into());
        // Вторая, полностью пустая строка в нагрузку не попадает
        rows = add_row(&rows, &vms_kind).unwrap();
        form.fields.set("vms", FieldValue::Rows(rows));

        let payload = offer_payload(
            &form.common,
            form.solution,
            &form.fields,
            solution_schema(Solution::Vmware),
        );

        assert_eq!(
            payload["vms"],
            json!([{ "name": "", "vcpu": 4, "ram_gb": 8, "storage_gb": 0 }])
        );
        assert_eq!(payload["client_id"], json!(42));
        assert_eq!(payload["engineer_id"], json!(7));
        assert_eq!(payload["subject"], json!("Облако для 1С"));
        assert_eq!(payload["solution"], json!("vmware"));
    }

    #[test]
    fn test_license_rows_strip_prefix_and_filter() {
        let kind = FieldKind::Licenses { catalog: &[] };
        let mut rows = Vec::new();
        // полноценная строка
        rows = add_row(&rows, &kind).unwrap();
        rows = update_row(&rows, 0, "license_type", "baas_license_enterprise".into());
        rows = update_row(&rows, 0, "quantity", "10".into());
        // без селектора
        rows = add_row(&rows, &kind).unwrap();
        rows = update_row(&rows, 1, "quantity", "4".into());
        // с нулевым количеством
        rows = add_row(&rows, &kind).unwrap();
        rows = update_row(&rows, 2, "license_type", "baas_license_standard".into());
        rows = update_row(&rows, 2, "quantity", "0".into());

        let value = license_rows(&rows, "license_type");
        assert_eq!(
            value,
            json!([{ "license_type": "enterprise", "quantity": 10 }])
        );
    }

    #[test]
    fn test_office_rows_keep_product_id_verbatim() {
        let kind = FieldKind::LicensesOffice { catalog: &[] };
        let mut rows = add_row(&[], &kind).unwrap();
        rows = update_row(&rows, 0, "product_id", "o365_e3".into());
        rows = update_row(&rows, 0, "quantity", "25".into());

        let value = license_rows(&rows, "product_id");
        assert_eq!(value, json!([{ "product_id": "o365_e3", "quantity": 25 }]));
    }

    #[test]
    fn test_soc_payload_has_no_solution_key() {
        use crate::schema::registry::soc_schema;
        let record = crate::forms::record::FormRecord::initialize(soc_schema());
        let payload = soc_payload(&common(), &record, soc_schema());
        assert!(payload.get("solution").is_none());
        assert_eq!(payload["client_id"], json!(42));
        assert_eq!(payload["monitored_hosts"], json!(0));
    }
}
