//! Статические схемы полей по решениям.
//!
//! Справочники значений (каталог лицензий Veeam, планы Office 365,
//! ступени пропускной способности) заданы константами: состав формы
//! не зависит от данных сервера.

use super::field::{FieldDescriptor, FieldKind, SelectChoice};
use crate::enums::Solution;

// ============================================================================
// Справочники
// ============================================================================

/// Каталог лицензий Veeam. Значения несут префикс `baas_license_`,
/// сервер хранит код без префикса.
pub const VEEAM_LICENSES: &[SelectChoice] = &[
    SelectChoice::new("baas_license_standard", "Veeam Standard"),
    SelectChoice::new("baas_license_enterprise", "Veeam Enterprise"),
    SelectChoice::new("baas_license_enterprise_plus", "Veeam Enterprise Plus"),
];

pub const OFFICE365_PRODUCTS: &[SelectChoice] = &[
    SelectChoice::new("o365_business_basic", "Microsoft 365 Business Basic"),
    SelectChoice::new("o365_business_standard", "Microsoft 365 Business Standard"),
    SelectChoice::new("o365_business_premium", "Microsoft 365 Business Premium"),
    SelectChoice::new("o365_e3", "Office 365 E3"),
    SelectChoice::new("o365_e5", "Office 365 E5"),
];

/// Ступени пропускной способности каналов, Мбит/с
pub const BANDWIDTH_OPTIONS: &[u32] = &[10, 50, 100, 200, 500, 1000];

const STORAGE_TIERS: &[SelectChoice] = &[
    SelectChoice::new("ssd", "SSD"),
    SelectChoice::new("sas", "SAS"),
    SelectChoice::new("sata", "SATA"),
];

const SUPPORT_LEVELS: &[SelectChoice] = &[
    SelectChoice::new("basic", "Базовая"),
    SelectChoice::new("extended", "Расширенная"),
    SelectChoice::new("premium", "Премиальная"),
];

const BILLING_TERMS: &[SelectChoice] = &[
    SelectChoice::new("monthly", "Помесячно"),
    SelectChoice::new("annual", "Годовой контракт"),
];

const SOC_PACKS: &[SelectChoice] = &[
    SelectChoice::new("soc_basic", "SOC Базовый"),
    SelectChoice::new("soc_standard", "SOC Стандарт"),
    SelectChoice::new("soc_premium", "SOC Премиум"),
];

// ============================================================================
// Вложенные табличные поля
// ============================================================================

const VM_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::text("name", "Имя ВМ"),
    FieldDescriptor::number_in("vcpu", "vCPU", 1.0, 128.0, "шт"),
    FieldDescriptor::number_in("ram_gb", "RAM", 1.0, 1024.0, "ГБ"),
    FieldDescriptor::number("storage_gb", "Диск, ГБ"),
];

const RACK_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::number_in("rack_units", "Юнитов", 1.0, 47.0, "U"),
    FieldDescriptor::number("power_kw", "Мощность, кВт"),
    FieldDescriptor::number("cross_connects", "Кросс-соединения"),
];

// ============================================================================
// Схемы решений
// ============================================================================

const VMWARE_SCHEMA: &[FieldDescriptor] = &[
    FieldDescriptor::new("vms", "Виртуальные машины", FieldKind::Vms { fields: VM_FIELDS }),
    FieldDescriptor::select("storage_tier", "Класс хранилища", STORAGE_TIERS),
    FieldDescriptor::number_in("internet_mbps", "Интернет-канал", 0.0, 10000.0, "Мбит/с"),
    FieldDescriptor::checkbox("backup", "Резервное копирование"),
    FieldDescriptor::select("support_level", "Уровень поддержки", SUPPORT_LEVELS),
];

const HUAWEI_SCHEMA: &[FieldDescriptor] = &[
    FieldDescriptor::new("vms", "Виртуальные машины", FieldKind::Vms { fields: VM_FIELDS }),
    FieldDescriptor::select("storage_tier", "Класс хранилища", STORAGE_TIERS),
    FieldDescriptor::number_in("internet_mbps", "Интернет-канал", 0.0, 10000.0, "Мбит/с"),
    FieldDescriptor::checkbox("dedicated_cluster", "Выделенный кластер"),
];

const STAAS_SCHEMA: &[FieldDescriptor] = &[
    FieldDescriptor::number_in("storage_tb", "Объём", 1.0, 5000.0, "ТБ"),
    FieldDescriptor::select("storage_tier", "Класс хранилища", STORAGE_TIERS),
    FieldDescriptor::number("iops_limit", "Лимит IOPS"),
    FieldDescriptor::checkbox("replication", "Репликация во вторую площадку"),
];

const BAAS_SCHEMA: &[FieldDescriptor] = &[
    FieldDescriptor::new(
        "licenses",
        "Лицензии Veeam",
        FieldKind::Licenses {
            catalog: VEEAM_LICENSES,
        },
    ),
    FieldDescriptor::number_in("storage_tb", "Репозиторий", 1.0, 1000.0, "ТБ"),
    FieldDescriptor::number("protected_agents", "Защищаемых агентов"),
];

const DRAAS_SCHEMA: &[FieldDescriptor] = &[
    FieldDescriptor::new(
        "licenses",
        "Лицензии Veeam",
        FieldKind::Licenses {
            catalog: VEEAM_LICENSES,
        },
    ),
    FieldDescriptor::number("replicated_vms", "Реплицируемых ВМ"),
    FieldDescriptor::number_in("storage_tb", "Резервная площадка", 1.0, 1000.0, "ТБ"),
    FieldDescriptor::checkbox("test_recovery", "Тестовое восстановление"),
];

const OFFICE365_SCHEMA: &[FieldDescriptor] = &[
    FieldDescriptor::new(
        "products",
        "Продукты Office 365",
        FieldKind::LicensesOffice {
            catalog: OFFICE365_PRODUCTS,
        },
    ),
    FieldDescriptor::select("billing_term", "Схема оплаты", BILLING_TERMS),
];

const COLOCATION_SCHEMA: &[FieldDescriptor] = &[
    FieldDescriptor::new("racks", "Стойки", FieldKind::Racks { fields: RACK_FIELDS }),
    FieldDescriptor::checkbox("smart_hands", "Сервис Smart Hands"),
    FieldDescriptor::textarea("placement_notes", "Требования к размещению"),
];

const CONNECTIVITY_SCHEMA: &[FieldDescriptor] = &[
    FieldDescriptor::new(
        "connections",
        "Подключения",
        FieldKind::Connections {
            max_connections: 4,
            bandwidth_options: BANDWIDTH_OPTIONS,
        },
    ),
    FieldDescriptor::checkbox("redundancy", "Резервирование каналов"),
];

const GLOBAL_SCHEMA: &[FieldDescriptor] = &[
    FieldDescriptor::textarea("service_description", "Описание услуги"),
    FieldDescriptor::number("monthly_fee", "Ежемесячный платёж"),
];

/// Схема SOC-подписки. Отдельный контур, решением не параметризуется.
const SOC_SCHEMA: &[FieldDescriptor] = &[
    FieldDescriptor::select("pack", "Пакет", SOC_PACKS),
    FieldDescriptor::number_in("monitored_hosts", "Хостов на мониторинге", 1.0, 100000.0, "шт"),
    FieldDescriptor::number("eps", "Событий в секунду"),
    FieldDescriptor::number_in("retention_days", "Хранение событий", 30.0, 1095.0, "дн"),
    FieldDescriptor::checkbox("incident_response", "Реагирование на инциденты"),
    FieldDescriptor::textarea("infrastructure_notes", "Описание инфраструктуры"),
];

/// Схема полей выбранного решения
pub fn solution_schema(solution: Solution) -> &'static [FieldDescriptor] {
    match solution {
        Solution::Vmware => VMWARE_SCHEMA,
        Solution::Huawei => HUAWEI_SCHEMA,
        Solution::Staas => STAAS_SCHEMA,
        Solution::Baas => BAAS_SCHEMA,
        Solution::Draas => DRAAS_SCHEMA,
        Solution::Office365 => OFFICE365_SCHEMA,
        Solution::Colocation => COLOCATION_SCHEMA,
        Solution::Connectivity => CONNECTIVITY_SCHEMA,
        Solution::Global => GLOBAL_SCHEMA,
    }
}

pub fn soc_schema() -> &'static [FieldDescriptor] {
    SOC_SCHEMA
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_unique_names(schema: &[FieldDescriptor]) {
        let mut seen = HashSet::new();
        for descriptor in schema {
            assert!(
                seen.insert(descriptor.name),
                "duplicate field name: {}",
                descriptor.name
            );
            if let FieldKind::Vms { fields } | FieldKind::Racks { fields } = descriptor.kind {
                let mut nested = HashSet::new();
                for sub in fields {
                    assert!(nested.insert(sub.name));
                }
            }
        }
    }

    #[test]
    fn test_field_names_unique_in_every_schema() {
        for solution in Solution::all() {
            assert_unique_names(solution_schema(solution));
        }
        assert_unique_names(soc_schema());
    }

    #[test]
    fn test_license_catalog_carries_known_prefix() {
        for entry in VEEAM_LICENSES {
            assert!(entry.value.starts_with("baas_license_"));
        }
    }

    #[test]
    fn test_connectivity_is_bounded() {
        let connections = CONNECTIVITY_SCHEMA
            .iter()
            .find(|d| d.name == "connections")
            .unwrap();
        assert_eq!(connections.kind.max_rows(), Some(4));
    }
}
