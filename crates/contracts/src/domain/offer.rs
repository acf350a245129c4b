use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Строка списка предложений. Облачные и SOC-предложения отдают
/// один и тот же набор колонок; у SOC поле `solution` отсутствует.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferSummary {
    pub id: i64,
    pub subject: String,
    #[serde(default)]
    pub solution: Option<String>,
    #[serde(rename = "clientName", default)]
    pub client_name: Option<String>,
    #[serde(rename = "engineerName", default)]
    pub engineer_name: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}
