use serde::{Deserialize, Serialize};

/// Пресейл-инженер, ответственный за проработку предложения
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Engineer {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}
