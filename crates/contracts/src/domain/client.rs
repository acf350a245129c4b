use serde::{Deserialize, Serialize};

/// Клиент из справочника продаж; список приходит с сервера целиком
/// и используется только для селектора формы
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub inn: Option<String>,
}
