use contracts::domain::offer::OfferSummary;
use gloo_net::http::Request;
use serde_json::{Map, Value};

use crate::shared::api_utils::{api_url, connectivity_error, error_from_response};

pub async fn fetch_offers() -> Result<Vec<OfferSummary>, String> {
    let response = Request::get(&api_url("offers/"))
        .send()
        .await
        .map_err(connectivity_error)?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    response
        .json::<Vec<OfferSummary>>()
        .await
        .map_err(|e| format!("Некорректный ответ сервера: {}", e))
}

/// Сущность предложения — динамический объект: состав полей зависит
/// от решения, поэтому разбор откладывается до наложения на запись
pub async fn fetch_offer(id: i64) -> Result<Map<String, Value>, String> {
    let response = Request::get(&api_url(&format!("offers/{}/", id)))
        .send()
        .await
        .map_err(connectivity_error)?;

    if response.status() == 404 {
        return Err("Предложение не найдено".to_string());
    }
    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    let value = response
        .json::<Value>()
        .await
        .map_err(|e| format!("Некорректный ответ сервера: {}", e))?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err("Некорректный ответ сервера: ожидался объект".to_string()),
    }
}

pub async fn save_offer(id: Option<i64>, payload: &Value) -> Result<(), String> {
    let body =
        serde_json::to_string(payload).map_err(|e| format!("Ошибка сериализации: {}", e))?;

    let builder = match id {
        Some(id) => Request::put(&api_url(&format!("offers/{}/", id))),
        None => Request::post(&api_url("offers/")),
    };

    let response = builder
        .header("Content-Type", "application/json")
        .body(body)
        .map_err(|e| format!("Ошибка запроса: {}", e))?
        .send()
        .await
        .map_err(connectivity_error)?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }
    Ok(())
}
