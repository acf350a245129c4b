//! Универсальные REST-вызовы справочников ценообразования.
//!
//! Справочные данные не требуют авторизации, используется обычный
//! запрос без обёртки с токеном.

use gloo_net::http::Request;
use serde_json::{Map, Value};

use crate::shared::api_utils::{api_url, connectivity_error, error_from_response};

pub async fn fetch_rows(slug: &str) -> Result<Vec<Map<String, Value>>, String> {
    let response = Request::get(&api_url(&format!("pricing/{}/", slug)))
        .send()
        .await
        .map_err(connectivity_error)?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    response
        .json::<Vec<Map<String, Value>>>()
        .await
        .map_err(|e| format!("Некорректный ответ сервера: {}", e))
}

pub async fn save_row(slug: &str, id: Option<i64>, payload: &Value) -> Result<(), String> {
    let body =
        serde_json::to_string(payload).map_err(|e| format!("Ошибка сериализации: {}", e))?;

    let builder = match id {
        Some(id) => Request::put(&api_url(&format!("pricing/{}/{}/", slug, id))),
        None => Request::post(&api_url(&format!("pricing/{}/", slug))),
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

/// Удаление: 204 — тоже успех
pub async fn delete_row(slug: &str, id: i64) -> Result<(), String> {
    let response = Request::delete(&api_url(&format!("pricing/{}/{}/", slug, id)))
        .send()
        .await
        .map_err(connectivity_error)?;

    if !response.ok() && response.status() != 204 {
        return Err(error_from_response(response).await);
    }
    Ok(())
}
