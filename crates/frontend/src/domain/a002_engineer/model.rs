use contracts::domain::engineer::Engineer;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, connectivity_error, error_from_response};

pub async fn fetch_engineers() -> Result<Vec<Engineer>, String> {
    let response = Request::get(&api_url("engineers/"))
        .send()
        .await
        .map_err(connectivity_error)?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    response
        .json::<Vec<Engineer>>()
        .await
        .map_err(|e| format!("Некорректный ответ сервера: {}", e))
}
