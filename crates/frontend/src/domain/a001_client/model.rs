use contracts::domain::client::Client;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, connectivity_error, error_from_response};

pub async fn fetch_clients() -> Result<Vec<Client>, String> {
    let response = Request::get(&api_url("clients/"))
        .send()
        .await
        .map_err(connectivity_error)?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    response
        .json::<Vec<Client>>()
        .await
        .map_err(|e| format!("Некорректный ответ сервера: {}", e))
}
