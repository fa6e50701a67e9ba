use contracts::domain::orders::{CreateOrderDto, Order};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, auth_header};

pub async fn create_order(dto: &CreateOrderDto) -> Result<Order, String> {
    let auth = auth_header().ok_or("Not authenticated")?;

    let response = Request::post(&api_url("/api/orders"))
        .header("Authorization", &auth)
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to place order: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn fetch_my_orders() -> Result<Vec<Order>, String> {
    let auth = auth_header().ok_or("Not authenticated")?;

    let response = Request::get(&api_url("/api/orders/my"))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch orders: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
