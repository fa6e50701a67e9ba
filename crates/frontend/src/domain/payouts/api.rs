use contracts::domain::payouts::{CreatePayoutMethodDto, PayoutMethod};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, auth_header};

pub async fn fetch_payout_methods() -> Result<Vec<PayoutMethod>, String> {
    let auth = auth_header().ok_or("Not authenticated")?;

    let response = Request::get(&api_url("/api/organizer/payout-methods"))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Failed to fetch payout methods: {}",
            response.status()
        ));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Returns the stored method as the server persisted it.
pub async fn create_payout_method(dto: &CreatePayoutMethodDto) -> Result<PayoutMethod, String> {
    let auth = auth_header().ok_or("Not authenticated")?;

    let response = Request::post(&api_url("/api/organizer/payout-methods"))
        .header("Authorization", &auth)
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Failed to create payout method: {}",
            response.status()
        ));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn delete_payout_method(id: &str) -> Result<(), String> {
    let auth = auth_header().ok_or("Not authenticated")?;

    let response = Request::delete(&api_url(&format!("/api/organizer/payout-methods/{}", id)))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Failed to delete payout method: {}",
            response.status()
        ));
    }

    Ok(())
}
