use contracts::dashboards::admin::AdminSummaryResponse;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, auth_header};

pub async fn fetch_summary() -> Result<AdminSummaryResponse, String> {
    let auth = auth_header().ok_or("Not authenticated")?;

    let response = Request::get(&api_url("/api/admin/summary"))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch summary: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
