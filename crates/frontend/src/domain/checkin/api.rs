use contracts::domain::checkin::{AssignStaffDto, StaffAssignment};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, auth_header};

pub async fn fetch_assignments(event_id: &str) -> Result<Vec<StaffAssignment>, String> {
    let auth = auth_header().ok_or("Not authenticated")?;

    let response = Request::get(&api_url(&format!(
        "/api/organizer/events/{}/checkin-staff",
        event_id
    )))
    .header("Authorization", &auth)
    .send()
    .await
    .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Failed to fetch check-in staff: {}",
            response.status()
        ));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn assign_staff(event_id: &str, dto: &AssignStaffDto) -> Result<StaffAssignment, String> {
    let auth = auth_header().ok_or("Not authenticated")?;

    let response = Request::post(&api_url(&format!(
        "/api/organizer/events/{}/checkin-staff",
        event_id
    )))
    .header("Authorization", &auth)
    .json(dto)
    .map_err(|e| format!("Failed to serialize request: {}", e))?
    .send()
    .await
    .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to assign staff: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn revoke_assignment(event_id: &str, assignment_id: &str) -> Result<(), String> {
    let auth = auth_header().ok_or("Not authenticated")?;

    let response = Request::delete(&api_url(&format!(
        "/api/organizer/events/{}/checkin-staff/{}",
        event_id, assignment_id
    )))
    .header("Authorization", &auth)
    .send()
    .await
    .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to revoke access: {}", response.status()));
    }

    Ok(())
}
