use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Paid,
    Cancelled,
}

impl OrderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Awaiting payment",
            OrderStatus::Paid => "Paid",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDto {
    pub ticket_type_id: Uuid,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderDto {
    pub event_id: Uuid,
    pub items: Vec<OrderItemDto>,
}

impl CreateOrderDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.items.is_empty() || self.items.iter().all(|i| i.quantity == 0) {
            return Err("Select at least one ticket".into());
        }
        Ok(())
    }
}

/// A ticket issued for a paid order. `code` is the value encoded into the
/// entry QR by the external wallet flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuedTicket {
    pub id: Uuid,
    pub ticket_type_name: String,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,
    pub event_id: Uuid,
    pub event_title: String,
    pub created_at: DateTime<Utc>,
    pub status: OrderStatus,
    /// Total in VND.
    pub total_amount: i64,
    pub tickets: Vec<IssuedTicket>,
}
