//! Quantity selection for one checkout.

use contracts::domain::events::TicketType;
use contracts::domain::orders::{CreateOrderDto, OrderItemDto};
use uuid::Uuid;

/// Per-ticket-type quantities for the order being assembled. Quantities are
/// clamped against both the per-order cap and remaining stock at entry, so
/// every state this type can hold is submittable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderDraft {
    quantities: Vec<(Uuid, u32)>,
}

impl OrderDraft {
    pub fn quantity(&self, ticket_type_id: Uuid) -> u32 {
        self.quantities
            .iter()
            .find(|(id, _)| *id == ticket_type_id)
            .map(|(_, q)| *q)
            .unwrap_or(0)
    }

    /// Set the quantity for one ticket type, clamped to
    /// `min(max_per_order, remaining)`.
    pub fn set_quantity(&mut self, ticket_type: &TicketType, quantity: u32) {
        let cap = ticket_type.max_per_order.min(ticket_type.remaining());
        let clamped = quantity.min(cap);
        match self
            .quantities
            .iter_mut()
            .find(|(id, _)| *id == ticket_type.id)
        {
            Some(entry) => entry.1 = clamped,
            None => self.quantities.push((ticket_type.id, clamped)),
        }
    }

    pub fn total_tickets(&self) -> u32 {
        self.quantities.iter().map(|(_, q)| q).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_tickets() == 0
    }

    /// Order total in VND. Unknown ticket-type ids contribute nothing.
    pub fn total_amount(&self, ticket_types: &[TicketType]) -> i64 {
        self.quantities
            .iter()
            .filter_map(|(id, quantity)| {
                ticket_types
                    .iter()
                    .find(|t| t.id == *id)
                    .map(|t| t.price * i64::from(*quantity))
            })
            .sum()
    }

    /// Request body, zero-quantity rows dropped.
    pub fn to_dto(&self, event_id: Uuid) -> CreateOrderDto {
        CreateOrderDto {
            event_id,
            items: self
                .quantities
                .iter()
                .filter(|(_, q)| *q > 0)
                .map(|(id, q)| OrderItemDto {
                    ticket_type_id: *id,
                    quantity: *q,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket(id: u128, price: i64, total: u32, sold: u32, cap: u32) -> TicketType {
        TicketType {
            id: Uuid::from_u128(id),
            name: format!("tt-{id}"),
            price,
            quantity_total: total,
            quantity_sold: sold,
            max_per_order: cap,
        }
    }

    #[test]
    fn test_quantity_clamped_to_per_order_cap() {
        let tt = ticket(1, 250_000, 100, 0, 4);
        let mut draft = OrderDraft::default();
        draft.set_quantity(&tt, 9);
        assert_eq!(draft.quantity(tt.id), 4);
    }

    #[test]
    fn test_quantity_clamped_to_remaining_stock() {
        let tt = ticket(1, 250_000, 10, 8, 6);
        let mut draft = OrderDraft::default();
        draft.set_quantity(&tt, 6);
        assert_eq!(draft.quantity(tt.id), 2);
    }

    #[test]
    fn test_total_amount() {
        let standard = ticket(1, 250_000, 100, 0, 6);
        let vip = ticket(2, 800_000, 20, 0, 2);
        let mut draft = OrderDraft::default();
        draft.set_quantity(&standard, 2);
        draft.set_quantity(&vip, 1);

        assert_eq!(draft.total_amount(&[standard, vip]), 1_300_000);
        assert_eq!(draft.total_tickets(), 3);
    }

    #[test]
    fn test_to_dto_drops_zero_rows() {
        let standard = ticket(1, 250_000, 100, 0, 6);
        let vip = ticket(2, 800_000, 20, 0, 2);
        let mut draft = OrderDraft::default();
        draft.set_quantity(&standard, 2);
        draft.set_quantity(&vip, 1);
        draft.set_quantity(&vip, 0);

        let dto = draft.to_dto(Uuid::from_u128(42));
        assert_eq!(dto.items.len(), 1);
        assert_eq!(dto.items[0].quantity, 2);
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_empty_draft_fails_dto_validation() {
        let dto = OrderDraft::default().to_dto(Uuid::from_u128(42));
        assert!(dto.validate().is_err());
    }
}
