pub mod checkin;
pub mod events;
pub mod orders;
pub mod payouts;
