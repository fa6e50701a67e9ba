pub mod filter_state;
pub mod url_sync;
