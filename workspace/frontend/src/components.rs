pub mod inventory_logs;
pub mod layout;
pub mod pagination;
pub mod reports;
