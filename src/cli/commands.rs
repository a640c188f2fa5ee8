pub mod logs;
pub mod products;
pub mod report;

pub use logs::show_logs;
pub use products::list_products;
pub use report::{show_report, watch_report};
