mod log_list;
mod product_picker;
mod view;

pub use view::InventoryLogs;
