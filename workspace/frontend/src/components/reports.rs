mod charts;
mod table;
mod view;
mod widget;

pub use view::Reports;
