mod builder;
mod chart;
mod plot;
mod table;
mod view;

pub use builder::ReportBuilder;
pub use chart::ReportChart;
pub use view::Reports;
