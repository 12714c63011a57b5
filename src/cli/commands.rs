pub mod chart;
pub mod options;
pub mod preset;

pub use chart::render_chart;
pub use options::print_options;
pub use preset::resolve_preset;
