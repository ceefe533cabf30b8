//! PNG chart exports (plotters).
mod correlation;
mod driver;
mod history;
mod scatter;
mod timeline;


use plotters::style::RGBColor;

pub use correlation::plot_correlation_matrix;
pub use driver::export_charts;
pub use history::plot_index_history;
pub use scatter::plot_stability_scatter;
pub use timeline::plot_score_timeline;

pub(crate) const STABLE_COLOR: RGBColor = RGBColor(0x22, 0xc5, 0x5e);
pub(crate) const ALERT_COLOR: RGBColor = RGBColor(0xf5, 0x9e, 0x0b);
pub(crate) const UNSTABLE_COLOR: RGBColor = RGBColor(0xef, 0x44, 0x44);
