mod bar;
mod cdf;
mod chart;
mod series;

pub use bar::{bar_chart, difference_bar_chart, three_bar_chart};
pub use cdf::cdf_chart;
pub use chart::ChartLabels;
pub use series::ProtocolSeries;
