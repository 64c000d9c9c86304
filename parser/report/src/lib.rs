mod error;
mod plotting;
mod prints;
mod types;

pub use error::{ErrorKind, FlamethrowerError};
pub use plotting::{
    bar_chart, cdf_chart, difference_bar_chart, three_bar_chart, ChartLabels, ProtocolSeries,
};
pub use types::*;
