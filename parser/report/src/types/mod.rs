pub mod aggregated;
pub mod grouped;
pub mod grouping_mode;
pub mod keys;
pub mod labels;
pub mod matrix;
pub mod params;
pub mod protocol;
pub mod record;
