use crate::error::FlamethrowerError;
use crate::protocol::Protocol;
use plotters::style::RGBColor;
use std::fmt::Display;
use std::ops::Range;
use std::path::Path;

pub(crate) const CHART_SIZE: (u32, u32) = (1024, 768);
pub(crate) const FONT: &str = "sans-serif";
pub(crate) const CAPTION_TEXT_SIZE: u32 = 24;
pub(crate) const AXIS_TEXT_SIZE: u32 = 18;
pub(crate) const LABEL_TEXT_SIZE: u32 = 14;

/// Horizontal units reserved for one test on a bar chart. Bars are laid out around the
/// slot center so integer coordinates are enough.
pub(crate) const SLOT_WIDTH: i32 = 8;

const ORANGE: RGBColor = RGBColor(255, 165, 0);
const BLUE: RGBColor = RGBColor(0, 0, 255);
const GREEN: RGBColor = RGBColor(0, 128, 0);

/// Caption and axis descriptions of a chart.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChartLabels {
    pub caption: String,
    pub x_desc: String,
    pub y_desc: String,
}

impl ChartLabels {
    pub fn new(caption: &str, x_desc: &str, y_desc: &str) -> Self {
        Self {
            caption: caption.to_owned(),
            x_desc: x_desc.to_owned(),
            y_desc: y_desc.to_owned(),
        }
    }
}

pub(crate) fn protocol_color(protocol: Protocol) -> RGBColor {
    match protocol {
        Protocol::Udp => BLUE,
        Protocol::HttpsGet => ORANGE,
        Protocol::HttpsPost => GREEN,
    }
}

/// Center of the slot of the zero-based test `index`.
pub(crate) fn slot_center(index: usize) -> i32 {
    (index as i32 + 1) * SLOT_WIDTH
}

/// X range covering `tests` slots plus half a slot of padding on both sides.
pub(crate) fn slot_range(tests: usize) -> Range<i32> {
    SLOT_WIDTH / 2..slot_center(tests.saturating_sub(1)) + SLOT_WIDTH / 2
}

/// `Test N` on slot centers, nothing elsewhere.
pub(crate) fn slot_label(x: i32, tests: usize) -> String {
    if x > 0 && x % SLOT_WIDTH == 0 && (x / SLOT_WIDTH) as usize <= tests {
        format!("Test {}", x / SLOT_WIDTH)
    } else {
        String::new()
    }
}

/// Y range that always includes zero and leaves headroom above (and below) the bars.
pub(crate) fn value_range<'a>(values: impl IntoIterator<Item = &'a f64>) -> Range<f64> {
    let (min, max) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((0.0f64, 0.0f64), |(min, max), v| (min.min(*v), max.max(*v)));
    let lower = if min < 0.0 { min * 1.2 } else { 0.0 };
    let upper = if max > 0.0 { max * 1.2 } else { 1.0 };
    lower..upper
}

pub(crate) fn rendering_error<E: Display>(path: &Path, error: E) -> FlamethrowerError {
    FlamethrowerError::ChartRendering {
        path: path.to_path_buf(),
        reason: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_label_only_slot_centers() {
        assert_eq!(slot_label(SLOT_WIDTH, 3), "Test 1");
        assert_eq!(slot_label(3 * SLOT_WIDTH, 3), "Test 3");
        assert_eq!(slot_label(4 * SLOT_WIDTH, 3), "");
        assert_eq!(slot_label(SLOT_WIDTH + 1, 3), "");
        assert_eq!(slot_label(0, 3), "");
    }

    #[test]
    fn should_pad_slot_range() {
        assert_eq!(slot_range(2), 4..20);
        assert_eq!(slot_range(1), 4..12);
        let range = slot_range(3);
        assert!(range.contains(&slot_center(2)));
        assert!(!range.contains(&slot_center(3)));
    }

    #[test]
    fn should_include_zero_and_headroom_in_value_range() {
        let range = value_range(&[10.0, 5.0]);
        assert_eq!(range.start, 0.0);
        assert!((range.end - 12.0).abs() < 1e-9);

        let range = value_range(&[-5.0, 10.0]);
        assert!((range.start + 6.0).abs() < 1e-9);
        assert!((range.end - 12.0).abs() < 1e-9);

        assert_eq!(value_range(&[] as &[f64]), 0.0..1.0);
        assert!((value_range(&[f64::NAN, 5.0]).end - 6.0).abs() < 1e-9);
    }
}
