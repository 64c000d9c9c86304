use super::chart::{
    protocol_color, rendering_error, ChartLabels, AXIS_TEXT_SIZE, CAPTION_TEXT_SIZE, CHART_SIZE,
    FONT, LABEL_TEXT_SIZE,
};
use super::series::ProtocolSeries;
use crate::error::FlamethrowerError;
use crate::prints::print_saved;
use plotters::prelude::*;
use std::path::Path;

const POINT_SIZE: u32 = 2;

/// Empirical CDF of the three protocols for a single test. Unlike the bar charts the
/// series may differ in length since each holds raw round-trip times.
pub fn cdf_chart(
    series: &ProtocolSeries,
    path: &Path,
    labels: &ChartLabels,
) -> Result<(), FlamethrowerError> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| rendering_error(path, e))?;

    let x_max = series
        .iter()
        .flat_map(|(_, values)| values.iter().copied())
        .filter(|v| v.is_finite())
        .fold(0.0f64, f64::max);
    let x_max = if x_max > 0.0 { x_max * 1.05 } else { 1.0 };

    let mut builder = ChartBuilder::on(&root);
    builder
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70);
    if !labels.caption.is_empty() {
        builder.caption(&labels.caption, (FONT, CAPTION_TEXT_SIZE));
    }
    let mut chart = builder
        .build_cartesian_2d(0f64..x_max, 0f64..1f64)
        .map_err(|e| rendering_error(path, e))?;

    chart
        .configure_mesh()
        .x_desc(labels.x_desc.as_str())
        .y_desc(labels.y_desc.as_str())
        .axis_desc_style((FONT, AXIS_TEXT_SIZE))
        .draw()
        .map_err(|e| rendering_error(path, e))?;

    // POST first so UDP ends up drawn on top.
    for (protocol, values) in series.iter().collect::<Vec<_>>().into_iter().rev() {
        let color = protocol_color(protocol);
        chart
            .draw_series(
                cdf_points(values)
                    .into_iter()
                    .map(|point| Circle::new(point, POINT_SIZE, color.filled())),
            )
            .map_err(|e| rendering_error(path, e))?
            .label(protocol.legend())
            .legend(move |(x, y)| Circle::new((x + 5, y), 4, color.filled()));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font((FONT, LABEL_TEXT_SIZE))
        .draw()
        .map_err(|e| rendering_error(path, e))?;

    root.present().map_err(|e| rendering_error(path, e))?;
    print_saved(path);
    Ok(())
}

/// Sorted values paired with their cumulative probability `i / n`.
pub(crate) fn cdf_points(values: &[f64]) -> Vec<(f64, f64)> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let count = sorted.len() as f64;
    sorted
        .into_iter()
        .enumerate()
        .map(|(index, value)| (value, (index + 1) as f64 / count))
        .collect()
}
