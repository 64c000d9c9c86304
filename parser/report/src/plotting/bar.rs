use super::chart::{
    protocol_color, rendering_error, slot_center, slot_label, slot_range, value_range,
    ChartLabels, AXIS_TEXT_SIZE, CAPTION_TEXT_SIZE, CHART_SIZE, FONT, LABEL_TEXT_SIZE,
};
use super::series::ProtocolSeries;
use crate::error::FlamethrowerError;
use crate::prints::print_saved;
use crate::protocol::Protocol;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::{RangedCoordf64, RangedCoordi32};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;
use tracing::debug;

type BarChart<'a, 'b> =
    ChartContext<'a, BitMapBackend<'b>, Cartesian2d<RangedCoordi32, RangedCoordf64>>;

const BAR_WIDTH: i32 = 2;

/// Single series, one bar per test annotated with its value.
pub fn bar_chart(
    values: &[f64],
    path: &Path,
    labels: &ChartLabels,
) -> Result<(), FlamethrowerError> {
    let tests = values.len();
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| rendering_error(path, e))?;
    let mut chart = build_chart(&root, tests, value_range(values), labels, path)?;

    let color = protocol_color(Protocol::Udp);
    chart
        .draw_series(values.iter().enumerate().map(|(index, value)| {
            let center = slot_center(index);
            Rectangle::new(
                [(center - BAR_WIDTH, 0.0), (center + BAR_WIDTH, *value)],
                color.filled(),
            )
        }))
        .map_err(|e| rendering_error(path, e))?;

    chart
        .draw_series(values.iter().enumerate().map(|(index, value)| {
            EmptyElement::at((slot_center(index) - BAR_WIDTH, *value))
                + Text::new(
                    format!("{value:.2}"),
                    (0, -(LABEL_TEXT_SIZE as i32) - 4),
                    (FONT, LABEL_TEXT_SIZE).into_font(),
                )
        }))
        .map_err(|e| rendering_error(path, e))?;

    root.present().map_err(|e| rendering_error(path, e))?;
    print_saved(path);
    Ok(())
}

/// UDP, HTTPS GET and HTTPS POST bars side by side for every test.
pub fn three_bar_chart(
    series: &ProtocolSeries,
    path: &Path,
    labels: &ChartLabels,
) -> Result<(), FlamethrowerError> {
    let tests = series.tests()?;
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| rendering_error(path, e))?;
    let range = value_range(series.iter().flat_map(|(_, values)| values.iter()));
    let mut chart = build_chart(&root, tests, range, labels, path)?;

    for (offset, (protocol, values)) in (-1..).zip(series.iter()) {
        draw_bars(&mut chart, protocol, values, offset, path)?;
    }

    draw_legend(&mut chart, path)?;
    root.present().map_err(|e| rendering_error(path, e))?;
    print_saved(path);
    Ok(())
}

/// HTTPS GET and HTTPS POST expressed as the difference from UDP of the same test.
pub fn difference_bar_chart(
    series: &ProtocolSeries,
    path: &Path,
    labels: &ChartLabels,
) -> Result<(), FlamethrowerError> {
    let tests = series.tests()?;
    let differences = series.differences()?;
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| rendering_error(path, e))?;
    let range = value_range(differences.iter().flat_map(|(_, values)| values.iter()));
    let mut chart = build_chart(&root, tests, range, labels, path)?;

    let x_range = slot_range(tests);
    chart
        .draw_series(LineSeries::new(
            [(x_range.start, 0.0), (x_range.end, 0.0)],
            BLACK.stroke_width(1),
        ))
        .map_err(|e| rendering_error(path, e))?;

    for (offset, (protocol, values)) in (0..).zip(differences.iter()) {
        draw_bars(&mut chart, *protocol, values, offset, path)?;
    }

    draw_legend(&mut chart, path)?;
    root.present().map_err(|e| rendering_error(path, e))?;
    print_saved(path);
    Ok(())
}

fn build_chart<'a, 'b>(
    root: &'a DrawingArea<BitMapBackend<'b>, Shift>,
    tests: usize,
    y_range: Range<f64>,
    labels: &ChartLabels,
    path: &Path,
) -> Result<BarChart<'a, 'b>, FlamethrowerError> {
    let mut builder = ChartBuilder::on(root);
    builder
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70);
    if !labels.caption.is_empty() {
        builder.caption(&labels.caption, (FONT, CAPTION_TEXT_SIZE));
    }
    let x_range = slot_range(tests);
    let x_points = (x_range.end - x_range.start) as usize + 1;
    let mut chart = builder
        .build_cartesian_2d(x_range, y_range)
        .map_err(|e| rendering_error(path, e))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(x_points)
        .x_label_formatter(&|x| slot_label(*x, tests))
        .x_desc(labels.x_desc.as_str())
        .y_desc(labels.y_desc.as_str())
        .axis_desc_style((FONT, AXIS_TEXT_SIZE))
        .draw()
        .map_err(|e| rendering_error(path, e))?;
    Ok(chart)
}

/// Bars of one protocol, shifted by `offset` bar widths from the slot center.
fn draw_bars(
    chart: &mut BarChart<'_, '_>,
    protocol: Protocol,
    values: &[f64],
    offset: i32,
    path: &Path,
) -> Result<(), FlamethrowerError> {
    debug!("Drawing {} bars for {protocol}", values.len());
    let color = protocol_color(protocol);
    let shift = offset * BAR_WIDTH;
    chart
        .draw_series(values.iter().enumerate().map(|(index, value)| {
            let left = slot_center(index) + shift - BAR_WIDTH / 2;
            Rectangle::new([(left, 0.0), (left + BAR_WIDTH, *value)], color.filled())
        }))
        .map_err(|e| rendering_error(path, e))?
        .label(protocol.legend())
        .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled()));
    Ok(())
}

fn draw_legend<'a, 'b: 'a>(
    chart: &mut BarChart<'a, 'b>,
    path: &Path,
) -> Result<(), FlamethrowerError> {
    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font((FONT, LABEL_TEXT_SIZE))
        .draw()
        .map_err(|e| rendering_error(path, e))
}
