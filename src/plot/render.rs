use std::{fmt::Display, path::Path};

use anyhow::{Error, Result};
use chrono::NaiveDate;
use plotters::prelude::*;

use super::{
    PlotTheme, format_percent, percent_decimals,
    figure::{Figure, PerformanceCurve, ReturnDistribution},
};

fn draw_err<E: Display>(err: E) -> Error {
    Error::msg(format!("Chart rendering failed: {}", err))
}

struct Styles<'a> {
    caption: TextStyle<'a>,
    label: TextStyle<'a>,
    tick: TextStyle<'a>,
}

impl<'a> Styles<'a> {
    fn new(theme: &'a PlotTheme) -> Self {
        let font = |pt: f64| {
            (theme.font_family().as_str(), theme.scale(pt))
                .into_font()
                .color(theme.text_color())
        };

        Self {
            caption: font(*theme.title_pt()),
            label: font(*theme.label_pt()),
            tick: font(*theme.tick_pt()),
        }
    }
}

pub(super) fn draw_return_dist(
    figure: &Figure,
    dist: &ReturnDistribution,
    path: &Path,
    size: (u32, u32),
    theme: &PlotTheme,
) -> Result<()> {
    let styles = Styles::new(theme);
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(theme.background()).map_err(draw_err)?;

    let (x_min, x_max) = dist.value_range();
    let y_max = (dist.max_count() as f64 * 1.05).max(1.0);
    let decimals = percent_decimals(x_max - x_min);

    let mut chart = ChartBuilder::on(&root)
        .caption(figure.title(), styles.caption.clone())
        .margin(theme.scale_px(*theme.margin_pt()))
        .x_label_area_size(theme.scale_px(32.0))
        .y_label_area_size(theme.scale_px(44.0))
        .build_cartesian_2d(x_min..x_max, 0f64..y_max)
        .map_err(draw_err)?;

    chart
        .plotting_area()
        .fill(theme.plot_background())
        .map_err(draw_err)?;

    let x_formatter = |v: &f64| format_percent(*v, decimals);
    let y_formatter = |v: &f64| format!("{:.0}", v);
    chart
        .configure_mesh()
        .bold_line_style(theme.grid_color().mix(*theme.grid_alpha()))
        .light_line_style(TRANSPARENT)
        .x_desc(figure.x_label())
        .y_desc(figure.y_label())
        .x_label_formatter(&x_formatter)
        .y_label_formatter(&y_formatter)
        .label_style(styles.tick.clone())
        .axis_desc_style(styles.label.clone())
        .draw()
        .map_err(draw_err)?;

    chart
        .draw_series(dist.bins().iter().map(|bin| {
            Rectangle::new(
                [(*bin.lower(), 0.0), (*bin.upper(), *bin.count() as f64)],
                theme.data_color().filled(),
            )
        }))
        .map_err(draw_err)?;

    root.present().map_err(draw_err)?;
    Ok(())
}

pub(super) fn draw_performance(
    figure: &Figure,
    curve: &PerformanceCurve,
    path: &Path,
    size: (u32, u32),
    theme: &PlotTheme,
) -> Result<()> {
    let styles = Styles::new(theme);
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(theme.background()).map_err(draw_err)?;

    let points = curve.points();
    let (first_date, last_date) = curve.date_range();
    let (y_min, y_max) = curve.value_range();
    let decimals = percent_decimals(y_max - y_min);

    let mut chart = ChartBuilder::on(&root)
        .caption(figure.title(), styles.caption.clone())
        .margin(theme.scale_px(*theme.margin_pt()))
        .x_label_area_size(theme.scale_px(32.0))
        .y_label_area_size(theme.scale_px(48.0))
        .build_cartesian_2d(first_date..last_date, y_min..y_max)
        .map_err(draw_err)?;

    chart
        .plotting_area()
        .fill(theme.plot_background())
        .map_err(draw_err)?;

    let x_formatter = |date: &NaiveDate| date.format("%Y-%m-%d").to_string();
    let y_formatter = |v: &f64| format_percent(*v, decimals);
    chart
        .configure_mesh()
        .bold_line_style(theme.grid_color().mix(*theme.grid_alpha()))
        .light_line_style(TRANSPARENT)
        .x_labels(6)
        .x_desc(figure.x_label())
        .y_desc(figure.y_label())
        .x_label_formatter(&x_formatter)
        .y_label_formatter(&y_formatter)
        .label_style(styles.tick.clone())
        .axis_desc_style(styles.label.clone())
        .draw()
        .map_err(draw_err)?;

    let stroke = theme
        .data_color()
        .stroke_width(theme.scale_px(*theme.line_width_pt()));
    chart
        .draw_series(LineSeries::new(points.iter().copied(), stroke))
        .map_err(draw_err)?;

    root.present().map_err(draw_err)?;
    Ok(())
}
