use chrono::Duration;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::Line,
    widgets::{
        Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Paragraph, Tabs,
    },
};

use crate::plot::{Figure, PerformanceCurve, ReturnDistribution, format_percent, percent_decimals};

pub fn render(frame: &mut Frame, figures: &[Figure], selected: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let symbol = figures.first().map(|figure| figure.symbol()).unwrap_or("");
    let titles: Vec<String> = figures.iter().map(|figure| figure.kind().to_string()).collect();
    let tabs = Tabs::new(titles)
        .block(Block::default().title(symbol.to_string()).borders(Borders::ALL))
        .select(selected)
        .style(Style::default().fg(Color::Cyan))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, chunks[0]);

    match figures.get(selected) {
        Some(figure @ Figure::Performance(curve)) => {
            render_performance(frame, chunks[1], figure, curve)
        }
        Some(figure @ Figure::ReturnDist(dist)) => {
            render_return_dist(frame, chunks[1], figure, dist)
        }
        None => {
            let empty_message = Paragraph::new("No charts to display.")
                .style(Style::default().fg(Color::Yellow))
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(empty_message, chunks[1]);
        }
    }

    let footer = Paragraph::new("Tab/←/→ switch chart   q quit")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, chunks[2]);
}

fn render_performance(
    frame: &mut Frame,
    area: Rect,
    figure: &Figure,
    curve: &PerformanceCurve,
) {
    let data = curve.day_offsets();
    let (first_date, last_date) = curve.date_range();
    let span_days = (last_date - first_date).num_days();
    let x_max = span_days as f64;
    let (y_min, y_max) = curve.value_range();
    let decimals = percent_decimals(y_max - y_min);

    let x_labels = vec![
        first_date.to_string(),
        (first_date + Duration::days(span_days / 2)).to_string(),
        last_date.to_string(),
    ];
    let y_labels = vec![
        format_percent(y_min, decimals),
        format_percent((y_min + y_max) / 2.0, decimals),
        format_percent(y_max, decimals),
    ];

    let dataset = Dataset::default()
        .name("cum_return")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(&data);

    let chart = Chart::new(vec![dataset])
        .block(Block::default().title(figure.title()).borders(Borders::ALL))
        .x_axis(
            Axis::default()
                .title(figure.x_label())
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title(figure.y_label())
                .style(Style::default().fg(Color::Gray))
                .bounds([y_min, y_max])
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}

fn render_return_dist(
    frame: &mut Frame,
    area: Rect,
    figure: &Figure,
    dist: &ReturnDistribution,
) {
    let bins = dist.bins();
    let inner_width = area.width.saturating_sub(2) as usize;
    let bar_width = (inner_width / bins.len().max(1)).clamp(1, u16::MAX as usize) as u16;

    let bars: Vec<Bar> = bins
        .iter()
        .map(|bin| {
            Bar::default()
                .value(*bin.count() as u64)
                .text_value(String::new())
        })
        .collect();

    let (lower, upper) = dist.value_range();
    let decimals = percent_decimals(upper - lower);
    let range = format!(
        " {}: {} … {} · {}: {} ",
        figure.x_label(),
        format_percent(lower, decimals),
        format_percent(upper, decimals),
        figure.y_label(),
        dist.sample_size(),
    );

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(figure.title())
                .title_bottom(Line::from(range))
                .borders(Borders::ALL),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(0)
        .bar_style(Style::default().fg(Color::Cyan));

    frame.render_widget(chart, area);
}
