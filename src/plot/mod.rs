pub mod capability;
pub mod figure;
pub mod histogram;
mod render;
pub mod theme;

pub use figure::{Figure, FigureKind, PerformanceCurve, ReturnDistribution};
pub use histogram::{Bin, histogram};
pub use theme::PlotTheme;

pub fn percent_decimals(span: f64) -> usize {
    let scaled = span.abs() * 100.0;
    if scaled <= 0.0 || !scaled.is_finite() {
        return 0;
    }
    (2.0 - (2.0 * scaled).log10()).ceil().clamp(0.0, 5.0) as usize
}

pub fn format_percent(value: f64, decimals: usize) -> String {
    let pct = value * 100.0;
    // avoid "-0%"
    let pct = if pct.abs() < 0.5 * 10f64.powi(-(decimals as i32)) {
        0.0
    } else {
        pct
    };
    format!("{:.*}%", decimals, pct)
}
