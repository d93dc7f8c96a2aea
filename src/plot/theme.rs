use derive_getters::Getters;
use plotters::style::RGBColor;

const POINTS_PER_INCH: f64 = 72.0;

#[derive(Clone, Debug, Getters)]
pub struct PlotTheme {
    dpi: u32,
    font_family: String,
    background: RGBColor,
    plot_background: RGBColor,
    grid_color: RGBColor,
    grid_alpha: f64,
    data_color: RGBColor,
    text_color: RGBColor,
    title_pt: f64,
    label_pt: f64,
    tick_pt: f64,
    line_width_pt: f64,
    margin_pt: f64,
}

impl Default for PlotTheme {
    fn default() -> Self {
        Self {
            dpi: 200,
            font_family: String::from("sans-serif"),
            background: RGBColor(255, 255, 255),
            plot_background: RGBColor(234, 234, 242),
            grid_color: RGBColor(255, 255, 255),
            grid_alpha: 0.3,
            data_color: RGBColor(76, 114, 176),
            text_color: RGBColor(38, 38, 38),
            title_pt: 12.0,
            label_pt: 11.0,
            tick_pt: 10.0,
            line_width_pt: 2.0,
            margin_pt: 4.0,
        }
    }
}

impl PlotTheme {
    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }

    pub fn with_font_family(mut self, font_family: &str) -> Self {
        self.font_family = font_family.to_string();
        self
    }

    pub fn pixels(&self, (width, height): (f64, f64)) -> (u32, u32) {
        let dpi = f64::from(self.dpi);
        ((width * dpi).round() as u32, (height * dpi).round() as u32)
    }

    pub fn scale(&self, points: f64) -> f64 {
        points * f64::from(self.dpi) / POINTS_PER_INCH
    }

    pub fn scale_px(&self, points: f64) -> u32 {
        self.scale(points).round().max(1.0) as u32
    }
}
