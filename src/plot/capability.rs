use plotters::style::IntoFont;

use super::PlotTheme;
use crate::error::StockError;

pub fn check(theme: &PlotTheme) -> Result<(), StockError> {
    let font = (theme.font_family().as_str(), 12.0).into_font();

    font.box_size("0%").map(|_| ()).map_err(|err| {
        StockError::MissingCapability(format!(
            "Chart font '{}' is not available ({:?}). Install a system sans-serif font \
             (for example fonts-dejavu-core or fontconfig with any TrueType font) and run again.",
            theme.font_family(),
            err
        ))
    })
}
