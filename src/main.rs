use std::{
    fs,
    io::{self, IsTerminal},
};

use anyhow::{Context, Result};
use clap::Parser;
use stock_returns::{
    app::App,
    config::{AnalysisConfig, Args},
    models::Stock,
    plot::{PlotTheme, capability},
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = AnalysisConfig::from_args(Args::parse())?;
    let theme = PlotTheme::default().with_dpi(*config.dpi());
    capability::check(&theme)?;

    let stock = Stock::load(
        config.symbol(),
        config.start().as_deref(),
        config.end().as_deref(),
    )
    .await?;

    println!("{}", stock.data().tail(3));

    let performance = stock.plot_performance()?;
    let return_dist = stock.plot_return_dist(*config.bins())?;

    fs::create_dir_all(config.out_dir()).with_context(|| {
        format!(
            "Failed to create output directory {}",
            config.out_dir().display()
        )
    })?;

    for figure in [&return_dist, &performance] {
        let path = config.out_dir().join(figure.file_name());
        figure.save(&path, &theme)?;
        info!(path = %path.display(), "saved chart");
    }

    if !*config.show() {
        return Ok(());
    }
    if !io::stdout().is_terminal() {
        warn!("stdout is not a terminal, skipping the chart viewer");
        return Ok(());
    }

    let mut app = App::new(vec![performance, return_dist]);
    app.run()?;

    Ok(())
}
