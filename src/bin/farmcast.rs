//! farmcast - weather, forecast and flood advisory report for a farm location.

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::Parser;
use farmcast::{
    AnalysisRequest, AnalysisRun, ClientConfig, DateRange, DischargeStats, Farmcast,
};
use log::warn;

const DEFAULT_LATITUDE: f64 = 28.6139;
const DEFAULT_LONGITUDE: f64 = 77.2090;
const DEFAULT_LOOKBACK_DAYS: u64 = 365;

#[derive(Parser)]
#[command(
    name = "farmcast",
    version,
    about = "Weather history, forecast, extreme events and flood risk report for a farm"
)]
struct Cli {
    /// Region name shown in the report header
    #[arg(long, default_value = "My Farm")]
    region: String,

    /// Detect the location from the network origin; falls back to --lat/--lon
    #[arg(long)]
    auto_locate: bool,

    #[arg(long, default_value_t = DEFAULT_LATITUDE, allow_negative_numbers = true)]
    lat: f64,

    #[arg(long, default_value_t = DEFAULT_LONGITUDE, allow_negative_numbers = true)]
    lon: f64,

    /// First day of the historical window (YYYY-MM-DD), defaults to a year before --end
    #[arg(long)]
    start: Option<NaiveDate>,

    /// Last day of the historical window (YYYY-MM-DD), defaults to today
    #[arg(long)]
    end: Option<NaiveDate>,

    /// Forecast horizon in days
    #[arg(long, default_value_t = farmcast::DEFAULT_FORECAST_DAYS)]
    forecast_days: u32,

    /// Print the normalized daily tables used for charts
    #[arg(long)]
    tables: bool,

    #[arg(long, default_value = farmcast::DEFAULT_ARCHIVE_URL)]
    archive_url: String,

    #[arg(long, default_value = farmcast::DEFAULT_FORECAST_URL)]
    forecast_url: String,

    #[arg(long, default_value = farmcast::DEFAULT_FLOOD_URL)]
    flood_url: String,

    #[arg(long, default_value = farmcast::DEFAULT_GEOLOCATION_URL)]
    geolocation_url: String,
}

impl Cli {
    fn date_range(&self) -> anyhow::Result<DateRange> {
        let end = self.end.unwrap_or_else(|| Local::now().date_naive());
        match self.start {
            Some(start) => Ok(DateRange::new(start, end)?),
            None => DateRange::trailing(end, DEFAULT_LOOKBACK_DAYS)
                .context("End date is too early to look back a full year"),
        }
    }

    fn config(&self) -> ClientConfig {
        ClientConfig::builder()
            .archive_url(self.archive_url.as_str())
            .forecast_url(self.forecast_url.as_str())
            .flood_url(self.flood_url.as_str())
            .geolocation_url(self.geolocation_url.as_str())
            .forecast_days(self.forecast_days)
            .build()
    }
}

fn print_run(run: &AnalysisRun, show_tables: bool) {
    for notice in &run.notices {
        println!("{}", notice);
    }

    println!(
        "\nExtreme events: heatwave={} drought={} heavy_rain={}",
        run.extremes.heatwave_days, run.extremes.drought_days, run.extremes.heavy_rain_days
    );

    if let Some(stats) = run.flood.payload().and_then(DischargeStats::from_payload) {
        println!(
            "Flood outlook: {} (peak {:.1} m³/s)",
            stats.risk(),
            stats.maximum
        );
    }

    if let Some(bands) = &run.temperature_bands {
        println!("\nTemperature distribution (history):");
        for band in bands {
            println!("  {:<20} {:>4} days", band.band.label(), band.days);
        }
    }

    if let Some(crops) = &run.crop_suitability {
        println!("\nCrop suitability:");
        for share in crops {
            println!("  {:<10} {:>3}%", share.crop.to_string(), share.suitability);
        }
    }

    if show_tables {
        if let Some(historical) = &run.historical {
            println!("\nHistorical weather:\n{}", historical.frame);
        }
        if let Some(forecast) = &run.forecast {
            println!("\nForecast:\n{}", forecast.frame);
        }
        if let Some(flood) = &run.flood_frame {
            println!("\nRiver discharge:\n{}", flood.frame);
            if let Some(peak) = flood.max_discharge() {
                println!("Peak discharge: {:.1} m³/s", peak);
            }
        }
    }

    println!("\n{}", run.report);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let client = Farmcast::with_config(cli.config())?;
    let date_range = cli.date_range()?;

    let mut region = cli.region.clone();
    let (mut lat, mut lon) = (cli.lat, cli.lon);
    if cli.auto_locate {
        match client.locate().await {
            Some(found) => {
                println!("Detected location → {} {}", found.city, found.coordinates);
                lat = found.coordinates.latitude();
                lon = found.coordinates.longitude();
                region = found.city;
            }
            None => warn!(
                "Could not detect location automatically, using ({}, {})",
                lat, lon
            ),
        }
    }

    let request = AnalysisRequest::new(
        region,
        lat,
        lon,
        date_range.start(),
        date_range.end(),
    )?;
    let run = client.analyze(&request).await;
    print_run(&run, cli.tables);
    Ok(())
}
