mod app;
mod catalog;
mod search;

use std::path::PathBuf;

use clap::Parser;

use crate::app::{LandingApp, LandingOptions};
use crate::catalog::CatalogSource;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// JSON file with the service catalog (defaults to the built-in one)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Seed for the background particle layout
    #[arg(long)]
    seed: Option<u64>,

    /// Start with a static background
    #[arg(long)]
    reduced_motion: bool,

    #[arg(long, default_value_t = 1280.0)]
    width: f32,

    #[arg(long, default_value_t = 860.0)]
    height: f32,
}

fn main() -> eframe::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("ANACOD")
            .with_inner_size([args.width, args.height]),
        ..Default::default()
    };

    let landing = LandingOptions {
        catalog: args
            .catalog
            .map_or(CatalogSource::Embedded, CatalogSource::File),
        seed: args.seed,
        reduced_motion: args.reduced_motion,
    };

    eframe::run_native(
        "anacod-landing",
        options,
        Box::new(move |cc| Ok(Box::new(LandingApp::new(cc, landing)))),
    )
}
