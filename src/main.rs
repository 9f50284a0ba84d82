use clap::Parser;
use color_eyre::Result;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use msm_inspector::export::{export_json, export_units_csv};
use msm_inspector::parser::load_inventory;
use msm_inspector::ui::App;

#[derive(Parser, Debug)]
#[command(name = "msm-inspector")]
#[command(about = "Industrial park inventory inspector - browse blocks and units from sales exports")]
#[command(version)]
struct Args {
    /// Directory holding the CSV source exports
    #[arg(default_value = "data")]
    data_dir: PathBuf,

    /// Export the unit list to CSV (optional output path)
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Export the full inventory to JSON (optional output path)
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();

    let inventory = load_inventory(&args.data_dir);

    if let Some(csv_path) = &args.csv {
        export_units_csv(&inventory, csv_path)?;
        println!("Exported to CSV: {}", csv_path.display());
    }

    if let Some(json_path) = &args.json {
        export_json(&inventory, json_path)?;
        println!("Exported to JSON: {}", json_path.display());
    }

    if args.csv.is_some() || args.json.is_some() {
        return Ok(());
    }

    let terminal = ratatui::init();
    let result = App::new(inventory).run(terminal);
    ratatui::restore();
    result
}
