mod app;

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use app::{App, AppError};
use catalog::{Catalog, demo_catalog};
use formats::EXPORT_FILENAME;

/// Mark named places on a static vector map, lay out their labels without
/// overlap, and export the annotated map as standalone SVG.
#[derive(Parser)]
#[command(name = "annotator", version)]
struct Args {
    /// Base-map SVG asset
    #[arg(long, default_value = "assets/base-map.svg")]
    base_map: PathBuf,

    /// Catalog JSON ({name, lat, lon} records); built-in demo catalog if omitted
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Restore a selection from a shared query string, e.g. "cities=Berlin,Hamburg"
    #[arg(long)]
    restore: Option<String>,

    /// Add a place by exact catalog name (repeatable)
    #[arg(long = "add")]
    add: Vec<String>,

    /// Remove a place by name (repeatable)
    #[arg(long = "remove")]
    remove: Vec<String>,

    /// Print catalog matches for a substring and exit
    #[arg(long)]
    search: Option<String>,

    /// Output path for the annotated SVG
    #[arg(long, short)]
    out: Option<PathBuf>,

    /// Base URL the share link is built on
    #[arg(long, default_value = "https://example.net/map")]
    share_base: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = run(Args::parse()) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let catalog = match &args.catalog {
        Some(path) => Catalog::load(path)?,
        None => demo_catalog(),
    };
    info!(places = catalog.len(), "catalog ready");

    if let Some(query) = &args.search {
        for hit in catalog.search(query) {
            println!("{}\t{:.3}\t{:.3}", hit.name, hit.lat, hit.lon);
        }
        return Ok(());
    }

    // Nothing renders before the asset load resolves; a failure here leaves
    // the application inert, so it is fatal.
    let mut app = App::load(&args.base_map, catalog)?;

    if let Some(query) = &args.restore {
        app.restore_query(query);
    }
    for name in &args.add {
        app.on_add(name);
    }
    for name in &args.remove {
        app.on_remove(name);
    }

    let doc = app.export()?;
    let out = args
        .out
        .clone()
        .unwrap_or_else(|| PathBuf::from(EXPORT_FILENAME));
    std::fs::write(&out, &doc).map_err(AppError::Write)?;
    info!(path = %out.display(), markers = app.markers().len(), "annotated map written");

    // Share delivery is best-effort status output; it never affects the
    // selection or the rendered scene.
    println!("{}", app.share_url(&args.share_base));
    Ok(())
}
