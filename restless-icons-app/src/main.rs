//! `brand-export-icons`: regenerate the Restless logo exports.
//!
//! Reads `assets/brand/logo/restless_logo_B.svg` under the current directory
//! and writes PNG rasters, `restless.ico`, and `macos.iconset/` beneath
//! `assets/brand/logo/exports/`. Takes no arguments.

mod app_dir;

use std::error::Error;
use std::process::ExitCode;

use tracing::{error, info};

use restless_icons_core::ExportLayout;
use restless_icons_render::export_icons;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let layout = ExportLayout::new(app_dir::project_root());
    info!("Project root: {}", layout.root().display());

    match export_icons(&layout) {
        Ok(summary) => {
            info!(
                "Wrote {} rasters, 1 ICO, {} iconset files in {:.2?}",
                summary.rasters.len(),
                summary.iconset.len(),
                summary.elapsed
            );
            println!("✅ Exported: {}", summary.exports_dir.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Export failed: {}", error_chain(&e));
            ExitCode::FAILURE
        }
    }
}

/// `outer: inner: root` rendering of an error and its sources.
fn error_chain(e: &dyn Error) -> String {
    let mut out = e.to_string();
    let mut source = e.source();
    while let Some(inner) = source {
        out.push_str(": ");
        out.push_str(&inner.to_string());
        source = inner.source();
    }
    out
}
