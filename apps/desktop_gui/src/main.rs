mod controller;
mod ui;

use clap::Parser;
use content::Catalog;
use eframe::egui;

use crate::controller::events::Route;
use crate::ui::{PortfolioApp, StartupConfig};

#[derive(Parser, Debug)]
struct Args {
    /// View to open at startup.
    #[arg(long, value_enum, default_value = "home")]
    page: Route,
    /// Tracing env-filter directive.
    #[arg(long, default_value = "info")]
    log_filter: String,
}

fn main() -> eframe::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(args.log_filter.clone())
        .init();

    let catalog = Catalog::built_in();
    if let Err(err) = catalog.validate() {
        tracing::error!(%err, "built-in catalog failed validation");
        std::process::exit(2);
    }

    let title = format!("{} // Product Engineering System", catalog.profile.full_name());
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title.clone())
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([980.0, 640.0]),
        ..Default::default()
    };
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            Ok(Box::new(PortfolioApp::new(
                cc,
                StartupConfig {
                    start_route: args.page,
                    catalog,
                },
            )))
        }),
    )
}
