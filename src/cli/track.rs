//! `track` command: demo table plus a live budget analysis

use std::sync::Arc;

use crate::cli::{output, resolve_config, TrackArgs};
use crate::gateway::AnalysisGateway;
use crate::panels::tracker::{TrackerForm, TrackerPanel};
use crate::render::registry::VisualizationRegistry;

pub async fn run_track(args: TrackArgs) -> anyhow::Result<()> {
    let config = resolve_config(&args.config, &args.base_url)?;
    crate::logging::init(&config.logging);

    let gateway = Arc::new(AnalysisGateway::new(config.service.base_url.clone()));
    let registry = Arc::new(VisualizationRegistry::new());
    let panel = TrackerPanel::new(gateway, registry);

    println!("{}", output::format_tracker_table(&panel.view()));

    let form = TrackerForm {
        income: args.income.map(|i| i.to_string()).unwrap_or_default(),
        ..Default::default()
    };
    match panel.analyze(&form).await {
        Ok(()) => {
            let view = panel.view();
            println!("{}", output::format_tracker_metrics(&view));
            for item in &view.recommendations {
                println!("  {}", output::format_rec_item(item));
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", output::format_notice(&e.to_string()));
            std::process::exit(1);
        }
    }
}
