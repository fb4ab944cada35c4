//! FormBridge command-line driver
//!
//! Runs one action against the configured backend using a form snapshot in
//! place of the browser page, then prints what the page would show.
//!
//! Usage: `form-bridge <action|button-id> [form-snapshot.toml]`

use std::path::Path;
use std::sync::Arc;
use anyhow::Context;
use tracing::{info, error};

use FormBridge::{
    bridge::{Action, Bridge, Outcome},
    config::Settings,
    document::{FormSnapshot, MemoryDocument},
    services::ReqwestClient,
    utils::logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let (action, snapshot) = parse_args(std::env::args().skip(1))?;

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {} against {}", FormBridge::info(), settings.api.base_url);

    let http = Arc::new(ReqwestClient::new(&settings.api)?);
    let document = Arc::new(MemoryDocument::from_snapshot(&snapshot));
    let bridge = Bridge::from_settings(&settings, http, document.clone());

    let outcome = bridge.dispatch(action).await;

    for alert in document.alerts() {
        println!("[alert] {}", alert);
    }
    for list_id in document.list_ids() {
        let items = document.list(&list_id).unwrap_or_default();
        if items.is_empty() {
            continue;
        }
        println!("[{}]", list_id);
        for item in items {
            println!("  - {}", item);
        }
    }
    if let Some(page) = document.current_page() {
        println!("[navigate] {}", page);
    }

    if let Outcome::Failed(reason) = outcome {
        error!(action = %action, reason = %reason, "Action failed");
        anyhow::bail!("{} failed: {}", action, reason);
    }

    info!(action = %action, "Action completed");
    Ok(())
}

/// Resolve `<action|button-id> [form-snapshot.toml]`
fn parse_args<I>(args: I) -> anyhow::Result<(Action, FormSnapshot)>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let action_arg = args.next().context(usage())?;
    let action: Action = action_arg.parse()?;
    let snapshot = match args.next() {
        Some(path) => MemoryDocument::load_snapshot(Path::new(&path))?,
        None => FormSnapshot::default(),
    };
    Ok((action, snapshot))
}

fn usage() -> String {
    let names: Vec<&str> = Action::ALL.iter().map(|action| action.name()).collect();
    format!(
        "usage: form-bridge <action|button-id> [form-snapshot.toml]\nactions: {}",
        names.join(", ")
    )
}
