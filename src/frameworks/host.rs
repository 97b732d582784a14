// Framework bootstrap for the headless tool host.

use crate::domain::ToolSettings;
use crate::frameworks::config::{self, ConfigOrigin};
use crate::interface_adapters::hints::TracingHints;
use crate::interface_adapters::inventory::InMemoryInventory;
use crate::interface_adapters::permissions::AllowList;
use crate::interface_adapters::protocol;
use crate::interface_adapters::scene::InMemoryScene;
use crate::use_cases::{ToolGun, tool_task};

use glam::DVec3;
use std::{io::Result, sync::Arc};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::{Notify, mpsc};

pub type HeadlessTool = ToolGun<InMemoryScene, TracingHints, AllowList, InMemoryInventory>;

fn init_runtime(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

/// Builds the tool over a scene with a ground slab whose top face is y = 0.
pub fn build_tool(settings: ToolSettings, admins: AllowList) -> HeadlessTool {
    let mut scene = InMemoryScene::new();
    scene.add_box(
        DVec3::new(0.0, -0.5, 0.0),
        DVec3::new(64.0, 0.5, 64.0),
        None,
    );
    ToolGun::new(
        settings,
        scene,
        TracingHints,
        admins,
        InMemoryInventory::default(),
    )
}

/// Feeds newline-delimited JSON host messages to the tool until input ends
/// or can no longer be read, then waits for the tool task to stop.
pub async fn run<R>(tool: HeadlessTool, input: R) -> Result<HeadlessTool>
where
    R: AsyncBufRead + Unpin,
{
    let (events_tx, events_rx) = mpsc::channel(config::EVENT_CHANNEL_CAPACITY);
    let shutdown = Arc::new(Notify::new());
    let task = tokio::spawn(tool_task(events_rx, tool, shutdown.clone()));

    let mut lines = input.lines();
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        let line = tokio::select! {
            line = lines.next_line() => line,
            _ = &mut ctrl_c => {
                tracing::info!("interrupted");
                shutdown.notify_one();
                break;
            }
        };
        let line = match line {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                // Unreadable input ends the session like EOF does.
                tracing::error!(error = %e, "reading host input failed");
                break;
            }
        };

        match protocol::decode_line(&line) {
            Ok(Some(event)) => {
                if events_tx.send(event).await.is_err() {
                    tracing::warn!("tool task closed; remaining input ignored");
                    break;
                }
            }
            Ok(None) => {}
            Err(e) => tracing::warn!(error = %e, "malformed host message ignored"),
        }
    }

    drop(events_tx);
    task.await.map_err(std::io::Error::other)
}

pub async fn run_with_config() -> Result<()> {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();

    let path = config::config_path();
    let loaded = config::load_or_create(&path)?;
    init_runtime(loaded.config.debug);

    match loaded.origin {
        ConfigOrigin::Created => tracing::info!(path = %path.display(), "config created"),
        ConfigOrigin::Loaded => tracing::info!(path = %path.display(), "config loaded"),
    }
    for key in &loaded.ignored {
        tracing::warn!(key = %key, "config value unreadable; default kept");
    }

    let settings = ToolSettings::try_from(loaded.config).map_err(|e| {
        tracing::error!(path = %path.display(), error = %e, "invalid config");
        std::io::Error::other(format!("invalid config {}: {e}", path.display()))
    })?;

    let admins = AllowList::parse(settings.permission.clone(), &config::admin_list());
    if admins.is_empty() {
        tracing::warn!("TOOLGUN_ADMINS is empty; nobody holds the tool permission");
    }
    tracing::debug!(
        grid_size = settings.grid.get(),
        raycast_distance = settings.raycast_distance,
        build_template = ?settings.build_template,
        admins = admins.len(),
        "tool configured"
    );

    let tool = build_tool(settings, admins);
    let tool = run(tool, BufReader::new(tokio::io::stdin())).await?;
    tracing::info!(objects = tool.scene.len(), "host finished");
    Ok(())
}
