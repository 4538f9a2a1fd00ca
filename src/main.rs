use adb_music::app::cli::Args;
use adb_music::app::config::{AppConfig, Settings};
use adb_music::app::{terminal_events, StopReason, Visualizer};
use adb_music::device::{install, select_device, AdbChannel, DeviceChannel};
use adb_music::logging;
use adb_music::ui::{banner, screen, TuiScreen};
use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::sync::Arc;

/// Resolves on SIGINT, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    human_panic::setup_panic!();
    screen::install_panic_hook();

    let args = Args::parse();

    if args.generate_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let _log_guard = logging::try_init_logging(&AppConfig::get_log_dir(), args.verbose);

    let config = AppConfig::load();
    let settings = Settings::resolve(&config, &args).context("Invalid settings")?;
    tracing::debug!(?settings, "settings resolved");

    banner::write_welcome(io::stdout())?;

    let mut adb = AdbChannel::new(settings.adb_path.clone());
    if !adb.is_installed() {
        println!("\nADB is not installed. Installing...");
        match install::install_adb() {
            Ok(path) => adb = AdbChannel::new(path),
            Err(e) => {
                tracing::error!("adb installation failed: {:#}", e);
                println!("Failed to install ADB. Please install it manually.");
                return Ok(());
            }
        }
    }

    let device_id = match args.device.clone() {
        Some(serial) => Some(serial),
        None => {
            println!("\nLooking for connected devices...");
            let devices = adb.devices().unwrap_or_else(|e| {
                tracing::error!("listing devices failed: {}", e);
                println!("Error getting connected devices: {}", e);
                Vec::new()
            });
            select_device(&devices, io::stdin().lock(), io::stdout())?
        }
    };

    let Some(device_id) = device_id else {
        println!("No device selected. Exiting.");
        return Ok(());
    };

    banner::write_instructions(io::stdout(), &device_id)?;
    tokio::time::sleep(settings.startup_delay).await;

    tracing::info!(adb = %adb.binary().display(), device = %device_id, "starting session");
    let channel: Arc<dyn DeviceChannel> = Arc::new(adb);
    let mut visualizer = Visualizer::new(settings, device_id, channel);

    let reason = {
        let mut screen = TuiScreen::new().context("Failed to set up the terminal")?;
        visualizer
            .run(&mut screen, terminal_events(), shutdown_signal())
            .await?
    };

    if reason == StopReason::Interrupted {
        tracing::info!("stopped by interrupt");
    }
    println!("Music visualization stopped.");

    Ok(())
}
