use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use std::process::Command;

const PLATFORM_TOOLS_URL: &str =
    "https://dl.google.com/android/repository/platform-tools-latest-windows.zip";

/// Install ADB with the platform's package manager.
///
/// Returns the `adb` binary to use for the rest of the session.
pub fn install_adb() -> Result<PathBuf> {
    tracing::info!(os = std::env::consts::OS, "installing adb");

    match std::env::consts::OS {
        "linux" => {
            println!("Installing ADB via apt...");
            run("sudo", &["apt", "update"])?;
            run("sudo", &["apt", "install", "-y", "adb"])?;
            Ok(PathBuf::from("adb"))
        }
        "macos" => {
            println!("Installing ADB via Homebrew...");
            if Command::new("brew").arg("--version").output().is_err() {
                bail!("Homebrew not found; install it from https://brew.sh first");
            }
            run("brew", &["install", "android-platform-tools"])?;
            Ok(PathBuf::from("adb"))
        }
        "windows" => {
            std::fs::create_dir_all("temp").context("Failed to create temp directory")?;

            println!("Downloading Android platform-tools...");
            let download = format!(
                "Invoke-WebRequest -Uri '{}' -OutFile 'temp\\platform-tools.zip'",
                PLATFORM_TOOLS_URL
            );
            run("powershell", &["-Command", &download])?;

            println!("Extracting platform-tools...");
            run(
                "powershell",
                &[
                    "-Command",
                    "Expand-Archive -Path 'temp\\platform-tools.zip' -DestinationPath 'temp' -Force",
                ],
            )?;

            let tools = std::env::current_dir()?.join("temp").join("platform-tools");
            println!("ADB installed to {} for this session.", tools.display());
            println!("For permanent installation, add this path to your PATH.");
            Ok(tools.join("adb.exe"))
        }
        other => bail!("Unsupported operating system: {}", other),
    }
}

fn run(program: &str, args: &[&str]) -> Result<()> {
    let status = Command::new(program)
        .args(args)
        .status()
        .with_context(|| format!("Failed to execute: {} {}", program, args.join(" ")))?;

    if !status.success() {
        bail!("{} {} exited with {}", program, args.join(" "), status);
    }
    Ok(())
}
