use std::io::{self, Write};

const BANNER: &str = r"
    ___    ____  ____        __  ___           _
   /   |  / __ \/ __ )      /  |/  /_  _______(_)____
  / /| | / / / / __  |     / /|_/ / / / / ___/ / ___/
 / ___ |/ /_/ / /_/ /     / /  / / /_/ (__  ) / /__
/_/  |_/_____/_____/_____/_/  /_/\__,_/____/_/\___/
                  /_____/
";

/// Splash shown before device selection.
pub fn write_welcome<W: Write>(mut out: W) -> io::Result<()> {
    writeln!(out, "{}", BANNER)?;
    writeln!(out, "\nWelcome to ADB Music Player!")?;
    writeln!(
        out,
        "This application allows you to control music playback on your Android device."
    )
}

pub fn write_instructions<W: Write>(mut out: W, device_id: &str) -> io::Result<()> {
    writeln!(out, "\nStarting music visualization for device: {}", device_id)?;
    writeln!(out, "Please ensure music is playing on your device for the best experience.")?;
    writeln!(out, "Use keyboard controls to interact with the player.")
}
