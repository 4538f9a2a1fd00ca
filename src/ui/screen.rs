use crate::ui::{self, FrameView};
use anyhow::Result;
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout, Write};

/// Where the render loop puts its frames.
pub trait Screen {
    fn clear(&mut self) -> Result<()>;
    fn present(&mut self, view: &FrameView) -> Result<()>;
}

/// Full-screen terminal session.
///
/// Raw mode, the alternate screen and the hidden cursor are undone on drop,
/// including during a panic unwind.
pub struct TuiScreen {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TuiScreen {
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }

        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        tracing::debug!("terminal session started");
        Ok(Self { terminal })
    }
}

impl Screen for TuiScreen {
    fn clear(&mut self) -> Result<()> {
        self.terminal.clear()?;
        Ok(())
    }

    fn present(&mut self, view: &FrameView) -> Result<()> {
        self.terminal.draw(|f| ui::draw(f, view))?;
        Ok(())
    }
}

impl Drop for TuiScreen {
    fn drop(&mut self) {
        restore_terminal();
        tracing::debug!("terminal restored");
    }
}

/// Show the cursor and leave the alternate screen.
fn leave_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, Show, LeaveAlternateScreen)
}

/// Undo [`TuiScreen::new`]. Safe to call more than once.
pub fn restore_terminal() {
    let _ = leave_screen(&mut io::stdout());
    let _ = disable_raw_mode();
}

/// Restore the terminal before the existing panic hook runs, so its report
/// lands on the normal screen instead of the alternate one.
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        previous(info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn test_leave_screen_shows_cursor_and_leaves_alternate_screen() {
        let mut out = Vec::new();
        leave_screen(&mut out).unwrap();
        let written = String::from_utf8(out).unwrap();

        let show = written.find("\x1b[?25h").expect("cursor not shown");
        let leave = written.find("\x1b[?1049l").expect("alternate screen not left");
        assert!(show < leave);
    }
}
