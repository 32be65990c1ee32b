use std::io;
use std::panic;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

/// Concrete terminal type used by the runtime.
pub type AppTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Owns the terminal for one game run: raw mode, alternate screen, hidden
/// cursor, and a panic hook that restores all three before a panic prints.
///
/// Restoration also runs best-effort on drop, so `main` can return errors
/// freely once a session exists.
pub struct TerminalSession {
    terminal: AppTerminal,
}

impl TerminalSession {
    /// Claims the terminal and installs the restoring panic hook.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;

        let claimed = execute!(io::stdout(), EnterAlternateScreen, Hide)
            .and_then(|()| Terminal::new(CrosstermBackend::new(io::stdout())));

        match claimed {
            Ok(terminal) => {
                install_restore_hook();
                Ok(Self { terminal })
            }
            Err(error) => {
                restore_terminal();
                Err(error)
            }
        }
    }

    /// Returns mutable access to the inner ratatui terminal.
    pub fn terminal_mut(&mut self) -> &mut AppTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore_terminal();
    }
}

/// Chains terminal restoration in front of the default panic hook so the
/// panic message lands on a usable screen.
fn install_restore_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        default_hook(panic_info);
    }));
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
}
