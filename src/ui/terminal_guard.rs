use crossterm::cursor;
use crossterm::terminal::{self, disable_raw_mode, enable_raw_mode};
use crossterm::ExecutableCommand;
use std::io;
use std::sync::Once;

static PANIC_HOOK_SET: Once = Once::new();

/// Raw mode and the alternate screen for as long as the guard lives.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn new() -> Result<Self, io::Error> {
        enable_raw_mode()?;
        io::stdout().execute(terminal::EnterAlternateScreen)?;
        io::stdout().execute(cursor::Hide)?;

        set_panic_hook();

        Ok(TerminalGuard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore();
    }
}

fn restore() {
    let _ = io::stdout().execute(cursor::Show);
    let _ = io::stdout().execute(terminal::LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

fn set_panic_hook() {
    PANIC_HOOK_SET.call_once(|| {
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            restore();
            log::error!("panic: {}", panic_info);
            default_hook(panic_info);
        }));
    });
}
