use std::io::{self, stdout, Stdout, Write};

use color_eyre::eyre::Result;
use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream},
    execute, queue,
    terminal::{
        disable_raw_mode, enable_raw_mode, is_raw_mode_enabled, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};

pub type Frame<'a> = ratatui::Frame<'a>;

/// Terminal lifecycle: raw mode, alternate screen, mouse capture and input
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    events: EventStream,
    mouse: bool,
    entered: bool,
}

impl Tui {
    pub fn new() -> Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
        Ok(Self {
            terminal,
            events: EventStream::new(),
            mouse: true,
            entered: false,
        })
    }

    pub fn mouse(mut self, mouse: bool) -> Self {
        self.mouse = mouse;
        self
    }

    pub fn enter(&mut self) -> Result<()> {
        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen, cursor::Hide)?;
        if self.mouse {
            execute!(stdout(), EnableMouseCapture)?;
        }
        self.terminal.clear()?;
        self.entered = true;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        if !self.entered {
            return Ok(());
        }
        self.terminal.flush()?;
        restore()?;
        self.entered = false;
        Ok(())
    }

    pub fn draw(&mut self, f: impl FnOnce(&mut Frame<'_>)) -> Result<()> {
        self.terminal.draw(f)?;
        Ok(())
    }

    /// Next terminal event; `None` once the input stream has ended
    pub async fn next(&mut self) -> Option<std::io::Result<Event>> {
        self.events.next().await
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        if let Err(e) = self.exit() {
            log::error!("Unable to exit Terminal: {e:?}");
        }
    }
}

/// Put the terminal back into cooked mode; safe to call more than once.
///
/// Also used by the panic hook, where mouse capture may still be on.
pub fn restore() -> Result<()> {
    if is_raw_mode_enabled()? {
        leave_screen(&mut stdout())?;
        disable_raw_mode()?;
    }
    Ok(())
}

fn leave_screen<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, DisableMouseCapture, LeaveAlternateScreen, cursor::Show)?;
    out.flush()
}
