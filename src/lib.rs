//! A small terminal shopping list. Type an article, add it with enter or the
//! `+` button, and click (or select and press enter on) an article to remove
//! it.
//!
//! The list and the draft survive the screen being recreated on a terminal
//! resize, through a [`SnapshotStore`](app::snapshot::SnapshotStore).

pub mod app;
pub mod canvas;
pub mod constants;
pub mod event;
pub mod options;
pub mod utils {
    pub mod logging;
}

use std::{
    io::{stderr, stdout, Stdout, Write},
    panic::PanicHookInfo,
    sync::{
        atomic::{AtomicBool, Ordering},
        mpsc::Sender,
        Arc,
    },
    thread::{self, JoinHandle},
    time::Duration,
};

use app::App;
use canvas::Painter;
use crossterm::{
    event::{
        poll, read, DisableBracketedPaste, DisableMouseCapture, Event, MouseEventKind,
    },
    execute,
    style::Print,
    terminal::{disable_raw_mode, LeaveAlternateScreen},
};
use event::ListEvent;
use tui::{backend::CrosstermBackend, Terminal};

/// Warns the user if stdout is not a terminal.
pub fn check_if_terminal() {
    use crossterm::tty::IsTty;

    if !stdout().is_tty() {
        eprintln!(
            "Warning: shoplist is not being output to a terminal. Things might not work properly."
        );
        eprintln!("If you're stuck, press 'Esc' or 'Ctrl-c' to quit the program.");
        let _ = stderr().flush();
        thread::sleep(Duration::from_secs(1));
    }
}

/// Restores the terminal to how it was before we started.
pub fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    Ok(())
}

/// Based on <https://github.com/Rigellute/spotify-tui/blob/master/src/main.rs>
pub fn panic_hook(panic_info: &PanicHookInfo<'_>) {
    let mut stdout = stdout();

    let msg = match panic_info.payload().downcast_ref::<&'static str>() {
        Some(s) => *s,
        None => match panic_info.payload().downcast_ref::<String>() {
            Some(s) => &s[..],
            None => "Box<Any>",
        },
    };

    let backtrace = format!("{:?}", backtrace::Backtrace::new());

    let _ = disable_raw_mode();
    let _ = execute!(
        stdout,
        DisableBracketedPaste,
        DisableMouseCapture,
        LeaveAlternateScreen
    );

    // Print stack trace. Must be done after!
    if let Some(location) = panic_info.location() {
        let _ = execute!(
            stdout,
            Print(format!(
                "thread '<unnamed>' panicked at '{msg}', {location}\n\r{backtrace}",
            )),
        );
    }
}

/// Draws the screen.
pub fn try_drawing(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App, painter: &Painter,
) -> anyhow::Result<()> {
    terminal.draw(|f| painter.draw_screen(f, app))?;

    Ok(())
}

/// Spawns a thread that reads terminal events and passes them on to the main
/// thread, until `cancellation_token` is set or the receiver is gone.
pub fn create_input_thread(
    sender: Sender<ListEvent>, cancellation_token: Arc<AtomicBool>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        while !cancellation_token.load(Ordering::SeqCst) {
            let Ok(true) = poll(Duration::from_millis(20)) else {
                continue;
            };

            let list_event = match read() {
                Ok(Event::Resize(_, _)) => ListEvent::Resize,
                Ok(Event::Paste(paste)) => ListEvent::PasteEvent(paste),
                Ok(Event::Key(key)) => ListEvent::KeyInput(key),
                Ok(Event::Mouse(mouse)) => match mouse.kind {
                    MouseEventKind::Moved | MouseEventKind::Drag(..) => continue,
                    _ => ListEvent::MouseInput(mouse),
                },
                Ok(_) => continue,
                Err(_err) => {
                    crate::warn!("Failed to read a terminal event: {_err}");
                    continue;
                }
            };

            if sender.send(list_event).is_err() {
                break;
            }
        }
    })
}
