use std::{
    io::stdout,
    panic,
    path::Path,
    sync::{
        atomic::{AtomicBool, Ordering},
        mpsc, Arc,
    },
    time::Duration,
};

use anyhow::{Context, Result};
use crossterm::{
    event::{EnableBracketedPaste, EnableMouseCapture},
    execute,
    terminal::{enable_raw_mode, EnterAlternateScreen},
};
use shoplist::{
    app::App,
    canvas::Painter,
    check_if_terminal, cleanup_terminal,
    constants::TICK_RATE_IN_MILLISECONDS,
    create_input_thread,
    event::{handle_key_event_or_break, handle_mouse_event, ListEvent},
    options::{args, get_config_path, get_or_create_config, init_app},
    panic_hook, try_drawing,
};
use tui::{backend::CrosstermBackend, Terminal};

/// Runs the event loop until the user quits. Every event is handled on this
/// thread, and the screen is redrawn after each one.
fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App, painter: &Painter,
    receiver: &mpsc::Receiver<ListEvent>,
) -> Result<()> {
    try_drawing(terminal, app, painter)?;

    loop {
        let Ok(recv) = receiver.recv_timeout(Duration::from_millis(TICK_RATE_IN_MILLISECONDS))
        else {
            continue;
        };

        match recv {
            ListEvent::Resize => {
                app.recreate_screen()?;
            }
            ListEvent::KeyInput(event) => {
                if handle_key_event_or_break(event, app) {
                    break;
                }
            }
            ListEvent::MouseInput(event) => {
                handle_mouse_event(event, app);
            }
            ListEvent::PasteEvent(paste) => {
                app.on_paste(&paste);
            }
            ListEvent::Terminate => {
                break;
            }
        }

        try_drawing(terminal, app, painter)?;
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = args::get_args();

    #[cfg(all(feature = "logging", debug_assertions))]
    {
        if let Err(err) = shoplist::utils::logging::init_logger(
            log::LevelFilter::Debug,
            Some(std::ffi::OsStr::new("debug.log")),
        ) {
            println!("Issue initializing logger: {err}");
        }
    }

    let config_path = get_config_path(args.general.config_location.as_deref().map(Path::new));
    let config = get_or_create_config(config_path.as_deref(), args.general.no_write)
        .context("Unable to properly parse or create the config file.")?;

    let (mut app, painter) = init_app(&args, &config)?;
    shoplist::info!("Starting up.");

    check_if_terminal();

    // Set up tui and crossterm
    let mut stdout_val = stdout();
    execute!(
        stdout_val,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    enable_raw_mode()?;

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout_val))?;
    terminal.clear()?;
    terminal.hide_cursor()?;

    // Set panic hook
    panic::set_hook(Box::new(panic_hook));

    // Set up input handling and the termination hook.
    let cancellation_token = Arc::new(AtomicBool::new(false));
    let (sender, receiver) = mpsc::channel();
    let _input_thread = create_input_thread(sender.clone(), cancellation_token.clone());
    ctrlc::set_handler(move || {
        let _ = sender.send(ListEvent::Terminate);
    })?;

    let result = run_event_loop(&mut terminal, &mut app, &painter, &receiver);

    // Tear down, even if the loop failed.
    cancellation_token.store(true, Ordering::SeqCst);
    cleanup_terminal(&mut terminal)?;
    result?;

    // The in-memory store goes away with the process; this is the teardown save.
    app.save_state()?;
    shoplist::info!("Shutting down.");

    Ok(())
}
