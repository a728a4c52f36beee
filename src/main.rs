// weatherfolio - a terminal developer portfolio
// The whole page follows one weather mode: winter, summer or rain

mod app;
mod content;
mod effects;
mod theme;
mod ui;

use anyhow::{Context, Result};
use app::{
    config::{LOG_FILE_ENV, LOG_LEVEL_ENV},
    event::{handle_key_event, handle_mouse_event},
    AppState,
};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{fs::File, io, sync::Mutex, time::Instant};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    init_logging()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "weatherfolio exited with an error");
        println!("Error: {:?}", err);
    }
    Ok(())
}

/// Log to the file named by FOLIO_LOG; the terminal belongs to the UI
fn init_logging() -> Result<()> {
    let Some(path) = std::env::var_os(LOG_FILE_ENV) else {
        return Ok(());
    };
    let file = File::create(&path)
        .with_context(|| format!("cannot open log file {}", path.to_string_lossy()))?;
    let filter = EnvFilter::try_from_env(LOG_LEVEL_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "weatherfolio starting");
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>) -> Result<()> {
    let mut app = AppState::new()?;
    loop {
        app.on_tick();

        // One read per frame; every section renders from this palette
        let palette = app.palette()?;
        let render_start = Instant::now();
        terminal.draw(|f| ui::draw(f, &mut app, palette))?;
        app.update_frame_time(render_start.elapsed());

        if !app.running {
            return Ok(());
        }

        if event::poll(app.refresh_config.ui_interval())? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handle_key_event(&mut app, key.code)?;
                }
                Event::Mouse(mouse) => handle_mouse_event(&mut app, mouse)?,
                _ => {}
            }
        }
    }
}
