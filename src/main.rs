//! Form Builder TUI - assemble form fields in the terminal
//!
//! A Ratatui-based TUI for adding text, radio and checkbox fields,
//! editing their labels, placeholders and options, and reordering them
//! by dragging.

mod app;
mod cli;
mod config;
mod platform;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use clap::Parser;
use cli::Cli;
use config::BuilderConfig;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // A broken config file should not keep the builder from starting
    let (config, config_error) = match BuilderConfig::load() {
        Ok(config) => (config, None),
        Err(err) => (BuilderConfig::default(), Some(err)),
    };

    // Initialize logging
    let filter = match cli.log_filter.as_deref() {
        Some(directive) => tracing_subscriber::EnvFilter::new(directive),
        None => tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| config.log_filter().into()),
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    if let Some(err) = config_error {
        tracing::warn!("Ignoring unreadable config: {err:#}");
    }

    // Seed fields before touching the terminal so a bad type name prints cleanly
    let mut app = App::new(&config);
    for name in &cli.fields {
        app.state.store.add_field_named(name)?;
    }

    // Setup terminal
    let mouse_capture = config.mouse_capture();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse_capture {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    if mouse_capture {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    tracing::info!(fields = app.state.store.len(), "form builder closed");
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        let term_size = terminal.size()?;
        app.terminal_size = Some((term_size.height, term_size.width));

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                // Ignore key releases on platforms that report them
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key)?,
                Event::Mouse(mouse) => app.handle_mouse(mouse)?,
                Event::Resize(_width, _height) => {
                    // Card layout is recalculated on next draw
                }
                _ => {}
            }
        }

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
