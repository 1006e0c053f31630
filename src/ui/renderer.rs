use crate::api::{FrankfurterClient, RatesApi};
use crate::config::Config;
use crate::logger::Logger;
use crate::ui::app_component::AppComponent;
use crate::ui::core::{Component, EventHandler, EventType};
use anyhow::Context;
use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::sync::Arc;

/// Set up the terminal, run the event loop and restore the terminal
pub async fn run_app(config: Config) -> anyhow::Result<()> {
    let logger = Logger::from_config(config.logging.enabled)?;
    let client = FrankfurterClient::from_config(&config.api).context("Failed to build HTTP client")?;
    logger.log(format!("Using exchange-rate service at {}", client.base_url()));
    let api: Arc<dyn RatesApi> = Arc::new(client);

    // Setup terminal; the guard undoes it on every exit path from here on
    enable_raw_mode().context("Failed to enable raw mode")?;
    let _guard = TerminalGuard::new(restore_terminal);
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppComponent::new(api, &config, logger);
    let mut event_handler = EventHandler::new();

    // Currency list loads in the background while the form is already usable
    app.start();

    run_app_loop(&mut terminal, &mut app, &mut event_handler).await
}

/// Runs `restore` when dropped
struct TerminalGuard<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> TerminalGuard<F> {
    fn new(restore: F) -> Self {
        Self { restore }
    }
}

impl<F: FnMut()> Drop for TerminalGuard<F> {
    fn drop(&mut self) {
        (self.restore)();
    }
}

fn restore_terminal() {
    if let Err(e) = disable_raw_mode() {
        log::warn!("Failed to disable raw mode: {}", e);
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
        log::warn!("Failed to leave alternate screen: {}", e);
    }
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> anyhow::Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render {
            terminal.draw(|f| {
                let area = f.area();
                app.render(f, area);
            })?;
            needs_render = false;
        }

        let event = event_handler.next_event().await?;

        match event {
            EventType::Key(_) | EventType::Resize(_, _) => {
                app.handle_event(event);
                needs_render = true;
            }
            EventType::Tick => {
                // Results from background tasks are applied here, on the UI task
                if app.apply_background_actions() {
                    needs_render = true;
                }
            }
            EventType::Other => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
