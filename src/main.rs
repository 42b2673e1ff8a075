use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, time::Duration};
use tokio::sync::mpsc;

mod app;
mod handlers;
mod ui;

use foliotui::api::RelayClient;
use foliotui::config::{self, Config};
use foliotui::model::{Command, Model};
use foliotui::pages::Page;
use foliotui::services::{self, FeedRequest, FeedResponse};
use foliotui::{logging, utils, DisplayMode};

/// Terminal portfolio
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to <tmp>/foliotui-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Start in light mode
    #[arg(long)]
    light: bool,

    /// Page to show at startup (about, education, work, projects, resume, blogs, research, contact)
    #[arg(short, long)]
    page: Option<String>,
}

/// Runtime state: the pure model plus the channels and settings that do I/O
pub struct App {
    pub model: Model,

    /// Requests to the feed service
    feed_tx: mpsc::UnboundedSender<FeedRequest>,

    /// Completed aggregation cycles
    feed_rx: mpsc::UnboundedReceiver<FeedResponse>,

    /// Feed URLs aggregated on the Blogs page
    pub feed_sources: Vec<String>,

    /// Command used to open links
    pub open_command: Option<String>,

    pub resume_path: String,
    pub contact_link: String,
}

impl App {
    fn new(config: Config, start: Page, mode: DisplayMode) -> Result<Self> {
        let relay = RelayClient::new(
            config.relay_url.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )?;
        let (feed_tx, feed_rx) = services::spawn_feed_service(relay);

        let mut app = Self {
            model: Model::new(start, mode),
            feed_tx,
            feed_rx,
            feed_sources: config.feed_sources,
            open_command: config.open_command,
            resume_path: config.resume_path,
            contact_link: config.contact_link,
        };

        let command = app.model.mount_selected();
        app.run_command(command);
        Ok(app)
    }

    /// Perform the side effect a model transition asked for
    pub fn run_command(&mut self, command: Option<Command>) {
        if let Some(Command::FetchFeeds { token }) = command {
            let request = FeedRequest {
                token,
                sources: self.feed_sources.clone(),
            };
            if self.feed_tx.send(request).is_err() {
                log::error!("feed service is gone, cannot fetch (token {})", token);
            }
        }
    }
}

/// Resolve the startup page: CLI flag, then config, then About
fn resolve_start_page(cli_page: Option<&str>, config_page: &str) -> Page {
    for id in cli_page.into_iter().chain(std::iter::once(config_page)) {
        match Page::from_id(id) {
            Some(page) => return page,
            None => log::warn!("ignoring unknown start page '{}'", id),
        }
    }
    Page::About
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // Keep the handle alive until exit so the log gets flushed
    let _logger = logging::init(args.debug)?;
    if args.debug {
        log::debug!("Debug mode enabled, logging to {}", utils::get_debug_log_path().display());
    }

    // Load configuration (defaults when no file exists)
    let (config, config_path) = config::load_config(args.config.as_deref())?;
    match &config_path {
        Some(path) => log::debug!("Loaded config from {:?}", path),
        None => log::debug!("No config file found, using defaults"),
    }

    // Override config with CLI flags
    let mode = if args.light || config.light_mode {
        DisplayMode::Light
    } else {
        DisplayMode::Dark
    };
    let start = resolve_start_page(args.page.as_deref(), &config.start_page);

    // Initialize app
    let mut app = App::new(config, start, mode)?;

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Always render (Elm Architecture approach)
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        // Auto-dismiss toast
        if app.model.should_dismiss_toast() {
            app.model.dismiss_toast();
        }

        if app.model.ui.should_quit {
            break;
        }

        // Process feed responses (non-blocking)
        while let Ok(response) = app.feed_rx.try_recv() {
            handlers::handle_feed_response(app, response);
        }

        // Poll for input; the timeout keeps feed results and toasts flowing
        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                // Only react to presses (Windows also reports releases)
                if key.kind == KeyEventKind::Press {
                    handlers::handle_key(app, key);
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_start_page_prefers_cli() {
        assert_eq!(resolve_start_page(Some("blogs"), "work"), Page::Blogs);
    }

    #[test]
    fn test_resolve_start_page_skips_unknown() {
        assert_eq!(resolve_start_page(Some("nope"), "work"), Page::Work);
        assert_eq!(resolve_start_page(None, "nope"), Page::About);
    }

    #[test]
    fn test_args_parse_flags() {
        let args = Args::parse_from(["foliotui", "--light", "--page", "contact", "-d"]);
        assert!(args.light);
        assert!(args.debug);
        assert_eq!(args.page.as_deref(), Some("contact"));
        assert!(args.config.is_none());
    }
}
