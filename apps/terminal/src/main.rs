mod app;
mod config;
mod input;
mod sink;
mod ui;

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chrono::Utc;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use review_core::{order_review_queue, PracticeListItem, ReviewSession};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app::App;
use config::Config;
use sink::JsonLinesSink;

const TICK_RATE: Duration = Duration::from_millis(250);

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err:?}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = Config::load()?;
    init_tracing(&config)?;

    let raw = fs::read_to_string(&config.queue_path)
        .with_context(|| format!("reading {}", config.queue_path.display()))?;
    let items: Vec<PracticeListItem> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing {}", config.queue_path.display()))?;
    let items = order_review_queue(items, config.settings.queue_limit);
    let cards = items.iter().map(PracticeListItem::to_flashcard).collect();

    let results = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.results_path)
        .with_context(|| format!("opening {}", config.results_path.display()))?;
    let sink = JsonLinesSink::new(BufWriter::new(results), items);
    let session = ReviewSession::new(cards, config.settings.clone(), sink, Utc::now())?;
    let mut app = App::new(session);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    let (position, total) = app.session.progress();
    tracing::info!(
        reviewed = app.session.outcomes().len(),
        position,
        total,
        "review finished"
    );
    res
}

fn init_tracing(config: &Config) -> Result<()> {
    let log_file = File::options()
        .create(true)
        .append(true)
        .open(&config.log_path)
        .with_context(|| format!("opening {}", config.log_path.display()))?;

    // The terminal belongs to the UI, so logs go to a file.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(log_file)),
        )
        .init();
    Ok(())
}

fn run_app<W: io::Write>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<W>,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        let timeout = app.poll_timeout(Instant::now(), TICK_RATE);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_command(input::command_for(key), Instant::now());
                }
            }
        }

        app.on_tick(Instant::now());
        if app.should_quit {
            return Ok(());
        }
    }
}
