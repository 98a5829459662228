//! Terminal snake runner (default binary).
//!
//! Without a subcommand this starts the game. It uses crossterm for input and
//! a framebuffer-based renderer.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tui_snake::core::GameConfig;
use tui_snake::engine::{App, AppCommand};
use tui_snake::input::{should_quit, KeyTracker};
use tui_snake::store::{ProfileStore, Trend};
use tui_snake::term::{AppView, FrameBuffer, RenderThrottle, TerminalRenderer, Viewport};
use tui_snake::types::FRAME_MS;

/// Redraw at least this often even when nothing changed.
const IDLE_REDRAW_MS: u64 = 500;

#[derive(Parser)]
#[command(name = "tui-snake")]
#[command(about = "Terminal snake with skins and persistent high scores", long_about = None)]
struct Cli {
    /// Profile file holding high score, history and skin
    #[arg(long, default_value = "snake_profile.json")]
    profile: PathBuf,

    /// Seed for food placement (defaults to the clock)
    #[arg(long)]
    seed: Option<u32>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print score statistics
    Stats,
    /// Export the score history to a JSON file
    Export { path: PathBuf },
    /// Merge a previously exported score history
    Import { path: PathBuf },
    /// Clear the high score and history
    ResetScores,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let store = ProfileStore::open(&cli.profile);
    match cli.command {
        Some(command) => run_command(store, command),
        None => {
            let seed = cli.seed.unwrap_or_else(clock_seed);
            info!(seed, profile = %cli.profile.display(), "starting");
            let app = App::new(store, GameConfig::default(), seed).context("invalid game config")?;
            play(app)
        }
    }
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "tui_snake=info".into()),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32)
        .unwrap_or(1)
}

fn run_command(mut store: ProfileStore, command: Command) -> Result<()> {
    match command {
        Command::Stats => {
            let stats = store.statistics();
            println!("Games played:  {}", stats.total_games);
            println!("High score:    {}", stats.high_score);
            println!("Average score: {:.1}", stats.average_score);
            if let Some(lowest) = stats.lowest_score {
                println!("Lowest score:  {lowest}");
                println!("Score range:   {}", stats.score_range);
            }
            println!("New records:   {}", stats.records_count);
            if let Some(last) = stats.last_played {
                println!("Last played:   {}", last.format("%Y-%m-%d %H:%M"));
            }
            if let Some(trend) = store.recent_improvement(5) {
                let word = match trend.trend {
                    Trend::Improving => "improving",
                    Trend::Declining => "declining",
                    Trend::Stable => "stable",
                };
                println!(
                    "Last 5 games:  {word} ({:+}), average {:.1}",
                    trend.improvement, trend.average_recent
                );
            }
            let recent = store.recent_history(5);
            if !recent.is_empty() {
                println!("Recent:");
                for entry in recent {
                    let marker = if entry.is_record { " *" } else { "" };
                    println!(
                        "  {}  {:>5}{marker}",
                        entry.timestamp.format("%Y-%m-%d %H:%M"),
                        entry.score
                    );
                }
            }
        }
        Command::Export { path } => {
            store.export_to(&path).context("export scores")?;
            println!("Exported {} games to {}", store.history().len(), path.display());
        }
        Command::Import { path } => {
            let added = store.import_from(&path).context("import scores")?;
            println!("Imported {added} new games; high score {}", store.high_score());
        }
        Command::ResetScores => {
            store.reset_scores().context("reset scores")?;
            println!("Scores reset");
        }
    }
    Ok(())
}

fn play(mut app: App) -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut app);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, app: &mut App) -> Result<()> {
    let start = Instant::now();
    let now_ms = || start.elapsed().as_millis() as u64;

    let mut keys = KeyTracker::new().with_release_events(term.reports_key_release());
    let mut view = AppView::new();
    let mut fb = FrameBuffer::new(0, 0);
    let mut throttle = RenderThrottle::new(IDLE_REDRAW_MS);
    let frame = Duration::from_millis(FRAME_MS as u64);

    loop {
        let frame_start = Instant::now();

        // Input until the frame budget runs out.
        loop {
            let timeout = frame.saturating_sub(frame_start.elapsed());
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press && should_quit(key) {
                        return Ok(());
                    }
                    if let Some(ev) = keys.handle_key(key, now_ms()) {
                        if app.handle_event(ev) == AppCommand::Quit {
                            return Ok(());
                        }
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    throttle.invalidate();
                }
                _ => {}
            }
        }

        let now = now_ms();
        for ev in keys.update(now) {
            app.handle_event(ev);
        }
        app.update(now);

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        view.sync(app);
        if throttle.should_render(now, view.fingerprint(app, viewport)) {
            view.render_into(app, viewport, &mut fb);
            term.draw_swap(&mut fb)?;
        }
    }
}
