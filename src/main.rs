use std::fs::File;
use std::io::{stdout, BufWriter, Stdout};
use std::path::Path;
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{
        self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::thread_rng;
use tracing::{info, warn};

use space_shooter::assets::Assets;
use space_shooter::audio::{AudioSink, TerminalBell};
use space_shooter::compute::{init_state, shapes, tick, FrameContext};
use space_shooter::constants::{TICKS_PER_SECOND, WINDOW_TITLE};
use space_shooter::display::{self, Backdrop, Viewport};
use space_shooter::input::KeyTracker;
use space_shooter::timing::RealStopwatch;

const FRAME: Duration = Duration::from_nanos(1_000_000_000 / TICKS_PER_SECOND);
const LOG_FILE: &str = "space_shooter.log";

fn init_tracing() -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // The terminal is in raw mode while playing, so logs go to a file.
    let file = File::create(LOG_FILE).with_context(|| format!("creating {LOG_FILE}"))?;
    let writer = Mutex::new(file);

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_ansi(false)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_ansi(false)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
    Ok(())
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// One iteration = drain input, one simulation step, one render.  Returns
/// when close is requested; the check happens before the next tick begins.
fn game_loop(
    out: &mut BufWriter<Stdout>,
    rx: &mpsc::Receiver<Event>,
    assets: &Assets,
) -> Result<u64> {
    let mut rng = thread_rng();
    let mut keys = KeyTracker::new();
    let mut spawn_clock = RealStopwatch::new();
    let mut boss_clock = RealStopwatch::new();
    let mut bell = TerminalBell::new(stdout(), &assets.shoot);

    let (width, height) = terminal::size()?;
    let mut viewport = Viewport::new(width, height);
    let mut backdrop = Backdrop::from_background(&assets.background, viewport);

    let mut state = init_state();

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            if let Event::Resize(w, h) = ev {
                viewport = Viewport::new(w, h);
                backdrop = Backdrop::from_background(&assets.background, viewport);
            }
            keys.record(&ev, state.frame);
        }
        if keys.close_requested() {
            return Ok(state.frame);
        }

        let mut ctx = FrameContext {
            input: keys.snapshot(state.frame),
            spawn_clock: &mut spawn_clock,
            boss_clock: &mut boss_clock,
        };
        let outcome = tick(&state, &mut ctx, &mut rng);
        state = outcome.state;
        bell.handle_events(&outcome.events);

        display::render(out, viewport, &backdrop, &shapes(&state), &state)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing()?;

    // Fail fast, before the terminal is switched into raw mode.
    let assets = Assets::load(Path::new(".")).context("loading game assets")?;

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(terminal::SetTitle(WINDOW_TITLE))?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();
    if !keyboard_enhanced {
        warn!("keyboard enhancement unavailable; using key-repeat hold detection");
    }

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    info!(title = WINDOW_TITLE, "game started");
    let result = game_loop(&mut out, &rx, &assets);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    let frames = result?;
    info!(frames, "game closed");
    Ok(())
}
