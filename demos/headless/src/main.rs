//! headless — run the ink-trail simulation without a window.
//!
//! Starts the default run (or one loaded from a JSON config given as the
//! first argument), exercises the rate controls and a manual refill the way
//! a keyboard front end would, prints a text frame every second, and ends
//! with the final `StatusReport` as JSON.
//!
//! ```text
//! RUST_LOG=debug cargo run -p headless -- my_config.json
//! ```

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use ink_core::{Argb, InkColor, Position, SimConfig};
use ink_sim::{SimBuilder, SimSnapshot};

// ── Constants ─────────────────────────────────────────────────────────────────

const RUN_SECS:       u64 = 5;
const FRAME_INTERVAL: Duration = Duration::from_secs(1);

// ── Config ────────────────────────────────────────────────────────────────────

fn load_config(path: Option<&Path>) -> Result<SimConfig> {
    let Some(path) = path else {
        return Ok(SimConfig { step_delay_ms: 20, ..SimConfig::default() });
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: SimConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}

// ── Text renderer ─────────────────────────────────────────────────────────────

/// One character per cell: the traveler's heading arrow if a live traveler
/// stands there, else the dominant ink channel, else `.`.
fn render(snap: &SimSnapshot<'_>) -> String {
    let grid = snap.grid();
    let travelers = snap.travelers();
    let mut out = String::with_capacity(((grid.cols() + 1) * grid.rows()) as usize);

    // Row 0 is the bottom of the picture.
    for row in (0..grid.rows()).rev() {
        for col in 0..grid.cols() {
            let pos = Position::new(row, col);
            let glyph = match travelers.iter().find(|t| t.live && t.position == pos) {
                Some(t) => match t.heading {
                    ink_core::Heading::North => '^',
                    ink_core::Heading::South => 'v',
                    ink_core::Heading::East => '>',
                    ink_core::Heading::West => '<',
                },
                None => cell_glyph(snap.cell(pos)),
            };
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}

fn cell_glyph(c: Argb) -> char {
    if c == Argb::BLANK {
        return '.';
    }
    let strongest = InkColor::ALL
        .into_iter()
        .max_by_key(|&color| c.channel(color))
        .unwrap_or(InkColor::Red);
    match strongest {
        InkColor::Red => 'r',
        InkColor::Green => 'g',
        InkColor::Blue => 'b',
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let path = std::env::args().nth(1);
    let config = load_config(path.as_deref().map(Path::new))?;
    println!("=== headless — ink-trail simulation ===");
    println!(
        "Grid: {}x{}  |  Travelers: {}  |  Producers: {}  |  Seed: {}",
        config.rows, config.cols, config.traveler_count, config.producer_count, config.seed
    );
    println!();

    let mut sim = SimBuilder::new(config).build()?;
    sim.start()?;

    let t0 = Instant::now();
    let mut frame = 0u32;
    while t0.elapsed() < Duration::from_secs(RUN_SECS) {
        std::thread::sleep(FRAME_INTERVAL);
        frame += 1;

        // Stand-ins for the '.', ',', and r/g/b keys.
        match frame % 4 {
            1 => {
                sim.speed_up();
            }
            2 => {
                sim.slow_down();
            }
            3 => {
                let color = InkColor::from_index(frame as usize);
                sim.refill(color);
            }
            _ => {}
        }

        let snap = sim.snapshot();
        let [r, g, b] = snap.tank_levels();
        println!(
            "t={:>2}s  live={:<3} red={r:<3} green={g:<3} blue={b:<3} sleep={:?}",
            t0.elapsed().as_secs(),
            snap.live_travelers(),
            snap.producer_sleep(),
        );
        print!("{}", render(&snap));
        println!();

        if snap.live_travelers() == 0 {
            info!("every traveler has reached a corner");
            break;
        }
    }

    sim.shutdown();
    let report = sim.snapshot().report();
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
