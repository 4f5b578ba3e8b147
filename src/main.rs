//! Hyper Caster demo
//!
//! Walks a scripted route through the tiling and prints each frame as ASCII
//! art. Usage: `hyper-caster [seed]`. Set `RUST_LOG=debug` to trace tile
//! transitions.

use std::f64::consts::PI;

use hyper_caster::caster::{CasterResult, ColumnSpan};
use hyper_caster::sim::{TickInput, WorldState, tick};
use hyper_caster::{HyperError, QualityPreset, RenderSettings};

const DEFAULT_SEED: u64 = 678567;
const FRAMES: usize = 6;
const TICKS_PER_FRAME: usize = 12;

/// Wall shades, brightest first
const SHADES: &[u8] = b"@%#*+=-:";

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_SEED);

    if let Err(e) = run(seed) {
        log::error!("Demo aborted: {}", e);
        std::process::exit(1);
    }
}

fn run(seed: u64) -> Result<(), HyperError> {
    let settings = RenderSettings {
        width: 72,
        height: 24,
        ..RenderSettings::from_preset(QualityPreset::Medium)
    };
    let mut world = WorldState::with_wall_seed(seed, seed).with_settings(settings);
    log::info!("Hyper Caster starting (seed {})", seed);

    let script = [
        TickInput {
            move_distance: 0.02,
            ..TickInput::forward()
        },
        TickInput::turn(PI / 48.0),
    ];

    for frame in 0..FRAMES {
        for t in 0..TICKS_PER_FRAME {
            tick(&mut world, &script[(frame + t) % script.len()])?;
            for event in &world.events {
                log::info!("{:?}", event);
            }
        }

        let result = world.cast()?;
        let spans = result.spans(world.settings.height as f64, world.settings.fog_density);
        println!(
            "frame {} | tile {} | {} visible tiles",
            frame,
            world.paving.current().path(),
            world.visible_tiles()?.len()
        );
        println!("{}", draw(&result, &spans, world.settings.height as usize));
    }

    Ok(())
}

fn draw(result: &CasterResult, spans: &[ColumnSpan], height: usize) -> String {
    let horizon = height as f64 / 2.0;
    let mut rows = vec![vec![b' '; spans.len()]; height];

    for (x, (column, span)) in result.columns.iter().zip(spans).enumerate() {
        // Ground samples run from the bottom row toward the horizon
        for (i, shadow) in column.shadows.iter().enumerate() {
            if let Some(row) = rows.get_mut(height.saturating_sub(1 + i)) {
                row[x] = if *shadow > 0.5 { b',' } else { b'.' };
            }
        }

        if span.is_empty() {
            continue;
        }
        let shade = ((1.0 - span.brightness) * (SHADES.len() - 1) as f64).round() as usize;
        let glyph = SHADES[shade.min(SHADES.len() - 1)];
        for (y, row) in rows.iter_mut().enumerate() {
            if (y as f64 + 0.5 - horizon).abs() < span.half_height {
                row[x] = glyph;
            }
        }
    }

    rows.into_iter()
        .map(|r| String::from_utf8_lossy(&r).into_owned())
        .collect::<Vec<_>>()
        .join("\n")
}
