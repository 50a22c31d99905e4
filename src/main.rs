//! Flipbook demo entry point.
//!
//! A headless driver for the sprite animation subsystem:
//! - **bevy_ecs** world owned by [`Engine`]
//! - animation content loaded from a JSON set file (bundled demo set as
//!   fallback)
//! - a fixed-step tick loop that advances playback and builds the draw
//!   batch the way a render pass would consume it
//!
//! No window is opened and no texture is loaded; the render boundary is
//! exercised by logging the produced draw parameters. Run with
//! `RUST_LOG=debug` to see them.
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! RUST_LOG=debug cargo run -- --ticks 120
//! ```

use std::path::PathBuf;

use clap::Parser;
use log::{debug, info};

use flipbook::components::animation::Animation;
use flipbook::components::mapposition::MapPosition;
use flipbook::components::sprite::Sprite;
use flipbook::components::zindex::ZIndex;
use flipbook::engine::Engine;
use flipbook::resources::animationpool::{AnimationId, AnimationPool};
use flipbook::resources::animationstore::AnimationStore;
use flipbook::resources::playbackconfig::PlaybackConfig;
use flipbook::resources::sheetstore::{SheetId, SheetStore};
use flipbook::systems::render::build_draw_list;

use bevy_ecs::prelude::Mut;

const DEMO_SET: &str = include_str!("../assets/animations/demo.json");

/// Flipbook sprite animation demo
#[derive(Parser)]
#[command(version, about = "Headless sprite-sheet animation playback demo")]
struct Cli {
    /// Path to the INI configuration file (default: ./flipbook.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the number of ticks to simulate.
    #[arg(long, value_name = "N")]
    ticks: Option<u64>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => PlaybackConfig::with_path(path),
        None => PlaybackConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        info!("using default configuration ({})", e);
    }
    if let Some(ticks) = cli.ticks {
        config.ticks = ticks;
    }

    let mut engine = Engine::new();

    let json = std::fs::read_to_string(&config.set_path).unwrap_or_else(|_| {
        info!(
            "animation set {:?} not found, using the bundled demo set",
            config.set_path
        );
        DEMO_SET.to_string()
    });
    let index = engine
        .load_content(&json)
        .expect("Failed to load animation set");

    // One entity per animation in the set, lined up left to right.
    let mut spawned: Vec<(String, AnimationId, SheetId)> = Vec::new();
    {
        let world = engine.world_mut();
        world.resource_scope(|world, mut pool: Mut<AnimationPool>| {
            let defs = world.resource::<AnimationStore>();
            let mut names: Vec<_> = index.animations.keys().cloned().collect();
            names.sort();
            for name in names {
                let loaded = index.animation(&name).unwrap();
                let id = pool
                    .instantiate(defs, loaded.def, loaded.looped)
                    .expect("definition from the set index exists");
                let sheet = defs.get(loaded.def).unwrap().sheet;
                spawned.push((name, id, sheet));
            }
        });
        for (i, (name, id, sheet_id)) in spawned.iter().enumerate() {
            let (tex_key, w, h) = {
                let sheet = world.resource::<SheetStore>().get(*sheet_id).unwrap();
                (sheet.tex_key.to_string(), sheet.cell_width, sheet.cell_height)
            };
            world.spawn((
                Animation::new(*id),
                Sprite::new(tex_key, w, h),
                MapPosition::new(i as f32 * 48.0, 0.0),
                ZIndex(i as i32),
            ));
            info!("spawned '{}' as instance {}", name, id.0);
        }
    }

    let dt = config.delta();
    for tick in 0..config.ticks {
        engine.tick(dt);

        for msg in engine.drain_finished() {
            info!("tick {}: instance {} finished", tick, msg.instance.0);
        }

        let draws = build_draw_list(engine.world_mut());
        for d in &draws {
            debug!(
                "tick {}: draw {} src=({}, {}, {}x{}) at ({}, {})",
                tick,
                d.tex_key,
                d.source.x,
                d.source.y,
                d.source.width,
                d.source.height,
                d.position.x,
                d.position.y
            );
        }
    }

    info!(
        "simulated {} ticks at {} Hz with {} instances",
        config.ticks,
        config.tick_rate,
        spawned.len()
    );
}
