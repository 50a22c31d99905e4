//! Engine tick integration tests: schedule ordering, sprite frame
//! application, finished messages and world independence.

use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemState;

use flipbook::components::animation::Animation;
use flipbook::components::mapposition::MapPosition;
use flipbook::components::sprite::Sprite;
use flipbook::components::tint::Tint;
use flipbook::components::zindex::ZIndex;
use flipbook::engine::Engine;
use flipbook::events::animation::AnimationFinished;
use flipbook::resources::animationpool::{AnimationId, AnimationPool};
use flipbook::resources::animationstore::AnimationStore;
use flipbook::resources::worldtime::WorldTime;
use flipbook::systems::render::build_draw_list;

const EPSILON: f32 = 1e-6;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

const TEST_SET: &str = r#"{
    "sheets": [
        { "name": "player", "tex_key": "player-sheet",
          "cell_width": 32, "cell_height": 32, "rows": 2, "columns": 4 }
    ],
    "animations": [
        { "name": "run", "sheet": "player", "looped": true,
          "frames": [
              { "duration": 0.1, "row": 0, "column": 0 },
              { "duration": 0.1, "row": 0, "column": 1 },
              { "duration": 0.1, "row": 0, "column": 2 }
          ] },
        { "name": "slash", "sheet": "player",
          "frames": [
              { "duration": 0.1, "row": 1, "column": 0 },
              { "duration": 0.1, "row": 1, "column": 1 }
          ] }
    ]
}"#;

/// Engine with the test set loaded and one entity playing `name`.
fn engine_with_entity(name: &str) -> (Engine, Entity, AnimationId) {
    let mut engine = Engine::new();
    let index = engine.load_content(TEST_SET).expect("test set loads");
    let loaded = index.animation(name).expect("animation exists in test set");

    let world = engine.world_mut();
    let instance = world.resource_scope(|world, mut pool: Mut<AnimationPool>| {
        pool.instantiate(world.resource::<AnimationStore>(), loaded.def, loaded.looped)
            .unwrap()
    });
    let entity = world
        .spawn((
            Animation::new(instance),
            Sprite::new("player-sheet", 32.0, 32.0),
            MapPosition::new(0.0, 0.0),
        ))
        .id();
    (engine, entity, instance)
}

#[test]
fn tick_advances_playback_and_updates_sprite() {
    let (mut engine, entity, _) = engine_with_entity("run");

    // frame 0: column 0
    engine.tick(0.05);
    let sprite = engine.world().get::<Sprite>(entity).unwrap();
    assert!(approx_eq(sprite.offset.x, 0.0));

    // budget exhausted within the same tick: sprite already shows frame 1
    engine.tick(0.05);
    let sprite = engine.world().get::<Sprite>(entity).unwrap();
    assert!(approx_eq(sprite.offset.x, 32.0));
    assert!(approx_eq(sprite.offset.y, 0.0));
}

#[test]
fn world_time_accumulates_and_counts_frames() {
    let (mut engine, _, _) = engine_with_entity("run");
    engine.tick(0.1);
    engine.tick(0.1);
    let time = engine.world().resource::<WorldTime>();
    assert!(approx_eq(time.elapsed, 0.2));
    assert!(approx_eq(time.delta, 0.1));
    assert_eq!(time.frame_count, 2);
}

#[test]
fn time_scale_slows_playback() {
    let (mut engine, entity, _) = engine_with_entity("run");
    engine.world_mut().resource_mut::<WorldTime>().time_scale = 0.5;

    // two real-time frame durations, scaled to one
    engine.tick(0.1);
    engine.tick(0.1);
    let sprite = engine.world().get::<Sprite>(entity).unwrap();
    assert!(approx_eq(sprite.offset.x, 32.0));
}

#[test]
fn finished_message_fires_once_per_playthrough() {
    let (mut engine, _, instance) = engine_with_entity("slash");

    engine.tick(0.1);
    assert!(engine.drain_finished().is_empty());

    engine.tick(0.1);
    let finished = engine.drain_finished();
    assert_eq!(finished, vec![AnimationFinished { instance }]);

    // the held last frame keeps expiring without re-reporting
    engine.tick(0.1);
    engine.tick(0.1);
    assert!(engine.drain_finished().is_empty());
}

#[test]
fn finished_message_reaches_a_reader_system() {
    let (mut engine, _, _) = engine_with_entity("slash");
    engine.tick(0.1);
    engine.tick(0.1);

    let world = engine.world_mut();
    let mut state = SystemState::<MessageReader<AnimationFinished>>::new(world);
    let mut reader = state.get_mut(world);
    assert_eq!(reader.read().count(), 1);
}

#[test]
fn looping_animation_never_finishes() {
    let (mut engine, _, _) = engine_with_entity("run");
    for _ in 0..30 {
        engine.tick(0.1);
        assert!(engine.drain_finished().is_empty());
    }
}

#[test]
fn engines_are_independent_worlds() {
    let (mut a, entity_a, _) = engine_with_entity("run");
    let (b, entity_b, _) = engine_with_entity("run");

    a.tick(0.1);
    a.tick(0.1);

    let sprite_a = a.world().get::<Sprite>(entity_a).unwrap();
    let sprite_b = b.world().get::<Sprite>(entity_b).unwrap();
    assert!(approx_eq(sprite_a.offset.x, 64.0));
    assert!(approx_eq(sprite_b.offset.x, 0.0));
    assert_eq!(b.world().resource::<WorldTime>().frame_count, 0);
}

#[test]
fn draw_list_reflects_ticked_state() {
    let (mut engine, _, instance) = engine_with_entity("run");
    {
        let world = engine.world_mut();
        world
            .resource_mut::<AnimationPool>()
            .get_mut(instance)
            .unwrap()
            .is_flipped = true;
        world.spawn((
            Sprite::new("background", 64.0, 64.0),
            MapPosition::new(0.0, 0.0),
            ZIndex(-10),
            Tint::new(128, 128, 128, 255),
        ));
    }

    engine.tick(0.1); // run moves to frame 1, column 1

    let draws = build_draw_list(engine.world_mut());
    assert_eq!(draws.len(), 2);
    // background first (lower z), tinted
    assert_eq!(draws[0].tex_key.as_ref(), "background");
    assert_eq!(draws[0].tint.r, 128);
    // animated sprite shows frame 1, mirrored
    assert_eq!(draws[1].tex_key.as_ref(), "player-sheet");
    assert!(approx_eq(draws[1].source.x, 64.0));
    assert!(approx_eq(draws[1].source.width, -32.0));
}

#[test]
fn switching_animation_is_a_handle_overwrite() {
    let (mut engine, entity, old_instance) = engine_with_entity("run");

    let world = engine.world_mut();
    let index_slash = {
        let defs = world.resource::<AnimationStore>();
        defs.lookup("slash").unwrap()
    };
    let new_instance = world.resource_scope(|world, mut pool: Mut<AnimationPool>| {
        pool.destroy(old_instance);
        pool.instantiate(world.resource::<AnimationStore>(), index_slash, false)
            .unwrap()
    });
    // the freed slot is reused for the replacement
    assert_eq!(new_instance, old_instance);
    world.get_mut::<Animation>(entity).unwrap().instance = new_instance;

    engine.tick(0.05);
    let sprite = engine.world().get::<Sprite>(entity).unwrap();
    // slash frame 0 sits on row 1
    assert!(approx_eq(sprite.offset.y, 32.0));
}
