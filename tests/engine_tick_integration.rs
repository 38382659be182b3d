//! Engine tick integration tests for animation playback, movement, lifespans,
//! collision and collection pruning.

use std::rc::Rc;

use glam::Vec2;

use coinchase::components::actor::{Actor, ActorBehavior, ActorState};
use coinchase::components::animation::{AnimationController, AnimationSet, RowLayout};
use coinchase::components::framegrid::{FrameGrid, Rect};
use coinchase::components::projectile::Projectile;
use coinchase::error::SpriteError;
use coinchase::resources::actorcollection::ActorCollection;
use coinchase::resources::texturestore::TextureStore;
use coinchase::resources::worldtime::FixedStep;
use coinchase::systems::collision::CollisionDetector;
use coinchase::systems::render::RecordingSink;

const EPSILON: f32 = 1e-5;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// 96x128 sheet, 4 rows x 3 columns of 32px cells, four-way layout.
fn walk_set(duration: f32) -> Rc<AnimationSet> {
    let mut textures = TextureStore::new();
    let sheet = textures.insert("walker", 96, 128);
    let grid = FrameGrid::new(sheet, 4, 3).unwrap();
    let mut controller = AnimationController::new(grid, duration);
    controller
        .create_animation_group(&["Down", "Left", "Right", "Up"])
        .unwrap()
}

fn box_actor(x: f32, y: f32, scale: f32) -> Actor {
    let mut actor = Actor::new()
        .with_position(Vec2::new(x, y))
        .with_scale(scale);
    actor.bind_animations(walk_set(0.1));
    actor
}

#[test]
fn scenario_four_columns_three_rows_left_at_035() {
    let mut textures = TextureStore::new();
    let sheet = textures.insert("sheet", 128, 96);
    let grid = FrameGrid::new(sheet, 3, 4).unwrap();
    let mut controller = AnimationController::new(grid, 0.1)
        .with_layout(RowLayout::new().with_row("Down", 0).with_row("Left", 1));
    let set = controller.create_animation_group(&["Down", "Left"]).unwrap();

    let left = set.sequence("Left").unwrap();
    assert_eq!(left.len(), 4);
    assert_eq!(left.step(0.35), 3);
    assert_eq!(left.frame_index(0.35), 7);
    assert_eq!(set.get_frame("Left", 0.35).unwrap(), Rect::new(96.0, 32.0, 32.0, 32.0));
}

#[test]
fn playback_is_periodic_in_duration_times_length() {
    let set = walk_set(0.125);
    let period = 0.125 * 3.0;
    for i in 0..24 {
        let t = i as f32 * 0.05;
        assert_eq!(
            set.get_frame("Up", t).unwrap(),
            set.get_frame("Up", t + period).unwrap(),
            "t={}",
            t
        );
    }
}

#[test]
fn frame_k_is_shown_during_its_slot() {
    let set = walk_set(0.25);
    let seq = set.sequence("Down").unwrap();
    for k in 0..12usize {
        for eps in [0.0, 0.125, 0.2] {
            assert_eq!(seq.step(k as f32 * 0.25 + eps), k % 3);
        }
    }
}

#[test]
fn bad_grid_is_a_configuration_error() {
    let mut textures = TextureStore::new();
    let sheet = textures.insert("odd", 100, 100);
    assert!(matches!(
        FrameGrid::new(sheet, 3, 3),
        Err(SpriteError::Configuration(_))
    ));
}

#[test]
fn many_actors_share_one_set() {
    let set = walk_set(0.1);
    let actors: Vec<Actor> = (0..5)
        .map(|i| {
            let mut a = Actor::new().with_position(Vec2::new(i as f32 * 10.0, 0.0));
            a.bind_animations(Rc::clone(&set));
            a
        })
        .collect();
    assert_eq!(Rc::strong_count(&set), 6);
    assert!(actors.iter().all(|a| Rc::ptr_eq(a.animations().unwrap(), &set)));
}

#[test]
fn movement_integrates_direction_and_speed() {
    let mut actor = box_actor(0.0, 0.0, 1.0)
        .with_direction(Vec2::new(0.0, 1.0))
        .with_speed(80.0);
    for _ in 0..4 {
        actor.update(0.25);
    }
    assert!(approx_eq(actor.position().x, 0.0));
    assert!(approx_eq(actor.position().y, 80.0));
    assert_eq!(actor.current_animation(), "Down");
    assert_eq!(actor.state(), ActorState::Moving);
}

#[test]
fn state_machine_transitions() {
    let mut actor = box_actor(0.0, 0.0, 1.0);
    assert_eq!(actor.state(), ActorState::Idle);
    actor.set_direction(Vec2::X);
    actor.set_speed(10.0);
    assert_eq!(actor.state(), ActorState::Moving);
    actor.set_speed(0.0);
    assert_eq!(actor.state(), ActorState::Idle);
    actor.remove();
    actor.set_speed(10.0);
    actor.set_active(true);
    assert_eq!(actor.state(), ActorState::Removed);
}

#[test]
fn scenario_player_enemy_overlap() {
    // 32px cells at scale 2 -> 64x64 boxes
    let player = box_actor(100.0, 100.0, 2.0);
    assert_eq!(player.extent(), Vec2::new(64.0, 64.0));
    assert!(CollisionDetector::has_collided(&player, &box_actor(140.0, 100.0, 2.0)));
    assert!(!CollisionDetector::has_collided(&player, &box_actor(164.0, 100.0, 2.0)));
}

#[test]
fn edge_contact_is_not_a_collision() {
    let a = box_actor(0.0, 0.0, 1.0);
    let b = box_actor(32.0, 0.0, 1.0);
    assert!(!CollisionDetector::has_collided(&a, &b));
    assert!(!CollisionDetector::has_collided(&b, &a));
    let c = box_actor(31.0, 0.0, 1.0);
    assert!(CollisionDetector::has_collided(&a, &c));
    assert!(CollisionDetector::has_collided(&c, &a));
}

#[test]
fn moving_actors_collide_after_enough_ticks() {
    let mut a = box_actor(0.0, 0.0, 1.0)
        .with_direction(Vec2::X)
        .with_speed(16.0);
    let b = box_actor(64.0, 0.0, 1.0);
    let mut ticks = 0;
    while !CollisionDetector::has_collided(&a, &b) {
        a.update(0.25);
        ticks += 1;
        assert!(ticks < 100);
    }
    // gap of 32px closes at 4px per tick and must then overlap
    assert_eq!(ticks, 9);
}

#[test]
fn projectile_lifespan_is_monotonic() {
    let lifespan = 1.0;
    let mut p = Projectile::new(Actor::new().with_direction(Vec2::X), lifespan, 50.0);
    let mut elapsed = 0.0;
    let mut seen_removed = false;
    for _ in 0..12 {
        p.update(0.125);
        elapsed += 0.125;
        if elapsed < lifespan {
            assert!(!p.is_removed(), "elapsed {}", elapsed);
        } else {
            assert!(p.is_removed(), "elapsed {}", elapsed);
            seen_removed = true;
        }
    }
    assert!(seen_removed);
}

#[test]
fn collection_prunes_expired_projectiles_once_per_tick() {
    let mut bullets = ActorCollection::new();
    for lifespan in [0.25, 0.5, 0.75, 1.0] {
        bullets.spawn(Projectile::new(Actor::new().with_direction(Vec2::X), lifespan, 10.0));
    }
    let mut remaining = Vec::new();
    for _ in 0..4 {
        bullets.update(0.25);
        assert!(bullets.iter().all(|b| !b.is_removed()));
        remaining.push(bullets.len());
    }
    assert_eq!(remaining, vec![3, 2, 1, 0]);
}

#[test]
fn tick_updates_everything_before_drawing() {
    let set = walk_set(0.1);
    let mut coins: ActorCollection<Actor> = ActorCollection::new();
    for i in 0..3 {
        let mut c = Actor::new()
            .with_position(Vec2::new(i as f32 * 100.0, 0.0))
            .with_direction(Vec2::Y)
            .with_speed(40.0);
        c.bind_animations(Rc::clone(&set));
        coins.spawn(c);
    }
    coins.get_mut(1).unwrap().remove();

    coins.update(0.5);
    let mut sink = RecordingSink::new();
    coins.draw(&mut sink);

    assert_eq!(sink.len(), 2);
    let tops: Vec<(f32, f32)> = sink
        .commands
        .iter()
        .map(|c| (c.destination().x, c.destination().y))
        .collect();
    assert_eq!(tops, vec![(0.0, 20.0), (200.0, 20.0)]);
}

#[test]
fn fixed_step_drives_whole_ticks() {
    let mut fixed = FixedStep::new(0.25, 8);
    let mut actor = box_actor(0.0, 0.0, 1.0)
        .with_direction(Vec2::X)
        .with_speed(4.0);
    for frame_dt in [0.125, 0.25, 0.375, 0.25] {
        for _ in 0..fixed.advance(frame_dt) {
            actor.update(fixed.step());
        }
    }
    // 1.0s of frames -> 4 ticks of 0.25s
    assert!(approx_eq(actor.position().x, 4.0));
}
