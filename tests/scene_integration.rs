//! Coin Chase scene tests: setup, scoring, enemy contact, bullets and draw order.

use glam::Vec2;

use coinchase::components::actor::ActorBehavior;
use coinchase::components::framegrid::Rect;
use coinchase::error::SpriteError;
use coinchase::game::{
    self, BULLET_SHEET, COIN_SHEET, CoinChase, ENEMY_DAMAGE, ENEMY_SHEETS, PLAYER_SHEET, START_HEALTH,
};
use coinchase::resources::gameconfig::GameConfig;
use coinchase::resources::input::InputState;
use coinchase::resources::texturestore::TextureStore;
use coinchase::resources::worldtime::FixedStep;
use coinchase::systems::render::RecordingSink;

const SEED: u64 = 7;

/// No random coins so every overlap in a test is placed on purpose.
fn quiet_config() -> GameConfig {
    let mut config = GameConfig::new();
    config.coin_count = 0;
    config
}

fn scene(config: GameConfig) -> CoinChase {
    let textures = game::default_textures(&config);
    CoinChase::new(config, &textures, SEED).unwrap()
}

#[test]
fn new_scene_lays_out_actors() {
    let scene = scene(GameConfig::new());
    assert_eq!(scene.score(), 0);
    assert_eq!(scene.health(), 100);
    assert_eq!(scene.coins().len(), 5);
    assert_eq!(scene.enemies().len(), 3);
    assert_eq!(scene.animations().len(), 5);

    let player = scene.player().actor();
    assert_eq!(player.position(), Vec2::new(200.0, 200.0));
    assert_eq!(player.extent(), Vec2::new(64.0, 64.0));
    assert_eq!(player.current_animation(), "Right");

    for enemy in scene.enemies() {
        assert_eq!(enemy.position().x, 1000.0);
        assert_eq!(enemy.current_animation(), "Left");
        assert!(enemy.is_active());
    }
    assert_eq!(scene.enemies()[0].speed(), 200.0);
    assert_eq!(scene.enemies()[1].speed(), 150.0);
}

#[test]
fn idle_player_stands_on_first_frame_of_facing() {
    let mut scene = scene(quiet_config());
    scene.tick(0.25, &InputState::default());
    let player = scene.player().actor();
    assert_eq!(player.position(), Vec2::new(200.0, 200.0));
    assert_eq!(player.current_animation(), "Right");
    // four-way layout: Right is row 2
    assert_eq!(player.current_frame(), Some(Rect::new(0.0, 64.0, 32.0, 32.0)));
}

#[test]
fn held_key_walks_the_player() {
    let mut scene = scene(quiet_config());
    let mut input = InputState::default();
    input.down.set(true);
    scene.tick(0.25, &input);
    scene.tick(0.25, &input);
    let player = scene.player().actor();
    assert_eq!(player.position(), Vec2::new(200.0, 300.0));
    assert_eq!(player.current_animation(), "Down");
}

#[test]
fn coin_pickup_scores_and_respawns_a_coin() {
    let mut scene = scene(quiet_config());
    scene.spawn_coin_at(Vec2::new(210.0, 210.0));
    scene.tick(1.0 / 64.0, &InputState::default());

    assert_eq!(scene.score(), 20);
    assert_eq!(scene.coins().len(), 1);
    let replacement = scene.coins().get(0).unwrap();
    assert_ne!(replacement.position(), Vec2::new(210.0, 210.0));
}

#[test]
fn score_grows_every_interval() {
    let mut config = quiet_config();
    config.enemy_speed = 0.0;
    let mut scene = scene(config);
    let input = InputState::default();

    for _ in 0..3 {
        scene.tick(0.5, &input);
    }
    assert_eq!(scene.score(), 0);
    scene.tick(0.5, &input);
    assert_eq!(scene.score(), 10);
    assert_eq!(scene.status(), "Score = 10  Health = 100%");
}

#[test]
fn enemy_contact_restarts_the_scene() {
    let mut scene = scene(quiet_config());
    scene.spawn_coin_at(Vec2::new(600.0, 600.0));
    scene.enemies_mut()[0].set_position(Vec2::new(220.0, 200.0));
    scene.tick(1.0 / 64.0, &InputState::default());

    assert_eq!(scene.restarts(), 1);
    assert_eq!(scene.health(), START_HEALTH - ENEMY_DAMAGE);
    assert_eq!(scene.score(), 0);
    assert!(scene.coins().is_empty());
    assert_eq!(scene.enemies()[0].position(), Vec2::new(1000.0, 200.0));
    let player = scene.player().actor();
    assert!(player.is_active() && player.is_alive());
    assert_eq!(player.position(), Vec2::new(200.0, 200.0));
}

#[test]
fn second_catch_refills_health() {
    let mut scene = scene(quiet_config());
    for _ in 0..2 {
        scene.enemies_mut()[1].set_position(Vec2::new(200.0, 230.0));
        scene.tick(1.0 / 64.0, &InputState::default());
    }
    assert_eq!(scene.restarts(), 2);
    assert_eq!(scene.health(), START_HEALTH);
}

#[test]
fn bullet_takes_out_an_enemy() {
    let mut config = quiet_config();
    config.enemy_speed = 0.0;
    let mut scene = scene(config);
    scene.enemies_mut()[0].set_position(Vec2::new(500.0, 200.0));

    let mut input = InputState::default();
    input.fire.set(true);
    scene.tick(0.05, &input);
    assert_eq!(scene.bullets().len(), 1);
    let bullet = scene.bullets().get(0).unwrap().actor();
    // centered on the player, 16px sprite
    assert_eq!(bullet.position(), Vec2::new(224.0, 224.0));

    input.fire.set(true);
    assert!(!input.fire.just_pressed);
    for _ in 0..29 {
        scene.tick(0.05, &input);
    }
    assert!(scene.bullets().is_empty());
    assert!(!scene.enemies()[0].is_active());
    assert!(scene.enemies()[1].is_active());
    assert_eq!(scene.restarts(), 0);
}

#[test]
fn one_press_fires_once_per_frame_and_survives_empty_frames() {
    let mut config = quiet_config();
    config.enemy_speed = 0.0;
    let mut scene = scene(config);
    let mut fixed = FixedStep::new(0.25, 8);
    let mut input = InputState::default();

    // one frame worth two ticks
    input.fire.sample(true);
    assert_eq!(scene.run_frame(&mut fixed, 0.5, &mut input), 2);
    assert_eq!(scene.bullets().len(), 1);

    // tap and release inside a frame that runs no tick
    input.fire.sample(false);
    input.fire.sample(true);
    assert_eq!(scene.run_frame(&mut fixed, 0.125, &mut input), 0);
    input.fire.sample(false);
    assert_eq!(scene.run_frame(&mut fixed, 0.125, &mut input), 1);
    assert_eq!(scene.bullets().len(), 2);

    assert_eq!(scene.run_frame(&mut fixed, 0.25, &mut input), 1);
    assert_eq!(scene.bullets().len(), 2);
}

#[test]
fn enemies_respawn_on_timer() {
    let mut config = quiet_config();
    config.enemy_respawn = 1.0;
    let mut scene = scene(config);
    let input = InputState::default();

    scene.tick(0.5, &input);
    assert_eq!(scene.enemies()[0].position().x, 900.0);
    scene.tick(0.5, &input);
    assert_eq!(scene.enemies()[0].position().x, 1000.0);
}

#[test]
fn draw_order_is_player_coins_enemies_bullets() {
    let mut config = GameConfig::new();
    config.coin_count = 1;
    let mut scene = scene(config);
    scene.fire();

    let mut sink = RecordingSink::new();
    scene.draw(&mut sink);
    let sheets: Vec<&str> = sink.commands.iter().map(|c| c.sheet.as_str()).collect();
    assert_eq!(
        sheets,
        vec![
            PLAYER_SHEET,
            COIN_SHEET,
            ENEMY_SHEETS[0],
            ENEMY_SHEETS[1],
            ENEMY_SHEETS[2],
            BULLET_SHEET,
        ]
    );
}

#[test]
fn missing_sheet_is_reported() {
    let mut textures = TextureStore::new();
    textures.insert(PLAYER_SHEET, 96, 128);
    let result = CoinChase::new(GameConfig::new(), &textures, SEED);
    assert!(matches!(result, Err(SpriteError::MissingSheet(_))));
}

#[test]
fn sheet_that_does_not_slice_is_a_configuration_error() {
    let config = GameConfig::new();
    let mut textures = game::default_textures(&config);
    textures.insert(PLAYER_SHEET, 100, 128);
    let result = CoinChase::new(config, &textures, SEED);
    assert!(matches!(result, Err(SpriteError::Configuration(_))));
}
