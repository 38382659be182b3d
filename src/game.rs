//! Coin Chase scene.
//!
//! The outer game layer: a player chased by three enemies that walk in from
//! the right, coins to collect, a score that grows with time and bullets the
//! player can fire. This is the caller side of the core: it decides what a
//! collision means.
//!
//! # Tick order
//!
//! 1. Player input, then update of player, enemies, coins and bullets
//! 2. Fire a bullet on a fresh `fire` press
//! 3. Gather [`CollisionEvent`]s between actors still in play and resolve them
//! 4. Accumulator timers: periodic score and enemy re-spawn
//!
//! Drawing happens after the tick, in declaration order: player, coins,
//! enemies, bullets.
//!
//! # Health
//!
//! Health is a rule of this scene: every catch costs [`ENEMY_DAMAGE`] and
//! restarts the scene; at zero the game is over and health refills to
//! [`START_HEALTH`].

use std::rc::Rc;

use glam::Vec2;
use log::info;

use crate::components::actor::{Actor, ActorBehavior};
use crate::components::animation::{AnimationController, AnimationSet, RowLayout};
use crate::components::framegrid::{FrameGrid, Rect};
use crate::components::player::PlayerActor;
use crate::components::projectile::Projectile;
use crate::components::timer::Timer;
use crate::error::Result;
use crate::events::collision::CollisionEvent;
use crate::resources::actorcollection::ActorCollection;
use crate::resources::animationstore::AnimationStore;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::texturestore::{SheetHandle, TextureStore};
use crate::resources::worldtime::{FixedStep, WorldTime};
use crate::systems::collision::CollisionDetector;
use crate::systems::render::DrawSink;

pub const PLAYER_SHEET: &str = "Actors/Sasuke";
pub const ENEMY_SHEETS: [&str; 3] = [
    "Actors/rsc-sprite-sheet3",
    "Actors/rsc-sprite-sheet2",
    "Actors/sprite-sheet1",
];
pub const COIN_SHEET: &str = "Actors/coin_copper";
pub const BULLET_SHEET: &str = "Actors/bullet";

/// Walking sheets carry one row per direction.
pub const WALK_ANIMATIONS: [&str; 4] = ["Down", "Left", "Right", "Up"];
pub const COIN_ANIMATION: &str = "Spin";
pub const COIN_FRAMES: u32 = 8;

const CELL_SIZE: u32 = 32;
const BULLET_SIZE: u32 = 16;
pub const START_HEALTH: i32 = 100;
/// Health lost each time an enemy catches the player.
pub const ENEMY_DAMAGE: i32 = 50;

const PLAYER_START: Vec2 = Vec2::new(200.0, 200.0);
const ENEMY_STARTS: [Vec2; 3] = [
    Vec2::new(1000.0, 200.0),
    Vec2::new(1000.0, 400.0),
    Vec2::new(1000.0, 600.0),
];
/// Enemy speed relative to `GameConfig::enemy_speed`.
const ENEMY_SPEED_FACTORS: [f32; 3] = [1.0, 0.75, 0.75];

/// Register placeholder sheets with the dimensions the scene expects.
///
/// Headless hosts use this instead of loading images.
pub fn default_textures(config: &GameConfig) -> TextureStore {
    let mut textures = TextureStore::new();
    let walk_w = config.sheet_columns * CELL_SIZE;
    let walk_h = config.sheet_rows * CELL_SIZE;
    textures.insert(PLAYER_SHEET, walk_w, walk_h);
    for key in ENEMY_SHEETS {
        textures.insert(key, walk_w, walk_h);
    }
    textures.insert(COIN_SHEET, COIN_FRAMES * CELL_SIZE, CELL_SIZE);
    textures.insert(BULLET_SHEET, BULLET_SIZE, BULLET_SIZE);
    textures
}

pub struct CoinChase {
    config: GameConfig,
    animations: AnimationStore,
    player_set: Rc<AnimationSet>,
    enemy_sets: Vec<Rc<AnimationSet>>,
    coin_set: Rc<AnimationSet>,
    bullet_sheet: SheetHandle,

    player: PlayerActor,
    enemies: Vec<Actor>,
    coins: ActorCollection<Actor>,
    bullets: ActorCollection<Projectile>,

    score: u32,
    health: i32,
    restarts: u32,
    score_timer: Timer,
    respawn_timer: Timer,
    time: WorldTime,
    rng: fastrand::Rng,
}

impl CoinChase {
    /// Build every animation set from `textures` and lay out the scene.
    ///
    /// Fails if a sheet is missing or does not slice into the configured grid.
    pub fn new(config: GameConfig, textures: &TextureStore, seed: u64) -> Result<Self> {
        let mut animations = AnimationStore::new();

        for key in std::iter::once(PLAYER_SHEET).chain(ENEMY_SHEETS) {
            let grid = FrameGrid::new(textures.get(key)?, config.sheet_rows, config.sheet_columns)?;
            let mut controller = AnimationController::new(grid, config.frame_duration)
                .with_layout(RowLayout::four_way());
            animations.insert(key, controller.create_animation_group(&WALK_ANIMATIONS)?);
        }

        let coin_grid = FrameGrid::new(textures.get(COIN_SHEET)?, 1, COIN_FRAMES)?;
        let mut coin_controller = AnimationController::new(coin_grid, config.frame_duration)
            .with_layout(RowLayout::new().with_row(COIN_ANIMATION, 0));
        animations.insert(
            COIN_SHEET,
            coin_controller.create_animation_group(&[COIN_ANIMATION])?,
        );
        info!("Built {} animation sets", animations.len());

        let player_set = animations.get(PLAYER_SHEET)?;
        let enemy_sets = ENEMY_SHEETS
            .iter()
            .map(|key| animations.get(key))
            .collect::<Result<Vec<_>>>()?;
        let coin_set = animations.get(COIN_SHEET)?;
        let bullet_sheet = textures.get(BULLET_SHEET)?;

        let mut scene = Self {
            player: PlayerActor::new(Actor::new()),
            enemies: Vec::new(),
            coins: ActorCollection::new(),
            bullets: ActorCollection::new(),
            score: 0,
            health: START_HEALTH,
            restarts: 0,
            score_timer: Timer::new(config.score_interval),
            respawn_timer: Timer::new(config.enemy_respawn),
            time: WorldTime::default(),
            rng: fastrand::Rng::with_seed(seed),
            config,
            animations,
            player_set,
            enemy_sets,
            coin_set,
            bullet_sheet,
        };
        scene.reset_actors();
        Ok(scene)
    }

    /// Re-create every actor and zero the score. Health is kept.
    pub fn reset_actors(&mut self) {
        self.player = self.setup_player();
        self.setup_enemies();
        self.coins.clear();
        self.bullets.clear();
        for _ in 0..self.config.coin_count {
            self.spawn_coin();
        }
        self.score = 0;
        self.score_timer.reset();
        self.respawn_timer.reset();
    }

    fn setup_player(&self) -> PlayerActor {
        let mut actor = Actor::new()
            .with_position(PLAYER_START)
            .with_speed(self.config.player_speed)
            .with_direction(Vec2::X)
            .with_scale(self.config.scale);
        actor.bind_animations(Rc::clone(&self.player_set));
        PlayerActor::new(actor).with_can_walk(true)
    }

    /// Put the three enemies back at their start positions, walking left.
    pub fn setup_enemies(&mut self) {
        self.enemies = self
            .enemy_sets
            .iter()
            .zip(ENEMY_STARTS)
            .zip(ENEMY_SPEED_FACTORS)
            .map(|((set, start), factor)| {
                let mut enemy = Actor::new()
                    .with_position(start)
                    .with_direction(Vec2::NEG_X)
                    .with_speed(self.config.enemy_speed * factor)
                    .with_scale(self.config.scale);
                enemy.bind_animations(Rc::clone(set));
                enemy.play_animation("Left");
                enemy
            })
            .collect();
    }

    /// Spawn a coin somewhere inside the play area.
    pub fn spawn_coin(&mut self) {
        let (cell_w, cell_h) = self.coin_set.grid().cell_size();
        let max_x = (self.config.window_width as f32 - cell_w).max(0.0);
        let max_y = (self.config.window_height as f32 - cell_h).max(0.0);
        let position = Vec2::new(self.rng.f32() * max_x, self.rng.f32() * max_y);
        self.spawn_coin_at(position);
    }

    pub fn spawn_coin_at(&mut self, position: Vec2) {
        let mut coin = Actor::new().with_position(position);
        coin.bind_animations(Rc::clone(&self.coin_set));
        self.coins.spawn(coin);
    }

    /// Fire a bullet from the player's center along its facing.
    pub fn fire(&mut self) {
        let sprite = Actor::new().with_static_frame(
            self.bullet_sheet.clone(),
            Rect::new(0.0, 0.0, self.bullet_sheet.width() as f32, self.bullet_sheet.height() as f32),
        );
        let bullet = Projectile::fired(
            sprite,
            self.player.actor().center(),
            self.player.last_direction(),
            self.config.bullet_lifespan,
            self.config.bullet_speed,
        );
        self.bullets.spawn(bullet);
    }

    /// Advance the scene by `dt` seconds.
    pub fn tick(&mut self, dt: f32, input: &InputState) {
        let dt = self.time.advance(dt);

        self.player.handle_input(input);
        self.player.update(dt);
        for enemy in &mut self.enemies {
            enemy.update(dt);
        }
        self.coins.update(dt);
        self.bullets.update(dt);

        let player = self.player.actor();
        if input.fire.just_pressed && player.is_active() && player.is_alive() {
            self.fire();
        }

        let events = self.gather_collisions();
        self.resolve(&events);
        self.coins.prune();
        self.bullets.prune();

        let periods = self.score_timer.tick(dt);
        self.score += periods * self.config.score_points;
        if self.respawn_timer.tick(dt) > 0 {
            info!("Enemies re-spawned at {:.1}s", self.time.elapsed);
            self.setup_enemies();
        }
    }

    /// Run the fixed ticks owed for one host frame of `frame_dt` seconds.
    ///
    /// Input edges are handed to the first tick only and then cleared. When
    /// the frame runs no tick they stay latched for the next frame.
    pub fn run_frame(&mut self, fixed: &mut FixedStep, frame_dt: f32, input: &mut InputState) -> u32 {
        let ticks = fixed.advance(frame_dt);
        for _ in 0..ticks {
            self.tick(fixed.step(), input);
            input.clear_edges();
        }
        ticks
    }

    /// Overlaps between actors that are still in play.
    pub fn gather_collisions(&self) -> Vec<CollisionEvent> {
        let mut events = Vec::new();
        let player = self.player.actor();
        let in_play = |a: &Actor| a.is_active() && !a.is_removed();

        if in_play(player) && player.is_alive() {
            for (i, enemy) in self.enemies.iter().enumerate() {
                if in_play(enemy) && CollisionDetector::has_collided(player, enemy) {
                    events.push(CollisionEvent::PlayerEnemy(i));
                }
            }
            for i in CollisionDetector::hits(player, self.coins.as_slice()) {
                if self.coins.get(i).is_some_and(|c| in_play(c)) {
                    events.push(CollisionEvent::PlayerCoin(i));
                }
            }
        }

        for (b, bullet) in self.bullets.iter().enumerate() {
            if !in_play(bullet.actor()) {
                continue;
            }
            for (e, enemy) in self.enemies.iter().enumerate() {
                if in_play(enemy) && CollisionDetector::has_collided(bullet.actor(), enemy) {
                    events.push(CollisionEvent::BulletEnemy { bullet: b, enemy: e });
                }
            }
        }
        events
    }

    /// Apply the game rules for each event.
    ///
    /// A player death restarts the scene, which invalidates every other event
    /// of this tick.
    pub fn resolve(&mut self, events: &[CollisionEvent]) {
        if let Some(CollisionEvent::PlayerEnemy(i)) = events.iter().find(|e| e.is_fatal()) {
            self.kill_player(*i);
            return;
        }

        let mut collected = 0;
        for event in events {
            match *event {
                CollisionEvent::PlayerCoin(i) => {
                    if let Some(coin) = self.coins.get_mut(i) {
                        if !coin.is_removed() {
                            coin.remove();
                            self.score += self.config.coin_points;
                            collected += 1;
                        }
                    }
                }
                CollisionEvent::BulletEnemy { bullet, enemy } => {
                    let Some(b) = self.bullets.get_mut(bullet) else {
                        continue;
                    };
                    if b.is_removed() || !self.enemies[enemy].is_active() {
                        continue;
                    }
                    b.actor_mut().remove();
                    self.enemies[enemy].set_active(false);
                    info!("Enemy {} shot down", enemy);
                }
                CollisionEvent::PlayerEnemy(_) => {}
            }
        }
        for _ in 0..collected {
            self.spawn_coin();
        }
    }

    fn kill_player(&mut self, enemy: usize) {
        let player = self.player.actor_mut();
        player.set_active(false);
        player.set_alive(false);
        self.enemies[enemy].set_active(false);

        self.health -= ENEMY_DAMAGE;
        if self.health <= 0 {
            info!("Game over with score {}", self.score);
            self.health = START_HEALTH;
        } else {
            info!("Caught by enemy {}, health {}%", enemy, self.health);
        }
        self.restarts += 1;
        self.reset_actors();
    }

    pub fn draw(&self, sink: &mut dyn DrawSink) {
        self.player.draw(sink);
        self.coins.draw(sink);
        for enemy in &self.enemies {
            enemy.draw(sink);
        }
        self.bullets.draw(sink);
    }

    pub fn status(&self) -> String {
        format!("Score = {}  Health = {}%", self.score, self.health)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    /// How many times the player has been caught.
    pub fn restarts(&self) -> u32 {
        self.restarts
    }

    pub fn time(&self) -> &WorldTime {
        &self.time
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn animations(&self) -> &AnimationStore {
        &self.animations
    }

    pub fn player(&self) -> &PlayerActor {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut PlayerActor {
        &mut self.player
    }

    pub fn enemies(&self) -> &[Actor] {
        &self.enemies
    }

    pub fn enemies_mut(&mut self) -> &mut [Actor] {
        &mut self.enemies
    }

    pub fn coins(&self) -> &ActorCollection<Actor> {
        &self.coins
    }

    pub fn bullets(&self) -> &ActorCollection<Projectile> {
        &self.bullets
    }
}
