//! Compile-time tuning. World units are pixels of the 800×600 play area.

// ── Window ───────────────────────────────────────────────────────────────────

pub const WINDOW_WIDTH: f32 = 800.0;
pub const WINDOW_HEIGHT: f32 = 600.0;
pub const WINDOW_TITLE: &str = "Shooter Game";

/// Simulation rate of the frame loop.
pub const TICKS_PER_SECOND: u64 = 60;

// ── Player ───────────────────────────────────────────────────────────────────

pub const PLAYER_SIZE: f32 = 50.0;
pub const PLAYER_SPEED: f32 = 5.0;
pub const PLAYER_START_X: f32 = (WINDOW_WIDTH - PLAYER_SIZE) / 2.0;
pub const PLAYER_START_Y: f32 = WINDOW_HEIGHT - 70.0;
/// Horizontal offset of the muzzle from the player's left edge.
pub const PLAYER_NOSE_OFFSET: f32 = 20.0;

// ── Projectiles ──────────────────────────────────────────────────────────────

pub const BULLET_RADIUS: f32 = 5.0;
pub const BULLET_SPEED: f32 = 8.0;

// ── Enemies ──────────────────────────────────────────────────────────────────

pub const ENEMY_SIZE: f32 = 40.0;
pub const ENEMY_SPEED: f32 = 2.0;
/// Seconds between enemy spawns.
pub const ENEMY_SPAWN_INTERVAL: f64 = 1.0;

// ── Boss ─────────────────────────────────────────────────────────────────────

pub const BOSS_SIZE: f32 = 100.0;
pub const BOSS_SPEED: f32 = 1.5;
pub const BOSS_HEALTH: u32 = 10;
pub const BOSS_START_X: f32 = WINDOW_WIDTH / 2.0;
pub const BOSS_START_Y: f32 = 50.0;
/// Seconds between boss steps.
pub const BOSS_STEP_INTERVAL: f64 = 0.5;

// ── Assets ───────────────────────────────────────────────────────────────────

pub const BACKGROUND_PATH: &str = "assets/background.png";
pub const SHOOT_SOUND_PATH: &str = "assets/shoot.wav";
