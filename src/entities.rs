//! All game entity types — pure data, no logic.

use crate::constants::{
    BOSS_HEALTH, BOSS_SIZE, BOSS_START_X, BOSS_START_Y, BULLET_RADIUS, ENEMY_SIZE, PLAYER_SIZE,
    PLAYER_START_X, PLAYER_START_Y,
};

// ── Drawables ─────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FillColor {
    Blue,
    Red,
    Green,
    Magenta,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Rectangle,
    Circle,
}

/// One drawable handed to the renderer.  `x`/`y` is the top-left corner of
/// the bounding box, as for every entity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: FillColor,
}

// ── Boss direction ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }

    pub fn reversed(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

// ── Player, projectiles & enemies ─────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
}

impl Default for Player {
    fn default() -> Self {
        Player {
            x: PLAYER_START_X,
            y: PLAYER_START_Y,
        }
    }
}

impl Player {
    pub fn shape(&self) -> Shape {
        Shape {
            kind: ShapeKind::Rectangle,
            x: self.x,
            y: self.y,
            width: PLAYER_SIZE,
            height: PLAYER_SIZE,
            color: FillColor::Blue,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub x: f32,
    pub y: f32,
}

impl Projectile {
    pub fn shape(&self) -> Shape {
        Shape {
            kind: ShapeKind::Circle,
            x: self.x,
            y: self.y,
            width: BULLET_RADIUS * 2.0,
            height: BULLET_RADIUS * 2.0,
            color: FillColor::Red,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
}

impl Enemy {
    pub fn shape(&self) -> Shape {
        Shape {
            kind: ShapeKind::Rectangle,
            x: self.x,
            y: self.y,
            width: ENEMY_SIZE,
            height: ENEMY_SIZE,
            color: FillColor::Green,
        }
    }
}

// ── Boss ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Boss {
    pub x: f32,
    pub y: f32,
    /// Set once at startup; nothing damages the boss.
    pub health: u32,
    /// Multiplies the random step sign; flipped when a step leaves the arena.
    pub direction: Direction,
}

impl Default for Boss {
    fn default() -> Self {
        Boss {
            x: BOSS_START_X,
            y: BOSS_START_Y,
            health: BOSS_HEALTH,
            direction: Direction::Right,
        }
    }
}

impl Boss {
    pub fn shape(&self) -> Shape {
        Shape {
            kind: ShapeKind::Rectangle,
            x: self.x,
            y: self.y,
            width: BOSS_SIZE,
            height: BOSS_SIZE,
            color: FillColor::Magenta,
        }
    }
}

// ── Input & events ────────────────────────────────────────────────────────────

/// Commands sampled once per tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

/// Side effects of one tick, consumed by the audio layer and the log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameEvent {
    Shoot,
    EnemySpawned,
    BossStepped,
    BossReversed,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GameState {
    pub player: Player,
    pub projectiles: Vec<Projectile>,
    pub enemies: Vec<Enemy>,
    pub boss: Boss,
    pub frame: u64,
}
