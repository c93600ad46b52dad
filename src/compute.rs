//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` (and, where needed, an RNG handle) and returns a brand-new
//! `GameState`.  Side effects are limited to the injected RNG and the two
//! stopwatches carried by `FrameContext`.

use rand::Rng;
use tracing::debug;

use crate::constants::{
    BOSS_SIZE, BOSS_SPEED, BOSS_STEP_INTERVAL, BULLET_SPEED, ENEMY_SIZE, ENEMY_SPAWN_INTERVAL,
    ENEMY_SPEED, PLAYER_NOSE_OFFSET, PLAYER_SIZE, PLAYER_SPEED, WINDOW_HEIGHT, WINDOW_WIDTH,
};
use crate::entities::{
    Boss, Direction, Enemy, FrameEvent, GameState, InputState, Player, Projectile, Shape,
};
use crate::timing::Stopwatch;

const PLAYER_MAX_X: f32 = WINDOW_WIDTH - PLAYER_SIZE;
const ENEMY_MAX_X: f32 = WINDOW_WIDTH - ENEMY_SIZE;
const BOSS_MAX_X: f32 = WINDOW_WIDTH - BOSS_SIZE;

// ── Frame context ────────────────────────────────────────────────────────────

/// Everything the step reads from the outside world for one tick.
pub struct FrameContext<'a, S: Stopwatch> {
    pub input: InputState,
    pub spawn_clock: &'a mut S,
    pub boss_clock: &'a mut S,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TickOutcome {
    pub state: GameState,
    pub events: Vec<FrameEvent>,
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial game state: player centred at the bottom, boss at the
/// top, no projectiles or enemies.
pub fn init_state() -> GameState {
    GameState::default()
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

pub fn move_player_left(state: &GameState) -> GameState {
    if state.player.x <= 0.0 {
        return state.clone();
    }
    let x = (state.player.x - PLAYER_SPEED).clamp(0.0, PLAYER_MAX_X);
    GameState {
        player: Player {
            x,
            ..state.player.clone()
        },
        ..state.clone()
    }
}

pub fn move_player_right(state: &GameState) -> GameState {
    if state.player.x >= PLAYER_MAX_X {
        return state.clone();
    }
    let x = (state.player.x + PLAYER_SPEED).clamp(0.0, PLAYER_MAX_X);
    GameState {
        player: Player {
            x,
            ..state.player.clone()
        },
        ..state.clone()
    }
}

/// Fire a projectile from the player's nose.  No cap and no cooldown.
pub fn player_shoot(state: &GameState) -> GameState {
    let mut projectiles = state.projectiles.clone();
    projectiles.push(Projectile {
        x: state.player.x + PLAYER_NOSE_OFFSET,
        y: state.player.y,
    });
    GameState {
        projectiles,
        ..state.clone()
    }
}

// ── Per-entity advancement ──────────────────────────────────────────────────

/// Move every projectile up, then drop those above the top edge.
pub fn advance_projectiles(state: &GameState) -> GameState {
    let projectiles = state
        .projectiles
        .iter()
        .map(|p| Projectile {
            y: p.y - BULLET_SPEED,
            ..p.clone()
        })
        .filter(|p| p.y >= 0.0)
        .collect();
    GameState {
        projectiles,
        ..state.clone()
    }
}

/// Append one enemy at a uniformly random column along the top edge.
pub fn spawn_enemy(state: &GameState, rng: &mut impl Rng) -> GameState {
    let x = rng.gen_range(0.0..=ENEMY_MAX_X);
    let mut enemies = state.enemies.clone();
    enemies.push(Enemy { x, y: 0.0 });
    GameState {
        enemies,
        ..state.clone()
    }
}

/// Move every enemy down, then drop those below the bottom edge.
pub fn advance_enemies(state: &GameState) -> GameState {
    let enemies = state
        .enemies
        .iter()
        .map(|e| Enemy {
            y: e.y + ENEMY_SPEED,
            ..e.clone()
        })
        .filter(|e| e.y <= WINDOW_HEIGHT)
        .collect();
    GameState {
        enemies,
        ..state.clone()
    }
}

/// One boss step.  Returns the new boss and whether its direction flipped.
///
/// Inside the arena the step sign is a coin flip times `direction`.  A step
/// that lands outside `[0, WINDOW_WIDTH - BOSS_SIZE]` flips `direction`; a
/// step taken from out of bounds always heads back inward, so the overshoot
/// never exceeds one step.
pub fn boss_step(boss: &Boss, rng: &mut impl Rng) -> (Boss, bool) {
    let out_of_bounds = |x: f32| !(0.0..=BOSS_MAX_X).contains(&x);

    let heading = if boss.x < 0.0 {
        Direction::Right.sign()
    } else if boss.x > BOSS_MAX_X {
        Direction::Left.sign()
    } else {
        let coin = if rng.gen_bool(0.5) { -1.0 } else { 1.0 };
        coin * boss.direction.sign()
    };
    let x = boss.x + heading * BOSS_SPEED;

    let reversed = out_of_bounds(x);
    let direction = if reversed {
        boss.direction.reversed()
    } else {
        boss.direction
    };

    (
        Boss {
            x,
            direction,
            ..boss.clone()
        },
        reversed,
    )
}

// ── Render hand-off ──────────────────────────────────────────────────────────

/// Every live shape in draw order: player, projectiles, enemies, boss.
pub fn shapes(state: &GameState) -> Vec<Shape> {
    let mut out = Vec::with_capacity(state.projectiles.len() + state.enemies.len() + 2);
    out.push(state.player.shape());
    out.extend(state.projectiles.iter().map(Projectile::shape));
    out.extend(state.enemies.iter().map(Enemy::shape));
    out.push(state.boss.shape());
    out
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by one frame.  All randomness comes through `rng`
/// and all elapsed time through the context's stopwatches, so callers
/// control determinism (tests use a seeded RNG and `SimStopwatch`).
pub fn tick<S: Stopwatch>(
    state: &GameState,
    ctx: &mut FrameContext<'_, S>,
    rng: &mut impl Rng,
) -> TickOutcome {
    let mut events = Vec::new();

    // ── 1. Player movement ───────────────────────────────────────────────────
    let mut next = state.clone();
    if ctx.input.left {
        next = move_player_left(&next);
    }
    if ctx.input.right {
        next = move_player_right(&next);
    }

    // ── 2. Fire ──────────────────────────────────────────────────────────────
    if ctx.input.fire {
        next = player_shoot(&next);
        events.push(FrameEvent::Shoot);
    }

    // ── 3. Projectiles ───────────────────────────────────────────────────────
    next = advance_projectiles(&next);

    // ── 4. Enemy spawn on its own clock ──────────────────────────────────────
    if ctx.spawn_clock.elapsed_secs() > ENEMY_SPAWN_INTERVAL {
        next = spawn_enemy(&next, rng);
        ctx.spawn_clock.reset();
        events.push(FrameEvent::EnemySpawned);
        if let Some(e) = next.enemies.last() {
            debug!(x = e.x, live = next.enemies.len(), "enemy spawned");
        }
    }

    // ── 5. Enemies ───────────────────────────────────────────────────────────
    next = advance_enemies(&next);

    // ── 6. Boss on the slower clock ──────────────────────────────────────────
    if ctx.boss_clock.elapsed_secs() > BOSS_STEP_INTERVAL {
        let (boss, reversed) = boss_step(&next.boss, rng);
        next.boss = boss;
        ctx.boss_clock.reset();
        events.push(FrameEvent::BossStepped);
        if reversed {
            debug!(x = next.boss.x, direction = ?next.boss.direction, "boss reversed");
            events.push(FrameEvent::BossReversed);
        }
    }

    next.frame = state.frame + 1;

    TickOutcome {
        state: next,
        events,
    }
}
