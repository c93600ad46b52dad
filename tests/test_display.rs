use space_shooter::assets::Background;
use space_shooter::compute::{init_state, shapes};
use space_shooter::display::{render, Backdrop, Viewport};
use space_shooter::entities::*;

fn render_to_string(viewport: Viewport, state: &GameState) -> String {
    let mut out: Vec<u8> = Vec::new();
    render(&mut out, viewport, &Backdrop::default(), &shapes(state), state).unwrap();
    String::from_utf8(out).unwrap()
}

// ── Viewport mapping ──────────────────────────────────────────────────────────

#[test]
fn viewport_maps_world_corners() {
    // 82×64 terminal → 80×60 inner cells, 10 world units per cell.
    let vp = Viewport::new(82, 64);
    assert_eq!(vp.cell(0.0, 0.0), Some((1, 2)));
    assert_eq!(vp.cell(799.0, 599.0), Some((80, 61)));
    assert_eq!(vp.cell(800.0, 0.0), None);
    assert_eq!(vp.cell(-1.0, 0.0), None);
}

#[test]
fn viewport_spans_cover_shape() {
    let vp = Viewport::new(82, 64);
    // Player: x 375..425 → inner cells 37..42, partially covered edges included.
    assert_eq!(vp.columns(375.0, 50.0), Some((38, 43)));
    assert_eq!(vp.rows(530.0, 50.0), Some((55, 59)));
}

#[test]
fn viewport_clips_partially_visible_shapes() {
    let vp = Viewport::new(82, 64);
    // Enemy hanging past the bottom edge keeps only its visible rows.
    assert_eq!(vp.rows(580.0, 40.0), Some((60, 61)));
    // Boss overshooting left keeps the on-screen part.
    assert_eq!(vp.columns(-1.5, 100.0), Some((1, 10)));
    // Entirely off-screen.
    assert_eq!(vp.rows(610.0, 40.0), None);
}

#[test]
fn tiny_terminal_draws_no_shapes() {
    let vp = Viewport::new(2, 3);
    assert_eq!(vp.columns(0.0, 800.0), None);
    assert_eq!(vp.rows(0.0, 600.0), None);
}

// ── render ────────────────────────────────────────────────────────────────────

#[test]
fn render_contains_title_hud_and_hint() {
    let s = init_state();
    let text = render_to_string(Viewport::new(82, 64), &s);
    assert!(text.contains("Shooter Game"));
    assert!(text.contains("Boss HP: 10"));
    assert!(text.contains("Shots:   0  Enemies:  0"));
    assert!(text.contains("SPACE : Shoot"));
}

#[test]
fn render_draws_blocks_and_projectiles() {
    let mut s = init_state();
    s.projectiles.push(Projectile { x: 395.0, y: 300.0 });
    let text = render_to_string(Viewport::new(82, 64), &s);
    assert!(text.contains('█'));
    assert!(text.contains('●'));
}

#[test]
fn render_skips_offscreen_projectile() {
    let mut s = init_state();
    s.projectiles.push(Projectile { x: 900.0, y: 300.0 });
    let text = render_to_string(Viewport::new(82, 64), &s);
    assert!(!text.contains('●'));
}

// ── Backdrop ──────────────────────────────────────────────────────────────────

#[test]
fn backdrop_is_deterministic_and_sparse() {
    let background = Background {
        width: 4,
        height: 4,
        bytes: (0..=255u8).collect(),
    };
    let vp = Viewport::new(82, 64);
    let a = Backdrop::from_background(&background, vp);
    let b = Backdrop::from_background(&background, vp);
    assert_eq!(a, b);
    assert!(!a.is_empty());
    assert!(a.len() < 80 * 60 / 10);
}

#[test]
fn backdrop_empty_without_bytes() {
    let background = Background {
        width: 1,
        height: 1,
        bytes: Vec::new(),
    };
    assert!(Backdrop::from_background(&background, Viewport::new(82, 64)).is_empty());
}
