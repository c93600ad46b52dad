use space_shooter::entities::*;

#[test]
fn entity_clone_and_eq() {
    assert_eq!(FillColor::Blue, FillColor::Blue);
    assert_ne!(FillColor::Red, FillColor::Green);
    assert_ne!(ShapeKind::Rectangle, ShapeKind::Circle);
    assert_ne!(FrameEvent::BossStepped, FrameEvent::BossReversed);

    let kind = ShapeKind::Circle;
    assert_eq!(kind.clone(), ShapeKind::Circle);
}

#[test]
fn direction_sign_and_reverse() {
    assert_eq!(Direction::Left.sign(), -1.0);
    assert_eq!(Direction::Right.sign(), 1.0);
    assert_eq!(Direction::Left.reversed(), Direction::Right);
    assert_eq!(Direction::Right.reversed().reversed(), Direction::Right);
}

#[test]
fn entity_shapes_carry_size_and_color() {
    let player = Player::default().shape();
    assert_eq!((player.width, player.height), (50.0, 50.0));
    assert_eq!(player.color, FillColor::Blue);

    let enemy = Enemy { x: 1.0, y: 2.0 }.shape();
    assert_eq!((enemy.x, enemy.y), (1.0, 2.0));
    assert_eq!((enemy.width, enemy.height), (40.0, 40.0));
    assert_eq!(enemy.color, FillColor::Green);

    let bullet = Projectile { x: 0.0, y: 0.0 }.shape();
    assert_eq!(bullet.kind, ShapeKind::Circle);
    assert_eq!(bullet.color, FillColor::Red);

    let boss = Boss::default().shape();
    assert_eq!(boss.color, FillColor::Magenta);
}

#[test]
fn input_state_defaults_to_idle() {
    let input = InputState::default();
    assert!(!input.left && !input.right && !input.fire);
}

#[test]
fn game_state_clone_is_independent() {
    let original = GameState::default();
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.x = 99.0;
    cloned.boss.direction = Direction::Left;
    cloned.enemies.push(Enemy { x: 5.0, y: 5.0 });

    assert_eq!(original.player.x, 375.0);
    assert_eq!(original.boss.direction, Direction::Right);
    assert!(original.enemies.is_empty());
}
