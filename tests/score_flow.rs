use ball_bouncer::core::components::{Ball, Boundary, Enemy, FloorPlane};
use ball_bouncer::core::config::GameConfig;
use ball_bouncer::core::events::{BallLost, EnemyStruck};
use ball_bouncer::core::score::Score;
use ball_bouncer::gameplay::ball::handle_floor_contacts;
use ball_bouncer::gameplay::enemy::handle_enemy_contacts;
use ball_bouncer::rendering::hud::{update_score_hud, ScoreHud};
use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use bevy_rapier3d::rapier::geometry::CollisionEventFlags;

/// Headless app with the collision reaction systems only. Rapier itself is
/// not stepped; collision events are fed by hand.
fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(GameConfig::default());
    app.init_resource::<Score>();
    app.add_event::<CollisionEvent>();
    app.add_event::<EnemyStruck>();
    app.add_event::<BallLost>();
    app.add_systems(
        Update,
        (handle_enemy_contacts, handle_floor_contacts, update_score_hud).chain(),
    );
    app
}

fn spawn_ball(app: &mut App, pos: Vec3) -> Entity {
    app.world_mut()
        .spawn((
            Ball,
            Transform::from_translation(pos),
            Velocity::linear(Vec3::new(3.0, -8.0, 0.0)),
        ))
        .id()
}

fn spawn_enemy(app: &mut App, pos: Vec3) -> Entity {
    app.world_mut()
        .spawn((Enemy, Transform::from_translation(pos)))
        .id()
}

fn send_started(app: &mut App, a: Entity, b: Entity) {
    app.world_mut()
        .send_event(CollisionEvent::Started(a, b, CollisionEventFlags::empty()));
}

fn score_of(app: &App) -> u32 {
    app.world().resource::<Score>().value()
}

#[test]
fn enemy_contact_scores_and_teleports() {
    let mut app = test_app();
    let ball = spawn_ball(&mut app, Vec3::new(1.8, 0.9, 0.0));
    let enemy = spawn_enemy(&mut app, Vec3::new(2.0, 1.0, 0.0));
    send_started(&mut app, ball, enemy);
    app.update();

    assert_eq!(score_of(&app), 1);
    let tf = app.world().get::<Transform>(enemy).unwrap();
    assert_eq!(tf.translation, Vec3::ZERO);
    assert_eq!(app.world().resource::<Events<EnemyStruck>>().len(), 1);
}

#[test]
fn enemy_contact_scores_in_either_event_order() {
    let mut app = test_app();
    let ball = spawn_ball(&mut app, Vec3::ZERO);
    let enemy = spawn_enemy(&mut app, Vec3::new(-2.0, 3.0, 0.0));
    // entity order in the pair is not guaranteed by the physics backend
    send_started(&mut app, enemy, ball);
    app.update();

    assert_eq!(score_of(&app), 1);
    assert_eq!(
        app.world().get::<Transform>(enemy).unwrap().translation,
        Vec3::ZERO
    );
}

#[test]
fn both_enemies_struck_on_the_same_frame() {
    let mut app = test_app();
    let ball = spawn_ball(&mut app, Vec3::ZERO);
    let orange = spawn_enemy(&mut app, Vec3::new(2.0, 1.0, 0.0));
    let pink = spawn_enemy(&mut app, Vec3::new(-2.0, 3.0, 0.0));
    send_started(&mut app, ball, orange);
    send_started(&mut app, pink, ball);
    app.update();

    assert_eq!(score_of(&app), 2);
    assert_eq!(app.world().resource::<Events<EnemyStruck>>().len(), 2);
}

#[test]
fn boundary_contact_neither_scores_nor_moves_anything() {
    let mut app = test_app();
    let ball = spawn_ball(&mut app, Vec3::new(11.0, 0.0, 0.0));
    let wall = app
        .world_mut()
        .spawn((Boundary, Transform::from_xyz(12.0, 0.0, 0.0)))
        .id();
    send_started(&mut app, ball, wall);
    app.update();

    assert_eq!(score_of(&app), 0);
    assert_eq!(
        app.world().get::<Transform>(wall).unwrap().translation,
        Vec3::new(12.0, 0.0, 0.0)
    );
    assert!(app.world().resource::<Events<EnemyStruck>>().is_empty());
    assert!(app.world().resource::<Events<BallLost>>().is_empty());
}

#[test]
fn floor_contact_resets_ball_motion_and_score() {
    let mut app = test_app();
    let ball = spawn_ball(&mut app, Vec3::new(1.5, -9.0, 0.0));
    let enemy = spawn_enemy(&mut app, Vec3::new(2.0, 1.0, 0.0));
    let floor = app
        .world_mut()
        .spawn((FloorPlane, Transform::from_xyz(0.0, -18.65, 0.0)))
        .id();

    // Build up a score first so the reset is observable.
    send_started(&mut app, ball, enemy);
    app.update();
    assert_eq!(score_of(&app), 1);

    send_started(&mut app, floor, ball);
    app.update();

    assert_eq!(score_of(&app), 0);
    let tf = app.world().get::<Transform>(ball).unwrap();
    assert_eq!(tf.translation, Vec3::ZERO); // back on the spawn point
    let vel = app.world().get::<Velocity>(ball).unwrap();
    assert_eq!(vel.linvel, Vec3::ZERO);
    assert_eq!(vel.angvel, Vec3::ZERO);
    assert_eq!(app.world().resource::<Events<BallLost>>().len(), 1);
}

#[test]
fn floor_contact_with_zero_score_stays_at_zero() {
    let mut app = test_app();
    let ball = spawn_ball(&mut app, Vec3::new(0.0, -18.0, 0.0));
    let floor = app
        .world_mut()
        .spawn((FloorPlane, Transform::from_xyz(0.0, -18.65, 0.0)))
        .id();
    send_started(&mut app, ball, floor);
    app.update();

    assert_eq!(score_of(&app), 0);
    assert_eq!(app.world().resource::<Events<BallLost>>().len(), 1);
}

#[test]
fn hud_text_tracks_the_score() {
    let mut app = test_app();
    let hud = app.world_mut().spawn((Text::new("0"), ScoreHud)).id();
    app.update();
    assert_eq!(app.world().get::<Text>(hud).unwrap().0, "0");

    let ball = spawn_ball(&mut app, Vec3::ZERO);
    let orange = spawn_enemy(&mut app, Vec3::new(2.0, 1.0, 0.0));
    let pink = spawn_enemy(&mut app, Vec3::new(-2.0, 3.0, 0.0));
    send_started(&mut app, ball, orange);
    send_started(&mut app, ball, pink);
    app.update();
    assert_eq!(app.world().get::<Text>(hud).unwrap().0, "2");
}
