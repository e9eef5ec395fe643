use ball_bouncer::core::config::GameConfig;
use ball_bouncer::interaction::session::auto_close::AutoClosePlugin;
use bevy::prelude::*;
use std::{thread, time::Duration};

fn test_app(auto_close: f32) -> App {
    let mut cfg = GameConfig::default();
    cfg.window.auto_close = auto_close;
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(cfg);
    app.add_plugins(AutoClosePlugin);
    app
}

fn exit_requested(app: &App) -> bool {
    !app.world().resource::<Events<AppExit>>().is_empty()
}

#[test]
fn requests_exit_once_the_timer_elapses() {
    let mut app = test_app(0.05);
    app.update();
    for _ in 0..20 {
        if exit_requested(&app) {
            return;
        }
        thread::sleep(Duration::from_millis(10));
        app.update();
    }
    panic!("expected an AppExit event after the auto-close window");
}

#[test]
fn zero_setting_never_arms_the_timer() {
    let mut app = test_app(0.0);
    for _ in 0..5 {
        app.update();
        thread::sleep(Duration::from_millis(5));
    }
    assert!(!exit_requested(&app));
}
