// Host-side tests for the renderer state machine using recording fakes.

mod common;

use backdrop_core::constants::{
    NETWORK_AREA_PER_PARTICLE, NETWORK_MAX_PARTICLES, NETWORK_MIN_PARTICLES,
};
use backdrop_core::scene::primitive_count;
use backdrop_core::{
    BackdropConfig, EnvironmentChange, Palette, Renderer, RendererState, Scene, Size, Theme,
    Variant,
};
use common::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn renderer(variant: Variant, reduced_motion: bool) -> TestRenderer {
    Renderer::new(
        variant,
        BackdropConfig::default(),
        environment(800.0, 600.0, reduced_motion),
        RecordingSurface::default(),
        ManualScheduler::default(),
    )
    .with_rng(StdRng::seed_from_u64(7))
}

fn resized(width: f64, height: f64) -> EnvironmentChange {
    EnvironmentChange::Resized {
        container: Some(Size::new(width, height)),
        viewport: Size::new(1920.0, 1080.0),
        device_pixel_ratio: 1.0,
    }
}

#[test]
fn reduced_motion_paints_exactly_once_and_schedules_nothing() {
    let mut r = renderer(Variant::Network, true);
    r.mount();
    assert_eq!(r.state(), RendererState::StaticRendered);
    assert_eq!(r.surface().frames, 1);
    assert_eq!(requested(&r), 0);
    assert!(!fire(&mut r, 16));
    assert_eq!(r.surface().frames, 1);
}

#[test]
fn motion_allowed_keeps_scheduling_frames() {
    let mut r = renderer(Variant::Blueprint, false);
    r.mount();
    assert_eq!(r.state(), RendererState::Animating);
    assert_eq!(r.surface().frames, 0);
    for i in 1..=5 {
        assert!(fire(&mut r, i * 16));
    }
    assert_eq!(r.surface().frames, 5);
    assert_eq!(requested(&r), 6);
    assert_eq!(outstanding(&r), 1);
}

#[test]
fn teardown_cancels_pending_frame_and_stops_painting() {
    let mut r = renderer(Variant::Network, false);
    r.mount();
    fire(&mut r, 16);
    let pending = r.pending_frame().expect("frame pending while animating");

    r.teardown();
    assert_eq!(r.state(), RendererState::Idle);
    assert_eq!(r.pending_frame(), None);
    assert_eq!(outstanding(&r), 0);
    assert!(r.scheduler().log.borrow().cancelled.contains(&pending));

    // a callback the host had already queued must not paint
    r.on_frame(std::time::Duration::from_millis(32));
    assert_eq!(r.surface().frames, 1);
    assert!(r.scene().is_none());
}

#[test]
fn theme_toggle_changes_colours_but_not_primitives() {
    let mut r = renderer(Variant::Network, true);
    r.mount();
    let before = r.scene().cloned();
    let rebuilds = r.rebuilds();
    let dark = Palette::for_theme(Theme::Dark);
    assert!(r.surface().circles.iter().all(|c| c.2 == dark.particle));

    r.handle(&EnvironmentChange::Theme(Theme::Light));
    assert_eq!(r.scene().cloned(), before);
    assert_eq!(r.rebuilds(), rebuilds);
    assert_eq!(r.surface().frames, 2);
    let light = Palette::for_theme(Theme::Light);
    assert!(!r.surface().circles.is_empty());
    assert!(r.surface().circles.iter().all(|c| c.2 == light.particle));
}

#[test]
fn one_rebuild_per_resize_event() {
    let config = BackdropConfig {
        density: 1.0,
        ..Default::default()
    };
    let mut r = Renderer::new(
        Variant::Network,
        config,
        environment(800.0, 600.0, false),
        RecordingSurface::default(),
        ManualScheduler::default(),
    )
    .with_rng(StdRng::seed_from_u64(3));
    r.mount();
    assert_eq!(r.rebuilds(), 1);

    r.handle(&resized(1200.0, 800.0));
    assert_eq!(r.rebuilds(), 2);
    assert_eq!(r.surface().resizes.len(), 2);
    // window resize and ResizeObserver report the same box
    r.handle(&resized(1200.0, 800.0));
    assert_eq!(r.rebuilds(), 2);

    let expected = primitive_count(
        1200.0 * 800.0,
        NETWORK_AREA_PER_PARTICLE,
        1.0,
        NETWORK_MIN_PARTICLES,
        NETWORK_MAX_PARTICLES,
    );
    assert_eq!(r.scene().map(Scene::len), Some(expected));
    assert_eq!(outstanding(&r), 1);
}

#[test]
fn motion_preference_switches_between_animating_and_static() {
    let mut r = renderer(Variant::Blueprint, false);
    r.mount();
    fire(&mut r, 16);
    assert_eq!(outstanding(&r), 1);

    r.handle(&EnvironmentChange::ReducedMotion(true));
    assert_eq!(r.state(), RendererState::StaticRendered);
    assert_eq!(outstanding(&r), 0);
    assert_eq!(r.surface().frames, 2);

    r.handle(&EnvironmentChange::ReducedMotion(false));
    assert_eq!(r.state(), RendererState::Animating);
    assert_eq!(outstanding(&r), 1);
    assert_eq!(r.rebuilds(), 1);
}

#[test]
fn static_frame_does_not_move_particles() {
    let mut r = renderer(Variant::Network, true);
    r.mount();
    let before = r.scene().cloned();
    r.handle(&EnvironmentChange::Theme(Theme::Light));
    r.handle(&EnvironmentChange::Theme(Theme::Dark));
    assert_eq!(r.scene().cloned(), before);
}

#[test]
fn particles_stay_within_bounds_over_many_frames() {
    let config = BackdropConfig {
        speed: 25.0,
        ..Default::default()
    };
    let mut r = Renderer::new(
        Variant::Network,
        config,
        environment(300.0, 200.0, false),
        RecordingSurface::default(),
        ManualScheduler::default(),
    )
    .with_rng(StdRng::seed_from_u64(11));
    r.mount();
    for i in 0..2_000 {
        fire(&mut r, i * 16);
        let Some(Scene::Network(n)) = r.scene() else {
            panic!("network scene expected");
        };
        for p in &n.particles {
            assert!((0.0..=300.0).contains(&p.pos.x), "x out of bounds: {}", p.pos.x);
            assert!((0.0..=200.0).contains(&p.pos.y), "y out of bounds: {}", p.pos.y);
        }
    }
}

#[test]
fn disabled_backdrop_never_paints() {
    let config = BackdropConfig {
        enabled: false,
        ..Default::default()
    };
    let mut r = Renderer::new(
        Variant::Network,
        config,
        environment(800.0, 600.0, false),
        RecordingSurface::default(),
        ManualScheduler::default(),
    );
    r.mount();
    r.handle(&resized(400.0, 300.0));
    assert_eq!(r.state(), RendererState::Idle);
    assert_eq!(r.surface().frames, 0);
    assert_eq!(requested(&r), 0);
}

#[test]
fn changes_before_mount_are_remembered() {
    let mut r = renderer(Variant::Network, false);
    r.handle(&EnvironmentChange::ReducedMotion(true));
    r.handle(&EnvironmentChange::Theme(Theme::Light));
    assert_eq!(r.rebuilds(), 0);
    r.mount();
    assert_eq!(r.state(), RendererState::StaticRendered);
    assert_eq!(r.environment().theme, Theme::Light);
}

#[test]
fn remount_after_teardown_builds_a_fresh_scene() {
    let mut r = renderer(Variant::Blueprint, false);
    r.mount();
    r.teardown();
    r.mount();
    assert_eq!(r.state(), RendererState::Animating);
    assert_eq!(r.rebuilds(), 2);
    assert_eq!(outstanding(&r), 1);
}

#[test]
fn refused_frame_request_falls_back_to_a_static_frame() {
    let mut r = renderer(Variant::Network, false);
    r.scheduler().log.borrow_mut().refuse = true;
    r.mount();
    assert_eq!(r.state(), RendererState::StaticRendered);
    assert_eq!(r.surface().frames, 1);
    assert_eq!(r.pending_frame(), None);
    assert_eq!(requested(&r), 1);
}

#[test]
fn refusal_mid_animation_keeps_the_last_frame() {
    let mut r = renderer(Variant::Blueprint, false);
    r.mount();
    fire(&mut r, 16);
    r.scheduler().log.borrow_mut().refuse = true;
    assert!(fire(&mut r, 32));
    assert_eq!(r.state(), RendererState::StaticRendered);
    assert_eq!(r.surface().frames, 2);
    assert_eq!(r.pending_frame(), None);
    assert!(!fire(&mut r, 48));

    // a later change retries the animation
    r.scheduler().log.borrow_mut().refuse = false;
    r.handle(&EnvironmentChange::Theme(Theme::Light));
    assert_eq!(r.state(), RendererState::Animating);
    assert_eq!(outstanding(&r), 1);
}
