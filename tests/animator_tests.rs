// Host-side tests for easing, frame-count normalization and the light-up
// state machine.

use glam::DVec3;
use surface_core::{cubic_in_out, resolve_frames, FrameTask, LightAnimator, LightTween};

#[test]
fn easing_endpoints_and_midpoint() {
    assert_eq!(cubic_in_out(0.0), 0.0);
    assert_eq!(cubic_in_out(1.0), 1.0);
    assert_eq!(cubic_in_out(0.5), 0.5);
    assert_eq!(cubic_in_out(-2.0), 0.0);
    assert_eq!(cubic_in_out(3.0), 1.0);
}

#[test]
fn easing_is_monotonic_and_symmetric() {
    let mut prev = 0.0;
    for i in 1..=100 {
        let t = i as f64 / 100.0;
        let e = cubic_in_out(t);
        assert!(e >= prev, "ease dropped at t={t}");
        assert!((e + cubic_in_out(1.0 - t) - 1.0).abs() < 1e-12);
        prev = e;
    }
}

#[test]
fn frame_counts_normalize() {
    assert_eq!(resolve_frames(None), 60);
    assert_eq!(resolve_frames(Some(f64::NAN)), 60);
    assert_eq!(resolve_frames(Some(-5.0)), 60);
    assert_eq!(resolve_frames(Some(f64::INFINITY)), 60);
    assert_eq!(resolve_frames(Some(0.0)), 0);
    assert_eq!(resolve_frames(Some(30.0)), 30);
    assert_eq!(resolve_frames(Some(2.6)), 3);
}

#[test]
fn tween_ends_exactly_on_target() {
    let tween = LightTween::new(DVec3::new(0.1, 0.2, 0.3), DVec3::new(100.7, -3.3, 9.9));
    assert_eq!(tween.at(0.0), tween.start);
    assert_eq!(tween.at(1.0), DVec3::new(100.7, -3.3, 9.9));
}

#[test]
fn run_walks_every_step_then_stops() {
    let mut animator = LightAnimator::new();
    assert!(!animator.is_running());
    assert!(animator.next_task().is_none());

    let tween = LightTween::new(DVec3::ZERO, DVec3::new(100.0, 50.0, 10.0));
    let generation = animator.begin(vec![tween], 4);
    assert!(animator.is_current(generation));
    assert_eq!(animator.step(), Some(0));
    assert_eq!(animator.positions(), vec![DVec3::ZERO]);

    let mut steps = 0;
    while let Some(FrameTask::Animate { generation: g }) = animator.next_task() {
        assert_eq!(g, generation);
        assert!(animator.advance());
        steps += 1;
    }
    assert_eq!(steps, 4);
    assert_eq!(animator.progress(), Some(1.0));
    assert_eq!(animator.positions(), vec![DVec3::new(100.0, 50.0, 10.0)]);
    assert!(!animator.advance());

    animator.finish();
    assert!(!animator.is_running());
    assert!(!animator.is_current(generation));
}

#[test]
fn zero_frames_is_already_done() {
    let mut animator = LightAnimator::new();
    let target = DVec3::new(1.0, 2.0, 3.0);
    animator.begin(vec![LightTween::new(DVec3::ZERO, target)], 0);
    assert_eq!(animator.progress(), Some(1.0));
    assert_eq!(animator.positions(), vec![target]);
    assert!(!animator.has_more());
    assert!(animator.next_task().is_none());
}

#[test]
fn new_run_supersedes_old_generation() {
    let mut animator = LightAnimator::new();
    let first = animator.begin(Vec::new(), 10);
    let second = animator.begin(Vec::new(), 10);
    assert_ne!(first, second);
    assert!(!animator.is_current(first));
    assert!(animator.is_current(second));

    animator.cancel();
    assert!(!animator.is_current(second));
    assert!(!animator.is_running());
}
