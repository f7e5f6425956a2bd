//! Unit tests for perf module.

use crate::helpers::*;
use mouse_manager::ButtonKind;
use mouse_manager::perf::{DispatchStats, ScopedTimer, measure};

#[test]
fn test_scoped_timer_creation() {
    // Threshold is high enough that dropping never warns
    let timer = ScopedTimer::new("test_op", 1000.0);
    assert_eq!(timer.name(), "test_op");
    assert!(timer.elapsed_ms() >= 0.0);
}

#[test]
fn test_measure_closure() {
    let (sum, elapsed_ms) = measure(|| (1..=10).sum::<i32>());
    assert_eq!(sum, 55);
    assert!(elapsed_ms >= 0.0);
}

#[test]
fn test_dispatch_stats_average() {
    let mut stats = DispatchStats::new();
    stats.record("click", 5.0);
    stats.record("click", 10.0);
    stats.record("click", 15.0);

    let click = stats.get("click").unwrap();
    assert!((click.average() - 10.0).abs() < 0.001);
    assert_eq!(click.max(), 15.0);
}

#[test]
fn test_manager_records_each_transition() {
    let (mut manager, _recorder) = TestManagerBuilder::new().build();

    press(&mut manager, 1.0, 1.0, ButtonKind::Left);
    release(&mut manager, 1.0, 1.0, ButtonKind::Left);
    move_on_canvas(&mut manager, 2.0, 2.0);

    let stats = manager.dispatch_stats();
    assert_eq!(stats.total(), 3);
    assert_eq!(stats.get("mouse-up").map(|s| s.count()), Some(1));
}

#[test]
fn test_manager_stats_spread() {
    let (mut manager, _recorder) = TestManagerBuilder::new().build();

    for i in 0..30 {
        move_on_canvas(&mut manager, i as f64, 0.0);
    }

    let moves = manager.dispatch_stats().get("mouse-move").unwrap();
    assert_eq!(moves.count(), 30);
    assert!(moves.min() <= moves.p95());
    assert!(moves.p95() <= moves.max());
}
