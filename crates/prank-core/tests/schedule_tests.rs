use prank_core::Scheduler;

#[test]
fn tasks_come_out_in_due_order() {
    let mut s = Scheduler::new();
    s.after(300, "c");
    s.after(100, "a");
    s.after(200, "b");
    let mut seen = Vec::new();
    while let Some(t) = s.pop_due(1_000) {
        seen.push((s.now(), t));
    }
    assert_eq!(seen, vec![(100, "a"), (200, "b"), (300, "c")]);
}

#[test]
fn same_instant_keeps_scheduling_order() {
    let mut s = Scheduler::new();
    for i in 0..5 {
        s.after(50, i);
    }
    let order: Vec<_> = std::iter::from_fn(|| s.pop_due(50)).collect();
    assert_eq!(order, vec![0, 1, 2, 3, 4]);
}

#[test]
fn nothing_runs_before_it_is_due() {
    let mut s = Scheduler::new();
    s.after(100, ());
    assert_eq!(s.pop_due(99), None);
    s.settle(99);
    assert_eq!(s.now(), 99);
    assert_eq!(s.pop_due(100), Some(()));
    assert_eq!(s.now(), 100);
    assert!(s.is_idle());
}

#[test]
fn delays_count_from_the_task_being_handled() {
    let mut s = Scheduler::new();
    s.after(100, 1);
    // Host jumps far ahead; the follow-up is still 50 ms after the first task.
    let first = s.pop_due(10_000);
    assert_eq!(first, Some(1));
    s.after(50, 2);
    assert_eq!(s.pop_due(149), None);
    assert_eq!(s.pop_due(10_000), Some(2));
    assert_eq!(s.now(), 150);
    s.settle(10_000);
    assert_eq!(s.now(), 10_000);
}

#[test]
fn clock_never_runs_backwards() {
    let mut s: Scheduler<()> = Scheduler::new();
    s.settle(500);
    s.settle(200);
    assert_eq!(s.now(), 500);
}

#[test]
fn clear_drops_pending_tasks_but_keeps_the_clock() {
    let mut s = Scheduler::new();
    for i in 0..5u32 {
        s.after(i as u64 * 10, i);
    }
    assert_eq!(s.pop_due(20), Some(0));
    assert_eq!(s.pop_due(20), Some(1));
    assert_eq!(s.pop_due(20), Some(2));
    s.clear();
    assert!(s.is_idle());
    assert_eq!(s.pop_due(1_000), None);
    assert_eq!(s.now(), 20);
}
