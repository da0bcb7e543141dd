use std::time::Duration;

use survey_charts::interaction::{ManualScheduler, Scheduler, TimerTask};

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

#[test]
fn timers_fire_in_deadline_then_arming_order() {
    let mut scheduler = ManualScheduler::new();
    let late = scheduler.schedule(TimerTask::ResizeFlush, ms(300));
    let first = scheduler.schedule(TimerTask::CarouselTransitionEnd, ms(100));
    let second = scheduler.schedule(TimerTask::CarouselAutoRotate, ms(100));

    let mut fired = Vec::new();
    scheduler.run_until(ms(1_000), |_, timer| fired.push((timer.handle, timer.at)));

    assert_eq!(fired, vec![(first, ms(100)), (second, ms(100)), (late, ms(300))]);
    assert_eq!(scheduler.now(), ms(1_000));
    assert_eq!(scheduler.pending_count(), 0);
}

#[test]
fn cancelled_timer_never_fires() {
    let mut scheduler = ManualScheduler::new();
    let handle = scheduler.schedule(TimerTask::ResizeFlush, ms(200));

    assert!(scheduler.cancel(handle));
    assert!(!scheduler.cancel(handle));
    assert!(!scheduler.is_pending(handle));

    let mut count = 0;
    scheduler.run_for(ms(500), |_, _| count += 1);
    assert_eq!(count, 0);
}

#[test]
fn repeating_timer_rearms_without_drift() {
    let mut scheduler = ManualScheduler::new();
    let handle = scheduler.schedule_repeating(TimerTask::CarouselAutoRotate, ms(5_000));

    let mut ticks = Vec::new();
    scheduler.run_until(ms(16_000), |_, timer| ticks.push(timer.at));

    assert_eq!(ticks, vec![ms(5_000), ms(10_000), ms(15_000)]);
    assert!(scheduler.is_pending(handle));
    assert!(scheduler.cancel(handle));
    assert_eq!(scheduler.pending_for(TimerTask::CarouselAutoRotate), 0);
}

#[test]
fn zero_period_repeating_timer_still_advances() {
    let mut scheduler = ManualScheduler::new();
    scheduler.schedule_repeating(TimerTask::CarouselAutoRotate, Duration::ZERO);

    let mut count = 0;
    scheduler.run_until(ms(3), |_, _| count += 1);
    assert_eq!(count, 3);
}

#[test]
fn dispatch_can_arm_timers_that_fire_in_the_same_run() {
    let mut scheduler = ManualScheduler::new();
    scheduler.schedule(TimerTask::CarouselAutoRotate, ms(100));

    let mut fired = Vec::new();
    scheduler.run_until(ms(1_000), |sched, timer| {
        fired.push((timer.task, timer.at));
        if timer.task == TimerTask::CarouselAutoRotate {
            sched.schedule(TimerTask::CarouselTransitionEnd, ms(400));
        }
    });

    assert_eq!(
        fired,
        vec![
            (TimerTask::CarouselAutoRotate, ms(100)),
            (TimerTask::CarouselTransitionEnd, ms(500)),
        ]
    );
}

#[test]
fn advance_clock_defers_due_timers_to_next_run() {
    let mut scheduler = ManualScheduler::new();
    scheduler.schedule(TimerTask::ResizeFlush, ms(200));

    scheduler.advance_clock(ms(250));
    assert_eq!(scheduler.now(), ms(250));
    assert_eq!(scheduler.pending_count(), 1);

    let fired = scheduler.next_due(scheduler.now()).expect("overdue timer");
    assert_eq!(fired.at, ms(200));
    assert_eq!(scheduler.now(), ms(250));
}

#[test]
fn delays_are_relative_to_current_clock() {
    let mut scheduler = ManualScheduler::new();
    scheduler.run_for(ms(1_000), |_, _| {});
    scheduler.schedule(TimerTask::ResizeFlush, ms(200));

    assert!(scheduler.next_due(ms(1_199)).is_none());
    let fired = scheduler.next_due(ms(1_200)).expect("due");
    assert_eq!(fired.at, ms(1_200));
}
