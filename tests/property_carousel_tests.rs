use proptest::prelude::*;
use survey_charts::data::Testimonial;
use survey_charts::interaction::{CarouselState, Direction};

#[derive(Debug, Clone, Copy)]
enum Op {
    Click(usize),
    Advance(Direction, usize),
    Complete,
    Visible(bool),
    Tick,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..9).prop_map(Op::Click),
        (prop_oneof![Just(Direction::Left), Just(Direction::Right)], 0usize..12)
            .prop_map(|(direction, steps)| Op::Advance(direction, steps)),
        Just(Op::Complete),
        any::<bool>().prop_map(Op::Visible),
        Just(Op::Tick),
    ]
}

fn items(count: usize) -> Vec<Testimonial> {
    (0..count)
        .map(|i| Testimonial::new(format!("quote {i}"), "Female", "30"))
        .collect()
}

proptest! {
    #[test]
    fn carousel_invariants_hold_for_any_event_sequence(
        count in 1usize..16,
        half_window in 0usize..4,
        ops in prop::collection::vec(op_strategy(), 0..64)
    ) {
        let window_size = half_window * 2 + 1;
        let mut state = CarouselState::new(window_size, "fallback").expect("state");
        let _ = state.load(items(count));

        for op in ops {
            let was_animating = state.is_animating();
            let effects = match op {
                Op::Click(slot) => state.click(slot),
                Op::Advance(direction, steps) => state.advance(direction, steps),
                Op::Complete => state.complete_transition(),
                Op::Visible(visible) => state.on_visibility_change(visible),
                Op::Tick => state.on_auto_rotate_tick(),
            };

            if was_animating && matches!(op, Op::Click(_) | Op::Advance(..) | Op::Tick) {
                prop_assert!(effects.is_empty());
            }
            prop_assert!(state.current_index() < count);

            let window = state.window_indices();
            prop_assert_eq!(window.len(), window_size);
            prop_assert_eq!(window[state.center_slot()], state.current_index());
            prop_assert!(window.iter().all(|&index| index < count));
            for pair in window.windows(2) {
                prop_assert_eq!((pair[0] + 1) % count, pair[1]);
            }
        }
    }

    #[test]
    fn slide_then_reverse_returns_to_start(
        count in 1usize..20,
        start_steps in 0usize..20,
        steps in 1usize..30
    ) {
        let mut state = CarouselState::new(5, "fallback").expect("state");
        let _ = state.load(items(count));
        if start_steps > 0 {
            let _ = state.advance(Direction::Right, start_steps);
            let _ = state.complete_transition();
        }
        let origin = state.current_index();

        let _ = state.advance(Direction::Right, steps);
        let _ = state.complete_transition();
        prop_assert_eq!(state.current_index(), (origin + steps) % count);

        let _ = state.advance(Direction::Left, steps);
        let _ = state.complete_transition();
        prop_assert_eq!(state.current_index(), origin);
    }
}
