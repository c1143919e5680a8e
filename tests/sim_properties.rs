//! Property tests for the simulation invariants

use endless_jumper::consts::*;
use endless_jumper::sim::{
    GameEvent, GameState, InputState, Platform, PlatformMotion, Rules, Trail, tick,
};
use glam::Vec2;
use proptest::prelude::*;

fn inputs() -> impl Strategy<Value = Vec<InputState>> {
    prop::collection::vec(
        (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(left, right, jump)| InputState {
            left,
            right,
            jump,
        }),
        1..400,
    )
}

/// Mostly run right and jump so runs travel far enough to generate
fn runner_inputs() -> impl Strategy<Value = Vec<InputState>> {
    prop::collection::vec(
        (0u8..10, any::<bool>()).prop_map(|(roll, jump)| InputState {
            left: roll == 0,
            right: roll > 1,
            jump,
        }),
        1..600,
    )
}

proptest! {
    #[test]
    fn trail_keeps_most_recent_positions(xs in prop::collection::vec(-1e4f32..1e4, 0..60)) {
        let mut trail = Trail::default();
        for (i, x) in xs.iter().enumerate() {
            trail.push(Vec2::new(*x, i as f32));
            prop_assert!(trail.len() <= TRAIL_LENGTH);
        }
        let expected: Vec<Vec2> = xs
            .iter()
            .enumerate()
            .map(|(i, x)| Vec2::new(*x, i as f32))
            .skip(xs.len().saturating_sub(TRAIL_LENGTH))
            .collect();
        let actual: Vec<Vec2> = trail.iter().copied().collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn lookahead_holds_after_every_tick(seed in any::<u64>(), inputs in runner_inputs()) {
        let mut state = GameState::new(seed, 0);
        for input in &inputs {
            tick(&mut state, input);
            if state.is_over() {
                break;
            }
            prop_assert!(state.platforms_ahead() >= LOOKAHEAD);
        }
    }

    #[test]
    fn grounded_means_standing_on_a_platform(seed in any::<u64>(), inputs in inputs()) {
        let mut state = GameState::new(seed, 0);
        for input in &inputs {
            tick(&mut state, input);
            if state.is_over() {
                break;
            }
            if state.player.grounded {
                prop_assert_eq!(state.player.vel.y, 0.0);
                prop_assert!(!state.player.is_jumping);
                let bottom = state.player.bottom();
                prop_assert!(state
                    .platforms
                    .iter()
                    .any(|p| (p.pos.y - bottom).abs() < 1e-3));
            }
        }
    }

    #[test]
    fn score_counts_landed_platforms(seed in any::<u64>(), inputs in runner_inputs()) {
        // No eviction, so every landed platform is still in the set
        let mut state = GameState::with_rules(seed, 0, Rules::classic());
        let mut landings = 0;
        for input in &inputs {
            for event in tick(&mut state, input) {
                if let GameEvent::Landed { score, .. } = event {
                    landings += 1;
                    prop_assert_eq!(score, landings);
                }
            }
        }
        let landed = state.platforms.iter().filter(|p| p.landed).count() as u32;
        prop_assert_eq!(state.score, landed);
        prop_assert_eq!(state.score, landings);
    }

    #[test]
    fn high_score_is_max_of_previous_and_final(
        seed in any::<u64>(),
        previous in 0u32..20,
        inputs in runner_inputs(),
    ) {
        let mut state = GameState::new(seed, previous);
        let mut game_overs = 0;
        for input in &inputs {
            for event in tick(&mut state, input) {
                if let GameEvent::GameOver { score, high_score, new_high_score } = event {
                    game_overs += 1;
                    prop_assert_eq!(high_score, previous.max(score));
                    prop_assert_eq!(new_high_score, score > previous);
                }
            }
            prop_assert!(state.high_score >= previous);
        }
        prop_assert!(game_overs <= 1);
        if state.is_over() {
            prop_assert_eq!(game_overs, 1);
            prop_assert_eq!(state.player.pos.y, CANVAS_HEIGHT);
        }
    }

    #[test]
    fn moving_platforms_stay_in_band(
        speed in MOVE_SPEED_MIN..MOVE_SPEED_MAX,
        origin in -1000f32..1000.0,
        start_right in any::<bool>(),
        steps in 1usize..3000,
    ) {
        let mut platform = Platform::new(1, origin, 300.0, PLATFORM_WIDTH, PLATFORM_HEIGHT);
        platform.motion = Some(PlatformMotion {
            move_speed: speed,
            amplitude: MOVE_AMPLITUDE,
            original_x: origin,
            direction: if start_right { 1.0 } else { -1.0 },
        });
        let min_x = origin - MOVE_AMPLITUDE;
        let max_x = origin + MOVE_AMPLITUDE;

        let mut direction = platform.motion.map(|m| m.direction).unwrap_or_default();
        for _ in 0..steps {
            let before = platform.pos.x;
            platform.step_motion();
            let x = platform.pos.x;
            prop_assert!(x >= min_x && x <= max_x);

            let now = platform.motion.map(|m| m.direction).unwrap_or_default();
            if now != direction {
                // Flips only when the step would have left the band
                let unclamped = before + speed * direction;
                prop_assert!(unclamped < min_x || unclamped > max_x);
                direction = now;
            }
        }
    }
}
