//! Property tests: whatever the interleaving of user input, host events and
//! timer expiry, the surface mirrors the controller's phase.

mod support;

use proptest::prelude::*;
use showreel_core::{
    MediaElement, PendingCommand, PlayAttempt, PlaybackPhase, PlaybackView, PlayerError,
    ShortcutKey, VolumeIcon,
};
use support::{advance, controller, TestController};

#[derive(Debug, Clone)]
enum Op {
    Toggle,
    Resolve,
    Reject,
    Advance(u64),
    PointerMove,
    PointerEnter,
    PointerLeave,
    Hover(bool),
    Ended,
    MediaError,
    Key(u8),
    Volume(f64),
    Click(f64),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => Just(Op::Toggle),
        2 => Just(Op::Resolve),
        1 => Just(Op::Reject),
        3 => (0u64..5000).prop_map(Op::Advance),
        2 => Just(Op::PointerMove),
        1 => Just(Op::PointerEnter),
        1 => Just(Op::PointerLeave),
        1 => any::<bool>().prop_map(Op::Hover),
        1 => Just(Op::Ended),
        1 => Just(Op::MediaError),
        2 => (0u8..4).prop_map(Op::Key),
        1 => (0.0f64..=1.0).prop_map(Op::Volume),
        1 => (-50.0f64..300.0).prop_map(Op::Click),
    ]
}

fn key(index: u8) -> ShortcutKey {
    match index {
        0 => ShortcutKey::TogglePlay,
        1 => ShortcutKey::SeekBack,
        2 => ShortcutKey::SeekForward,
        _ => ShortcutKey::ToggleMute,
    }
}

fn track(pending: PendingCommand<()>, in_flight: &mut Vec<PlayAttempt>) {
    if let PendingCommand::Play { attempt, .. } = pending {
        in_flight.push(attempt);
    }
}

fn apply(player: &mut TestController, op: Op, in_flight: &mut Vec<PlayAttempt>) {
    match op {
        Op::Toggle => {
            let pending = player.toggle_play();
            track(pending, in_flight);
        }
        Op::Resolve => {
            if let Some(attempt) = in_flight.pop() {
                player.play_settled(attempt, Ok(()));
            }
        }
        Op::Reject => {
            if let Some(attempt) = in_flight.pop() {
                if player.state().pending_play() == Some(attempt) {
                    player.media_mut().paused = true;
                }
                player.play_settled(attempt, Err(PlayerError::PlayRejected("denied".into())));
            }
        }
        Op::Advance(ms) => advance(player, ms),
        Op::PointerMove => player.on_pointer_move(),
        Op::PointerEnter => player.on_pointer_enter(),
        Op::PointerLeave => player.on_pointer_leave(),
        Op::Hover(over) => player.surface_mut().hovering = over,
        Op::Ended => {
            player.media_mut().paused = true;
            player.on_ended();
        }
        Op::MediaError => {
            player.media_mut().error_code = Some(2);
            player.on_media_error();
        }
        Op::Key(index) => {
            let pending = player.handle_key(key(index));
            track(pending, in_flight);
        }
        Op::Volume(value) => player.change_volume(value),
        Op::Click(x) => player.set_progress(x, 0.0, 250.0),
    }
}

proptest! {
    #[test]
    fn surface_mirrors_phase(ops in prop::collection::vec(op(), 1..60)) {
        let mut player = controller();
        let mut in_flight = Vec::new();

        for op in ops {
            apply(&mut player, op, &mut in_flight);

            let phase = player.phase();
            prop_assert_eq!(player.surface().view, Some(PlaybackView::for_phase(phase)));

            if phase != PlaybackPhase::Playing {
                prop_assert_eq!(player.surface().controls_visible, Some(true));
                prop_assert!(!player.is_auto_hide_armed());
            }
            prop_assert!(player.timers().pending() <= 1);

            let state = player.media().volume_state();
            let expected = if state.is_silent() { VolumeIcon::Muted } else { VolumeIcon::Up };
            prop_assert_eq!(player.surface().volume_icon, Some(expected));

            let time = player.media().current_time;
            prop_assert!((0.0..=190.0).contains(&time));
        }
    }
}
