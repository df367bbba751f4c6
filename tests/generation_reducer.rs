use animagen::api::{ApiError, GenerationSuccess};
use animagen::generation::{GenerationIntent, GenerationReducer, GenerationState, Outcome, StatusTone};
use animagen::mvi::Reducer;

fn success() -> Result<GenerationSuccess, ApiError> {
    Ok(GenerationSuccess {
        video_url: "https://x/y.mp4".to_string(),
        message: None,
    })
}

#[test]
fn idle_is_interactable_and_blank() {
    let state = GenerationState::default();
    assert!(state.trigger_enabled());
    assert!(state.status_line().is_none());
    assert!(state.video_url().is_none());
    assert!(state.placeholder_visible());
}

#[test]
fn submit_disables_trigger_and_shows_pending_status() {
    let state = GenerationReducer::reduce(GenerationState::Idle, GenerationIntent::Submit);

    assert_eq!(state, GenerationState::Pending);
    assert!(!state.trigger_enabled());

    let (text, tone) = state.status_line().unwrap();
    assert!(text.contains("Processing"));
    assert_eq!(tone, StatusTone::Pending);
}

#[test]
fn submit_hides_any_previous_video() {
    let resolved = GenerationState::Resolved(Outcome::Success {
        video_url: "https://x/old.mp4".to_string(),
    });
    let state = GenerationReducer::reduce(resolved, GenerationIntent::Submit);

    assert!(state.video_url().is_none());
    assert!(state.placeholder_visible());
}

#[test]
fn successful_settlement_shows_video_and_reenables_trigger() {
    let state = GenerationReducer::reduce(
        GenerationState::Pending,
        GenerationIntent::Settled(success()),
    );

    assert!(state.trigger_enabled());
    assert_eq!(state.video_url(), Some("https://x/y.mp4"));
    assert!(!state.placeholder_visible());

    let (text, tone) = state.status_line().unwrap();
    assert!(text.contains("successfully"));
    assert_eq!(tone, StatusTone::Success);
}

#[test]
fn rejected_settlement_carries_server_message() {
    let state = GenerationReducer::reduce(
        GenerationState::Pending,
        GenerationIntent::Settled(Err(ApiError::Rejected {
            message: Some("quota exceeded".to_string()),
        })),
    );

    assert!(state.trigger_enabled());
    assert!(state.video_url().is_none());
    assert!(state.placeholder_visible());

    let (text, tone) = state.status_line().unwrap();
    assert!(text.contains("quota exceeded"));
    assert_eq!(tone, StatusTone::Error);
}

#[test]
fn transport_settlement_shows_generic_connectivity_message() {
    let state = GenerationReducer::reduce(
        GenerationState::Pending,
        GenerationIntent::Settled(Err(ApiError::Transport {
            detail: "connection refused".to_string(),
        })),
    );

    assert!(state.trigger_enabled());
    let (text, tone) = state.status_line().unwrap();
    assert!(text.contains("Could not connect"));
    assert_eq!(tone, StatusTone::Error);
}

#[test]
fn malformed_settlement_uses_same_generic_message_as_transport() {
    let malformed = GenerationReducer::reduce(
        GenerationState::Pending,
        GenerationIntent::Settled(Err(ApiError::Malformed {
            detail: "expected value".to_string(),
        })),
    );
    let transport = GenerationReducer::reduce(
        GenerationState::Pending,
        GenerationIntent::Settled(Err(ApiError::Transport {
            detail: "timed out".to_string(),
        })),
    );

    assert_eq!(malformed.status_line(), transport.status_line());
}

#[test]
fn reset_returns_to_idle() {
    let state = GenerationReducer::reduce(
        GenerationState::Resolved(Outcome::Failure {
            message: "Error: nope".to_string(),
        }),
        GenerationIntent::Reset,
    );
    assert_eq!(state, GenerationState::Idle);
}

#[test]
fn cycle_repeats_after_resolution() {
    let mut state = GenerationState::default();
    for _ in 0..3 {
        state = GenerationReducer::reduce(state, GenerationIntent::Submit);
        assert!(!state.trigger_enabled());
        state = GenerationReducer::reduce(state, GenerationIntent::Settled(success()));
        assert!(state.trigger_enabled());
    }
}
