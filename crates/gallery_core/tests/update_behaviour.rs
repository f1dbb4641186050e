use std::sync::Once;

use gallery_core::{update, Effect, GalleryState, Msg, UiState};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Photo {
    id: String,
}

fn photo(id: &str) -> Photo {
    Photo { id: id.to_string() }
}

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(gallery_logging::initialize_for_tests);
}

#[test]
fn starts_loading() {
    init_logging();
    let mut state: GalleryState<Photo> = GalleryState::new();

    assert!(state.status().is_loading());
    assert!(!state.consume_dirty());
}

#[test]
fn fetch_requested_emits_load_effect() {
    init_logging();
    let state: GalleryState<Photo> = GalleryState::new();

    let (mut next, effects) = update(state, Msg::FetchRequested);

    assert_eq!(next.status(), &UiState::Loading);
    assert_eq!(effects, vec![Effect::LoadPhotos]);
    assert!(next.consume_dirty());
}

#[test]
fn photos_loaded_moves_to_success_in_order() {
    init_logging();
    let state: GalleryState<Photo> = GalleryState::new();
    let (state, _effects) = update(state, Msg::FetchRequested);

    let (mut state, effects) = update(state, Msg::PhotosLoaded(vec![photo("1"), photo("2")]));

    assert_eq!(
        state.status(),
        &UiState::Success(vec![photo("1"), photo("2")])
    );
    assert!(effects.is_empty());
    assert!(state.consume_dirty());
}

#[test]
fn fetch_failed_moves_to_error() {
    init_logging();
    let state: GalleryState<Photo> = GalleryState::new();
    let (state, _effects) = update(state, Msg::FetchRequested);

    let (mut state, effects) = update(state, Msg::FetchFailed);

    assert_eq!(state.status(), &UiState::Error);
    assert!(effects.is_empty());
    assert!(state.consume_dirty());
}

#[test]
fn refetch_returns_to_loading_from_success() {
    init_logging();
    let state: GalleryState<Photo> = GalleryState::new();
    let (state, _effects) = update(state, Msg::FetchRequested);
    let (state, _effects) = update(state, Msg::PhotosLoaded(vec![photo("1")]));

    let (state, effects) = update(state, Msg::FetchRequested);

    assert_eq!(state.status(), &UiState::Loading);
    assert_eq!(effects, vec![Effect::LoadPhotos]);
}

#[test]
fn refetch_returns_to_loading_from_error() {
    init_logging();
    let state: GalleryState<Photo> = GalleryState::new();
    let (state, _effects) = update(state, Msg::FetchRequested);
    let (state, _effects) = update(state, Msg::FetchFailed);

    let (state, effects) = update(state, Msg::FetchRequested);

    assert_eq!(state.status(), &UiState::Loading);
    assert_eq!(effects, vec![Effect::LoadPhotos]);
}

#[test]
fn last_applied_completion_wins() {
    init_logging();
    // Two overlapping requests: the reducer imposes no ordering between
    // their completions, whichever is applied last determines the status.
    let state: GalleryState<Photo> = GalleryState::new();
    let (state, _effects) = update(state, Msg::FetchRequested);
    let (state, _effects) = update(state, Msg::FetchRequested);

    let (state, _effects) = update(state, Msg::PhotosLoaded(vec![photo("1")]));
    let (state, _effects) = update(state, Msg::FetchFailed);

    assert_eq!(state.status(), &UiState::Error);
}

#[test]
fn view_snapshots_current_status() {
    init_logging();
    let state: GalleryState<Photo> = GalleryState::new();
    let (state, _effects) = update(state, Msg::PhotosLoaded(vec![photo("7")]));

    let view = state.view();

    assert_eq!(view.status, UiState::Success(vec![photo("7")]));
}
