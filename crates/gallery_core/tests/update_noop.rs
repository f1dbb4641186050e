use gallery_core::{update, GalleryState, Msg};

#[test]
fn noop_leaves_state_untouched() {
    let state: GalleryState<String> = GalleryState::new();
    let (next, effects) = update(state.clone(), Msg::NoOp);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}

#[test]
fn tick_leaves_state_untouched() {
    let state: GalleryState<String> = GalleryState::new();
    let (mut next, effects) = update(state.clone(), Msg::Tick);

    assert_eq!(state, next);
    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
}
