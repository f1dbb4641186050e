use crate::{Effect, GalleryState, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update<P>(mut state: GalleryState<P>, msg: Msg<P>) -> (GalleryState<P>, Vec<Effect>) {
    let effects = match msg {
        Msg::FetchRequested => {
            // Unconditional: a re-fetch from Success or Error goes back to
            // Loading before the network call resolves. Overlapping requests
            // are not guarded; the last completion applied wins.
            state.begin_fetch();
            vec![Effect::LoadPhotos]
        }
        Msg::PhotosLoaded(records) => {
            state.apply_loaded(records);
            Vec::new()
        }
        Msg::FetchFailed => {
            state.apply_failed();
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
