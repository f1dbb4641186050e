//! The live photo gallery view-model: pure state plus the fetch engine.

use std::sync::Arc;

use gallery_core::{update, Effect, GalleryState, GalleryViewModel, Msg, UiState};
use gallery_engine::{EngineEvent, EngineHandle, Photo, PhotoFetcher};
use gallery_logging::{gallery_error, gallery_warn};

pub struct Gallery {
    state: GalleryState<Photo>,
    engine: EngineHandle,
}

impl Gallery {
    /// Binds the fetcher and starts the initial load eagerly.
    pub fn new(fetcher: Arc<dyn PhotoFetcher>) -> Self {
        let mut gallery = Self {
            state: GalleryState::new(),
            engine: EngineHandle::new(fetcher),
        };
        gallery.fetch_photos();
        gallery
    }

    /// Starts a photo list fetch; the status becomes Loading immediately.
    ///
    /// Calling this while a fetch is outstanding starts a second one; the
    /// last completion to arrive wins.
    pub fn fetch_photos(&mut self) {
        self.dispatch(Msg::FetchRequested);
    }

    /// Applies any completion events the engine has delivered so far.
    pub fn pump(&mut self) {
        while let Some(event) = self.engine.try_recv() {
            match event {
                EngineEvent::FetchCompleted { result } => match result {
                    Ok(photos) => self.dispatch(Msg::PhotosLoaded(photos)),
                    Err(err) if err.kind.is_reportable() => {
                        gallery_warn!("photo fetch failed: {err}");
                        self.dispatch(Msg::FetchFailed);
                    }
                    Err(err) => {
                        // Not a transport or HTTP failure: never rendered
                        // as a fetch error, only surfaced here.
                        gallery_error!("unhandled fetch failure: {err}");
                    }
                },
            }
        }
    }

    pub fn status(&self) -> &UiState<Photo> {
        self.state.status()
    }

    pub fn view(&self) -> GalleryViewModel<Photo> {
        self.state.view()
    }

    /// Returns and clears the re-render flag.
    pub fn take_dirty(&mut self) -> bool {
        self.state.consume_dirty()
    }

    fn dispatch(&mut self, msg: Msg<Photo>) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        for effect in effects {
            match effect {
                Effect::LoadPhotos => self.engine.request_photos(),
            }
        }
    }
}
