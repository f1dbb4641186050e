use crate::view_model::GalleryViewModel;
use crate::UiState;

/// Owns the current status plus a dirty flag used to coalesce re-renders.
///
/// Mutation happens only through [`crate::update`]; observers read via
/// [`GalleryState::status`] or [`GalleryState::view`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryState<P> {
    status: UiState<P>,
    dirty: bool,
}

impl<P> Default for GalleryState<P> {
    fn default() -> Self {
        Self {
            status: UiState::Loading,
            dirty: false,
        }
    }
}

impl<P> GalleryState<P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &UiState<P> {
        &self.status
    }

    pub fn view(&self) -> GalleryViewModel<P>
    where
        P: Clone,
    {
        GalleryViewModel {
            status: self.status.clone(),
        }
    }

    /// Returns and clears the dirty flag; true means observers should
    /// re-render.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn begin_fetch(&mut self) {
        self.set_status(UiState::Loading);
    }

    pub(crate) fn apply_loaded(&mut self, records: Vec<P>) {
        self.set_status(UiState::Success(records));
    }

    pub(crate) fn apply_failed(&mut self) {
        self.set_status(UiState::Error);
    }

    fn set_status(&mut self, status: UiState<P>) {
        self.status = status;
        self.dirty = true;
    }
}
