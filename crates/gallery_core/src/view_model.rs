use crate::UiState;

/// Render snapshot handed to the presentation layer.
///
/// The renderer is expected to match the status exhaustively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryViewModel<P> {
    pub status: UiState<P>,
}
