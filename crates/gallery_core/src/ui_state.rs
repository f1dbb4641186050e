/// Tri-state fetch status exposed to the rendering layer.
///
/// Exactly one variant is active at any observation point. The record
/// type is opaque to this crate: records pass through unmodified, in the
/// order the data layer delivered them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiState<P> {
    /// A fetch is outstanding. Also the state before the first fetch.
    Loading,
    /// The last applied fetch completed with these records.
    Success(Vec<P>),
    /// The last applied fetch failed; no diagnostic detail is retained.
    Error,
}

impl<P> Default for UiState<P> {
    fn default() -> Self {
        UiState::Loading
    }
}

impl<P> UiState<P> {
    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading)
    }
}
