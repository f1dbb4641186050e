#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg<P> {
    /// UI (or the construction factory) requested a photo list load.
    FetchRequested,
    /// Engine delivered the photo list.
    PhotosLoaded(Vec<P>),
    /// Engine reported a transport or HTTP failure.
    FetchFailed,
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
