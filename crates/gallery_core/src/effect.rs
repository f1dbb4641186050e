/// Instructions to the shell, produced by [`crate::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Start one asynchronous photo list fetch.
    LoadPhotos,
}
