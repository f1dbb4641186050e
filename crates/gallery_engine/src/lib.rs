//! Gallery engine: photo fetch IO and effect execution.
mod engine;
mod fetch;
mod types;

pub use engine::EngineHandle;
pub use fetch::{FetchSettings, PhotoFetcher, ReqwestPhotoFetcher};
pub use types::{EngineEvent, FailureKind, FetchError, Photo};
