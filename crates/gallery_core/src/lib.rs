//! Gallery core: pure fetch state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod ui_state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::GalleryState;
pub use ui_state::UiState;
pub use update::update;
pub use view_model::GalleryViewModel;
