pub mod app;
pub mod event;
pub mod mode;
pub mod render_state;
pub mod state;
pub mod store;

pub use app::App;
pub use event::AppEvent;
pub use mode::AppMode;
pub use render_state::RenderState;
pub use state::{DisplayState, Orientation};
pub use store::{DisplayStateStore, SubscriptionId};
