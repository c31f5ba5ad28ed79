pub mod app_state;
pub mod session_store;

pub use app_state::AppState;
pub use session_store::SessionStore;
