mod session;

pub use session::MAX_PENDING_STATES;
pub use session::SessionManager;
pub use session::StateError;
