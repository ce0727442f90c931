pub mod catalog;
pub mod editor;
pub mod session;

pub use catalog::CatalogStore;
pub use editor::{EditorMode, ProfileEditor};
pub use session::{SessionError, SessionStore};
