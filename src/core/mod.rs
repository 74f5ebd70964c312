pub mod app;
pub mod geo;
pub mod session;
pub mod stats;
pub mod store;

pub use app::App;
pub use session::{CredentialPolicy, Role, Session, StaticSecret};
pub use store::RecordStore;
