pub mod initialize;
pub mod pool;
pub mod storage;

pub use storage::{SqliteStorage, Storage};
