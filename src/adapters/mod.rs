// Adapters layer: concrete implementations of the domain ports (local filesystem, child processes).

pub mod process;
pub mod storage;

pub use process::SystemRunner;
pub use storage::LocalStorage;
