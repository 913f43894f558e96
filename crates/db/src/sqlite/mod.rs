//! SQLite-Backend-Implementierung des Credential Store

pub mod konten;
pub mod pool;

pub use pool::SqliteDb;
