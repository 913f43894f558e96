//! ladenkasse-db – Credential Store
//!
//! Dieses Crate kapselt die Persistenz der Benutzerkonten hinter dem
//! Repository-Pattern. Gespeichert wird pro Konto genau ein Datensatz:
//! Benutzername, Passwort-Hash+Salz, PIN-Hash+Salz und Erstellungszeitpunkt.
//! Standard-Backend ist SQLite (lokal, single-tenant, keine Netzwerkgrenze).

pub mod error;
pub mod models;
pub mod repository;
pub mod sqlite;

pub use error::{DbError, DbResult};
pub use models::{KontoId, KontoRecord, NeuesKonto};
pub use repository::{DatabaseConfig, KontoRepository};
pub use sqlite::SqliteDb;
