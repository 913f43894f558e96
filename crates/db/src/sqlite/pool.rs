//! SQLite-Anbindung des Credential Store
//!
//! Die Kassenanwendung laeuft lokal und single-tenant; die Konten liegen in
//! derselben SQLite-Datei wie Katalog und Verkaufsjournal. WAL-Modus erlaubt
//! gleichzeitige Lesezugriffe (Anmeldung, PIN-Pruefung) neben einem Schreiber.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use tracing::info;

use crate::error::DbError;
use crate::repository::DatabaseConfig;

/// Handle auf die Konten-Datenbank
#[derive(Debug, Clone)]
pub struct SqliteDb {
    pub(crate) pool: SqlitePool,
}

impl SqliteDb {
    /// Oeffnet die Datenbank und bringt das Schema auf den neuesten Stand
    ///
    /// Legt die Datenbankdatei an, falls sie noch nicht existiert.
    pub async fn oeffnen(config: &DatabaseConfig) -> Result<Self, DbError> {
        let opts = SqliteConnectOptions::from_str(&config.url)?
            .create_if_missing(true)
            .journal_mode(journal_modus(config.sqlite_wal))
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_verbindungen)
            .connect_with(opts)
            .await?;

        let db = Self { pool };
        db.migrieren().await?;

        info!(url = %config.url, wal = config.sqlite_wal, "Konten-Datenbank geoeffnet");
        Ok(db)
    }

    /// Erstellt eine fluechtige In-Memory-Datenbank fuer Tests
    pub async fn in_memory() -> Result<Self, DbError> {
        let opts = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        // Genau eine dauerhafte Verbindung, sonst verschwindet die
        // In-Memory-Datenbank zwischen zwei Pool-Zugriffen
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .connect_with(opts)
            .await?;

        let db = Self { pool };
        db.migrieren().await?;
        Ok(db)
    }

    async fn migrieren(&self) -> Result<(), DbError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}

fn journal_modus(wal: bool) -> SqliteJournalMode {
    if wal {
        SqliteJournalMode::Wal
    } else {
        SqliteJournalMode::Delete
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn oeffnen_mit_konfiguration() {
        let config = DatabaseConfig {
            url: "sqlite::memory:".into(),
            max_verbindungen: 1,
            sqlite_wal: false,
        };
        let db = SqliteDb::oeffnen(&config).await.unwrap();

        // Schema ist nach dem Oeffnen vorhanden und leer
        let anzahl: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM konten")
            .fetch_one(&db.pool)
            .await
            .unwrap();
        assert_eq!(anzahl, 0);
    }

    #[tokio::test]
    async fn migrationen_sind_idempotent() {
        let db = SqliteDb::in_memory().await.unwrap();
        db.migrieren().await.unwrap();
    }

    #[test]
    fn journal_modus_aus_konfiguration() {
        assert_eq!(journal_modus(true), SqliteJournalMode::Wal);
        assert_eq!(journal_modus(false), SqliteJournalMode::Delete);
    }
}
