//! Repository-Trait fuer den Credential Store
//!
//! Das Repository-Pattern entkoppelt den Auth-Service von der konkreten
//! Datenbank-Implementierung. Der Vertrag ist bewusst minimal: ein Lookup,
//! ein Insert, ein Update-in-place des Passwort-Teilzustands.

use serde::{Deserialize, Serialize};

use crate::error::DbResult;
use crate::models::{KontoRecord, NeuesKonto};

/// Konfiguration fuer die Datenbankverbindung
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Verbindungs-URL (z.B. "sqlite://ladenkasse.db")
    pub url: String,
    /// Maximale Anzahl gleichzeitiger Verbindungen im Pool
    pub max_verbindungen: u32,
    /// Ob WAL-Modus bei SQLite aktiviert werden soll
    pub sqlite_wal: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://ladenkasse.db".into(),
            max_verbindungen: 5,
            sqlite_wal: true,
        }
    }
}

/// Repository fuer Konto-Datenzugriffe
///
/// Jede Methode ist eine eigenstaendige, kurzlebige Arbeitseinheit:
/// hoechstens ein Lesen, hoechstens ein Schreiben, keine internen Retries.
#[allow(async_fn_in_trait)]
pub trait KontoRepository: Send + Sync {
    /// Legt ein neues Konto an
    ///
    /// Die Eindeutigkeit des Benutzernamens muss auf Speicherebene
    /// erzwungen werden (Unique-Index), nicht nur in der Anwendungslogik.
    /// Eine Verletzung wird als `DbError::Eindeutigkeit` gemeldet.
    async fn create(&self, data: NeuesKonto<'_>) -> DbResult<KontoRecord>;

    /// Laedt ein Konto anhand des Benutzernamens
    async fn get_by_name(&self, username: &str) -> DbResult<Option<KontoRecord>>;

    /// Ueberschreibt Passwort-Hash und -Salz eines Kontos in place
    ///
    /// PIN-Felder und `erstellt_am` bleiben unveraendert. Existiert der
    /// Benutzername nicht, wird `DbError::NichtGefunden` gemeldet.
    async fn update_passwort(
        &self,
        username: &str,
        passwort_hash: &[u8],
        passwort_salz: &[u8],
        kdf_iterationen: u32,
    ) -> DbResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_config_standard() {
        let cfg = DatabaseConfig::default();
        assert_eq!(cfg.url, "sqlite://ladenkasse.db");
        assert!(cfg.sqlite_wal);
        assert_eq!(cfg.max_verbindungen, 5);
    }
}
