//! Datenbankmodelle fuer den Credential Store
//!
//! Diese Typen repraesentieren Konten-Datensaetze aus der Datenbank.
//! Geheimnisse liegen hier ausschliesslich als abgeleitete Hashes vor –
//! Klartext-Passwoerter oder -PINs werden niemals persistiert.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Eindeutige Konto-ID
///
/// Newtype-Pattern, damit Konto-IDs zur Compilezeit nicht mit anderen
/// IDs verwechselt werden koennen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KontoId(pub Uuid);

impl KontoId {
    /// Erstellt eine neue zufaellige KontoId
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Gibt die innere UUID zurueck
    pub fn inner(&self) -> Uuid {
        self.0
    }
}

impl Default for KontoId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for KontoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "konto:{}", self.0)
    }
}

/// Konto-Datensatz aus der Datenbank
///
/// `pin_hash`/`pin_salz` sind nach der Registrierung unveraenderlich
/// (es gibt keine PIN-Aenderungs-Operation). `erstellt_am` wird genau
/// einmal beim Anlegen gesetzt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KontoRecord {
    pub id: KontoId,
    pub username: String,
    pub passwort_hash: Vec<u8>,
    pub passwort_salz: Vec<u8>,
    pub pin_hash: Vec<u8>,
    pub pin_salz: Vec<u8>,
    /// PBKDF2-Iterationszahl mit der die Hashes dieses Datensatzes
    /// abgeleitet wurden. Wird pro Datensatz persistiert, damit die
    /// Iterationszahl spaeter erhoeht werden kann ohne bestehende
    /// Konten blind neu hashen zu muessen.
    pub kdf_iterationen: u32,
    pub erstellt_am: DateTime<Utc>,
}

/// Daten zum Anlegen eines neuen Kontos
#[derive(Debug, Clone)]
pub struct NeuesKonto<'a> {
    pub username: &'a str,
    pub passwort_hash: &'a [u8],
    pub passwort_salz: &'a [u8],
    pub pin_hash: &'a [u8],
    pub pin_salz: &'a [u8],
    pub kdf_iterationen: u32,
}
