//! Fehlertypen fuer den Auth-Service
//!
//! `UngueltigeAnmeldedaten` und `UngueltigePin` sind absichtlich generisch:
//! sie unterscheiden nicht zwischen "Geheimnis falsch" und "Konto unbekannt",
//! damit ueber die Fehlermeldung keine Kontoexistenz abgeleitet werden kann.

use thiserror::Error;

/// Alle moeglichen Fehler im Auth-Service
#[derive(Debug, Error)]
pub enum AuthError {
    // --- Eingabevalidierung (spezifisch, fuer den Benutzer bestimmt) ---
    #[error("{0}")]
    UngueltigeEingabe(String),

    // --- Domaenenzustand ---
    #[error("Benutzername bereits vergeben: {0}")]
    BenutzernameVergeben(String),

    #[error("Benutzer nicht gefunden: {0}")]
    BenutzerNichtGefunden(String),

    // --- Authentifizierung (generisch) ---
    #[error("Benutzername oder Passwort falsch")]
    UngueltigeAnmeldedaten,

    #[error("PIN falsch")]
    UngueltigePin,

    // --- Infrastruktur ---
    #[error("Datenbankfehler: {0}")]
    Datenbank(#[from] ladenkasse_db::DbError),
}

impl AuthError {
    pub fn eingabe(msg: impl Into<String>) -> Self {
        Self::UngueltigeEingabe(msg.into())
    }
}

/// Result-Alias fuer den Auth-Service
pub type AuthResult<T> = Result<T, AuthError>;
