//! ladenkasse-auth – lokale Anmeldung und Konto-Wiederherstellung
//!
//! Dieses Crate implementiert:
//! - Schluesselableitung mit PBKDF2-HMAC-SHA256 (frisches Salz pro Geheimnis)
//! - Konstantzeit-Verifikation gespeicherter Hashes
//! - Validierungsrichtlinie fuer Benutzername, Passwort und Master-PIN
//! - AuthService (Registrierung, Anmeldung, Master-PIN-Pruefung,
//!   Passwort-Zuruecksetzen)
//!
//! Die Persistenz laeuft ueber den Credential Store aus `ladenkasse-db`;
//! der Store wird dem Service explizit injiziert.

pub mod error;
pub mod kdf;
pub mod richtlinie;
pub mod service;

// Bequeme Re-Exporte
pub use error::{AuthError, AuthResult};
pub use kdf::{geheimnis_pruefen, salz_erzeugen, schluessel_ableiten, PBKDF2_ITERATIONEN};
pub use richtlinie::Passwortrichtlinie;
pub use service::AuthService;
