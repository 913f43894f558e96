//! Validierungsrichtlinie fuer Benutzername, Passwort und PIN
//!
//! Die Grenzen sind konfigurierbar, die Standardwerte entsprechen dem
//! Verhalten der Kassenanwendung: Passwort mindestens 6 Zeichen,
//! PIN 4 bis 8 ASCII-Ziffern.

use serde::{Deserialize, Serialize};

use crate::error::{AuthError, AuthResult};

/// Richtlinie fuer die Eingabevalidierung
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Passwortrichtlinie {
    /// Minimale Passwortlaenge in Zeichen
    pub min_passwort_laenge: usize,
    /// Minimale PIN-Laenge in Ziffern
    pub pin_min_ziffern: usize,
    /// Maximale PIN-Laenge in Ziffern
    pub pin_max_ziffern: usize,
}

impl Default for Passwortrichtlinie {
    fn default() -> Self {
        Self {
            min_passwort_laenge: 6,
            pin_min_ziffern: 4,
            pin_max_ziffern: 8,
        }
    }
}

impl Passwortrichtlinie {
    /// Prueft und trimmt einen Benutzernamen
    ///
    /// Gibt den getrimmten Namen zurueck; leer nach dem Trimmen ist ungueltig.
    pub fn benutzername_pruefen<'a>(&self, username: &'a str) -> AuthResult<&'a str> {
        let getrimmt = username.trim();
        if getrimmt.is_empty() {
            return Err(AuthError::eingabe("Benutzername erforderlich"));
        }
        Ok(getrimmt)
    }

    /// Prueft ein Passwort gegen die Mindestlaenge
    ///
    /// Ein Passwort, das nur aus Whitespace besteht, ist unabhaengig von
    /// seiner Laenge ungueltig.
    pub fn passwort_pruefen(&self, passwort: &str) -> AuthResult<()> {
        if passwort.trim().is_empty() || passwort.chars().count() < self.min_passwort_laenge {
            return Err(AuthError::eingabe(format!(
                "Passwort muss mindestens {} Zeichen lang sein",
                self.min_passwort_laenge
            )));
        }
        Ok(())
    }

    /// Prueft eine PIN: nur ASCII-Ziffern, Laenge innerhalb der Grenzen
    pub fn pin_pruefen(&self, pin: &str) -> AuthResult<()> {
        let nur_ziffern = !pin.is_empty() && pin.chars().all(|c| c.is_ascii_digit());
        if !nur_ziffern || pin.len() < self.pin_min_ziffern || pin.len() > self.pin_max_ziffern {
            return Err(AuthError::eingabe(format!(
                "PIN muss aus {}-{} Ziffern bestehen",
                self.pin_min_ziffern, self.pin_max_ziffern
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn richtlinie() -> Passwortrichtlinie {
        Passwortrichtlinie::default()
    }

    #[test]
    fn benutzername_wird_getrimmt() {
        let r = richtlinie();
        assert_eq!(r.benutzername_pruefen("  chef  ").unwrap(), "chef");
    }

    #[test]
    fn leerer_benutzername_abgelehnt() {
        let r = richtlinie();
        assert!(r.benutzername_pruefen("").is_err());
        assert!(r.benutzername_pruefen("   ").is_err());
    }

    #[test]
    fn passwort_grenzlaengen() {
        let r = richtlinie();
        assert!(r.passwort_pruefen("sechs6").is_ok(), "genau 6 Zeichen sind gueltig");
        assert!(r.passwort_pruefen("fuenf").is_err(), "5 Zeichen sind ungueltig");
        assert!(r.passwort_pruefen("").is_err());
    }

    #[test]
    fn nur_whitespace_passwort_abgelehnt() {
        let r = richtlinie();
        assert!(r.passwort_pruefen("      ").is_err(), "6 Leerzeichen sind ungueltig");
        assert!(r.passwort_pruefen("\t\t\t\t\t\t").is_err());
        assert!(r.passwort_pruefen("a b c 1").is_ok(), "innere Leerzeichen sind erlaubt");
    }

    #[test]
    fn pin_grenzlaengen() {
        let r = richtlinie();
        assert!(r.pin_pruefen("1234").is_ok(), "4 Ziffern sind gueltig");
        assert!(r.pin_pruefen("12345678").is_ok(), "8 Ziffern sind gueltig");
        assert!(r.pin_pruefen("123").is_err(), "3 Ziffern sind ungueltig");
        assert!(r.pin_pruefen("123456789").is_err(), "9 Ziffern sind ungueltig");
    }

    #[test]
    fn pin_nur_ascii_ziffern() {
        let r = richtlinie();
        assert!(r.pin_pruefen("12a4").is_err());
        assert!(r.pin_pruefen("12 4").is_err());
        assert!(r.pin_pruefen("١٢٣٤").is_err(), "Nicht-ASCII-Ziffern sind ungueltig");
        assert!(r.pin_pruefen("").is_err());
    }

    #[test]
    fn standardwerte() {
        let r = richtlinie();
        assert_eq!(r.min_passwort_laenge, 6);
        assert_eq!(r.pin_min_ziffern, 4);
        assert_eq!(r.pin_max_ziffern, 8);
    }
}
