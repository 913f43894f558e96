//! Auth-Service fuer Ladenkasse
//!
//! Zustandslose Fassade ueber dem Credential Store: Registrierung, Anmeldung,
//! Master-PIN-Pruefung und Passwort-Zuruecksetzen. Jede Operation validiert
//! ihre Eingaben, hasht bzw. prueft Geheimnisse und fuehrt hoechstens einen
//! Lese- und einen Schreibzugriff aus. Zwischen den Aufrufen wird nichts
//! gecacht; jede Operation ist unabhaengig wiederholbar.
//!
//! Die Reihenfolge "erst PIN pruefen, dann Passwort zuruecksetzen" wird vom
//! aufrufenden Wiederherstellungs-Dialog sichergestellt, nicht von diesem
//! Service.

use std::sync::Arc;

use ladenkasse_db::{models::NeuesKonto, KontoRecord, KontoRepository};

use crate::{
    error::{AuthError, AuthResult},
    kdf::{self, PBKDF2_ITERATIONEN, SALZ_LAENGE},
    richtlinie::Passwortrichtlinie,
};

/// Festes Salz fuer die Blind-Ableitung bei unbekanntem Benutzernamen.
/// Gleicht die Laufzeit des Nicht-gefunden-Pfads an den Falsch-Passwort-Pfad
/// an, damit sich beide Faelle nicht per Zeitmessung unterscheiden lassen.
const AUSGLEICHS_SALZ: [u8; SALZ_LAENGE] = [0x5a; SALZ_LAENGE];

/// Auth-Service – zentraler Einstiegspunkt fuer alle Anmeldevorgaenge
///
/// Der Credential Store wird explizit injiziert; es gibt keinen globalen
/// Zustand und keinen Service-Locator.
pub struct AuthService<R: KontoRepository> {
    repo: Arc<R>,
    richtlinie: Passwortrichtlinie,
}

impl<R: KontoRepository> AuthService<R> {
    /// Erstellt einen neuen AuthService mit Standard-Richtlinie
    pub fn neu(repo: Arc<R>) -> Self {
        Self {
            repo,
            richtlinie: Passwortrichtlinie::default(),
        }
    }

    /// Erstellt einen AuthService mit eigener Validierungsrichtlinie
    pub fn mit_richtlinie(repo: Arc<R>, richtlinie: Passwortrichtlinie) -> Self {
        Self { repo, richtlinie }
    }

    /// Registriert ein neues Konto
    ///
    /// Passwort und Master-PIN erhalten jeweils ein eigenes, frisches Salz.
    /// Der Datensatz wird mit einem einzigen Insert angelegt; ein verlorenes
    /// Rennen gegen eine gleichzeitige Registrierung desselben Namens wird
    /// vom Unique-Index der Datenbank gemeldet.
    pub async fn registrieren(
        &self,
        username: &str,
        passwort: &str,
        master_pin: &str,
    ) -> AuthResult<()> {
        let username = self.richtlinie.benutzername_pruefen(username)?;
        self.richtlinie.passwort_pruefen(passwort)?;
        self.richtlinie.pin_pruefen(master_pin)?;

        if self.repo.get_by_name(username).await?.is_some() {
            return Err(AuthError::BenutzernameVergeben(username.to_string()));
        }

        let passwort_salz = kdf::salz_erzeugen();
        let passwort_hash = kdf::schluessel_ableiten(passwort, &passwort_salz, PBKDF2_ITERATIONEN);
        let pin_salz = kdf::salz_erzeugen();
        let pin_hash = kdf::schluessel_ableiten(master_pin, &pin_salz, PBKDF2_ITERATIONEN);

        let ergebnis = self
            .repo
            .create(NeuesKonto {
                username,
                passwort_hash: &passwort_hash,
                passwort_salz: &passwort_salz,
                pin_hash: &pin_hash,
                pin_salz: &pin_salz,
                kdf_iterationen: PBKDF2_ITERATIONEN,
            })
            .await;

        let konto = match ergebnis {
            Ok(konto) => konto,
            Err(e) if e.ist_eindeutigkeit() => {
                return Err(AuthError::BenutzernameVergeben(username.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        tracing::info!(
            konto_id = %konto.id,
            username = %konto.username,
            "Neues Konto registriert"
        );

        Ok(())
    }

    /// Meldet einen Benutzer mit Passwort an
    ///
    /// Unbekannter Benutzername und falsches Passwort liefern denselben
    /// generischen Fehler. Auch bei unbekanntem Namen wird eine Ableitung
    /// durchgefuehrt, damit der Pfad nicht messbar schneller ist.
    /// Keine Mutation auf beiden Pfaden.
    pub async fn anmelden(&self, username: &str, passwort: &str) -> AuthResult<KontoRecord> {
        let username = username.trim();
        if username.is_empty() || passwort.is_empty() {
            return Err(AuthError::eingabe("Benutzername und Passwort erforderlich"));
        }

        let Some(konto) = self.repo.get_by_name(username).await? else {
            // Blind-Ableitung gegen festes Salz, Ergebnis wird verworfen
            let _ = kdf::schluessel_ableiten(passwort, &AUSGLEICHS_SALZ, PBKDF2_ITERATIONEN);
            tracing::warn!(username = %username, "Fehlgeschlagener Login-Versuch");
            return Err(AuthError::UngueltigeAnmeldedaten);
        };

        let korrekt = kdf::geheimnis_pruefen(
            passwort,
            &konto.passwort_salz,
            konto.kdf_iterationen,
            &konto.passwort_hash,
        );
        if !korrekt {
            tracing::warn!(username = %username, "Fehlgeschlagener Login-Versuch");
            return Err(AuthError::UngueltigeAnmeldedaten);
        }

        tracing::info!(konto_id = %konto.id, username = %konto.username, "Benutzer angemeldet");
        Ok(konto)
    }

    /// Prueft die Master-PIN eines Kontos
    ///
    /// Rein lesend; dient als Freigabeschritt vor dem Passwort-Zuruecksetzen.
    pub async fn master_pin_pruefen(&self, username: &str, pin: &str) -> AuthResult<()> {
        let username = username.trim();

        let konto = self
            .repo
            .get_by_name(username)
            .await?
            .ok_or_else(|| AuthError::BenutzerNichtGefunden(username.to_string()))?;

        let korrekt = kdf::geheimnis_pruefen(
            pin,
            &konto.pin_salz,
            konto.kdf_iterationen,
            &konto.pin_hash,
        );
        if !korrekt {
            tracing::warn!(username = %username, "Fehlgeschlagene Master-PIN-Pruefung");
            return Err(AuthError::UngueltigePin);
        }

        Ok(())
    }

    /// Setzt das Passwort eines Kontos neu
    ///
    /// Ueberschreibt Passwort-Hash und -Salz in place mit einem einzigen
    /// Update; Master-PIN und Erstellungszeitpunkt bleiben unveraendert.
    pub async fn passwort_zuruecksetzen(
        &self,
        username: &str,
        neues_passwort: &str,
    ) -> AuthResult<()> {
        self.richtlinie.passwort_pruefen(neues_passwort)?;
        let username = username.trim();

        if self.repo.get_by_name(username).await?.is_none() {
            return Err(AuthError::BenutzerNichtGefunden(username.to_string()));
        }

        let salz = kdf::salz_erzeugen();
        let hash = kdf::schluessel_ableiten(neues_passwort, &salz, PBKDF2_ITERATIONEN);

        self.repo
            .update_passwort(username, &hash, &salz, PBKDF2_ITERATIONEN)
            .await?;

        tracing::info!(username = %username, "Passwort zurueckgesetzt");
        Ok(())
    }
}
