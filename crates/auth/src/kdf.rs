//! Schluesselableitung mit PBKDF2-HMAC-SHA256
//!
//! Wandelt ein Klartext-Geheimnis (Passwort oder PIN) in eine verifizierbare,
//! nicht umkehrbare Darstellung um. Die Iterationszahl ist bewusst grosszuegig
//! gewaehlt – sie setzt eine Untergrenze fuer den Aufwand von Offline-
//! Brute-Force-Angriffen auf gestohlene Datensaetze. Sie darf nicht gesenkt
//! werden; eine Erhoehung ist moeglich, weil die Iterationszahl pro Konto
//! persistiert wird.

use hmac::Hmac;
use rand::{rngs::OsRng, RngCore};
use sha2::Sha256;
use subtle::ConstantTimeEq;

/// Laenge eines Salzes in Bytes
pub const SALZ_LAENGE: usize = 16;

/// Laenge des abgeleiteten Schluessels in Bytes
pub const SCHLUESSEL_LAENGE: usize = 32;

/// PBKDF2-Iterationszahl fuer neu abgeleitete Hashes
pub const PBKDF2_ITERATIONEN: u32 = 100_000;

type PbkdfSha256Hmac = Hmac<Sha256>;

/// Erzeugt ein frisches Salz aus dem OS-CSPRNG
///
/// Jeder Aufruf liefert ein neues Salz. Salz-Wiederverwendung ueber Konten
/// oder ueber Passwort-/PIN-Felder hinweg ist eine Korrektheitsverletzung.
pub fn salz_erzeugen() -> [u8; SALZ_LAENGE] {
    let mut salz = [0u8; SALZ_LAENGE];
    OsRng.fill_bytes(&mut salz);
    salz
}

/// Leitet einen 32-Byte-Schluessel aus Geheimnis und Salz ab
pub fn schluessel_ableiten(
    geheimnis: &str,
    salz: &[u8],
    iterationen: u32,
) -> [u8; SCHLUESSEL_LAENGE] {
    pbkdf2::pbkdf2_array::<PbkdfSha256Hmac, SCHLUESSEL_LAENGE>(
        geheimnis.as_bytes(),
        salz,
        iterationen,
    )
    .expect("HMAC akzeptiert Schluessel beliebiger Laenge")
}

/// Prueft ein Klartext-Geheimnis gegen einen gespeicherten Hash
///
/// Der Vergleich laeuft in konstanter Zeit: die Laufzeit haengt nicht davon
/// ab, an welcher Stelle sich die Byte-Folgen zuerst unterscheiden.
pub fn geheimnis_pruefen(
    geheimnis: &str,
    salz: &[u8],
    iterationen: u32,
    erwarteter_hash: &[u8],
) -> bool {
    let berechnet = schluessel_ableiten(geheimnis, salz, iterationen);
    berechnet.as_slice().ct_eq(erwarteter_hash).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Kleine Iterationszahl, damit die Tests schnell bleiben
    const TEST_ITER: u32 = 1_000;

    #[test]
    fn ableitung_ist_deterministisch() {
        let salz = [7u8; SALZ_LAENGE];
        let a = schluessel_ableiten("geheim", &salz, TEST_ITER);
        let b = schluessel_ableiten("geheim", &salz, TEST_ITER);
        assert_eq!(a, b);
        assert_eq!(a.len(), SCHLUESSEL_LAENGE);
    }

    #[test]
    fn verschiedene_salze_verschiedene_schluessel() {
        let salz1 = [1u8; SALZ_LAENGE];
        let salz2 = [2u8; SALZ_LAENGE];
        let a = schluessel_ableiten("gleiches_geheimnis", &salz1, TEST_ITER);
        let b = schluessel_ableiten("gleiches_geheimnis", &salz2, TEST_ITER);
        assert_ne!(a, b, "gleiches Geheimnis mit anderem Salz muss anderen Hash ergeben");
    }

    #[test]
    fn verschiedene_iterationszahlen_verschiedene_schluessel() {
        let salz = [3u8; SALZ_LAENGE];
        let a = schluessel_ableiten("geheim", &salz, TEST_ITER);
        let b = schluessel_ableiten("geheim", &salz, TEST_ITER + 1);
        assert_ne!(a, b);
    }

    #[test]
    fn salz_erzeugen_liefert_frische_werte() {
        let a = salz_erzeugen();
        let b = salz_erzeugen();
        assert_eq!(a.len(), SALZ_LAENGE);
        assert_ne!(a, b, "zwei Aufrufe duerfen nicht dasselbe Salz liefern");
    }

    #[test]
    fn pruefen_akzeptiert_richtiges_geheimnis() {
        let salz = salz_erzeugen();
        let hash = schluessel_ableiten("richtig", &salz, TEST_ITER);
        assert!(geheimnis_pruefen("richtig", &salz, TEST_ITER, &hash));
    }

    #[test]
    fn pruefen_lehnt_falsches_geheimnis_ab() {
        let salz = salz_erzeugen();
        let hash = schluessel_ableiten("richtig", &salz, TEST_ITER);
        assert!(!geheimnis_pruefen("falsch", &salz, TEST_ITER, &hash));
    }

    #[test]
    fn pruefen_lehnt_abweichende_laenge_ab() {
        let salz = salz_erzeugen();
        let hash = schluessel_ableiten("richtig", &salz, TEST_ITER);
        assert!(!geheimnis_pruefen("richtig", &salz, TEST_ITER, &hash[..16]));
    }
}
