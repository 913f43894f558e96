//! SQLite-Implementierung des KontoRepository

use chrono::Utc;
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use crate::models::{KontoId, KontoRecord, NeuesKonto};
use crate::repository::KontoRepository;
use crate::sqlite::pool::SqliteDb;

impl KontoRepository for SqliteDb {
    async fn create(&self, data: NeuesKonto<'_>) -> DbResult<KontoRecord> {
        let id = KontoId::new();
        let now = Utc::now();

        sqlx::query(
            "INSERT INTO konten (id, username, passwort_hash, passwort_salz, pin_hash, pin_salz, kdf_iterationen, erstellt_am)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(id.inner().to_string())
        .bind(data.username)
        .bind(data.passwort_hash)
        .bind(data.passwort_salz)
        .bind(data.pin_hash)
        .bind(data.pin_salz)
        .bind(i64::from(data.kdf_iterationen))
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let msg = e.to_string();
            if msg.contains("UNIQUE") || msg.contains("unique") {
                DbError::Eindeutigkeit(format!("Benutzername '{}' bereits vergeben", data.username))
            } else {
                DbError::Sqlx(e)
            }
        })?;

        Ok(KontoRecord {
            id,
            username: data.username.to_string(),
            passwort_hash: data.passwort_hash.to_vec(),
            passwort_salz: data.passwort_salz.to_vec(),
            pin_hash: data.pin_hash.to_vec(),
            pin_salz: data.pin_salz.to_vec(),
            kdf_iterationen: data.kdf_iterationen,
            erstellt_am: now,
        })
    }

    async fn get_by_name(&self, username: &str) -> DbResult<Option<KontoRecord>> {
        let row = sqlx::query(
            "SELECT id, username, passwort_hash, passwort_salz, pin_hash, pin_salz, kdf_iterationen, erstellt_am
             FROM konten WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| row_to_konto(&r)).transpose()
    }

    async fn update_passwort(
        &self,
        username: &str,
        passwort_hash: &[u8],
        passwort_salz: &[u8],
        kdf_iterationen: u32,
    ) -> DbResult<()> {
        // Nur der Passwort-Teilzustand wird ueberschrieben;
        // PIN-Felder und erstellt_am bleiben unangetastet.
        let affected = sqlx::query(
            "UPDATE konten SET passwort_hash = ?, passwort_salz = ?, kdf_iterationen = ?
             WHERE username = ?",
        )
        .bind(passwort_hash)
        .bind(passwort_salz)
        .bind(i64::from(kdf_iterationen))
        .bind(username)
        .execute(&self.pool)
        .await?
        .rows_affected();

        if affected == 0 {
            return Err(DbError::nicht_gefunden(format!("Konto '{username}'")));
        }
        Ok(())
    }
}

fn row_to_konto(row: &sqlx::sqlite::SqliteRow) -> DbResult<KontoRecord> {
    use sqlx::Row as _;

    let id_str: String = row.try_get("id")?;
    let id = Uuid::parse_str(&id_str)
        .map_err(|e| DbError::intern(format!("Ungueltige UUID '{id_str}': {e}")))?;

    let erstellt_am_str: String = row.try_get("erstellt_am")?;
    let erstellt_am = chrono::DateTime::parse_from_rfc3339(&erstellt_am_str)
        .map_err(|e| DbError::intern(format!("Ungueltige erstellt_am '{erstellt_am_str}': {e}")))?
        .with_timezone(&Utc);

    let kdf_iterationen: i64 = row.try_get("kdf_iterationen")?;
    let kdf_iterationen = u32::try_from(kdf_iterationen)
        .map_err(|_| DbError::intern(format!("Ungueltige Iterationszahl {kdf_iterationen}")))?;

    Ok(KontoRecord {
        id: KontoId(id),
        username: row.try_get("username")?,
        passwort_hash: row.try_get("passwort_hash")?,
        passwort_salz: row.try_get("passwort_salz")?,
        pin_hash: row.try_get("pin_hash")?,
        pin_salz: row.try_get("pin_salz")?,
        kdf_iterationen,
        erstellt_am,
    })
}
