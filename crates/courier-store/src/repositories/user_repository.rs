//! User document repository.
//!
//! The `contacts` column is written only through `union_contacts`, an
//! additive, order-preserving, de-duplicating append executed inside a
//! caller-owned transaction. Concurrent contact additions to the same
//! document therefore serialize at the store and cannot lose entries,
//! and a retried append is a no-op.

use crate::{DocumentWatcher, Result, StoreError};

use courier_core::{ContactSummary, UserDocument, merge_union};

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, Sqlite, SqlitePool, Transaction};
use tokio::sync::watch;
use uuid::Uuid;

#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
    watcher: DocumentWatcher,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            watcher: DocumentWatcher::new(),
        }
    }

    pub async fn create(&self, doc: &UserDocument) -> Result<()> {
        let id = doc.id.to_string();
        let last_seen = doc.last_seen.map(|dt| dt.timestamp_millis());
        let contacts = doc
            .contacts
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;

        sqlx::query(
            r#"
                INSERT INTO users (
                    id, email, display_name, photo_url, email_verified,
                    last_seen, contacts
                ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(&doc.email)
        .bind(&doc.display_name)
        .bind(&doc.photo_url)
        .bind(doc.email_verified)
        .bind(last_seen)
        .bind(contacts)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<UserDocument>> {
        let row = sqlx::query(
            r#"
                SELECT id, email, display_name, photo_url, email_verified,
                    last_seen, contacts
                FROM users
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(row_to_document).transpose()
    }

    /// Identity lookup: resolve a sign-in email to an identity token.
    /// Email is unique, so this returns zero or one id.
    pub async fn find_id_by_email(&self, email: &str) -> Result<Option<Uuid>> {
        let row = sqlx::query("SELECT id FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| -> Result<Uuid> {
            let id: String = r.try_get("id")?;
            Uuid::parse_str(&id)
                .map_err(|e| StoreError::corrupt(format!("invalid UUID in users.id: {}", e)))
        })
        .transpose()
    }

    /// Begin a write transaction for a read-check-write sequence.
    ///
    /// The write lock is taken up front. A deferred begin would read from a
    /// snapshot and then fail the upgrade to a write lock as soon as another
    /// writer commits first; sqlite reports that as busy without invoking
    /// the busy handler, so concurrent unions would error instead of queue.
    pub async fn begin(&self) -> Result<Transaction<'static, Sqlite>> {
        Ok(self.pool.begin_with("BEGIN IMMEDIATE").await?)
    }

    /// Read a user document inside a transaction.
    pub async fn find_by_id_tx(
        tx: &mut Transaction<'_, Sqlite>,
        id: Uuid,
    ) -> Result<Option<UserDocument>> {
        let row = sqlx::query(
            r#"
                SELECT id, email, display_name, photo_url, email_verified,
                    last_seen, contacts
                FROM users
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&mut **tx)
        .await?;

        row.as_ref().map(row_to_document).transpose()
    }

    /// Additive union write on the contact list.
    ///
    /// Reads the current array (NULL counts as empty), appends the additions
    /// not already present by exact value, and writes the result back.
    /// Returns the number of entries actually appended.
    ///
    /// This method REQUIRES a transaction: the read and the write must be
    /// atomic relative to other writers of the same document.
    pub async fn union_contacts(
        tx: &mut Transaction<'_, Sqlite>,
        owner: Uuid,
        additions: &[ContactSummary],
    ) -> Result<usize> {
        let owner_id = owner.to_string();

        let row = sqlx::query("SELECT contacts FROM users WHERE id = ?")
            .bind(&owner_id)
            .fetch_one(&mut **tx)
            .await?;

        let raw: Option<String> = row.try_get("contacts")?;
        let existing: Vec<ContactSummary> = match raw {
            Some(json) => serde_json::from_str(&json)?,
            None => Vec::new(),
        };

        let merged = merge_union(&existing, additions);
        let appended = merged.len() - existing.len();
        let encoded = serde_json::to_string(&merged)?;

        sqlx::query("UPDATE users SET contacts = ? WHERE id = ?")
            .bind(encoded)
            .bind(&owner_id)
            .execute(&mut **tx)
            .await?;

        Ok(appended)
    }

    pub async fn update_last_seen(&self, id: Uuid, when: DateTime<Utc>) -> Result<()> {
        sqlx::query("UPDATE users SET last_seen = ? WHERE id = ?")
            .bind(when.timestamp_millis())
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        self.publish(id).await
    }

    /// Push the current committed snapshot to watchers. Call after a
    /// transaction on the document commits.
    pub async fn publish(&self, id: Uuid) -> Result<()> {
        let snapshot = self.find_by_id(id).await?;
        self.watcher.publish(id, snapshot).await;
        Ok(())
    }

    /// Live subscription to a user's document: the receiver holds the
    /// current snapshot immediately and the latest snapshot after every
    /// committed write.
    pub async fn watch(&self, id: Uuid) -> Result<watch::Receiver<Option<UserDocument>>> {
        let initial = self.find_by_id(id).await?;
        Ok(self.watcher.subscribe(id, initial).await)
    }
}

fn row_to_document(row: &SqliteRow) -> Result<UserDocument> {
    let id: String = row.try_get("id")?;
    let id = Uuid::parse_str(&id)
        .map_err(|e| StoreError::corrupt(format!("invalid UUID in users.id: {}", e)))?;

    let contacts: Option<String> = row.try_get("contacts")?;
    let contacts: Option<Vec<ContactSummary>> = contacts
        .map(|json| serde_json::from_str(&json))
        .transpose()?;

    let last_seen: Option<i64> = row.try_get("last_seen")?;
    let last_seen = last_seen.and_then(DateTime::from_timestamp_millis);

    Ok(UserDocument {
        id,
        email: row.try_get("email")?,
        display_name: row.try_get("display_name")?,
        photo_url: row.try_get("photo_url")?,
        email_verified: row.try_get("email_verified")?,
        last_seen,
        contacts,
    })
}
