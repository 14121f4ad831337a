//! User directory context.
//!
//! Tracks the documents of users the session has taken an interest in,
//! holds the signed-in user's live snapshot, and runs the contact-add
//! flow. State is mutated only through this context's own methods; the
//! watch task replaces the cached snapshot wholesale on every committed
//! write (last full snapshot wins).

use crate::error::{AppError, Result};

use courier_core::{ContactSummary, UserDocument};
use courier_store::UserRepository;

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use uuid::Uuid;

/// One-shot prompt shown when an action needs a signed-in user.
pub const PROMPT_SIGN_IN_REQUIRED: &str = "You need to sign in first";
/// One-shot prompt shown on a self-addition attempt.
pub const PROMPT_SELF_REFERENCE: &str = "You can't add yourself";
/// One-shot prompt shown when the target is already a contact.
pub const PROMPT_DUPLICATE_CONTACT: &str = "You've already added this user";

pub struct UserDirectory {
    repo: UserRepository,
    tracked: RwLock<HashMap<Uuid, UserDocument>>,
    current: RwLock<Option<Uuid>>,
    snapshot: Arc<RwLock<Option<UserDocument>>>,
    prompt: RwLock<Option<String>>,
    watch_task: Mutex<Option<JoinHandle<()>>>,
}

impl UserDirectory {
    pub fn new(repo: UserRepository) -> Self {
        Self {
            repo,
            tracked: RwLock::new(HashMap::new()),
            current: RwLock::new(None),
            snapshot: Arc::new(RwLock::new(None)),
            prompt: RwLock::new(None),
            watch_task: Mutex::new(None),
        }
    }

    /// Start tracking a user's document. Idempotent: a re-registration is a
    /// logged no-op. Fetch failures are logged and swallowed - the profile
    /// is simply absent from the tracked set.
    pub async fn register_interest(&self, id: Uuid) {
        {
            let tracked = self.tracked.read().await;
            if tracked.contains_key(&id) {
                log::debug!("Already tracking user {}", id);
                return;
            }
        }

        match self.repo.find_by_id(id).await {
            Ok(Some(doc)) => {
                let mut tracked = self.tracked.write().await;
                tracked.insert(id, doc);
            }
            Ok(None) => {
                log::debug!("No document for user {}", id);
            }
            Err(e) => {
                log::error!("Failed to fetch document for user {}: {}", id, e);
            }
        }
    }

    /// Sign in: point the context at `id`, subscribe to that user's
    /// document, and keep the cached snapshot current. Any previous watch
    /// task is torn down first.
    pub async fn set_current_user(&self, id: Uuid) -> Result<()> {
        self.stop_watch_task().await;

        let mut rx = self.repo.watch(id).await?;

        {
            let mut current = self.current.write().await;
            *current = Some(id);
        }
        {
            let mut snapshot = self.snapshot.write().await;
            *snapshot = rx.borrow_and_update().clone();
        }

        let snapshot = Arc::clone(&self.snapshot);
        let task = tokio::spawn(async move {
            while rx.changed().await.is_ok() {
                let latest = rx.borrow_and_update().clone();
                let mut snapshot = snapshot.write().await;
                *snapshot = latest;
            }
            log::debug!("Watch channel for user {} closed", id);
        });

        let mut watch_task = self.watch_task.lock().await;
        *watch_task = Some(task);
        Ok(())
    }

    /// Sign out: clears the pointer, the cached snapshot, the prompt, and
    /// the watch task. Tracked documents are kept.
    pub async fn sign_out(&self) {
        self.stop_watch_task().await;
        *self.current.write().await = None;
        *self.snapshot.write().await = None;
        *self.prompt.write().await = None;
    }

    /// Add `target` to the signed-in user's contact list.
    ///
    /// Validation failures (`Unauthenticated`, `SelfReference`,
    /// `DuplicateContact`) set the one-shot prompt; store failures are
    /// logged only. Either way the contact list is left unchanged on error.
    pub async fn add_to_contacts(&self, target: Uuid) -> Result<()> {
        self.set_prompt(None).await;

        let Some(current) = self.current_user().await else {
            self.set_prompt(Some(PROMPT_SIGN_IN_REQUIRED)).await;
            return Err(AppError::unauthenticated());
        };

        if target == current {
            self.set_prompt(Some(PROMPT_SELF_REFERENCE)).await;
            return Err(AppError::self_reference());
        }

        match self.union_in_transaction(current, Some(target)).await {
            Ok(()) => {
                self.publish_after_commit(current).await;
                Ok(())
            }
            Err(e @ AppError::DuplicateContact { .. }) => {
                self.set_prompt(Some(PROMPT_DUPLICATE_CONTACT)).await;
                Err(e)
            }
            Err(e @ AppError::Store { .. }) => {
                log::error!("Contact addition failed for user {}: {}", current, e);
                Err(e)
            }
            Err(e) => Err(e),
        }
    }

    /// Seed an uninitialized contact list with the user's own summary.
    /// A list that is already initialized is left as it is.
    pub async fn initialize_contacts(&self) -> Result<()> {
        let Some(current) = self.current_user().await else {
            return Err(AppError::unauthenticated());
        };

        self.union_in_transaction(current, None).await?;
        self.publish_after_commit(current).await;
        Ok(())
    }

    /// The transactional read-check-write at the heart of the contact flow.
    ///
    /// Reads the owner's row, resolves the target summary (tracked set
    /// first, then a fetch inside the same transaction), and applies the
    /// additive union. An uninitialized list is seeded with the owner's own
    /// summary read from this transaction, so a stale cache cannot leak in.
    /// Any early return drops the transaction, which rolls it back.
    async fn union_in_transaction(&self, owner_id: Uuid, target: Option<Uuid>) -> Result<()> {
        let mut tx = self.repo.begin().await?;

        let owner = UserRepository::find_by_id_tx(&mut tx, owner_id)
            .await?
            .ok_or_else(|| AppError::not_found(owner_id))?;

        let target_summary = match target {
            Some(target_id) => Some(match self.tracked_summary(target_id).await {
                Some(summary) => summary,
                None => UserRepository::find_by_id_tx(&mut tx, target_id)
                    .await?
                    .map(|doc| doc.summary())
                    .ok_or_else(|| AppError::not_found(target_id))?,
            }),
            None => None,
        };

        let mut additions = Vec::new();
        if !owner.has_contact_list() {
            additions.push(owner.summary());
        }
        if let Some(summary) = target_summary {
            if owner.has_contact(&summary.email) {
                return Err(AppError::duplicate_contact(summary.email));
            }
            additions.push(summary);
        }

        if additions.is_empty() {
            // Initialization of a list that is already initialized.
            return Ok(());
        }

        UserRepository::union_contacts(&mut tx, owner_id, &additions).await?;
        tx.commit().await.map_err(courier_store::StoreError::from)?;
        Ok(())
    }

    /// Tracked documents, as a cloned read-only view.
    pub async fn tracked_documents(&self) -> HashMap<Uuid, UserDocument> {
        self.tracked.read().await.clone()
    }

    pub async fn current_user(&self) -> Option<Uuid> {
        *self.current.read().await
    }

    pub async fn current_snapshot(&self) -> Option<UserDocument> {
        self.snapshot.read().await.clone()
    }

    /// The one-shot prompt. Overwritten by each attempt, cleared at the
    /// start of the next.
    pub async fn prompt(&self) -> Option<String> {
        self.prompt.read().await.clone()
    }

    async fn tracked_summary(&self, id: Uuid) -> Option<ContactSummary> {
        let tracked = self.tracked.read().await;
        tracked.get(&id).map(UserDocument::summary)
    }

    async fn set_prompt(&self, prompt: Option<&str>) {
        *self.prompt.write().await = prompt.map(String::from);
    }

    /// Watchers are notified only after the transaction committed. A
    /// publish failure leaves subscribers one snapshot behind, which the
    /// next committed write repairs.
    async fn publish_after_commit(&self, id: Uuid) {
        if let Err(e) = self.repo.publish(id).await {
            log::error!("Failed to publish snapshot for user {}: {}", id, e);
        }
    }

    async fn stop_watch_task(&self) {
        let mut watch_task = self.watch_task.lock().await;
        if let Some(task) = watch_task.take() {
            task.abort();
        }
    }
}

impl Drop for UserDirectory {
    fn drop(&mut self) {
        if let Ok(mut watch_task) = self.watch_task.try_lock()
            && let Some(task) = watch_task.take()
        {
            task.abort();
        }
    }
}
