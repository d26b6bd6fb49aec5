//! Backend Operations
//!
//! Frontend bindings to the hosted backend: every auth, inventory, memory,
//! and event operation the views perform, with session refresh handled in
//! one place. Collections are namespaced per authenticated user.

use leptos::prelude::*;

use crate::config::FirebaseConfig;
use crate::context::AuthContext;
use crate::firebase::auth::{load_session, AuthClient, Session};
use crate::firebase::error::FirebaseError;
use crate::firebase::firestore::Firestore;
use crate::firebase::listen::{self, Subscription};
use crate::models::{
    EventInput, Memory, MemoryEvent, MemoryInput, StockItem, StockItemInput,
};
use crate::stats;

pub type Snapshot<T> = Result<Vec<T>, FirebaseError>;

#[derive(Clone)]
pub struct Api {
    auth_client: AuthClient,
    db: Firestore,
    pub auth: AuthContext,
    pub config: FirebaseConfig,
}

pub fn use_api() -> Api {
    expect_context::<Api>()
}

impl Api {
    pub fn new(config: FirebaseConfig, auth: AuthContext) -> Self {
        Self {
            auth_client: AuthClient::new(config),
            db: Firestore::new(&config),
            auth,
            config,
        }
    }

    // ========================
    // Sessions
    // ========================

    /// Restore the persisted session on startup; resolves the auth state to
    /// signed-in (validated against the backend) or signed-out.
    pub async fn restore_session(&self) {
        let Some(session) = load_session() else {
            self.auth.set_signed_out();
            return;
        };
        match self.validate(session).await {
            Ok(session) => self.auth.set_signed_in(session),
            Err(err) => {
                web_sys::console::warn_1(
                    &format!("[auth] stored session rejected: {err}").into(),
                );
                self.auth.set_signed_out();
            }
        }
    }

    async fn validate(&self, mut session: Session) -> Result<Session, FirebaseError> {
        if session.is_expired() {
            session = self.auth_client.refresh(&session).await?;
        }
        let account = self.auth_client.lookup(&session.id_token).await?;
        session.email = account.email;
        session.display_name = account.display_name;
        Ok(session)
    }

    /// A session whose ID token is valid right now, refreshing if needed.
    async fn fresh_session(&self) -> Result<Session, FirebaseError> {
        let session = self.auth.session().ok_or(FirebaseError::NotSignedIn)?;
        if !session.is_expired() {
            return Ok(session);
        }
        let refreshed = self.auth_client.refresh(&session).await?;
        self.auth.set_signed_in(refreshed.clone());
        Ok(refreshed)
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<(), FirebaseError> {
        let session = self.auth_client.sign_in_with_password(email, password).await?;
        self.auth.set_signed_in(session);
        Ok(())
    }

    /// Create the account, then set its display name.
    pub async fn register(
        &self,
        display_name: &str,
        email: &str,
        password: &str,
    ) -> Result<(), FirebaseError> {
        let mut session = self.auth_client.sign_up(email, password).await?;
        let kept = self
            .auth_client
            .update_profile(&session.id_token, display_name)
            .await?;
        session.display_name = kept.or_else(|| Some(display_name.to_string()));
        self.auth.set_signed_in(session);
        Ok(())
    }

    pub async fn sign_in_with_google(&self, google_id_token: &str) -> Result<(), FirebaseError> {
        let session = self.auth_client.sign_in_with_google(google_id_token).await?;
        self.auth.set_signed_in(session);
        Ok(())
    }

    /// Drop the local session. The REST surface has no server-side sign-out;
    /// the tokens simply stop being used.
    pub fn sign_out(&self) {
        self.auth.set_signed_out();
    }

    // ========================
    // Inventory
    // ========================

    fn inventory_collection(uid: &str) -> String {
        format!("users/{uid}/inventory")
    }

    fn inventory_doc(uid: &str, id: &str) -> String {
        format!("users/{uid}/inventory/{id}")
    }

    pub async fn list_inventory(&self) -> Snapshot<StockItem> {
        let session = self.fresh_session().await?;
        let docs = self
            .db
            .list(&session.id_token, &Self::inventory_collection(&session.local_id))
            .await?;
        let mut items = docs
            .iter()
            .map(StockItem::from_document)
            .collect::<Result<Vec<_>, _>>()?;
        stats::sort_items_newest_first(&mut items);
        Ok(items)
    }

    /// Live inventory snapshots until the handle is unsubscribed.
    pub fn watch_inventory(
        &self,
        on_snapshot: impl Fn(Snapshot<StockItem>) + 'static,
    ) -> Subscription {
        let api = self.clone();
        listen::subscribe(
            move || {
                let api = api.clone();
                async move { api.list_inventory().await }
            },
            on_snapshot,
        )
    }

    pub async fn create_item(&self, input: &StockItemInput) -> Result<(), FirebaseError> {
        let session = self.fresh_session().await?;
        self.db
            .create(
                &session.id_token,
                &Self::inventory_collection(&session.local_id),
                &input.to_fields(),
            )
            .await?;
        Ok(())
    }

    pub async fn update_item(&self, id: &str, input: &StockItemInput) -> Result<(), FirebaseError> {
        let session = self.fresh_session().await?;
        self.db
            .patch(
                &session.id_token,
                &Self::inventory_doc(&session.local_id, id),
                &input.to_fields(),
            )
            .await?;
        Ok(())
    }

    pub async fn delete_item(&self, id: &str) -> Result<(), FirebaseError> {
        let session = self.fresh_session().await?;
        self.db
            .delete(&session.id_token, &Self::inventory_doc(&session.local_id, id))
            .await
    }

    // ========================
    // Memories
    // ========================

    fn memories_collection(uid: &str) -> String {
        format!("users/{uid}/memories")
    }

    fn memory_doc(uid: &str, id: &str) -> String {
        format!("users/{uid}/memories/{id}")
    }

    pub async fn list_memories(&self) -> Snapshot<Memory> {
        let session = self.fresh_session().await?;
        let docs = self
            .db
            .list(&session.id_token, &Self::memories_collection(&session.local_id))
            .await?;
        let mut memories = docs
            .iter()
            .map(Memory::from_document)
            .collect::<Result<Vec<_>, _>>()?;
        stats::sort_memories_newest_first(&mut memories);
        Ok(memories)
    }

    pub fn watch_memories(&self, on_snapshot: impl Fn(Snapshot<Memory>) + 'static) -> Subscription {
        let api = self.clone();
        listen::subscribe(
            move || {
                let api = api.clone();
                async move { api.list_memories().await }
            },
            on_snapshot,
        )
    }

    pub async fn create_memory(&self, input: &MemoryInput) -> Result<(), FirebaseError> {
        let session = self.fresh_session().await?;
        self.db
            .create(
                &session.id_token,
                &Self::memories_collection(&session.local_id),
                &input.to_fields(),
            )
            .await?;
        Ok(())
    }

    /// Removes the memory document. Its nested events become unreachable,
    /// matching the original client's behavior.
    pub async fn delete_memory(&self, id: &str) -> Result<(), FirebaseError> {
        let session = self.fresh_session().await?;
        self.db
            .delete(&session.id_token, &Self::memory_doc(&session.local_id, id))
            .await
    }

    // ========================
    // Memory events
    // ========================

    fn events_collection(uid: &str, memory_id: &str) -> String {
        format!("users/{uid}/memories/{memory_id}/events")
    }

    fn event_doc(uid: &str, memory_id: &str, id: &str) -> String {
        format!("users/{uid}/memories/{memory_id}/events/{id}")
    }

    pub async fn list_events(&self, memory_id: &str) -> Snapshot<MemoryEvent> {
        let session = self.fresh_session().await?;
        let docs = self
            .db
            .list(
                &session.id_token,
                &Self::events_collection(&session.local_id, memory_id),
            )
            .await?;
        let mut events = docs
            .iter()
            .map(MemoryEvent::from_document)
            .collect::<Result<Vec<_>, _>>()?;
        stats::sort_events_by_date_desc(&mut events);
        Ok(events)
    }

    pub fn watch_events(
        &self,
        memory_id: String,
        on_snapshot: impl Fn(Snapshot<MemoryEvent>) + 'static,
    ) -> Subscription {
        let api = self.clone();
        listen::subscribe(
            move || {
                let api = api.clone();
                let memory_id = memory_id.clone();
                async move { api.list_events(&memory_id).await }
            },
            on_snapshot,
        )
    }

    pub async fn create_event(
        &self,
        memory_id: &str,
        input: &EventInput,
    ) -> Result<(), FirebaseError> {
        let session = self.fresh_session().await?;
        self.db
            .create(
                &session.id_token,
                &Self::events_collection(&session.local_id, memory_id),
                &input.to_fields(),
            )
            .await?;
        Ok(())
    }

    pub async fn delete_event(&self, memory_id: &str, id: &str) -> Result<(), FirebaseError> {
        let session = self.fresh_session().await?;
        self.db
            .delete(
                &session.id_token,
                &Self::event_doc(&session.local_id, memory_id, id),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_paths_are_per_user() {
        assert_eq!(Api::inventory_collection("u1"), "users/u1/inventory");
        assert_eq!(Api::inventory_doc("u1", "i9"), "users/u1/inventory/i9");
        assert_eq!(Api::memories_collection("u1"), "users/u1/memories");
        assert_eq!(
            Api::events_collection("u1", "m2"),
            "users/u1/memories/m2/events"
        );
        assert_eq!(
            Api::event_doc("u1", "m2", "e3"),
            "users/u1/memories/m2/events/e3"
        );
    }
}
