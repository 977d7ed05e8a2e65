//! Session store and service traits.
//!
//! These traits define the session contract without any database-specific
//! types, allowing for different storage implementations.

use async_trait::async_trait;

use super::session_model::{AdCreationContext, Session, ViewId};
use crate::campaigns::Campaign;
use crate::errors::Result;
use crate::market_spy::CompetitorAnalysis;
use crate::properties::Property;
use crate::users::User;

/// Trait defining the contract for the persisted session user record.
///
/// The store maps a single key to a losslessly serialized [`User`].
/// Implementations handle the storage specifics; the core only relies on
/// read / overwrite / delete semantics.
#[async_trait]
pub trait SessionStoreTrait: Send + Sync {
    /// Reads the persisted user record.
    ///
    /// Absence is a valid case, not an error: returns `Ok(None)` when no
    /// record exists.
    fn get_user(&self) -> Result<Option<User>>;

    /// Persists the user record, overwriting any existing one.
    async fn save_user(&self, user: &User) -> Result<()>;

    /// Deletes the persisted user record. Idempotent.
    async fn delete_user(&self) -> Result<()>;
}

/// Trait defining the contract for session operations.
///
/// Every operation is a synchronous, total state transformation over the
/// in-memory session, with an optional mirrored write to the store. The
/// in-memory mutations themselves are infallible; only store I/O can fail.
#[async_trait]
pub trait SessionServiceTrait: Send + Sync {
    /// Restores a prior session from the store, or installs the default demo
    /// identity when none is persisted. Resets the view to home.
    ///
    /// Idempotent; returns the installed user.
    fn restore_session(&self) -> Result<User>;

    /// Signs the user in, persists the record, and resets the view to home.
    ///
    /// Overwrites any existing session.
    async fn login(&self, user: User) -> Result<()>;

    /// Signs the current user out, deletes the persisted record, and resets
    /// the view to home. The campaign list is left untouched.
    async fn logout(&self) -> Result<()>;

    /// Adds `delta` to the current user's credit balance and persists the
    /// updated record. Returns the new balance, or `None` when no user is
    /// signed in (the adjustment is silently skipped).
    ///
    /// No overdraft check: the balance may go negative.
    async fn adjust_credits(&self, delta: i64) -> Result<Option<i64>>;

    /// Records a newly created campaign: prepends it to the campaign list,
    /// debits its budget from the wallet, clears the pending hand-off
    /// context, and navigates home.
    async fn create_campaign(&self, campaign: Campaign) -> Result<()>;

    /// Hands a competitor analysis off to the ad creator and navigates there.
    ///
    /// Overwrites any prior pending context.
    fn request_counter_campaign(&self, analysis: CompetitorAnalysis);

    /// Hands a pre-selected property off to the ad creator and navigates
    /// there. Overwrites any prior pending context.
    fn request_boost(&self, property: Property);

    /// Sets the active view.
    fn navigate(&self, view: ViewId);

    /// The currently signed-in user, if any.
    fn current_user(&self) -> Option<User>;

    /// The currently active view.
    fn active_view(&self) -> ViewId;

    /// The campaign list, newest first.
    fn campaigns(&self) -> Vec<Campaign>;

    /// The pending ad-creation hand-off context, if any.
    fn pending_context(&self) -> Option<AdCreationContext>;

    /// A cloned snapshot of the full session state for view rendering.
    fn snapshot(&self) -> Session;
}
