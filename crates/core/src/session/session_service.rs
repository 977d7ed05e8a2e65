//! Session service - the one state machine in the application.

use log::debug;
use std::sync::{Arc, RwLock};

use super::session_model::{AdCreationContext, Session, ViewId};
use super::session_traits::{SessionServiceTrait, SessionStoreTrait};
use crate::campaigns::Campaign;
use crate::errors::Result;
use crate::market_spy::CompetitorAnalysis;
use crate::properties::Property;
use crate::users::User;

/// Service owning the session state for one running instance.
///
/// All mutations go through this service; the view layer holds it behind an
/// `Arc` and renders from [`SessionServiceTrait::snapshot`]. Each operation
/// takes the state lock, runs to completion, and releases it before any
/// store write, so the persisted record always mirrors a consistent
/// in-memory state.
pub struct SessionService {
    state: RwLock<Session>,
    store: Arc<dyn SessionStoreTrait>,
}

impl SessionService {
    /// Creates a new SessionService over the given store, starting signed
    /// out on the home view.
    pub fn new(store: Arc<dyn SessionStoreTrait>) -> Self {
        Self {
            state: RwLock::new(Session::default()),
            store,
        }
    }
}

#[async_trait::async_trait]
impl SessionServiceTrait for SessionService {
    fn restore_session(&self) -> Result<User> {
        let user = match self.store.get_user()? {
            Some(user) => {
                debug!("Restored persisted session for user {}", user.id);
                user
            }
            None => {
                debug!("No persisted session, installing demo identity");
                User::demo_broker()
            }
        };

        let mut state = self.state.write().unwrap();
        state.current_user = Some(user.clone());
        state.active_view = ViewId::Home;
        Ok(user)
    }

    async fn login(&self, user: User) -> Result<()> {
        debug!("Signing in user {}", user.id);
        {
            let mut state = self.state.write().unwrap();
            state.current_user = Some(user.clone());
            state.active_view = ViewId::Home;
        }
        self.store.save_user(&user).await
    }

    async fn logout(&self) -> Result<()> {
        {
            let mut state = self.state.write().unwrap();
            state.current_user = None;
            state.active_view = ViewId::Home;
        }
        self.store.delete_user().await
    }

    async fn adjust_credits(&self, delta: i64) -> Result<Option<i64>> {
        let updated = {
            let mut state = self.state.write().unwrap();
            state.current_user.as_mut().map(|user| {
                user.credits += delta;
                user.clone()
            })
        };

        match updated {
            Some(user) => {
                debug!(
                    "Adjusted credits by {} for user {}, new balance {}",
                    delta, user.id, user.credits
                );
                self.store.save_user(&user).await?;
                Ok(Some(user.credits))
            }
            None => {
                debug!("Credit adjustment of {} skipped: no signed-in user", delta);
                Ok(None)
            }
        }
    }

    async fn create_campaign(&self, campaign: Campaign) -> Result<()> {
        campaign.validate()?;
        let budget = campaign.budget;

        {
            let mut state = self.state.write().unwrap();
            debug!(
                "Recording campaign {} for property {}",
                campaign.id, campaign.property_id
            );
            state.campaigns.insert(0, campaign);
            state.pending_context = None;
            state.active_view = ViewId::Home;
        }

        self.adjust_credits(-budget).await?;
        Ok(())
    }

    fn request_counter_campaign(&self, analysis: CompetitorAnalysis) {
        let mut state = self.state.write().unwrap();
        debug!(
            "Counter-campaign requested against {}",
            analysis.competitor_name
        );
        state.pending_context = Some(AdCreationContext {
            pre_selected_property: None,
            competitor_analysis: Some(analysis),
        });
        state.active_view = ViewId::AdCreator;
    }

    fn request_boost(&self, property: Property) {
        let mut state = self.state.write().unwrap();
        debug!("Boost requested for property {}", property.id);
        state.pending_context = Some(AdCreationContext {
            pre_selected_property: Some(property),
            competitor_analysis: None,
        });
        state.active_view = ViewId::AdCreator;
    }

    fn navigate(&self, view: ViewId) {
        self.state.write().unwrap().active_view = view;
    }

    fn current_user(&self) -> Option<User> {
        self.state.read().unwrap().current_user.clone()
    }

    fn active_view(&self) -> ViewId {
        self.state.read().unwrap().active_view
    }

    fn campaigns(&self) -> Vec<Campaign> {
        self.state.read().unwrap().campaigns.clone()
    }

    fn pending_context(&self) -> Option<AdCreationContext> {
        self.state.read().unwrap().pending_context.clone()
    }

    fn snapshot(&self) -> Session {
        self.state.read().unwrap().clone()
    }
}
