//! Tests for the session service state machine.

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    use crate::campaigns::{Campaign, CampaignChannel, PaymentSource};
    use crate::constants::DEFAULT_DEMO_CREDITS;
    use crate::errors::{Error, Result};
    use crate::market_spy::CompetitorAnalysis;
    use crate::properties::demo_properties;
    use crate::session::{SessionService, SessionServiceTrait, SessionStoreTrait, ViewId};
    use crate::users::User;

    // --- Mock session store ---

    #[derive(Default)]
    struct MockSessionStore {
        record: Mutex<Option<User>>,
    }

    impl MockSessionStore {
        fn with_user(user: User) -> Self {
            Self {
                record: Mutex::new(Some(user)),
            }
        }

        fn persisted(&self) -> Option<User> {
            self.record.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SessionStoreTrait for MockSessionStore {
        fn get_user(&self) -> Result<Option<User>> {
            Ok(self.record.lock().unwrap().clone())
        }

        async fn save_user(&self, user: &User) -> Result<()> {
            *self.record.lock().unwrap() = Some(user.clone());
            Ok(())
        }

        async fn delete_user(&self) -> Result<()> {
            *self.record.lock().unwrap() = None;
            Ok(())
        }
    }

    fn service_over(store: Arc<MockSessionStore>) -> SessionService {
        SessionService::new(store)
    }

    fn broker_campaign(budget: i64) -> Campaign {
        Campaign::new(
            "p1",
            CampaignChannel::Meta,
            budget,
            PaymentSource::BrokerWallet,
            "u1",
        )
    }

    fn analysis() -> CompetitorAnalysis {
        CompetitorAnalysis {
            competitor_name: "Imob Rival".to_string(),
            weaknesses: vec!["Fotos ruins".to_string()],
            opportunities: vec!["Sem presença no TikTok".to_string()],
            suggested_action: "Campanha com tour em vídeo".to_string(),
        }
    }

    // --- restore_session ---

    #[test]
    fn test_restore_without_persisted_record_installs_demo_user() {
        let service = service_over(Arc::new(MockSessionStore::default()));

        let user = service.restore_session().unwrap();

        assert_eq!(user, User::demo_broker());
        assert_eq!(user.credits, DEFAULT_DEMO_CREDITS);
        assert_eq!(service.active_view(), ViewId::Home);
    }

    #[test]
    fn test_restore_returns_persisted_user() {
        let mut persisted = User::demo_broker();
        persisted.id = "u42".to_string();
        persisted.credits = 990;
        let store = Arc::new(MockSessionStore::with_user(persisted.clone()));
        let service = service_over(store);

        let user = service.restore_session().unwrap();

        assert_eq!(user, persisted);
        assert_eq!(service.current_user().unwrap().credits, 990);
    }

    #[test]
    fn test_restore_is_idempotent() {
        let service = service_over(Arc::new(MockSessionStore::default()));

        let first = service.restore_session().unwrap();
        service.navigate(ViewId::Dashboard);
        let second = service.restore_session().unwrap();

        assert_eq!(first, second);
        assert_eq!(service.active_view(), ViewId::Home);
    }

    // --- login / logout ---

    #[tokio::test]
    async fn test_login_sets_user_persists_and_navigates_home() {
        let store = Arc::new(MockSessionStore::default());
        let service = service_over(store.clone());
        service.navigate(ViewId::Financial);

        let user = User::demo_broker();
        service.login(user.clone()).await.unwrap();

        assert_eq!(service.current_user(), Some(user.clone()));
        assert_eq!(service.active_view(), ViewId::Home);
        assert_eq!(store.persisted(), Some(user));
    }

    #[tokio::test]
    async fn test_login_overwrites_existing_session() {
        let store = Arc::new(MockSessionStore::default());
        let service = service_over(store.clone());
        service.login(User::demo_broker()).await.unwrap();

        let mut other = User::demo_broker();
        other.id = "u2".to_string();
        other.name = "Ana Corretora".to_string();
        service.login(other.clone()).await.unwrap();

        assert_eq!(service.current_user(), Some(other.clone()));
        assert_eq!(store.persisted(), Some(other));
    }

    #[tokio::test]
    async fn test_logout_clears_user_and_persisted_record() {
        let store = Arc::new(MockSessionStore::default());
        let service = service_over(store.clone());
        service.login(User::demo_broker()).await.unwrap();
        service.navigate(ViewId::Contracts);

        service.logout().await.unwrap();

        assert!(service.current_user().is_none());
        assert_eq!(service.active_view(), ViewId::Home);
        assert!(store.persisted().is_none());
    }

    #[tokio::test]
    async fn test_logout_leaves_campaign_list_untouched() {
        let service = service_over(Arc::new(MockSessionStore::default()));
        service.restore_session().unwrap();
        service.create_campaign(broker_campaign(100)).await.unwrap();

        service.logout().await.unwrap();

        assert_eq!(service.campaigns().len(), 1);
    }

    #[tokio::test]
    async fn test_logout_then_restore_yields_demo_user() {
        let store = Arc::new(MockSessionStore::default());
        let service = service_over(store.clone());

        let mut user = User::demo_broker();
        user.id = "u7".to_string();
        user.credits = 42;
        service.login(user).await.unwrap();
        service.logout().await.unwrap();

        let restored = service.restore_session().unwrap();
        assert_eq!(restored, User::demo_broker());
        assert_eq!(restored.credits, DEFAULT_DEMO_CREDITS);
    }

    // --- adjust_credits ---

    #[tokio::test]
    async fn test_adjust_credits_sums_all_deltas() {
        let store = Arc::new(MockSessionStore::default());
        let service = service_over(store.clone());
        service.restore_session().unwrap();

        service.adjust_credits(500).await.unwrap();
        service.adjust_credits(-300).await.unwrap();
        let balance = service.adjust_credits(50).await.unwrap();

        assert_eq!(balance, Some(DEFAULT_DEMO_CREDITS + 250));
        assert_eq!(
            service.current_user().unwrap().credits,
            DEFAULT_DEMO_CREDITS + 250
        );
        assert_eq!(
            store.persisted().unwrap().credits,
            DEFAULT_DEMO_CREDITS + 250
        );
    }

    #[tokio::test]
    async fn test_adjust_credits_without_user_is_a_noop() {
        let store = Arc::new(MockSessionStore::default());
        let service = service_over(store.clone());

        let balance = service.adjust_credits(-100).await.unwrap();

        assert_eq!(balance, None);
        assert!(store.persisted().is_none());
    }

    #[tokio::test]
    async fn test_adjust_credits_allows_overdraft() {
        let service = service_over(Arc::new(MockSessionStore::default()));
        service.restore_session().unwrap();

        let balance = service
            .adjust_credits(-(DEFAULT_DEMO_CREDITS + 1))
            .await
            .unwrap();

        assert_eq!(balance, Some(-1));
    }

    // --- create_campaign ---

    #[tokio::test]
    async fn test_create_campaign_debits_budget_and_prepends() {
        let service = service_over(Arc::new(MockSessionStore::default()));
        service.restore_session().unwrap();

        let campaign = broker_campaign(500);
        service.create_campaign(campaign.clone()).await.unwrap();

        assert_eq!(service.campaigns().len(), 1);
        assert_eq!(service.campaigns()[0], campaign);
        assert_eq!(
            service.current_user().unwrap().credits,
            DEFAULT_DEMO_CREDITS - 500
        );
        assert_eq!(service.active_view(), ViewId::Home);
    }

    #[tokio::test]
    async fn test_newest_campaign_is_always_first() {
        let service = service_over(Arc::new(MockSessionStore::default()));
        service.restore_session().unwrap();

        let first = broker_campaign(100);
        let second = broker_campaign(200);
        service.create_campaign(first.clone()).await.unwrap();
        service.create_campaign(second.clone()).await.unwrap();

        let campaigns = service.campaigns();
        assert_eq!(campaigns[0], second);
        assert_eq!(campaigns[1], first);
    }

    #[tokio::test]
    async fn test_create_campaign_clears_pending_context() {
        let service = service_over(Arc::new(MockSessionStore::default()));
        service.restore_session().unwrap();
        service.request_counter_campaign(analysis());
        assert!(service.pending_context().is_some());

        service.create_campaign(broker_campaign(100)).await.unwrap();

        assert!(service.pending_context().is_none());
    }

    #[tokio::test]
    async fn test_create_campaign_rejects_negative_budget() {
        let service = service_over(Arc::new(MockSessionStore::default()));
        service.restore_session().unwrap();

        let result = service.create_campaign(broker_campaign(-10)).await;

        assert!(matches!(result, Err(Error::Validation(_))));
        assert!(service.campaigns().is_empty());
        assert_eq!(
            service.current_user().unwrap().credits,
            DEFAULT_DEMO_CREDITS
        );
    }

    #[tokio::test]
    async fn test_create_campaign_while_signed_out_records_without_debit() {
        let service = service_over(Arc::new(MockSessionStore::default()));

        service.create_campaign(broker_campaign(500)).await.unwrap();

        assert_eq!(service.campaigns().len(), 1);
        assert!(service.current_user().is_none());
    }

    // --- hand-off flows ---

    #[test]
    fn test_counter_campaign_sets_context_and_navigates_to_ad_creator() {
        let service = service_over(Arc::new(MockSessionStore::default()));
        service.navigate(ViewId::MarketSpy);

        let spy_report = analysis();
        service.request_counter_campaign(spy_report.clone());

        assert_eq!(service.active_view(), ViewId::AdCreator);
        let context = service.pending_context().unwrap();
        assert_eq!(context.competitor_analysis, Some(spy_report));
        assert!(context.pre_selected_property.is_none());
    }

    #[test]
    fn test_boost_sets_pre_selected_property() {
        let service = service_over(Arc::new(MockSessionStore::default()));

        let listing = demo_properties().remove(0);
        service.request_boost(listing.clone());

        assert_eq!(service.active_view(), ViewId::AdCreator);
        let context = service.pending_context().unwrap();
        assert_eq!(context.pre_selected_property, Some(listing));
        assert!(context.competitor_analysis.is_none());
    }

    #[test]
    fn test_new_hand_off_overwrites_prior_context() {
        let service = service_over(Arc::new(MockSessionStore::default()));

        service.request_counter_campaign(analysis());
        service.request_boost(demo_properties().remove(0));

        let context = service.pending_context().unwrap();
        assert!(context.competitor_analysis.is_none());
        assert!(context.pre_selected_property.is_some());
    }

    // --- navigation / snapshots ---

    #[test]
    fn test_navigate_sets_active_view() {
        let service = service_over(Arc::new(MockSessionStore::default()));

        service.navigate(ViewId::Training);
        assert_eq!(service.active_view(), ViewId::Training);

        service.navigate(ViewId::Chat);
        assert_eq!(service.active_view(), ViewId::Chat);
    }

    #[tokio::test]
    async fn test_snapshot_reflects_full_state() {
        let service = service_over(Arc::new(MockSessionStore::default()));
        service.restore_session().unwrap();
        service.create_campaign(broker_campaign(500)).await.unwrap();
        service.navigate(ViewId::Dashboard);

        let snapshot = service.snapshot();

        assert_eq!(snapshot.active_view, ViewId::Dashboard);
        assert_eq!(snapshot.campaigns.len(), 1);
        assert_eq!(
            snapshot.current_user.unwrap().credits,
            DEFAULT_DEMO_CREDITS - 500
        );
    }
}
