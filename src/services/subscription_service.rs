// src/services/subscription_service.rs
// DOCUMENTATION: Plan catalogue and per-user subscriptions
// PURPOSE: Enrollment CRUD plus the per-plan revenue figures

use crate::db::{DocumentStore, EntityRepository};
use crate::errors::AdminError;
use crate::models::{
    find_plan, CreateSubscriptionRequest, ListQuery, ListResponse, Plan, PlanStats, Subscription,
    SubscriptionStatus, UpdateSubscriptionRequest, PLANS,
};
use crate::services::search::filter_records;

pub struct SubscriptionService;

impl SubscriptionService {
    pub fn plans() -> &'static [Plan] {
        &PLANS
    }

    pub async fn list_subscriptions(
        store: &dyn DocumentStore,
        query: &ListQuery,
    ) -> Result<ListResponse<Subscription>, AdminError> {
        let subscriptions: Vec<Subscription> = EntityRepository::list(store).await?;
        Ok(ListResponse::paginate(
            filter_records(subscriptions, query.search_term()),
            query,
        ))
    }

    pub async fn get_subscription(
        store: &dyn DocumentStore,
        id: &str,
    ) -> Result<Subscription, AdminError> {
        EntityRepository::get(store, id).await
    }

    pub async fn create_subscription(
        store: &dyn DocumentStore,
        req: &CreateSubscriptionRequest,
    ) -> Result<Subscription, AdminError> {
        ensure_known_plan(&req.plan_id)?;
        ensure_date_order(Some(req.start_date), Some(req.end_date))?;
        EntityRepository::create(store, req).await
    }

    pub async fn update_subscription(
        store: &dyn DocumentStore,
        id: &str,
        req: &UpdateSubscriptionRequest,
    ) -> Result<Subscription, AdminError> {
        if let Some(plan_id) = &req.plan_id {
            ensure_known_plan(plan_id)?;
        }
        // a one-sided patch is checked against the stored counterpart
        let current: Subscription = EntityRepository::get(store, id).await?;
        ensure_date_order(
            req.start_date.or(current.start_date),
            req.end_date.or(current.end_date),
        )?;
        EntityRepository::update(store, id, req).await
    }

    pub async fn delete_subscription(
        store: &dyn DocumentStore,
        id: &str,
    ) -> Result<(), AdminError> {
        EntityRepository::delete::<Subscription>(store, id).await
    }

    pub async fn plan_stats(store: &dyn DocumentStore) -> Result<Vec<PlanStats>, AdminError> {
        let subscriptions: Vec<Subscription> = EntityRepository::list(store).await?;
        Ok(compute_plan_stats(&subscriptions))
    }
}

/// For each catalogue plan: total and active enrollments, revenue = active x price
pub fn compute_plan_stats(subscriptions: &[Subscription]) -> Vec<PlanStats> {
    PLANS
        .iter()
        .map(|plan| {
            let for_plan = subscriptions.iter().filter(|s| s.plan_id == plan.id);
            let total = for_plan.clone().count() as u64;
            let active = for_plan
                .filter(|s| s.status == SubscriptionStatus::Active)
                .count() as u64;

            PlanStats {
                plan_id: plan.id,
                name: plan.name,
                price: plan.price,
                total_subscriptions: total,
                active_subscriptions: active,
                monthly_revenue: active * plan.price,
            }
        })
        .collect()
}

fn ensure_known_plan(plan_id: &str) -> Result<(), AdminError> {
    if find_plan(plan_id).is_none() {
        return Err(AdminError::ValidationError(format!(
            "unknown plan: {}",
            plan_id
        )));
    }
    Ok(())
}

fn ensure_date_order(
    start: Option<chrono::NaiveDate>,
    end: Option<chrono::NaiveDate>,
) -> Result<(), AdminError> {
    if let (Some(start), Some(end)) = (start, end) {
        if end < start {
            return Err(AdminError::ValidationError(
                "endDate must not precede startDate".to_string(),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryDocumentStore;
    use chrono::NaiveDate;

    fn subscription(plan_id: &str, status: SubscriptionStatus) -> Subscription {
        Subscription {
            plan_id: plan_id.into(),
            status,
            ..Subscription::default()
        }
    }

    fn request(plan_id: &str) -> CreateSubscriptionRequest {
        CreateSubscriptionRequest {
            user_id: "1".into(),
            user_name: "Mamadou Diallo".into(),
            user_email: "mamadou.diallo@email.com".into(),
            plan_id: plan_id.into(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 12, 15).unwrap(),
            status: SubscriptionStatus::Active,
            auto_renew: true,
            payment_method: "Orange Money".into(),
        }
    }

    #[test]
    fn test_plan_stats_counts_revenue_from_active_only() {
        let subs = vec![
            subscription("premium", SubscriptionStatus::Active),
            subscription("basic", SubscriptionStatus::Active),
            subscription("premium", SubscriptionStatus::Expired),
            subscription("premium", SubscriptionStatus::Active),
            subscription("unknown", SubscriptionStatus::Active),
        ];

        let stats = compute_plan_stats(&subs);
        assert_eq!(stats.len(), 2);

        let premium = stats.iter().find(|s| s.plan_id == "premium").unwrap();
        assert_eq!(premium.total_subscriptions, 3);
        assert_eq!(premium.active_subscriptions, 2);
        assert_eq!(premium.monthly_revenue, 1_000_000);

        let basic = stats.iter().find(|s| s.plan_id == "basic").unwrap();
        assert_eq!(basic.total_subscriptions, 1);
        assert_eq!(basic.monthly_revenue, 0);
    }

    #[tokio::test]
    async fn test_create_rejects_unknown_plan() {
        let store = MemoryDocumentStore::new();
        let result = SubscriptionService::create_subscription(&store, &request("gold")).await;
        assert!(matches!(result, Err(AdminError::ValidationError(_))));
        assert_eq!(store.count("planSubscriptions").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_create_and_search_by_email() {
        let store = MemoryDocumentStore::new();
        SubscriptionService::create_subscription(&store, &request("premium"))
            .await
            .unwrap();

        let query = ListQuery {
            q: Some("DIALLO@".into()),
            ..ListQuery::default()
        };
        let listed = SubscriptionService::list_subscriptions(&store, &query)
            .await
            .unwrap();
        assert_eq!(listed.total_count, 1);
        assert!(listed.data[0].auto_renew);
    }

    #[tokio::test]
    async fn test_update_rejects_reversed_dates() {
        let store = MemoryDocumentStore::new();
        let created = SubscriptionService::create_subscription(&store, &request("basic"))
            .await
            .unwrap();

        let patch = UpdateSubscriptionRequest {
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 1),
            ..UpdateSubscriptionRequest::default()
        };
        let result = SubscriptionService::update_subscription(&store, &created.id, &patch).await;
        assert!(matches!(result, Err(AdminError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_update_end_date_alone_checked_against_stored_start() {
        let store = MemoryDocumentStore::new();
        let created = SubscriptionService::create_subscription(&store, &request("basic"))
            .await
            .unwrap();

        let patch = UpdateSubscriptionRequest {
            end_date: NaiveDate::from_ymd_opt(2020, 1, 1),
            ..UpdateSubscriptionRequest::default()
        };
        let result = SubscriptionService::update_subscription(&store, &created.id, &patch).await;
        assert!(matches!(result, Err(AdminError::ValidationError(_))));

        let stored = SubscriptionService::get_subscription(&store, &created.id)
            .await
            .unwrap();
        assert_eq!(stored.end_date, NaiveDate::from_ymd_opt(2024, 12, 15));

        let extend = UpdateSubscriptionRequest {
            end_date: NaiveDate::from_ymd_opt(2025, 6, 30),
            ..UpdateSubscriptionRequest::default()
        };
        let updated = SubscriptionService::update_subscription(&store, &created.id, &extend)
            .await
            .unwrap();
        assert_eq!(updated.end_date, NaiveDate::from_ymd_opt(2025, 6, 30));
    }
}
