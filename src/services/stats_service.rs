// src/services/stats_service.rs
// DOCUMENTATION: Dashboard aggregation
// PURPOSE: Collection totals, site category tally and weekly activity,
// committed in request order so a slow refresh never replaces a newer one

use crate::db::{DocumentStore, Entity, EntityRepository};
use crate::errors::AdminError;
use crate::models::{Accommodation, Guide, Site, User};
use crate::services::metrics_source::{MetricsSource, WEEK_DAYS};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardTotals {
    pub users: i64,
    pub sites: i64,
    pub accommodations: i64,
    pub guides: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub value: u64,
    pub color: String,

    /// Share of categorised sites, in percent with one decimal
    pub share_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayActivity {
    pub day: &'static str,
    pub visits: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    /// Ticket of the refresh that produced this snapshot
    pub sequence: u64,
    pub generated_at: DateTime<Utc>,
    pub totals: DashboardTotals,
    pub site_categories: Vec<CategoryCount>,
    pub weekly_activity: Vec<DayActivity>,
}

/// Tally sites by non-empty category, in first-appearance order
pub fn tally_categories(sites: &[Site]) -> Vec<(String, u64)> {
    let mut tally: Vec<(String, u64)> = Vec::new();

    for category in sites
        .iter()
        .filter_map(|s| s.category.as_deref())
        .filter(|c| !c.is_empty())
    {
        match tally.iter_mut().find(|(name, _)| name == category) {
            Some((_, count)) => *count += 1,
            None => tally.push((category.to_string(), 1)),
        }
    }

    tally
}

fn share_percent(value: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (value as f64 * 1000.0 / total as f64).round() / 10.0
}

/// DashboardService: builds snapshots and keeps the newest one
pub struct DashboardService {
    metrics: Arc<dyn MetricsSource>,
    next_ticket: AtomicU64,
    latest: RwLock<Option<DashboardSnapshot>>,
}

impl DashboardService {
    pub fn new(metrics: Arc<dyn MetricsSource>) -> Self {
        Self {
            metrics,
            next_ticket: AtomicU64::new(0),
            latest: RwLock::new(None),
        }
    }

    /// Take a ticket, aggregate, then commit.
    /// Returns the newest committed snapshot, which may come from a later ticket.
    pub async fn refresh(&self, store: &dyn DocumentStore) -> Result<DashboardSnapshot, AdminError> {
        let ticket = self.next_ticket.fetch_add(1, Ordering::SeqCst) + 1;
        let snapshot = self.build_snapshot(store, ticket).await?;
        Ok(self.commit(snapshot).await)
    }

    pub async fn latest(&self) -> Option<DashboardSnapshot> {
        self.latest.read().await.clone()
    }

    /// Store `snapshot` unless a snapshot with a higher sequence is already committed
    pub async fn commit(&self, snapshot: DashboardSnapshot) -> DashboardSnapshot {
        let mut latest = self.latest.write().await;
        match latest.as_ref() {
            Some(current) if current.sequence > snapshot.sequence => {
                log::debug!(
                    "Discarding stale dashboard snapshot {} (newest is {})",
                    snapshot.sequence,
                    current.sequence
                );
                current.clone()
            }
            _ => {
                *latest = Some(snapshot.clone());
                snapshot
            }
        }
    }

    async fn build_snapshot(
        &self,
        store: &dyn DocumentStore,
        sequence: u64,
    ) -> Result<DashboardSnapshot, AdminError> {
        // Four independent queries; the sites one loads documents for the tally
        let (users, accommodations, guides, sites) = tokio::try_join!(
            store.count(User::COLLECTION),
            store.count(Accommodation::COLLECTION),
            store.count(Guide::COLLECTION),
            EntityRepository::list::<Site>(store),
        )?;

        let tally = tally_categories(&sites);
        let categorised: u64 = tally.iter().map(|(_, count)| count).sum();

        let site_categories = tally
            .into_iter()
            .map(|(category, value)| CategoryCount {
                color: self.metrics.category_color(&category),
                share_percent: share_percent(value, categorised),
                category,
                value,
            })
            .collect();

        let weekly_activity = WEEK_DAYS
            .iter()
            .map(|&day| DayActivity {
                day,
                visits: self.metrics.daily_visits(day),
            })
            .collect();

        log::info!(
            "Dashboard snapshot {}: {} users, {} sites, {} accommodations, {} guides",
            sequence,
            users,
            sites.len(),
            accommodations,
            guides
        );

        Ok(DashboardSnapshot {
            sequence,
            generated_at: Utc::now(),
            totals: DashboardTotals {
                users,
                sites: sites.len() as i64,
                accommodations,
                guides,
            },
            site_categories,
            weekly_activity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryDocumentStore;
    use crate::services::metrics_source::FixedMetricsSource;
    use serde_json::json;

    fn site(category: Option<&str>) -> Site {
        Site {
            category: category.map(str::to_string),
            ..Site::default()
        }
    }

    fn service() -> DashboardService {
        DashboardService::new(Arc::new(FixedMetricsSource { visits: 75 }))
    }

    #[test]
    fn test_tally_counts_sum_to_categorised_sites() {
        let sites = vec![
            site(Some("Nature")),
            site(Some("Montagne")),
            site(None),
            site(Some("Nature")),
            site(Some("")),
            site(Some("Île")),
        ];

        let tally = tally_categories(&sites);
        assert_eq!(
            tally,
            vec![
                ("Nature".to_string(), 2),
                ("Montagne".to_string(), 1),
                ("Île".to_string(), 1)
            ]
        );

        let categorised = sites
            .iter()
            .filter(|s| s.category.as_deref().is_some_and(|c| !c.is_empty()))
            .count() as u64;
        assert_eq!(tally.iter().map(|(_, n)| n).sum::<u64>(), categorised);
    }

    #[test]
    fn test_share_percent() {
        assert_eq!(share_percent(1, 3), 33.3);
        assert_eq!(share_percent(2, 2), 100.0);
        assert_eq!(share_percent(0, 0), 0.0);
    }

    #[tokio::test]
    async fn test_refresh_counts_collections() {
        let store = MemoryDocumentStore::new();
        for (collection, data) in [
            ("users", json!({"email": "a@b.gn"})),
            ("users", json!({"email": "c@d.gn"})),
            ("guides", json!({"name": "G"})),
            ("sites", json!({"name": "Chutes de Kinkon", "category": "Nature"})),
            ("sites", json!({"name": "Mont Nimba", "category": "Montagne"})),
            ("sites", json!({"name": "Sans catégorie"})),
        ] {
            store
                .insert(collection, data.as_object().cloned().unwrap())
                .await
                .unwrap();
        }

        let snapshot = service().refresh(&store).await.unwrap();

        assert_eq!(
            snapshot.totals,
            DashboardTotals {
                users: 2,
                sites: 3,
                accommodations: 0,
                guides: 1
            }
        );
        assert_eq!(snapshot.site_categories.len(), 2);
        assert_eq!(
            snapshot.site_categories.iter().map(|c| c.value).sum::<u64>(),
            2
        );
        assert_eq!(snapshot.weekly_activity.len(), 7);
        assert!(snapshot.weekly_activity.iter().all(|d| d.visits == 75));
    }

    #[tokio::test]
    async fn test_stale_snapshot_never_replaces_newer() {
        let store = MemoryDocumentStore::new();
        let service = service();

        let older = service.build_snapshot(&store, 1).await.unwrap();
        let newer = service.build_snapshot(&store, 2).await.unwrap();

        // the newer request finishes first
        assert_eq!(service.commit(newer.clone()).await.sequence, 2);
        // the late response is discarded
        assert_eq!(service.commit(older).await.sequence, 2);
        assert_eq!(service.latest().await, Some(newer));
    }

    #[tokio::test]
    async fn test_successive_refreshes_advance_sequence() {
        let store = MemoryDocumentStore::new();
        let service = service();

        let first = service.refresh(&store).await.unwrap();
        let second = service.refresh(&store).await.unwrap();
        assert!(second.sequence > first.sequence);
    }
}
