//! Dashboard statistics assembly.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, NaiveDate, Utc};

use suggestbox_auth::access::AccessEvaluator;
use suggestbox_core::result::AppResult;
use suggestbox_database::repositories::StatsRepository;
use suggestbox_database::repositories::stats::ActivityRow;
use suggestbox_entity::stats::{DashboardStats, TrendPoint};
use suggestbox_entity::suggestion::SuggestionStatus;

use crate::context::RequestContext;

/// Number of days covered by the trend, including today.
const TREND_DAYS: i64 = 7;

/// Computes dashboard figures within the caller's scope.
#[derive(Debug, Clone)]
pub struct DashboardService {
    /// Aggregation queries.
    stats_repo: Arc<StatsRepository>,
    /// Access control evaluator.
    evaluator: AccessEvaluator,
}

impl DashboardService {
    /// Creates a new dashboard service.
    pub fn new(stats_repo: Arc<StatsRepository>) -> Self {
        Self {
            stats_repo,
            evaluator: AccessEvaluator::new(),
        }
    }

    /// Dashboard figures as of now.
    pub async fn stats(&self, ctx: &RequestContext) -> AppResult<DashboardStats> {
        self.stats_at(ctx, Utc::now()).await
    }

    /// Dashboard figures as of `now`.
    pub async fn stats_at(
        &self,
        ctx: &RequestContext,
        now: DateTime<Utc>,
    ) -> AppResult<DashboardStats> {
        let scope = self.evaluator.scope(Some(&ctx.claims))?;

        let totals = self.stats_repo.status_totals(scope).await?;
        let today = now.date_naive();
        let first_day = today - Duration::days(TREND_DAYS - 1);
        let since = first_day
            .and_hms_opt(0, 0, 0)
            .map(|naive| naive.and_utc())
            .unwrap_or(now);
        let activity = self.stats_repo.activity_since(scope, since).await?;
        let by_department = self.stats_repo.department_counts(scope).await?;

        let resolution_rate = if totals.total == 0 {
            0.0
        } else {
            totals.resolved as f64 / totals.total as f64 * 100.0
        };

        Ok(DashboardStats {
            total: totals.total,
            pending_review: totals.pending_review,
            in_progress: totals.in_progress,
            resolved: totals.resolved,
            resolution_rate,
            trend: build_trend(first_day, today, &activity),
            by_department,
        })
    }
}

/// Buckets activity per day from `first_day` to `last_day`, zero-filled.
fn build_trend(first_day: NaiveDate, last_day: NaiveDate, activity: &[ActivityRow]) -> Vec<TrendPoint> {
    let mut days: BTreeMap<NaiveDate, TrendPoint> = first_day
        .iter_days()
        .take_while(|day| *day <= last_day)
        .map(|date| {
            (
                date,
                TrendPoint {
                    date,
                    new: 0,
                    resolved: 0,
                },
            )
        })
        .collect();

    for row in activity {
        if let Some(point) = days.get_mut(&row.created_at.date_naive()) {
            point.new += 1;
        }
        if row.status == SuggestionStatus::Resolved {
            if let Some(point) = days.get_mut(&row.updated_at.date_naive()) {
                point.resolved += 1;
            }
        }
    }

    days.into_values().collect()
}
