//! Pure single-pass reducers turning fetched records into chart-ready series.
//!
//! Bucket order follows first occurrence in the input except the trends,
//! which sort by calendar day. Empty input yields empty output everywhere;
//! the view renders that as its no-data state.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use domain_delivery::model::{
    entity::{DeploymentTask, Software, TaskStatus},
    vo::{
        chart::{
            status_color, truncate_label, ActionBucket, OwnerBucket, StatusBucket, TrendPoint,
            ACTION_PALETTE, OWNER_PALETTE,
        },
        dashboard::{DeploymentStats, SoftwareStats},
    },
};

/// Display width of owner labels on the bar chart.
pub const OWNER_BAR_LABEL_WIDTH: usize = 10;
/// Display width of owner labels on the pie chart.
pub const OWNER_PIE_LABEL_WIDTH: usize = 8;
/// Days of publishing history kept on the list-page trend.
pub const PUBLISH_TREND_DAYS: usize = 7;

/// Day bucket label for task stamps that fail to normalize.
pub const UNPARSEABLE_DAY: &str = "unknown";

/// Normalizes one upstream `YYYY-MM-DD HH:MM:SS` stamp to its calendar day.
///
/// The single place task date strings are interpreted: the leading token is
/// parsed as an ISO day, and malformed input yields `None` so callers can
/// bucket it instead of failing.
pub fn calendar_day(raw: &str) -> Option<NaiveDate> {
    let day = raw.split_whitespace().next()?;
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

/// Counts tasks per status. Statuses outside the known set land in one
/// `Unknown` bucket carrying the default color.
pub fn status_distribution(tasks: &[DeploymentTask]) -> Vec<StatusBucket> {
    let mut buckets: Vec<StatusBucket> = Vec::new();
    for task in tasks {
        match buckets.iter_mut().find(|b| b.status == task.task_status) {
            Some(bucket) => bucket.count += 1,
            None => buckets.push(StatusBucket {
                status: task.task_status,
                count: 1,
                color: status_color(task.task_status).to_string(),
            }),
        }
    }
    buckets
}

/// Counts tasks per action, cycling the three-color palette by
/// first-occurrence index.
pub fn action_distribution(tasks: &[DeploymentTask]) -> Vec<ActionBucket> {
    let mut buckets: Vec<ActionBucket> = Vec::new();
    for task in tasks {
        match buckets.iter_mut().find(|b| b.action == task.action) {
            Some(bucket) => bucket.count += 1,
            None => {
                let color = ACTION_PALETTE[buckets.len() % ACTION_PALETTE.len()].to_string();
                buckets.push(ActionBucket {
                    action: task.action,
                    count: 1,
                    color,
                });
            }
        }
    }
    buckets
}

/// Tasks per calendar day, ascending. Stamps that fail to normalize are
/// collected into one trailing `unknown` bucket.
pub fn task_daily_trend(tasks: &[DeploymentTask]) -> Vec<TrendPoint> {
    let mut days: Vec<(NaiveDate, usize)> = Vec::new();
    let mut unparseable = 0usize;
    for task in tasks {
        match calendar_day(&task.update_date) {
            Some(day) => bump(&mut days, day),
            None => unparseable += 1,
        }
    }
    let mut points = into_trend(days);
    if unparseable > 0 {
        points.push(TrendPoint {
            day: UNPARSEABLE_DAY.into(),
            label: UNPARSEABLE_DAY.into(),
            count: unparseable,
        });
    }
    points
}

/// Software published per UTC calendar day, ascending, truncated to the most
/// recent [`PUBLISH_TREND_DAYS`] after sorting.
pub fn publish_daily_trend(records: &[Software]) -> Vec<TrendPoint> {
    let mut days: Vec<(NaiveDate, usize)> = Vec::new();
    for record in records {
        bump(&mut days, record.published_at.date_naive());
    }
    days.sort_by_key(|(day, _)| *day);
    let recent = days.split_off(days.len().saturating_sub(PUBLISH_TREND_DAYS));
    recent
        .into_iter()
        .map(|(day, count)| trend_point(day, count))
        .collect()
}

/// Counts software per owner in first-occurrence order, with pie shares.
/// Shares stay at zero for an empty input rather than dividing by zero.
pub fn owner_distribution(records: &[Software]) -> Vec<OwnerBucket> {
    let mut buckets: Vec<OwnerBucket> = Vec::new();
    for record in records {
        match buckets.iter_mut().find(|b| b.owner == record.owner) {
            Some(bucket) => bucket.count += 1,
            None => {
                let color = OWNER_PALETTE[buckets.len() % OWNER_PALETTE.len()].to_string();
                buckets.push(OwnerBucket {
                    label: truncate_label(&record.owner, OWNER_BAR_LABEL_WIDTH),
                    owner: record.owner.clone(),
                    count: 1,
                    share: 0.0,
                    color,
                });
            }
        }
    }
    let total = records.len();
    if total > 0 {
        for bucket in &mut buckets {
            bucket.share = bucket.count as f64 / total as f64;
        }
    }
    buckets
}

/// List-page stat cards over one fetched catalog. `now` is the reference
/// instant for the published-this-week window.
pub fn software_stats(records: &[Software], matching: usize, now: DateTime<Utc>) -> SoftwareStats {
    let mut owners: Vec<&str> = records.iter().map(|r| r.owner.as_str()).collect();
    owners.sort_unstable();
    owners.dedup();
    let week_ago = now - Duration::days(7);
    SoftwareStats {
        total: records.len(),
        unique_owners: owners.len(),
        published_this_week: records.iter().filter(|r| r.published_at > week_ago).count(),
        matching,
    }
}

/// Detail-page stat cards over one fetched task collection.
pub fn deployment_stats(tasks: &[DeploymentTask]) -> DeploymentStats {
    let mut stats = DeploymentStats {
        total: tasks.len(),
        ..Default::default()
    };
    for task in tasks {
        match task.task_status {
            TaskStatus::Succeed => stats.succeeded += 1,
            TaskStatus::Failed => stats.failed += 1,
            TaskStatus::Pending | TaskStatus::Running => stats.in_progress += 1,
            TaskStatus::Unknown => {}
        }
    }
    stats
}

fn bump(days: &mut Vec<(NaiveDate, usize)>, day: NaiveDate) {
    match days.iter_mut().find(|(d, _)| *d == day) {
        Some((_, count)) => *count += 1,
        None => days.push((day, 1)),
    }
}

fn into_trend(mut days: Vec<(NaiveDate, usize)>) -> Vec<TrendPoint> {
    days.sort_by_key(|(day, _)| *day);
    days.into_iter().map(|(day, count)| trend_point(day, count)).collect()
}

fn trend_point(day: NaiveDate, count: usize) -> TrendPoint {
    TrendPoint {
        day: day.format("%Y-%m-%d").to_string(),
        label: day.format("%m/%d").to_string(),
        count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_delivery::model::entity::TaskAction;

    fn task(id: &str, action: TaskAction, status: TaskStatus, update_date: &str) -> DeploymentTask {
        DeploymentTask {
            task_id: id.into(),
            hostname: "server-01.company.com".into(),
            owner: "user_12345".into(),
            action,
            task_status: status,
            update_date: update_date.into(),
        }
    }

    fn software(id: &str, owner: &str, published_at: &str) -> Software {
        Software {
            software_id: id.into(),
            version: "1.0.0".into(),
            name: id.to_uppercase(),
            owner: owner.into(),
            published_at: published_at.parse().unwrap(),
        }
    }

    fn catalog() -> Vec<Software> {
        vec![
            software("sw-001", "user_12345", "2025-06-01T10:00:00Z"),
            software("sw-002", "user_67890", "2025-06-02T14:30:00Z"),
            software("sw-003", "user_12345", "2025-06-03T09:15:00Z"),
            software("sw-004", "user_99999", "2025-06-04T16:45:00Z"),
        ]
    }

    #[test]
    fn calendar_day_normalizes_or_rejects() {
        assert_eq!(
            calendar_day("2025-06-05 10:05:26"),
            Some(NaiveDate::from_ymd_opt(2025, 6, 5).unwrap()),
        );
        assert_eq!(calendar_day(""), None);
        assert_eq!(calendar_day("yesterday 10:05:26"), None);
    }

    #[test]
    fn status_buckets_sum_to_input_length() {
        let tasks = vec![
            task("t1", TaskAction::Install, TaskStatus::Succeed, "2025-06-05 10:05:26"),
            task("t2", TaskAction::Install, TaskStatus::Failed, "2025-06-05 10:15:30"),
            task("t3", TaskAction::Update, TaskStatus::Succeed, "2025-06-06 11:20:15"),
        ];
        let buckets = status_distribution(&tasks);
        assert_eq!(buckets.iter().map(|b| b.count).sum::<usize>(), tasks.len());
        assert_eq!(buckets[0].status, TaskStatus::Succeed);
        assert_eq!(buckets[0].count, 2);
        assert_eq!(buckets[0].color, "#10b981");
    }

    #[test]
    fn two_task_fixture_counts_one_each() {
        let tasks = vec![
            task("t1", TaskAction::Install, TaskStatus::Succeed, "2025-06-05 10:05:26"),
            task("t2", TaskAction::Install, TaskStatus::Failed, "2025-06-05 10:15:30"),
        ];
        let buckets = status_distribution(&tasks);
        assert_eq!(buckets.len(), 2);
        assert!(buckets
            .iter()
            .any(|b| b.status == TaskStatus::Succeed && b.count == 1));
        assert!(buckets.iter().any(|b| b.status == TaskStatus::Failed && b.count == 1));

        let stats = deployment_stats(&tasks);
        assert_eq!(stats.succeeded, 1);
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.in_progress, 0);
    }

    #[test]
    fn unknown_status_lands_in_default_bucket() {
        let tasks = vec![task(
            "t1",
            TaskAction::Unknown,
            TaskStatus::Unknown,
            "2025-06-05 10:05:26",
        )];
        let buckets = status_distribution(&tasks);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].color, "#6b7280");

        let stats = deployment_stats(&tasks);
        assert_eq!(stats.total, 1);
        assert_eq!(stats.succeeded + stats.failed + stats.in_progress, 0);
    }

    #[test]
    fn action_palette_cycles_by_first_occurrence() {
        let tasks = vec![
            task("t1", TaskAction::Update, TaskStatus::Succeed, "2025-06-05 10:05:26"),
            task("t2", TaskAction::Install, TaskStatus::Succeed, "2025-06-05 10:15:30"),
            task("t3", TaskAction::Update, TaskStatus::Failed, "2025-06-06 11:20:15"),
            task("t4", TaskAction::Uninstall, TaskStatus::Succeed, "2025-06-06 12:00:00"),
            task("t5", TaskAction::Unknown, TaskStatus::Succeed, "2025-06-06 13:00:00"),
        ];
        let buckets = action_distribution(&tasks);
        let actions: Vec<TaskAction> = buckets.iter().map(|b| b.action).collect();
        assert_eq!(
            actions,
            [TaskAction::Update, TaskAction::Install, TaskAction::Uninstall, TaskAction::Unknown],
        );
        assert_eq!(buckets[0].color, ACTION_PALETTE[0]);
        assert_eq!(buckets[1].color, ACTION_PALETTE[1]);
        assert_eq!(buckets[2].color, ACTION_PALETTE[2]);
        // Fourth distinct action wraps around.
        assert_eq!(buckets[3].color, ACTION_PALETTE[0]);
        assert_eq!(buckets.iter().map(|b| b.count).sum::<usize>(), tasks.len());
    }

    #[test]
    fn task_trend_sorts_and_buckets_unparseable() {
        let tasks = vec![
            task("t1", TaskAction::Install, TaskStatus::Succeed, "2025-06-06 10:05:26"),
            task("t2", TaskAction::Install, TaskStatus::Failed, "2025-06-05 10:15:30"),
            task("t3", TaskAction::Update, TaskStatus::Succeed, "2025-06-06 11:20:15"),
            task("t4", TaskAction::Update, TaskStatus::Succeed, "not-a-date"),
        ];
        let points = task_daily_trend(&tasks);
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].day, "2025-06-05");
        assert_eq!(points[0].label, "06/05");
        assert_eq!(points[1].day, "2025-06-06");
        assert_eq!(points[1].count, 2);
        assert_eq!(points[2].day, UNPARSEABLE_DAY);
        assert_eq!(points[2].count, 1);
    }

    #[test]
    fn publish_trend_keeps_last_seven_days() {
        let records: Vec<Software> = (1..=9)
            .map(|day| {
                software(
                    &format!("sw-{day:03}"),
                    "user_12345",
                    &format!("2025-06-{day:02}T08:00:00Z"),
                )
            })
            .collect();
        let points = publish_daily_trend(&records);
        assert_eq!(points.len(), PUBLISH_TREND_DAYS);
        assert_eq!(points.first().unwrap().day, "2025-06-03");
        assert_eq!(points.last().unwrap().day, "2025-06-09");
        let mut sorted = points.clone();
        sorted.sort_by(|a, b| a.day.cmp(&b.day));
        assert_eq!(points, sorted);
    }

    #[test]
    fn empty_input_yields_empty_series() {
        assert!(status_distribution(&[]).is_empty());
        assert!(action_distribution(&[]).is_empty());
        assert!(task_daily_trend(&[]).is_empty());
        assert!(publish_daily_trend(&[]).is_empty());
        assert!(owner_distribution(&[]).is_empty());
        assert_eq!(deployment_stats(&[]), DeploymentStats::default());
    }

    #[test]
    fn owner_histogram_matches_reference_fixture() {
        let buckets = owner_distribution(&catalog());
        let counts: Vec<(&str, usize)> =
            buckets.iter().map(|b| (b.owner.as_str(), b.count)).collect();
        assert_eq!(counts, [("user_12345", 2), ("user_67890", 1), ("user_99999", 1)]);
        assert_eq!(buckets.iter().map(|b| b.count).sum::<usize>(), 4);
    }

    #[test]
    fn owner_shares_sum_to_one() {
        let buckets = owner_distribution(&catalog());
        let total: f64 = buckets.iter().map(|b| b.share).sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert_eq!(buckets[0].share, 0.5);
    }

    #[test]
    fn owner_labels_truncate_but_keep_full_value() {
        let records = vec![software("sw-001", "organization_platform", "2025-06-01T10:00:00Z")];
        let buckets = owner_distribution(&records);
        assert_eq!(buckets[0].label, "organizati...");
        assert_eq!(buckets[0].owner, "organization_platform");
    }

    #[test]
    fn software_stats_count_owners_and_recency() {
        let now: DateTime<Utc> = "2025-06-05T00:00:00Z".parse().unwrap();
        let stats = software_stats(&catalog(), 2, now);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.unique_owners, 3);
        assert_eq!(stats.published_this_week, 4);
        assert_eq!(stats.matching, 2);

        let later: DateTime<Utc> = "2025-06-09T00:00:00Z".parse().unwrap();
        assert_eq!(software_stats(&catalog(), 0, later).published_this_week, 3);
    }
}
