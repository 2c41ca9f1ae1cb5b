use std::collections::HashMap;
use std::ops::RangeInclusive;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain_delivery::{
    exception::DeliveryError,
    model::{
        entity::{DeploymentTask, Software, TaskAction, TaskStatus},
        vo::ResponseEnvelope,
    },
    repository::SoftwareDataSource,
};
use once_cell::sync::Lazy;
use rand::Rng;
use typed_builder::TypedBuilder;

/// Seeded catalog mirroring the reference environment.
static SOFTWARES: Lazy<Vec<Software>> = Lazy::new(|| {
    vec![
        software("sw-001", "1.0.0", "AwesomeApp", "user_12345", "2025-06-01T10:00:00Z"),
        software("sw-002", "1.0.2", "GreatTool", "user_67890", "2025-06-02T14:30:00Z"),
        software("sw-003", "2.1.5", "DataProcessor", "user_12345", "2025-06-03T09:15:00Z"),
        software("sw-004", "3.0.1", "ReportGenerator", "user_99999", "2025-06-04T16:45:00Z"),
    ]
});

static TASKS: Lazy<HashMap<&'static str, Vec<DeploymentTask>>> = Lazy::new(|| {
    HashMap::from([
        (
            "sw-001",
            vec![
                task(
                    "TASK-20250604143126-001",
                    "server-01.company.com",
                    "user_12345",
                    TaskAction::Install,
                    TaskStatus::Succeed,
                    "2025-06-05 10:05:26",
                ),
                task(
                    "TASK-20250604143127-002",
                    "server-02.company.com",
                    "user_12345",
                    TaskAction::Install,
                    TaskStatus::Failed,
                    "2025-06-05 10:15:30",
                ),
            ],
        ),
        (
            "sw-002",
            vec![task(
                "TASK-20250604143128-003",
                "server-03.company.com",
                "user_67890",
                TaskAction::Update,
                TaskStatus::Succeed,
                "2025-06-05 11:20:15",
            )],
        ),
    ])
});

fn software(id: &str, version: &str, name: &str, owner: &str, published_at: &str) -> Software {
    Software {
        software_id: id.into(),
        version: version.into(),
        name: name.into(),
        owner: owner.into(),
        published_at: published_at.parse::<DateTime<Utc>>().unwrap(),
    }
}

fn task(
    id: &str,
    hostname: &str,
    owner: &str,
    action: TaskAction,
    task_status: TaskStatus,
    update_date: &str,
) -> DeploymentTask {
    DeploymentTask {
        task_id: id.into(),
        hostname: hostname.into(),
        owner: owner.into(),
        action,
        task_status,
        update_date: update_date.into(),
    }
}

/// In-memory data source with simulated network latency. Serves the seeded
/// catalog; unknown software ids succeed with an empty collection.
#[derive(TypedBuilder)]
pub struct MockDataSource {
    /// Simulated latency bounds, milliseconds.
    #[builder(default = 100..=400)]
    latency_msecs: RangeInclusive<u64>,
}

impl MockDataSource {
    async fn simulate_latency(&self) {
        let min = *self.latency_msecs.start();
        let max = (*self.latency_msecs.end()).max(min);
        let wait = rand::thread_rng().gen_range(min..=max);
        tokio::time::sleep(Duration::from_millis(wait)).await;
    }
}

#[async_trait]
impl SoftwareDataSource for MockDataSource {
    async fn list_software(&self) -> ResponseEnvelope<Vec<Software>> {
        self.simulate_latency().await;
        ResponseEnvelope::ok(SOFTWARES.clone())
    }

    async fn list_deployment_tasks(
        &self,
        software_id: &str,
    ) -> ResponseEnvelope<Vec<DeploymentTask>> {
        if software_id.trim().is_empty() {
            // Fail fast, before the simulated round trip.
            return DeliveryError::EmptySoftwareId.into();
        }
        self.simulate_latency().await;
        ResponseEnvelope::ok(TASKS.get(software_id).cloned().unwrap_or_default())
    }
}
