use actix_web::{
    get,
    web::{Data, Json, Path, Query},
};
use domain_delivery::model::{
    entity::{DeploymentTask, Software},
    vo::{
        dashboard::{DeploymentOverview, SoftwareOverview},
        FilterState, ResponseEnvelope,
    },
};

use crate::infrastructure::ServiceProvider;

/// Raw catalog listing.
#[tracing::instrument(skip(sp))]
#[get("/softwares")]
pub async fn list_softwares(sp: Data<ServiceProvider>) -> Json<ResponseEnvelope<Vec<Software>>> {
    Json(sp.data_source().list_software().await)
}

/// List-page view model. Absent query fields mean the empty filter.
#[tracing::instrument(skip(sp))]
#[get("/softwares/overview")]
pub async fn software_overview(
    sp: Data<ServiceProvider>,
    filter: Query<FilterState>,
) -> Json<ResponseEnvelope<SoftwareOverview>> {
    Json(sp.dashboard_service().software_overview(filter.into_inner()).await)
}

/// Raw per-host task listing for one software id.
#[tracing::instrument(skip(sp))]
#[get("/softwares/{software_id}/tasks")]
pub async fn list_deployment_tasks(
    sp: Data<ServiceProvider>,
    software_id: Path<String>,
) -> Json<ResponseEnvelope<Vec<DeploymentTask>>> {
    Json(sp.data_source().list_deployment_tasks(&software_id).await)
}

/// Detail-page view model for one software id.
#[tracing::instrument(skip(sp))]
#[get("/softwares/{software_id}/deployment-overview")]
pub async fn deployment_overview(
    sp: Data<ServiceProvider>,
    software_id: Path<String>,
) -> Json<ResponseEnvelope<DeploymentOverview>> {
    Json(sp.dashboard_service().deployment_overview(&software_id).await)
}
