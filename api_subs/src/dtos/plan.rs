use db::models::plan::Plan;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PlanSyncResponse {
    pub created: Vec<Plan>,
    pub skipped: usize,
}
