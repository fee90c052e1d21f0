use serde::{Deserialize, Serialize};

use crate::error::ClientError;
use crate::http::ApiClient;

/// Headline counts for the home screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub total_members: u64,
    #[serde(default)]
    pub total_ministers: u64,
    #[serde(default)]
    pub total_churches: u64,
    #[serde(default)]
    pub total_leaders: u64,
}

pub async fn stats(api: &ApiClient) -> Result<DashboardStats, ClientError> {
    api.get_json(
        "/dashboard/stats",
        "Could not load the statistics. Try again later.",
    )
    .await
}
