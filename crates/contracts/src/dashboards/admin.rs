use serde::{Deserialize, Serialize};

/// One month of platform revenue, `month` as "YYYY-MM".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenuePoint {
    pub month: String,
    /// Gross revenue in VND.
    pub revenue: i64,
    pub tickets: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryShare {
    pub category: String,
    pub revenue: i64,
    pub share_percent: f64,
}

/// Response of GET /api/admin/summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSummaryResponse {
    pub gross_revenue: i64,
    pub tickets_sold: u64,
    pub events_published: u64,
    pub new_customers: u64,
    pub revenue_change_percent: Option<f64>,
    pub revenue_by_month: Vec<RevenuePoint>,
    pub top_categories: Vec<CategoryShare>,
}
