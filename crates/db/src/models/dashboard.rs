//! Dashboard summary models.

use serde::Serialize;

/// Entity counts shown on the admin dashboard landing view.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardCounts {
    pub pages: i64,
    pub sections: i64,
    pub blog_posts: i64,
    pub faqs: i64,
    pub features: i64,
    pub pricing_plans: i64,
}
