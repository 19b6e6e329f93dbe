//! Repository for the admin dashboard summary.

use sqlx::PgPool;

use crate::models::dashboard::DashboardCounts;
use crate::repositories::{
    BlogPostRepo, FaqRepo, FeatureRepo, PageRepo, PricingPlanRepo, SectionRepo,
};

/// Aggregates counts across the content tables.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Fetch all six entity counts concurrently.
    pub async fn counts(pool: &PgPool) -> Result<DashboardCounts, sqlx::Error> {
        let (pages, sections, blog_posts, faqs, features, pricing_plans) = futures::try_join!(
            PageRepo::count(pool),
            SectionRepo::count(pool),
            BlogPostRepo::count(pool),
            FaqRepo::count(pool),
            FeatureRepo::count(pool),
            PricingPlanRepo::count(pool),
        )?;
        Ok(DashboardCounts {
            pages,
            sections,
            blog_posts,
            faqs,
            features,
            pricing_plans,
        })
    }
}
