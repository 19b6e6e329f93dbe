//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod blog_post_repo;
pub mod dashboard_repo;
pub mod faq_repo;
pub mod feature_repo;
pub mod global_content_repo;
pub mod history_repo;
pub mod media_repo;
pub mod page_repo;
pub mod pricing_plan_repo;
pub mod section_repo;
pub mod waitlist_repo;

pub use blog_post_repo::BlogPostRepo;
pub use dashboard_repo::DashboardRepo;
pub use faq_repo::FaqRepo;
pub use feature_repo::FeatureRepo;
pub use global_content_repo::GlobalContentRepo;
pub use history_repo::HistoryRepo;
pub use media_repo::MediaRepo;
pub use page_repo::PageRepo;
pub use pricing_plan_repo::PricingPlanRepo;
pub use section_repo::SectionRepo;
pub use waitlist_repo::WaitlistRepo;
