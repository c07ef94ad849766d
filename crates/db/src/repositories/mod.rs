//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod campaign_repo;
pub mod category_repo;
pub mod country_repo;
pub mod donation_repo;
pub mod member_repo;

pub use campaign_repo::CampaignRepo;
pub use category_repo::CategoryRepo;
pub use country_repo::CountryRepo;
pub use donation_repo::DonationRepo;
pub use member_repo::MemberRepo;
