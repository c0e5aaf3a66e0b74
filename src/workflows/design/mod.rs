mod blueprint;
pub mod catalog;
pub mod classify;
mod diagram;
pub mod domain;
mod providers;
pub mod report;

pub use blueprint::DesignBlueprint;
pub use providers::provider_services;
pub use report::DesignRecommendation;
