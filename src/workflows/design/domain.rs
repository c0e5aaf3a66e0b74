use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CloudProvider {
    Aws,
    Azure,
    Gcp,
    Digitalocean,
}

impl CloudProvider {
    pub const fn ordered() -> [Self; 4] {
        [Self::Aws, Self::Azure, Self::Gcp, Self::Digitalocean]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Aws => "aws",
            Self::Azure => "azure",
            Self::Gcp => "gcp",
            Self::Digitalocean => "digitalocean",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Aws => "Amazon Web Services",
            Self::Azure => "Microsoft Azure",
            Self::Gcp => "Google Cloud Platform",
            Self::Digitalocean => "DigitalOcean",
        }
    }

    /// Resolves a provider answer; unknown or missing keys fall back to AWS.
    pub fn resolve(key: Option<&str>) -> Self {
        match key.map(str::trim).map(str::to_ascii_lowercase).as_deref() {
            Some("azure") => Self::Azure,
            Some("gcp") => Self::Gcp,
            Some("digitalocean") => Self::Digitalocean,
            _ => Self::Aws,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleTier {
    Starter,
    Growth,
    Hyper,
    Planet,
}

impl ScaleTier {
    pub const fn ordered() -> [Self; 4] {
        [Self::Starter, Self::Growth, Self::Hyper, Self::Planet]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Starter => "Starter",
            Self::Growth => "Growth",
            Self::Hyper => "Hyper",
            Self::Planet => "Planet",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppDomain {
    Ecommerce,
    Streaming,
    Iot,
    Saas,
}

impl AppDomain {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ecommerce => "E-commerce",
            Self::Streaming => "Streaming",
            Self::Iot => "IoT",
            Self::Saas => "SaaS",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DesignLevel {
    Simple,
    Medium,
    HighlyComplex,
}

impl DesignLevel {
    pub const fn ordered() -> [Self; 3] {
        [Self::Simple, Self::Medium, Self::HighlyComplex]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Simple => "Simple design",
            Self::Medium => "Complex design (Medium scale)",
            Self::HighlyComplex => "Highly complex design",
        }
    }
}

/// Managed-service equivalents for one cloud provider. Immutable, defined at
/// process start.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProviderServices {
    pub lb: &'static str,
    pub compute: &'static str,
    pub database: &'static str,
    pub cache: &'static str,
    pub queue: &'static str,
    pub object_store: &'static str,
    pub observability: &'static str,
    pub waf: &'static str,
    pub dns: &'static str,
}

/// Questionnaire answers keyed by question id. Every key is optional; absent
/// or unrecognized values resolve to the documented defaults below.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: BTreeMap<String, String>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, question_id: &str, option: &str) -> Self {
        self.answers
            .insert(question_id.to_string(), option.to_string());
        self
    }

    pub fn get(&self, question_id: &str) -> Option<&str> {
        self.answers.get(question_id).map(String::as_str)
    }

    fn get_or(&self, question_id: &str, default: &'static str) -> &str {
        self.get(question_id).unwrap_or(default)
    }

    pub fn app_idea(&self) -> &str {
        self.get_or("app_idea", "")
    }

    pub fn cloud_provider(&self) -> CloudProvider {
        CloudProvider::resolve(self.get("cloud_provider"))
    }

    pub fn target_users(&self) -> &str {
        self.get_or("target_users", "10k-200k users")
    }

    pub fn peak_rps(&self) -> &str {
        self.get_or("peak_rps", "100-1k")
    }

    pub fn data_profile(&self) -> &str {
        self.get_or("data_profile", "balanced")
    }

    pub fn consistency(&self) -> &str {
        self.get_or("consistency", "mixed")
    }

    pub fn regions(&self) -> &str {
        self.get_or("regions", "single-region")
    }

    pub fn compliance(&self) -> &str {
        self.get_or("compliance", "none")
    }

    pub fn multi_region(&self) -> bool {
        self.regions() != "single-region"
    }

    pub fn active_active(&self) -> bool {
        self.regions() == "active-active"
    }

    pub fn event_driven(&self) -> bool {
        self.data_profile() == "event-streaming"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_resolution_defaults_to_aws() {
        assert_eq!(CloudProvider::resolve(None), CloudProvider::Aws);
        assert_eq!(CloudProvider::resolve(Some("oracle")), CloudProvider::Aws);
        assert_eq!(CloudProvider::resolve(Some(" GCP ")), CloudProvider::Gcp);
        assert_eq!(
            CloudProvider::resolve(Some("digitalocean")),
            CloudProvider::Digitalocean
        );
    }

    #[test]
    fn empty_answer_set_uses_documented_defaults() {
        let answers = AnswerSet::new();
        assert_eq!(answers.cloud_provider(), CloudProvider::Aws);
        assert_eq!(answers.target_users(), "10k-200k users");
        assert_eq!(answers.peak_rps(), "100-1k");
        assert_eq!(answers.regions(), "single-region");
        assert_eq!(answers.consistency(), "mixed");
        assert!(!answers.multi_region());
        assert!(!answers.event_driven());
    }

    #[test]
    fn region_flags_track_the_regions_answer() {
        let answers = AnswerSet::new().with("regions", "active-active");
        assert!(answers.multi_region());
        assert!(answers.active_active());

        let passive = AnswerSet::new().with("regions", "active-passive");
        assert!(passive.multi_region());
        assert!(!passive.active_active());
    }
}
