use super::domain::{AppDomain, DesignLevel, ScaleTier};
use serde::Serialize;

/// One candidate architecture bundle. Constructed once, never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct DesignOption {
    pub level: DesignLevel,
    pub level_label: &'static str,
    pub goal: String,
    pub components: Vec<String>,
    pub diagram: String,
    pub user_actions: Vec<&'static str>,
    pub traffic_flow: Vec<&'static str>,
    pub sizing_notes: Vec<&'static str>,
    pub why_this_level: &'static str,
}

/// Full recommendation returned to the caller: classification results, a
/// human-readable answer summary, and the ordered design options.
#[derive(Debug, Clone, Serialize)]
pub struct DesignRecommendation {
    pub app_idea: String,
    pub domain: AppDomain,
    pub domain_label: &'static str,
    pub scale_tier: ScaleTier,
    pub scale_tier_label: &'static str,
    pub clarifying_summary: Vec<String>,
    pub designs: Vec<DesignOption>,
}
