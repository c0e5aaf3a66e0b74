use super::domain::{AnswerSet, AppDomain, ScaleTier};

struct DomainRule {
    domain: AppDomain,
    keywords: &'static [&'static str],
}

// Ordered: the first rule whose keyword appears in the idea wins. New domains
// are new entries here, not new branches.
const DOMAIN_RULES: &[DomainRule] = &[
    DomainRule {
        domain: AppDomain::Ecommerce,
        keywords: &["shop", "cart", "checkout", "order", "marketplace"],
    },
    DomainRule {
        domain: AppDomain::Streaming,
        keywords: &["stream", "video", "music", "realtime content"],
    },
    DomainRule {
        domain: AppDomain::Iot,
        keywords: &["device", "sensor", "telemetry", "iot"],
    },
];

/// Infers the application domain from the free-text idea. Total: unmatched
/// text classifies as SaaS.
pub fn infer_domain(app_idea: &str) -> AppDomain {
    let idea = app_idea.to_lowercase();
    DOMAIN_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|word| idea.contains(word)))
        .map(|rule| rule.domain)
        .unwrap_or(AppDomain::Saas)
}

/// Derives the scale tier from the user-count and request-rate bands. The
/// most severe band wins; unrecognized values count as the default band so
/// the function stays total.
pub fn scale_tier(answers: &AnswerSet) -> ScaleTier {
    let severity = user_band_severity(answers.target_users())
        .max(rps_band_severity(answers.peak_rps()));

    match severity {
        3 => ScaleTier::Planet,
        2 => ScaleTier::Hyper,
        1 => ScaleTier::Growth,
        _ => ScaleTier::Starter,
    }
}

fn user_band_severity(band: &str) -> u8 {
    match band {
        ">5m users" => 3,
        "200k-5m users" => 2,
        "<10k users" => 0,
        // "10k-200k users" and anything unrecognized resolve to the default
        // band.
        _ => 1,
    }
}

fn rps_band_severity(band: &str) -> u8 {
    match band {
        ">10k" => 3,
        "1k-10k" => 2,
        "<100" => 0,
        _ => 1,
    }
}
