use super::classify::infer_domain;
use super::domain::AppDomain;
use serde::Serialize;

/// One questionnaire entry as served to clients. An empty option list marks a
/// free-text question.
#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub label: String,
    pub options: Vec<&'static str>,
}

struct QuestionTemplate {
    id: &'static str,
    label: &'static str,
    options: &'static [&'static str],
}

const FOLLOW_UP_OPTIONS: &[&str] = &["yes", "no", "not-sure"];

const BASE_QUESTIONS: &[QuestionTemplate] = &[
    QuestionTemplate {
        id: "cloud_provider",
        label: "Which cloud provider should be used?",
        options: &["aws", "azure", "gcp", "digitalocean"],
    },
    QuestionTemplate {
        id: "target_users",
        label: "Expected user scale?",
        options: &["<10k users", "10k-200k users", "200k-5m users", ">5m users"],
    },
    QuestionTemplate {
        id: "peak_rps",
        label: "Peak requests per second (RPS)?",
        options: &["<100", "100-1k", "1k-10k", ">10k"],
    },
    QuestionTemplate {
        id: "data_profile",
        label: "Primary workload profile?",
        options: &["read-heavy", "write-heavy", "balanced", "event-streaming"],
    },
    QuestionTemplate {
        id: "consistency",
        label: "Consistency expectations?",
        options: &["strong", "eventual", "mixed"],
    },
    QuestionTemplate {
        id: "regions",
        label: "Multi-region strategy?",
        options: &["single-region", "active-passive", "active-active"],
    },
    QuestionTemplate {
        id: "compliance",
        label: "Compliance constraints?",
        options: &["none", "pci", "hipaa", "gdpr"],
    },
];

/// Clarifying follow-up pairs keyed by inferred domain.
const fn domain_follow_ups(domain: AppDomain) -> [&'static str; 2] {
    match domain {
        AppDomain::Ecommerce => [
            "Do you need inventory reservation during checkout?",
            "Should recommendation/search be real-time personalized?",
        ],
        AppDomain::Streaming => [
            "Should live playback support sub-second latency?",
            "Is transcoding done near-real-time or batch?",
        ],
        AppDomain::Iot => [
            "Should device ingestion tolerate bursts and offline replay?",
            "Do you need time-series optimized storage?",
        ],
        AppDomain::Saas => [
            "Do you need tenant-level data isolation?",
            "Should billing events be processed asynchronously?",
        ],
    }
}

/// Builds the ordered question catalog for an application idea: the free-text
/// idea prompt, the static base questions, then two follow-ups selected by
/// keyword-matching the idea.
pub fn questions_for(app_idea: &str) -> Vec<Question> {
    let domain = infer_domain(app_idea);
    let follow_ups = domain_follow_ups(domain);

    let mut questions = Vec::with_capacity(BASE_QUESTIONS.len() + 3);
    questions.push(Question {
        id: "app_idea",
        label: "What app do you want to design?".to_string(),
        options: Vec::new(),
    });
    questions.extend(BASE_QUESTIONS.iter().map(|template| Question {
        id: template.id,
        label: template.label.to_string(),
        options: template.options.to_vec(),
    }));
    questions.push(Question {
        id: "domain_priority",
        label: follow_ups[0].to_string(),
        options: FOLLOW_UP_OPTIONS.to_vec(),
    });
    questions.push(Question {
        id: "domain_priority_2",
        label: follow_ups[1].to_string(),
        options: FOLLOW_UP_OPTIONS.to_vec(),
    });

    questions
}
