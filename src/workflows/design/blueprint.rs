use super::classify::{infer_domain, scale_tier};
use super::diagram::{global_diagram, medium_diagram, simple_diagram};
use super::domain::{AnswerSet, AppDomain, DesignLevel, ProviderServices, ScaleTier};
use super::providers::provider_services;
use super::report::{DesignOption, DesignRecommendation};

/// Extra components layered on top of the provider bundle per inferred
/// domain.
const fn domain_components(domain: AppDomain) -> &'static [&'static str] {
    match domain {
        AppDomain::Ecommerce => &[
            "Search + Recommendation Service",
            "Inventory Reservation Service",
        ],
        AppDomain::Streaming => &["CDN Edge Delivery", "Media Transcoding Pipeline"],
        AppDomain::Iot => &["Device Ingestion Gateway", "Time-Series Store"],
        AppDomain::Saas => &["Multi-Tenant Isolation Layer", "Usage Metering Service"],
    }
}

const fn tier_sizing_notes(tier: ScaleTier) -> &'static [&'static str] {
    match tier {
        ScaleTier::Starter => &[
            "Size for one small node pool; vertical headroom beats premature sharding.",
            "A single database instance with automated snapshots covers the availability target.",
        ],
        ScaleTier::Growth => &[
            "Plan for horizontal pod autoscaling with a 2x burst margin over the stated peak.",
            "Add one read replica and keep cache hit rate above 80% before scaling the primary.",
        ],
        ScaleTier::Hyper => &[
            "Partition hot write paths early; queue depth is the leading saturation signal.",
            "Budget for dedicated cache and database tiers per major domain service.",
        ],
        ScaleTier::Planet => &[
            "Capacity-plan per region; any single region must survive the loss of its peer.",
            "Replication lag and cross-region egress dominate cost at this tier; measure both from day one.",
        ],
    }
}

/// Assembles design options from the static tables. The blueprint owns no
/// state; `recommend` is a pure function of the answers.
#[derive(Debug, Default)]
pub struct DesignBlueprint;

impl DesignBlueprint {
    pub fn standard() -> Self {
        Self
    }

    /// Produces the three design options in fixed order (simple, medium,
    /// highly complex) for any answer set. Identical answers always yield
    /// identical output.
    pub fn recommend(&self, answers: &AnswerSet) -> DesignRecommendation {
        let provider = answers.cloud_provider();
        let services = provider_services(provider);
        let domain = infer_domain(answers.app_idea());
        let tier = scale_tier(answers);

        let designs = vec![
            simple_option(answers, domain, tier, &services),
            medium_option(answers, domain, tier, &services),
            highly_complex_option(answers, domain, tier, &services),
        ];

        DesignRecommendation {
            app_idea: answers.app_idea().to_string(),
            domain,
            domain_label: domain.label(),
            scale_tier: tier,
            scale_tier_label: tier.label(),
            clarifying_summary: clarifying_summary(answers),
            designs,
        }
    }
}

fn clarifying_summary(answers: &AnswerSet) -> Vec<String> {
    vec![
        format!("Cloud: {}", answers.cloud_provider().key()),
        format!("User scale: {}", answers.target_users()),
        format!("Peak RPS: {}", answers.peak_rps()),
        format!("Regions: {}", answers.regions()),
        format!("Consistency: {}", answers.consistency()),
    ]
}

fn idea_phrase(answers: &AnswerSet) -> &str {
    let idea = answers.app_idea().trim();
    if idea.is_empty() {
        "your application"
    } else {
        idea
    }
}

fn with_domain_extras(mut components: Vec<String>, domain: AppDomain) -> Vec<String> {
    components.extend(
        domain_components(domain)
            .iter()
            .map(|component| component.to_string()),
    );
    components
}

fn simple_option(
    answers: &AnswerSet,
    domain: AppDomain,
    tier: ScaleTier,
    services: &ProviderServices,
) -> DesignOption {
    let components = with_domain_extras(
        vec![
            services.waf.to_string(),
            services.lb.to_string(),
            "Single API service".to_string(),
            services.database.to_string(),
            services.cache.to_string(),
            services.object_store.to_string(),
            services.observability.to_string(),
        ],
        domain,
    );

    DesignOption {
        level: DesignLevel::Simple,
        level_label: DesignLevel::Simple.label(),
        goal: format!(
            "Fast launch for {} with minimal operational complexity.",
            idea_phrase(answers)
        ),
        components,
        diagram: simple_diagram(services),
        user_actions: vec![
            "User opens app and sends request to API through WAF and load balancer.",
            "API validates auth, serves data from cache when possible, and falls back to DB.",
            "Media/files are fetched from object storage and returned to clients.",
        ],
        traffic_flow: vec![
            "Mostly synchronous request-response path.",
            "Cache absorbs repeated reads to reduce DB load.",
            "Single-region deployment with backup snapshots.",
        ],
        sizing_notes: tier_sizing_notes(tier).to_vec(),
        why_this_level: "Best for MVP or early traction where simplicity and delivery speed matter most.",
    }
}

fn medium_option(
    answers: &AnswerSet,
    domain: AppDomain,
    tier: ScaleTier,
    services: &ProviderServices,
) -> DesignOption {
    let components = with_domain_extras(
        vec![
            services.dns.to_string(),
            services.waf.to_string(),
            services.lb.to_string(),
            services.compute.to_string(),
            "API Gateway + Auth Service + Domain Services".to_string(),
            services.queue.to_string(),
            services.database.to_string(),
            services.cache.to_string(),
            services.object_store.to_string(),
            services.observability.to_string(),
        ],
        domain,
    );

    DesignOption {
        level: DesignLevel::Medium,
        level_label: DesignLevel::Medium.label(),
        goal: format!(
            "Scale {} for growing traffic with bounded service decomposition.",
            idea_phrase(answers)
        ),
        components,
        diagram: medium_diagram(services, answers.event_driven()),
        user_actions: vec![
            "User login and app interactions route through API gateway for auth, throttling, and routing.",
            "Core business action is written to DB and emits event to queue for async tasks (notifications, indexing, billing).",
            "Background workers consume queue, process tasks, and update read models/cache.",
        ],
        traffic_flow: vec![
            "Mixed synchronous + asynchronous traffic pattern.",
            "Burst traffic is buffered by queue to protect database and downstream services.",
            "Read-heavy endpoints use cache and read replicas to keep latency stable.",
        ],
        sizing_notes: tier_sizing_notes(tier).to_vec(),
        why_this_level: "Best for teams with medium scale needing flexibility, resilience, and independent service scaling.",
    }
}

fn highly_complex_option(
    answers: &AnswerSet,
    domain: AppDomain,
    tier: ScaleTier,
    services: &ProviderServices,
) -> DesignOption {
    let components = with_domain_extras(
        vec![
            services.dns.to_string(),
            "Global traffic management".to_string(),
            services.waf.to_string(),
            services.lb.to_string(),
            format!("Multi-region {}", services.compute),
            "Service mesh".to_string(),
            "CQRS read/write services".to_string(),
            services.queue.to_string(),
            format!("Global primary + regional replicas of {}", services.database),
            services.cache.to_string(),
            services.object_store.to_string(),
            "Disaster recovery automation".to_string(),
            services.observability.to_string(),
        ],
        domain,
    );

    DesignOption {
        level: DesignLevel::HighlyComplex,
        level_label: DesignLevel::HighlyComplex.label(),
        goal: format!(
            "Global, resilient architecture for very high-scale {} traffic and strict uptime targets.",
            idea_phrase(answers)
        ),
        components,
        diagram: global_diagram(services, answers.multi_region()),
        user_actions: vec![
            "User is routed to nearest healthy region based on latency and failover policy.",
            "Write actions go through idempotent write services; events are published for downstream projections and analytics.",
            "Read actions are served by regional read stacks and cache for low-latency responses.",
            "If a region degrades, traffic shifts automatically with minimal user-visible disruption.",
        ],
        traffic_flow: vec![
            "Global edge ingress with region-aware routing and automated health checks.",
            "Command and query traffic separated to optimize consistency and performance.",
            "Event streams replicate state updates to search, analytics, notifications, and audit pipelines.",
            "Cross-region replication and DR workflows enforce RPO/RTO objectives.",
        ],
        sizing_notes: tier_sizing_notes(tier).to_vec(),
        why_this_level: "Best for mission-critical, high-volume systems needing multi-region high availability and rapid failover.",
    }
}
