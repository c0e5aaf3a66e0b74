use super::domain::ProviderServices;

// One formatter per diagram shape. Diagrams are plain ASCII, assembled line
// by line so conditional branches stay in one place.

pub(crate) fn simple_diagram(services: &ProviderServices) -> String {
    [
        format!("Users -> {} -> {} -> API Service", services.waf, services.lb),
        format!("API Service -> {}", services.database),
        format!("API Service -> {}", services.cache),
        format!("API Service -> {}", services.object_store),
        format!("API Service -> {}", services.observability),
    ]
    .join("\n")
}

pub(crate) fn medium_diagram(services: &ProviderServices, event_driven: bool) -> String {
    let mut lines = vec![
        format!(
            "Users -> {} -> {} -> {} -> API Gateway",
            services.dns, services.waf, services.lb
        ),
        "API Gateway -> Auth Service".to_string(),
        format!("API Gateway -> Domain Services (on {})", services.compute),
        format!("Domain Services -> {} -> Worker Services", services.queue),
        format!(
            "Domain Services -> {} / {} / {}",
            services.database, services.cache, services.object_store
        ),
    ];
    if event_driven {
        lines.push(format!(
            "Domain Services -> {} -> Stream Processors",
            services.queue
        ));
    }
    lines.push(format!("All services -> {}", services.observability));
    lines.join("\n")
}

pub(crate) fn global_diagram(services: &ProviderServices, multi_region: bool) -> String {
    let mut lines = vec![
        format!("Users -> Global {} / Traffic Manager", services.dns),
        format!(
            "      -> Region A: {} -> {} -> {} Cluster A",
            services.waf, services.lb, services.compute
        ),
    ];
    // The replica-region line only exists when the answers ask for more than
    // a single region.
    if multi_region {
        lines.push(format!(
            "      -> Region B: {} -> {} -> {} Cluster B",
            services.waf, services.lb, services.compute
        ));
    }
    lines.extend([
        format!(
            "Clusters -> Service Mesh -> Write Services -> Primary {}",
            services.database
        ),
        format!(
            "Clusters -> Read Services -> Regional Read Replicas + {}",
            services.cache
        ),
        format!(
            "Clusters -> Event Bus ({}) -> Stream Processors/Workers",
            services.queue
        ),
        format!(
            "Clusters -> {} + Global {} + DR",
            services.object_store, services.observability
        ),
    ]);
    lines.join("\n")
}
