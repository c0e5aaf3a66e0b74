use super::domain::{CloudProvider, ProviderServices};

/// Returns the managed-service bundle for a provider. The tables are fixed at
/// compile time; callers that start from a raw answer string go through
/// `CloudProvider::resolve`, which already handles the AWS fallback.
pub fn provider_services(provider: CloudProvider) -> ProviderServices {
    match provider {
        CloudProvider::Aws => ProviderServices {
            lb: "Application Load Balancer",
            compute: "Amazon EKS",
            database: "Amazon Aurora (PostgreSQL)",
            cache: "Amazon ElastiCache (Redis)",
            queue: "Amazon SQS + SNS",
            object_store: "Amazon S3",
            observability: "CloudWatch + X-Ray",
            waf: "AWS WAF",
            dns: "Amazon Route 53",
        },
        CloudProvider::Azure => ProviderServices {
            lb: "Azure Application Gateway",
            compute: "Azure Kubernetes Service (AKS)",
            database: "Azure Database for PostgreSQL",
            cache: "Azure Cache for Redis",
            queue: "Azure Service Bus",
            object_store: "Azure Blob Storage",
            observability: "Azure Monitor + Application Insights",
            waf: "Azure WAF",
            dns: "Azure Traffic Manager",
        },
        CloudProvider::Gcp => ProviderServices {
            lb: "Cloud Load Balancing",
            compute: "Google Kubernetes Engine (GKE)",
            database: "Cloud SQL (PostgreSQL)",
            cache: "Memorystore (Redis)",
            queue: "Pub/Sub",
            object_store: "Cloud Storage",
            observability: "Cloud Monitoring + Cloud Trace",
            waf: "Cloud Armor",
            dns: "Cloud DNS",
        },
        CloudProvider::Digitalocean => ProviderServices {
            lb: "DigitalOcean Load Balancer",
            compute: "DigitalOcean Kubernetes (DOKS)",
            database: "DigitalOcean Managed PostgreSQL",
            cache: "DigitalOcean Managed Redis",
            queue: "DigitalOcean Managed Kafka",
            object_store: "DigitalOcean Spaces",
            observability: "DigitalOcean Monitoring",
            waf: "DigitalOcean Cloud Firewalls",
            dns: "DigitalOcean DNS",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_provider_has_a_complete_bundle() {
        for provider in CloudProvider::ordered() {
            let services = provider_services(provider);
            for name in [
                services.lb,
                services.compute,
                services.database,
                services.cache,
                services.queue,
                services.object_store,
                services.observability,
                services.waf,
                services.dns,
            ] {
                assert!(!name.is_empty(), "{provider:?} bundle has an empty entry");
            }
        }
    }

    #[test]
    fn bundles_carry_provider_branding() {
        assert!(provider_services(CloudProvider::Aws).compute.contains("Amazon"));
        assert!(provider_services(CloudProvider::Azure).cache.contains("Azure"));
        assert!(provider_services(CloudProvider::Gcp).database.contains("Cloud"));
        assert!(provider_services(CloudProvider::Digitalocean)
            .object_store
            .contains("DigitalOcean"));
    }
}
