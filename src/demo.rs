use crate::infra::DEFAULT_LAUNCH_REGION;
use blueprint_ai::config::AppConfig;
use blueprint_ai::error::AppError;
use blueprint_ai::workflows::design::domain::AnswerSet;
use blueprint_ai::workflows::design::{DesignBlueprint, DesignRecommendation};
use blueprint_ai::workflows::launch::{GithubMetadataClient, LaunchPlanner};
use clap::Args;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct RecommendArgs {
    /// Free-text description of the application to design
    #[arg(long)]
    pub(crate) app_idea: Option<String>,
    /// Cloud provider (aws, azure, gcp, digitalocean)
    #[arg(long)]
    pub(crate) cloud_provider: Option<String>,
    /// Expected user scale band (e.g. "10k-200k users")
    #[arg(long)]
    pub(crate) target_users: Option<String>,
    /// Peak RPS band (e.g. "1k-10k")
    #[arg(long)]
    pub(crate) peak_rps: Option<String>,
    /// Primary workload profile (read-heavy, write-heavy, balanced, event-streaming)
    #[arg(long)]
    pub(crate) data_profile: Option<String>,
    /// Consistency expectations (strong, eventual, mixed)
    #[arg(long)]
    pub(crate) consistency: Option<String>,
    /// Multi-region strategy (single-region, active-passive, active-active)
    #[arg(long)]
    pub(crate) regions: Option<String>,
    /// Compliance constraints (none, pci, hipaa, gdpr)
    #[arg(long)]
    pub(crate) compliance: Option<String>,
}

impl RecommendArgs {
    fn into_answers(self) -> AnswerSet {
        let mut answers = AnswerSet::new();
        let fields = [
            ("app_idea", self.app_idea),
            ("cloud_provider", self.cloud_provider),
            ("target_users", self.target_users),
            ("peak_rps", self.peak_rps),
            ("data_profile", self.data_profile),
            ("consistency", self.consistency),
            ("regions", self.regions),
            ("compliance", self.compliance),
        ];
        for (id, value) in fields {
            if let Some(value) = value {
                answers = answers.with(id, &value);
            }
        }
        answers
    }
}

#[derive(Args, Debug)]
pub(crate) struct LaunchArgs {
    /// GitHub repository URL (https://github.com/<owner>/<repo>)
    #[arg(long)]
    pub(crate) repo_url: String,
    /// Target region for the provisioned cluster
    #[arg(long, default_value = DEFAULT_LAUNCH_REGION)]
    pub(crate) region: String,
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let answers = args.into_answers();
    let recommendation = DesignBlueprint::standard().recommend(&answers);
    render_recommendation(&recommendation);
    Ok(())
}

pub(crate) async fn run_launch_plan(args: LaunchArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let client = GithubMetadataClient::new(&config.metadata)?;
    let planner = LaunchPlanner::new(Arc::new(client));

    let plan = planner.plan(&args.repo_url, &args.region).await?;

    println!("Launch plan for {}", plan.repo.slug());
    println!(
        "Region: {} | visibility {} | default branch {} | language {}",
        plan.region, plan.metadata.visibility, plan.metadata.default_branch, plan.metadata.language
    );
    println!("\nProvisioning commands");
    for command in &plan.commands {
        println!("  {}", command);
    }

    Ok(())
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    let answers = AnswerSet::new()
        .with("app_idea", "marketplace with checkout and order tracking")
        .with("cloud_provider", "aws")
        .with("target_users", "200k-5m users")
        .with("peak_rps", "1k-10k")
        .with("data_profile", "event-streaming")
        .with("regions", "active-active");

    println!("Architecture recommendation demo");
    let recommendation = DesignBlueprint::standard().recommend(&answers);
    render_recommendation(&recommendation);
    Ok(())
}

pub(crate) fn render_recommendation(recommendation: &DesignRecommendation) {
    println!(
        "Domain: {} | Scale tier: {}",
        recommendation.domain_label, recommendation.scale_tier_label
    );

    println!("\nClarifying summary");
    for line in &recommendation.clarifying_summary {
        println!("- {}", line);
    }

    for design in &recommendation.designs {
        println!("\n== {} ==", design.level_label);
        println!("Goal: {}", design.goal);

        println!("Components:");
        for component in &design.components {
            println!("  - {}", component);
        }

        println!("Diagram:");
        for line in design.diagram.lines() {
            println!("  {}", line);
        }

        println!("User actions:");
        for action in &design.user_actions {
            println!("  - {}", action);
        }

        println!("Traffic flow:");
        for flow in &design.traffic_flow {
            println!("  - {}", flow);
        }

        println!("Sizing notes:");
        for note in &design.sizing_notes {
            println!("  - {}", note);
        }

        println!("Why this level: {}", design.why_this_level);
    }
}
