use clap::Parser;
use tracing_subscriber::EnvFilter;

use stackscan::models::{AnalysisDepth, FinalReport};
use stackscan::{AnalysisOrchestrator, AnalysisRequest, Config, GitHubClient};

#[derive(Parser, Debug)]
#[command(name = "stackscan")]
#[command(version = "0.1.0")]
#[command(about = "Analyze a GitHub repository's technology stack and gaps")]
struct Args {
    /// GitHub repository URL (or owner/repo)
    repository_url: String,

    /// Identifier recorded in the report metadata
    #[arg(short, long, default_value = "cli")]
    user: String,

    /// Analysis depth (basic, standard, comprehensive)
    #[arg(short, long, default_value = "standard")]
    depth: AnalysisDepth,

    /// Focus areas recorded in the report metadata
    #[arg(long)]
    focus: Vec<String>,

    /// Output format (json, text, markdown)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("stackscan=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = Config::from_env()?;

    let github = GitHubClient::new(&config.github_token)?;
    let orchestrator = AnalysisOrchestrator::new(github).with_max_files(config.max_files);

    let request = AnalysisRequest {
        repository_url: args.repository_url.clone(),
        user_id: args.user.clone(),
        analysis_depth: args.depth,
        focus_areas: args.focus.clone(),
    };

    tracing::info!("Starting analysis for: {}", args.repository_url);
    let report = orchestrator.orchestrate(request).await?;

    output_report(&report, &args)?;

    Ok(())
}

fn output_report(report: &FinalReport, args: &Args) -> anyhow::Result<()> {
    let output = match args.format.as_str() {
        "json" => serde_json::to_string_pretty(report)?,
        "markdown" => format_markdown(report),
        _ => format_text(report),
    };

    if let Some(ref path) = args.output {
        std::fs::write(path, &output)?;
        tracing::info!("Report written to: {}", path);
    } else {
        println!("{}", output);
    }

    Ok(())
}

fn format_text(report: &FinalReport) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "\n=== Technology Analysis: {} ===\n\n",
        report.stage_1_exploration.repository
    ));

    if let Some(ref language) = report.stage_1_exploration.primary_language {
        output.push_str(&format!("Primary language: {}\n", language));
    }
    output.push_str(&format!(
        "Files analyzed: {} of {} scanned\n",
        report.stage_1_exploration.files_fetched,
        report.stage_1_exploration.total_files_scanned
    ));
    output.push_str(&format!(
        "Dependencies: {}\n\n",
        report.stage_2_technology_analysis.total_dependencies
    ));

    output.push_str("Technologies:\n");
    for (category, tags) in report.enhanced_tech_stack.stack.technologies.iter() {
        if tags.is_empty() {
            continue;
        }
        output.push_str(&format!("  {}: {}\n", category, tags.join(", ")));
    }

    output.push_str("\nGap Analysis:\n");
    for (category, analysis) in &report.stage_3_gap_analysis {
        if analysis.identified_gaps.is_empty() {
            continue;
        }
        output.push_str(&format!(
            "  {} [{}]:\n",
            category, analysis.priority
        ));
        for gap in &analysis.identified_gaps {
            output.push_str(&format!("    - {}\n", gap));
        }
    }

    if !report.enhanced_tech_stack.recommendations.is_empty() {
        output.push_str("\nStrategic Recommendations:\n");
        for rec in &report.enhanced_tech_stack.recommendations {
            output.push_str(&format!(
                "  [{}] {}: {}\n",
                rec.priority, rec.title, rec.description
            ));
        }
    }

    output.push_str(&format!(
        "\nTotal technologies: {}\nCategories with gaps: {}\nHigh-priority recommendations: {}\n",
        report.summary.total_technologies,
        report.summary.gap_categories,
        report.summary.high_priority_recommendations
    ));

    output.push_str(&format!(
        "\nAnalyzed on: {}\n",
        report
            .analysis_metadata
            .completed_at
            .format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}

fn format_markdown(report: &FinalReport) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "# Technology Analysis: {}\n\n",
        report.stage_1_exploration.repository
    ));

    output.push_str("## Summary\n\n");
    output.push_str("| Metric | Value |\n|--------|-------|\n");
    output.push_str(&format!(
        "| Files Analyzed | {} / {} |\n",
        report.stage_1_exploration.files_fetched,
        report.stage_1_exploration.total_files_scanned
    ));
    output.push_str(&format!(
        "| Dependencies | {} |\n",
        report.stage_2_technology_analysis.total_dependencies
    ));
    output.push_str(&format!(
        "| Total Technologies | {} |\n",
        report.summary.total_technologies
    ));
    output.push_str(&format!(
        "| Categories With Gaps | {} |\n",
        report.summary.gap_categories
    ));

    output.push_str("\n## Technologies\n\n");
    for (category, tags) in report.enhanced_tech_stack.stack.technologies.iter() {
        if tags.is_empty() {
            continue;
        }
        output.push_str(&format!("- **{}**: {}\n", category, tags.join(", ")));
    }

    output.push_str("\n## Gap Analysis\n\n");
    output.push_str("| Category | Priority | Gaps |\n|----------|----------|------|\n");
    for (category, analysis) in &report.stage_3_gap_analysis {
        output.push_str(&format!(
            "| {} | {} | {} |\n",
            category,
            analysis.priority,
            analysis.identified_gaps.len()
        ));
    }

    if !report.enhanced_tech_stack.key_decisions.is_empty() {
        output.push_str("\n## Key Decisions\n\n");
        for decision in &report.enhanced_tech_stack.key_decisions {
            output.push_str(&format!("- {}\n", decision));
        }
    }

    if !report.enhanced_tech_stack.migration_notes.is_empty() {
        output.push_str("\n## Migration Notes\n\n");
        for note in &report.enhanced_tech_stack.migration_notes {
            output.push_str(&format!("- {}\n", note));
        }
    }

    output.push_str("\n## Strategic Recommendations\n\n");
    output.push_str("| Title | Category | Priority | Timeline |\n|-------|----------|----------|----------|\n");
    for rec in &report.enhanced_tech_stack.recommendations {
        output.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            rec.title, rec.category, rec.priority, rec.timeline
        ));
    }

    output.push_str(&format!(
        "\n---\n*Analyzed on {}*\n",
        report
            .analysis_metadata
            .completed_at
            .format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}
