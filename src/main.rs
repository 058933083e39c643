use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use gitfolio::{
    Analysis, AnalysisPipeline, AnalysisSession, Config, GitHubClient, PipelineConfig, Report,
};

#[derive(Parser, Debug, Clone)]
#[command(name = "gitfolio")]
#[command(version)]
#[command(about = "Score a GitHub portfolio and suggest improvements")]
struct Args {
    /// GitHub username or profile URL to analyze
    #[arg(required_unless_present = "interactive")]
    input: Option<String>,

    /// Output format (json, text, markdown)
    #[arg(short, long, default_value = "text", value_parser = ["json", "text", "markdown"])]
    format: String,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<String>,

    /// Read one username or URL per line from stdin; a new line supersedes
    /// an analysis that is still running
    #[arg(short, long)]
    interactive: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("gitfolio=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration
    let config = Config::from_env()?;

    let github = GitHubClient::new(&config)?;
    tracing::debug!("Using GitHub API at {}", github.base_url());
    let pipeline = Arc::new(AnalysisPipeline::new(github, PipelineConfig::from(&config)));

    if args.interactive {
        return run_interactive(pipeline, args).await;
    }

    let input = args.input.clone().unwrap_or_default();
    let spinner = spinner(&input)?;
    let outcome = pipeline.analyze(&input, Utc::now()).await;
    spinner.finish_and_clear();

    match outcome {
        Ok(analysis) => output_analysis(&analysis, &args),
        Err(e) if e.is_fetch_failure() => {
            Err(anyhow::Error::new(e).context("Failed to load the GitHub profile"))
        }
        Err(e) => Err(e.into()),
    }
}

async fn run_interactive(pipeline: Arc<AnalysisPipeline>, args: Args) -> anyhow::Result<()> {
    let session = AnalysisSession::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut in_flight = Vec::new();

    while let Some(line) = lines.next_line().await? {
        // Blank lines carry nothing to analyze
        if pipeline.extract(&line).is_empty() {
            continue;
        }

        let ticket = session.begin().await;
        let pipeline = pipeline.clone();
        let session = session.clone();
        let args = args.clone();

        in_flight.push(tokio::spawn(async move {
            let outcome = pipeline.analyze(&line, Utc::now()).await;
            match session.complete(ticket, outcome).await {
                Some(Ok(analysis)) => {
                    if let Err(e) = output_analysis(&analysis, &args) {
                        eprintln!("Failed to write report: {}", e);
                    }
                }
                Some(Err(e)) => eprintln!("Analysis of '{}' failed: {}", line.trim(), e),
                None => {}
            }
        }));
    }

    for task in in_flight {
        task.await?;
    }

    Ok(())
}

fn spinner(input: &str) -> anyhow::Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template("{spinner:.green} {msg}")?);
    pb.set_message(format!("Analyzing {}...", input.trim()));
    pb.enable_steady_tick(Duration::from_millis(100));
    Ok(pb)
}

fn output_analysis(analysis: &Analysis, args: &Args) -> anyhow::Result<()> {
    match analysis {
        Analysis::Scored(report) => output_report(report, args),
        Analysis::NoRepositories { identifier } => {
            println!("{} has no public repositories to analyze", identifier);
            Ok(())
        }
    }
}

fn output_report(report: &Report, args: &Args) -> anyhow::Result<()> {
    let output = match args.format.as_str() {
        "json" => serde_json::to_string_pretty(report)?,
        "markdown" => format_markdown(report),
        _ => format_text(report),
    };

    if let Some(ref path) = args.output {
        std::fs::write(path, &output)?;
        tracing::info!("Output written to: {}", path);
    } else {
        println!("{}", output);
    }

    Ok(())
}

fn format_text(report: &Report) -> String {
    let mut output = String::new();
    let profile = &report.profile;

    output.push_str(&format!(
        "\n=== Portfolio Analysis: {} ===\n\n",
        profile.account_id
    ));

    if let Some(ref name) = profile.display_name {
        output.push_str(&format!("Name: {}\n", name));
    }
    if let Some(ref bio) = profile.biography {
        output.push_str(&format!("Bio: {}\n", bio));
    }
    output.push_str(&format!("Profile: {}\n\n", profile.profile_url));

    output.push_str(&format!("Portfolio Score: {}/100\n\n", report.total_score));

    output.push_str("Breakdown:\n");
    for (category, score) in report.breakdown.iter() {
        output.push_str(&format!("  {:<16} {:>2}/20\n", category.to_string(), score));
    }

    let stats = &report.stats;
    output.push_str("\nStats:\n");
    output.push_str(&format!("  Repositories: {}\n", stats.repositories));
    output.push_str(&format!("  Total stars: {}\n", stats.total_stars));
    output.push_str(&format!("  Languages: {}\n", stats.languages));
    output.push_str(&format!(
        "  Documented repositories: {}\n",
        stats.documented_repositories
    ));
    output.push_str(&format!(
        "  Active in last 90 days: {}\n",
        stats.active_repositories
    ));
    output.push_str(&format!("  Account age: {} days\n", stats.account_age_days));
    output.push_str(&format!("  Followers: {}\n", stats.followers));

    if !report.strengths.is_empty() {
        output.push_str("\nStrengths:\n");
        for strength in &report.strengths {
            output.push_str(&format!("  + {}\n", strength));
        }
    }

    if !report.red_flags.is_empty() {
        output.push_str("\nRed Flags:\n");
        for flag in &report.red_flags {
            output.push_str(&format!("  - {}\n", flag));
        }
    }

    output.push_str("\nRecommendations:\n");
    for recommendation in &report.recommendations {
        output.push_str(&format!("  * {}\n", recommendation));
    }

    output.push_str(&format!(
        "\nAnalyzed on: {}\n",
        report.analyzed_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}

fn format_markdown(report: &Report) -> String {
    let mut output = String::new();
    let profile = &report.profile;

    output.push_str(&format!("# Portfolio Analysis: {}\n\n", profile.account_id));

    if let Some(ref name) = profile.display_name {
        output.push_str(&format!("**Name:** {}\n\n", name));
    }
    if let Some(ref bio) = profile.biography {
        output.push_str(&format!("> {}\n\n", bio));
    }

    output.push_str(&format!(
        "**Portfolio Score:** {}/100\n\n",
        report.total_score
    ));

    output.push_str("## Breakdown\n\n");
    output.push_str("| Category | Score |\n|----------|-------|\n");
    for (category, score) in report.breakdown.iter() {
        output.push_str(&format!("| {} | {}/20 |\n", category, score));
    }

    let stats = &report.stats;
    output.push_str("\n## Stats\n\n");
    output.push_str("| Metric | Value |\n|--------|-------|\n");
    output.push_str(&format!("| Repositories | {} |\n", stats.repositories));
    output.push_str(&format!("| Total Stars | {} |\n", stats.total_stars));
    output.push_str(&format!("| Languages | {} |\n", stats.languages));
    output.push_str(&format!(
        "| Documented Repositories | {} |\n",
        stats.documented_repositories
    ));
    output.push_str(&format!(
        "| Active (90 days) | {} |\n",
        stats.active_repositories
    ));
    output.push_str(&format!(
        "| Account Age | {} days |\n",
        stats.account_age_days
    ));
    output.push_str(&format!("| Followers | {} |\n", stats.followers));

    if !report.strengths.is_empty() {
        output.push_str("\n## Strengths\n\n");
        for strength in &report.strengths {
            output.push_str(&format!("- {}\n", strength));
        }
    }

    if !report.red_flags.is_empty() {
        output.push_str("\n## Red Flags\n\n");
        for flag in &report.red_flags {
            output.push_str(&format!("- {}\n", flag));
        }
    }

    output.push_str("\n## Recommendations\n\n");
    for recommendation in &report.recommendations {
        output.push_str(&format!("- {}\n", recommendation));
    }

    output.push_str(&format!(
        "\n---\n*Analyzed on {}*\n",
        report.analyzed_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}
