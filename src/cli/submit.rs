//! Submit command - push explicit URLs to the IndexNow providers

use crate::cli::style::{CROSS, Stylize, bullet, check, cross};
use anstream::println;
use site_reindex::config::Config;
use site_reindex::error::Result;
use site_reindex::history::HistoryStore;
use site_reindex::submit::IndexNowClient;
use site_reindex::types::{ProviderResponse, SubmissionOutcome};

/// Run the submit command
pub async fn run_submit(
    config: &Config,
    host: &str,
    urls: &[String],
    dry_run: bool,
) -> Result<()> {
    println!(
        "Submitting {} URL{} for {}",
        urls.len().accent(),
        if urls.len() == 1 { "" } else { "s" },
        host.accent()
    );

    if dry_run {
        println!("{}", "Dry run - no providers will be contacted".muted());
        for url in urls {
            println!("  {} {url}", bullet());
        }
        return Ok(());
    }

    let client = IndexNowClient::new()?;
    let outcomes = client.submit(host, &config.indexnow_key, urls).await?;
    report_submission(&outcomes);

    let store = HistoryStore::new(&config.state_path);
    let mut history = store.load();
    history.extend(urls.iter().cloned());
    store.save(&history)?;

    println!(
        "Total unique URLs submitted to date: {}",
        history.len().accent()
    );

    Ok(())
}

/// Print one line per provider outcome, then a summary
pub(crate) fn report_submission(outcomes: &[SubmissionOutcome]) {
    for outcome in outcomes {
        match &outcome.response {
            ProviderResponse::Received { status, body } => {
                if *status < 400 {
                    println!(
                        "  {} {} {} {}",
                        check(),
                        outcome.provider,
                        status,
                        short(body).muted()
                    );
                } else {
                    println!(
                        "  {} {} {} {}",
                        CROSS.warn(),
                        outcome.provider,
                        status.warn(),
                        short(body).muted()
                    );
                }
            }
            ProviderResponse::Unreachable { error } => {
                println!("  {} {} {}", cross(), outcome.provider, error.error());
            }
        }
    }

    let accepted = outcomes
        .iter()
        .filter(|o| o.status().is_some_and(|s| s < 400))
        .count();
    println!(
        "{} of {} providers accepted the submission",
        accepted.accent(),
        outcomes.len()
    );
}

/// First line of a response body, truncated for display
fn short(body: &str) -> String {
    let line = body.lines().next().unwrap_or_default().trim();
    let max = 80;
    if line.chars().count() > max {
        format!("{}...", line.chars().take(max - 3).collect::<String>())
    } else {
        line.to_string()
    }
}
