//! Auth command - test and explain Search Console authentication

use crate::cli::style::{Stylize, check};
use anstream::println;
use site_reindex::auth::{get_console_auth, test_console_auth};
use site_reindex::config::resolve_key_file;
use site_reindex::console::GoogleConsole;
use site_reindex::error::Result;
use std::path::PathBuf;

/// Run the auth test command
pub async fn run_auth_test(key_file: Option<PathBuf>) -> Result<()> {
    let key_file = resolve_key_file(key_file)?;

    println!("Testing Search Console authentication...");
    let auth = get_console_auth(&key_file).await?;
    println!("Token source: {:?}", auth.source);

    let console = GoogleConsole::new(auth.token)?;
    let site_count = test_console_auth(&console).await?;
    println!(
        "{} Authenticated; {} site propert{} visible",
        check(),
        site_count.accent(),
        if site_count == 1 { "y" } else { "ies" }
    );

    Ok(())
}

/// Run the auth setup command (show instructions)
pub fn run_auth_setup() {
    println!("Search Console Authentication Setup");
    println!("===================================");
    println!();
    println!("Option 1: gcloud CLI (recommended)");
    println!("  Install: https://cloud.google.com/sdk/docs/install");
    println!("  Create a service account with the webmasters scope and");
    println!("  download its JSON key, then point GOOGLE_KEY_FILE at it.");
    println!();
    println!("Option 2: Environment variable");
    println!("  Set GOOGLE_ACCESS_TOKEN to a valid OAuth2 access token");
    println!();
    println!("The IndexNow shared key comes from INDEXNOW_KEY and must match");
    println!("the key file hosted on your domain.");
}
