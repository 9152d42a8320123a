//! Status command handler

use anyhow::{Context, Result};

use pinboard_core::{Config, Store};

use crate::output::{Output, OutputFormat};

/// Show backend mode, data location, and collection counts
///
/// Counts are only available in local mode; remote status reports the
/// configured endpoint without calling it.
pub fn show(output: &Output) -> Result<()> {
    let config = Config::load().context("Failed to load configuration")?;

    let mode = if config.remote_enabled {
        "remote"
    } else {
        "local"
    };

    let counts = if config.remote_enabled {
        None
    } else {
        let store = Store::open(&config)?;
        Some((
            store.post_count()?,
            store.faq_count()?,
            store.inquiry_count()?,
        ))
    };

    match output.format {
        OutputFormat::Json => {
            let counts_json = counts.map(|(posts, faqs, inquiries)| {
                serde_json::json!({
                    "posts": posts,
                    "faqs": faqs,
                    "inquiries": inquiries,
                })
            });
            println!(
                "{}",
                serde_json::json!({
                    "mode": mode,
                    "data_dir": config.data_dir,
                    "api_url": config.api_url,
                    "counts": counts_json,
                })
            );
        }
        OutputFormat::Quiet => {
            println!("{}", mode);
        }
        OutputFormat::Human => {
            println!("Pinboard Status");
            println!("===============");
            println!();
            println!("Backend: {}", mode);
            if config.remote_enabled {
                println!(
                    "  Server: {}",
                    config.api_url.as_deref().unwrap_or("(not set)")
                );
            } else {
                println!("  Data:   {}", config.data_dir.display());
            }
            if let Some((posts, faqs, inquiries)) = counts {
                println!();
                println!("Contents:");
                println!("  Posts:     {}", posts);
                println!("  FAQs:      {}", faqs);
                println!("  Inquiries: {}", inquiries);
            }
        }
    }

    Ok(())
}
