//! FAQ command handler

use anyhow::Result;

use pinboard_core::Backend;

use crate::output::Output;

/// List all FAQ entries in insertion order
pub async fn list(backend: &dyn Backend, output: &Output) -> Result<()> {
    let faqs = backend.list_faqs().await?;
    output.print_faqs(&faqs);
    Ok(())
}
