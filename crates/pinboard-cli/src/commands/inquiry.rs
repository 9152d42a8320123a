//! Inquiry command handler

use anyhow::{bail, Result};

use pinboard_core::{Backend, NewInquiry};

use crate::output::Output;

/// Submit a contact inquiry
pub async fn create(
    backend: &dyn Backend,
    name: String,
    email: String,
    title: String,
    content: String,
    consent: bool,
    output: &Output,
) -> Result<()> {
    if !consent {
        bail!("Consent is required to submit an inquiry (pass --consent)");
    }

    let inquiry = backend
        .create_inquiry(NewInquiry {
            name,
            email,
            title,
            content,
            consent,
        })
        .await?;

    output.success(&format!("Inquiry received: {}", inquiry.id));
    output.print_inquiry(&inquiry);
    Ok(())
}
