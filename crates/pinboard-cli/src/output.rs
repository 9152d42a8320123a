//! Output formatting for CLI
//!
//! Provides consistent output formatting across all commands:
//! - Human-readable default output
//! - JSON output (--json flag)
//! - Quiet mode for scripting (--quiet flag)

use pinboard_core::{Faq, Inquiry, Page, Post};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output
    Json,
    /// Quiet mode - minimal output
    Quiet,
}

impl OutputFormat {
    /// Create format from CLI flags
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if quiet {
            OutputFormat::Quiet
        } else if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Output helper for consistent formatting
pub struct Output {
    /// The output format
    pub format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Print a single post in full
    pub fn print_post(&self, post: &Post) {
        match self.format {
            OutputFormat::Human => {
                println!("ID:      {}", post.id);
                println!("Board:   {}", post.board);
                println!("Title:   {}", post.title);
                println!("Author:  {}", post.author);
                if !post.tags.is_empty() {
                    println!("Tags:    {}", post.tags.join(", "));
                }
                println!("Views:   {}    Likes: {}", post.views, post.likes);
                println!("Created: {}", post.created_at.format("%Y-%m-%d %H:%M"));
                println!("Updated: {}", post.updated_at.format("%Y-%m-%d %H:%M"));
                if let (Some(start), Some(end)) = (post.event_start, post.event_end) {
                    println!(
                        "Event:   {} to {}",
                        start.format("%Y-%m-%d"),
                        end.format("%Y-%m-%d")
                    );
                }
                println!();
                println!("{}", post.content);
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(post).unwrap());
            }
            OutputFormat::Quiet => {
                println!("{}", post.id);
            }
        }
    }

    /// Print one page of a post listing
    pub fn print_page(&self, page: &Page<Post>) {
        match self.format {
            OutputFormat::Human => {
                if page.data.is_empty() {
                    println!("No posts found.");
                    println!("\n{} post(s) total", page.total);
                    return;
                }
                for post in &page.data {
                    println!(
                        "{} | {:9} | {} | {}v {}l | {}",
                        &post.id.to_string()[..8],
                        post.board.to_string(),
                        truncate(&post.title, 40),
                        post.views,
                        post.likes,
                        post.created_at.format("%Y-%m-%d")
                    );
                }
                println!("\nShowing {} of {} post(s)", page.data.len(), page.total);
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(page).unwrap());
            }
            OutputFormat::Quiet => {
                for post in &page.data {
                    println!("{}", post.id);
                }
            }
        }
    }

    /// Print the FAQ list
    pub fn print_faqs(&self, faqs: &[Faq]) {
        match self.format {
            OutputFormat::Human => {
                if faqs.is_empty() {
                    println!("No FAQs found.");
                    return;
                }
                for faq in faqs {
                    println!("Q: {}", faq.question);
                    println!("A: {}", faq.answer);
                    println!();
                }
                println!("{} FAQ(s)", faqs.len());
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(faqs).unwrap());
            }
            OutputFormat::Quiet => {
                for faq in faqs {
                    println!("{}", faq.id);
                }
            }
        }
    }

    /// Print a stored inquiry
    pub fn print_inquiry(&self, inquiry: &Inquiry) {
        match self.format {
            OutputFormat::Human => {
                println!("ID:      {}", inquiry.id);
                println!("Status:  {}", inquiry.status);
                println!("Title:   {}", inquiry.title);
                println!("From:    {} <{}>", inquiry.name, inquiry.email);
                println!("Created: {}", inquiry.created_at.format("%Y-%m-%d %H:%M"));
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(inquiry).unwrap());
            }
            OutputFormat::Quiet => {
                println!("{}", inquiry.id);
            }
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Human => println!("✓ {}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({"status": "success", "message": message})
                );
            }
            OutputFormat::Quiet => {}
        }
    }

}

/// Truncate a string to max length, adding "..." if truncated
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_flags() {
        assert_eq!(OutputFormat::from_flags(false, false), OutputFormat::Human);
        assert_eq!(OutputFormat::from_flags(true, false), OutputFormat::Json);
        assert_eq!(OutputFormat::from_flags(false, true), OutputFormat::Quiet);
        // Quiet takes precedence
        assert_eq!(OutputFormat::from_flags(true, true), OutputFormat::Quiet);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly ten", 11), "exactly ten");
        assert_eq!(truncate("a much longer title here", 10), "a much ...");
    }
}
