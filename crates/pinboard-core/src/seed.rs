//! Default seed content
//!
//! Builders for the records written on first run, when a collection's
//! blob has never been persisted. Post timestamps are offsets from the
//! seed instant so a fresh install looks recently active.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::models::{Board, Faq, Post};

/// Default posts, one per board
pub(crate) fn default_posts(now: DateTime<Utc>) -> Vec<Post> {
    vec![
        Post {
            id: Uuid::new_v4(),
            board: Board::Notice,
            title: "[Notice] Scheduled maintenance (Sep 5, 02:00-04:00)".to_string(),
            author: "admin".to_string(),
            content: "To keep the service reliable, maintenance is scheduled for \
                      Friday Sep 5 from 02:00 to 04:00. Expect brief downtime."
                .to_string(),
            tags: vec!["maintenance".to_string(), "notice".to_string()],
            views: 122,
            likes: 9,
            created_at: now - Duration::hours(48),
            updated_at: now - Duration::hours(24),
            event_start: None,
            event_end: None,
        },
        Post {
            id: Uuid::new_v4(),
            board: Board::Community,
            title: "Looking for subscription recommendations".to_string(),
            author: "parkjg".to_string(),
            content: "Any recommendations for a five-year-old? Something focused on \
                      motor skills or creativity would be great."
                .to_string(),
            tags: vec!["recommendations".to_string(), "subscription".to_string()],
            views: 87,
            likes: 4,
            created_at: now - Duration::hours(12),
            updated_at: now - Duration::hours(11),
            event_start: None,
            event_end: None,
        },
        Post {
            id: Uuid::new_v4(),
            board: Board::Event,
            title: "Fall sale: 20% off subscriptions (Sep 1-15)".to_string(),
            author: "events team".to_string(),
            content: "Limited fall promotion: 20% off all subscriptions, for both new \
                      and returning subscribers. Details inside."
                .to_string(),
            tags: vec!["sale".to_string(), "fall".to_string()],
            views: 301,
            likes: 18,
            created_at: now - Duration::hours(30),
            updated_at: now - Duration::hours(1),
            event_start: Some(now - Duration::days(1)),
            event_end: Some(now + Duration::days(13)),
        },
    ]
}

/// Default FAQ entries
pub(crate) fn default_faqs() -> Vec<Faq> {
    vec![
        Faq::new(
            "Can I pause my subscription?",
            "Yes. Go to My Page > Subscriptions to pause for one to three months.",
        ),
        Faq::new(
            "How do I change my payment method?",
            "Register a new card under My Page > Payment Methods and set it as the default.",
        ),
    ]
}
