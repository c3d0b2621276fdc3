//! Application Configuration
//!
//! Configuration for the Feed application layer.

/// Feed application configuration
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Maximum post message length (Unicode code points)
    pub post_max_chars: usize,
    /// Maximum comment message length (Unicode code points)
    pub comment_max_chars: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            post_max_chars: 480,
            comment_max_chars: 480,
        }
    }
}
