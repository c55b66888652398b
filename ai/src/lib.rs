pub mod client;
pub mod feedback;

pub use client::{AiConfig, FeedbackClient};
pub use feedback::{EssayFeedback, FeedbackTier};
