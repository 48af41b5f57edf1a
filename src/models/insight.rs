use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub title: String,
    pub body: String,
}

impl Default for Insight {
    fn default() -> Self {
        Self {
            title: "Optimal Timing".to_string(),
            body: "Your cortisol levels are highest in the morning. Consider taking your \
                   nootropic stack 30 minutes after waking for maximum cognitive enhancement."
                .to_string(),
        }
    }
}
