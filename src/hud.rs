use crate::simulation::FrameView;

/// HUD display data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HudData {
    pub score: u32,
    pub high_score: u32,
}

impl HudData {
    pub fn from_view(view: &FrameView) -> Self {
        Self {
            score: view.score,
            high_score: view.high_score,
        }
    }

    pub fn score_line(&self) -> String {
        format!("Score: {}", self.score)
    }

    pub fn high_score_line(&self) -> String {
        format!("High Score: {}", self.high_score)
    }
}
