//! Sprite status as seen by the simulation core
//!
//! Fetching and decoding the image belongs to the host. The core only needs
//! to know whether it can draw the sprite, and what to tell the player if it
//! can't.

use serde::{Deserialize, Serialize};

/// Default sprite location reported in diagnostics
pub const SPRITE_PATH: &str = "./assets/bunny.png";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum SpriteStatus {
    /// Still fetching; draw the fallback shape
    #[default]
    Loading,
    /// Decoded; `aspect` is width / height
    Ready { aspect: f32 },
    /// Failed for good; draw the fallback and show `message`
    Failed { message: String },
}

impl SpriteStatus {
    /// Failure diagnostic with the usual checklist
    pub fn failed(path: &str) -> Self {
        SpriteStatus::Failed {
            message: format!(
                "Failed to load image: {path}\n\
                 - check that the file exists\n\
                 - check that name case and extension match\n\
                 - check that the page is served over http"
            ),
        }
    }

    pub fn image_ready(&self) -> bool {
        matches!(self, SpriteStatus::Ready { .. })
    }

    /// Diagnostic for the error panel; empty unless loading failed
    pub fn image_error(&self) -> &str {
        match self {
            SpriteStatus::Failed { message } => message,
            _ => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_exports() {
        assert!(!SpriteStatus::Loading.image_ready());
        assert_eq!(SpriteStatus::Loading.image_error(), "");
        assert!(SpriteStatus::Ready { aspect: 1.0 }.image_ready());

        let failed = SpriteStatus::failed(SPRITE_PATH);
        assert!(!failed.image_ready());
        assert!(failed.image_error().contains(SPRITE_PATH));
        assert_eq!(failed.image_error().lines().count(), 4);
    }
}
