//! Avatar render-state resolution.
//!
//! [`resolve`] is the single place deciding whether an avatar shows
//! initials, an image, or nothing. It is a total pure function: every
//! presenter resolves to *some* state, and re-running it on the same
//! snapshot yields the same answer.

use serde::{Deserialize, Serialize};
use url::Url;

use super::presenter::AvatarPresenter;

/// Shown when the entity has a name that cannot be rendered as letters.
pub const UNDISPLAYABLE_INITIALS: &str = "#";

/// Where an avatar image comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ImageSource {
    /// Encoded image bytes already in memory.
    Bytes(Vec<u8>),
    /// Remote reference; fetched by the rendering host, not by this crate.
    Remote(Url),
}

/// Resolved display state for a single avatar.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub enum AvatarState {
    Initials { text: String },
    Image(ImageSource),
    #[default]
    Empty,
}

impl AvatarState {
    pub fn initials<T: Into<String>>(text: T) -> Self {
        Self::Initials { text: text.into() }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The initials text, when this state renders as text.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Initials { text } => Some(text),
            _ => None,
        }
    }
}

/// Resolve a presenter into its display state.
///
/// Precedence, first match wins:
/// 1. initials text that trims to one or more alphabetic characters →
///    `Initials` with the trimmed text;
/// 2. any other non-empty initials text → `Initials` with `"#"` (the
///    entity has a name, it just isn't displayable as letters);
/// 3. image bytes → `Image`;
/// 4. image URL → `Image` with a remote source;
/// 5. nothing → `Empty`.
///
/// Bytes win over a URL when both are present.
pub fn resolve(source: &impl AvatarPresenter) -> AvatarState {
    if let Some(raw) = source.initials_text() {
        if !raw.is_empty() {
            let trimmed = raw.trim();
            let displayable =
                !trimmed.is_empty() && trimmed.chars().all(char::is_alphabetic);
            return if displayable {
                AvatarState::initials(trimmed)
            } else {
                AvatarState::initials(UNDISPLAYABLE_INITIALS)
            };
        }
    }

    if let Some(bytes) = source.image_bytes() {
        return AvatarState::Image(ImageSource::Bytes(bytes.to_vec()));
    }

    if let Some(url) = source.image_url() {
        return AvatarState::Image(ImageSource::Remote(url.clone()));
    }

    AvatarState::Empty
}
