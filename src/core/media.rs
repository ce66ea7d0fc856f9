//! Media-type classification by export directory prefix.
//!
//! The exporter stores attachments in fixed directories and message content
//! for an attachment is its relative link, e.g. `photos/photo_3@01-01-2021.jpg`.
//! The prefix table lives here so the naming can change without touching the
//! featurizer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Attachment kinds recognised from a message's link prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Sticker,
    Image,
    Voice,
    Video,
    VideoMessage,
}

impl MediaKind {
    /// Every kind, in prefix-table order.
    pub const ALL: [MediaKind; 5] = [
        MediaKind::Sticker,
        MediaKind::Image,
        MediaKind::Voice,
        MediaKind::Video,
        MediaKind::VideoMessage,
    ];

    /// Export directory the attachment links start with.
    pub fn prefix(self) -> &'static str {
        match self {
            MediaKind::Sticker => "stickers",
            MediaKind::Image => "photos",
            MediaKind::Voice => "voice_messages",
            MediaKind::Video => "video_files",
            MediaKind::VideoMessage => "round_video_messages",
        }
    }

    /// Name of the feature column this kind sets.
    pub fn column(self) -> &'static str {
        match self {
            MediaKind::Sticker => "is_sticker",
            MediaKind::Image => "is_image",
            MediaKind::Voice => "is_voice",
            MediaKind::Video => "is_video",
            MediaKind::VideoMessage => "is_video_msg",
        }
    }

    /// Returns the kind whose prefix `message` starts with, or `None` for text.
    ///
    /// ```
    /// use chatsift::core::media::MediaKind;
    ///
    /// assert_eq!(MediaKind::classify("photos/p.jpg"), Some(MediaKind::Image));
    /// assert_eq!(MediaKind::classify("round_video_messages/v.mp4"), Some(MediaKind::VideoMessage));
    /// assert_eq!(MediaKind::classify("look at my photos"), None);
    /// ```
    pub fn classify(message: &str) -> Option<MediaKind> {
        Self::ALL
            .into_iter()
            .find(|kind| message.starts_with(kind.prefix()))
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MediaKind::Sticker => "sticker",
            MediaKind::Image => "image",
            MediaKind::Voice => "voice",
            MediaKind::Video => "video",
            MediaKind::VideoMessage => "video message",
        };
        f.write_str(name)
    }
}
