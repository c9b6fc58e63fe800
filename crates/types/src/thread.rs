use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The opening post of a thread as it appears in a board catalog.
///
/// Text-only threads come without attachment fields and many threads have no
/// subject, so every string decodes to `""` and `tim` to `0` when absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thread {
    #[serde(rename = "no")]
    pub id: i64,
    #[serde(rename = "sub", default)]
    pub subject: String,
    #[serde(rename = "com", default)]
    pub comment_body: String,
    #[serde(rename = "name", default)]
    pub author_name: String,
    /// Pre-formatted by upstream, shown as is.
    #[serde(rename = "now", default)]
    pub posted_at: String,
    #[serde(rename = "filename", default)]
    pub attachment_file_name: String,
    #[serde(rename = "ext", default)]
    pub attachment_ext: String,
    /// Upload time of the attachment in milliseconds since the epoch. Also the
    /// attachment's name on the media host.
    #[serde(rename = "tim", default)]
    pub attachment_timestamp: i64,
    #[serde(default)]
    pub replies: Option<i32>,
    #[serde(default)]
    pub images: Option<i32>,
}

impl Thread {
    pub fn has_attachment(&self) -> bool {
        !self.attachment_ext.is_empty()
    }

    /// Original file name of the attachment, extension included.
    pub fn attachment(&self) -> String {
        format!("{}{}", self.attachment_file_name, self.attachment_ext)
    }

    pub fn uploaded_at(&self) -> Option<DateTime<Utc>> {
        if !self.has_attachment() {
            return None;
        }
        DateTime::from_timestamp_millis(self.attachment_timestamp)
    }

    /// Comment with markup removed, falling back to the raw body when the
    /// entities can't be decoded.
    pub fn clean_comment(&self) -> String {
        crate::utils::remove_html(&self.comment_body).unwrap_or_else(|e| {
            debug!("comment of {} keeps its markup: {:?}", self.id, e);
            self.comment_body.clone()
        })
    }
}
