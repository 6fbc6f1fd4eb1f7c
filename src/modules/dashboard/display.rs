use chrono::{DateTime, Local, TimeZone, Utc};

use crate::modules::message::schema::{MessageEntity, MessageStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Info,
    Success,
    Neutral,
}

pub fn status_badge(status: MessageStatus) -> BadgeTone {
    match status {
        MessageStatus::New => BadgeTone::Info,
        MessageStatus::Replied => BadgeTone::Success,
        MessageStatus::Archived => BadgeTone::Neutral,
    }
}

/// Label shown in the status selector.
pub fn status_label(status: MessageStatus) -> &'static str {
    match status {
        MessageStatus::New => "New",
        MessageStatus::Replied => "Replied",
        MessageStatus::Archived => "Archived",
    }
}

const TIMESTAMP_FORMAT: &str = "%b %-d, %Y, %I:%M %p";

pub fn format_timestamp_in<Tz>(at: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    at.with_timezone(tz).format(TIMESTAMP_FORMAT).to_string()
}

/// e.g. `Oct 18, 2026, 07:31 AM`, in the machine's local time.
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    format_timestamp_in(at, &Local)
}

pub fn message_count_label(count: usize) -> String {
    if count == 1 {
        "1 message received".to_string()
    } else {
        format!("{count} messages received")
    }
}

pub fn reply_heading(message: &MessageEntity) -> &'static str {
    if message.reply.is_some() {
        "Update Reply:"
    } else {
        "Add Reply:"
    }
}

pub fn reply_button_label(message: &MessageEntity, updating: bool) -> &'static str {
    if updating {
        "Saving..."
    } else if message.reply.is_some() {
        "Update Reply"
    } else {
        "Send Reply"
    }
}
