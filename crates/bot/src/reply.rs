//! Reply builders, one per intent.

use chrono::{DateTime, Duration, Utc};

use sparkbot_spark::types::{Person, RoomList};

use crate::{error::Result, event::InboundEvent};

/// A built reply: body text plus an optional file attachment URL.
#[derive(Debug, Clone)]
pub struct Reply {
    pub text: String,
    pub files: Option<String>,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            files: None,
        }
    }

    pub fn with_files(mut self, files: impl Into<String>) -> Self {
        self.files = Some(files.into());
        self
    }
}

const MONEY_ICON: &str =
    "https://cdn3.iconfinder.com/data/icons/free-icons-3/128/004_money_dollar_cash_coins_riches_wealth.png";
const GOLD_ICON: &str = "https://cdn0.iconfinder.com/data/icons/ie_Bright/128/gold.png";

pub const HELP_TEXT: &str = "Here's what you can currently ask me: 'show me the money', \
     'show me more money', 'who am i?', 'who are you', 'which rooms'";

pub fn greeting() -> Reply {
    Reply::text("Hello there!")
}

pub fn show_money(event: &InboundEvent) -> Reply {
    Reply::text(format!(
        "Here's your money, {}.\nYour Id is <{}>\nThe id of the message that triggered this \
         interaction is <{}>",
        event.person_email, event.person_id, event.message_id
    ))
    .with_files(MONEY_ICON)
}

pub fn show_more_money() -> Reply {
    Reply::text("Fancy some gold?").with_files(GOLD_ICON)
}

pub fn who_are_you() -> Reply {
    Reply::text("Hum! You're curious! I'm a bot that wants to help you. Do you know Siri? Waaaay better.")
}

pub fn help() -> Reply {
    Reply::text(HELP_TEXT)
}

/// Identity-lookup reply: profile summary with account age.
pub fn person_summary(person: &Person, person_email: &str, now: DateTime<Utc>) -> Result<Reply> {
    let created = DateTime::parse_from_rfc3339(&person.created)?.with_timezone(&Utc);
    let mut text = format!("Looking Good, {}!!", person.display_name);
    text.push_str(&format!("\nYour email is {person_email}"));
    text.push_str(&format!(
        "\nYour profile was created on {} ({} ago)",
        created.format("%B %d, %Y"),
        format_elapsed(now.signed_duration_since(created))
    ));
    text.push_str(&format!("\nYour ID is <{}>", person.id));
    let mut reply = Reply::text(text);
    reply.files = person.avatar.clone();
    Ok(reply)
}

/// Room-enumeration reply: 1-indexed group-room titles plus the count.
pub fn room_listing(rooms: &RoomList) -> Reply {
    let titles: Vec<&str> = rooms
        .items
        .iter()
        .filter(|room| room.room_type == "group")
        .map(|room| room.title.as_str())
        .collect();
    let mut text = format!("I am part of {} conversations. Here's the list:", titles.len());
    for (index, title) in titles.iter().enumerate() {
        text.push_str(&format!("\n{}) {}", index + 1, title));
    }
    Reply::text(text)
}

/// Render an elapsed duration as whole days plus the wall-clock remainder.
/// The shape is uniform across magnitudes; anything under a day still
/// renders as "0 days, H:MM:SS".
pub fn format_elapsed(elapsed: Duration) -> String {
    let total_secs = elapsed.num_seconds().max(0);
    let days = total_secs / 86_400;
    let hours = (total_secs % 86_400) / 3_600;
    let minutes = (total_secs % 3_600) / 60;
    let seconds = total_secs % 60;
    let unit = if days == 1 { "day" } else { "days" };
    format!("{days} {unit}, {hours}:{minutes:02}:{seconds:02}")
}
