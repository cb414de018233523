//! Table-driven intent matching: lowercased whole-message comparison against
//! a fixed set of phrases. No fuzzy matching, no tokenization.

/// One recognized canned request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Greeting,
    ShowMoney,
    ShowMoreMoney,
    WhoAreYou,
    Help,
    WhoAmI,
    WhichRooms,
}

/// Accepted phrases per intent. The sets are mutually exclusive by
/// construction; if two entries ever shared a phrase, the first would win.
const INTENTS: &[(&[&str], Intent)] = &[
    (&["hi"], Intent::Greeting),
    (&["show me the money"], Intent::ShowMoney),
    (&["show me more money"], Intent::ShowMoreMoney),
    (&["who are you?", "who are you"], Intent::WhoAreYou),
    (
        &["how can you help me?", "how can you help me", "help", "menu"],
        Intent::Help,
    ),
    (&["who am i?", "who am i"], Intent::WhoAmI),
    (&["which rooms", "which rooms?"], Intent::WhichRooms),
];

/// Match a full message against the phrase table, case-insensitively.
pub fn match_intent(message: &str) -> Option<Intent> {
    let normalized = message.to_lowercase();
    INTENTS
        .iter()
        .find(|(phrases, _)| phrases.contains(&normalized.as_str()))
        .map(|(_, intent)| *intent)
}
