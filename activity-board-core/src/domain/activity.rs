use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single activity as served by `GET /activities`
///
/// The activity's name is not stored here; it is the map key in
/// [`Catalog`](crate::Catalog) and the identity key for signup and
/// unregister requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Activity {
    /// Free-form description
    pub description: String,

    /// Free-form schedule text (e.g. "Fridays, 3:30 PM - 5:00 PM")
    pub schedule: String,

    /// Optional category tag; activities without one never match a
    /// non-empty category filter
    #[serde(default)]
    pub category: Option<String>,

    /// Participant capacity
    pub max_participants: u32,

    /// Signed-up participant emails, in server order
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Create a new activity with no participants
    pub fn new(description: String, schedule: String, max_participants: u32) -> Self {
        Activity {
            description,
            schedule,
            category: None,
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Set the category tag
    pub fn with_category(mut self, category: String) -> Self {
        self.category = Some(category);
        self
    }

    /// Set the participant list
    pub fn with_participants(mut self, participants: Vec<String>) -> Self {
        self.participants = participants;
        self
    }

    /// Remaining capacity, derived fresh on every call (never cached)
    ///
    /// Saturates at zero if the server reports more participants than
    /// `max_participants`.
    pub fn spots_left(&self) -> u32 {
        self.max_participants
            .saturating_sub(self.participants.len() as u32)
    }

    /// Whether anyone has signed up yet
    pub fn has_participants(&self) -> bool {
        !self.participants.is_empty()
    }

    /// Case-insensitive substring match against the activity's name or
    /// description
    pub fn matches_search(&self, name: &str, search: &str) -> bool {
        let needle = search.to_lowercase();
        name.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }
}
