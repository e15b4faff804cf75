use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

pub const PLACEHOLDER_COVER_IMAGE: &str =
    "https://images.unsplash.com/photo-1480796927426-f609979314bd?w=800";

pub const CURRENT_USER_ID: &str = "current-user";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub name: String,
    pub username: String,
    pub avatar: String,
}

impl Author {
    /// Stand-in author for trips the local user persisted. The owner
    /// reference on the stored record is not resolved into a profile.
    pub fn current_user() -> Self {
        Self {
            id: CURRENT_USER_ID.to_string(),
            name: "You".to_string(),
            username: "you".to_string(),
            avatar: String::new(),
        }
    }
}

/// Where a trip entered the screen from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    Authored,
    Sample,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayEntry {
    pub day: u32,
    pub title: String,
    #[serde(default)]
    pub places: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    pub id: String,
    pub title: String,
    pub destination: String,
    pub country: String,
    pub duration: u32,
    pub cover_image: String,
    pub author: Author,
    pub remix_count: u32,
    pub view_count: u32,
    pub created_at: String,
    pub itinerary: Vec<DayEntry>,
    pub tags: BTreeSet<String>,
    pub remixed_from: Option<String>,
    pub provenance: Provenance,
}

impl Trip {
    pub fn is_remix(&self) -> bool {
        self.remixed_from
            .as_deref()
            .is_some_and(|value| !value.is_empty())
    }
}

/// Persisted trip shape as returned by the data layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteTripRecord {
    pub id: String,
    pub title: String,
    pub destination: String,
    pub country: String,
    pub duration: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    pub created_at: String,
    pub owner_id: String,
}

pub fn normalize(record: &RemoteTripRecord) -> Trip {
    let cover_image = record
        .cover_image
        .as_deref()
        .filter(|value| !value.is_empty())
        .unwrap_or(PLACEHOLDER_COVER_IMAGE)
        .to_string();

    Trip {
        id: record.id.clone(),
        title: record.title.clone(),
        destination: record.destination.clone(),
        country: record.country.clone(),
        duration: record.duration,
        cover_image,
        author: Author::current_user(),
        remix_count: 0,
        view_count: 0,
        created_at: record.created_at.clone(),
        itinerary: Vec::new(),
        tags: BTreeSet::new(),
        remixed_from: None,
        provenance: Provenance::Authored,
    }
}
