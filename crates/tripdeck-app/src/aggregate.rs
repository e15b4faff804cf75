use tripdeck_core::catalog::is_sample_id;
use tripdeck_core::trip::{RemoteTripRecord, Trip, normalize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionTab {
    Created,
    Remixed,
    Saved,
}

pub const COLLECTION_TABS: [CollectionTab; 3] = [
    CollectionTab::Created,
    CollectionTab::Remixed,
    CollectionTab::Saved,
];

impl CollectionTab {
    pub fn title(self) -> &'static str {
        match self {
            Self::Created => "Created",
            Self::Remixed => "Remixed",
            Self::Saved => "Saved",
        }
    }

    pub fn empty_message(self) -> &'static str {
        match self {
            Self::Created => "You haven't created any trips yet",
            Self::Remixed => "You haven't remixed any trips yet",
            Self::Saved => "No saved trips yet",
        }
    }

    pub fn empty_cta(self) -> &'static str {
        match self {
            Self::Created => "Create your first trip",
            Self::Remixed => "Explore trips to remix",
            Self::Saved => "Explore trips to save",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Self::Created => 0,
            Self::Remixed => 1,
            Self::Saved => 2,
        }
    }

    pub fn next(self) -> Self {
        COLLECTION_TABS[(self.index() + 1) % COLLECTION_TABS.len()]
    }

    pub fn previous(self) -> Self {
        COLLECTION_TABS[(self.index() + COLLECTION_TABS.len() - 1) % COLLECTION_TABS.len()]
    }

    pub fn parse(value: &str) -> Option<Self> {
        COLLECTION_TABS
            .into_iter()
            .find(|tab| tab.title().eq_ignore_ascii_case(value))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripCollections {
    pub created: Vec<Trip>,
    pub remixed: Vec<Trip>,
    pub saved: Vec<Trip>,
}

impl TripCollections {
    pub fn get(&self, tab: CollectionTab) -> &[Trip] {
        match tab {
            CollectionTab::Created => &self.created,
            CollectionTab::Remixed => &self.remixed,
            CollectionTab::Saved => &self.saved,
        }
    }

    pub fn find(&self, id: &str) -> Option<&Trip> {
        self.created
            .iter()
            .chain(&self.remixed)
            .chain(&self.saved)
            .find(|trip| trip.id == id)
    }
}

/// Sorts every known trip into the three collections. Source order is kept
/// and the result depends only on the inputs.
pub fn aggregate(
    records: &[RemoteTripRecord],
    saved_ids: &[String],
    catalog: &[Trip],
) -> TripCollections {
    let created = records
        .iter()
        .filter(|record| {
            let collides = is_sample_id(catalog, &record.id);
            if collides {
                tracing::debug!(id = %record.id, "remote trip shares a sample id; left out of created");
            }
            !collides
        })
        .map(normalize)
        .collect();

    let remixed = catalog
        .iter()
        .filter(|trip| trip.is_remix())
        .cloned()
        .collect();

    let saved = catalog
        .iter()
        .filter(|trip| saved_ids.iter().any(|id| id == &trip.id))
        .cloned()
        .collect();

    TripCollections {
        created,
        remixed,
        saved,
    }
}
