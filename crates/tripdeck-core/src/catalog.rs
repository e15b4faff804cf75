use std::collections::BTreeSet;
use std::sync::OnceLock;

use crate::trip::{Author, DayEntry, Provenance, Trip};

static SAMPLE_TRIPS: OnceLock<Vec<Trip>> = OnceLock::new();

/// Built-in demo trips shown alongside the user's own data.
pub fn sample_trips() -> &'static [Trip] {
    SAMPLE_TRIPS.get_or_init(build_sample_trips)
}

pub fn is_sample_id(catalog: &[Trip], id: &str) -> bool {
    catalog.iter().any(|trip| trip.id == id)
}

fn build_sample_trips() -> Vec<Trip> {
    let mika = author("author-mika", "Mika Tanaka", "mika.t");
    let lucas = author("author-lucas", "Lucas Ferreira", "lucasf");
    let ana = author("author-ana", "Ana Rossi", "anarossi");

    vec![
        Trip {
            id: "sample-kyoto".to_string(),
            title: "Temples & Tea in Kyoto".to_string(),
            destination: "Kyoto".to_string(),
            country: "Japan".to_string(),
            duration: 3,
            cover_image: "https://images.unsplash.com/photo-1493976040374-85c8e12f0c0e?w=800"
                .to_string(),
            author: mika.clone(),
            remix_count: 128,
            view_count: 5420,
            created_at: "2025-11-02T08:30:00Z".to_string(),
            itinerary: vec![
                day(1, "Higashiyama walk", &["Kiyomizu-dera", "Sannenzaka", "Yasaka Shrine"]),
                day(2, "Arashiyama", &["Bamboo Grove", "Tenryu-ji", "Togetsukyo Bridge"]),
                day(3, "Tea and gardens", &["Uji tea houses", "Byodo-in"]),
            ],
            tags: tags(&["culture", "food", "slow travel"]),
            remixed_from: None,
            provenance: Provenance::Sample,
        },
        Trip {
            id: "sample-lisbon".to_string(),
            title: "Lisbon Long Weekend".to_string(),
            destination: "Lisbon".to_string(),
            country: "Portugal".to_string(),
            duration: 2,
            cover_image: "https://images.unsplash.com/photo-1585208798174-6cedd86e019a?w=800"
                .to_string(),
            author: lucas.clone(),
            remix_count: 42,
            view_count: 1893,
            created_at: "2025-12-14T17:05:00Z".to_string(),
            itinerary: vec![
                day(1, "Alfama and Baixa", &["Sao Jorge Castle", "Miradouro da Graca"]),
                day(2, "Belem", &["Jeronimos Monastery", "Pasteis de Belem"]),
            ],
            tags: tags(&["city break", "food"]),
            remixed_from: Some("sample-porto".to_string()),
            provenance: Provenance::Sample,
        },
        Trip {
            id: "sample-rome".to_string(),
            title: "Rome in Four Days".to_string(),
            destination: "Rome".to_string(),
            country: "Italy".to_string(),
            duration: 4,
            cover_image: "https://images.unsplash.com/photo-1552832230-c0197dd311b5?w=800"
                .to_string(),
            author: ana.clone(),
            remix_count: 310,
            view_count: 12044,
            created_at: "2025-09-21T11:00:00Z".to_string(),
            itinerary: vec![
                day(1, "Ancient Rome", &["Colosseum", "Roman Forum", "Palatine Hill"]),
                day(2, "Vatican", &["St. Peter's Basilica", "Vatican Museums"]),
                day(3, "Centro Storico", &["Pantheon", "Piazza Navona", "Trevi Fountain"]),
                day(4, "Trastevere", &["Santa Maria in Trastevere", "Gianicolo"]),
            ],
            tags: tags(&["history", "food", "culture"]),
            remixed_from: None,
            provenance: Provenance::Sample,
        },
        Trip {
            id: "sample-reykjavik".to_string(),
            title: "Ring Road Starter".to_string(),
            destination: "Reykjavik".to_string(),
            country: "Iceland".to_string(),
            duration: 5,
            cover_image: "https://images.unsplash.com/photo-1504829857797-ddff29c27927?w=800"
                .to_string(),
            author: mika,
            remix_count: 17,
            view_count: 960,
            created_at: "2026-01-08T09:45:00Z".to_string(),
            itinerary: vec![
                day(1, "Golden Circle", &["Thingvellir", "Geysir", "Gullfoss"]),
                day(2, "South coast", &["Seljalandsfoss", "Skogafoss", "Reynisfjara"]),
            ],
            tags: tags(&["nature", "road trip"]),
            remixed_from: Some("sample-iceland-classic".to_string()),
            provenance: Provenance::Sample,
        },
    ]
}

fn author(id: &str, name: &str, username: &str) -> Author {
    Author {
        id: id.to_string(),
        name: name.to_string(),
        username: username.to_string(),
        avatar: format!("https://i.pravatar.cc/150?u={username}"),
    }
}

fn day(day: u32, title: &str, places: &[&str]) -> DayEntry {
    DayEntry {
        day,
        title: title.to_string(),
        places: places.iter().map(|value| (*value).to_string()).collect(),
    }
}

fn tags(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::{is_sample_id, sample_trips};
    use crate::trip::Provenance;

    #[test]
    fn sample_ids_are_unique() {
        let ids: BTreeSet<&str> = sample_trips().iter().map(|trip| trip.id.as_str()).collect();
        assert_eq!(ids.len(), sample_trips().len());
    }

    #[test]
    fn sample_trips_are_tagged_as_sample_provenance() {
        assert!(
            sample_trips()
                .iter()
                .all(|trip| trip.provenance == Provenance::Sample)
        );
    }

    #[test]
    fn catalog_contains_both_remixes_and_originals() {
        assert!(sample_trips().iter().any(|trip| trip.is_remix()));
        assert!(sample_trips().iter().any(|trip| !trip.is_remix()));
    }

    #[test]
    fn is_sample_id_uses_exact_match() {
        assert!(is_sample_id(sample_trips(), "sample-rome"));
        assert!(!is_sample_id(sample_trips(), "Sample-Rome"));
        assert!(!is_sample_id(sample_trips(), "sample"));
    }
}
