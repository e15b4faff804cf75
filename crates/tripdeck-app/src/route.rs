pub const TRIPS_PATH: &str = "/trips";
pub const CREATE_PATH: &str = "/create";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    To(String),
    Back,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Info,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Error,
        }
    }
}

pub fn trip_path(id: &str) -> String {
    format!("/trip/{id}")
}

pub fn create_path_for(destination: &str) -> String {
    format!("{CREATE_PATH}?destination={}", urlencoding::encode(destination))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Trips,
    Trip(String),
    Create { destination: Option<String> },
    Other(String),
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let (base, query) = match path.split_once('?') {
            Some((base, query)) => (base, Some(query)),
            None => (path, None),
        };

        if base == TRIPS_PATH {
            return Self::Trips;
        }

        if base == CREATE_PATH {
            let destination = query.and_then(|query| {
                query.split('&').find_map(|pair| {
                    let value = pair.strip_prefix("destination=")?;
                    urlencoding::decode(value).ok().map(|value| value.into_owned())
                })
            });
            return Self::Create { destination };
        }

        match base.strip_prefix("/trip/") {
            Some(id) if !id.is_empty() && !id.contains('/') => Self::Trip(id.to_string()),
            _ => Self::Other(path.to_string()),
        }
    }
}
