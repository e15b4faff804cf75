/// State of one upstream feed. A failed fetch is kept apart from an empty
/// result so the screen can say so.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> FetchState<T> {
    pub fn from_result(result: Result<T, String>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(message) => Self::Failed(message),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::Loading | Self::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message.as_str()),
            Self::Loading | Self::Ready(_) => None,
        }
    }
}

impl<T> FetchState<Vec<T>> {
    /// Loaded items, or an empty slice while loading or after a failure.
    pub fn items(&self) -> &[T] {
        self.ready().map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::FetchState;

    #[test]
    fn loading_and_failed_feeds_read_as_empty() {
        let loading: FetchState<Vec<String>> = FetchState::default();
        let failed: FetchState<Vec<String>> = FetchState::Failed("offline".to_string());

        assert!(loading.is_pending());
        assert!(loading.items().is_empty());
        assert!(!failed.is_pending());
        assert!(failed.items().is_empty());
        assert_eq!(failed.error(), Some("offline"));
    }

    #[test]
    fn from_result_maps_both_outcomes() {
        let ready = FetchState::from_result(Ok(vec!["t1".to_string()]));
        assert_eq!(ready.items(), ["t1".to_string()]);
        assert!(ready.error().is_none());

        let failed: FetchState<Vec<String>> = FetchState::from_result(Err("boom".to_string()));
        assert_eq!(failed.error(), Some("boom"));
    }
}
