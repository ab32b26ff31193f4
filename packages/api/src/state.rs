use crate::error::ApiError;

/// Lifecycle of a value fetched from the API: `Idle → Loading → Loaded | Failed`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(ApiError),
}

impl<T> LoadState<T> {
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => LoadState::Loaded(value),
            Err(err) => LoadState::Failed(err),
        }
    }

    /// Apply a refetch. A failure only replaces the state when nothing has loaded yet;
    /// otherwise the loaded value stays and the error is handed back.
    pub fn refresh(&mut self, result: Result<T, ApiError>) -> Option<ApiError> {
        match result {
            Ok(value) => {
                *self = LoadState::Loaded(value);
                None
            }
            Err(err) if matches!(self, LoadState::Loaded(_)) => Some(err),
            Err(err) => {
                *self = LoadState::Failed(err);
                None
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            LoadState::Failed(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_result() {
        let loaded: LoadState<u32> = LoadState::from_result(Ok(3));
        assert_eq!(loaded.value(), Some(&3));
        assert!(loaded.error().is_none());

        let failed: LoadState<u32> = LoadState::from_result(Err(ApiError::network("offline")));
        assert_eq!(failed.error().map(ToString::to_string).as_deref(), Some("offline"));
        assert!(!failed.is_loading());
        assert_eq!(LoadState::<u32>::default(), LoadState::Idle);
    }

    #[test]
    fn test_failed_refresh_keeps_loaded_value() {
        let mut state = LoadState::Loaded(vec![1, 2]);
        let err = state.refresh(Err(ApiError::network("offline")));
        assert_eq!(err.map(|e| e.to_string()).as_deref(), Some("offline"));
        assert_eq!(state.value(), Some(&vec![1, 2]));

        assert!(state.refresh(Ok(vec![3])).is_none());
        assert_eq!(state.value(), Some(&vec![3]));
    }

    #[test]
    fn test_failed_first_load() {
        let mut state = LoadState::<u32>::Loading;
        assert!(state.refresh(Err(ApiError::network("offline"))).is_none());
        assert!(state.error().is_some());
    }
}
