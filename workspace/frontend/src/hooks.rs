/// Fetch state of asynchronously loaded data
#[derive(Clone, PartialEq)]
pub enum FetchState<T> {
    NotStarted,
    Loading,
    Success(T),
    Error(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::NotStarted
    }
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_loading_state_is_loading() {
        let state: FetchState<Vec<u32>> = FetchState::default();
        assert!(!state.is_loading());

        assert!(FetchState::<u32>::Loading.is_loading());
        assert!(!FetchState::Success(3).is_loading());
        assert!(!FetchState::<u32>::Error("offline".to_string()).is_loading());
    }
}
