use fedispace_core::model::SearchResultInstance;
use serde::{Deserialize, Serialize};

pub const SEARCH_FAILED_TITLE: &str = "Something went wrong.";
pub const NO_RESULTS_TITLE: &str = "No search results";
pub const NO_RESULTS_DESCRIPTION: &str = "Try searching for something else.";
pub const MOBILE_WARNING: &str = "This is a desktop-optimized site with large visualizations. You \
     can view a simplified version on smaller devices, but for the full experience, open it on a \
     computer.";

/// Search results as held by the application store. `next` is the backend's
/// pagination cursor.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchState {
    #[serde(default)]
    pub error: bool,
    #[serde(default)]
    pub is_loading_results: bool,
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub results: Vec<SearchResultInstance>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsView<'a> {
    pub results: &'a [SearchResultInstance],
    pub show_spinner: bool,
    pub show_load_more: bool,
    pub show_mobile_warning: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SearchView<'a> {
    Failed,
    NoResults,
    Results(ResultsView<'a>),
}

impl SearchState {
    pub fn has_more_results(&self) -> bool {
        self.next.is_some()
    }

    pub fn view(&self, small_screen: bool) -> SearchView<'_> {
        if self.error {
            return SearchView::Failed;
        }
        if !self.is_loading_results && !self.query.is_empty() && self.results.is_empty() {
            return SearchView::NoResults;
        }

        SearchView::Results(ResultsView {
            results: &self.results,
            show_spinner: self.is_loading_results,
            show_load_more: !self.is_loading_results && self.has_more_results(),
            show_mobile_warning: small_screen && self.results.is_empty(),
        })
    }
}

/// Text typed into the search bar but not yet submitted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchInput {
    current: String,
}

impl SearchInput {
    /// Starts from the last submitted query so returning to the screen keeps it.
    pub fn new(committed_query: &str) -> Self {
        Self {
            current: committed_query.to_string(),
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn set(&mut self, text: impl Into<String>) {
        self.current = text.into();
    }

    /// Enter submits, unless the text is what was already searched for.
    pub fn should_submit(&self, key: &str, committed_query: &str) -> bool {
        key == "Enter" && self.current != committed_query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str) -> SearchResultInstance {
        SearchResultInstance {
            name: name.to_string(),
            user_count: None,
            kind: None,
        }
    }

    #[test]
    fn test_error_wins() {
        let state = SearchState {
            error: true,
            results: vec![result("a.social")],
            ..Default::default()
        };
        assert_eq!(state.view(false), SearchView::Failed);
    }

    #[test]
    fn test_no_results_only_after_search_finishes() {
        let mut state = SearchState {
            query: "cats".into(),
            is_loading_results: true,
            ..Default::default()
        };
        assert!(matches!(state.view(false), SearchView::Results(_)));

        state.is_loading_results = false;
        assert_eq!(state.view(false), SearchView::NoResults);
    }

    #[test]
    fn test_load_more_needs_cursor_and_idle() {
        let mut state = SearchState {
            query: "cats".into(),
            next: Some("cursor-2".into()),
            results: vec![result("cats.town")],
            ..Default::default()
        };
        let SearchView::Results(view) = state.view(false) else {
            panic!("expected results");
        };
        assert!(view.show_load_more);
        assert!(!view.show_spinner);

        state.is_loading_results = true;
        let SearchView::Results(view) = state.view(false) else {
            panic!("expected results");
        };
        assert!(!view.show_load_more);
        assert!(view.show_spinner);
    }

    #[test]
    fn test_mobile_warning_before_first_search() {
        let state = SearchState::default();
        let SearchView::Results(view) = state.view(true) else {
            panic!("expected results");
        };
        assert!(view.show_mobile_warning);
        assert!(view.results.is_empty());
    }

    #[test]
    fn test_submit_on_enter_with_new_text() {
        let mut input = SearchInput::new("cats");
        assert!(!input.should_submit("Enter", "cats"));

        input.set("dogs");
        assert!(input.should_submit("Enter", "cats"));
        assert!(!input.should_submit("a", "cats"));
        assert_eq!(input.current(), "dogs");
    }
}
