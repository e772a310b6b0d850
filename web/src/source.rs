use gloo::net::http::Request;
use serde::Deserialize;
use thiserror::Error;

/// Public jservice-compatible API serving the category listing and category
/// detail endpoints.
pub(crate) const DEFAULT_API_BASE: &str = "https://jservice.io/api";

/// Every way the trivia source can let us down; all of them surface to the
/// player as one "source unavailable" condition and abort the game start.
#[derive(Error, Debug, Clone, PartialEq)]
pub(crate) enum SourceError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("malformed payload: {0}")]
    Payload(String),
    #[error("fewer categories than requested")]
    InsufficientCategories,
    #[error("fewer clues than requested")]
    InsufficientClues,
}

/// One entry of the category listing; the detail endpoint wants its id.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub(crate) struct CategoryStub {
    pub(crate) id: u64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub(crate) struct ClueRecord {
    pub(crate) question: String,
    pub(crate) answer: String,
}

/// Full clue set of one category as served by the detail endpoint.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub(crate) struct CategoryData {
    pub(crate) title: String,
    pub(crate) clues: Vec<ClueRecord>,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TriviaSource {
    base: String,
}

impl TriviaSource {
    pub(crate) fn new(base: Option<String>) -> Self {
        Self {
            base: base.unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
        }
    }

    /// Lists up to `pool` candidate categories and returns their ids.
    pub(crate) async fn list_category_ids(&self, pool: usize) -> Result<Vec<u64>, SourceError> {
        let url = format!("{}/categories?count={}", self.base, pool);
        let stubs: Vec<CategoryStub> = self.get_json(&url).await?;
        Ok(stubs.into_iter().map(|stub| stub.id).collect())
    }

    /// Fetches one category's title and full clue set.
    pub(crate) async fn fetch_category(&self, id: u64) -> Result<CategoryData, SourceError> {
        let url = format!("{}/category?id={}", self.base, id);
        self.get_json(&url).await
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(&self, url: &str) -> Result<T, SourceError> {
        log::debug!("GET {}", url);

        let response = Request::get(url)
            .send()
            .await
            .map_err(|err| SourceError::Request(err.to_string()))?;
        if !response.ok() {
            return Err(SourceError::Status(response.status()));
        }

        response
            .json::<T>()
            .await
            .map_err(|err| SourceError::Payload(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_listing_parses_and_ignores_extra_fields() {
        let payload = r#"[
            {"id": 11496, "title": "Geography", "clues_count": 10},
            {"id": 306, "title": "Potpourri", "clues_count": 25}
        ]"#;

        let stubs: Vec<CategoryStub> = serde_json::from_str(payload).unwrap();

        assert_eq!(stubs, [CategoryStub { id: 11496 }, CategoryStub { id: 306 }]);
    }

    #[test]
    fn category_detail_parses_title_and_clues() {
        let payload = r#"{
            "id": 306,
            "title": "Math",
            "clues": [
                {"id": 1, "question": "2+2", "answer": "4", "value": 100},
                {"id": 2, "question": "1+1", "answer": "2", "value": 200}
            ]
        }"#;

        let data: CategoryData = serde_json::from_str(payload).unwrap();

        assert_eq!(data.title, "Math");
        assert_eq!(data.clues.len(), 2);
        assert_eq!(data.clues[0].question, "2+2");
        assert_eq!(data.clues[1].answer, "2");
    }

    #[test]
    fn malformed_detail_payload_is_an_error() {
        let payload = r#"{"title": "Math"}"#;

        assert!(serde_json::from_str::<CategoryData>(payload).is_err());
    }

    #[test]
    fn base_url_defaults_to_the_public_api() {
        assert_eq!(
            TriviaSource::new(None),
            TriviaSource {
                base: DEFAULT_API_BASE.to_string()
            }
        );
        assert_eq!(
            TriviaSource::new(Some("http://localhost:8000/api".to_string())),
            TriviaSource {
                base: "http://localhost:8000/api".to_string()
            }
        );
    }
}
