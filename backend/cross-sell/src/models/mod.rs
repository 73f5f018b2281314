use serde::{Deserialize, Serialize};

/// Default number of recommendations returned when the caller does not say.
pub const DEFAULT_MAX_ITEMS: usize = 3;

/// A cross-sell catalog entry.
///
/// Display fields (`name`, `description`, `icon`, `url`) are opaque to ranking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub url: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_free: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_new: Option<bool>,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            icon: String::new(),
            url: String::new(),
            category: category.into(),
            tags: Vec::new(),
            rating: None,
            is_free: None,
            is_new: None,
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_new(mut self, is_new: bool) -> Self {
        self.is_new = Some(is_new);
        self
    }

    pub fn with_free(mut self, is_free: bool) -> Self {
        self.is_free = Some(is_free);
        self
    }

    /// Absent flag reads as `false`.
    pub fn is_new(&self) -> bool {
        self.is_new.unwrap_or(false)
    }

    /// Absent flag reads as `false`.
    pub fn is_free(&self) -> bool {
        self.is_free.unwrap_or(false)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Parameters for one ranking call.
///
/// Built fresh per invocation and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    #[serde(default)]
    pub exclude_id: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_max_items")]
    pub max_items: usize,
}

fn default_max_items() -> usize {
    DEFAULT_MAX_ITEMS
}

impl Default for RecommendationRequest {
    fn default() -> Self {
        Self {
            exclude_id: None,
            category: None,
            tags: Vec::new(),
            max_items: DEFAULT_MAX_ITEMS,
        }
    }
}

impl RecommendationRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request issued from inside `app_id`; the calling app never recommends itself.
    pub fn for_app(app_id: impl Into<String>) -> Self {
        Self::default().exclude(app_id)
    }

    pub fn exclude(mut self, id: impl Into<String>) -> Self {
        self.exclude_id = Some(id.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn max_items(mut self, max_items: usize) -> Self {
        self.max_items = max_items;
        self
    }

    pub fn excluded_id(&self) -> Option<&str> {
        self.exclude_id.as_deref()
    }
}

/// A product paired with its score for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate<'a> {
    pub product: &'a Product,
    pub score: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_flags_read_as_false() {
        let product = Product::new("a", "A", "ai");
        assert!(!product.is_new());
        assert!(!product.is_free());

        let product = product.with_new(true).with_free(true);
        assert!(product.is_new());
        assert!(product.is_free());
    }

    #[test]
    fn test_request_defaults() {
        let request = RecommendationRequest::default();
        assert_eq!(request.max_items, 3);
        assert!(request.tags.is_empty());
        assert!(request.category.is_none());
        assert!(request.excluded_id().is_none());
    }

    #[test]
    fn test_for_app_excludes_the_calling_app() {
        let request = RecommendationRequest::for_app("notes");
        assert_eq!(request.excluded_id(), Some("notes"));
        assert_eq!(request.max_items, DEFAULT_MAX_ITEMS);

        let request = request.exclude("budget");
        assert_eq!(request.excluded_id(), Some("budget"));
    }

    #[test]
    fn test_product_deserializes_camel_case_flags() {
        let json = r#"{
            "id": "budget",
            "name": "Budget",
            "category": "finance",
            "tags": ["money"],
            "rating": 4.8,
            "isFree": true,
            "isNew": false
        }"#;

        let product: Product = serde_json::from_str(json).expect("valid product json");
        assert_eq!(product.id, "budget");
        assert_eq!(product.rating, Some(4.8));
        assert!(product.is_free());
        assert!(!product.is_new());
        assert!(product.description.is_empty());
    }

    #[test]
    fn test_request_deserializes_with_missing_fields() {
        let request: RecommendationRequest =
            serde_json::from_str(r#"{"category":"ai"}"#).expect("valid request json");
        assert_eq!(request.category.as_deref(), Some("ai"));
        assert_eq!(request.max_items, DEFAULT_MAX_ITEMS);
        assert!(request.tags.is_empty());
    }
}
