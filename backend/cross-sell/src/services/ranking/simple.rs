use super::{Ranker, ScoreWeights};
use crate::models::{Product, RecommendationRequest, ScoredCandidate};
use std::collections::HashSet;
use tracing::debug;

/// Ranking Layer - rule based scoring over the static catalog
#[derive(Debug, Clone, Default)]
pub struct ScoreRanker {
    weights: ScoreWeights,
}

impl ScoreRanker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(weights: ScoreWeights) -> Self {
        Self { weights }
    }
}

impl Ranker for ScoreRanker {
    fn rank_scored<'a>(
        &self,
        products: &'a [Product],
        request: &RecommendationRequest,
    ) -> Vec<ScoredCandidate<'a>> {
        if request.max_items == 0 || products.is_empty() {
            return Vec::new();
        }

        if has_duplicates(&request.tags) {
            // Repeats still compound; most callers don't mean it.
            debug!(tags = ?request.tags, "Recommendation request contains duplicate tags");
        }

        let excluded = request.excluded_id();
        let mut candidates: Vec<ScoredCandidate<'a>> = products
            .iter()
            .filter(|product| Some(product.id.as_str()) != excluded)
            .map(|product| ScoredCandidate {
                product,
                score: self.weights.score(product, request),
            })
            .collect();

        // sort_by is stable: equal scores keep catalog order
        candidates.sort_by(|a, b| b.score.cmp(&a.score));
        candidates.truncate(request.max_items);

        debug!(
            candidates = products.len(),
            returned = candidates.len(),
            "Ranked recommendations"
        );

        candidates
    }
}

fn has_duplicates(tags: &[String]) -> bool {
    let mut seen = HashSet::with_capacity(tags.len());
    tags.iter().any(|tag| !seen.insert(tag.as_str()))
}

/// Rank `products` with the default weights.
pub fn rank<'a>(products: &'a [Product], request: &RecommendationRequest) -> Vec<&'a Product> {
    ScoreRanker::default().rank(products, request)
}

/// Like [`rank`], keeping each product's score.
pub fn rank_scored<'a>(
    products: &'a [Product],
    request: &RecommendationRequest,
) -> Vec<ScoredCandidate<'a>> {
    ScoreRanker::default().rank_scored(products, request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::{layer::SubscriberExt, Registry};

    /// Collects event messages
    #[derive(Clone, Default)]
    struct MessageCapture {
        messages: Arc<Mutex<Vec<String>>>,
    }

    impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for MessageCapture {
        fn on_event(
            &self,
            event: &tracing::Event<'_>,
            _ctx: tracing_subscriber::layer::Context<'_, S>,
        ) {
            let mut visitor = MessageVisitor::default();
            event.record(&mut visitor);
            if let Some(message) = visitor.0 {
                self.messages.lock().unwrap().push(message);
            }
        }
    }

    #[derive(Default)]
    struct MessageVisitor(Option<String>);

    impl tracing::field::Visit for MessageVisitor {
        fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
            if field.name() == "message" {
                self.0 = Some(format!("{:?}", value));
            }
        }
    }

    fn rank_capturing(
        catalog: &[Product],
        request: &RecommendationRequest,
    ) -> (Vec<(String, u32)>, Vec<String>) {
        let capture = MessageCapture::default();
        let subscriber = Registry::default().with(capture.clone());

        let scored: Vec<(String, u32)> = tracing::subscriber::with_default(subscriber, || {
            rank_scored(catalog, request)
                .into_iter()
                .map(|c| (c.product.id.clone(), c.score))
                .collect()
        });
        let messages = capture.messages.lock().unwrap().clone();
        (scored, messages)
    }

    /// A(ai, 4.9, new), B(finance, 4.8), C(ai, [chat])
    fn sample_catalog() -> Vec<Product> {
        vec![
            Product::new("A", "Alpha", "ai").with_rating(4.9).with_new(true),
            Product::new("B", "Beta", "finance").with_rating(4.8),
            Product::new("C", "Gamma", "ai").with_tags(["chat"]),
        ]
    }

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_category_request_orders_by_score() {
        let catalog = sample_catalog();
        let request = RecommendationRequest::new().category("ai").max_items(2);

        let scored = rank_scored(&catalog, &request);
        let result: Vec<(&str, u32)> = scored
            .iter()
            .map(|c| (c.product.id.as_str(), c.score))
            .collect();

        assert_eq!(result, vec![("A", 5), ("C", 3)]);
    }

    #[test]
    fn test_tag_request_truncates_to_one() {
        let catalog = sample_catalog();
        let request = RecommendationRequest::new().tags(["chat"]).max_items(1);

        assert_eq!(ids(&rank(&catalog, &request)), vec!["C"]);
    }

    #[test]
    fn test_excluded_product_never_returned() {
        let catalog = sample_catalog();
        let request = RecommendationRequest::new().exclude("A").max_items(5);

        let result = rank(&catalog, &request);
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|p| p.id != "A"));
    }

    #[test]
    fn test_zero_max_items_is_empty() {
        let catalog = sample_catalog();
        let request = RecommendationRequest::new().category("ai").max_items(0);

        assert!(rank(&catalog, &request).is_empty());
    }

    #[test]
    fn test_empty_catalog_is_empty() {
        assert!(rank(&[], &RecommendationRequest::default()).is_empty());
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let catalog = vec![
            Product::new("x", "X", "misc"),
            Product::new("y", "Y", "misc"),
            Product::new("z", "Z", "misc"),
        ];

        let result = rank(&catalog, &RecommendationRequest::new().max_items(10));
        assert_eq!(ids(&result), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_zero_score_products_are_still_returned() {
        let catalog = sample_catalog();
        let request = RecommendationRequest::new().max_items(10);

        // A: new + rating, B: rating, C: nothing
        assert_eq!(ids(&rank(&catalog, &request)), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_catalog_is_not_mutated() {
        let catalog = sample_catalog();
        let before = catalog.clone();
        let _ = rank(&catalog, &RecommendationRequest::new().category("ai"));
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_custom_weights_change_order() {
        let catalog = sample_catalog();
        let request = RecommendationRequest::new().category("finance").max_items(1);

        // B: category 3 + rating 1 beats A: new 1 + rating 1
        assert_eq!(ids(&rank(&catalog, &request)), vec!["B"]);

        let ranker = ScoreRanker::with_weights(ScoreWeights {
            category_match: 0,
            ..ScoreWeights::default()
        });
        assert_eq!(ids(&ranker.rank(&catalog, &request)), vec!["A"]);
    }

    #[test]
    fn test_duplicate_tags_are_logged_and_compound() {
        let catalog = sample_catalog();
        let request = RecommendationRequest::new().tags(["chat", "chat"]).max_items(1);

        let (scored, messages) = rank_capturing(&catalog, &request);

        assert_eq!(scored, vec![("C".to_string(), 4)]);
        assert!(messages
            .iter()
            .any(|m| m == "Recommendation request contains duplicate tags"));
    }

    #[test]
    fn test_distinct_tags_are_not_logged() {
        let catalog = sample_catalog();
        let request = RecommendationRequest::new().tags(["chat", "money"]);

        let (_, messages) = rank_capturing(&catalog, &request);

        assert!(!messages.is_empty());
        assert!(messages.iter().all(|m| !m.contains("duplicate tags")));
    }

    #[test]
    fn test_has_duplicates() {
        assert!(!has_duplicates(&["a".to_string(), "b".to_string()]));
        assert!(has_duplicates(&["a".to_string(), "a".to_string()]));
        assert!(!has_duplicates(&[]));
    }
}
