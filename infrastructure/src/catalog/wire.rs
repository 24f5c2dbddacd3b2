//! Catalog wire format
//!
//! ```json
//! {
//!   "Verbal Comprehension": {
//!     "easy":   [ { "id": "vc_e1", "question": "...", "options": [...], "correct": 2 } ],
//!     "medium": [ ... ],
//!     "hard":   [ ... ]
//!   },
//!   "Working Memory": { ... }
//! }
//! ```
//!
//! Domain and difficulty come from the enclosing keys. Everything besides
//! `id`, `category`, `difficulty` and `correct` is kept as opaque content.
//! Items without a `correct` key are judged interactively by their original
//! front end and are skipped here.

use iqtest_application::CatalogError;
use iqtest_domain::{AnswerKey, CognitiveDomain, Difficulty, Question, QuestionCatalog};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireId {
    Number(u64),
    Text(String),
}

impl WireId {
    fn into_string(self) -> String {
        match self {
            WireId::Number(n) => n.to_string(),
            WireId::Text(s) => s,
        }
    }
}

#[derive(Debug, Deserialize)]
struct WireItem {
    id: WireId,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    difficulty: Option<String>,
    #[serde(default)]
    correct: Option<AnswerKey>,
    #[serde(flatten)]
    content: Map<String, Value>,
}

type WireCatalog = BTreeMap<String, BTreeMap<String, Vec<WireItem>>>;

/// Parse a catalog document into a validated [`QuestionCatalog`].
pub fn parse_catalog(json: &str) -> Result<QuestionCatalog, CatalogError> {
    let wire: WireCatalog =
        serde_json::from_str(json).map_err(|e| CatalogError::Malformed(e.to_string()))?;

    let mut buckets: BTreeMap<CognitiveDomain, BTreeMap<Difficulty, Vec<Question>>> =
        BTreeMap::new();
    let mut skipped = 0usize;

    for (domain_key, tiers) in wire {
        let domain: CognitiveDomain = domain_key
            .parse()
            .map_err(|e: String| CatalogError::Malformed(e))?;

        for (difficulty_key, items) in tiers {
            let difficulty: Difficulty = difficulty_key
                .parse()
                .map_err(|e: String| CatalogError::Malformed(e))?;
            let bucket = buckets
                .entry(domain)
                .or_default()
                .entry(difficulty)
                .or_default();

            for item in items {
                let id = item.id.into_string();
                if let Some(category) = &item.category
                    && category.parse::<CognitiveDomain>().ok() != Some(domain)
                {
                    warn!(
                        "Item {} declares category '{}' but sits under {}",
                        id, category, domain
                    );
                }
                if let Some(declared) = &item.difficulty
                    && declared.parse::<Difficulty>().ok() != Some(difficulty)
                {
                    warn!(
                        "Item {} declares difficulty '{}' but sits under {}",
                        id, declared, difficulty
                    );
                }
                let Some(answer_key) = item.correct else {
                    debug!("Skipping item {} without an answer key", id);
                    skipped += 1;
                    continue;
                };
                bucket.push(
                    Question::new(id, domain, difficulty, answer_key).with_content(item.content),
                );
            }
        }
    }

    if skipped > 0 {
        warn!("Skipped {} interactive items without an answer key", skipped);
    }
    QuestionCatalog::from_buckets(buckets).map_err(|e| CatalogError::Malformed(e.to_string()))
}
