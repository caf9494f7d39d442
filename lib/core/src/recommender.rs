use crate::{compose, CatalogEntry, Error, Result, SparseVector, TfIdfModel};
use ahash::{AHashMap, AHashSet};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// One ranked recommendation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub title: String,
    pub score: f32,
}

/// Content-based similarity ranker over the fitted vector space.
///
/// Built once at startup and shared immutably between requests; every query
/// is a read-only exhaustive cosine comparison against the corpus.
#[derive(Debug)]
pub struct Recommender {
    // titles in native casing, corpus order
    titles: Vec<String>,
    // lower-cased title -> first corpus row with that title
    title_index: AHashMap<String, usize>,
    model: TfIdfModel,
}

impl Recommender {
    /// Compose documents for all entries, fit the vector space and build the
    /// exact-match title index. First occurrence wins on duplicate titles.
    pub fn build(entries: &[CatalogEntry]) -> Result<Self> {
        if entries.is_empty() {
            return Err(Error::InvalidCorpus("empty catalog".to_string()));
        }

        let documents: Vec<String> = entries.iter().map(compose).collect();
        let model = TfIdfModel::fit(&documents)?;

        let mut titles = Vec::with_capacity(entries.len());
        let mut title_index: AHashMap<String, usize> = AHashMap::new();
        for (i, entry) in entries.iter().enumerate() {
            titles.push(entry.title.clone());
            title_index.entry(entry.title.to_lowercase()).or_insert(i);
        }

        Ok(Self {
            titles,
            title_index,
            model,
        })
    }

    /// Number of corpus entries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Vocabulary size of the underlying vector space
    #[inline]
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.model.vocabulary_size()
    }

    /// Resolve a title to its corpus row. Exact match on the lower-cased
    /// title, unlike the substring matching of the simple lookup endpoints.
    #[inline]
    #[must_use]
    pub fn resolve(&self, title: &str) -> Option<usize> {
        self.title_index.get(&title.to_lowercase()).copied()
    }

    /// Return the top `k` most similar titles to `title`, best first.
    ///
    /// The query entry itself is never part of the result, duplicate titles
    /// are deduped to their best-ranked occurrence, and ties fall back to
    /// corpus order so repeated calls are deterministic. `k == 0` yields an
    /// empty list; `k` beyond the corpus size yields whatever is available.
    pub fn recommend(&self, title: &str, k: usize) -> Result<Vec<Recommendation>> {
        let query_idx = self
            .resolve(title)
            .ok_or_else(|| Error::TitleNotFound(title.to_string()))?;

        if k == 0 {
            return Ok(Vec::new());
        }

        let query = &self.model.vectors()[query_idx];
        let mut scored = self.score_all(query);

        // stable sort keeps corpus order on equal scores
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        let mut seen: AHashSet<String> = AHashSet::new();
        seen.insert(self.titles[query_idx].to_lowercase());

        let mut results = Vec::with_capacity(k.min(self.titles.len().saturating_sub(1)));
        for (i, score) in scored {
            if i == query_idx {
                continue;
            }
            if !seen.insert(self.titles[i].to_lowercase()) {
                continue;
            }
            results.push(Recommendation {
                title: self.titles[i].clone(),
                score,
            });
            if results.len() == k {
                break;
            }
        }

        Ok(results)
    }

    /// Cosine score of the query against every corpus vector, corpus order
    fn score_all(&self, query: &SparseVector) -> Vec<(usize, f32)> {
        self.model
            .vectors()
            .par_iter()
            .enumerate()
            .map(|(i, v)| (i, query.cosine_similarity(v)))
            .collect()
    }
}
