// TF-IDF vector space built once over the full document corpus
use crate::{Error, Result, SparseVector};
use ahash::AHashMap;

/// TF-IDF vector space: a global term -> dimension vocabulary plus one
/// L2-normalized sparse vector per document.
///
/// `fit` is invoked exactly once over the full corpus at startup. The
/// vocabulary assigns dimensions in order of first appearance, so for a fixed
/// corpus the whole space is reproducible byte-for-byte. Nothing is mutated
/// after the build.
#[derive(Debug, Clone)]
pub struct TfIdfModel {
    // term -> dimension index, assigned in first-seen order
    vocabulary: AHashMap<String, u32>,
    // dimension index -> inverse document frequency
    idf: Vec<f32>,
    vectors: Vec<SparseVector>,
}

impl TfIdfModel {
    /// Tokenize a composed document.
    /// Lower-cases, splits on whitespace and punctuation, drops single chars.
    #[inline]
    pub fn tokenize(text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| c.is_whitespace() || c.is_ascii_punctuation())
            .map(|s| s.trim_matches(|c: char| !c.is_alphanumeric()).to_string())
            .filter(|s| !s.is_empty() && s.len() > 1)
            .collect()
    }

    /// Fit the vocabulary and per-document vectors over the corpus.
    ///
    /// Weighting is smoothed TF-IDF: `idf(t) = ln((1 + n) / (1 + df(t))) + 1`,
    /// entries `tf(t, d) * idf(t)`, L2-normalized per document.
    ///
    /// Fails with [`Error::InvalidCorpus`] when the corpus is empty or yields
    /// no tokens at all; a degenerate vector space is never produced silently.
    pub fn fit(documents: &[String]) -> Result<Self> {
        if documents.is_empty() {
            return Err(Error::InvalidCorpus("empty document corpus".to_string()));
        }

        let mut vocabulary: AHashMap<String, u32> = AHashMap::new();
        // dimension index -> document frequency
        let mut dfs: Vec<u32> = Vec::new();
        // per document: dimension index -> term frequency
        let mut doc_term_freqs: Vec<AHashMap<u32, u32>> = Vec::with_capacity(documents.len());

        for doc in documents {
            let mut term_freqs: AHashMap<u32, u32> = AHashMap::new();
            for token in Self::tokenize(doc) {
                let next_dim = vocabulary.len() as u32;
                let dim = *vocabulary.entry(token).or_insert(next_dim);
                if dim as usize == dfs.len() {
                    dfs.push(0);
                }
                *term_freqs.entry(dim).or_insert(0) += 1;
            }
            for &dim in term_freqs.keys() {
                dfs[dim as usize] += 1;
            }
            doc_term_freqs.push(term_freqs);
        }

        if vocabulary.is_empty() {
            return Err(Error::InvalidCorpus(
                "corpus documents produced no tokens".to_string(),
            ));
        }

        let n_docs = documents.len() as f32;
        let idf: Vec<f32> = dfs
            .iter()
            .map(|&df| ((1.0 + n_docs) / (1.0 + df as f32)).ln() + 1.0)
            .collect();

        let vectors: Vec<SparseVector> = doc_term_freqs
            .into_iter()
            .map(|term_freqs| {
                let entries: Vec<(u32, f32)> = term_freqs
                    .into_iter()
                    .map(|(dim, tf)| (dim, tf as f32 * idf[dim as usize]))
                    .collect();
                SparseVector::new(entries).normalized()
            })
            .collect();

        Ok(Self {
            vocabulary,
            idf,
            vectors,
        })
    }

    /// Number of vocabulary dimensions
    #[inline]
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Dimension index for a term, if it occurs in the corpus
    #[inline]
    #[must_use]
    pub fn dimension(&self, term: &str) -> Option<u32> {
        self.vocabulary.get(term).copied()
    }

    /// Inverse document frequency for a dimension
    #[inline]
    #[must_use]
    pub fn idf(&self, dim: u32) -> Option<f32> {
        self.idf.get(dim as usize).copied()
    }

    /// All per-document vectors, in corpus order
    #[inline]
    #[must_use]
    pub fn vectors(&self) -> &[SparseVector] {
        &self.vectors
    }

    /// Vector for one document, by corpus index
    #[inline]
    #[must_use]
    pub fn vector(&self, index: usize) -> Option<&SparseVector> {
        self.vectors.get(index)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}
