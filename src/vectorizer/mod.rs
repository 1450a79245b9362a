pub mod corpus;
pub mod tfidf;
pub mod token;
pub mod tokenizer;

use indexmap::{IndexMap, IndexSet};
use tracing::{debug, info};

use crate::{
    error::{MatrixError, Result},
    vectorizer::corpus::{Corpus, Document, DocumentId},
};

/// Ordered set of terms that defines the matrix columns.
///
/// Terms are kept in ranking order (descending corpus frequency, ties by first
/// occurrence). Never contains the empty token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    terms: IndexSet<String>,
}

impl Vocabulary {
    /// Build the vocabulary of `corpus`.
    ///
    /// # Arguments
    /// * `corpus` - every document is tokenized once
    /// * `max_terms` - keep only the most frequent terms, `None` keeps all
    ///
    /// # Errors
    /// `EmptyCorpus` if the corpus has no documents or no non-empty tokens.
    pub fn build(corpus: &Corpus, max_terms: Option<usize>) -> Result<Self> {
        if corpus.is_empty() {
            return Err(MatrixError::EmptyCorpus {
                root: corpus.root.clone(),
            });
        }
        let freq = corpus.token_frequency();

        // the empty token takes part in the top-M ranking and is dropped after it
        let terms: IndexSet<String> = freq
            .most_common(max_terms)
            .into_iter()
            .map(|(token, _)| token)
            .filter(|token| !token.is_empty())
            .collect();
        if terms.is_empty() {
            return Err(MatrixError::EmptyCorpus {
                root: corpus.root.clone(),
            });
        }
        info!(
            distinct = freq.token_num() - usize::from(freq.contains_token("")),
            kept = terms.len(),
            "vocabulary built"
        );
        Ok(Self { terms })
    }

    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            terms: terms
                .into_iter()
                .map(Into::into)
                .filter(|t: &String| !t.is_empty())
                .collect(),
        }
    }

    #[inline]
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }
}

/// Count vector of a single document over a vocabulary.
/// Holds exactly one entry per vocabulary term, in vocabulary order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentVector {
    pub counts: IndexMap<String, u64>,
}

impl DocumentVector {
    pub fn get(&self, term: &str) -> Option<u64> {
        self.counts.get(term).copied()
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Count the tokens of `text` that belong to `vocabulary`.
/// Tokens outside the vocabulary are skipped.
pub fn vectorize_text(text: &str, vocabulary: &Vocabulary) -> DocumentVector {
    let mut counts: IndexMap<String, u64> =
        vocabulary.iter().map(|term| (term.to_owned(), 0)).collect();
    for token in tokenizer::tokenize_non_empty(text) {
        if let Some(count) = counts.get_mut(token.as_str()) {
            *count += 1;
        }
    }
    DocumentVector { counts }
}

pub fn vectorize(document: &Document, vocabulary: &Vocabulary) -> DocumentVector {
    vectorize_text(&document.text, vocabulary)
}

/// Count vectorizer
/// Fits a vocabulary once per corpus and reuses it for every document.
#[derive(Debug, Clone)]
pub struct CountVectorizer {
    pub vocabulary: Vocabulary,
}

impl CountVectorizer {
    pub fn fit(corpus: &Corpus, max_terms: Option<usize>) -> Result<Self> {
        Ok(Self {
            vocabulary: Vocabulary::build(corpus, max_terms)?,
        })
    }

    /// One count vector per document, in corpus order.
    pub fn transform(&self, corpus: &Corpus) -> Vec<(DocumentId, DocumentVector)> {
        corpus
            .documents
            .iter()
            .map(|doc| {
                let vector = vectorize(doc, &self.vocabulary);
                debug!(document = %doc.id, tokens = vector.total(), "vectorized document");
                (doc.id.clone(), vector)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(docs: &[(&str, &str, &str)]) -> Corpus {
        Corpus::new(
            "mem",
            docs.iter()
                .map(|(t, f, text)| Document::new(DocumentId::new(*t, *f), *text))
                .collect(),
        )
    }

    #[test]
    fn full_vocabulary_has_every_distinct_token() {
        let c = corpus(&[("a", "1", "the cat sat"), ("a", "2", "the dog")]);
        let vocab = Vocabulary::build(&c, None).unwrap();
        let terms: Vec<&str> = vocab.iter().collect();
        assert_eq!(terms, vec!["the", "cat", "sat", "dog"]);
    }

    #[test]
    fn capped_vocabulary_keeps_most_frequent_first_seen_on_ties() {
        let c = corpus(&[("a", "1", "x y z y"), ("a", "2", "z w")]);
        let vocab = Vocabulary::build(&c, Some(2)).unwrap();
        let terms: Vec<&str> = vocab.iter().collect();
        assert_eq!(terms, vec!["y", "z"]);
    }

    #[test]
    fn empty_token_never_enters_vocabulary() {
        let c = corpus(&[("a", "1", "  !!  hello  "), ("a", "2", "... , ;")]);
        let vocab = Vocabulary::build(&c, None).unwrap();
        assert!(!vocab.contains(""));
        assert_eq!(vocab.len(), 1);

    }

    #[test]
    fn empty_token_occupies_a_ranked_slot() {
        // "" has count 6 and ranks first, so the top 2 are "" and "a"
        let c = corpus(&[("a", "1", "a    b    c")]);
        let vocab = Vocabulary::build(&c, Some(2)).unwrap();
        assert_eq!(vocab.iter().collect::<Vec<_>>(), vec!["a"]);

        let vocab = Vocabulary::build(&c, None).unwrap();
        assert_eq!(vocab.iter().collect::<Vec<_>>(), vec!["a", "b", "c"]);

        let err = Vocabulary::build(&c, Some(1)).unwrap_err();
        assert!(matches!(err, MatrixError::EmptyCorpus { .. }));
    }

    #[test]
    fn punctuation_only_corpus_is_empty() {
        let c = corpus(&[("a", "1", "!!! 123 ..."), ("b", "2", "")]);
        let err = Vocabulary::build(&c, None).unwrap_err();
        assert!(matches!(err, MatrixError::EmptyCorpus { .. }));
    }

    #[test]
    fn no_documents_is_empty_corpus() {
        let err = Vocabulary::build(&corpus(&[]), None).unwrap_err();
        assert!(matches!(err, MatrixError::EmptyCorpus { .. }));
    }

    #[test]
    fn vector_has_every_term_and_skips_unknown_tokens() {
        let vocab = Vocabulary::from_terms(["cat", "dog"]);
        let v = vectorize_text("cat bird cat", &vocab);
        assert_eq!(v.len(), 2);
        assert_eq!(v.get("cat"), Some(2));
        assert_eq!(v.get("dog"), Some(0));
        assert_eq!(v.get("bird"), None);
        assert_eq!(v.total(), 2);
    }

    #[test]
    fn row_total_equals_in_vocabulary_token_count() {
        let c = corpus(&[
            ("a", "1", "one two two three three three"),
            ("b", "2", "three four, five!"),
        ]);
        let vectorizer = CountVectorizer::fit(&c, Some(3)).unwrap();
        for (doc, (_, vector)) in c.documents.iter().zip(vectorizer.transform(&c)) {
            let expected = doc
                .tokens()
                .iter()
                .filter(|t| vectorizer.vocabulary.contains(t))
                .count() as u64;
            assert_eq!(vector.total(), expected);
        }
    }
}
