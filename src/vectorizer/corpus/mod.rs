use std::{
    fmt,
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::{
    error::{MatrixError, Result},
    vectorizer::{token::TokenFrequency, tokenizer},
};

/// Identity of a document: the topic folder it lives in and its file name.
/// Displays as `"{topic} {file_name}"`, which is also the matrix row label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentId {
    pub topic: String,
    pub file_name: String,
}

impl DocumentId {
    pub fn new(topic: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            file_name: file_name.into(),
        }
    }

    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.topic, self.file_name)
    }
}

#[derive(Debug, Clone)]
pub struct Document {
    pub id: DocumentId,
    pub text: String,
}

impl Document {
    pub fn new(id: DocumentId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }

    pub fn tokens(&self) -> Vec<String> {
        tokenizer::tokenize(&self.text)
    }
}

/// All documents of a two-level `root/topic/file` folder, held in memory.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    pub root: PathBuf,
    pub documents: Vec<Document>,
}

impl Corpus {
    pub fn new(root: impl Into<PathBuf>, documents: Vec<Document>) -> Self {
        Self {
            root: root.into(),
            documents,
        }
    }

    /// Read every file under every topic folder of `root`.
    ///
    /// Topics and files are visited in lexicographic order. Top-level entries
    /// that are not directories, and topic entries that are not files, are
    /// skipped.
    pub fn load(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(MatrixError::CorpusLayout {
                path: root.to_path_buf(),
            });
        }

        let mut documents = Vec::new();
        for topic_path in sorted_entries(root)? {
            if !topic_path.is_dir() {
                debug!(path = %topic_path.display(), "skipping non-directory corpus entry");
                continue;
            }
            let topic = file_name_of(&topic_path);
            for file_path in sorted_entries(&topic_path)? {
                if !file_path.is_file() {
                    debug!(path = %file_path.display(), "skipping non-file topic entry");
                    continue;
                }
                let text = fs::read_to_string(&file_path).map_err(|source| {
                    MatrixError::ReadDocument {
                        path: file_path.clone(),
                        source,
                    }
                })?;
                let id = DocumentId::new(topic.clone(), file_name_of(&file_path));
                debug!(document = %id, bytes = text.len(), "loaded document");
                documents.push(Document::new(id, text));
            }
        }

        info!(root = %root.display(), documents = documents.len(), "corpus loaded");
        Ok(Self::new(root, documents))
    }

    pub fn doc_num(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Corpus-wide token counts, in first-seen order across the walk.
    /// Includes the empty token if any document produced one.
    pub fn token_frequency(&self) -> TokenFrequency {
        let mut freq = TokenFrequency::new();
        for doc in &self.documents {
            freq.add_tokens(&doc.tokens());
        }
        freq
    }
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let read_err = |source| MatrixError::ReadDocument {
        path: dir.to_path_buf(),
        source,
    };
    let mut paths = fs::read_dir(dir)
        .map_err(read_err)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(read_err)?;
    paths.sort();
    Ok(paths)
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(root: &Path, topic: &str, file: &str, text: &str) {
        let dir = root.join(topic);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(file), text).unwrap();
    }

    #[test]
    fn document_label_joins_topic_and_file() {
        let id = DocumentId::new("sports", "a.txt");
        assert_eq!(id.label(), "sports a.txt");
    }

    #[test]
    fn load_walks_topics_in_order() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "zeta", "b.txt", "z b");
        write(dir.path(), "alpha", "y.txt", "a y");
        write(dir.path(), "alpha", "x.txt", "a x");
        fs::write(dir.path().join("stray.txt"), "ignored").unwrap();

        let corpus = Corpus::load(dir.path()).unwrap();
        let labels: Vec<String> = corpus.documents.iter().map(|d| d.id.label()).collect();
        assert_eq!(labels, vec!["alpha x.txt", "alpha y.txt", "zeta b.txt"]);
        assert_eq!(corpus.doc_num(), 3);
    }

    #[test]
    fn token_frequency_follows_walk_order() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "t", "1.txt", "beta alpha");
        write(dir.path(), "t", "2.txt", "alpha");
        let corpus = Corpus::load(dir.path()).unwrap();
        let freq = corpus.token_frequency();
        assert_eq!(freq.token_set_ref_str(), vec!["beta", "alpha"]);
        assert_eq!(freq.token_count("alpha"), 2);
    }

    #[test]
    fn missing_root_is_a_layout_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Corpus::load(dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, MatrixError::CorpusLayout { .. }));
    }

    #[test]
    fn non_utf8_document_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("t")).unwrap();
        fs::write(dir.path().join("t").join("bad.bin"), [0xff, 0xfe, 0x00]).unwrap();
        let err = Corpus::load(dir.path()).unwrap_err();
        assert!(matches!(err, MatrixError::ReadDocument { .. }));
    }
}
