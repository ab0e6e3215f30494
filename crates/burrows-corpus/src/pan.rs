//! PAN/TIRA corpus layout.
//!
//! A corpus directory holds `meta-file.json`, one directory per candidate
//! author with that author's training texts, and a directory of unknown texts:
//!
//! ```text
//! corpus/
//!   meta-file.json
//!   candidate00001/known01.txt
//!   candidate00002/known01.txt
//!   unknown/unknown00001.txt
//! ```

use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::{Candidate, CorpusError, CorpusLoader, LoadedCorpus, RawText};

/// The corpus description file.
#[derive(Debug, Clone, Deserialize)]
struct MetaFile {
    /// Directory of unknown texts, relative to the corpus.
    folder: String,
    /// Candidate authors in order.
    #[serde(rename = "candidate-authors")]
    candidate_authors: Vec<MetaAuthor>,
    /// Unknown texts in order.
    #[serde(rename = "unknown-texts")]
    unknown_texts: Vec<MetaUnknown>,
}

/// One `candidate-authors` entry.
#[derive(Debug, Clone, Deserialize)]
struct MetaAuthor {
    /// Author name, also the training directory name.
    #[serde(rename = "author-name")]
    author_name: String,
}

/// One `unknown-texts` entry.
#[derive(Debug, Clone, Deserialize)]
struct MetaUnknown {
    /// File name within the unknown folder.
    #[serde(rename = "unknown-text")]
    unknown_text: String,
}

/// A PAN/TIRA corpus on disk.
#[derive(Debug, Clone)]
pub struct PanCorpus {
    /// Corpus directory.
    dir: PathBuf,
    /// Parsed description file.
    meta: MetaFile,
}

impl PanCorpus {
    /// Reads the description file `meta_file` inside `dir`.
    pub fn open(dir: &Path, meta_file: &str) -> Result<Self, CorpusError> {
        let path = dir.join(meta_file);
        let contents = fs::read_to_string(&path).map_err(|source| CorpusError::ReadFile {
            path: path.clone(),
            source,
        })?;
        let meta = serde_json::from_str(&contents)
            .map_err(|source| CorpusError::ParseMeta { path, source })?;
        Ok(Self {
            dir: dir.to_path_buf(),
            meta,
        })
    }

    /// The corpus directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Candidate author names in order.
    pub fn candidates(&self) -> impl Iterator<Item = &str> {
        self.meta
            .candidate_authors
            .iter()
            .map(|a| a.author_name.as_str())
    }

    /// Unknown text names in order.
    pub fn unknowns(&self) -> impl Iterator<Item = &str> {
        self.meta
            .unknown_texts
            .iter()
            .map(|u| u.unknown_text.as_str())
    }

    /// Directory holding the unknown texts.
    pub fn unknown_dir(&self) -> PathBuf {
        self.dir.join(&self.meta.folder)
    }

    /// Training file paths of one candidate, relative to its directory, sorted.
    fn training_files(&self, author: &str) -> Result<Vec<PathBuf>, CorpusError> {
        let root = self.dir.join(author);
        if !root.is_dir() {
            return Err(CorpusError::MissingCandidate {
                author: author.to_string(),
                path: root,
            });
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e.file_name()))
        {
            let entry = entry.map_err(|source| CorpusError::Walk {
                path: root.clone(),
                source,
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            if let Ok(rel) = entry.path().strip_prefix(&root) {
                files.push(rel.to_path_buf());
            }
        }
        files.sort();
        Ok(files)
    }
}

impl CorpusLoader for PanCorpus {
    fn load(&self) -> Result<LoadedCorpus, CorpusError> {
        info!(corpus = %self.dir.display(), "loading training data");
        let mut candidates = Vec::with_capacity(self.meta.candidate_authors.len());
        for author in self.candidates() {
            let root = self.dir.join(author);
            let texts = self
                .training_files(author)?
                .into_iter()
                .map(|rel| {
                    debug!(author, text = %rel.display(), "loading training text");
                    Ok(RawText::new(
                        rel.to_string_lossy(),
                        read_text(&root.join(&rel))?,
                    ))
                })
                .collect::<Result<Vec<_>, CorpusError>>()?;
            candidates.push(Candidate {
                name: author.to_string(),
                texts,
            });
        }

        let unknown_dir = self.unknown_dir();
        let unknowns = self
            .unknowns()
            .map(|name| Ok(RawText::new(name, read_text(&unknown_dir.join(name))?)))
            .collect::<Result<Vec<_>, CorpusError>>()?;

        Ok(LoadedCorpus {
            candidates,
            unknowns,
        })
    }
}

/// Reads a UTF-8 text file.
fn read_text(path: &Path) -> Result<String, CorpusError> {
    fs::read_to_string(path).map_err(|source| CorpusError::ReadFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Checks if a filename represents a hidden file (starts with '.').
fn is_hidden(name: &OsStr) -> bool {
    name.to_str().is_some_and(|s| s.starts_with('.'))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn hidden_names() {
        assert!(is_hidden(OsStr::new(".DS_Store")));
        assert!(!is_hidden(OsStr::new("known01.txt")));
    }

    #[test]
    fn meta_file_field_names() {
        let meta: MetaFile = serde_json::from_str(
            r#"{
                "folder": "unknown",
                "language": "EN",
                "encoding": "UTF8",
                "candidate-authors": [{"author-name": "candidate00001"}],
                "unknown-texts": [{"unknown-text": "unknown00001.txt"}]
            }"#,
        )
        .unwrap();
        assert_eq!(meta.folder, "unknown");
        assert_eq!(meta.candidate_authors[0].author_name, "candidate00001");
        assert_eq!(meta.unknown_texts[0].unknown_text, "unknown00001.txt");
    }

    #[test]
    fn meta_file_requires_candidates() {
        let result: Result<MetaFile, _> =
            serde_json::from_str(r#"{"folder": "unknown", "unknown-texts": []}"#);
        assert!(result.is_err());
    }
}
