//! Synonym data: lines of the form `word | synonym1, synonym2, ...`.
//!
//! ```
//! use numseq_synonyms::SynonymData;
//!
//! let mut data: SynonymData = "fast | quick, rapid\nbig | large\n".parse().unwrap();
//! data.add_synonym("BIG", "huge").unwrap();
//! data.sort();
//! assert_eq!(data.to_string(), "big | huge, large\nfast | quick, rapid\n");
//! ```
//!
//! Words are matched case-insensitively everywhere. This crate has nothing to
//! do with number sequences; it only shares the workspace and the CLI.

use std::cmp::Ordering;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SynonymError {
    #[error("{0} not present")]
    NotFound(String),

    #[error("{synonym} is not a synonym of {word}")]
    SynonymNotFound { word: String, synonym: String },

    #[error("line {line_number}: malformed synonym line `{line}`")]
    Malformed { line_number: usize, line: String },

    /// A line given on its own, not read from a file.
    #[error("malformed synonym line `{0}`: expected `word | synonym, ...`")]
    MalformedLine(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, SynonymError>;

/// One word and its synonyms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynonymLine {
    pub word: String,
    pub synonyms: Vec<String>,
}

impl SynonymLine {
    pub fn new(
        word: impl Into<String>,
        synonyms: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            word: word.into(),
            synonyms: synonyms.into_iter().map(Into::into).collect(),
        }
    }

    /// `true` if this is the line for `word`, ignoring case.
    pub fn is_for(&self, word: &str) -> bool {
        compare_ignore_case(&self.word, word) == Ordering::Equal
    }

    /// Sorts the synonyms case-insensitively. Equal synonyms keep their order.
    pub fn sort(&mut self) {
        self.synonyms.sort_by(|a, b| compare_ignore_case(a, b));
    }

    /// Parses `word | synonym, synonym`; `None` if there is no `|` or no word.
    fn parse(line: &str) -> Option<Self> {
        let (word, synonyms) = line.split_once('|')?;
        let word = word.trim();
        if word.is_empty() {
            return None;
        }
        let synonyms = synonyms
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        Some(Self {
            word: word.to_string(),
            synonyms,
        })
    }
}

impl FromStr for SynonymLine {
    type Err = SynonymError;

    fn from_str(line: &str) -> Result<Self> {
        Self::parse(line).ok_or_else(|| SynonymError::MalformedLine(line.to_string()))
    }
}

impl fmt::Display for SynonymLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {}", self.word, self.synonyms.join(", "))
    }
}

fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// All synonym lines, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynonymData {
    lines: Vec<SynonymLine>,
}

impl SynonymData {
    pub fn new(lines: Vec<SynonymLine>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[SynonymLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Reads synonym lines from `reader`. Blank lines are skipped.
    pub fn read_from(reader: impl BufRead) -> Result<Self> {
        let mut lines = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let parsed = SynonymLine::parse(&line).ok_or_else(|| SynonymError::Malformed {
                line_number: index + 1,
                line: line.clone(),
            })?;
            lines.push(parsed);
        }
        Ok(Self { lines })
    }

    pub fn read_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = Self::read_from(BufReader::new(File::open(path)?))?;
        tracing::info!(path = %path.display(), lines = data.len(), "Read synonym data");
        Ok(data)
    }

    /// Writes one line per entry.
    pub fn write_to(&self, mut writer: impl Write) -> Result<()> {
        for line in &self.lines {
            writeln!(writer, "{}", line)?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn write_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.write_to(BufWriter::new(File::create(path)?))?;
        tracing::info!(path = %path.display(), lines = self.len(), "Wrote synonym data");
        Ok(())
    }

    fn index_of(&self, word: &str) -> Result<usize> {
        self.lines
            .iter()
            .position(|line| line.is_for(word))
            .ok_or_else(|| SynonymError::NotFound(word.to_string()))
    }

    /// The line for `word`, matched case-insensitively.
    pub fn line(&self, word: &str) -> Result<&SynonymLine> {
        let index = self.index_of(word)?;
        Ok(&self.lines[index])
    }

    pub fn add_line(&mut self, line: SynonymLine) {
        tracing::debug!(word = %line.word, "Adding synonym line");
        self.lines.push(line);
    }

    /// Removes and returns the line for `word`.
    pub fn remove_line(&mut self, word: &str) -> Result<SynonymLine> {
        let index = self.index_of(word)?;
        Ok(self.lines.remove(index))
    }

    pub fn add_synonym(&mut self, word: &str, synonym: impl Into<String>) -> Result<()> {
        let index = self.index_of(word)?;
        self.lines[index].synonyms.push(synonym.into());
        Ok(())
    }

    /// Removes every synonym of `word` that matches `synonym`, ignoring case.
    pub fn remove_synonym(&mut self, word: &str, synonym: &str) -> Result<()> {
        let index = self.index_of(word)?;
        let line = &mut self.lines[index];
        let before = line.synonyms.len();
        line.synonyms.retain(|s| compare_ignore_case(s, synonym) != Ordering::Equal);
        if line.synonyms.len() == before {
            return Err(SynonymError::SynonymNotFound {
                word: line.word.clone(),
                synonym: synonym.to_string(),
            });
        }
        Ok(())
    }

    /// Sorts the synonyms of every line, then the lines by word. Both sorts
    /// ignore case and are stable.
    pub fn sort(&mut self) {
        for line in &mut self.lines {
            line.sort();
        }
        self.lines.sort_by(|a, b| compare_ignore_case(&a.word, &b.word));
    }
}

impl FromStr for SynonymData {
    type Err = SynonymError;

    fn from_str(s: &str) -> Result<Self> {
        Self::read_from(s.as_bytes())
    }
}

impl fmt::Display for SynonymData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "synonyms_test.rs"]
mod synonyms_test;
