//! Word list loading utilities
//!
//! Reads newline-separated word lists and frequency tables from disk and feeds
//! them into a `DictionaryBuilder`.

use super::SAMPLE;
use crate::index::{Dictionary, DictionaryBuilder};
use crate::scoring::FrequencyTable;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

/// Lists shorter than this are ingested without a progress bar
const PROGRESS_MIN_WORDS: usize = 50_000;

/// Errors raised while reading word lists or frequency tables
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("line {line}: expected '<word> <weight>', got '{content}'")]
    BadFrequency { line: usize, content: String },
}

/// Normalize raw word-list text: trim, lowercase, skip blank lines
///
/// # Examples
/// ```
/// use word_sieve::wordlists::loader::parse_words;
///
/// assert_eq!(parse_words("Crane\n\n  slate \n"), vec!["crane", "slate"]);
/// ```
#[must_use]
pub fn parse_words(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Read a word list file
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read.
pub fn read_words<P: AsRef<Path>>(path: P) -> Result<Vec<String>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_words(&content))
}

/// Ingest `words` into a new dictionary
///
/// Large lists report progress on stderr when `show_progress` is set.
pub fn build_dictionary<S: AsRef<str>>(words: &[S], show_progress: bool) -> Dictionary {
    let start = Instant::now();
    let pb = if show_progress && words.len() >= PROGRESS_MIN_WORDS {
        let pb = ProgressBar::new(words.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} words ({percent}%)")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut builder = DictionaryBuilder::new();
    for (i, word) in words.iter().enumerate() {
        builder.ingest(word.as_ref());
        if i % 4096 == 0 {
            pb.set_position(i as u64);
        }
    }
    pb.finish_and_clear();

    let dictionary = builder.build();
    info!(
        words = dictionary.len(),
        elapsed_ms = start.elapsed().as_millis(),
        "word list ingested"
    );
    dictionary
}

/// Read and ingest a word list file
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read.
pub fn load_dictionary<P: AsRef<Path>>(path: P, show_progress: bool) -> Result<Dictionary, LoadError> {
    let words = read_words(path)?;
    Ok(build_dictionary(&words, show_progress))
}

/// Dictionary built from the embedded sample list
#[must_use]
pub fn sample_dictionary() -> Dictionary {
    build_dictionary(SAMPLE, false)
}

/// Parse a frequency table
///
/// One `word weight` pair per line, separated by whitespace, `;`, `,` or a tab.
/// Blank lines and lines starting with `#` are skipped. Words are lowercased.
///
/// # Errors
///
/// Returns `LoadError::BadFrequency` for a line without a numeric weight.
pub fn parse_frequencies(content: &str) -> Result<FrequencyTable, LoadError> {
    let mut table = FrequencyTable::new();

    for (i, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut fields = line
            .split(|c: char| c.is_whitespace() || c == ';' || c == ',')
            .filter(|field| !field.is_empty());
        let parsed = match (fields.next(), fields.next(), fields.next()) {
            (Some(word), Some(weight), None) => weight.parse::<f64>().ok().map(|w| (word, w)),
            _ => None,
        };

        let Some((word, weight)) = parsed.filter(|(_, w)| w.is_finite()) else {
            return Err(LoadError::BadFrequency {
                line: i + 1,
                content: line.to_string(),
            });
        };
        table.insert(word.to_lowercase(), weight);
    }

    Ok(table)
}

/// Read a frequency table file
///
/// # Errors
///
/// Returns an error if the file cannot be read or a line is malformed.
pub fn load_frequencies<P: AsRef<Path>>(path: P) -> Result<FrequencyTable, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let table = parse_frequencies(&content)?;
    info!(path = %path.display(), entries = table.len(), "frequency table loaded");
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_words_normalizes() {
        let words = parse_words("  APPLE\r\n\napply\n\tangle  \n");
        assert_eq!(words, vec!["apple", "apply", "angle"]);
    }

    #[test]
    fn build_dictionary_keeps_order() {
        let dictionary = build_dictionary(&["crane", "at", "slate"], false);
        assert_eq!(dictionary.words_of_length(5), vec!["crane", "slate"]);
    }

    #[test]
    fn sample_dictionary_matches_embedded_list() {
        let dictionary = sample_dictionary();
        assert_eq!(dictionary.len(), SAMPLE.len());
    }

    #[test]
    fn read_words_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "crane\nSlate\n").unwrap();

        let words = read_words(file.path()).unwrap();
        assert_eq!(words, vec!["crane", "slate"]);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = read_words("/definitely/not/here.txt").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.txt"));
    }

    #[test]
    fn frequencies_accept_several_separators() {
        let table =
            parse_frequencies("# corpus counts\ncrane 12\nslate;3.5\nIRATE,\t7\n\n").unwrap();

        assert_eq!(table.len(), 3);
        assert!((table.get("crane") - 12.0).abs() < f64::EPSILON);
        assert!((table.get("slate") - 3.5).abs() < f64::EPSILON);
        assert!((table.get("irate") - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn malformed_frequency_line_is_rejected() {
        let err = parse_frequencies("crane 12\nslate\n").unwrap_err();
        assert!(matches!(err, LoadError::BadFrequency { line: 2, .. }));

        assert!(parse_frequencies("crane many").is_err());
        assert!(parse_frequencies("crane 1 2").is_err());
        assert!(parse_frequencies("crane NaN").is_err());
    }

    #[test]
    fn load_frequencies_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "crane 2").unwrap();

        let table = load_frequencies(file.path()).unwrap();
        assert!((table.get("crane") - 2.0).abs() < f64::EPSILON);
    }
}
