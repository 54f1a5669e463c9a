//! A fully scanned script.

use core::ops::Index;

use tracing::debug;

use super::{LexError, LineIndex, Position, Scanner, Word};

/// The words of a script, scanned up front, plus the source they came from.
///
/// Comments are kept as words. Whitespace lives in the gaps between word
/// spans, so [`WordStream::reconstruct`] gives back the exact input.
#[derive(Debug, Clone)]
pub struct WordStream {
    name: String,
    source: String,
    words: Vec<Word>,
    lines: LineIndex,
    diagnostics: Vec<LexError>,
}

impl WordStream {
    /// Scans `source` to the end. `name` is used in diagnostic positions.
    #[must_use]
    pub fn scan(name: impl Into<String>, source: impl Into<String>) -> Self {
        let name = name.into();
        let source = source.into();

        let mut scanner = Scanner::with_name(&name, &source);
        let mut words = Vec::new();
        loop {
            let word = scanner.scan();
            if word.is_eof() {
                break;
            }
            words.push(word);
        }
        let diagnostics = scanner.into_diagnostics();
        debug!(
            script = %name,
            words = words.len(),
            diagnostics = diagnostics.len(),
            "scanned script"
        );

        let lines = LineIndex::new(&source);
        Self {
            name,
            source,
            words,
            lines,
            diagnostics,
        }
    }

    /// Display name of the script.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The scanned source.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// All words in source order, comments included, `EOF` excluded.
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Returns the word at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }

    /// Number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the script has no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates over the words.
    pub fn iter(&self) -> core::slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// Lexical diagnostics found while scanning.
    #[must_use]
    pub fn diagnostics(&self) -> &[LexError] {
        &self.diagnostics
    }

    /// The source text a word was scanned from.
    ///
    /// Differs from the literal only for multi-word keywords.
    #[must_use]
    pub fn text(&self, word: &Word) -> &str {
        &self.source[word.span.start..word.span.end]
    }

    /// The source text preceding the word at `index`, back to the previous
    /// word: whitespace, and a byte-order mark before the first word.
    #[must_use]
    pub fn gap_before(&self, index: usize) -> &str {
        let end = self
            .words
            .get(index)
            .map_or(self.source.len(), |w| w.span.start);
        let start = match index.checked_sub(1) {
            Some(prev) => self.words.get(prev).map_or(0, |w| w.span.end),
            None => 0,
        };
        &self.source[start.min(end)..end]
    }

    /// Rebuilds the source from words and the gaps between them.
    #[must_use]
    pub fn reconstruct(&self) -> String {
        let mut out = String::with_capacity(self.source.len());
        for (index, word) in self.words.iter().enumerate() {
            out.push_str(self.gap_before(index));
            out.push_str(self.text(word));
        }
        out.push_str(self.gap_before(self.words.len()));
        out
    }

    /// Returns the position of a byte offset.
    #[must_use]
    pub fn position(&self, offset: usize) -> Position {
        self.lines.position(&self.name, &self.source, offset)
    }

    /// Returns the end-of-input word.
    #[must_use]
    pub fn eof(&self) -> Word {
        Word::eof(self.source.len())
    }
}

impl Index<usize> for WordStream {
    type Output = Word;

    fn index(&self, index: usize) -> &Self::Output {
        &self.words[index]
    }
}

impl<'a> IntoIterator for &'a WordStream {
    type Item = &'a Word;
    type IntoIter = core::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
