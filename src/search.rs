use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

const TATWEEL: char = '\u{0640}';

fn is_harakah(c: char) -> bool {
    matches!(c, '\u{064B}'..='\u{065F}' | '\u{0670}' | '\u{06D6}'..='\u{06ED}')
}

/// Folds Arabic spelling variants and Latin case so that vocalised and bare
/// text compare equal.
pub fn normalize_arabic(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last_space = true;
    for c in text.chars() {
        if is_harakah(c) || c == TATWEEL {
            continue;
        }
        let folded = match c {
            'أ' | 'إ' | 'آ' | 'ٱ' => 'ا',
            'ى' => 'ي',
            'ة' => 'ه',
            'ؤ' => 'و',
            'ئ' => 'ي',
            c if c.is_whitespace() => ' ',
            c => c,
        };
        if folded == ' ' {
            if !last_space {
                out.push(' ');
            }
            last_space = true;
            continue;
        }
        last_space = false;
        out.extend(folded.to_lowercase());
    }
    if out.ends_with(' ') {
        out.pop();
    }
    out
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hadith {
    pub number: u32,
    pub arabic: String,
    #[serde(default)]
    pub english: Option<String>,
    #[serde(default)]
    pub narrator: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HadithBook {
    pub id: String,
    pub title: String,
    pub hadiths: Vec<Hadith>,
}

impl HadithBook {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Ok(serde_json::from_reader(std::io::BufReader::new(file))?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit<'a> {
    pub book_id: &'a str,
    pub book_title: &'a str,
    pub number: u32,
    pub arabic: &'a str,
    pub english: Option<&'a str>,
}

#[derive(Debug)]
struct Entry {
    book: usize,
    hadith: usize,
    arabic: String,
    english: String,
}

/// Normalized copies of every text, built once per corpus set.
#[derive(Debug, Default)]
pub struct HadithIndex {
    books: Vec<HadithBook>,
    entries: Vec<Entry>,
}

impl HadithIndex {
    pub fn new(books: impl IntoIterator<Item = HadithBook>) -> Self {
        let mut index = Self::default();
        for book in books {
            index.add_book(book);
        }
        index
    }

    pub fn add_book(&mut self, book: HadithBook) {
        let book_idx = self.books.len();
        self.entries.extend(book.hadiths.iter().enumerate().map(|(i, h)| Entry {
            book: book_idx,
            hadith: i,
            arabic: normalize_arabic(&h.arabic),
            english: h.english.as_deref().map(normalize_arabic).unwrap_or_default(),
        }));
        tracing::debug!(book = %book.id, hadiths = book.hadiths.len(), "indexed hadith book");
        self.books.push(book);
    }

    pub fn books(&self) -> &[HadithBook] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Hits in corpus order, at most `limit`.
    pub fn search(&self, query: &str, limit: usize) -> Vec<SearchHit<'_>> {
        self.matching(query, None, limit)
    }

    /// Restricts the search to one book.
    pub fn search_book(&self, book_id: &str, query: &str, limit: usize) -> Vec<SearchHit<'_>> {
        match self.books.iter().position(|b| b.id == book_id) {
            Some(book) => self.matching(query, Some(book), limit),
            None => Vec::new(),
        }
    }

    fn matching(&self, query: &str, book: Option<usize>, limit: usize) -> Vec<SearchHit<'_>> {
        let needle = normalize_arabic(query);
        if needle.is_empty() {
            return Vec::new();
        }
        self.entries
            .iter()
            .filter(|e| book.map_or(true, |b| e.book == b))
            .filter(|e| e.arabic.contains(&needle) || e.english.contains(&needle))
            .take(limit)
            .map(|e| self.hit(e))
            .collect()
    }

    fn hit(&self, entry: &Entry) -> SearchHit<'_> {
        let book = &self.books[entry.book];
        let hadith = &book.hadiths[entry.hadith];
        SearchHit {
            book_id: &book.id,
            book_title: &book.title,
            number: hadith.number,
            arabic: &hadith.arabic,
            english: hadith.english.as_deref(),
        }
    }
}
