use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const SURAH_COUNT: u16 = 114;
pub const JUZ_COUNT: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(u16, u16)", into = "(u16, u16)")]
pub struct AyahRef {
    pub surah: u16,
    pub ayah: u16,
}

impl AyahRef {
    pub const fn new(surah: u16, ayah: u16) -> Self {
        Self { surah, ayah }
    }
}

impl From<(u16, u16)> for AyahRef {
    fn from((surah, ayah): (u16, u16)) -> Self {
        Self { surah, ayah }
    }
}

impl From<AyahRef> for (u16, u16) {
    fn from(r: AyahRef) -> Self {
        (r.surah, r.ayah)
    }
}

impl fmt::Display for AyahRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.surah, self.ayah)
    }
}

/// First ayah of each juz in the Madani mushaf.
pub const MADANI_JUZ_STARTS: [AyahRef; JUZ_COUNT] = [
    AyahRef::new(1, 1),
    AyahRef::new(2, 142),
    AyahRef::new(2, 253),
    AyahRef::new(3, 93),
    AyahRef::new(4, 24),
    AyahRef::new(4, 148),
    AyahRef::new(5, 82),
    AyahRef::new(6, 111),
    AyahRef::new(7, 88),
    AyahRef::new(8, 41),
    AyahRef::new(9, 93),
    AyahRef::new(11, 6),
    AyahRef::new(12, 53),
    AyahRef::new(15, 1),
    AyahRef::new(17, 1),
    AyahRef::new(18, 75),
    AyahRef::new(21, 1),
    AyahRef::new(23, 1),
    AyahRef::new(25, 21),
    AyahRef::new(27, 56),
    AyahRef::new(29, 46),
    AyahRef::new(33, 31),
    AyahRef::new(36, 28),
    AyahRef::new(39, 32),
    AyahRef::new(41, 47),
    AyahRef::new(46, 1),
    AyahRef::new(51, 31),
    AyahRef::new(58, 1),
    AyahRef::new(67, 1),
    AyahRef::new(78, 1),
];

fn check_starts(kind: &str, starts: &[AyahRef]) -> Result<()> {
    if starts.first() != Some(&AyahRef::new(1, 1)) {
        return Err(Error::InvalidMushaf(format!("{kind} list must start at 1:1")));
    }
    if let Some(w) = starts.windows(2).find(|w| w[0] >= w[1]) {
        return Err(Error::InvalidMushaf(format!(
            "{kind} starts not strictly increasing at {} -> {}",
            w[0], w[1]
        )));
    }
    if let Some(bad) = starts
        .iter()
        .find(|r| r.surah == 0 || r.surah > SURAH_COUNT || r.ayah == 0)
    {
        return Err(Error::InvalidMushaf(format!("{kind} start {bad} out of range")));
    }
    Ok(())
}

/// 1-based position of the last start `<= ayah`.
fn locate(starts: &[AyahRef], ayah: AyahRef) -> Option<u16> {
    if ayah.surah == 0 || ayah.surah > SURAH_COUNT || ayah.ayah == 0 {
        return None;
    }
    let idx = starts.partition_point(|s| *s <= ayah);
    u16::try_from(idx).ok().filter(|&i| i > 0)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MushafIndex {
    page_starts: Vec<AyahRef>,
    juz_starts: Vec<AyahRef>,
}

#[derive(Deserialize)]
struct MushafFile {
    pages: Vec<AyahRef>,
    #[serde(default)]
    juz: Option<Vec<AyahRef>>,
}

impl MushafIndex {
    pub fn new(page_starts: Vec<AyahRef>) -> Result<Self> {
        Self::with_juz(page_starts, MADANI_JUZ_STARTS.to_vec())
    }

    pub fn with_juz(page_starts: Vec<AyahRef>, juz_starts: Vec<AyahRef>) -> Result<Self> {
        check_starts("page", &page_starts)?;
        check_starts("juz", &juz_starts)?;
        tracing::debug!(pages = page_starts.len(), juz = juz_starts.len(), "built mushaf index");
        Ok(Self {
            page_starts,
            juz_starts,
        })
    }

    /// `{"pages": [[1,1],[2,1],[2,6],...], "juz": [...]}`; `juz` is optional.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: MushafFile = serde_json::from_str(json)?;
        match file.juz {
            Some(juz) => Self::with_juz(file.pages, juz),
            None => Self::new(file.pages),
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    pub fn page_count(&self) -> usize {
        self.page_starts.len()
    }

    pub fn juz_count(&self) -> usize {
        self.juz_starts.len()
    }

    /// 1-based page holding `ayah`.
    pub fn page_of(&self, ayah: AyahRef) -> Option<u16> {
        locate(&self.page_starts, ayah)
    }

    /// 1-based juz holding `ayah`.
    pub fn juz_of(&self, ayah: AyahRef) -> Option<u16> {
        locate(&self.juz_starts, ayah)
    }

    pub fn page_start(&self, page: u16) -> Option<AyahRef> {
        let idx = usize::from(page).checked_sub(1)?;
        self.page_starts.get(idx).copied()
    }

    pub fn juz_start(&self, juz: u16) -> Option<AyahRef> {
        let idx = usize::from(juz).checked_sub(1)?;
        self.juz_starts.get(idx).copied()
    }

    /// First page of a juz.
    pub fn juz_first_page(&self, juz: u16) -> Option<u16> {
        self.page_of(self.juz_start(juz)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locate_rejects_out_of_range() {
        let starts = [AyahRef::new(1, 1), AyahRef::new(2, 1)];
        assert_eq!(locate(&starts, AyahRef::new(0, 1)), None);
        assert_eq!(locate(&starts, AyahRef::new(115, 1)), None);
        assert_eq!(locate(&starts, AyahRef::new(2, 0)), None);
        assert_eq!(locate(&starts, AyahRef::new(1, 7)), Some(1));
        assert_eq!(locate(&starts, AyahRef::new(2, 1)), Some(2));
    }

    #[test]
    fn madani_juz_table_is_valid() {
        assert!(check_starts("juz", &MADANI_JUZ_STARTS).is_ok());
    }
}
