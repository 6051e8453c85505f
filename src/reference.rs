use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::{Match, Regex};
use serde_derive::Serialize;

use crate::models::PunctuationSystemTable;
use crate::PunctuationError;

/// A Bible reference waiting to be resolved against a punctuation
/// system. The book part may be a canonical name or an abbreviation;
/// resolution happens in the lookup tables, not here.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Reference {
    pub book: String,
    pub chapter: i32,
    pub verses: Option<Range<i32>>,
}

impl Reference {
    /// Renders the reference in the abbreviated style of the given
    /// system: its punctuation after the book abbreviation, its
    /// book/chapter and chapter/verse separators and its verse bridge.
    pub fn format_with(&self, system: &PunctuationSystemTable) -> String {
        let marks = system.marks;
        let mut out = String::with_capacity(16);

        out.push_str(&self.book);
        if let Some(p) = marks.punctuation_after_book_abbreviation {
            out.push(p);
        }
        out.push(marks.book_chapter_separator);
        out.push_str(&self.chapter.to_string());

        if let Some(verses) = &self.verses {
            out.push(marks.chapter_verse_separator);
            out.push_str(&verses.start.to_string());
            if verses.start != verses.end {
                out.push(marks.verse_bridge_character);
                out.push_str(&verses.end.to_string());
            }
        }
        out
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.verses {
            None => write!(f, "{} {}", self.book, self.chapter),
            Some(verses) if verses.start == verses.end => {
                write!(f, "{} {}:{}", self.book, self.chapter, verses.start)
            }
            Some(verses) => write!(
                f,
                "{} {}:{}-{}",
                self.book, self.chapter, verses.start, verses.end
            ),
        }
    }
}

impl FromStr for Reference {
    type Err = PunctuationError;

    fn from_str(s: &str) -> Result<Reference, Self::Err> {
        lazy_static! {
            static ref REF_RE: Regex = Regex::new(
                r"^([1-3]? ?[A-Za-z]+(?: [A-Za-z]+){0,2})(?:\.\s*|\s)(\d{1,3})(?:[:.](\d{1,3})(?:-(\d{1,3}))?)?$"
            )
            .unwrap();
        }

        let caps = REF_RE
            .captures(s.trim())
            .ok_or_else(|| invalid_reference(s))?;

        let book = caps
            .get(1)
            .ok_or_else(|| invalid_reference(s))?
            .as_str()
            .to_string();
        let chapter = parse_num_match(caps.get(2).ok_or_else(|| invalid_reference(s))?)?;
        let verses = match (caps.get(3), caps.get(4)) {
            (None, _) => None,
            (Some(verse), None) => {
                let verse = parse_num_match(verse)?;
                Some(verse..verse)
            }
            (Some(start), Some(end)) => Some(parse_num_match(start)?..parse_num_match(end)?),
        };

        Ok(Reference {
            book,
            chapter,
            verses,
        })
    }
}

/// Parse a regex [Match] into an i32.
fn parse_num_match(m: Match) -> Result<i32, PunctuationError> {
    m.as_str()
        .parse()
        .map_err(|_| PunctuationError::InvalidReference {
            reference: m.as_str().to_string(),
        })
}

/// Create an invalid reference error from the input.
fn invalid_reference(s: &str) -> PunctuationError {
    PunctuationError::InvalidReference {
        reference: s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system;

    #[test]
    fn from_str() {
        vec![
            ("Genesis 50", "Genesis", 50, None),
            ("Song of Solomon 1", "Song of Solomon", 1, None),
            ("GEN 1", "GEN", 1, None),
            ("Gen. 1:1", "Gen", 1, Some(1..1)),
            ("jhn.1.1", "jhn", 1, Some(1..1)),
            ("1 Cor 4", "1 Cor", 4, None),
            ("I Timothy 3:16", "I Timothy", 3, Some(16..16)),
            ("1 Timothy 3:16-18", "1 Timothy", 3, Some(16..18)),
            ("1tim 3.16", "1tim", 3, Some(16..16)),
        ]
        .iter()
        .for_each(|(raw, book, chapter, verses)| {
            assert_eq!(
                raw.parse::<Reference>().unwrap(),
                Reference {
                    book: book.to_string(),
                    chapter: *chapter,
                    verses: verses.to_owned()
                }
            );
        });
    }

    #[test]
    fn from_str_rejects_garbage() {
        vec!["", "50", "Genesis", "Gen 1:2:3", "Gen one", ":16"]
            .iter()
            .for_each(|raw| {
                assert!(
                    raw.parse::<Reference>().is_err(),
                    "'{}' should not parse",
                    raw
                );
            });
    }

    #[test]
    fn display() {
        vec![
            ("Genesis 50", "Genesis", 50, None),
            ("John 1:1", "John", 1, Some(1..1)),
            ("1 Timothy 3:16-18", "1 Timothy", 3, Some(16..18)),
        ]
        .iter()
        .for_each(|(expected, book, chapter, verses)| {
            assert_eq!(
                Reference {
                    book: book.to_string(),
                    chapter: *chapter,
                    verses: verses.to_owned()
                }
                .to_string(),
                expected.to_string()
            );
        });
    }

    #[test]
    fn format_with_system_marks() {
        let reference = Reference {
            book: "GEN".to_string(),
            chapter: 1,
            verses: Some(1..3),
        };

        // English abbreviates with a full stop, English_brief without,
        // and Matigsalug shares the brief form for verse bridges.
        assert_eq!(
            reference.format_with(system("English").unwrap()),
            "GEN. 1:1-3"
        );
        assert_eq!(
            reference.format_with(system("English_brief").unwrap()),
            "GEN 1:1-3"
        );
        assert_eq!(
            reference.format_with(system("Matigsalug").unwrap()),
            "GEN 1:1-3"
        );

        let chapter_only = Reference {
            book: "PSA".to_string(),
            chapter: 119,
            verses: None,
        };
        assert_eq!(
            chapter_only.format_with(system("English").unwrap()),
            "PSA. 119"
        );

        let single_verse = Reference {
            book: "JHN".to_string(),
            chapter: 3,
            verses: Some(16..16),
        };
        assert_eq!(
            single_verse.format_with(system("English_brief").unwrap()),
            "JHN 3:16"
        );
    }
}
