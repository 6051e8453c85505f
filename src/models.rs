use std::fmt;
use std::str;
use std::str::FromStr;

use serde::ser::Serializer;
use serde_derive::Serialize;

use crate::marks::PunctuationMarks;
use crate::PunctuationError;

/// A book reference abbreviation: exactly three printable ASCII
/// characters held in a fixed four byte buffer (three data bytes plus a
/// NUL terminator).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Abbreviation([u8; 4]);

impl Abbreviation {
    /// Builds an abbreviation from a three character code. Intended for
    /// static table declarations; panics at compile time on anything
    /// that is not three printable ASCII bytes.
    pub const fn new(code: &str) -> Abbreviation {
        let b = code.as_bytes();
        assert!(b.len() == 3, "abbreviation must be exactly three bytes");
        assert!(
            b[0].is_ascii_graphic() && b[1].is_ascii_graphic() && b[2].is_ascii_graphic(),
            "abbreviation must be printable ASCII"
        );
        Abbreviation([b[0], b[1], b[2], 0])
    }

    pub fn as_str(&self) -> &str {
        // Construction guarantees three ASCII bytes.
        str::from_utf8(&self.0[..3]).expect("abbreviation is always ASCII")
    }
}

impl fmt::Display for Abbreviation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Abbreviation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Abbreviation({})", self.as_str())
    }
}

impl FromStr for Abbreviation {
    type Err = PunctuationError;

    fn from_str(s: &str) -> Result<Abbreviation, Self::Err> {
        let b = s.as_bytes();
        if b.len() != 3 || !b.iter().all(|c| c.is_ascii_graphic()) {
            return Err(PunctuationError::InvalidAbbreviation {
                value: s.to_string(),
            });
        }
        Ok(Abbreviation([b[0], b[1], b[2], 0]))
    }
}

impl serde::Serialize for Abbreviation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Forward mapping from a book's reference abbreviation to its index
/// number within a punctuation system.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ReferenceToIndexEntry {
    pub abbreviation: Abbreviation,
    pub index: i32,
}

/// Inverse mapping, index number first, for lookup by book position.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct IndexToReferenceEntry {
    pub index: i32,
    pub abbreviation: Abbreviation,
}

/// One complete punctuation system: a system name, the two lookup tables
/// and the punctuation marks the system writes references with.
///
/// The table borrows its arrays. They are static data owned by the
/// generated tables module and may be shared between systems.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct PunctuationSystemTable {
    pub name: &'static str,
    pub by_reference: &'static [ReferenceToIndexEntry],
    pub by_book: &'static [IndexToReferenceEntry],
    pub marks: &'static PunctuationMarks,
}

impl PunctuationSystemTable {
    /// Looks up the index number for the given book abbreviation.
    ///
    /// The inputted abbreviation is matched in a case-insensitive
    /// manner. `by_reference` is sorted by abbreviation, so this is a
    /// binary search.
    pub fn index_of(&self, abbreviation: &str) -> Option<i32> {
        let wanted: Abbreviation = abbreviation.to_uppercase().parse().ok()?;
        self.by_reference
            .binary_search_by(|entry| entry.abbreviation.cmp(&wanted))
            .ok()
            .map(|i| self.by_reference[i].index)
    }

    /// Looks up the book abbreviation at the given index number.
    /// `by_book` is sorted by index, so this is a binary search.
    pub fn abbreviation_of(&self, index: i32) -> Option<Abbreviation> {
        self.by_book
            .binary_search_by(|entry| entry.index.cmp(&index))
            .ok()
            .map(|i| self.by_book[i].abbreviation)
    }

    /// Whether the system knows the given book abbreviation.
    pub fn contains(&self, abbreviation: &str) -> bool {
        self.index_of(abbreviation).is_some()
    }

    pub fn book_count(&self) -> usize {
        self.by_book.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::ENGLISH_MARKS;

    #[test]
    fn abbreviation_from_str() {
        vec!["GEN", "REV", "PSA", "JN1", "CO2"].iter().for_each(|s| {
            let a: Abbreviation = s.parse().unwrap();
            assert_eq!(a.as_str(), *s);
            assert_eq!(a.to_string(), *s);
        });

        vec!["", "GE", "GENE", "G N", "GÉN"].iter().for_each(|s| {
            assert_eq!(
                s.parse::<Abbreviation>(),
                Err(PunctuationError::InvalidAbbreviation {
                    value: s.to_string()
                })
            );
        });
    }

    #[test]
    fn abbreviation_ordering() {
        let gen = Abbreviation::new("GEN");
        let exo = Abbreviation::new("EXO");
        let jn1 = Abbreviation::new("JN1");
        let jna = Abbreviation::new("JNA");
        assert!(exo < gen);
        assert!(jn1 < jna);
        assert_eq!(gen, "GEN".parse().unwrap());
    }

    #[test]
    fn kjv_round_trip() {
        static BY_REFERENCE: [ReferenceToIndexEntry; 2] = [
            ReferenceToIndexEntry {
                abbreviation: Abbreviation::new("EXO"),
                index: 2,
            },
            ReferenceToIndexEntry {
                abbreviation: Abbreviation::new("GEN"),
                index: 1,
            },
        ];
        static BY_BOOK: [IndexToReferenceEntry; 2] = [
            IndexToReferenceEntry {
                index: 1,
                abbreviation: Abbreviation::new("GEN"),
            },
            IndexToReferenceEntry {
                index: 2,
                abbreviation: Abbreviation::new("EXO"),
            },
        ];

        let table = PunctuationSystemTable {
            name: "KJV",
            by_reference: &BY_REFERENCE,
            by_book: &BY_BOOK,
            marks: &ENGLISH_MARKS,
        };

        // Constructing then reading back yields the same name and the
        // same element sequences.
        assert_eq!(table.name, "KJV");
        assert_eq!(table.by_reference, &BY_REFERENCE[..]);
        assert_eq!(table.by_book, &BY_BOOK[..]);

        assert_eq!(table.index_of("GEN"), Some(1));
        assert_eq!(table.index_of("gen"), Some(1));
        assert_eq!(table.index_of("EXO"), Some(2));
        assert_eq!(table.abbreviation_of(1), Some(Abbreviation::new("GEN")));
        assert_eq!(table.abbreviation_of(2), Some(Abbreviation::new("EXO")));

        assert_eq!(table.index_of("MAL"), None);
        assert_eq!(table.index_of("not an abbreviation"), None);
        assert_eq!(table.abbreviation_of(0), None);
        assert_eq!(table.abbreviation_of(99), None);
        assert!(table.contains("gen"));
        assert!(!table.contains("REV"));
        assert_eq!(table.book_count(), 2);
    }
}
