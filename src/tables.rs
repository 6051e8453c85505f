//! Static punctuation system tables.
//!
//! The book codes are the standard 3-letter codes for the 66-book
//! Protestant canon. `CANONICAL_BY_REFERENCE` is sorted by abbreviation
//! and `CANONICAL_BY_BOOK` by index number; the lookup methods on
//! [`PunctuationSystemTable`](crate::models::PunctuationSystemTable)
//! rely on both orderings.

use crate::marks::{BooknameCase, PunctuationMarks, SpaceAllowed};
use crate::models::{
    Abbreviation, IndexToReferenceEntry, PunctuationSystemTable, ReferenceToIndexEntry,
};

const fn by_ref(code: &str, index: i32) -> ReferenceToIndexEntry {
    ReferenceToIndexEntry {
        abbreviation: Abbreviation::new(code),
        index,
    }
}

const fn by_book(index: i32, code: &str) -> IndexToReferenceEntry {
    IndexToReferenceEntry {
        index,
        abbreviation: Abbreviation::new(code),
    }
}

/// Forward lookup table shared by all shipped systems, sorted by
/// abbreviation.
pub static CANONICAL_BY_REFERENCE: [ReferenceToIndexEntry; 66] = [
    by_ref("ACT", 44),
    by_ref("AMO", 30),
    by_ref("CH1", 13),
    by_ref("CH2", 14),
    by_ref("CO1", 46),
    by_ref("CO2", 47),
    by_ref("COL", 51),
    by_ref("DAN", 27),
    by_ref("DEU", 5),
    by_ref("ECC", 21),
    by_ref("EPH", 49),
    by_ref("EST", 17),
    by_ref("EXO", 2),
    by_ref("EZE", 26),
    by_ref("EZR", 15),
    by_ref("GAL", 48),
    by_ref("GEN", 1),
    by_ref("HAB", 35),
    by_ref("HAG", 37),
    by_ref("HEB", 58),
    by_ref("HOS", 28),
    by_ref("ISA", 23),
    by_ref("JAM", 59),
    by_ref("JDE", 65),
    by_ref("JDG", 7),
    by_ref("JER", 24),
    by_ref("JHN", 43),
    by_ref("JN1", 62),
    by_ref("JN2", 63),
    by_ref("JN3", 64),
    by_ref("JNA", 32),
    by_ref("JOB", 18),
    by_ref("JOL", 29),
    by_ref("JOS", 6),
    by_ref("KI1", 11),
    by_ref("KI2", 12),
    by_ref("LAM", 25),
    by_ref("LEV", 3),
    by_ref("LUK", 42),
    by_ref("MAL", 39),
    by_ref("MAT", 40),
    by_ref("MIC", 33),
    by_ref("MRK", 41),
    by_ref("NAH", 34),
    by_ref("NEH", 16),
    by_ref("NUM", 4),
    by_ref("OBA", 31),
    by_ref("PE1", 60),
    by_ref("PE2", 61),
    by_ref("PHM", 57),
    by_ref("PHP", 50),
    by_ref("PRO", 20),
    by_ref("PSA", 19),
    by_ref("REV", 66),
    by_ref("ROM", 45),
    by_ref("RUT", 8),
    by_ref("SA1", 9),
    by_ref("SA2", 10),
    by_ref("SNG", 22),
    by_ref("TH1", 52),
    by_ref("TH2", 53),
    by_ref("TI1", 54),
    by_ref("TI2", 55),
    by_ref("TIT", 56),
    by_ref("ZEC", 38),
    by_ref("ZEP", 36),
];

/// Inverse lookup table shared by all shipped systems, sorted by index
/// number (canonical book order, 1-based).
pub static CANONICAL_BY_BOOK: [IndexToReferenceEntry; 66] = [
    by_book(1, "GEN"),
    by_book(2, "EXO"),
    by_book(3, "LEV"),
    by_book(4, "NUM"),
    by_book(5, "DEU"),
    by_book(6, "JOS"),
    by_book(7, "JDG"),
    by_book(8, "RUT"),
    by_book(9, "SA1"),
    by_book(10, "SA2"),
    by_book(11, "KI1"),
    by_book(12, "KI2"),
    by_book(13, "CH1"),
    by_book(14, "CH2"),
    by_book(15, "EZR"),
    by_book(16, "NEH"),
    by_book(17, "EST"),
    by_book(18, "JOB"),
    by_book(19, "PSA"),
    by_book(20, "PRO"),
    by_book(21, "ECC"),
    by_book(22, "SNG"),
    by_book(23, "ISA"),
    by_book(24, "JER"),
    by_book(25, "LAM"),
    by_book(26, "EZE"),
    by_book(27, "DAN"),
    by_book(28, "HOS"),
    by_book(29, "JOL"),
    by_book(30, "AMO"),
    by_book(31, "OBA"),
    by_book(32, "JNA"),
    by_book(33, "MIC"),
    by_book(34, "NAH"),
    by_book(35, "HAB"),
    by_book(36, "ZEP"),
    by_book(37, "HAG"),
    by_book(38, "ZEC"),
    by_book(39, "MAL"),
    by_book(40, "MAT"),
    by_book(41, "MRK"),
    by_book(42, "LUK"),
    by_book(43, "JHN"),
    by_book(44, "ACT"),
    by_book(45, "ROM"),
    by_book(46, "CO1"),
    by_book(47, "CO2"),
    by_book(48, "GAL"),
    by_book(49, "EPH"),
    by_book(50, "PHP"),
    by_book(51, "COL"),
    by_book(52, "TH1"),
    by_book(53, "TH2"),
    by_book(54, "TI1"),
    by_book(55, "TI2"),
    by_book(56, "TIT"),
    by_book(57, "PHM"),
    by_book(58, "HEB"),
    by_book(59, "JAM"),
    by_book(60, "PE1"),
    by_book(61, "PE2"),
    by_book(62, "JN1"),
    by_book(63, "JN2"),
    by_book(64, "JN3"),
    by_book(65, "JDE"),
    by_book(66, "REV"),
];

/// Marks for the full English convention ("Gen. 1:1").
pub const ENGLISH_MARKS: PunctuationMarks = PunctuationMarks {
    sentence_capitalisation: true,
    proper_noun_capitalisation: true,

    statement_terminator: '.',
    question_terminator: '?',
    exclamation_terminator: '!',
    comma_pause_character: ',',

    start_quote_level1: Some('“'),
    end_quote_level1: Some('”'),
    start_quote_level2: Some('‘'),
    end_quote_level2: Some('’'),
    start_quote_level3: Some('“'),
    end_quote_level3: Some('”'),
    start_quote_level4: None,
    end_quote_level4: None,

    bookname_case: BooknameCase::MixedOrEither,
    bookname_length: 3,
    punctuation_after_book_abbreviation: Some('.'),
    space_allowed_after_bcs: SpaceAllowed::Either,

    book_chapter_separator: ' ',
    chapter_verse_separator: ':',
    verse_separator: ',',
    chapter_separator: ';',
    book_separator: ';',

    verse_bridge_character: '-',
    chapter_bridge_character: '-',
    book_bridge_character: '-',
    allowed_verse_suffixes: "abcdef",
};

/// Marks for the brief English convention ("Gen 1:1", no full stop
/// after the abbreviation).
pub const ENGLISH_BRIEF_MARKS: PunctuationMarks = PunctuationMarks {
    punctuation_after_book_abbreviation: None,
    ..ENGLISH_MARKS
};

/// Marks for the Matigsalug convention. Bridges chapters and books
/// with an en dash and allows fewer verse suffixes.
pub const MATIGSALUG_MARKS: PunctuationMarks = PunctuationMarks {
    punctuation_after_book_abbreviation: None,
    chapter_bridge_character: '–',
    book_bridge_character: '–',
    allowed_verse_suffixes: "ab",
    ..ENGLISH_MARKS
};

/// All known punctuation systems. Each table borrows the shared
/// canonical arrays and its own mark set.
pub static PUNCTUATION_SYSTEMS: [PunctuationSystemTable; 3] = [
    PunctuationSystemTable {
        name: "English",
        by_reference: &CANONICAL_BY_REFERENCE,
        by_book: &CANONICAL_BY_BOOK,
        marks: &ENGLISH_MARKS,
    },
    PunctuationSystemTable {
        name: "English_brief",
        by_reference: &CANONICAL_BY_REFERENCE,
        by_book: &CANONICAL_BY_BOOK,
        marks: &ENGLISH_BRIEF_MARKS,
    },
    PunctuationSystemTable {
        name: "Matigsalug",
        by_reference: &CANONICAL_BY_REFERENCE,
        by_book: &CANONICAL_BY_BOOK,
        marks: &MATIGSALUG_MARKS,
    },
];
