use serde_derive::Serialize;

/// How a punctuation system capitalises book names.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum BooknameCase {
    Upper,
    Lower,
    MixedOrEither,
}

/// Whether a space is allowed after the book/chapter separator.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum SpaceAllowed {
    Yes,
    No,
    Either,
}

/// The punctuation marks one system writes and expects when formatting
/// scripture references and surrounding text.
///
/// Optional fields are `None` where the system defines no mark, e.g.
/// a fourth quotation level or punctuation after a book abbreviation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PunctuationMarks {
    pub sentence_capitalisation: bool,
    pub proper_noun_capitalisation: bool,

    pub statement_terminator: char,
    pub question_terminator: char,
    pub exclamation_terminator: char,
    pub comma_pause_character: char,

    pub start_quote_level1: Option<char>,
    pub end_quote_level1: Option<char>,
    pub start_quote_level2: Option<char>,
    pub end_quote_level2: Option<char>,
    pub start_quote_level3: Option<char>,
    pub end_quote_level3: Option<char>,
    pub start_quote_level4: Option<char>,
    pub end_quote_level4: Option<char>,

    pub bookname_case: BooknameCase,
    pub bookname_length: u8,
    pub punctuation_after_book_abbreviation: Option<char>,
    pub space_allowed_after_bcs: SpaceAllowed,

    pub book_chapter_separator: char,
    pub chapter_verse_separator: char,
    pub verse_separator: char,
    pub chapter_separator: char,
    pub book_separator: char,

    pub verse_bridge_character: char,
    pub chapter_bridge_character: char,
    pub book_bridge_character: char,
    pub allowed_verse_suffixes: &'static str,
}
