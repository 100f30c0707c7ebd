use crate::cue::error::{CueError, CueResult};

/// Whitespace as understood by C-style stream extraction, vertical tab included.
fn is_space(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0b'
}

/// A FILE argument, quoted names may contain whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileName<'a> {
    Quoted(&'a str),
    Bare(&'a str),
}

/// Splits a buffered CUE sheet into whitespace delimited tokens.
///
/// The only context sensitive rule is the FILE argument, see [`Tokenizer::next_file_argument`].
#[derive(Debug)]
pub struct Tokenizer<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(text: &'a str) -> Self {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        Self { text, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start_matches(is_space).len();
    }

    fn take_word(&mut self) -> &'a str {
        let rest = self.rest();
        let end = rest.find(is_space).unwrap_or(rest.len());
        self.pos += end;
        &rest[..end]
    }

    pub fn next_token(&mut self) -> Option<&'a str> {
        self.skip_whitespace();
        if self.rest().is_empty() {
            return None;
        }
        Some(self.take_word())
    }

    /// Reads a FILE name. A name starting with `"` runs up to the closing quote and may contain
    /// whitespace, the quotes are not part of the result. Anything else is a regular token.
    pub fn next_file_argument(&mut self) -> CueResult<Option<FileName<'a>>> {
        self.skip_whitespace();
        let rest = self.rest();

        let Some(quoted) = rest.strip_prefix('"') else {
            return Ok(self.next_token().map(FileName::Bare));
        };

        let end = quoted.find('"').ok_or(CueError::UnterminatedQuote)?;
        // opening quote + name + closing quote
        self.pos += end + 2;

        Ok(Some(FileName::Quoted(&quoted[..end])))
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_any_whitespace() {
        let tokens: Vec<_> = Tokenizer::new("  TRACK 01\tAUDIO\r\n  INDEX\x0b01 00:00:00\n").collect();
        assert_eq!(tokens, ["TRACK", "01", "AUDIO", "INDEX", "01", "00:00:00"]);
    }

    #[test]
    fn end_of_input_is_not_a_token() {
        let mut tokenizer = Tokenizer::new("REM   \n\t ");
        assert_eq!(tokenizer.next_token(), Some("REM"));
        assert_eq!(tokenizer.next_token(), None);
        assert_eq!(tokenizer.next_token(), None);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert_eq!(Tokenizer::new("").count(), 0);
        assert_eq!(Tokenizer::new(" \n ").count(), 0);
    }

    #[test]
    fn quoted_file_name_keeps_whitespace() {
        let mut tokenizer = Tokenizer::new("FILE \"my disc.bin\" BINARY");
        assert_eq!(tokenizer.next_token(), Some("FILE"));
        assert_eq!(tokenizer.next_file_argument().unwrap(), Some(FileName::Quoted("my disc.bin")));
        assert_eq!(tokenizer.next_token(), Some("BINARY"));
    }

    #[test]
    fn quoted_file_name_may_span_tabs_and_be_glued_to_next_token() {
        let mut tokenizer = Tokenizer::new("\"a\tb  c.bin\"BINARY");
        assert_eq!(tokenizer.next_file_argument().unwrap(), Some(FileName::Quoted("a\tb  c.bin")));
        assert_eq!(tokenizer.next_token(), Some("BINARY"));
    }

    #[test]
    fn unquoted_file_name_is_a_plain_token() {
        let mut tokenizer = Tokenizer::new("   track01.bin BINARY");
        assert_eq!(tokenizer.next_file_argument().unwrap(), Some(FileName::Bare("track01.bin")));
        assert_eq!(tokenizer.next_token(), Some("BINARY"));
    }

    #[test]
    fn single_character_unquoted_name_does_not_swallow_next_token() {
        let mut tokenizer = Tokenizer::new("a BINARY");
        assert_eq!(tokenizer.next_file_argument().unwrap(), Some(FileName::Bare("a")));
        assert_eq!(tokenizer.next_token(), Some("BINARY"));
    }

    #[test]
    fn missing_closing_quote_is_an_error() {
        let mut tokenizer = Tokenizer::new("\"never closed.bin BINARY\n");
        assert!(matches!(
            tokenizer.next_file_argument(),
            Err(CueError::UnterminatedQuote)
        ));
    }

    #[test]
    fn file_argument_at_end_of_input() {
        let mut tokenizer = Tokenizer::new("  ");
        assert_eq!(tokenizer.next_file_argument().unwrap(), None);
    }

    #[test]
    fn byte_order_mark_is_skipped() {
        let tokens: Vec<_> = Tokenizer::new("\u{feff}REM HIGH-DENSITY AREA").collect();
        assert_eq!(tokens, ["REM", "HIGH-DENSITY", "AREA"]);
    }
}
