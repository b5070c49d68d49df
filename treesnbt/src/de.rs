//! Parsing SNBT text into trees.
//!
//! ```text
//! compound := '{' (key ':' value (',' key ':' value)*)? '}'
//! list     := '[' (value (',' value)*)? ']'
//! array    := '[' ('B' | 'I' | 'L') ';' (value (',' value)*)? ']'
//! value    := compound | list | array | quoted | bare
//! ```
//!
//! Whitespace between tokens is ignored. Bare tokens are classified as
//! booleans, numbers or strings; see the `number` module.
use log::trace;
use treenbt::{ByteArray, Compound, IntArray, Kind, List, LongArray, Tag};

use crate::error::Result;
use crate::input::{self, Input};
use crate::number;

/// Parse an SNBT compound, eg `{id: "minecraft:stone", Count: 1b}`.
///
/// Leading and trailing whitespace is ignored. Anything else after the
/// compound is an error.
pub fn from_str(input: &str) -> Result<Compound> {
    let mut parser = Parser::new(input.trim());
    let compound = parser.next_compound()?;
    parser.finish()?;
    Ok(compound)
}

/// Parse any SNBT value, eg `[1, 2, 3]` or `5s`.
pub fn value_from_str(input: &str) -> Result<Tag> {
    let mut parser = Parser::new(input.trim());
    let tag = parser.next_tag()?;
    parser.finish()?;
    Ok(tag)
}

pub(crate) struct Parser<'a> {
    pub(crate) input: Input<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(data: &'a str) -> Self {
        Self {
            input: Input::new(data),
        }
    }

    pub fn finish(&mut self) -> Result<()> {
        if self.input.more() {
            return Err(self.input.error("Trailing data"));
        }
        Ok(())
    }

    pub fn next_compound(&mut self) -> Result<Compound> {
        if self.input.next_clean() != Some('{') {
            return Err(self.input.error("'{' expected in TAG_Compound"));
        }

        let mut compound = Compound::new();
        if self.input.next_clean() == Some('}') {
            return Ok(compound);
        }

        loop {
            self.input.back();

            let key = self.input.next_string(input::is_bare)?;
            if compound.contains_key(&key) {
                return Err(self
                    .input
                    .error(format!("Duplicate key {:?} in TAG_Compound", key)));
            }
            if self.input.next_clean() != Some(':') {
                return Err(self.input.error("':' expected in TAG_Compound"));
            }
            let value = self.next_tag()?;
            compound.put(key, value);

            match self.input.next_clean() {
                Some(',') => {
                    self.input.next_clean();
                }
                Some('}') => return Ok(compound),
                _ => return Err(self.input.error("'}' expected in TAG_Compound")),
            }
        }
    }

    pub fn next_tag(&mut self) -> Result<Tag> {
        match self.input.next_clean() {
            Some('[') => self.next_list(),
            Some('{') => {
                self.input.back();
                Ok(Tag::Compound(self.next_compound()?))
            }
            Some('"' | '\'') => {
                self.input.back();
                Ok(Tag::String(self.input.next_string(input::is_bare)?))
            }
            Some(c) if input::is_bare(c) => {
                self.input.back();
                let token = self.input.next_string(input::is_bare)?;
                let tag = number::classify(&token);
                trace!("token {:?} is {}", token, tag.kind());
                Ok(tag)
            }
            _ => Err(self.input.error("Value expected")),
        }
    }

    // Called with the opening bracket consumed.
    fn next_list(&mut self) -> Result<Tag> {
        let array_kind = match self.input.next() {
            Some('B') if self.input.peek() == Some(';') => Some(Kind::Byte),
            Some('I') if self.input.peek() == Some(';') => Some(Kind::Int),
            Some('L') if self.input.peek() == Some(';') => Some(Kind::Long),
            _ => {
                self.input.back();
                None
            }
        };

        if let Some(kind) = array_kind {
            self.input.next(); // the ';'
            let elements = self.elements(kind, "array", true)?;
            return Ok(match kind {
                Kind::Byte => Tag::ByteArray(
                    elements
                        .iter()
                        .filter_map(|t| match t {
                            Tag::Byte(v) => Some(*v),
                            _ => None,
                        })
                        .collect::<ByteArray>(),
                ),
                Kind::Int => Tag::IntArray(
                    elements
                        .iter()
                        .filter_map(|t| match t {
                            Tag::Int(v) => Some(*v),
                            _ => None,
                        })
                        .collect::<IntArray>(),
                ),
                _ => Tag::LongArray(
                    elements
                        .iter()
                        .filter_map(|t| match t {
                            Tag::Long(v) => Some(*v),
                            _ => None,
                        })
                        .collect::<LongArray>(),
                ),
            });
        }

        if self.input.next_clean() == Some(']') {
            return Ok(Tag::List(List::new()));
        }
        self.input.back();

        let first = self.next_tag()?;
        let kind = first.kind();
        let mut items = vec![first];

        match self.input.next_clean() {
            Some(',') => items.extend(self.elements(kind, "list", false)?),
            Some(']') => {}
            _ => return Err(self.input.error("']' expected in TAG_List")),
        }

        List::from_tags(items)
            .map(Tag::List)
            .map_err(|e| self.input.error(e.to_string()))
    }

    /// Comma separated values up to the closing bracket, each of which must
    /// be `kind`. Without `allow_empty` at least one value is required, so a
    /// trailing comma is rejected.
    fn elements(&mut self, kind: Kind, what: &str, allow_empty: bool) -> Result<Vec<Tag>> {
        let mut items = Vec::new();
        if self.input.next_clean() == Some(']') && allow_empty {
            return Ok(items);
        }

        loop {
            self.input.back();

            let tag = self.next_tag()?;
            if tag.kind() != kind {
                return Err(self.input.error(format!(
                    "Expected {} in {}, found {}",
                    kind,
                    what,
                    tag.kind()
                )));
            }
            items.push(tag);

            match self.input.next_clean() {
                Some(',') => {
                    self.input.next_clean();
                }
                Some(']') => return Ok(items),
                _ => return Err(self.input.error(format!("']' expected in {}", what))),
            }
        }
    }
}
