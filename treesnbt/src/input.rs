use crate::error::Error;

/// Longest tail of consumed input quoted in syntax errors.
const CONTEXT_LEN: usize = 10;

/// Character reader shared by the SNBT and path parsers. Supports pushing
/// back the last character read, which is all the lookahead either grammar
/// needs.
pub(crate) struct Input<'a> {
    data: &'a str,
    /// Byte offset of the next unread character.
    index: usize,
    /// Characters consumed, counting a pushed back one.
    consumed: usize,
    current: Option<char>,
    back: bool,
}

impl<'a> Input<'a> {
    pub fn new(data: &'a str) -> Self {
        Self {
            data,
            index: 0,
            consumed: 0,
            current: None,
            back: false,
        }
    }

    pub fn next(&mut self) -> Option<char> {
        if self.back {
            self.back = false;
            return self.current;
        }

        let c = self.data[self.index..].chars().next();
        if let Some(c) = c {
            self.index += c.len_utf8();
            self.consumed += 1;
        }
        self.current = c;
        c
    }

    /// Make the next call to `next` return the last character again. Past
    /// the end of input there is nothing to step back over.
    pub fn back(&mut self) {
        self.back = self.current.is_some();
    }

    pub fn peek(&self) -> Option<char> {
        if self.back {
            return self.current;
        }
        self.data[self.index..].chars().next()
    }

    pub fn more(&self) -> bool {
        self.peek().is_some()
    }

    /// Next character that is not whitespace.
    pub fn next_clean(&mut self) -> Option<char> {
        loop {
            match self.next() {
                Some(c) if c.is_whitespace() => {}
                other => return other,
            }
        }
    }

    /// Consume the next character, failing unless it is `expected`.
    pub fn expect(&mut self, expected: char) -> Result<(), Error> {
        if self.next() != Some(expected) {
            return Err(self.error(format!("'{}' expected", expected)));
        }
        Ok(())
    }

    /// A quoted string, or a run of bare characters accepted by `is_bare`.
    pub fn next_string(&mut self, is_bare: fn(char) -> bool) -> Result<String, Error> {
        let mut s = String::new();

        match self.next_clean() {
            Some(delim @ ('"' | '\'')) => loop {
                match self.next() {
                    None => return Err(self.error("Unexpected end of data")),
                    Some(c) if c == delim => return Ok(s),
                    Some('\r' | '\n') => {
                        return Err(self.error("Illegal line terminator in string"))
                    }
                    Some('\\') => match self.next() {
                        Some(c @ ('\'' | '"' | '\\')) => s.push(c),
                        Some(c) => {
                            return Err(self.error(format!("Illegal escape sequence '\\{}'", c)))
                        }
                        None => return Err(self.error("Unexpected end of data")),
                    },
                    Some(c) => s.push(c),
                }
            },
            Some(c) if is_bare(c) => {
                s.push(c);
                while let Some(c) = self.next() {
                    if !is_bare(c) {
                        self.back();
                        break;
                    }
                    s.push(c);
                }
                Ok(s)
            }
            _ => Err(self.error("Expected string")),
        }
    }

    pub fn position(&self) -> usize {
        self.consumed - usize::from(self.back)
    }

    pub fn error(&self, message: impl Into<String>) -> Error {
        let mut end = self.index;
        if self.back {
            if let Some(c) = self.current {
                end -= c.len_utf8();
            }
        }

        let consumed = &self.data[..end];
        let tail: Vec<char> = consumed.chars().rev().take(CONTEXT_LEN + 1).collect();
        let context = if tail.len() > CONTEXT_LEN {
            let tail: String = tail[..CONTEXT_LEN].iter().rev().collect();
            format!("...{}", tail)
        } else {
            consumed.to_owned()
        };

        Error::Syntax {
            message: message.into(),
            position: self.position(),
            context,
        }
    }
}

/// Characters allowed in unquoted SNBT strings and keys.
pub(crate) fn is_bare(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '+' | '-')
}
