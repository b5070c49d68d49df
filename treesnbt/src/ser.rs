//! Writing trees as SNBT text.
//!
//! ```
//! # use treenbt::{Compound, Tag};
//! let mut c = Compound::new();
//! c.put("Count", 3i8);
//! assert_eq!(treesnbt::to_string(&c), "{Count: 3b}");
//!
//! let list = treesnbt::value_from_str("[I; 1, 2]").unwrap();
//! assert_eq!(treesnbt::tag_to_string(&list), "[I; 1, 2]");
//! ```
use treenbt::{Compound, List, Tag, DEFAULT_MAX_DEPTH};

use crate::input;

/// Markers written before each kind of token when stringifying. Every field
/// is written verbatim, so they can be chat color codes, terminal escapes or
/// nothing at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Brackets, braces, colons, commas and quotes.
    pub punctuation: String,
    /// The body of string values.
    pub string: String,
    /// Compound keys.
    pub key: String,
    /// Numeric literals.
    pub number: String,
    /// Kind suffixes such as the `b` in `3b`, and array prefixes.
    pub suffix: String,
}

impl Palette {
    /// No markers at all. Output is plain SNBT.
    pub fn plain() -> Self {
        Self {
            punctuation: String::new(),
            string: String::new(),
            key: String::new(),
            number: String::new(),
            suffix: String::new(),
        }
    }

    /// Minecraft's legacy chat colors, using section sign codes.
    pub fn section_sign() -> Self {
        Self {
            punctuation: "§f".into(),
            string: "§a".into(),
            key: "§b".into(),
            number: "§6".into(),
            suffix: "§c".into(),
        }
    }

    /// ANSI terminal colors in the same scheme as [`Palette::section_sign`].
    pub fn ansi() -> Self {
        Self {
            punctuation: "\x1b[97m".into(),
            string: "\x1b[92m".into(),
            key: "\x1b[96m".into(),
            number: "\x1b[33m".into(),
            suffix: "\x1b[91m".into(),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::plain()
    }
}

/// Configurable SNBT writer.
///
/// Nesting is limited to `max_depth`: compounds and lists at the limit are
/// written empty.
#[derive(Debug, Clone)]
pub struct Stringifier {
    palette: Palette,
    max_depth: usize,
}

impl Default for Stringifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Stringifier {
    pub fn new() -> Self {
        Self {
            palette: Palette::plain(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn stringify(&self, tag: &Tag) -> String {
        let mut out = String::new();
        self.tag(&mut out, tag, self.max_depth);
        out
    }

    pub fn stringify_compound(&self, compound: &Compound) -> String {
        let mut out = String::new();
        self.compound(&mut out, compound, self.max_depth);
        out
    }

    fn tag(&self, out: &mut String, tag: &Tag, depth: usize) {
        let p = &self.palette;
        match tag {
            Tag::Compound(c) => self.compound(out, c, depth),
            Tag::List(l) => self.list(out, l, depth),
            Tag::ByteArray(arr) => self.array(out, "B", "B", arr.iter().map(|v| i64::from(*v))),
            Tag::IntArray(arr) => self.array(out, "I", "", arr.iter().map(|v| i64::from(*v))),
            Tag::LongArray(arr) => self.array(out, "L", "L", arr.iter().copied()),
            Tag::String(s) => self.quoted(out, &p.string, s),
            Tag::Byte(v) => self.integer(out, *v, "b"),
            Tag::Short(v) => self.integer(out, *v, "s"),
            Tag::Int(v) => self.integer(out, *v, ""),
            Tag::Long(v) => self.integer(out, *v, "l"),
            Tag::Float(v) => self.float(out, ryu::Buffer::new().format(*v), "f"),
            Tag::Double(v) => self.float(out, ryu::Buffer::new().format(*v), "d"),
        }
    }

    fn compound(&self, out: &mut String, compound: &Compound, depth: usize) {
        let p = &self.palette;
        out.push_str(&p.punctuation);
        out.push('{');

        if depth > 0 {
            for (i, (key, value)) in compound.iter().enumerate() {
                if i > 0 {
                    self.comma(out);
                }
                if is_bare(key) {
                    out.push_str(&p.key);
                    out.push_str(key);
                } else {
                    self.quoted(out, &p.key, key);
                }
                out.push_str(&p.punctuation);
                out.push_str(": ");
                self.tag(out, value, depth - 1);
            }
        }

        out.push_str(&p.punctuation);
        out.push('}');
    }

    fn list(&self, out: &mut String, list: &List, depth: usize) {
        let p = &self.palette;
        out.push_str(&p.punctuation);
        out.push('[');

        if depth > 0 {
            for (i, value) in list.iter().enumerate() {
                if i > 0 {
                    self.comma(out);
                }
                self.tag(out, value, depth - 1);
            }
        }

        out.push_str(&p.punctuation);
        out.push(']');
    }

    fn array(
        &self,
        out: &mut String,
        prefix: &str,
        suffix: &str,
        values: impl ExactSizeIterator<Item = i64>,
    ) {
        let p = &self.palette;
        let empty = values.len() == 0;

        out.push_str(&p.punctuation);
        out.push('[');
        out.push_str(&p.suffix);
        out.push_str(prefix);
        out.push_str(&p.punctuation);
        out.push(';');
        if !empty {
            out.push(' ');
        }

        let mut buf = itoa::Buffer::new();
        for (i, v) in values.enumerate() {
            if i > 0 {
                self.comma(out);
            }
            out.push_str(&p.number);
            out.push_str(buf.format(v));
            if !suffix.is_empty() {
                out.push_str(&p.suffix);
                out.push_str(suffix);
            }
        }

        out.push_str(&p.punctuation);
        out.push(']');
    }

    fn integer(&self, out: &mut String, v: impl itoa::Integer, suffix: &str) {
        let p = &self.palette;
        out.push_str(&p.number);
        out.push_str(itoa::Buffer::new().format(v));
        if !suffix.is_empty() {
            out.push_str(&p.suffix);
            out.push_str(suffix);
        }
    }

    fn float(&self, out: &mut String, formatted: &str, suffix: &str) {
        let p = &self.palette;
        out.push_str(&p.number);
        out.push_str(formatted);
        out.push_str(&p.suffix);
        out.push_str(suffix);
    }

    fn quoted(&self, out: &mut String, color: &str, s: &str) {
        let p = &self.palette;
        out.push_str(&p.punctuation);
        out.push('"');
        out.push_str(color);
        escape_into(out, s);
        out.push_str(&p.punctuation);
        out.push('"');
    }

    fn comma(&self, out: &mut String) {
        out.push_str(&self.palette.punctuation);
        out.push_str(", ");
    }
}

/// Plain SNBT for a compound.
pub fn to_string(compound: &Compound) -> String {
    Stringifier::new().stringify_compound(compound)
}

/// SNBT for a compound colored with [`Palette::section_sign`].
pub fn to_colored_string(compound: &Compound) -> String {
    Stringifier::new()
        .palette(Palette::section_sign())
        .stringify_compound(compound)
}

/// Plain SNBT for any tag.
pub fn tag_to_string(tag: &Tag) -> String {
    Stringifier::new().stringify(tag)
}

/// Whether `s` can be written without quotes.
pub(crate) fn is_bare(s: &str) -> bool {
    !s.is_empty() && s.chars().all(input::is_bare)
}

/// `s` in double quotes, escaped.
pub(crate) fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    escape_into(&mut out, s);
    out.push('"');
    out
}

fn escape_into(out: &mut String, s: &str) {
    for c in s.chars() {
        if matches!(c, '"' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
}
