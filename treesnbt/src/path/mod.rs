//! NBT paths: a small query language for picking values out of a tree, as
//! used by Minecraft's `/data` command.
//!
//! A path is a dot separated chain of segments:
//!
//! | segment        | selects                                                     |
//! |----------------|-------------------------------------------------------------|
//! | `{pattern}`    | the tree itself, if it contains `pattern` (first segment only) |
//! | `name`         | the field `name` of a compound                              |
//! | `name{pattern}`| the field `name`, if it is a compound containing `pattern`  |
//! | `name[]`       | every element of the list or array `name`                   |
//! | `name[3]`      | element 3 of `name`; negative indices count from the end    |
//! | `name[{pattern}]` | every compound element of the list `name` containing `pattern` |
//! | `name[0][]...` | the above steps applied one after another to nested lists   |
//!
//! Names are bare or quoted like SNBT keys, except that a bare name stops at
//! `[`, `{` and `.`.
//!
//! Evaluation never fails. Missing fields, kind mismatches and out of range
//! indices simply select nothing.
//!
//! ```
//! # fn main() -> treesnbt::error::Result<()> {
//! use treenbt::Tag;
//! use treesnbt::Path;
//!
//! let tree = Tag::Compound(treesnbt::from_str(
//!     r#"{Inventory: [{id: "stone", Count: 3b}, {id: "dirt", Count: 1b}]}"#,
//! )?);
//!
//! let path: Path = r#"Inventory[{id: "dirt"}].Count"#.parse()?;
//! let found = path.traverse(&tree);
//! assert_eq!(found.len(), 1);
//! assert_eq!(*found[0], Tag::Byte(1));
//! # Ok(())
//! # }
//! ```
use std::borrow::Cow;
use std::fmt::{self, Display};
use std::str::FromStr;

use treenbt::{Compound, Kind, Tag};

use crate::error::{Error, Result};
use crate::ser;

mod parser;

/// One segment of a path, without its successor.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// `{pattern}`: the current tag, if it is a compound containing the
    /// pattern. Only valid at the start of a path.
    Root(Compound),
    /// `name`
    Named(String),
    /// `name{pattern}`
    Compound(String, Compound),
    /// `name[index]`, or `[index]` applied to the current tag.
    Index(Option<String>, i32),
    /// `name[]`, or `[]` applied to the current tag.
    List(Option<String>),
    /// `name[{pattern}]`, or `[{pattern}]` applied to the current tag.
    ListTag(Option<String>, Compound),
    /// `name` followed by two or more bracketed steps, eg `name[0][]`.
    SubList(String, Vec<Step>),
}

/// A bracketed step inside a [`Node::SubList`].
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Index(i32),
    List,
    ListTag(Compound),
}

impl Node {
    /// Tags selected by this node alone, ignoring any successor.
    pub fn select<'t>(&self, tag: &'t Tag) -> Vec<Cow<'t, Tag>> {
        match self {
            Node::Root(pattern) => match tag {
                Tag::Compound(c) if c.contains(pattern) => vec![Cow::Borrowed(tag)],
                _ => vec![],
            },
            Node::Named(name) => named(tag, name).map(Cow::Borrowed).into_iter().collect(),
            Node::Compound(name, pattern) => match named(tag, name) {
                Some(found @ Tag::Compound(c)) if c.contains(pattern) => {
                    vec![Cow::Borrowed(found)]
                }
                _ => vec![],
            },
            Node::Index(name, index) => {
                resolve(tag, name.as_deref()).map_or_else(Vec::new, |t| element(t, *index))
            }
            Node::List(name) => resolve(tag, name.as_deref()).map_or_else(Vec::new, elements),
            Node::ListTag(name, pattern) => resolve(tag, name.as_deref())
                .map_or_else(Vec::new, |t| matching(t, pattern)),
            Node::SubList(name, steps) => {
                let mut tags = match named(tag, name) {
                    Some(found) => vec![Cow::Borrowed(found)],
                    None => return vec![],
                };
                for step in steps {
                    tags = flat_map(tags, |t| step.select(t));
                }
                tags
            }
        }
    }
}

impl Step {
    fn select<'t>(&self, tag: &'t Tag) -> Vec<Cow<'t, Tag>> {
        match self {
            Step::Index(index) => element(tag, *index),
            Step::List => elements(tag),
            Step::ListTag(pattern) => matching(tag, pattern),
        }
    }
}

/// A node and the rest of the path after it.
#[derive(Debug, Clone, PartialEq)]
pub struct PathNode {
    node: Node,
    next: Option<Box<PathNode>>,
}

impl PathNode {
    pub fn new(node: Node) -> Self {
        Self { node, next: None }
    }

    pub fn node(&self) -> &Node {
        &self.node
    }

    pub fn next(&self) -> Option<&PathNode> {
        self.next.as_deref()
    }

    /// Set the node that follows this one, replacing any existing successor.
    ///
    /// A [`Node::Root`] can only start a path, so passing one fails with
    /// [`Error::RootAsSuccessor`].
    pub fn with_next(mut self, next: PathNode) -> Result<Self> {
        if let Node::Root(_) = next.node {
            return Err(Error::RootAsSuccessor);
        }
        self.next = Some(Box::new(next));
        Ok(self)
    }

    /// Tags selected by this node alone, ignoring any successor.
    pub fn traverse_self<'t>(&self, tag: &'t Tag) -> Vec<Cow<'t, Tag>> {
        self.node.select(tag)
    }

    /// Tags selected by this node and then by every node after it.
    ///
    /// Results are in tree order and are not deduplicated. Array elements
    /// are not stored as tags, so they come back owned; everything else is
    /// borrowed from `tag`.
    pub fn traverse<'t>(&self, tag: &'t Tag) -> Vec<Cow<'t, Tag>> {
        let tags = self.traverse_self(tag);
        match &self.next {
            Some(next) => flat_map(tags, |t| next.traverse(t)),
            None => tags,
        }
    }

    /// [`traverse`][PathNode::traverse] each of `tags` and concatenate the
    /// results.
    pub fn traverse_all<'t>(&self, tags: impl IntoIterator<Item = &'t Tag>) -> Vec<Cow<'t, Tag>> {
        tags.into_iter().flat_map(|t| self.traverse(t)).collect()
    }
}

impl From<Node> for PathNode {
    fn from(node: Node) -> Self {
        Self::new(node)
    }
}

impl Display for PathNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.node)?;
        if let Some(next) = &self.next {
            write!(f, ".{}", next)?;
        }
        Ok(())
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Root(pattern) => f.write_str(&ser::to_string(pattern)),
            Node::Named(name) => f.write_str(&quote(name)),
            Node::Compound(name, pattern) => {
                write!(f, "{}{}", quote(name), ser::to_string(pattern))
            }
            Node::Index(name, index) => write!(f, "{}[{}]", opt_quote(name), index),
            Node::List(name) => write!(f, "{}[]", opt_quote(name)),
            Node::ListTag(name, pattern) => {
                write!(f, "{}[{}]", opt_quote(name), ser::to_string(pattern))
            }
            Node::SubList(name, steps) => {
                f.write_str(&quote(name))?;
                steps.iter().try_for_each(|step| write!(f, "{}", step))
            }
        }
    }
}

impl Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Index(index) => write!(f, "[{}]", index),
            Step::List => f.write_str("[]"),
            Step::ListTag(pattern) => write!(f, "[{}]", ser::to_string(pattern)),
        }
    }
}

/// A parsed path.
///
/// ```
/// # use treesnbt::{Node, Path};
/// let path = Path::parse("Items[0].tag.display").unwrap();
/// assert_eq!(path.head().node(), &Node::Index(Some("Items".into()), 0));
/// assert_eq!(path.to_string(), "Items[0].tag.display");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    head: PathNode,
}

impl Path {
    /// Parse path text. Leading and trailing whitespace is ignored; anything
    /// else after a complete path is an error.
    pub fn parse(text: &str) -> Result<Path> {
        parser::parse(text.trim()).map(|head| Path { head })
    }

    pub fn head(&self) -> &PathNode {
        &self.head
    }

    pub fn traverse<'t>(&self, tag: &'t Tag) -> Vec<Cow<'t, Tag>> {
        self.head.traverse(tag)
    }

    pub fn traverse_all<'t>(&self, tags: impl IntoIterator<Item = &'t Tag>) -> Vec<Cow<'t, Tag>> {
        self.head.traverse_all(tags)
    }
}

impl From<PathNode> for Path {
    fn from(head: PathNode) -> Self {
        Self { head }
    }
}

impl FromStr for Path {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Path::parse(s)
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.head, f)
    }
}

fn named<'t>(tag: &'t Tag, name: &str) -> Option<&'t Tag> {
    tag.as_compound()?.get(name).ok()
}

fn resolve<'t>(tag: &'t Tag, name: Option<&str>) -> Option<&'t Tag> {
    match name {
        Some(name) => named(tag, name),
        None => Some(tag),
    }
}

fn element(tag: &Tag, index: i32) -> Vec<Cow<'_, Tag>> {
    let len = match tag.sequence_len() {
        Some(len) => len as i64,
        None => return vec![],
    };

    let mut index = i64::from(index);
    if index < 0 {
        index += len;
    }
    if index < 0 || index >= len {
        return vec![];
    }
    let index = index as usize;

    let found = match tag {
        Tag::List(list) => list.get(index).ok().map(Cow::Borrowed),
        Tag::ByteArray(arr) => arr.element(index).map(Cow::Owned),
        Tag::IntArray(arr) => arr.element(index).map(Cow::Owned),
        Tag::LongArray(arr) => arr.element(index).map(Cow::Owned),
        _ => None,
    };
    found.into_iter().collect()
}

fn elements(tag: &Tag) -> Vec<Cow<'_, Tag>> {
    match tag {
        Tag::List(list) => list.iter().map(Cow::Borrowed).collect(),
        Tag::ByteArray(arr) => arr.iter().map(|v| Cow::Owned(Tag::Byte(*v))).collect(),
        Tag::IntArray(arr) => arr.iter().map(|v| Cow::Owned(Tag::Int(*v))).collect(),
        Tag::LongArray(arr) => arr.iter().map(|v| Cow::Owned(Tag::Long(*v))).collect(),
        _ => vec![],
    }
}

fn matching<'t>(tag: &'t Tag, pattern: &Compound) -> Vec<Cow<'t, Tag>> {
    match tag {
        Tag::List(list) if list.kind() == Some(Kind::Compound) => list
            .iter()
            .filter(|t| matches!(t, Tag::Compound(c) if c.contains(pattern)))
            .map(Cow::Borrowed)
            .collect(),
        _ => vec![],
    }
}

// Applies `f` to every tag, keeping borrows where possible. Tags that are
// already owned can only produce owned results.
fn flat_map<'t, F>(tags: Vec<Cow<'t, Tag>>, f: F) -> Vec<Cow<'t, Tag>>
where
    F: for<'a> Fn(&'a Tag) -> Vec<Cow<'a, Tag>>,
{
    let mut out = Vec::new();
    for tag in tags {
        match tag {
            Cow::Borrowed(t) => out.extend(f(t)),
            Cow::Owned(t) => out.extend(f(&t).into_iter().map(|c| Cow::Owned(c.into_owned()))),
        }
    }
    out
}

fn quote(name: &str) -> Cow<'_, str> {
    if ser::is_bare(name) && !name.contains('.') {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(ser::quote(name))
    }
}

fn opt_quote(name: &Option<String>) -> Cow<'_, str> {
    name.as_deref().map_or(Cow::Borrowed(""), quote)
}
