use treenbt::Compound;

use super::{Node, PathNode, Step};
use crate::de::Parser;
use crate::error::Result;
use crate::input;

// Path names may contain anything but the characters that start the next
// part of a segment.
fn is_name(c: char) -> bool {
    c != '[' && c != '{' && c != '.' && !c.is_whitespace()
}

pub(super) fn parse(text: &str) -> Result<PathNode> {
    let mut parser = Parser::new(text);
    let mut nodes = vec![segment(&mut parser)?];

    while parser.input.more() {
        parser.input.expect('.')?;
        nodes.push(segment(&mut parser)?);
    }

    // Link back to front so each node owns the rest of the chain.
    let mut nodes = nodes.into_iter().rev();
    let mut path = match nodes.next() {
        Some(last) => PathNode::new(last),
        None => return Err(parser.input.error("Path expected")),
    };
    for node in nodes {
        path = PathNode::new(node)
            .with_next(path)
            .map_err(|e| parser.input.error(e.to_string()))?;
    }
    Ok(path)
}

fn segment(parser: &mut Parser) -> Result<Node> {
    if parser.input.peek() == Some('{') {
        return Ok(Node::Root(parser.next_compound()?));
    }

    let name = parser.input.next_string(is_name)?;

    match parser.input.peek() {
        Some('{') => Ok(Node::Compound(name, parser.next_compound()?)),
        Some('[') => brackets(parser, name),
        _ => Ok(Node::Named(name)),
    }
}

enum Bracket {
    Index(i32),
    List,
    Pattern(Compound),
}

fn bracket(parser: &mut Parser) -> Result<Bracket> {
    parser.input.expect('[')?;

    match parser.input.peek() {
        Some(']') => {
            parser.input.next();
            Ok(Bracket::List)
        }
        Some('{') => {
            let pattern = parser.next_compound()?;
            parser.input.expect(']')?;
            Ok(Bracket::Pattern(pattern))
        }
        _ => {
            let index = next_int(parser)?;
            parser.input.expect(']')?;
            Ok(Bracket::Index(index))
        }
    }
}

// `name` followed by one or more bracketed steps. A single step is an
// Index, List or ListTag node; more than one is a SubList. A pattern step
// is always the last.
fn brackets(parser: &mut Parser, name: String) -> Result<Node> {
    let mut steps = Vec::new();

    loop {
        match bracket(parser)? {
            Bracket::Index(i) => steps.push(Step::Index(i)),
            Bracket::List => steps.push(Step::List),
            Bracket::Pattern(pattern) => {
                steps.push(Step::ListTag(pattern));
                break;
            }
        }
        if parser.input.peek() != Some('[') {
            break;
        }
    }

    if steps.len() > 1 {
        return Ok(Node::SubList(name, steps));
    }

    Ok(match steps.pop() {
        Some(Step::Index(i)) => Node::Index(Some(name), i),
        Some(Step::ListTag(pattern)) => Node::ListTag(Some(name), pattern),
        _ => Node::List(Some(name)),
    })
}

fn next_int(parser: &mut Parser) -> Result<i32> {
    let token = parser.input.next_string(input::is_bare)?;

    let digits = token.strip_prefix(['+', '-']).unwrap_or(&token);
    let well_formed = !digits.is_empty()
        && digits.chars().all(|c| c.is_ascii_digit())
        && (digits == "0" || !digits.starts_with('0'));
    if !well_formed {
        return Err(parser.input.error("Expected Integer"));
    }

    token
        .parse()
        .map_err(|_| parser.input.error("Index is too big"))
}
