//! Classifies an unquoted SNBT token as a boolean, an integer, a decimal
//! number or a plain string.
//!
//! The order matters: `true`/`false` first, then integers (optionally
//! suffixed `b`, `s` or `l`), then the three decimal forms. Anything left is
//! a string. Integers that do not fit their kind also become strings, holding
//! the original text.
use nom::{
    branch::alt,
    bytes::complete::{tag, tag_no_case},
    character::complete::{char, digit0, digit1, one_of},
    combinator::{all_consuming, map, opt, recognize},
    sequence::{pair, tuple},
    IResult,
};
use treenbt::Tag;

pub(crate) fn classify(token: &str) -> Tag {
    if let Ok((_, b)) = all_consuming(boolean)(token) {
        return Tag::Byte(i8::from(b));
    }

    if let Ok((_, (digits, suffix))) = all_consuming(integer)(token) {
        let tag = match suffix.map(|c| c.to_ascii_lowercase()) {
            Some('b') => digits.parse().ok().map(Tag::Byte),
            Some('s') => digits.parse().ok().map(Tag::Short),
            Some('l') => digits.parse().ok().map(Tag::Long),
            _ => digits.parse().ok().map(Tag::Int),
        };
        return tag.unwrap_or_else(|| Tag::String(token.to_owned()));
    }

    if let Ok((_, (digits, suffix))) = all_consuming(decimal)(token) {
        let tag = match suffix.map(|c| c.to_ascii_lowercase()) {
            Some('f') => digits.parse().ok().map(Tag::Float),
            _ => digits.parse().ok().map(Tag::Double),
        };
        // "." and friends match the pattern but are not numbers.
        return tag.unwrap_or_else(|| Tag::String(token.to_owned()));
    }

    Tag::String(token.to_owned())
}

fn boolean(input: &str) -> IResult<&str, bool> {
    alt((
        map(tag_no_case("true"), |_| true),
        map(tag_no_case("false"), |_| false),
    ))(input)
}

fn sign(input: &str) -> IResult<&str, Option<char>> {
    opt(one_of("+-"))(input)
}

// a single 0, or a non-zero digit followed by any digits
fn natural(input: &str) -> IResult<&str, &str> {
    alt((recognize(pair(one_of("123456789"), digit0)), tag("0")))(input)
}

fn exponent(input: &str) -> IResult<&str, &str> {
    recognize(tuple((one_of("eE"), sign, digit1)))(input)
}

fn integer(input: &str) -> IResult<&str, (&str, Option<char>)> {
    pair(recognize(pair(sign, natural)), opt(one_of("bBsSlL")))(input)
}

fn decimal(input: &str) -> IResult<&str, (&str, Option<char>)> {
    alt((
        // 12f, with a mandatory suffix
        pair(recognize(pair(sign, digit1)), map(one_of("fFdD"), Some)),
        // 12e3
        pair(
            recognize(tuple((sign, digit1, exponent))),
            opt(one_of("fFdD")),
        ),
        // 1.5, .5, 1., 1.5e3
        pair(
            recognize(tuple((sign, opt(natural), char('.'), digit0, opt(exponent)))),
            opt(one_of("fFdD")),
        ),
    ))(input)
}
