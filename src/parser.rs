use nom::bytes::complete::take;
use nom::combinator::{cut, map, opt};
use nom::error::{ErrorKind, ParseError as NomParseError};
use nom::multi::many0;
use nom::sequence::{pair, preceded, terminated};
use nom::{Err, IResult, InputLength, Slice};

use crate::ast::{Field, Fields, Name, Node, Path, SubSelection, Wildcard, Word};
use crate::error::ParseError;
use crate::token::{Token, Tokens};

pub type Result<'a, O> = IResult<Tokens<'a>, O, Expected<'a>>;

/// What the parser was looking for at the point it gave up.
#[derive(Debug, Clone, PartialEq)]
pub struct Expected<'a> {
    pub input: Tokens<'a>,
    pub what: &'static str,
}

impl<'a> NomParseError<Tokens<'a>> for Expected<'a> {
    fn from_error_kind(input: Tokens<'a>, kind: ErrorKind) -> Self {
        let what = match kind {
            ErrorKind::Eof => "more input",
            _ => "a valid token",
        };
        Expected { input, what }
    }

    fn append(_: Tokens<'a>, _: ErrorKind, other: Self) -> Self {
        other
    }
}

impl From<Expected<'_>> for ParseError {
    fn from(e: Expected<'_>) -> Self {
        let found = match e.input.first() {
            Some(lexeme) => lexeme.token.to_string(),
            None => "end of input".to_owned(),
        };
        ParseError::new(e.input.offset(), e.what, found)
    }
}

fn describe(t: Token) -> &'static str {
    match t {
        Token::Word(_) => "a field name",
        Token::Wildcard => "`*`",
        Token::Comma => "`,`",
        Token::Slash => "`/`",
        Token::OpenParen => "`(`",
        Token::CloseParen => "`)`",
    }
}

fn token<'a>(t: Token<'a>) -> impl Fn(Tokens<'a>) -> Result<'a, Token<'a>> {
    move |i: Tokens<'a>| match i.first() {
        Some(lexeme) if lexeme.token == t => Ok((i.slice(1..), lexeme.token)),
        _ => Err(Err::Error(Expected {
            input: i,
            what: describe(t),
        })),
    }
}

fn name(input: Tokens) -> Result<Name> {
    let expected = || {
        Err::Error(Expected {
            input,
            what: "a field name",
        })
    };
    let (i, ret) = take(1usize)(input).map_err(|_: Err<Expected>| expected())?;
    match ret[0] {
        Token::Word(s) => Ok((i, Name::Word(Word::new_unchecked(s)))),
        Token::Wildcard => Ok((i, Name::Wildcard(Wildcard))),
        _ => Err(expected()),
    }
}

fn field(input: Tokens) -> Result<Field> {
    let body = preceded(
        token(Token::OpenParen),
        cut(terminated(fields, token(Token::CloseParen))),
    );
    map(pair(name, opt(body)), |(name, body)| match body {
        Some(body) => Field::SubSelection(SubSelection::new(name, body)),
        None => Field::Name(name),
    })(input)
}

/// `a/b/c`, folded to the left.
fn selector(input: Tokens) -> Result<Node> {
    let suffixes = many0(preceded(token(Token::Slash), cut(field)));
    map(pair(field, suffixes), |(head, suffixes)| {
        suffixes.into_iter().fold(Node::Field(head), |prefix, suffix| {
            Node::from(Path::new(prefix, suffix))
        })
    })(input)
}

fn fields(input: Tokens) -> Result<Fields> {
    let rest = many0(preceded(token(Token::Comma), cut(selector)));
    map(pair(selector, rest), |(first, rest)| Fields::from_parts(first, rest))(input)
}

/// Parses the whole stream as one field list.
pub fn parse(input: Tokens) -> std::result::Result<Fields, Expected> {
    match fields(input) {
        Ok((rest, fields)) if rest.input_len() == 0 => Ok(fields),
        Ok((rest, _)) => Err(Expected {
            input: rest,
            what: "`,`, `/` or end of input",
        }),
        Err(Err::Error(e)) | Err(Err::Failure(e)) => Err(e),
        Err(Err::Incomplete(_)) => Err(Expected {
            input,
            what: "more input",
        }),
    }
}


// vim: fdm=marker
