use nom::branch::alt;
use nom::bytes::complete::take_till1;
use nom::character::complete::char;
use nom::combinator::{all_consuming, map};
use nom::multi::many0;
use nom::IResult;

use crate::token::{Lexeme, Token};

pub type Result<'a, O> = IResult<&'a str, O>;

macro_rules! map_val {
    ($c:expr, $t:expr) => {
        map($c, |_| $t)
    };
}

/// Characters that end a word.
pub const RESERVED: [char; 5] = [',', '/', '(', ')', '*'];

pub fn is_reserved(c: char) -> bool {
    RESERVED.contains(&c)
}

#[inline]
fn word(input: &str) -> Result<Token> {
    map(take_till1(is_reserved), Token::Word)(input)
}

#[inline]
fn punctations(input: &str) -> Result<Token> {
    alt((
        map_val!(char(','), Token::Comma),
        map_val!(char('/'), Token::Slash),
        map_val!(char('('), Token::OpenParen),
        map_val!(char(')'), Token::CloseParen),
        map_val!(char('*'), Token::Wildcard),
    ))(input)
}

#[inline]
fn token(input: &str) -> Result<Token> {
    alt((word, punctations))(input)
}

fn lexeme<'a>(source: &'a str) -> impl FnMut(&'a str) -> Result<'a, Lexeme<'a>> {
    move |input| {
        let offset = source.len() - input.len();
        map(token, move |token| Lexeme { token, offset })(input)
    }
}

pub fn parse(input: &str) -> Result<Vec<Lexeme>> {
    all_consuming(many0(lexeme(input)))(input)
}
