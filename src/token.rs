use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Word(&'a str),
    Wildcard, // `*`
    // Punctations
    Comma,
    Slash,
    OpenParen,
    CloseParen,
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Word(s) => write!(f, "word `{}`", s),
            Token::Wildcard => f.write_str("`*`"),
            Token::Comma => f.write_str("`,`"),
            Token::Slash => f.write_str("`/`"),
            Token::OpenParen => f.write_str("`(`"),
            Token::CloseParen => f.write_str("`)`"),
        }
    }
}

/// A token together with the byte offset it starts at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexeme<'a> {
    pub token: Token<'a>,
    pub offset: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tokens<'a> {
    lexemes: &'a [Lexeme<'a>],
    eof: usize,
}

impl<'a> Tokens<'a> {
    /// `eof` is the byte length of the lexed input; it is reported as the
    /// offset once the stream is exhausted.
    pub fn new(lexemes: &'a [Lexeme<'a>], eof: usize) -> Self {
        Tokens { lexemes, eof }
    }

    pub fn first(&self) -> Option<&'a Lexeme<'a>> {
        self.lexemes.first()
    }

    pub fn offset(&self) -> usize {
        self.first().map_or(self.eof, |l| l.offset)
    }
}

use std::ops::Index;

impl<'a> Index<usize> for Tokens<'a> {
    type Output = Token<'a>;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.lexemes[idx].token
    }
}

use nom::InputLength;
use nom::InputTake;

impl<'a> InputLength for Tokens<'a> {
    fn input_len(&self) -> usize {
        self.lexemes.len()
    }
}

impl<'a> InputTake for Tokens<'a> {
    fn take(&self, count: usize) -> Self {
        Tokens {
            lexemes: &self.lexemes[0..count],
            eof: self.eof,
        }
    }

    fn take_split(&self, count: usize) -> (Self, Self) {
        let (prefix, suffix) = self.lexemes.split_at(count);
        let prefix = Tokens {
            lexemes: prefix,
            eof: self.eof,
        };
        let suffix = Tokens {
            lexemes: suffix,
            eof: self.eof,
        };
        (suffix, prefix)
    }
}

use nom::{InputIter, Needed};
use std::iter::{Enumerate, Map};
use std::slice::Iter;

type TokenOf<'a> = fn(&'a Lexeme<'a>) -> &'a Token<'a>;

impl<'a> InputIter for Tokens<'a> {
    type Item = &'a Token<'a>;
    type Iter = Enumerate<Self::IterElem>;
    type IterElem = Map<Iter<'a, Lexeme<'a>>, TokenOf<'a>>;

    fn iter_indices(&self) -> Self::Iter {
        self.iter_elements().enumerate()
    }

    fn iter_elements(&self) -> Self::IterElem {
        let token_of: TokenOf<'a> = |l| &l.token;
        self.lexemes.iter().map(token_of)
    }

    fn position<P>(&self, pred: P) -> Option<usize>
    where
        P: Fn(Self::Item) -> bool,
    {
        self.lexemes.iter().position(|l| pred(&l.token))
    }

    fn slice_index(&self, count: usize) -> Result<usize, Needed> {
        if self.lexemes.len() >= count {
            Ok(count)
        } else {
            Err(Needed::new(count - self.lexemes.len()))
        }
    }
}

use nom::Slice;
use std::ops::{Range, RangeFrom, RangeFull, RangeTo};

impl<'a> Slice<Range<usize>> for Tokens<'a> {
    fn slice(&self, range: Range<usize>) -> Self {
        Tokens {
            lexemes: &self.lexemes[range],
            eof: self.eof,
        }
    }
}

impl<'a> Slice<RangeTo<usize>> for Tokens<'a> {
    fn slice(&self, range: RangeTo<usize>) -> Self {
        self.slice(0..range.end)
    }
}

impl<'a> Slice<RangeFrom<usize>> for Tokens<'a> {
    fn slice(&self, range: RangeFrom<usize>) -> Self {
        self.slice(range.start..self.lexemes.len())
    }
}

impl<'a> Slice<RangeFull> for Tokens<'a> {
    fn slice(&self, _: RangeFull) -> Self {
        *self
    }
}
