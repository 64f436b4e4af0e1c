use alloc::vec::Vec;
use nom::error::*;

/// The types of errors that may be returned by the header parsers.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum HeaderErrorKind<I> {
    Nom(I, nom::error::ErrorKind),
    // Crc(expected, got)
    Crc(u32, u32),
}

/// The error type returned by all header parsers.
#[derive(Debug, Clone)]
pub struct HeaderError<I> {
    /// What kind of error this is
    pub kind: HeaderErrorKind<I>,
    /// All the context we have accumulated from previous errors.
    pub ctx: Vec<(I, &'static str)>,
}

impl<I> ParseError<I> for HeaderError<I> {
    fn from_error_kind(input: I, kind: ErrorKind) -> Self {
        return HeaderError::new(HeaderErrorKind::Nom(input, kind));
    }

    fn append(_: I, _: ErrorKind, other: Self) -> Self {
        other
    }
}

impl<I> ContextError<I> for HeaderError<I> {
    fn add_context(input: I, ctx: &'static str, mut other: Self) -> Self {
        other.ctx.push((input, ctx));
        return other;
    }
}

impl<I> HeaderError<I> {
    /// Creates a new error.
    pub fn new(kind: HeaderErrorKind<I>) -> Self {
        return HeaderError {
            kind,
            ctx: Vec::new(),
        };
    }

    /// Unwraps a nom error into this error type.
    ///
    /// The header parsers only use complete combinators, so `Incomplete` is
    /// reported as running out of input.
    pub fn from_nom(e: nom::Err<HeaderError<I>>, input: I) -> Self {
        use nom::Err::*;
        match e {
            Incomplete(_) => return HeaderError::from_error_kind(input, ErrorKind::Eof),
            Error(inner) => return inner,
            Failure(inner) => return inner,
        }
    }

    /// The innermost context string, if any was attached.
    pub fn context(&self) -> Option<&'static str> {
        return self.ctx.first().map(|(_, c)| *c);
    }
}
