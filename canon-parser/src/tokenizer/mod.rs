pub mod token;

use canon_error::Error;
use crate::parser::error::kind;
use log::trace;
use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<'_, TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the non-whitespace tokens produced by the tokenizer,
/// followed by a single [`TokenKind::End`] token.
///
/// Returns an error pointing at the first character that does not begin any token, or at two
/// number literals written directly next to each other, such as `1.5.2`.
pub fn tokenize_complete(input: &str) -> Result<Box<[Token<'_>]>, Error> {
    let mut lexer = tokenize(input);
    let mut tokens: Vec<Token> = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(kind) if kind.is_whitespace() => continue,
            Ok(kind) => {
                // `1.5.2` lexes as `1.5` and `.2`, which would otherwise be multiplied
                let touching = tokens.last().filter(|prev| {
                    kind == TokenKind::Number && prev.kind == TokenKind::Number && prev.span.end == span.start
                });
                if let Some(prev) = touching {
                    return Err(Error::new(vec![prev.span.start..span.end], kind::InvalidNumber));
                }

                tokens.push(Token {
                    span,
                    kind,
                    lexeme: lexer.slice(),
                });
            },
            Err(()) => {
                // report only the first character, the lexer may have consumed more
                let character = lexer.slice().chars().next().unwrap_or_default();
                let span = span.start..span.start + character.len_utf8();
                return Err(Error::new(vec![span], kind::UnrecognizedChar { character }));
            },
        }
    }

    tokens.push(Token {
        span: input.len()..input.len(),
        kind: TokenKind::End,
        lexeme: "",
    });
    trace!("tokenized {:?} into {} tokens", input, tokens.len());

    Ok(tokens.into_boxed_slice())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    /// Compares the tokens produced by the tokenizer to the raw expected tokens.
    fn compare_tokens<'source, const N: usize>(input: &'source str, expected: [(TokenKind, &'source str); N]) {
        let mut lexer = tokenize(input);

        for (expected_kind, expected_lexeme) in expected.into_iter() {
            assert_eq!(lexer.next(), Some(Ok(expected_kind)));
            assert_eq!(lexer.slice(), expected_lexeme);
        }

        assert_eq!(lexer.next(), None);
    }

    /// Returns the kinds of the tokens produced by [`tokenize_complete`].
    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize_complete(input).unwrap().iter().map(|token| token.kind).collect()
    }

    #[test]
    fn basic_expr() {
        compare_tokens(
            "1 + 2",
            [
                (TokenKind::Number, "1"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Add, "+"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Number, "2"),
            ],
        );
    }

    #[test]
    fn implicit_multiplication() {
        compare_tokens(
            "3.5xy-(t)",
            [
                (TokenKind::Number, "3.5"),
                (TokenKind::Variable, "x"),
                (TokenKind::Variable, "y"),
                (TokenKind::Sub, "-"),
                (TokenKind::OpenParen, "("),
                (TokenKind::Variable, "t"),
                (TokenKind::CloseParen, ")"),
            ],
        );
    }

    #[test]
    fn both_exponent_spellings() {
        compare_tokens(
            "x^2 = y**2",
            [
                (TokenKind::Variable, "x"),
                (TokenKind::Exp, "^"),
                (TokenKind::Number, "2"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Equals, "="),
                (TokenKind::Whitespace, " "),
                (TokenKind::Variable, "y"),
                (TokenKind::Exp, "**"),
                (TokenKind::Number, "2"),
            ],
        );
    }

    #[test]
    fn number_forms() {
        compare_tokens(
            "1 1. 1.25 .5 66e10 2.5E-3",
            [
                (TokenKind::Number, "1"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Number, "1."),
                (TokenKind::Whitespace, " "),
                (TokenKind::Number, "1.25"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Number, ".5"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Number, "66e10"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Number, "2.5E-3"),
            ],
        );
    }

    #[test]
    fn complete_skips_whitespace_and_ends() {
        assert_eq!(
            kinds(" x *\ty = 1 "),
            vec![
                TokenKind::Variable,
                TokenKind::Mul,
                TokenKind::Variable,
                TokenKind::Equals,
                TokenKind::Number,
                TokenKind::End,
            ],
        );

        let tokens = tokenize_complete("x = 1 ").unwrap();
        assert_eq!(tokens.last().unwrap().span, 6..6);
    }

    #[test]
    fn empty_input() {
        assert_eq!(kinds(""), vec![TokenKind::End]);
    }

    #[test]
    fn unknown_variable() {
        let err = tokenize_complete("2x + 3a = 0").unwrap_err();
        assert_eq!(err.spans, vec![6..7]);
        assert_eq!(
            err.downcast_ref::<kind::UnrecognizedChar>(),
            Some(&kind::UnrecognizedChar { character: 'a' }),
        );
    }

    #[test]
    fn touching_numbers() {
        for (input, span) in [
            ("1.5.2 = 0", 0..5),
            ("x = 2 + 1..5", 8..12),
            ("2.5e3.1 = 0", 0..7),
        ] {
            let err = tokenize_complete(input).unwrap_err();
            assert!(err.is::<kind::InvalidNumber>(), "{}", input);
            assert_eq!(err.spans, vec![span], "{}", input);
        }

        // separated by whitespace, the numbers are multiplied
        assert_eq!(kinds("1.5 .2"), vec![TokenKind::Number, TokenKind::Number, TokenKind::End]);
    }

    #[test]
    fn unknown_symbol() {
        let err = tokenize_complete("x / 2 = 1").unwrap_err();
        assert_eq!(err.position(), 2);
        assert!(err.is::<kind::UnrecognizedChar>());
    }
}
