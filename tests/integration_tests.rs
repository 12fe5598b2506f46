//! Integration tests for whole-line tokenization.
//!
//! These tests drive the lexer through the public API the shell uses and
//! check the properties every scan must hold: full coverage of the input,
//! monotonic positions and a repeatable end of input.

use bytescript::{
    errors::{
        diagnostics::LogDiagnostics,
        errors::{Error, ErrorImpl},
    },
    lexer::{
        lexer::{tokenize, Lexer},
        tokens::{Token, TokenKind},
    },
};

fn significant(tokens: &[Token]) -> Vec<(TokenKind, &str, Option<i32>)> {
    tokens
        .iter()
        .filter(|token| token.kind != TokenKind::WhitespaceToken)
        .map(|token| (token.kind, token.text.as_str(), token.value))
        .collect()
}

#[test]
fn test_let_statement() {
    let tokens = tokenize("let x = 12 + 3", Vec::<Error>::new());

    assert_eq!(
        significant(&tokens),
        vec![
            (TokenKind::LetKeyword, "let", None),
            (TokenKind::IdentifierToken, "x", None),
            (TokenKind::EqualsToken, "=", None),
            (TokenKind::NumberToken, "12", Some(12)),
            (TokenKind::PlusToken, "+", None),
            (TokenKind::NumberToken, "3", Some(3)),
            (TokenKind::EndOfFileToken, "", None),
        ]
    );
}

#[test]
fn test_condition_with_strings_and_logic() {
    let tokens = tokenize(r#"if (a == "yes" || !done) && b != 4 "#, Vec::<Error>::new());

    assert_eq!(
        significant(&tokens),
        vec![
            (TokenKind::IfKeyword, "if", None),
            (TokenKind::OpenParenthesisToken, "(", None),
            (TokenKind::IdentifierToken, "a", None),
            (TokenKind::EqualsEqualsToken, "==", None),
            (TokenKind::StringToken, "yes", None),
            (TokenKind::PipePipeToken, "||", None),
            (TokenKind::BangToken, "!", None),
            (TokenKind::IdentifierToken, "done", None),
            (TokenKind::CloseParenthesisToken, ")", None),
            (TokenKind::AmpersandAmpersandToken, "&&", None),
            (TokenKind::IdentifierToken, "b", None),
            (TokenKind::BangEqualToken, "!=", None),
            (TokenKind::NumberToken, "4", Some(4)),
            (TokenKind::EndOfFileToken, "", None),
        ]
    );
}

#[test]
fn test_texts_cover_the_input() {
    let sources = [
        "let x = 12 + 3",
        "while (i != 10) i = i * 2 / 1 - 0",
        "12a & | @ #\t_x9  ",
        "var 9999999999999 break continue else false for true",
        "",
    ];

    for source in sources {
        let tokens = tokenize(source, Vec::<Error>::new());
        let covered: String = tokens.iter().map(|token| token.text.as_str()).collect();

        assert_eq!(covered, source);
        assert_eq!(
            tokens.iter().filter(|token| token.kind == TokenKind::EndOfFileToken).count(),
            1
        );
    }
}

#[test]
fn test_positions_are_monotonic() {
    let source = "for x = \"a\nb\" 1 (2) 3";
    let tokens = tokenize(source, Vec::<Error>::new());

    for pair in tokens.windows(2) {
        assert!(pair[0].position <= pair[1].position);
    }
    assert_eq!(tokens.last().map(|token| token.position), Some(source.len()));
}

#[test]
fn test_end_of_file_is_stable() {
    let mut lexer = Lexer::new("1 ", LogDiagnostics);

    assert_eq!(lexer.next_token().kind, TokenKind::NumberToken);
    assert_eq!(lexer.next_token().kind, TokenKind::WhitespaceToken);

    let first = lexer.next_token();
    let second = lexer.next_token();
    assert_eq!(first.kind, TokenKind::EndOfFileToken);
    assert_eq!(first, second);
    assert_eq!(first.position, 2);
}

#[test]
fn test_diagnostics_do_not_stop_the_scan() {
    let mut diagnostics: Vec<Error> = vec![];
    let tokens = tokenize("3000000000 + 4000000000 + 5", &mut diagnostics);

    assert_eq!(
        significant(&tokens),
        vec![
            (TokenKind::NumberToken, "3000000000", None),
            (TokenKind::PlusToken, "+", None),
            (TokenKind::NumberToken, "4000000000", None),
            (TokenKind::PlusToken, "+", None),
            (TokenKind::NumberToken, "5", Some(5)),
            (TokenKind::EndOfFileToken, "", None),
        ]
    );

    let positions: Vec<usize> = diagnostics.iter().map(|error| error.get_position()).collect();
    assert_eq!(positions, vec![0, 13]);
    assert!(diagnostics
        .iter()
        .all(|error| matches!(error.get_error(), ErrorImpl::NumberParseError { .. })));
}

#[test]
fn test_tokens_outlive_the_source() {
    let tokens = {
        let source = String::from("let y");
        tokenize(&source, Vec::<Error>::new())
    };

    assert_eq!(tokens[0].kind, TokenKind::LetKeyword);
    assert_eq!(tokens[2].text, "y");
}
