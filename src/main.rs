use std::io::{self, BufRead, Write};

use bytescript::{
    bad_token_error, display_error,
    errors::errors::Error,
    lexer::{lexer::Lexer, tokens::TokenKind},
    SHELL_NAME,
};
use log::debug;

fn main() -> io::Result<()> {
    env_logger::init();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 || line.trim().is_empty() {
            debug!("Blank line, leaving the shell");
            return Ok(());
        }

        let source = line.trim_end_matches(['\n', '\r']);
        run(source, &mut stdout)?;
    }
}

fn run(source: &str, out: &mut impl Write) -> io::Result<()> {
    let mut lexer = Lexer::new(source, Vec::<Error>::new());
    let mut errors = vec![];

    loop {
        let token = lexer.next_token();
        if token.kind == TokenKind::EndOfFileToken {
            break;
        }

        if let Some(error) = bad_token_error(&token) {
            errors.push(error);
        }

        writeln!(out, "{}", token)?;
    }

    errors.extend(lexer.into_diagnostics());
    errors.sort_by_key(|error| error.get_position());

    for error in &errors {
        display_error(error, source, SHELL_NAME);
    }

    Ok(())
}
