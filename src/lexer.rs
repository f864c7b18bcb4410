use chumsky::prelude::*;

/// Comment marker. A line starting with `$` is ignored unless it starts
/// with `$print`, which falls through to ordinary tokenization.
const COMMENT_MARKER: char = '$';
const PRINT_COMMAND: &str = "print";

fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    text.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// Scanner for the general token form: a `"` at a token boundary opens a
/// quoted token that runs through the next `"` inclusive (or end of line if
/// unterminated); any other run of non-whitespace characters is one bare
/// token, even if it contains a `"` mid-run.
fn word_scanner<'a>() -> impl Parser<'a, &'a str, Vec<String>, extra::Err<Simple<'a, char>>> {
    let quoted = just('"')
        .then(none_of("\"").repeated())
        .then(just('"').or_not())
        .to_slice()
        .map(|s: &str| s.to_string());

    let bare = any()
        .filter(|c: &char| !c.is_whitespace() && *c != '"')
        .then(any().filter(|c: &char| !c.is_whitespace()).repeated())
        .to_slice()
        .map(|s: &str| s.to_string());

    quoted
        .or(bare)
        .padded()
        .repeated()
        .collect()
        .then_ignore(end())
}

/// Split one line of source into tokens.
///
/// Comment lines and blank lines yield an empty sequence; callers treat that
/// as a no-op. A `print` line is special-cased: everything after the command
/// word becomes a single verbatim token so interpolation markers and embedded
/// spaces survive to the print handler.
pub fn tokenize(line: &str) -> Vec<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    if trimmed.starts_with(COMMENT_MARKER) && !starts_with_ignore_case(trimmed, "$print") {
        return Vec::new();
    }

    if starts_with_ignore_case(trimmed, PRINT_COMMAND) {
        let rest = trimmed[PRINT_COMMAND.len()..].trim();
        return if rest.is_empty() {
            vec![PRINT_COMMAND.to_string()]
        } else {
            vec![PRINT_COMMAND.to_string(), rest.to_string()]
        };
    }

    word_scanner()
        .parse(trimmed)
        .into_output()
        .unwrap_or_default()
}
