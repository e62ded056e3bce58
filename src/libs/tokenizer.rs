// Splits recipe command templates into argv-style tokens.
//
// Whitespace and commas separate tokens. A double-quoted segment is part of the
// surrounding token even when it contains separators, and a backslash inside
// quotes escapes the next character. Quote delimiters stay in the token
// verbatim; `unquote` strips them right before a process is spawned.

use crate::schemas::errors::{Result, SetupError};

/// Characters that end a token when they appear outside of quotes.
pub fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || ch == ','
}

/// Tokenizes `command` into its maximal non-separator runs.
///
/// ```text
/// "build-tools;28.0.3" "emulator"  ->  ["\"build-tools;28.0.3\"", "\"emulator\""]
/// a,b c                            ->  ["a", "b", "c"]
/// ```
///
/// Adjacent separators collapse, so no empty token is ever produced, and an
/// empty input yields an empty vector. A quote that is never closed is reported
/// as [`SetupError::UnbalancedQuote`].
pub fn tokenize(command: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut escaped = false;

    for ch in command.chars() {
        match (ch, quoted, escaped) {
            // Anything after a backslash inside quotes is literal.
            (ch, true, true) => {
                current.push(ch);
                escaped = false;
            }
            ('\\', true, false) => {
                current.push(ch);
                escaped = true;
            }
            ('"', true, false) => {
                current.push(ch);
                quoted = false;
            }
            ('"', false, _) => {
                current.push(ch);
                quoted = true;
            }
            (ch, false, _) if is_separator(ch) => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            (ch, _, _) => current.push(ch),
        }
    }

    if quoted {
        return Err(SetupError::UnbalancedQuote {
            command: command.to_string(),
        });
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    Ok(tokens)
}

/// Turns a token produced by [`tokenize`] into the literal argument a process
/// should receive: quote delimiters are dropped and `\x` inside quotes becomes `x`.
/// Backslashes outside quotes are kept as they are.
pub fn unquote(token: &str) -> String {
    let mut out = String::with_capacity(token.len());
    let mut quoted = false;
    let mut escaped = false;

    for ch in token.chars() {
        match (ch, quoted, escaped) {
            (ch, true, true) => {
                out.push(ch);
                escaped = false;
            }
            ('\\', true, false) => escaped = true,
            ('"', _, false) => quoted = !quoted,
            (ch, _, _) => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn strings(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn quoted_segments_are_single_tokens() {
        let tokens = tokenize(r#""build-tools;28.0.3" "emulator""#).unwrap();
        assert_eq!(tokens, strings(&[r#""build-tools;28.0.3""#, r#""emulator""#]));
    }

    #[test]
    fn commas_and_spaces_both_separate() {
        assert_eq!(tokenize("a,b c").unwrap(), strings(&["a", "b", "c"]));
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize("  ,, \t ").unwrap().is_empty());
    }

    #[test]
    fn escaped_quote_does_not_close_segment() {
        let tokens = tokenize(r#""a\"b" c"#).unwrap();
        assert_eq!(tokens, strings(&[r#""a\"b""#, "c"]));
    }

    #[test]
    fn separators_inside_quotes_are_kept() {
        let tokens = tokenize(r#"bash -c "source ~/.nvm/nvm.sh && nvm install node""#).unwrap();
        assert_eq!(
            tokens,
            strings(&["bash", "-c", r#""source ~/.nvm/nvm.sh && nvm install node""#])
        );
    }

    #[test]
    fn quotes_glue_onto_surrounding_text() {
        let tokens = tokenize(r#"--name="two words",next"#).unwrap();
        assert_eq!(tokens, strings(&[r#"--name="two words""#, "next"]));
    }

    #[test]
    fn adjacent_separators_collapse() {
        assert_eq!(tokenize("a ,, b\t\nc").unwrap(), strings(&["a", "b", "c"]));
    }

    #[test]
    fn unbalanced_quote_is_rejected() {
        let err = tokenize(r#"echo "oops"#).unwrap_err();
        assert!(matches!(err, SetupError::UnbalancedQuote { .. }));
    }

    #[test]
    fn unquote_strips_delimiters_and_escapes() {
        assert_eq!(unquote(r#""build-tools;28.0.3""#), "build-tools;28.0.3");
        assert_eq!(unquote(r#""a\"b""#), r#"a"b"#);
        assert_eq!(unquote(r#"--name="two words""#), "--name=two words");
        assert_eq!(unquote(r"C:\plain"), r"C:\plain");
    }

    proptest! {
        #[test]
        fn tokens_are_never_empty_and_survive_rejoining(input in "[a-z\" ,\\\\]{0,24}") {
            if let Ok(tokens) = tokenize(&input) {
                prop_assert!(tokens.iter().all(|t| !t.is_empty()));
                let rejoined = tokens.join(" ");
                prop_assert_eq!(tokenize(&rejoined).unwrap(), tokens);
            }
        }
    }
}
