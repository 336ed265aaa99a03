//! Single-pass scanner for `$NAME` and `$[NAME]` references

use std::collections::BTreeSet;
use std::fmt;

const PREFIX: char = '$';
const OPEN: char = '[';
const CLOSE: char = ']';

/// A reference substring exactly as it appears in the scanned text,
/// e.g. `$HOME` or `$[HOME]`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Token(String);

impl Token {
    /// The literal text of the reference
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in bytes of the literal text
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false, a token holds at least `$` and one name character
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The referenced variable name, without `$`, `[` and `]`
    pub fn var_name(&self) -> &str {
        self.0
            .trim_start_matches(PREFIX)
            .trim_start_matches(OPEN)
            .trim_end_matches(CLOSE)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Copy)]
enum State {
    Idle,
    Bare { start: usize },
    Bracketed { start: usize },
}

fn is_name_char(ch: char) -> bool {
    ch == '_' || ch.is_ascii_uppercase()
}

/// Returns the distinct references found in `input`
///
/// A bare reference ends at the first character outside `A-Z`/`_` or at the
/// end of input. A bracketed reference must be closed by `]`; anything else
/// abandons it. A `$` that ends a reference is consumed with it, so `$$FOO`
/// holds no reference and `$FOO$BAR` holds only `$FOO`.
pub fn scan(input: &str) -> BTreeSet<Token> {
    let mut tokens = BTreeSet::new();
    let mut emit = |start: usize, end: usize| {
        tokens.insert(Token(input[start..end].to_string()));
    };

    let mut state = State::Idle;
    for (i, ch) in input.char_indices() {
        state = match state {
            State::Idle if ch == PREFIX => State::Bare { start: i },
            State::Idle => State::Idle,
            State::Bare { start } if is_name_char(ch) => State::Bare { start },
            State::Bare { start } if ch == OPEN && i == start + 1 => State::Bracketed { start },
            State::Bare { start } => {
                if i > start + 1 {
                    emit(start, i);
                }
                State::Idle
            }
            State::Bracketed { start } if is_name_char(ch) => State::Bracketed { start },
            State::Bracketed { start } if ch == CLOSE => {
                if i > start + 2 {
                    emit(start, i + 1);
                }
                State::Idle
            }
            State::Bracketed { .. } => State::Idle,
        };
    }

    // bare references may run to the end of input, bracketed ones may not
    if let State::Bare { start } = state {
        if input.len() > start + 1 {
            emit(start, input.len());
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn scanned(input: &str) -> Vec<String> {
        scan(input).into_iter().map(|t| t.0).collect()
    }

    #[test]
    fn test_scan_dedups() {
        assert_eq!(scanned("$FOO/$FOO/$BAR"), vec!["$BAR", "$FOO"]);
    }

    #[test_case("no references here", &[] ; "plain text")]
    #[test_case("", &[] ; "empty input")]
    #[test_case("$", &[] ; "lone dollar")]
    #[test_case("cost: $5", &[] ; "digit after dollar")]
    #[test_case("$lower", &[] ; "lower case name")]
    #[test_case("$HOME", &["$HOME"] ; "bare at end of input")]
    #[test_case("$HOME/bin", &["$HOME"] ; "bare terminated")]
    #[test_case("$SERVER_HOME.", &["$SERVER_HOME"] ; "underscore in name")]
    #[test_case("$_", &["$_"] ; "underscore only")]
    #[test_case("$[FOO]_x", &["$[FOO]"] ; "bracketed")]
    #[test_case("$[ORG_ID]", &["$[ORG_ID]"] ; "bracketed at end")]
    #[test_case("$[FOO", &[] ; "unclosed bracket")]
    #[test_case("$[FOO/bar]", &[] ; "bracket broken by other char")]
    #[test_case("$[]", &[] ; "empty brackets")]
    #[test_case("$FOO[1]", &["$FOO"] ; "bracket after name ends bare")]
    #[test_case("$FOO$BAR", &["$FOO"] ; "dollar ending a reference is consumed")]
    #[test_case("$$FOO", &[] ; "doubled dollar")]
    #[test_case("$[A$B]", &[] ; "dollar inside brackets")]
    #[test_case("$[A]$B", &["$B", "$[A]"] ; "bracketed then bare")]
    #[test_case("$FOO $BAR", &["$BAR", "$FOO"] ; "separated references")]
    #[test_case("$HOMEdir", &["$HOME"] ; "lower case terminates")]
    #[test_case("é$FOO/ü", &["$FOO"] ; "multibyte neighbours")]
    fn test_scan_cases(input: &str, expected: &[&str]) {
        assert_eq!(scanned(input), expected);
    }

    #[test]
    fn test_var_name() {
        let tokens: Vec<Token> = scan("$[FOO] $BAR").into_iter().collect();
        let names: Vec<&str> = tokens.iter().map(Token::var_name).collect();
        assert_eq!(names, vec!["BAR", "FOO"]);
    }
}
