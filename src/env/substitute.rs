//! Resolution of scanned references against an [`EnvSource`]

use super::scanner::{scan, Token};
use super::{lookup, normalize_value, EnvSource};
use crate::domain::{ConfigError, Result};

/// Replaces every resolvable reference in `input`
///
/// References whose variable is unset (or empty) are left untouched.
/// Replacement is a single left-to-right pass, so substituted text is never
/// rescanned and a longer reference always wins over a shorter one sharing
/// its prefix (`$FOO_DIR` before `$FOO`).
pub fn substitute_optional<E: EnvSource + ?Sized>(input: &str, env: &E) -> String {
    let mut resolved: Vec<(Token, String)> = Vec::new();
    for token in scan(input) {
        match lookup(env, token.var_name()) {
            Some(value) => resolved.push((token, normalize_value(&value))),
            None => tracing::trace!(token = %token, "Environment reference left unresolved"),
        }
    }

    if resolved.is_empty() {
        return input.to_string();
    }
    resolved.sort_by(|(a, _), (b, _)| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    let mut output = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(pos) = rest.find('$') {
        output.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        match resolved
            .iter()
            .find(|(token, _)| tail.starts_with(token.as_str()))
        {
            Some((token, value)) => {
                output.push_str(value);
                rest = &tail[token.len()..];
            }
            None => {
                output.push('$');
                rest = &tail[1..];
            }
        }
    }
    output.push_str(rest);
    output
}

/// Replaces the literal `$<var_name>` with the value of `var_name`
///
/// Unlike [`substitute_optional`] this targets one named variable and does
/// not scan. Fails with [`ConfigError::EnvVarNotFound`] when the variable is
/// unset or empty.
pub fn substitute_required<E: EnvSource + ?Sized>(
    input: &str,
    var_name: &str,
    env: &E,
) -> Result<String> {
    let value =
        lookup(env, var_name).ok_or_else(|| ConfigError::EnvVarNotFound(var_name.to_string()))?;
    Ok(input.replace(&format!("${var_name}"), &normalize_value(&value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_all_occurrences_replaced_and_unset_skipped() {
        let env = env(&[("FOO", "bar")]);
        assert_eq!(substitute_optional("$FOO/$FOO/$BAR", &env), "bar/bar/$BAR");
    }

    #[test]
    fn test_bracketed_with_backslash_normalization() {
        let env = env(&[("FOO", r"C:\dir")]);
        assert_eq!(substitute_optional("$[FOO]_x", &env), "C:/dir_x");
    }

    #[test]
    fn test_bare_and_bracketed_forms_of_same_variable() {
        let env = env(&[("HOME", "/home/app")]);
        assert_eq!(
            substitute_optional("$HOME/a:$[HOME]_b", &env),
            "/home/app/a:/home/app_b"
        );
    }

    #[test]
    fn test_empty_variable_is_skipped() {
        let env = env(&[("EMPTY", "")]);
        assert_eq!(substitute_optional("x$EMPTY", &env), "x$EMPTY");
    }

    #[test]
    fn test_longer_reference_wins_over_prefix() {
        let env = env(&[("FOO", "short"), ("FOO_DIR", "long")]);
        assert_eq!(substitute_optional("$FOO_DIR|$FOO", &env), "long|short");
    }

    #[test]
    fn test_substituted_text_not_rescanned() {
        let env = env(&[("A", "$B"), ("B", "oops")]);
        assert_eq!(substitute_optional("$A", &env), "$B");
    }

    #[test]
    fn test_literal_occurrences_inside_longer_words_are_replaced() {
        // "$FOOd" scans as "$FOO", and that literal is replaced wherever it occurs
        let env = env(&[("FOO", "x")]);
        assert_eq!(substitute_optional("$FOOd", &env), "xd");
    }

    #[test]
    fn test_doubled_dollar_left_as_written() {
        let env = env(&[("FOO", "f"), ("BAR", "b")]);
        assert_eq!(substitute_optional("$$FOO", &env), "$$FOO");
        assert_eq!(substitute_optional("$FOO$BAR", &env), "f$BAR");
    }

    #[test]
    fn test_no_references_returns_input() {
        let env = env(&[]);
        assert_eq!(substitute_optional("plain $ text", &env), "plain $ text");
    }

    #[test]
    fn test_idempotent_once_resolved() {
        let env = env(&[("FOO", "bar"), ("BAZ", r"a\b")]);
        let once = substitute_optional("$FOO-$[BAZ]", &env);
        assert_eq!(substitute_optional(&once, &env), once);
    }

    #[test]
    fn test_required_replaces_named_variable() {
        let env = env(&[("SERVER_HOME", r"D:\srv")]);
        let result = substitute_required("$SERVER_HOME/conf", "SERVER_HOME", &env).unwrap();
        assert_eq!(result, "D:/srv/conf");
    }

    #[test]
    fn test_required_fails_when_unset_or_empty() {
        let env = env(&[("EMPTY", "")]);
        for name in ["MISSING", "EMPTY"] {
            let err = substitute_required("$MISSING", name, &env).unwrap_err();
            assert!(matches!(err, ConfigError::EnvVarNotFound(ref n) if n == name));
        }
    }

    #[test]
    fn test_required_ignores_other_references() {
        let env = env(&[("A", "1"), ("B", "2")]);
        assert_eq!(substitute_required("$A $B", "A", &env).unwrap(), "1 $B");
    }
}
