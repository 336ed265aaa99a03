//! Scan command implementation

use crate::domain::Result;
use crate::env::{scan, substitute_optional, substitute_required, EnvSource, ProcessEnv};
use clap::Args;

/// Arguments for the scan command
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Text to scan, e.g. '$[SERVER_HOME]/conf'
    pub text: String,

    /// Substitute only this variable and fail if it is unset
    #[arg(long, value_name = "VAR")]
    pub require: Option<String>,
}

impl ScanArgs {
    /// Execute the scan command
    pub fn execute(&self) -> anyhow::Result<i32> {
        match self.report(&ProcessEnv) {
            Ok(report) => {
                println!("{report}");
                Ok(0)
            }
            Err(e) => {
                eprintln!("❌ {e}");
                Ok(super::EXIT_CONFIG_ERROR)
            }
        }
    }

    fn report<E: EnvSource + ?Sized>(&self, env: &E) -> Result<String> {
        let mut lines = Vec::new();
        for token in scan(&self.text) {
            let status = match env.var(token.var_name()) {
                Some(value) if !value.is_empty() => "set",
                _ => "unset",
            };
            lines.push(format!("{token}\t{}\t{status}", token.var_name()));
        }

        let result = match &self.require {
            Some(name) => substitute_required(&self.text, name, env)?,
            None => substitute_optional(&self.text, env),
        };
        lines.push(format!("=> {result}"));
        Ok(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConfigError;
    use std::collections::HashMap;

    fn args(text: &str, require: Option<&str>) -> ScanArgs {
        ScanArgs {
            text: text.to_string(),
            require: require.map(str::to_string),
        }
    }

    #[test]
    fn test_report_lists_tokens_and_result() {
        let env = HashMap::from([("FOO".to_string(), "bar".to_string())]);
        let report = args("$FOO/$[BAR]", None).report(&env).unwrap();
        assert_eq!(report, "$FOO\tFOO\tset\n$[BAR]\tBAR\tunset\n=> bar/$[BAR]");
    }

    #[test]
    fn test_report_require_missing() {
        let env = HashMap::<String, String>::new();
        let err = args("$FOO", Some("FOO")).report(&env).unwrap_err();
        assert!(matches!(err, ConfigError::EnvVarNotFound(_)));
    }
}
