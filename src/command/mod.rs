use std::path::Path;

use indexmap::IndexMap;

use crate::types::S3cmdOperation;

pub mod runner;

const OPTION_PREFIX: &str = "--";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Flag,
    Value(String),
    Values(Vec<String>),
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Value(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Value(value)
    }
}

impl From<Vec<String>> for OptionValue {
    fn from(values: Vec<String>) -> Self {
        let mut unique_values: Vec<String> = Vec::with_capacity(values.len());
        for value in values {
            if !unique_values.contains(&value) {
                unique_values.push(value);
            }
        }
        OptionValue::Values(unique_values)
    }
}

/// Options and positional parameters of one s3cmd call.
///
/// Options are keyed by name, setting an existing key replaces its value in place.
/// Parameters keep their order and are never duplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandInvocation {
    options: IndexMap<String, OptionValue>,
    parameters: Vec<String>,
}

impl CommandInvocation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_option(&mut self, key: &str, value: impl Into<OptionValue>) -> &mut Self {
        self.options.insert(normalize_key(key), value.into());
        self
    }

    pub fn set_flag(&mut self, key: &str) -> &mut Self {
        self.set_option(key, OptionValue::Flag)
    }

    pub fn set_parameter(&mut self, value: &str) -> &mut Self {
        if !value.is_empty() && !self.parameters.iter().any(|parameter| parameter == value) {
            self.parameters.push(value.to_string());
        }
        self
    }

    pub fn option(&self, key: &str) -> Option<&OptionValue> {
        self.options.get(&normalize_key(key))
    }

    pub fn has_option(&self, key: &str) -> bool {
        self.options.contains_key(&normalize_key(key))
    }

    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty() && self.parameters.is_empty()
    }

    pub fn reset(&mut self) {
        self.options.clear();
        self.parameters.clear();
    }

    pub fn option_args(&self) -> Vec<String> {
        let mut args = vec![];
        for (key, value) in &self.options {
            let option_name = format!("{OPTION_PREFIX}{key}");
            match value {
                OptionValue::Flag => args.push(option_name),
                OptionValue::Value(value) => {
                    args.push(option_name);
                    args.push(value.clone());
                }
                OptionValue::Values(values) => {
                    for value in values {
                        args.push(option_name.clone());
                        args.push(value.clone());
                    }
                }
            }
        }
        args
    }

    /// Arguments passed to the s3cmd process: options, operation, parameters.
    pub fn to_args(&self, operation: S3cmdOperation) -> Vec<String> {
        let mut args = self.option_args();
        args.push(operation.as_str().to_string());
        args.extend(self.parameters.iter().cloned());
        args
    }

    /// Shell-quoted command line, as it would be typed in a terminal.
    pub fn render(&self, program: &Path, operation: S3cmdOperation) -> String {
        let program = program.to_string_lossy();
        let mut words = vec![shell_words::quote(&program).to_string()];
        words.extend(
            self.to_args(operation)
                .iter()
                .map(|arg| shell_words::quote(arg).to_string()),
        );
        words.join(" ")
    }
}

fn normalize_key(key: &str) -> String {
    key.trim_start_matches('-').to_string()
}
