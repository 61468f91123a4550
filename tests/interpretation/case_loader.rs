/// Loader for the interpretation fixtures
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum TestCase {
    /// A URI test case
    UriTest {
        input: String,
        #[serde(default)]
        expected: Option<BTreeMap<String, String>>,
        #[serde(default)]
        failure: Option<String>,
    },
    /// A comment line (string)
    #[allow(dead_code)]
    Comment(String),
}

#[derive(Debug, Clone, Default)]
pub struct CaseResult {
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<CaseFailure>,
}

#[derive(Debug, Clone)]
pub struct CaseFailure {
    pub test_num: usize,
    pub input: String,
    pub field: String,
    pub expected: String,
    pub actual: String,
}

impl CaseResult {
    pub fn summary(&self) -> String {
        format!("Passed: {}, Failed: {}", self.passed, self.failed)
    }

    pub fn report(&self) -> String {
        let mut report = self.summary();
        for failure in &self.failures {
            report.push_str(&format!(
                "\n  Test #{} ({:?}) field {}: expected {:?}, got {:?}",
                failure.test_num, failure.input, failure.field, failure.expected, failure.actual
            ));
        }
        report
    }
}

pub fn load_cases() -> Vec<TestCase> {
    let data = include_str!("./cases.json");
    serde_json::from_str(data).expect("Failed to parse interpretation cases")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_cases() {
        let cases = load_cases();
        let uri_cases = cases
            .iter()
            .filter(|case| matches!(case, TestCase::UriTest { .. }))
            .count();
        assert!(uri_cases >= 30);
    }

    #[test]
    fn test_every_case_has_an_expectation() {
        for case in load_cases() {
            if let TestCase::UriTest {
                input,
                expected,
                failure,
            } = case
            {
                assert!(
                    expected.is_some() != failure.is_some(),
                    "case {input:?} needs exactly one of expected/failure"
                );
            }
        }
    }
}
