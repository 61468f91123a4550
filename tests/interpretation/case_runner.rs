use super::case_loader::{CaseFailure, CaseResult, TestCase, load_cases};
/// Runs the interpretation fixtures against the parser
use uri_interpret::UriComponents;

pub fn run_cases(cases: Vec<TestCase>) -> CaseResult {
    let mut result = CaseResult::default();
    let mut test_num = 0;

    for case in cases {
        let TestCase::UriTest {
            input,
            expected,
            failure,
        } = case
        else {
            continue;
        };
        test_num += 1;

        let fail = |field: &str, expected: &str, actual: &str| CaseFailure {
            test_num,
            input: input.clone(),
            field: field.to_string(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        };

        let parsed = UriComponents::parse(&input);

        if let Some(reason) = failure {
            match parsed {
                Err(err) if err.reason() == reason => result.passed += 1,
                Err(err) => {
                    result.failed += 1;
                    result.failures.push(fail("failure", reason.as_str(), err.reason()));
                }
                Ok(uri) => {
                    result.failed += 1;
                    result.failures.push(fail("failure", reason.as_str(), uri.to_string().as_str()));
                }
            }
            continue;
        }

        let uri = match parsed {
            Ok(uri) => uri,
            Err(err) => {
                result.failed += 1;
                result.failures.push(fail("parsing", "success", err.reason()));
                continue;
            }
        };

        let expected = expected.unwrap_or_default();
        let mut case_passed = true;
        for (name, actual) in uri.fields() {
            // Fields missing from a case must be empty
            let want = expected.get(name).map_or("", String::as_str);
            if actual != want {
                result.failures.push(fail(name, want, &*actual));
                case_passed = false;
            }
        }
        for name in expected.keys() {
            if !uri.fields().iter().any(|(field, _)| *field == name.as_str()) {
                result.failures.push(fail(name.as_str(), "known field", "unknown field"));
                case_passed = false;
            }
        }

        if case_passed {
            result.passed += 1;
        } else {
            result.failed += 1;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_interpretation_cases() {
        let result = run_cases(load_cases());
        assert!(result.failures.is_empty(), "{}", result.report());
        assert!(result.passed > 0, "No tests passed!");
    }

    #[test]
    fn test_runner_reports_mismatches() {
        let cases: Vec<TestCase> = serde_json::from_str(
            r#"[
                "deliberately wrong expectations",
                {"input": "http://h/", "expected": {"scheme": "http", "host": "x", "path": "/", "normalized": "http://h/"}},
                {"input": "http://h/", "failure": "missing or invalid scheme"}
            ]"#,
        )
        .unwrap();
        let result = run_cases(cases);
        assert_eq!(result.passed, 0);
        assert_eq!(result.failed, 2);
        assert_eq!(result.failures[0].field, "host");
        assert_eq!(result.failures[1].field, "failure");
    }
}
