use std::time::Duration;

pub struct CaseResult {
    pub name: &'static str,
    pub duration: Duration,
    pub failure: Option<String>,
}

#[derive(Default)]
pub struct TestResults {
    pub cases: Vec<CaseResult>,
    pub duration: Duration,
}

impl TestResults {
    pub fn record(&mut self, name: &'static str, duration: Duration, outcome: anyhow::Result<()>) {
        self.cases.push(CaseResult {
            name,
            duration,
            failure: outcome.err().map(|e| format!("{:#}", e)),
        });
    }

    pub fn failed(&self) -> impl Iterator<Item = &CaseResult> {
        self.cases.iter().filter(|c| c.failure.is_some())
    }

    pub fn success(&self) -> bool {
        self.failed().next().is_none()
    }

    pub fn print(&self) {
        println!();
        println!("E2E Test Results");
        println!("Duration: {:?}", self.duration);
        println!("Cases: {}", self.cases.len());
        println!();

        for case in &self.cases {
            let status = if case.failure.is_some() { "FAIL" } else { "ok" };
            println!("  {:<4} {} ({:?})", status, case.name, case.duration);
        }

        let failed: Vec<_> = self.failed().collect();
        if failed.is_empty() {
            println!();
            println!("All cases passed");
        } else {
            println!();
            println!("Failures: {}", failed.len());
            for case in failed {
                if let Some(reason) = &case.failure {
                    println!("  {}: {}", case.name, reason);
                }
            }
        }

        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_requires_no_failures() {
        let mut results = TestResults::default();
        results.record("a", Duration::from_millis(1), Ok(()));
        assert!(results.success());

        results.record("b", Duration::from_millis(1), Err(anyhow::anyhow!("boom")));
        assert!(!results.success());
        assert_eq!(results.failed().count(), 1);
        assert_eq!(results.cases[1].failure.as_deref(), Some("boom"));
    }
}
