use serde::Serialize;

/// Iterations of the synthetic loop. The value buys a stable, comparable
/// unit of CPU work per call; the sum itself is meaningless.
const WORK_ITERATIONS: u64 = 100_000;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadTestReport {
    pub message: String,
    pub request_number: u64,
}

/// Burns a fixed amount of CPU, then reports the ordinal of this call so a
/// client firing a concurrent batch can check it observed a contiguous run.
pub fn run(request_number: u64) -> LoadTestReport {
    let mut sum: u64 = 0;
    for i in 0..WORK_ITERATIONS {
        sum += i;
    }
    // black_box keeps the loop from being folded into a constant.
    std::hint::black_box(sum);

    LoadTestReport {
        message: "Load test OK".to_string(),
        request_number,
    }
}

#[cfg(test)]
mod load_simulator_tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn it_should_report_the_given_request_number() {
        let report = run(7);
        assert_eq!(report.request_number, 7);
        assert_eq!(report.message, "Load test OK");
    }
}
