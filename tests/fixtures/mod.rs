use rust_timeline::TimelineItem;

/// The stock five-item project plan used across the scenario suites,
/// delivered the way a host would: as wire-format JSON records.
pub fn project_plan() -> Vec<TimelineItem> {
    init_logging();
    serde_json::from_str(
        r#"[
            { "id": "1", "name": "Plan",        "startDate": "2024-01-01", "endDate": "2024-01-15" },
            { "id": "2", "name": "Research",    "startDate": "2024-01-10", "endDate": "2024-01-30" },
            { "id": "3", "name": "Development", "startDate": "2024-02-01", "endDate": "2024-02-25" },
            { "id": "4", "name": "Testing",     "startDate": "2024-02-20", "endDate": "2024-03-05" },
            { "id": "5", "name": "Review",      "startDate": "2024-03-01", "endDate": "2024-03-15" }
        ]"#,
    )
    .expect("fixture items parse")
}

/// Route `log` output through the test harness when `RUST_LOG` is set.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
