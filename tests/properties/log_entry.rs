//! Property tests for deploy log lines.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use remote_deploy::domain::value_objects::DeployLogEntry;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a log line always has four space-separated fields and a Z timestamp.
    #[test]
    fn property_log_line_has_four_fields(
        secs in 0i64..4_102_444_800,
        invoker in "[a-z][a-z0-9_-]{0,12}",
        image in "[a-z0-9./:-]{1,40}",
        digest in proptest::option::of("[ \t]*|[a-z0-9@:]{1,20}"),
    ) {
        let ts = Utc.timestamp_opt(secs, 0).unwrap();
        let entry = DeployLogEntry::new(ts, invoker.clone(), image.clone(), digest);
        let line = entry.line();
        let fields: Vec<&str> = line.split(' ').collect();

        prop_assert_eq!(fields.len(), 4);
        prop_assert!(fields[0].ends_with('Z'));
        prop_assert_eq!(fields[1], invoker.as_str());
        prop_assert_eq!(fields[2], image.as_str());
        prop_assert!(!fields[3].is_empty());
    }
}
