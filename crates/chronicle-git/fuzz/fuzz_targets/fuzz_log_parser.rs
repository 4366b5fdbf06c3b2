#![no_main]

use chronicle_git::parser::{FIELD_SEPARATOR, parse_log_output};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let records = parse_log_output(text);
        // Every kept record came from one line with exactly four fields.
        assert!(records.len() <= text.lines().count());
        for record in &records {
            assert!(!record.short_hash.contains(FIELD_SEPARATOR));
            assert!(!record.subject.contains(FIELD_SEPARATOR));
        }
    }
});
