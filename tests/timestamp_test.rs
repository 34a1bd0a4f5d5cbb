use chrono::FixedOffset;
use date_utils::{extract_timestamp, extract_timestamp_in, DateError};

#[test]
fn test_timestamps_are_monotonic() {
    let ordered = [
        "1969-07-20T20:17:40Z",
        "1970-01-01",
        "1999-12-31T23:59:59.999Z",
        "2000-01-01T00:00:00Z",
        "2024-06-10 09:00",
        "2024-06-10T09:00:00.5",
        "Mon, 10 Jun 2024 09:00:01 +0000",
        "2024-06-10T11:00:02+02:00",
    ];

    let stamps: Vec<f64> = ordered
        .iter()
        .map(|s| extract_timestamp(s).unwrap())
        .collect();

    for pair in stamps.windows(2) {
        assert!(pair[0] < pair[1], "{:?}", pair);
    }
}

#[test]
fn test_same_instant_in_different_offsets() {
    let a = extract_timestamp("2024-06-10T09:00:00Z").unwrap();
    let b = extract_timestamp("2024-06-10T04:00:00-05:00").unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_naive_string_in_explicit_zone() {
    let west = FixedOffset::west_opt(5 * 3600).unwrap();
    let local = extract_timestamp_in("2024-06-10T04:00:00", &west).unwrap();
    assert_eq!(local, extract_timestamp("2024-06-10T09:00:00Z").unwrap());
}

#[test]
fn test_garbage_is_rejected() {
    for input in ["not-a-date", "", "2024-06-31", "10/06/2024 09:00"] {
        let err = extract_timestamp(input).unwrap_err();
        assert!(matches!(err, DateError::InvalidDateInput { .. }), "{:?}", input);
    }
}
