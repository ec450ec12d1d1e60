use super::*;

#[test]
fn test_days_since_floors() {
    assert_eq!(days_since(0, 86_399), 0);
    assert_eq!(days_since(0, 86_400), 1);
    assert_eq!(days_since(100, 86_400 * 7 + 99), 6);
}

#[test]
fn test_days_since_clock_skew() {
    // A record stamped in the future counts as zero days old.
    assert_eq!(days_since(1_000, 500), 0);
}

#[test]
fn test_is_fresh_boundary() {
    let now = 86_400 * 100;
    assert!(is_fresh(now, now));
    assert!(is_fresh(now - 86_400 * 7 + 1, now));
    assert!(!is_fresh(now - 86_400 * 7, now));
    assert!(!is_fresh(now - 86_400 * 30, now));
}

#[test]
fn test_retry_delay_schedule() {
    assert_eq!(retry_delay_ms(1), 0);
    assert_eq!(retry_delay_ms(2), 4_000);
    assert_eq!(retry_delay_ms(3), 6_000);

    // Total inter-attempt backoff for a fully failing refresh.
    let total: u64 = (1..=MAX_ATTEMPTS).map(retry_delay_ms).sum();
    assert_eq!(total, 10_000);
}

#[test]
fn test_blocked_delay_schedule() {
    assert_eq!(blocked_delay_ms(1), 5_000);
    assert_eq!(blocked_delay_ms(2), 10_000);
    assert_eq!(blocked_delay_ms(3), 15_000);
}

#[test]
fn test_now_unix_is_sane() {
    // Well past 2020-01-01.
    assert!(now_unix().unwrap() > 1_577_836_800);
}
