//! Subscription lifecycle arithmetic.
//!
//! The reconciliation pass applies these rules as bulk conditional updates;
//! the functions here are the per-record form of the same rules and the only
//! place the 30-day constants live.

use crate::entities::{FrequencyBand, SubscriptionStatus};
use crate::error::{AppError, AppResult};
use chrono::{DateTime, Duration, Utc};

/// Lookahead window inside which an active subscription becomes `expiring`.
pub const EXPIRY_WINDOW_DAYS: i64 = 30;

/// Billing month length. Deliberately fixed, not calendar months.
pub const DAYS_PER_MONTH: i64 = 30;

/// Longest subscription accepted on create or update (50 years).
pub const MAX_DURATION_MONTHS: i32 = 600;

pub fn expiry_threshold(now: DateTime<Utc>) -> DateTime<Utc> {
    now + Duration::days(EXPIRY_WINDOW_DAYS)
}

/// Fails with a validation error when the end date falls outside the
/// representable range.
pub fn compute_end_date(
    start_date: DateTime<Utc>,
    duration_months: i32,
) -> AppResult<DateTime<Utc>> {
    Duration::try_days(i64::from(duration_months) * DAYS_PER_MONTH)
        .and_then(|span| start_date.checked_add_signed(span))
        .ok_or_else(|| {
            AppError::ValidationError(format!(
                "duration_months {duration_months} is out of range for start_date {start_date}"
            ))
        })
}

/// Status a record holds after one reconciliation pass at `now`.
///
/// Reference model of the bulk rule in `StatusService::evaluate`, which
/// applies the same predicates as SQL; the two must agree.
///
/// Never moves backward: an `expiring` record whose end date was pushed out
/// stays `expiring`, an `expired` one stays `expired`.
pub fn next_status(
    current: SubscriptionStatus,
    end_date: DateTime<Utc>,
    now: DateTime<Utc>,
) -> SubscriptionStatus {
    match current {
        SubscriptionStatus::Active | SubscriptionStatus::Expiring if end_date <= now => {
            SubscriptionStatus::Expired
        }
        SubscriptionStatus::Active if end_date <= expiry_threshold(now) => {
            SubscriptionStatus::Expiring
        }
        other => other,
    }
}

pub fn expiring_alert_message(
    plan: &str,
    frequency: FrequencyBand,
    end_date: DateTime<Utc>,
) -> String {
    format!(
        "Abonnement {plan} ({frequency}) expire le {}",
        end_date.format("%d/%m/%Y")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_compute_end_date_uses_thirty_day_months() {
        let start = now();
        assert_eq!(compute_end_date(start, 1).unwrap(), start + Duration::days(30));
        assert_eq!(compute_end_date(start, 12).unwrap(), start + Duration::days(360));
        assert_eq!(compute_end_date(start, 24).unwrap(), start + Duration::days(720));
    }

    #[test]
    fn test_compute_end_date_out_of_range_is_a_validation_error() {
        let err = compute_end_date(now(), i32::MAX).unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
        assert!(compute_end_date(now(), MAX_DURATION_MONTHS).is_ok());
    }

    #[test]
    fn test_threshold_boundaries() {
        let now = now();
        let threshold = now + Duration::days(30);

        assert_eq!(
            next_status(SubscriptionStatus::Active, threshold, now),
            SubscriptionStatus::Expiring
        );
        assert_eq!(
            next_status(SubscriptionStatus::Active, threshold + Duration::seconds(1), now),
            SubscriptionStatus::Active
        );
        assert_eq!(
            next_status(SubscriptionStatus::Active, now, now),
            SubscriptionStatus::Expired
        );
        assert_eq!(
            next_status(SubscriptionStatus::Active, now + Duration::seconds(1), now),
            SubscriptionStatus::Expiring
        );
    }

    #[test]
    fn test_past_end_date_skips_expiring() {
        let now = now();
        let end = compute_end_date(now - Duration::days(750), 24).unwrap();
        assert_eq!(end, now - Duration::days(30));
        assert_eq!(
            next_status(SubscriptionStatus::Active, end, now),
            SubscriptionStatus::Expired
        );
    }

    #[test]
    fn test_never_moves_backward() {
        let now = now();
        let far = now + Duration::days(400);
        assert_eq!(
            next_status(SubscriptionStatus::Expiring, far, now),
            SubscriptionStatus::Expiring
        );
        assert_eq!(
            next_status(SubscriptionStatus::Expired, far, now),
            SubscriptionStatus::Expired
        );
    }

    #[test]
    fn test_monotonic_as_time_advances() {
        let start = now();
        let end = start + Duration::days(45);
        let mut status = SubscriptionStatus::Active;
        let mut seen = vec![status];

        for hour in 0..(24 * 60) {
            let next = next_status(status, end, start + Duration::hours(hour));
            assert!(next >= status, "went back from {status} to {next}");
            if next != status {
                seen.push(next);
            }
            status = next;
        }

        assert_eq!(
            seen,
            vec![
                SubscriptionStatus::Active,
                SubscriptionStatus::Expiring,
                SubscriptionStatus::Expired
            ]
        );
    }

    #[test]
    fn test_next_status_is_idempotent() {
        let now = now();
        for days in [-10, 0, 1, 29, 30, 31, 400] {
            let end = now + Duration::days(days);
            let once = next_status(SubscriptionStatus::Active, end, now);
            assert_eq!(next_status(once, end, now), once);
        }
    }

    #[test]
    fn test_expiring_alert_message() {
        let end = Utc.with_ymd_and_hms(2025, 4, 5, 8, 30, 0).unwrap();
        assert_eq!(
            expiring_alert_message("Business 100", FrequencyBand::KuBand, end),
            "Abonnement Business 100 (Ku-band) expire le 05/04/2025"
        );
    }
}
