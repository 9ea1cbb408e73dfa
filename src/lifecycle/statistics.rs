//! Booking/statistics aggregation
//!
//! Pure derivation of `EventStatistics` from one event's applications and
//! bookings. Called by the controller after every local mutation so the UI
//! never shows stale aggregates; a statistics object supplied by the
//! gateway always overrides the local recompute.

use crate::models::{Application, ApplicationStatus, Booking, EventStatistics};

/// Recompute derived statistics from the current children of one event.
///
/// Withdrawn applications count toward the total but land in no status
/// bucket. Revenue sums every booking regardless of its status; whether
/// cancelled bookings should be excluded is an open business rule.
pub fn recompute(applications: &[Application], bookings: &[Booking]) -> EventStatistics {
    let mut approved = 0i64;
    let mut rejected = 0i64;
    let mut pending = 0i64;

    for application in applications {
        match application.status {
            ApplicationStatus::Approved => approved += 1,
            ApplicationStatus::Rejected => rejected += 1,
            ApplicationStatus::Applied => pending += 1,
            ApplicationStatus::Withdrawn => {}
        }
    }

    let total_bookings = bookings.len() as i64;
    let total_revenue: f64 = bookings.iter().map(|b| b.total_amount).sum();
    let average_booking_value = if total_bookings > 0 {
        total_revenue / total_bookings as f64
    } else {
        0.0
    };

    EventStatistics {
        total_applications: applications.len() as i64,
        approved_applications: approved,
        rejected_applications: rejected,
        pending_applications: pending,
        total_bookings,
        total_revenue,
        average_booking_value,
    }
}

/// Count of applications currently approved, used to maintain the
/// denormalized `approved_photographers_count` on the event.
pub fn approved_count(applications: &[Application]) -> i32 {
    applications
        .iter()
        .filter(|a| a.status == ApplicationStatus::Approved)
        .count() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BookingStatus, PartySummary};
    use chrono::{Duration, Utc};

    fn application(photographer_id: i64, status: ApplicationStatus) -> Application {
        Application {
            event_id: 1,
            photographer_id,
            photographer_name: None,
            avatar_url: None,
            special_rate: None,
            status,
            applied_at: Utc::now(),
            responded_at: None,
            rejection_reason: None,
        }
    }

    fn booking(id: i64, amount: f64, status: BookingStatus) -> Booking {
        let start = Utc::now();
        Booking {
            event_booking_id: id,
            event_id: 1,
            event_photographer_id: 7,
            user_id: 3,
            start_datetime: start,
            end_datetime: start + Duration::hours(1),
            status,
            total_amount: amount,
            customer: PartySummary::default(),
            photographer: PartySummary::default(),
        }
    }

    #[test]
    fn test_empty_inputs_give_zeroes() {
        let stats = recompute(&[], &[]);
        assert_eq!(stats, EventStatistics::default());
        assert_eq!(stats.average_booking_value, 0.0);
        assert!(stats.average_booking_value.is_finite());
    }

    #[test]
    fn test_status_buckets_exclude_withdrawn() {
        let applications = vec![
            application(1, ApplicationStatus::Approved),
            application(2, ApplicationStatus::Rejected),
            application(3, ApplicationStatus::Applied),
            application(4, ApplicationStatus::Withdrawn),
        ];
        let stats = recompute(&applications, &[]);

        assert_eq!(stats.total_applications, 4);
        assert_eq!(stats.approved_applications, 1);
        assert_eq!(stats.rejected_applications, 1);
        assert_eq!(stats.pending_applications, 1);
        assert!(
            stats.approved_applications + stats.rejected_applications + stats.pending_applications
                <= stats.total_applications
        );
    }

    #[test]
    fn test_revenue_and_average() {
        let bookings = vec![
            booking(1, 100_000.0, BookingStatus::Confirmed),
            booking(2, 250_000.0, BookingStatus::Pending),
        ];
        let stats = recompute(&[], &bookings);

        assert_eq!(stats.total_bookings, 2);
        assert_eq!(stats.total_revenue, 350_000.0);
        assert_eq!(stats.average_booking_value, 175_000.0);
    }

    #[test]
    fn test_cancelled_bookings_still_counted() {
        let bookings = vec![
            booking(1, 100_000.0, BookingStatus::Cancelled),
            booking(2, 100_000.0, BookingStatus::Completed),
        ];
        let stats = recompute(&[], &bookings);
        assert_eq!(stats.total_revenue, 200_000.0);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let applications = vec![
            application(1, ApplicationStatus::Approved),
            application(2, ApplicationStatus::Applied),
        ];
        let bookings = vec![booking(1, 90_000.0, BookingStatus::Confirmed)];

        let first = recompute(&applications, &bookings);
        let second = recompute(&applications, &bookings);
        assert_eq!(first, second);
    }

    #[test]
    fn test_approved_count() {
        let applications = vec![
            application(1, ApplicationStatus::Approved),
            application(2, ApplicationStatus::Approved),
            application(3, ApplicationStatus::Rejected),
        ];
        assert_eq!(approved_count(&applications), 2);
        assert_eq!(approved_count(&[]), 0);
    }
}
