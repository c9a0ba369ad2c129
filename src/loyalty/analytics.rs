//! Derived statistics over a snapshot of customers and visits.
//!
//! Calendar-based figures (weekday, calendar day) depend on a time zone, so
//! those functions take one from the caller. Tests use `Utc`; the CLI uses
//! `Local`.

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc, Weekday};
use serde::Serialize;

use super::rewards::{is_near_reward, is_reward_ready};
use crate::domain::{Customer, Visit};

/// Length of the trailing window used for weekly figures and daily trends.
pub const WINDOW_DAYS: i64 = 7;

/// Visits no older than exactly seven days before `now`.
pub fn weekly_visit_count<Tz: TimeZone>(visits: &[Visit], now: &DateTime<Tz>) -> usize {
    let lower = now.with_timezone(&Utc) - Duration::days(WINDOW_DAYS);
    visits.iter().filter(|v| v.date >= lower).count()
}

/// Whole days elapsed between `date` and `now`, rounded down.
pub fn days_since<Tz: TimeZone>(date: DateTime<Utc>, now: &DateTime<Tz>) -> i64 {
    (now.with_timezone(&Utc) - date).num_days()
}

/// The customer with the most visits; the first one wins a tie.
///
/// Customers with no visits never qualify, so an empty or all-zero list
/// yields `None`.
pub fn most_loyal(customers: &[Customer]) -> Option<&Customer> {
    customers.iter().fold(None, |best: Option<&Customer>, c| match best {
        Some(b) if c.visits <= b.visits => Some(b),
        _ if c.visits == 0 => best,
        _ => Some(c),
    })
}

/// All-time visit counts per weekday.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeekdayHistogram {
    counts: [usize; 7],
}

impl WeekdayHistogram {
    /// Weekdays in display order.
    pub const DAYS: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    pub fn get(&self, day: Weekday) -> usize {
        self.counts[day.num_days_from_monday() as usize]
    }

    /// (weekday, count) pairs from Monday to Sunday.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, usize)> + '_ {
        Self::DAYS.iter().map(|d| (*d, self.get(*d)))
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Bucket every visit by the weekday it fell on in `tz`.
pub fn day_of_week_histogram<Tz: TimeZone>(visits: &[Visit], tz: &Tz) -> WeekdayHistogram {
    let mut histogram = WeekdayHistogram::default();
    for visit in visits {
        let day = visit.date.with_timezone(tz).weekday();
        histogram.counts[day.num_days_from_monday() as usize] += 1;
    }
    histogram
}

/// Visits on one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub visits: usize,
}

/// Visit counts for the last seven calendar days, oldest first, ending today.
pub fn daily_trend<Tz: TimeZone>(visits: &[Visit], now: &DateTime<Tz>) -> Vec<DailyCount> {
    let tz = now.timezone();
    let today = now.date_naive();
    let days: Vec<NaiveDate> = (0..WINDOW_DAYS)
        .rev()
        .filter_map(|back| today.checked_sub_signed(Duration::days(back)))
        .collect();

    let mut trend: Vec<DailyCount> = days
        .into_iter()
        .map(|date| DailyCount { date, visits: 0 })
        .collect();

    for visit in visits {
        let date = visit.date.with_timezone(&tz).date_naive();
        if let Some(slot) = trend.iter_mut().find(|d| d.date == date) {
            slot.visits += 1;
        }
    }
    trend
}

/// Headline numbers for the dashboard and analytics screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overview {
    pub total_customers: usize,
    pub visits_this_week: usize,
    /// Lifetime rewards redeemed across all customers
    pub rewards_given: u32,
    pub reward_ready: usize,
    pub near_reward: usize,
    pub most_loyal: Option<Customer>,
}

impl Overview {
    pub fn compute<Tz: TimeZone>(customers: &[Customer], visits: &[Visit], now: &DateTime<Tz>) -> Self {
        Self {
            total_customers: customers.len(),
            visits_this_week: weekly_visit_count(visits, now),
            rewards_given: customers.iter().map(rewards_given_by).sum(),
            reward_ready: customers.iter().filter(|c| is_reward_ready(c)).count(),
            near_reward: customers.iter().filter(|c| is_near_reward(c)).count(),
            most_loyal: most_loyal(customers).cloned(),
        }
    }
}

// Records written before the lifetime counter existed only carry the flag
fn rewards_given_by(customer: &Customer) -> u32 {
    customer.rewards_redeemed.max(u32::from(customer.reward_given))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn now() -> DateTime<Utc> {
        // A Wednesday
        Utc.with_ymd_and_hms(2025, 3, 12, 15, 0, 0).unwrap()
    }

    fn visit_at(date: DateTime<Utc>) -> Visit {
        Visit::new("cus-1", date, None)
    }

    fn customer(name: &str, visits: u32) -> Customer {
        let mut c = Customer::new(name, "0700000000", now()).unwrap();
        c.visits = visits;
        c
    }

    #[test]
    fn test_weekly_count_scenario() {
        let visits = vec![
            visit_at(now() - Duration::days(1)),
            visit_at(now() - Duration::days(8)),
            visit_at(now() - Duration::days(8)),
        ];
        assert_eq!(weekly_visit_count(&visits, &now()), 1);
    }

    #[test]
    fn test_weekly_count_window_edges() {
        let visits = vec![
            visit_at(now() - Duration::days(7)),
            visit_at(now() - Duration::days(7) - Duration::seconds(1)),
            visit_at(now()),
        ];
        assert_eq!(weekly_visit_count(&visits, &now()), 2);
    }

    #[test]
    fn test_days_since() {
        assert_eq!(days_since(now() - Duration::hours(47), &now()), 1);
        assert_eq!(days_since(now() - Duration::days(3), &now()), 3);
        assert_eq!(days_since(now(), &now()), 0);
    }

    #[test]
    fn test_weekday_histogram_scenario() {
        let monday = Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap();
        let friday = Utc.with_ymd_and_hms(2025, 3, 14, 9, 0, 0).unwrap();
        let visits = vec![
            visit_at(monday),
            visit_at(monday + Duration::hours(3)),
            visit_at(monday - Duration::days(7)),
            visit_at(friday),
        ];

        let histogram = day_of_week_histogram(&visits, &Utc);
        assert_eq!(histogram.get(Weekday::Mon), 3);
        assert_eq!(histogram.get(Weekday::Fri), 1);
        for day in [Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Sat, Weekday::Sun] {
            assert_eq!(histogram.get(day), 0);
        }
        assert_eq!(histogram.total(), 4);
        assert_eq!(histogram.iter().next(), Some((Weekday::Mon, 3)));
    }

    #[test]
    fn test_weekday_histogram_respects_time_zone() {
        // Monday 23:00 UTC is already Tuesday at UTC+3
        let late_monday = Utc.with_ymd_and_hms(2025, 3, 10, 23, 0, 0).unwrap();
        let nairobi = FixedOffset::east_opt(3 * 3600).unwrap();

        let histogram = day_of_week_histogram(&[visit_at(late_monday)], &nairobi);
        assert_eq!(histogram.get(Weekday::Mon), 0);
        assert_eq!(histogram.get(Weekday::Tue), 1);
    }

    #[test]
    fn test_most_loyal_first_wins_tie() {
        let customers = vec![customer("A", 2), customer("B", 4), customer("C", 4)];
        assert_eq!(most_loyal(&customers).unwrap().name, "B");
    }

    #[test]
    fn test_most_loyal_none_without_visits() {
        assert!(most_loyal(&[]).is_none());
        assert!(most_loyal(&[customer("A", 0), customer("B", 0)]).is_none());
        assert_eq!(most_loyal(&[customer("A", 0), customer("B", 1)]).unwrap().name, "B");
    }

    #[test]
    fn test_daily_trend_last_seven_days() {
        let visits = vec![
            visit_at(now()),
            visit_at(now() - Duration::hours(14)), // same calendar day, 01:00
            visit_at(now() - Duration::days(1)),
            visit_at(now() - Duration::days(6)),
            visit_at(now() - Duration::days(7)),
        ];

        let trend = daily_trend(&visits, &now());
        assert_eq!(trend.len(), 7);
        assert_eq!(trend[0].date, NaiveDate::from_ymd_opt(2025, 3, 6).unwrap());
        assert_eq!(trend[6].date, NaiveDate::from_ymd_opt(2025, 3, 12).unwrap());

        let counts: Vec<usize> = trend.iter().map(|d| d.visits).collect();
        assert_eq!(counts, vec![1, 0, 0, 0, 0, 1, 2]);
    }

    #[test]
    fn test_overview() {
        let mut redeemed = customer("Redeemed", 1);
        redeemed.rewards_redeemed = 2;
        let mut legacy = customer("Legacy", 0);
        legacy.reward_given = true;
        let customers = vec![customer("Ready", 5), customer("Near", 4), redeemed, legacy];
        let visits = vec![visit_at(now() - Duration::days(2)), visit_at(now() - Duration::days(30))];

        let overview = Overview::compute(&customers, &visits, &now());
        assert_eq!(overview.total_customers, 4);
        assert_eq!(overview.visits_this_week, 1);
        assert_eq!(overview.rewards_given, 3);
        assert_eq!(overview.reward_ready, 1);
        assert_eq!(overview.near_reward, 1);
        assert_eq!(overview.most_loyal.unwrap().name, "Ready");
    }
}
