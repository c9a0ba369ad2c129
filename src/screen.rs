//! Screens and their plain-text rendering.
//!
//! Each screen variant carries exactly the data it needs, e.g. the profile
//! screen always has a customer ID.

use std::fmt::{self, Display};

use chrono::{DateTime, TimeZone};
use colored::*;

use crate::config::Config;
use crate::domain::Customer;
use crate::error::Result;
use crate::loyalty::{
    self, DailyCount, Overview, REWARD_THRESHOLD, RewardsBoard, Tier, TierCounts, WeekdayHistogram,
};
use crate::manager::{LoyaltyManager, Profile};
use crate::storage::RecordStore;

/// The views the front end can show.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Dashboard,
    CustomerList {
        search: Option<String>,
    },
    CustomerProfile {
        customer_id: String,
    },
    RewardsTracker,
    Analytics,
    Settings,
}

impl Screen {
    /// Load what the screen needs and render it.
    pub fn render<S, Tz>(&self, manager: &LoyaltyManager<'_, S>, config: &Config, now: &DateTime<Tz>) -> Result<String>
    where
        S: RecordStore,
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let text = match self {
            Screen::Dashboard => {
                let snapshot = manager.snapshot()?;
                let overview = Overview::compute(&snapshot.customers, &snapshot.visits, now);
                render_dashboard(&config.business.name, &overview)
            }
            Screen::CustomerList { search } => {
                let customers = manager.customers().search(search.as_deref().unwrap_or(""))?;
                render_customer_list(&customers, now)
            }
            Screen::CustomerProfile { customer_id } => render_profile(&manager.profile(customer_id)?, now),
            Screen::RewardsTracker => {
                let customers = manager.customers().list_all()?;
                render_rewards(&RewardsBoard::from_customers(&customers))
            }
            Screen::Analytics => {
                let snapshot = manager.snapshot()?;
                render_analytics(
                    &Overview::compute(&snapshot.customers, &snapshot.visits, now),
                    &TierCounts::from_customers(&snapshot.customers),
                    &loyalty::daily_trend(&snapshot.visits, now),
                    &loyalty::day_of_week_histogram(&snapshot.visits, &now.timezone()),
                )
            }
            Screen::Settings => render_settings(config),
        };
        Ok(text)
    }
}

/// Filled and empty stars for the current cycle, e.g. `★★★☆☆`.
pub fn stars(visits: u32) -> String {
    let filled = visits.min(REWARD_THRESHOLD) as usize;
    let empty = REWARD_THRESHOLD as usize - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}

fn format_date<Tz>(date: &DateTime<chrono::Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    date.with_timezone(tz).format("%Y-%m-%d %H:%M").to_string()
}

pub fn render_dashboard(business_name: &str, overview: &Overview) -> String {
    DashboardView {
        business_name,
        overview,
    }
    .to_string()
}

struct DashboardView<'a> {
    business_name: &'a str,
    overview: &'a Overview,
}

impl fmt::Display for DashboardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let overview = self.overview;
        writeln!(f, "{}", format!("{} Loyalty", self.business_name).bold())?;
        writeln!(f, "  Total customers:  {}", overview.total_customers)?;
        writeln!(f, "  Near reward:      {}", overview.near_reward)?;
        writeln!(f, "  Rewards ready:    {}", overview.reward_ready)?;
        writeln!(f, "  Visits this week: {}", overview.visits_this_week)
    }
}

pub fn render_customer_list<Tz>(customers: &[Customer], now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if customers.is_empty() {
        return "No customers found\n".to_string();
    }
    CustomerListView {
        customers,
        tz: now.timezone(),
    }
    .to_string()
}

struct CustomerListView<'a, Tz: TimeZone> {
    customers: &'a [Customer],
    tz: Tz,
}

impl<Tz> fmt::Display for CustomerListView<'_, Tz>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.customers {
            write!(
                f,
                "{}  {}  {} {}/{}  last visit {}",
                c.id.dimmed(),
                c.name.bold(),
                stars(c.visits),
                c.visits,
                REWARD_THRESHOLD,
                format_date(&c.last_visit, &self.tz)
            )?;
            if loyalty::is_reward_ready(c) {
                write!(f, "  {}", "REWARD READY".green())?;
            }
            writeln!(f, "\n    {}", c.phone)?;
        }
        Ok(())
    }
}

pub fn render_profile<Tz>(profile: &Profile, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    ProfileView { profile, now }.to_string()
}

struct ProfileView<'a, Tz: TimeZone> {
    profile: &'a Profile,
    now: &'a DateTime<Tz>,
}

impl<Tz> fmt::Display for ProfileView<'_, Tz>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.profile.customer;
        let tz = self.now.timezone();
        let tier = loyalty::tier(c.visits).map_or_else(|| "-".to_string(), |t| t.to_string());

        writeln!(f, "{}", c.name.bold())?;
        writeln!(f, "  Phone:    {}", c.phone)?;
        writeln!(f, "  Visits:   {} {}/{}", stars(c.visits), c.visits, REWARD_THRESHOLD)?;
        writeln!(f, "  Tier:     {}", tier)?;
        writeln!(f, "  Rewards:  {} redeemed", c.rewards_redeemed)?;
        writeln!(f, "  Member since {}", format_date(&c.created_at, &tz))?;
        if loyalty::is_reward_ready(c) {
            writeln!(f, "  {}", "Reward ready to redeem".green())?;
        } else {
            writeln!(f, "  {} more visits to a reward", loyalty::visits_remaining(c.visits))?;
        }

        writeln!(f, "{}", "Visit history".bold())?;
        if self.profile.visits.is_empty() {
            writeln!(f, "  No visits yet")?;
        }
        for (index, visit) in self.profile.visits.iter().enumerate() {
            let when = if index == 0 {
                "Latest".to_string()
            } else {
                format!("{} days ago", loyalty::days_since(visit.date, self.now))
            };
            let number = visit.visit_number.map_or_else(String::new, |n| format!("#{} ", n));
            writeln!(f, "  {}{}  ({})", number, format_date(&visit.date, &tz), when)?;
        }
        Ok(())
    }
}

pub fn render_rewards(board: &RewardsBoard) -> String {
    RewardsView(board).to_string()
}

struct RewardsView<'a>(&'a RewardsBoard);

impl fmt::Display for RewardsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        writeln!(f, "{} ({})", "Ready to redeem".green().bold(), board.ready.len())?;
        for c in &board.ready {
            writeln!(f, "  {}  {}  {} visits  [{}]", c.name, c.phone, c.visits, c.id)?;
        }
        writeln!(f, "{} ({})", "One visit away".yellow().bold(), board.near.len())?;
        for c in &board.near {
            writeln!(f, "  {}  {}  [{}]", c.name, c.phone, c.id)?;
        }
        Ok(())
    }
}

pub fn render_analytics(
    overview: &Overview,
    tiers: &TierCounts,
    trend: &[DailyCount],
    weekdays: &WeekdayHistogram,
) -> String {
    AnalyticsView {
        overview,
        tiers,
        trend,
        weekdays,
    }
    .to_string()
}

struct AnalyticsView<'a> {
    overview: &'a Overview,
    tiers: &'a TierCounts,
    trend: &'a [DailyCount],
    weekdays: &'a WeekdayHistogram,
}

impl fmt::Display for AnalyticsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let overview = self.overview;
        writeln!(f, "{}", "Overview".bold())?;
        writeln!(f, "  Total customers:  {}", overview.total_customers)?;
        writeln!(f, "  Visits this week: {}", overview.visits_this_week)?;
        writeln!(f, "  Rewards given:    {}", overview.rewards_given)?;
        match &overview.most_loyal {
            Some(c) => writeln!(f, "  Most loyal:       {} ({} visits)", c.name, c.visits)?,
            None => writeln!(f, "  Most loyal:       None")?,
        }

        writeln!(f, "{}", "Loyalty tiers".bold())?;
        for tier in Tier::ALL {
            writeln!(
                f,
                "  {:<7} {:<11} {}",
                tier.to_string(),
                tier.range_label(),
                self.tiers.get(tier)
            )?;
        }

        writeln!(f, "{}", "Last 7 days".bold())?;
        for day in self.trend {
            writeln!(f, "  {}  {}", day.date.format("%b %d"), day.visits)?;
        }

        writeln!(f, "{}", "Visits by weekday".bold())?;
        for (day, count) in self.weekdays.iter() {
            writeln!(f, "  {}  {}", day, count)?;
        }
        Ok(())
    }
}

pub fn render_settings(config: &Config) -> String {
    serde_yaml::to_string(config).unwrap_or_else(|e| format!("Failed to render settings: {}\n", e))
}
