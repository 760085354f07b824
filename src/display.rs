use chrono::{DateTime, Utc};

use crate::state::{MatchClock, MatchSummary, MatchStatus};

/// Win share in percent. `None` when the team has no decided games.
pub fn win_rate(wins: u32, losses: u32) -> Option<f64> {
    let played = u64::from(wins) + u64::from(losses);
    if played == 0 {
        return None;
    }
    Some(wins as f64 / played as f64 * 100.0)
}

pub fn win_rate_label(wins: u32, losses: u32) -> String {
    match win_rate(wins, losses) {
        Some(rate) => format!("{rate:.1}%"),
        None => "n/a".to_string(),
    }
}

pub fn rating_percent(rating: f32) -> f32 {
    (rating / 10.0 * 100.0).clamp(0.0, 100.0)
}

/// Coarse "time since" label used on news cards.
pub fn format_age(published_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let hours = (now - published_at).num_hours().abs();
    if hours < 1 {
        "Just now".to_string()
    } else if hours < 24 {
        format!("{hours}h ago")
    } else {
        format!("{}d ago", hours / 24)
    }
}

pub fn clock_label(clock: MatchClock) -> String {
    match clock {
        MatchClock::Minute(minute) => format!("{minute}'"),
        MatchClock::FullTime => "FT".to_string(),
        MatchClock::Kickoff(at) => at.format("%a %H:%M").to_string(),
    }
}

pub fn score_label(m: &MatchSummary) -> String {
    if m.status == MatchStatus::Upcoming {
        return "vs".to_string();
    }
    format!("{} - {}", m.home_score, m.away_score)
}

pub fn venue_label(m: &MatchSummary) -> &str {
    m.venue.as_deref().unwrap_or("Venue TBD")
}

/// Fixed-width bar for a percentage, e.g. `█████░░░░░`.
pub fn percent_bar(percent: f64, width: usize) -> String {
    let ratio = (percent / 100.0).clamp(0.0, 1.0);
    let filled = (ratio * width as f64).round() as usize;
    let mut bar = "█".repeat(filled.min(width));
    bar.push_str(&"░".repeat(width - filled.min(width)));
    bar
}

pub fn views_label(views: u32) -> String {
    if views >= 1000 {
        format!("{:.1}k", views as f64 / 1000.0)
    } else {
        views.to_string()
    }
}
