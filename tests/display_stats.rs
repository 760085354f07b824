use chrono::{Duration, TimeZone, Utc};

use sportshub_terminal::display::{
    clock_label, format_age, percent_bar, rating_percent, score_label, venue_label, views_label,
    win_rate, win_rate_label,
};
use sportshub_terminal::state::{League, MatchClock, MatchStatus, MatchSummary, Sport};

fn sample_match(status: MatchStatus, clock: MatchClock) -> MatchSummary {
    MatchSummary {
        id: "m1".to_string(),
        sport: Sport::Soccer,
        league: League::ChampionsLeague,
        home_team: "Bogan lion".to_string(),
        away_team: "Fadel fish".to_string(),
        home_score: 3,
        away_score: 1,
        clock,
        venue: None,
        status,
    }
}

#[test]
fn win_rate_is_share_of_decided_games() {
    let rate = win_rate(15, 5).unwrap();
    assert!((rate - 75.0).abs() < 1e-9);
    assert_eq!(win_rate_label(15, 5), "75.0%");
    assert_eq!(win_rate_label(1, 2), "33.3%");
}

#[test]
fn win_rate_without_games_is_not_available() {
    assert_eq!(win_rate(0, 0), None);
    assert_eq!(win_rate_label(0, 0), "n/a");
    assert_eq!(win_rate(0, 4), Some(0.0));
}

#[test]
fn rating_maps_onto_percent_scale() {
    assert!((rating_percent(7.5) - 75.0).abs() < 1e-4);
    assert_eq!(rating_percent(10.0), 100.0);
    assert_eq!(rating_percent(12.0), 100.0);
}

#[test]
fn age_label_buckets_hours_and_days() {
    let now = Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap();
    assert_eq!(format_age(now - Duration::minutes(30), now), "Just now");
    assert_eq!(format_age(now - Duration::hours(5), now), "5h ago");
    assert_eq!(format_age(now - Duration::hours(23), now), "23h ago");
    assert_eq!(format_age(now - Duration::hours(49), now), "2d ago");
}

#[test]
fn clock_and_score_labels_follow_status() {
    let live = sample_match(MatchStatus::Live, MatchClock::Minute(67));
    assert_eq!(clock_label(live.clock), "67'");
    assert_eq!(score_label(&live), "3 - 1");

    let done = sample_match(MatchStatus::Finished, MatchClock::FullTime);
    assert_eq!(clock_label(done.clock), "FT");

    let kickoff = Utc.with_ymd_and_hms(2026, 3, 14, 18, 30, 0).unwrap();
    let upcoming = sample_match(MatchStatus::Upcoming, MatchClock::Kickoff(kickoff));
    assert_eq!(clock_label(upcoming.clock), "Sat 18:30");
    assert_eq!(score_label(&upcoming), "vs");
    assert_eq!(venue_label(&upcoming), "Venue TBD");
}

#[test]
fn percent_bar_has_fixed_width() {
    assert_eq!(percent_bar(0.0, 4), "░░░░");
    assert_eq!(percent_bar(50.0, 4), "██░░");
    assert_eq!(percent_bar(150.0, 4), "████");
    assert_eq!(percent_bar(75.0, 10).chars().count(), 10);
}

#[test]
fn views_are_abbreviated_past_a_thousand() {
    assert_eq!(views_label(999), "999");
    assert_eq!(views_label(4260), "4.3k");
}
