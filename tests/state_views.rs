use chrono::{TimeZone, Utc};

use sportshub_terminal::mock_data::MockData;
use sportshub_terminal::state::{
    AppState, MatchStatus, NewsCategory, Position, Screen, Sport, cycle_choice,
};

fn state_on(screen: Screen) -> AppState {
    let now = Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap();
    let mut state = AppState::new(MockData::generate(42, now));
    state.set_screen(screen);
    state
}

#[test]
fn cycle_choice_walks_through_all_and_back() {
    let options = [Sport::Football, Sport::Basketball];
    assert_eq!(cycle_choice(None, &options), Some(Sport::Football));
    assert_eq!(
        cycle_choice(Some(Sport::Football), &options),
        Some(Sport::Basketball)
    );
    assert_eq!(cycle_choice(Some(Sport::Basketball), &options), None);
    assert_eq!(cycle_choice(Some(Sport::Tennis), &options), None);
}

#[test]
fn status_filter_narrows_live_scores() {
    let mut state = state_on(Screen::LiveScores);
    assert_eq!(state.filtered_matches().len(), 18);

    state.cycle_status();
    assert_eq!(state.live.criteria.status, Some(MatchStatus::Live));
    assert_eq!(state.filtered_matches().len(), 8);

    state.cycle_status();
    state.cycle_status();
    assert_eq!(state.live.criteria.status, Some(MatchStatus::Upcoming));
    assert_eq!(state.filtered_matches().len(), 4);

    state.cycle_status();
    assert_eq!(state.live.criteria.status, None);
    assert_eq!(state.filtered_matches().len(), 18);
}

#[test]
fn criteria_belong_to_their_own_view() {
    let mut state = state_on(Screen::Teams);
    state.cycle_sport();
    assert_eq!(state.teams.criteria.sport, Some(Sport::Football));
    assert_eq!(state.players.criteria.sport, None);
    assert_eq!(state.live.criteria.sport, None);

    state.set_screen(Screen::Players);
    state.cycle_sport();
    state.cycle_sport();
    assert_eq!(state.players.criteria.sport, Some(Sport::Basketball));
    assert_eq!(state.teams.criteria.sport, Some(Sport::Football));
}

#[test]
fn view_specific_filters_are_ignored_elsewhere() {
    let mut state = state_on(Screen::Teams);
    state.cycle_status();
    state.cycle_position();
    state.cycle_category();
    assert_eq!(state.live.criteria.status, None);
    assert_eq!(state.players.criteria.position, None);
    assert_eq!(state.news.criteria.category, None);
}

#[test]
fn selection_wraps_in_both_directions() {
    let mut state = state_on(Screen::LiveScores);
    state.cycle_status();
    state.cycle_status();
    state.cycle_status();
    assert_eq!(state.active_total(), 4);

    state.select_prev();
    assert_eq!(state.live.selected, 3);
    state.select_next();
    assert_eq!(state.live.selected, 0);
    state.select_next();
    state.select_next();
    assert_eq!(state.active_selected(), 2);
    let picked = state.selected_match().expect("upcoming match selected");
    assert_eq!(picked.status, MatchStatus::Upcoming);
    assert_eq!(picked.id, state.filtered_matches()[2].id);
}

#[test]
fn changing_filters_resets_selection_into_range() {
    let mut state = state_on(Screen::Players);
    for _ in 0..20 {
        state.select_next();
    }
    assert_eq!(state.players.selected, 20);

    state.cycle_position();
    assert_eq!(state.players.criteria.position, Some(Position::Forward));
    assert_eq!(state.players.selected, 0);
    assert!(state.selected_player().is_some());
}

#[test]
fn search_typing_updates_results_until_closed() {
    let mut state = state_on(Screen::News);
    state.push_search_char('x');
    assert_eq!(state.news.criteria.search.as_str(), "");

    state.begin_search();
    assert!(state.search_active());
    for c in "TrAnS".chars() {
        state.push_search_char(c);
    }
    assert_eq!(state.active_search_text(), Some("TrAnS"));
    let hits = state.filtered_news();
    assert!(!hits.is_empty());
    assert!(hits.iter().all(|a| {
        a.title.to_lowercase().contains("trans") || a.summary.to_lowercase().contains("trans")
    }));

    state.pop_search_char();
    assert_eq!(state.active_search_text(), Some("TrAn"));

    state.end_search();
    assert!(!state.search_active());
    state.push_search_char('z');
    assert_eq!(state.active_search_text(), Some("TrAn"));
}

#[test]
fn switching_views_closes_search() {
    let mut state = state_on(Screen::Teams);
    state.begin_search();
    assert!(state.search_active());
    state.next_screen();
    assert_eq!(state.screen, Screen::Players);
    assert!(!state.search_active());
    state.set_screen(Screen::Teams);
    assert!(!state.search_active());
}

#[test]
fn impossible_search_yields_empty_view() {
    let mut state = state_on(Screen::Teams);
    state.begin_search();
    for c in "no such team".chars() {
        state.push_search_char(c);
    }
    assert_eq!(state.active_total(), 0);
    assert!(state.selected_team().is_none());
    state.select_next();
    assert_eq!(state.teams.selected, 0);
}

#[test]
fn clear_filters_restores_full_view() {
    let mut state = state_on(Screen::News);
    state.cycle_category();
    assert_eq!(state.news.criteria.category, Some(NewsCategory::Football));
    state.begin_search();
    state.push_search_char('q');
    state.clear_filters();
    assert_eq!(state.news.criteria.category, None);
    assert!(state.news.criteria.search.is_empty());
    assert!(!state.search_active());
    assert_eq!(state.filtered_news().len(), 20);
}

#[test]
fn screens_cycle_with_wraparound() {
    let mut state = state_on(Screen::Home);
    state.prev_screen();
    assert_eq!(state.screen, Screen::News);
    state.next_screen();
    assert_eq!(state.screen, Screen::Home);
    state.next_screen();
    assert_eq!(state.screen, Screen::LiveScores);
}

#[test]
fn home_shows_first_live_matches_and_news() {
    let state = state_on(Screen::Home);
    let featured = state.home_featured_matches();
    assert_eq!(featured.len(), 3);
    assert_eq!(featured[0].id, state.data.live_matches[0].id);
    let news = state.home_top_news();
    assert_eq!(news.len(), 4);
    assert!(news[0].featured);
    assert_eq!(state.active_total(), 0);
}

#[test]
fn filter_changes_are_logged_and_bounded() {
    let mut state = state_on(Screen::LiveScores);
    state.cycle_sport();
    assert_eq!(
        state.logs.back().map(String::as_str),
        Some("[INFO] Sport filter: Football")
    );
    for _ in 0..500 {
        state.cycle_sport();
    }
    assert_eq!(state.logs.len(), 200);
}

#[test]
fn news_lead_follows_the_filtered_view() {
    let mut state = state_on(Screen::News);
    assert_eq!(
        state.news_lead().map(|a| a.id.clone()),
        Some(state.data.news[0].id.clone())
    );

    state.cycle_category();
    state.cycle_category();
    let lead = state.news_lead().expect("basketball articles exist");
    assert_eq!(lead.category, NewsCategory::Basketball);
    assert_eq!(lead.id, state.data.news[1].id);

    state.begin_search();
    for c in "zzzz-nothing".chars() {
        state.push_search_char(c);
    }
    assert!(state.news_lead().is_none());
}
