use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::filter::{self, MatchCriteria, NewsCriteria, PlayerCriteria, TeamCriteria};
use crate::mock_data::MockData;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Sport {
    Football,
    Basketball,
    Soccer,
    Tennis,
    Baseball,
}

impl Sport {
    pub const ALL: [Sport; 5] = [
        Sport::Football,
        Sport::Basketball,
        Sport::Soccer,
        Sport::Tennis,
        Sport::Baseball,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum League {
    PremierLeague,
    Nba,
    ChampionsLeague,
    AtpTour,
    Mlb,
}

impl League {
    pub const ALL: [League; 5] = [
        League::PremierLeague,
        League::Nba,
        League::ChampionsLeague,
        League::AtpTour,
        League::Mlb,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MatchStatus {
    Live,
    Finished,
    Upcoming,
}

impl MatchStatus {
    pub const ALL: [MatchStatus; 3] = [
        MatchStatus::Live,
        MatchStatus::Finished,
        MatchStatus::Upcoming,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Position {
    Forward,
    Defender,
    Midfielder,
    Goalkeeper,
    Guard,
    Center,
}

impl Position {
    pub const ALL: [Position; 6] = [
        Position::Forward,
        Position::Defender,
        Position::Midfielder,
        Position::Goalkeeper,
        Position::Guard,
        Position::Center,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NewsCategory {
    Football,
    Basketball,
    Soccer,
    Tennis,
    Baseball,
    Transfers,
    Results,
}

impl NewsCategory {
    pub const ALL: [NewsCategory; 7] = [
        NewsCategory::Football,
        NewsCategory::Basketball,
        NewsCategory::Soccer,
        NewsCategory::Tennis,
        NewsCategory::Baseball,
        NewsCategory::Transfers,
        NewsCategory::Results,
    ];
}

/// What the scoreboard shows in the time slot of a match card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value")]
pub enum MatchClock {
    Minute(u16),
    FullTime,
    Kickoff(DateTime<Utc>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchSummary {
    pub id: String,
    pub sport: Sport,
    pub league: League,
    pub home_team: String,
    pub away_team: String,
    pub home_score: u16,
    pub away_score: u16,
    pub clock: MatchClock,
    pub venue: Option<String>,
    pub status: MatchStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamProfile {
    pub id: String,
    pub name: String,
    pub sport: Sport,
    pub league: League,
    pub ranking: u32,
    pub wins: u32,
    pub losses: u32,
    pub players: u32,
    pub founded: i32,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerProfile {
    pub id: String,
    pub name: String,
    // Free text; not a reference into the team collection.
    pub team: String,
    pub sport: Sport,
    pub position: Position,
    pub age: u8,
    pub goals: u32,
    pub assists: u32,
    pub matches: u32,
    pub rating: f32,
    pub nationality: String,
    pub height_cm: u16,
    pub weight_kg: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewsArticle {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub author: String,
    pub category: NewsCategory,
    pub published_at: DateTime<Utc>,
    pub read_time_min: u8,
    pub views: u32,
    pub featured: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    LiveScores,
    Teams,
    Players,
    News,
}

impl Screen {
    pub const ALL: [Screen; 5] = [
        Screen::Home,
        Screen::LiveScores,
        Screen::Teams,
        Screen::Players,
        Screen::News,
    ];
}

/// Criteria and cursor owned by a single list view.
#[derive(Debug, Clone, Default)]
pub struct ViewState<C> {
    pub criteria: C,
    pub selected: usize,
    pub search_active: bool,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub screen: Screen,
    pub data: MockData,
    pub live: ViewState<MatchCriteria>,
    pub teams: ViewState<TeamCriteria>,
    pub players: ViewState<PlayerCriteria>,
    pub news: ViewState<NewsCriteria>,
    pub logs: VecDeque<String>,
    pub help_overlay: bool,
    pub tick: u64,
}

impl AppState {
    pub fn new(data: MockData) -> Self {
        Self {
            screen: Screen::Home,
            data,
            live: ViewState::default(),
            teams: ViewState::default(),
            players: ViewState::default(),
            news: ViewState::default(),
            logs: VecDeque::with_capacity(200),
            help_overlay: false,
            tick: 0,
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.data.generated_at
    }

    pub fn filtered_matches(&self) -> Vec<&MatchSummary> {
        filter::filter_records(&self.data.all_matches, &self.live.criteria)
    }

    pub fn filtered_teams(&self) -> Vec<&TeamProfile> {
        filter::filter_records(&self.data.teams, &self.teams.criteria)
    }

    pub fn filtered_players(&self) -> Vec<&PlayerProfile> {
        filter::filter_records(&self.data.players, &self.players.criteria)
    }

    pub fn filtered_news(&self) -> Vec<&NewsArticle> {
        filter::filter_records(&self.data.news, &self.news.criteria)
    }

    /// Lead story of the news view: the first article left after filtering.
    pub fn news_lead(&self) -> Option<&NewsArticle> {
        self.filtered_news().first().copied()
    }

    pub fn home_featured_matches(&self) -> Vec<&MatchSummary> {
        self.data.live_matches.iter().take(3).collect()
    }

    pub fn home_top_news(&self) -> Vec<&NewsArticle> {
        self.data.news.iter().take(4).collect()
    }

    pub fn selected_match(&self) -> Option<&MatchSummary> {
        self.filtered_matches().get(self.live.selected).copied()
    }

    pub fn selected_team(&self) -> Option<&TeamProfile> {
        self.filtered_teams().get(self.teams.selected).copied()
    }

    pub fn selected_player(&self) -> Option<&PlayerProfile> {
        self.filtered_players().get(self.players.selected).copied()
    }

    pub fn selected_news(&self) -> Option<&NewsArticle> {
        self.filtered_news().get(self.news.selected).copied()
    }

    pub fn set_screen(&mut self, screen: Screen) {
        if self.screen == screen {
            return;
        }
        self.end_search();
        self.screen = screen;
        self.clamp_selection();
    }

    pub fn next_screen(&mut self) {
        let idx = screen_index(self.screen);
        self.set_screen(Screen::ALL[(idx + 1) % Screen::ALL.len()]);
    }

    pub fn prev_screen(&mut self) {
        let idx = screen_index(self.screen);
        let len = Screen::ALL.len();
        self.set_screen(Screen::ALL[(idx + len - 1) % len]);
    }

    /// Number of rows in the active list view (zero on Home).
    pub fn active_total(&self) -> usize {
        match self.screen {
            Screen::Home => 0,
            Screen::LiveScores => self.filtered_matches().len(),
            Screen::Teams => self.filtered_teams().len(),
            Screen::Players => self.filtered_players().len(),
            Screen::News => self.filtered_news().len(),
        }
    }

    pub fn active_selected(&self) -> usize {
        match self.screen {
            Screen::Home => 0,
            Screen::LiveScores => self.live.selected,
            Screen::Teams => self.teams.selected,
            Screen::Players => self.players.selected,
            Screen::News => self.news.selected,
        }
    }

    fn active_selected_mut(&mut self) -> Option<&mut usize> {
        match self.screen {
            Screen::Home => None,
            Screen::LiveScores => Some(&mut self.live.selected),
            Screen::Teams => Some(&mut self.teams.selected),
            Screen::Players => Some(&mut self.players.selected),
            Screen::News => Some(&mut self.news.selected),
        }
    }

    pub fn select_next(&mut self) {
        let total = self.active_total();
        let Some(selected) = self.active_selected_mut() else {
            return;
        };
        if total == 0 {
            *selected = 0;
            return;
        }
        *selected = (*selected + 1) % total;
    }

    pub fn select_prev(&mut self) {
        let total = self.active_total();
        let Some(selected) = self.active_selected_mut() else {
            return;
        };
        if total == 0 {
            *selected = 0;
            return;
        }
        if *selected == 0 {
            *selected = total - 1;
        } else {
            *selected -= 1;
        }
    }

    pub fn clamp_selection(&mut self) {
        let total = self.active_total();
        let Some(selected) = self.active_selected_mut() else {
            return;
        };
        if total == 0 {
            *selected = 0;
        } else if *selected >= total {
            *selected = total - 1;
        }
    }

    fn reset_selection(&mut self) {
        if let Some(selected) = self.active_selected_mut() {
            *selected = 0;
        }
    }

    pub fn cycle_sport(&mut self) {
        let sport = match self.screen {
            Screen::LiveScores => {
                self.live.criteria.sport = cycle_choice(self.live.criteria.sport, &Sport::ALL);
                self.live.criteria.sport
            }
            Screen::Teams => {
                self.teams.criteria.sport = cycle_choice(self.teams.criteria.sport, &Sport::ALL);
                self.teams.criteria.sport
            }
            Screen::Players => {
                self.players.criteria.sport =
                    cycle_choice(self.players.criteria.sport, &Sport::ALL);
                self.players.criteria.sport
            }
            Screen::Home | Screen::News => return,
        };
        self.reset_selection();
        self.push_log(format!(
            "[INFO] Sport filter: {}",
            choice_label(sport, sport_label)
        ));
    }

    pub fn cycle_status(&mut self) {
        if self.screen != Screen::LiveScores {
            return;
        }
        self.live.criteria.status = cycle_choice(self.live.criteria.status, &MatchStatus::ALL);
        self.reset_selection();
        self.push_log(format!(
            "[INFO] Status filter: {}",
            choice_label(self.live.criteria.status, status_label)
        ));
    }

    pub fn cycle_position(&mut self) {
        if self.screen != Screen::Players {
            return;
        }
        self.players.criteria.position =
            cycle_choice(self.players.criteria.position, &Position::ALL);
        self.reset_selection();
        self.push_log(format!(
            "[INFO] Position filter: {}",
            choice_label(self.players.criteria.position, position_label)
        ));
    }

    pub fn cycle_category(&mut self) {
        if self.screen != Screen::News {
            return;
        }
        self.news.criteria.category =
            cycle_choice(self.news.criteria.category, &NewsCategory::ALL);
        self.reset_selection();
        self.push_log(format!(
            "[INFO] Category filter: {}",
            choice_label(self.news.criteria.category, category_label)
        ));
    }

    pub fn clear_filters(&mut self) {
        match self.screen {
            Screen::Home => return,
            Screen::LiveScores => self.live.criteria = MatchCriteria::default(),
            Screen::Teams => self.teams.criteria = TeamCriteria::default(),
            Screen::Players => self.players.criteria = PlayerCriteria::default(),
            Screen::News => self.news.criteria = NewsCriteria::default(),
        }
        self.end_search();
        self.reset_selection();
        self.push_log(format!("[INFO] Filters cleared: {}", screen_label(self.screen)));
    }

    /// Whether the active view is capturing keystrokes into its search box.
    pub fn search_active(&self) -> bool {
        match self.screen {
            Screen::Teams => self.teams.search_active,
            Screen::Players => self.players.search_active,
            Screen::News => self.news.search_active,
            Screen::Home | Screen::LiveScores => false,
        }
    }

    pub fn begin_search(&mut self) {
        match self.screen {
            Screen::Teams => self.teams.search_active = true,
            Screen::Players => self.players.search_active = true,
            Screen::News => self.news.search_active = true,
            Screen::Home | Screen::LiveScores => {}
        }
    }

    pub fn end_search(&mut self) {
        self.teams.search_active = false;
        self.players.search_active = false;
        self.news.search_active = false;
    }

    pub fn push_search_char(&mut self, c: char) {
        match self.screen {
            Screen::Teams if self.teams.search_active => self.teams.criteria.search.push(c),
            Screen::Players if self.players.search_active => {
                self.players.criteria.search.push(c)
            }
            Screen::News if self.news.search_active => self.news.criteria.search.push(c),
            _ => return,
        }
        self.reset_selection();
    }

    pub fn pop_search_char(&mut self) {
        let popped = match self.screen {
            Screen::Teams if self.teams.search_active => self.teams.criteria.search.pop(),
            Screen::Players if self.players.search_active => self.players.criteria.search.pop(),
            Screen::News if self.news.search_active => self.news.criteria.search.pop(),
            _ => None,
        };
        if popped.is_some() {
            self.reset_selection();
        }
    }

    pub fn active_search_text(&self) -> Option<&str> {
        match self.screen {
            Screen::Teams => Some(self.teams.criteria.search.as_str()),
            Screen::Players => Some(self.players.criteria.search.as_str()),
            Screen::News => Some(self.news.criteria.search.as_str()),
            Screen::Home | Screen::LiveScores => None,
        }
    }

    pub fn push_log(&mut self, msg: impl Into<String>) {
        const MAX_LOGS: usize = 200;
        self.logs.push_back(msg.into());
        while self.logs.len() > MAX_LOGS {
            self.logs.pop_front();
        }
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }
}

fn screen_index(screen: Screen) -> usize {
    Screen::ALL
        .iter()
        .position(|s| *s == screen)
        .unwrap_or(0)
}

/// Steps "All" -> first option -> ... -> last option -> "All".
pub fn cycle_choice<T: Copy + PartialEq>(current: Option<T>, options: &[T]) -> Option<T> {
    match current {
        None => options.first().copied(),
        Some(value) => options
            .iter()
            .position(|opt| *opt == value)
            .and_then(|idx| options.get(idx + 1))
            .copied(),
    }
}

pub fn choice_label<T: Copy>(choice: Option<T>, label: fn(T) -> &'static str) -> &'static str {
    choice.map(label).unwrap_or("All")
}

pub fn sport_label(sport: Sport) -> &'static str {
    match sport {
        Sport::Football => "Football",
        Sport::Basketball => "Basketball",
        Sport::Soccer => "Soccer",
        Sport::Tennis => "Tennis",
        Sport::Baseball => "Baseball",
    }
}

pub fn league_label(league: League) -> &'static str {
    match league {
        League::PremierLeague => "Premier League",
        League::Nba => "NBA",
        League::ChampionsLeague => "Champions League",
        League::AtpTour => "ATP Tour",
        League::Mlb => "MLB",
    }
}

pub fn status_label(status: MatchStatus) -> &'static str {
    match status {
        MatchStatus::Live => "Live",
        MatchStatus::Finished => "Finished",
        MatchStatus::Upcoming => "Upcoming",
    }
}

pub fn position_label(position: Position) -> &'static str {
    match position {
        Position::Forward => "Forward",
        Position::Defender => "Defender",
        Position::Midfielder => "Midfielder",
        Position::Goalkeeper => "Goalkeeper",
        Position::Guard => "Guard",
        Position::Center => "Center",
    }
}

pub fn category_label(category: NewsCategory) -> &'static str {
    match category {
        NewsCategory::Football => "Football",
        NewsCategory::Basketball => "Basketball",
        NewsCategory::Soccer => "Soccer",
        NewsCategory::Tennis => "Tennis",
        NewsCategory::Baseball => "Baseball",
        NewsCategory::Transfers => "Transfers",
        NewsCategory::Results => "Results",
    }
}

pub fn screen_label(screen: Screen) -> &'static str {
    match screen {
        Screen::Home => "Home",
        Screen::LiveScores => "Live Scores",
        Screen::Teams => "Teams",
        Screen::Players => "Players",
        Screen::News => "News",
    }
}

pub fn sport_from_label(raw: &str) -> Option<Sport> {
    Sport::ALL.into_iter().find(|s| sport_label(*s) == raw)
}

pub fn status_from_label(raw: &str) -> Option<MatchStatus> {
    MatchStatus::ALL.into_iter().find(|s| status_label(*s) == raw)
}

pub fn position_from_label(raw: &str) -> Option<Position> {
    Position::ALL.into_iter().find(|p| position_label(*p) == raw)
}

pub fn category_from_label(raw: &str) -> Option<NewsCategory> {
    NewsCategory::ALL
        .into_iter()
        .find(|c| category_label(*c) == raw)
}
