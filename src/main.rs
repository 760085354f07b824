use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chrono::Utc;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use sportshub_terminal::config;
use sportshub_terminal::display::{
    clock_label, format_age, percent_bar, rating_percent, score_label, venue_label,
    views_label, win_rate, win_rate_label,
};
use sportshub_terminal::mock_data::MockData;
use sportshub_terminal::state::{
    AppState, MatchStatus, MatchSummary, NewsCategory, Position, Screen, category_label,
    choice_label, league_label, position_label, screen_label, sport_label, status_label,
};

const QUICK_STATS: [(&str, &str); 4] = [
    ("50+", "Sports Covered"),
    ("500+", "Teams"),
    ("1000+", "Matches"),
    ("24/7", "Live Updates"),
];

struct App {
    state: AppState,
    should_quit: bool,
    tick_rate: Duration,
}

impl App {
    fn new(state: AppState, tick_rate: Duration) -> Self {
        Self {
            state,
            should_quit: false,
            tick_rate,
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        if self.state.search_active() {
            match key.code {
                KeyCode::Esc | KeyCode::Enter => self.state.end_search(),
                KeyCode::Backspace => self.state.pop_search_char(),
                KeyCode::Char(c) => self.state.push_search_char(c),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('1') => self.state.set_screen(Screen::Home),
            KeyCode::Char('2') => self.state.set_screen(Screen::LiveScores),
            KeyCode::Char('3') => self.state.set_screen(Screen::Teams),
            KeyCode::Char('4') => self.state.set_screen(Screen::Players),
            KeyCode::Char('5') => self.state.set_screen(Screen::News),
            KeyCode::Tab => self.state.next_screen(),
            KeyCode::BackTab => self.state.prev_screen(),
            KeyCode::Enter if self.state.screen == Screen::Home => {
                self.state.set_screen(Screen::LiveScores)
            }
            KeyCode::Char('j') | KeyCode::Down => self.state.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.state.select_prev(),
            KeyCode::Char('s') => self.state.cycle_sport(),
            KeyCode::Char('t') => self.state.cycle_status(),
            KeyCode::Char('p') => self.state.cycle_position(),
            KeyCode::Char('c') => self.state.cycle_category(),
            KeyCode::Char('/') => self.state.begin_search(),
            KeyCode::Char('x') => self.state.clear_filters(),
            KeyCode::Char('?') => self.state.help_overlay = !self.state.help_overlay,
            KeyCode::Esc => self.state.help_overlay = false,
            _ => {}
        }
    }
}

fn main() -> Result<()> {
    config::load_env_files();
    let cfg = config::app_config();

    let seed = cfg.seed.unwrap_or_else(rand::random::<u64>);
    let data = MockData::generate(seed, Utc::now());
    let mut state = AppState::new(data);
    state.set_screen(cfg.start_screen);
    state.push_log(format!("[INFO] Mock data generated (seed {seed})"));
    if cfg.seed.is_none() {
        state.push_log(format!(
            "[INFO] Set SPORTSHUB_SEED={seed} to replay this data set"
        ));
    }

    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("failed to enter alternate screen")?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend).context("failed to open terminal")?;

    let mut app = App::new(state, cfg.tick_rate);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("failed to leave alternate screen")?;
    terminal.show_cursor().context("failed to restore cursor")?;

    if let Err(err) = res {
        eprintln!("error: {err}");
    }
    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui(f, app))?;

        let timeout = app
            .tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }

        if last_tick.elapsed() >= app.tick_rate {
            app.state.on_tick();
            last_tick = Instant::now();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn ui(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(frame.size());

    let header = Paragraph::new(header_text(&app.state))
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    match app.state.screen {
        Screen::Home => render_home(frame, chunks[1], &app.state),
        Screen::LiveScores => render_live_scores(frame, chunks[1], &app.state),
        Screen::Teams => render_teams(frame, chunks[1], &app.state),
        Screen::Players => render_players(frame, chunks[1], &app.state),
        Screen::News => render_news(frame, chunks[1], &app.state),
    }

    let console = Paragraph::new(console_text(&app.state))
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(console, chunks[2]);

    let footer = Paragraph::new(footer_text(&app.state));
    frame.render_widget(footer, chunks[3]);

    if app.state.help_overlay {
        render_help_overlay(frame, frame.size());
    }
}

fn header_text(state: &AppState) -> Text<'static> {
    let title = Line::from(vec![
        Span::styled(
            "SPORTSHUB",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            " | {} | seed {}",
            screen_label(state.screen),
            state.data.seed
        )),
    ]);

    let mut tabs = Vec::new();
    for (idx, screen) in Screen::ALL.iter().enumerate() {
        let label = format!(" {} {} ", idx + 1, screen_label(*screen));
        let style = if *screen == state.screen {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default()
        };
        tabs.push(Span::styled(label, style));
        tabs.push(Span::raw(" "));
    }

    Text::from(vec![title, Line::from(tabs)])
}

fn footer_text(state: &AppState) -> String {
    if state.search_active() {
        return "Type to search | Backspace Delete | Enter/Esc Done".to_string();
    }
    match state.screen {
        Screen::Home => "1-5/Tab Views | Enter Live Scores | ? Help | q Quit".to_string(),
        Screen::LiveScores => {
            "j/k Move | s Sport | t Status | x Clear | 1-5/Tab Views | ? Help | q Quit".to_string()
        }
        Screen::Teams => {
            "j/k Move | / Search | s Sport | x Clear | 1-5/Tab Views | ? Help | q Quit".to_string()
        }
        Screen::Players => {
            "j/k Move | / Search | s Sport | p Position | x Clear | 1-5/Tab Views | ? Help | q Quit"
                .to_string()
        }
        Screen::News => {
            "j/k Move | / Search | c Category | x Clear | 1-5/Tab Views | ? Help | q Quit"
                .to_string()
        }
    }
}

fn console_text(state: &AppState) -> String {
    if state.logs.is_empty() {
        return "No activity yet".to_string();
    }
    let start = state.logs.len().saturating_sub(2);
    state
        .logs
        .iter()
        .skip(start)
        .cloned()
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_home(frame: &mut Frame, area: Rect, state: &AppState) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(7),
            Constraint::Min(1),
        ])
        .split(area);

    let hero = Paragraph::new(Text::from(vec![
        Line::from(Span::styled(
            "Your Ultimate Sports Destination",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("Live scores, stats, news, and everything sports in one place"),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to view live scores",
            Style::default().fg(Color::Cyan),
        )),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(hero, sections[0]);

    let stat_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(sections[1]);
    for (col, (value, label)) in stat_cols.iter().zip(QUICK_STATS) {
        let stat = Paragraph::new(Text::from(vec![
            Line::from(Span::styled(
                value,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(label),
        ]))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(stat, *col);
    }

    let live_block = Block::default()
        .title("Live Matches (2 View All)")
        .borders(Borders::ALL);
    let live_inner = live_block.inner(sections[2]);
    frame.render_widget(live_block, sections[2]);
    let featured = state.home_featured_matches();
    if featured.is_empty() {
        render_empty(frame, live_inner, "No live matches", "Check back soon.");
    } else {
        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(live_inner);
        for (card, m) in cards.iter().zip(featured) {
            frame.render_widget(Paragraph::new(featured_card(m, state.tick)), *card);
        }
    }

    let news_block = Block::default()
        .title("Latest News (5 View All)")
        .borders(Borders::ALL);
    let mut lines = Vec::new();
    for article in state.home_top_news() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("[{}] ", category_label(article.category)),
                Style::default().fg(category_color(article.category)),
            ),
            Span::styled(
                article.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!(
                "  {} | {}",
                article.published_at.format("%Y-%m-%d"),
                article.summary
            ),
            Style::default().fg(Color::DarkGray),
        )));
    }
    let news = Paragraph::new(Text::from(lines))
        .wrap(Wrap { trim: true })
        .block(news_block);
    frame.render_widget(news, sections[3]);
}

fn featured_card(m: &MatchSummary, tick: u64) -> Text<'static> {
    Text::from(vec![
        Line::from(Span::styled(
            format!("{} • {}", sport_label(m.sport), league_label(m.league)),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            format!("{} LIVE {}", live_dot(tick), clock_label(m.clock)),
            Style::default().fg(Color::Red),
        )),
        Line::from(format!("{}  {}", fit(&m.home_team, 18), m.home_score)),
        Line::from(format!("{}  {}", fit(&m.away_team, 18), m.away_score)),
        Line::from(Span::styled(
            venue_label(m).to_string(),
            Style::default().fg(Color::DarkGray),
        )),
    ])
}

fn render_live_scores(frame: &mut Frame, area: Rect, state: &AppState) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    let filtered = state.filtered_matches();
    let bar = format!(
        "Sport: {} [s]   Status: {} [t]   {} matches",
        choice_label(state.live.criteria.sport, sport_label),
        choice_label(state.live.criteria.status, status_label),
        filtered.len()
    );
    frame.render_widget(
        Paragraph::new(bar).style(Style::default().add_modifier(Modifier::BOLD)),
        sections[0],
    );

    let list_area = sections[1];
    if filtered.is_empty() {
        render_empty(
            frame,
            list_area,
            "No matches found",
            "Try adjusting your filters to see more results.",
        );
        return;
    }

    const ROW_HEIGHT: u16 = 3;
    if list_area.height < ROW_HEIGHT {
        let empty = Paragraph::new("Match list needs more height")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, list_area);
        return;
    }

    let visible = (list_area.height / ROW_HEIGHT) as usize;
    let (start, end) = visible_range(state.live.selected, filtered.len(), visible);

    for (i, idx) in (start..end).enumerate() {
        let row_area = Rect {
            x: list_area.x,
            y: list_area.y + (i as u16) * ROW_HEIGHT,
            width: list_area.width,
            height: ROW_HEIGHT,
        };

        let selected = idx == state.live.selected;
        let row_style = if selected {
            Style::default().fg(Color::White).bg(Color::DarkGray)
        } else {
            Style::default()
        };

        let m = filtered[idx];
        let status_style = Style::default()
            .fg(status_color(m.status))
            .add_modifier(Modifier::BOLD);
        let badge = match m.status {
            MatchStatus::Live => format!("{} Live", live_dot(state.tick)),
            other => status_label(other).to_string(),
        };
        let lines = vec![
            Line::from(vec![
                Span::raw(format!(
                    "{} • {}   ",
                    sport_label(m.sport),
                    league_label(m.league)
                )),
                Span::styled(badge, status_style),
            ]),
            Line::from(vec![
                Span::styled(
                    format!("{:>22}", fit(&m.home_team, 22)),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {:^11}  ", score_label(m)),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    fit(&m.away_team, 22),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("   {}", clock_label(m.clock))),
            ]),
            Line::from(Span::styled(
                venue_label(m).to_string(),
                Style::default().fg(Color::Gray),
            )),
        ];
        frame.render_widget(Paragraph::new(Text::from(lines)).style(row_style), row_area);
    }
}

fn render_teams(frame: &mut Frame, area: Rect, state: &AppState) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    let filtered = state.filtered_teams();
    let bar = format!(
        "{}   Sport: {} [s]   {} teams",
        search_label(
            state.teams.criteria.search.as_str(),
            state.teams.search_active
        ),
        choice_label(state.teams.criteria.sport, sport_label),
        filtered.len()
    );
    frame.render_widget(
        Paragraph::new(bar).style(Style::default().add_modifier(Modifier::BOLD)),
        sections[0],
    );

    if filtered.is_empty() {
        render_empty(
            frame,
            sections[1],
            "No teams found",
            "Try adjusting your search or filters.",
        );
        return;
    }

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(38)])
        .split(sections[1]);

    let visible = body[0].height as usize;
    let (start, end) = visible_range(state.teams.selected, filtered.len(), visible);
    let mut lines = Vec::new();
    for idx in start..end {
        let team = filtered[idx];
        let rate = win_rate(team.wins, team.losses).unwrap_or(0.0);
        let text = format!(
            "#{:<3} {:<22} {:<10} W{:>3} L{:>3} {:>6} {}",
            team.ranking,
            fit(&team.name, 22),
            sport_label(team.sport),
            team.wins,
            team.losses,
            win_rate_label(team.wins, team.losses),
            percent_bar(rate, 10)
        );
        lines.push(Line::from(Span::styled(text, list_row_style(idx == state.teams.selected))));
    }
    frame.render_widget(Paragraph::new(Text::from(lines)), body[0]);

    let Some(team) = state.selected_team() else {
        return;
    };
    let rate = win_rate(team.wins, team.losses).unwrap_or(0.0);
    let detail = Text::from(vec![
        Line::from(Span::styled(
            team.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "{} • {}",
            sport_label(team.sport),
            league_label(team.league)
        )),
        Line::from(format!("Rank #{}", team.ranking)),
        Line::from(""),
        Line::from(format!(
            "Wins {}   Losses {}   Players {}",
            team.wins, team.losses, team.players
        )),
        Line::from(format!("Founded {}", team.founded)),
        Line::from(format!("Win Rate {}", win_rate_label(team.wins, team.losses))),
        Line::from(Span::styled(
            percent_bar(rate, 24),
            Style::default().fg(Color::Blue),
        )),
        Line::from(""),
        Line::from(team.description.clone()),
    ]);
    let panel = Paragraph::new(detail)
        .wrap(Wrap { trim: true })
        .block(Block::default().title("Team").borders(Borders::ALL));
    frame.render_widget(panel, body[1]);
}

fn render_players(frame: &mut Frame, area: Rect, state: &AppState) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    let filtered = state.filtered_players();
    let bar = format!(
        "{}   Sport: {} [s]   Position: {} [p]   {} players",
        search_label(
            state.players.criteria.search.as_str(),
            state.players.search_active
        ),
        choice_label(state.players.criteria.sport, sport_label),
        choice_label(state.players.criteria.position, position_label),
        filtered.len()
    );
    frame.render_widget(
        Paragraph::new(bar).style(Style::default().add_modifier(Modifier::BOLD)),
        sections[0],
    );

    if filtered.is_empty() {
        render_empty(
            frame,
            sections[1],
            "No players found",
            "Try adjusting your search or filters.",
        );
        return;
    }

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(38)])
        .split(sections[1]);

    let visible = body[0].height as usize;
    let (start, end) = visible_range(state.players.selected, filtered.len(), visible);
    let mut lines = Vec::new();
    for idx in start..end {
        let p = filtered[idx];
        let selected = idx == state.players.selected;
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<18} {:<18} ", fit(&p.name, 18), fit(&p.team, 18)),
                list_row_style(selected),
            ),
            Span::styled(
                format!("{:<10} ", position_label(p.position)),
                list_row_style(selected).fg(position_color(p.position)),
            ),
            Span::styled(
                format!(
                    "G{:>3} A{:>3} M{:>3} ★{:.1}",
                    p.goals, p.assists, p.matches, p.rating
                ),
                list_row_style(selected),
            ),
        ]));
    }
    frame.render_widget(Paragraph::new(Text::from(lines)), body[0]);

    let Some(p) = state.selected_player() else {
        return;
    };
    let detail = Text::from(vec![
        Line::from(Span::styled(
            p.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(p.team.clone()),
        Line::from(Span::styled(
            position_label(p.position),
            Style::default().fg(position_color(p.position)),
        )),
        Line::from(""),
        Line::from(format!("Sport        {}", sport_label(p.sport))),
        Line::from(format!("Age          {}", p.age)),
        Line::from(format!("Nationality  {}", p.nationality)),
        Line::from(format!("Height       {} cm", p.height_cm)),
        Line::from(format!("Weight       {} kg", p.weight_kg)),
        Line::from(""),
        Line::from(format!("Goals        {}", p.goals)),
        Line::from(format!("Assists      {}", p.assists)),
        Line::from(format!("Matches      {}", p.matches)),
        Line::from(format!("Rating       {:.1}", p.rating)),
        Line::from(""),
        Line::from("Performance"),
        Line::from(Span::styled(
            percent_bar(f64::from(rating_percent(p.rating)), 24),
            Style::default().fg(Color::Blue),
        )),
    ]);
    let panel = Paragraph::new(detail)
        .block(Block::default().title("Player").borders(Borders::ALL));
    frame.render_widget(panel, body[1]);
}

fn render_news(frame: &mut Frame, area: Rect, state: &AppState) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    let filtered = state.filtered_news();
    let bar = format!(
        "{}   Category: {} [c]   {} articles",
        search_label(
            state.news.criteria.search.as_str(),
            state.news.search_active
        ),
        choice_label(state.news.criteria.category, category_label),
        filtered.len()
    );
    frame.render_widget(
        Paragraph::new(bar).style(Style::default().add_modifier(Modifier::BOLD)),
        sections[0],
    );

    if filtered.is_empty() {
        render_empty(
            frame,
            sections[1],
            "No articles found",
            "Try adjusting your search or category filter.",
        );
        return;
    }

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(sections[1]);

    let lead_id = state.news_lead().map(|a| a.id.as_str());
    let visible = body[0].height as usize;
    let (start, end) = visible_range(state.news.selected, filtered.len(), visible);
    let mut lines = Vec::new();
    for idx in start..end {
        let article = filtered[idx];
        let selected = idx == state.news.selected;
        let marker = if Some(article.id.as_str()) == lead_id { "★ " } else { "  " };
        lines.push(Line::from(vec![
            Span::styled(marker, list_row_style(selected).fg(Color::Yellow)),
            Span::styled(
                format!("{:<11}", category_label(article.category)),
                list_row_style(selected).fg(category_color(article.category)),
            ),
            Span::styled(article.title.clone(), list_row_style(selected)),
        ]));
    }
    frame.render_widget(Paragraph::new(Text::from(lines)), body[0]);

    let Some(article) = state.selected_news() else {
        return;
    };
    let mut detail = vec![
        Line::from(Span::styled(
            category_label(article.category),
            Style::default()
                .fg(category_color(article.category))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            article.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "By {} • {} • {} min read • {} views",
                article.author,
                format_age(article.published_at, state.now()),
                article.read_time_min,
                views_label(article.views)
            ),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            article.summary.clone(),
            Style::default().add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
    ];
    for paragraph in article.content.split("\n\n") {
        detail.push(Line::from(paragraph.to_string()));
        detail.push(Line::from(""));
    }
    let title = if article.featured { "Featured" } else { "Article" };
    let panel = Paragraph::new(Text::from(detail))
        .wrap(Wrap { trim: true })
        .block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(panel, body[1]);
}

fn render_empty(frame: &mut Frame, area: Rect, title: &str, hint: &str) {
    let text = Text::from(vec![
        Line::from(""),
        Line::from(Span::styled(
            title.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            hint.to_string(),
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

fn search_label(text: &str, active: bool) -> String {
    let cursor = if active { "_" } else { "" };
    format!("Search: {text}{cursor} [/]")
}

fn list_row_style(selected: bool) -> Style {
    if selected {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    } else {
        Style::default()
    }
}

fn live_dot(tick: u64) -> &'static str {
    if tick % 4 < 2 { "●" } else { "○" }
}

fn status_color(status: MatchStatus) -> Color {
    match status {
        MatchStatus::Live => Color::Red,
        MatchStatus::Finished => Color::Green,
        MatchStatus::Upcoming => Color::Blue,
    }
}

fn position_color(position: Position) -> Color {
    match position {
        Position::Forward => Color::Red,
        Position::Defender => Color::Blue,
        Position::Midfielder => Color::Green,
        Position::Goalkeeper => Color::Yellow,
        Position::Guard => Color::Magenta,
        Position::Center => Color::Cyan,
    }
}

fn category_color(category: NewsCategory) -> Color {
    match category {
        NewsCategory::Football => Color::Blue,
        NewsCategory::Basketball => Color::LightRed,
        NewsCategory::Soccer => Color::Green,
        NewsCategory::Tennis => Color::Yellow,
        NewsCategory::Baseball => Color::Red,
        NewsCategory::Transfers => Color::Magenta,
        NewsCategory::Results => Color::Cyan,
    }
}

/// Truncate to `width` chars, marking the cut with an ellipsis.
fn fit(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out = text.chars().take(width.saturating_sub(1)).collect::<String>();
    out.push('…');
    out
}

fn visible_range(selected: usize, total: usize, visible: usize) -> (usize, usize) {
    if total == 0 {
        return (0, 0);
    }
    if total <= visible {
        return (0, total);
    }

    let mut start = selected.saturating_sub(visible / 2);
    if start + visible > total {
        start = total - visible;
    }
    (start, start + visible)
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);
    frame.render_widget(Clear, popup_area);

    let text = [
        "SportsHub Terminal - Help",
        "",
        "Views:",
        "  1 Home  2 Live Scores  3 Teams  4 Players  5 News",
        "  Tab / Shift-Tab   Next / previous view",
        "",
        "Lists:",
        "  j/k or ↑/↓   Move selection",
        "  s            Cycle sport filter",
        "  t            Cycle status filter (Live Scores)",
        "  p            Cycle position filter (Players)",
        "  c            Cycle category filter (News)",
        "  /            Search (Teams, Players, News)",
        "  x            Clear filters",
        "",
        "  ?            Toggle help",
        "  q            Quit",
    ]
    .join("\n");

    let help = Paragraph::new(text)
        .block(Block::default().title("Help").borders(Borders::ALL))
        .style(Style::default());
    frame.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::footer_text;
    use sportshub_terminal::mock_data::MockData;
    use sportshub_terminal::state::{AppState, Screen};

    #[test]
    fn every_view_footer_lists_help_and_quit() {
        let now = Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap();
        let mut state = AppState::new(MockData::generate(1, now));
        for screen in Screen::ALL {
            state.set_screen(screen);
            let footer = footer_text(&state);
            assert!(footer.contains("? Help"), "{screen:?}: {footer}");
            assert!(footer.contains("q Quit"), "{screen:?}: {footer}");
        }
    }
}
