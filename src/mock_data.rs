use chrono::{DateTime, Datelike, Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::state::{
    League, MatchClock, MatchStatus, MatchSummary, NewsArticle, NewsCategory, PlayerProfile,
    Position, Sport, TeamProfile, league_label, sport_label,
};

pub const LIVE_FEATURED_COUNT: usize = 6;
pub const LIVE_MATCH_COUNT: usize = 8;
pub const FINISHED_MATCH_COUNT: usize = 6;
pub const UPCOMING_MATCH_COUNT: usize = 4;
pub const TEAM_COUNT: usize = 24;
pub const PLAYER_COUNT: usize = 32;
pub const NEWS_COUNT: usize = 20;
pub const FEATURED_NEWS_COUNT: usize = 3;

const CLUB_WORDS: &[&str] = &[
    "Hartmann", "Keeling", "Schaden", "Gutkowski", "Rempel", "Bergstrom", "Kozey", "Lubowitz",
    "Okuneva", "Halvorson", "Stanton", "Marquardt", "Willms", "Bogan", "Fadel", "Quigley",
    "Reichert", "Jaskolski", "Mraz", "Dietrich",
];

const ANIMAL_TYPES: &[&str] = &[
    "bear", "bird", "cat", "cetacean", "cow", "crocodilia", "dog", "fish", "horse", "insect",
    "lion", "rabbit", "rodent", "snake",
];

const FIRST_NAMES: &[&str] = &[
    "Amara", "Bruno", "Chloe", "Dario", "Elena", "Felix", "Grace", "Hugo", "Ines", "Jonas",
    "Kofi", "Lena", "Mateo", "Nadia", "Oscar", "Priya", "Rafael", "Sofia", "Tariq", "Yuki",
];

const LAST_NAMES: &[&str] = &[
    "Anderson", "Bauer", "Costa", "Dubois", "Eriksen", "Fischer", "Garcia", "Hansen", "Ito",
    "Jovanovic", "Kowalski", "Larsen", "Moreau", "Nakamura", "Okafor", "Petrov", "Rossi",
    "Silva", "Torres", "Weber",
];

const CITIES: &[&str] = &[
    "Lakeview", "Port Ellis", "Northbridge", "Stonehaven", "Riverton", "Ashford", "Westmere",
    "Brookfield", "Fairhaven", "Millbrook", "Oakridge", "Clearwater", "Redcliff", "Highgate",
];

const COUNTRIES: &[&str] = &[
    "Argentina", "Brazil", "Canada", "Croatia", "Denmark", "France", "Germany", "Ghana", "Italy",
    "Japan", "Mexico", "Nigeria", "Norway", "Portugal", "Spain", "United States",
];

const TEAM_BLURBS: &[&str] = &[
    "Known for a relentless pressing style and a loyal home crowd.",
    "A young squad built around an academy that keeps producing starters.",
    "Veteran leadership and set-piece discipline have defined recent seasons.",
    "Fast in transition and dangerous on the counter.",
    "Rebuilding under a new coaching staff with an eye on the playoffs.",
    "Consistent contenders with one of the deepest benches in the league.",
];

const STORY_LINES: &[&str] = &[
    "The coaching staff praised the response after a difficult opening spell.",
    "Supporters packed the stands for what many called the best atmosphere of the season.",
    "Analysts point to improved defensive structure as the key difference.",
    "Injury news will shape selection decisions ahead of the next fixture.",
    "The front office is weighing its options before the deadline.",
    "Midweek fixtures leave little time for recovery.",
    "Statistics show a sharp rise in chances created over the last month.",
    "The captain called it a turning point for the dressing room.",
];

/// The four collections shown by the app, generated once at startup.
#[derive(Debug, Clone, Serialize)]
pub struct MockData {
    pub seed: u64,
    pub generated_at: DateTime<Utc>,
    pub live_matches: Vec<MatchSummary>,
    pub all_matches: Vec<MatchSummary>,
    pub teams: Vec<TeamProfile>,
    pub players: Vec<PlayerProfile>,
    pub news: Vec<NewsArticle>,
}

impl MockData {
    pub fn generate(seed: u64, now: DateTime<Utc>) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        let live_matches = generate_matches(&mut rng, LIVE_FEATURED_COUNT, MatchStatus::Live, now);
        let mut all_matches = Vec::with_capacity(
            LIVE_MATCH_COUNT + FINISHED_MATCH_COUNT + UPCOMING_MATCH_COUNT,
        );
        all_matches.extend(generate_matches(
            &mut rng,
            LIVE_MATCH_COUNT,
            MatchStatus::Live,
            now,
        ));
        all_matches.extend(generate_matches(
            &mut rng,
            FINISHED_MATCH_COUNT,
            MatchStatus::Finished,
            now,
        ));
        all_matches.extend(generate_matches(
            &mut rng,
            UPCOMING_MATCH_COUNT,
            MatchStatus::Upcoming,
            now,
        ));

        let teams = generate_teams(&mut rng, TEAM_COUNT, now);
        let players = generate_players(&mut rng, PLAYER_COUNT);
        let news = generate_news(&mut rng, NEWS_COUNT, now);

        Self {
            seed,
            generated_at: now,
            live_matches,
            all_matches,
            teams,
            players,
            news,
        }
    }
}

pub fn generate_matches<R: Rng>(
    rng: &mut R,
    count: usize,
    status: MatchStatus,
    now: DateTime<Utc>,
) -> Vec<MatchSummary> {
    (0..count)
        .map(|index| {
            let clock = match status {
                MatchStatus::Live => MatchClock::Minute(rng.gen_range(1..=90)),
                MatchStatus::Finished => MatchClock::FullTime,
                MatchStatus::Upcoming => {
                    let ahead = Duration::minutes(rng.gen_range(60..=72 * 60));
                    MatchClock::Kickoff(now + ahead)
                }
            };
            MatchSummary {
                id: mock_id(rng),
                sport: cycled(&Sport::ALL, index),
                league: cycled(&League::ALL, index),
                home_team: club_name(rng),
                away_team: club_name(rng),
                home_score: rng.gen_range(0..=150),
                away_score: rng.gen_range(0..=150),
                clock,
                venue: Some(format!("{} Stadium", pick(rng, CITIES))),
                status,
            }
        })
        .collect()
}

pub fn generate_teams<R: Rng>(rng: &mut R, count: usize, now: DateTime<Utc>) -> Vec<TeamProfile> {
    (0..count)
        .map(|index| TeamProfile {
            id: mock_id(rng),
            name: club_name(rng),
            sport: cycled(&Sport::ALL, index),
            league: cycled(&League::ALL, index),
            ranking: index as u32 + 1,
            wins: rng.gen_range(5..=25),
            losses: rng.gen_range(2..=15),
            players: rng.gen_range(20..=35),
            founded: now.year() - rng.gen_range(0..50),
            description: pick(rng, TEAM_BLURBS).to_string(),
        })
        .collect()
}

pub fn generate_players<R: Rng>(rng: &mut R, count: usize) -> Vec<PlayerProfile> {
    (0..count)
        .map(|index| {
            let rating_tenths: u8 = rng.gen_range(60..=100);
            PlayerProfile {
                id: mock_id(rng),
                name: person_name(rng),
                team: club_name(rng),
                sport: cycled(&Sport::ALL, index),
                position: cycled(&Position::ALL, index),
                age: rng.gen_range(18..=40),
                goals: rng.gen_range(0..=50),
                assists: rng.gen_range(0..=30),
                matches: rng.gen_range(10..=50),
                rating: f32::from(rating_tenths) / 10.0,
                nationality: pick(rng, COUNTRIES).to_string(),
                height_cm: rng.gen_range(160..=220),
                weight_kg: rng.gen_range(60..=120),
            }
        })
        .collect()
}

pub fn generate_news<R: Rng>(rng: &mut R, count: usize, now: DateTime<Utc>) -> Vec<NewsArticle> {
    (0..count)
        .map(|index| {
            let category = cycled(&NewsCategory::ALL, index);
            let title = headline(rng, category);
            let summary_len = rng.gen_range(2..=4);
            let summary = story(rng, summary_len);
            let content = (0..5)
                .map(|_| {
                    let len = rng.gen_range(3..=5);
                    story(rng, len)
                })
                .collect::<Vec<_>>()
                .join("\n\n");
            let age = Duration::seconds(rng.gen_range(0..7 * 24 * 3600));
            NewsArticle {
                id: mock_id(rng),
                title,
                summary,
                content,
                author: person_name(rng),
                category,
                published_at: now - age,
                read_time_min: rng.gen_range(2..=10),
                views: rng.gen_range(100..=10_000),
                featured: index < FEATURED_NEWS_COUNT,
            }
        })
        .collect()
}

fn cycled<T: Copy>(options: &[T], index: usize) -> T {
    options[index % options.len()]
}

fn pick<'a, R: Rng>(rng: &mut R, options: &[&'a str]) -> &'a str {
    options.choose(rng).copied().unwrap_or_default()
}

/// Random id in the canonical 8-4-4-4-12 hex layout (version 4 bits set).
fn mock_id<R: Rng>(rng: &mut R) -> String {
    let raw: u128 = rng.r#gen();
    let raw = (raw & !(0xF << 76)) | (0x4 << 76);
    let raw = (raw & !(0x3 << 62)) | (0x2 << 62);
    let hex = format!("{raw:032x}");
    format!(
        "{}-{}-{}-{}-{}",
        &hex[0..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..32]
    )
}

fn club_name<R: Rng>(rng: &mut R) -> String {
    format!("{} {}", pick(rng, CLUB_WORDS), pick(rng, ANIMAL_TYPES))
}

fn person_name<R: Rng>(rng: &mut R) -> String {
    format!("{} {}", pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES))
}

fn story<R: Rng>(rng: &mut R, sentences: usize) -> String {
    STORY_LINES
        .choose_multiple(rng, sentences)
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

fn headline<R: Rng>(rng: &mut R, category: NewsCategory) -> String {
    let club = club_name(rng);
    let rival = club_name(rng);
    let player = person_name(rng);
    match category {
        NewsCategory::Transfers => match rng.gen_range(0..3) {
            0 => format!("{club} complete transfer of {player} after long talks"),
            1 => format!("Transfer window: {club} close in on {player}"),
            _ => format!("{player} signs with {club} in record transfer deal"),
        },
        NewsCategory::Results => {
            let league = league_label(*League::ALL.choose(rng).unwrap_or(&League::Nba));
            match rng.gen_range(0..2) {
                0 => format!("Results roundup: {club} beat {rival} as {league} race tightens"),
                _ => format!("{league} results: late drama as {club} hold off {rival}"),
            }
        }
        sport_category => {
            let sport = match sport_category {
                NewsCategory::Football => Sport::Football,
                NewsCategory::Basketball => Sport::Basketball,
                NewsCategory::Soccer => Sport::Soccer,
                NewsCategory::Tennis => Sport::Tennis,
                _ => Sport::Baseball,
            };
            let sport = sport_label(sport).to_lowercase();
            match rng.gen_range(0..3) {
                0 => format!("{player} leads {club} past {rival} in {sport} thriller"),
                1 => format!("{club} edge {rival} as {player} takes over late in the {sport} clash"),
                _ => format!("{sport} notebook: what {club} must fix before facing {rival}"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{cycled, mock_id};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn mock_id_has_uuid_layout() {
        let mut rng = StdRng::seed_from_u64(7);
        let id = mock_id(&mut rng);
        let parts = id.split('-').map(str::len).collect::<Vec<_>>();
        assert_eq!(parts, vec![8, 4, 4, 4, 12]);
        assert_eq!(&id[14..15], "4");
    }

    #[test]
    fn cycled_wraps_by_index() {
        let options = [1, 2, 3];
        assert_eq!(cycled(&options, 0), 1);
        assert_eq!(cycled(&options, 4), 2);
    }
}
