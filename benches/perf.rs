use chrono::{TimeZone, Utc};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use sportshub_terminal::filter::{
    MatchCriteria, NewsCriteria, PlayerCriteria, Query, TextQuery, filter_records,
    query_from_pairs,
};
use sportshub_terminal::mock_data::MockData;
use sportshub_terminal::state::{MatchStatus, Position, Sport};

fn sample() -> MockData {
    let now = Utc
        .with_ymd_and_hms(2026, 3, 14, 12, 0, 0)
        .single()
        .expect("valid timestamp");
    MockData::generate(7, now)
}

fn bench_generate(c: &mut Criterion) {
    let now = Utc::now();
    c.bench_function("mock_data_generate", |b| {
        b.iter(|| {
            let data = MockData::generate(black_box(7), now);
            black_box(data.news.len());
        })
    });
}

fn bench_filter_matches(c: &mut Criterion) {
    let data = sample();
    let criteria = MatchCriteria {
        sport: Some(Sport::Basketball),
        status: Some(MatchStatus::Live),
    };
    c.bench_function("filter_matches_sport_status", |b| {
        b.iter(|| {
            let hits = filter_records(black_box(&data.all_matches), &criteria);
            black_box(hits.len());
        })
    });
}

fn bench_filter_players_search(c: &mut Criterion) {
    let data = sample();
    let criteria = PlayerCriteria {
        search: TextQuery::new("an"),
        sport: None,
        position: Some(Position::Forward),
    };
    c.bench_function("filter_players_search", |b| {
        b.iter(|| {
            let hits = filter_records(black_box(&data.players), &criteria);
            black_box(hits.len());
        })
    });
}

fn bench_filter_news_pairs(c: &mut Criterion) {
    let data = sample();
    c.bench_function("filter_news_from_pairs", |b| {
        b.iter(|| {
            let query: Query<NewsCriteria> =
                query_from_pairs(black_box(&[("category", "Transfers"), ("search", "deal")]));
            let hits = filter_records(&data.news, &query);
            black_box(hits.len());
        })
    });
}

criterion_group!(
    perf,
    bench_generate,
    bench_filter_matches,
    bench_filter_players_search,
    bench_filter_news_pairs
);
criterion_main!(perf);
