use anyhow::{Context, Result, anyhow};
use chrono::Utc;
use serde::Serialize;

use sportshub_terminal::config;
use sportshub_terminal::filter::{
    Criteria, FieldCriteria, MatchCriteria, NewsCriteria, PlayerCriteria, Query, TeamCriteria,
    filter_records, query_from_pairs,
};
use sportshub_terminal::mock_data::MockData;

const USAGE: &str =
    "usage: mock_dump <matches|live|teams|players|news> [field=value ...] [--seed N]";

fn main() -> Result<()> {
    config::load_env_files();
    let args = std::env::args().skip(1).collect::<Vec<_>>();

    let view = parse_view_arg(&args)?;
    let seed = parse_seed_arg(&args)?
        .or(config::app_config().seed)
        .unwrap_or_else(rand::random::<u64>);
    let pairs = parse_pairs(&args);
    let pairs = pairs
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect::<Vec<_>>();

    let data = MockData::generate(seed, Utc::now());
    eprintln!("seed={seed} view={view} criteria={}", pairs.len());

    let out = match view {
        "matches" => dump::<_, MatchCriteria>(&data.all_matches, &pairs)?,
        "live" => dump::<_, MatchCriteria>(&data.live_matches, &pairs)?,
        "teams" => dump::<_, TeamCriteria>(&data.teams, &pairs)?,
        "players" => dump::<_, PlayerCriteria>(&data.players, &pairs)?,
        "news" => dump::<_, NewsCriteria>(&data.news, &pairs)?,
        other => return Err(anyhow!("unknown view '{other}'\n{USAGE}")),
    };
    println!("{out}");
    Ok(())
}

fn dump<R, C>(records: &[R], pairs: &[(&str, &str)]) -> Result<String>
where
    R: Serialize,
    C: FieldCriteria + Criteria<R>,
{
    let query: Query<C> = query_from_pairs(pairs);
    if matches!(query, Query::Unsatisfiable) {
        eprintln!("warning: unknown field or value, result is empty");
    }
    let hits = filter_records(records, &query);
    serde_json::to_string_pretty(&hits).context("serialize filtered records")
}

fn parse_seed_arg(args: &[String]) -> Result<Option<u64>> {
    for (idx, arg) in args.iter().enumerate() {
        let raw = if let Some(val) = arg.strip_prefix("--seed=") {
            val
        } else if arg == "--seed" {
            args.get(idx + 1)
                .map(String::as_str)
                .ok_or_else(|| anyhow!("--seed needs a value"))?
        } else {
            continue;
        };
        let seed = raw
            .trim()
            .parse::<u64>()
            .with_context(|| format!("invalid seed '{raw}'"))?;
        return Ok(Some(seed));
    }
    Ok(None)
}

/// The single positional argument. Anything else without `=` is rejected so a
/// mistyped criterion cannot widen the result.
fn parse_view_arg(args: &[String]) -> Result<&str> {
    let mut positional = positional_args(args);
    let view = positional.next().ok_or_else(|| anyhow!(USAGE))?;
    if let Some(extra) = positional.next() {
        return Err(anyhow!("unexpected argument '{extra}'\n{USAGE}"));
    }
    Ok(view.as_str())
}

/// Arguments that are neither flags nor the value following `--seed`.
fn positional_args(args: &[String]) -> impl Iterator<Item = &String> {
    args.iter().enumerate().filter_map(|(idx, arg)| {
        let is_seed_value = idx > 0 && args[idx - 1] == "--seed";
        (!arg.starts_with("--") && !arg.contains('=') && !is_seed_value).then_some(arg)
    })
}

fn parse_pairs(args: &[String]) -> Vec<(String, String)> {
    args.iter()
        .filter(|arg| !arg.starts_with("--"))
        .filter_map(|arg| arg.split_once('='))
        .map(|(field, value)| (field.trim().to_string(), value.trim().to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{parse_pairs, parse_seed_arg, parse_view_arg};

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn seed_value_is_not_taken_as_view() {
        let argv = args(&["--seed", "5", "news"]);
        assert_eq!(parse_view_arg(&argv).unwrap(), "news");
        assert_eq!(parse_seed_arg(&argv).unwrap(), Some(5));
        assert!(parse_pairs(&argv).is_empty());
    }

    #[test]
    fn inline_seed_and_pairs_are_parsed() {
        let argv = args(&["news", "--seed=5", "category=Transfers"]);
        assert_eq!(parse_view_arg(&argv).unwrap(), "news");
        assert_eq!(parse_seed_arg(&argv).unwrap(), Some(5));
        assert_eq!(
            parse_pairs(&argv),
            vec![("category".to_string(), "Transfers".to_string())]
        );
    }

    #[test]
    fn pair_value_keeps_later_equals_signs() {
        let argv = args(&["teams", "search=a=b"]);
        assert_eq!(
            parse_pairs(&argv),
            vec![("search".to_string(), "a=b".to_string())]
        );
    }

    #[test]
    fn missing_seed_is_none() {
        assert_eq!(parse_seed_arg(&args(&["players"])).unwrap(), None);
    }

    #[test]
    fn seed_flag_without_value_fails() {
        let err = parse_seed_arg(&args(&["news", "--seed"])).unwrap_err();
        assert!(err.to_string().contains("--seed needs a value"));
    }

    #[test]
    fn non_numeric_seed_fails() {
        let err = parse_seed_arg(&args(&["news", "--seed=abc"])).unwrap_err();
        assert!(err.to_string().contains("invalid seed 'abc'"));
    }

    #[test]
    fn stray_positional_argument_is_rejected() {
        let err = parse_view_arg(&args(&["news", "trans", "--seed", "3"])).unwrap_err();
        assert!(err.to_string().contains("unexpected argument 'trans'"));
    }

    #[test]
    fn missing_view_is_rejected() {
        let err = parse_view_arg(&args(&["--seed=3", "sport=Tennis"])).unwrap_err();
        assert!(err.to_string().starts_with("usage: mock_dump"));
    }
}
