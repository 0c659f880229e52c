mod helpers;

use helpers::TestBot;
use pokerduel_engine::bot::PokerBot;
use pokerduel_runner::errors::TournamentError;
use pokerduel_runner::logging::TestLogSubscriber;
use pokerduel_runner::results::{standings, JsonResultSink, MemorySink, load_results};
use pokerduel_runner::tournament::{TournamentConfig, TournamentScheduler};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::Registry;

fn config(matches: u32, hands: u32) -> TournamentConfig {
    TournamentConfig {
        matches_per_pair: matches,
        hands_per_match: hands,
        seed: Some(17),
        ..Default::default()
    }
}

fn pairs(sink: &MemorySink) -> Vec<(String, String)> {
    sink.records
        .iter()
        .map(|r| (r.bot_a.clone(), r.bot_b.clone()))
        .collect()
}

#[test]
fn every_ordered_pair_gets_one_record() {
    let bots = vec![
        TestBot::caller("a").boxed(),
        TestBot::caller("b").boxed(),
        TestBot::caller("c").boxed(),
    ];
    let mut sink = MemorySink::default();
    let report = TournamentScheduler::new(config(3, 4))
        .unwrap()
        .run(bots, &mut sink)
        .unwrap();

    let expected: Vec<(String, String)> = [("a", "b"), ("a", "c"), ("b", "a"), ("b", "c"), ("c", "a"), ("c", "b")]
        .iter()
        .map(|(x, y)| (x.to_string(), y.to_string()))
        .collect();
    assert_eq!(pairs(&sink), expected);
    assert!(sink.finished);
    assert_eq!(report.records, sink.records);
    assert!(report.disqualified.is_empty());
    for r in &sink.records {
        assert_eq!(r.matches_played, 3);
        assert!(r.bot_a_wins + r.bot_b_wins <= 3);
    }
}

#[test]
fn folding_bot_loses_every_match() {
    let bots = vec![TestBot::folder("folder").boxed(), TestBot::caller("caller").boxed()];
    let mut sink = MemorySink::default();
    TournamentScheduler::new(config(5, 10))
        .unwrap()
        .run(bots, &mut sink)
        .unwrap();

    let first = &sink.records[0];
    assert_eq!((first.bot_a.as_str(), first.bot_b.as_str()), ("folder", "caller"));
    assert_eq!((first.bot_a_wins, first.bot_b_wins), (0, 5));
    assert_eq!(first.hands_played, 50);
    let second = &sink.records[1];
    assert_eq!((second.bot_a_wins, second.bot_b_wins), (5, 0));
    assert_eq!(standings(&sink.records)[0], ("caller".to_string(), 10));
}

#[test]
fn match_stops_when_a_stack_is_gone() {
    let bots = vec![TestBot::folder("folder").boxed(), TestBot::caller("caller").boxed()];
    let mut sink = MemorySink::default();
    let cfg = TournamentConfig {
        starting_stack: 30,
        ..config(2, 10)
    };
    TournamentScheduler::new(cfg).unwrap().run(bots, &mut sink).unwrap();
    // folder: 30 -> 20 (folds SB) -> 0 (folds BB after the call)
    assert_eq!(sink.records[0].hands_played, 4);
    assert_eq!(sink.records[0].bot_b_wins, 2);
}

#[test]
fn equal_stacks_score_no_win() {
    let bots = vec![TestBot::folder("x").boxed(), TestBot::folder("y").boxed()];
    let mut sink = MemorySink::default();
    TournamentScheduler::new(config(3, 2)).unwrap().run(bots, &mut sink).unwrap();
    let r = &sink.records[0];
    assert_eq!((r.bot_a_wins, r.bot_b_wins, r.ties()), (0, 0, 3));
}

#[test]
fn faulting_bot_is_disqualified_and_its_match_dropped() {
    let mut sleepy = TestBot::caller("sleepy");
    sleepy.fail_on_query = Some(1);
    let bots = vec![
        TestBot::caller("a").boxed(),
        sleepy.boxed(),
        TestBot::caller("b").boxed(),
    ];
    let mut sink = MemorySink::default();
    let report = TournamentScheduler::new(config(2, 3))
        .unwrap()
        .run(bots, &mut sink)
        .unwrap();

    let expected = vec![
        ("a".to_string(), "b".to_string()),
        ("b".to_string(), "a".to_string()),
    ];
    assert_eq!(pairs(&sink), expected);
    assert_eq!(report.disqualified, vec!["sleepy".to_string()]);
}

#[test]
fn earlier_records_survive_a_later_disqualification() {
    // Two resets per pairing: fine against "a", faults on its first reset against "b".
    let mut flaky = TestBot::caller("flaky");
    flaky.fail_on_reset = Some(3);
    let bots = vec![
        TestBot::caller("a").boxed(),
        TestBot::caller("b").boxed(),
        flaky.boxed(),
    ];
    let mut sink = MemorySink::default();
    let report = TournamentScheduler::new(config(2, 3))
        .unwrap()
        .run(bots, &mut sink)
        .unwrap();

    let expected = vec![
        ("a".to_string(), "b".to_string()),
        ("a".to_string(), "flaky".to_string()),
        ("b".to_string(), "a".to_string()),
    ];
    assert_eq!(pairs(&sink), expected);
    assert_eq!(sink.records[1].matches_played, 2);
    assert_eq!(report.disqualified, vec!["flaky".to_string()]);
}

#[test]
fn fault_is_charged_to_the_faulting_side_only() {
    let mut sleepy = TestBot::caller("sleepy");
    sleepy.fail_on_query = Some(2);
    let bots = vec![sleepy.boxed(), TestBot::caller("steady").boxed(), TestBot::caller("other").boxed()];
    let mut sink = MemorySink::default();
    let report = TournamentScheduler::new(config(1, 5))
        .unwrap()
        .run(bots, &mut sink)
        .unwrap();
    assert_eq!(report.disqualified, vec!["sleepy".to_string()]);
    assert_eq!(
        pairs(&sink),
        vec![
            ("steady".to_string(), "other".to_string()),
            ("other".to_string(), "steady".to_string()),
        ]
    );
}

#[test]
fn disqualification_is_logged_as_warning() {
    let mut sleepy = TestBot::caller("sleepy");
    sleepy.fail_on_query = Some(1);
    let bots: Vec<Box<dyn PokerBot>> = vec![sleepy.boxed(), TestBot::caller("a").boxed()];

    let logs = TestLogSubscriber::new();
    let registry = Registry::default().with(logs.clone().into_layer::<Registry>());
    tracing::subscriber::with_default(registry, || {
        let mut sink = MemorySink::default();
        TournamentScheduler::new(config(1, 1))
            .unwrap()
            .run(bots, &mut sink)
            .unwrap();
    });

    let warnings = logs.at_level(Level::WARN);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].field("bot"), Some("sleepy"));
}

#[test]
fn fewer_than_two_bots_is_an_error() {
    let mut sink = MemorySink::default();
    let err = TournamentScheduler::new(config(1, 1))
        .unwrap()
        .run(vec![TestBot::caller("alone").boxed()], &mut sink)
        .unwrap_err();
    assert!(matches!(err, TournamentError::NotEnoughBots(1)));
}

#[test]
fn json_sink_receives_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let mut sink = JsonResultSink::new(dir.path());
    let bots = vec![TestBot::caller("a").boxed(), TestBot::folder("b").boxed()];
    TournamentScheduler::new(config(2, 2)).unwrap().run(bots, &mut sink).unwrap();

    let saved = load_results(&dir.path().join("results.json")).unwrap();
    assert_eq!(saved.results.len(), 2);
    assert_eq!(saved.results[0].bot_a, "a");
    assert_eq!(sink.written().len(), 2);
}
