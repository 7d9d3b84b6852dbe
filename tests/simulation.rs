use rstest::rstest;
use wordle_clusters::core::{Clue, Word, WordSet};
use wordle_clusters::solver::{GameState, SolverConfig, Trace, simulate, solve_all};
use wordle_clusters::wordlists::words_from_str;
use wordle_clusters::{Error, ErrorKind};

const ANSWERS: &str = "\
# small answer list
abbey
acorn
berry
blimp
brick
candy
chart
crane
daisy
ferry
fiber
flame
ghost
grape
house
jerky
knife
lemon
merry
mount
night
ocean
peppy
perky
plant
quilt
river
salty
shard
stone
tiger
vivid
waltz
weepy
zebra
";

const EXTRA_GUESSES: &str = "salet\nroate\ntrace\nslice\n";

fn initial() -> GameState {
    let answers = words_from_str(ANSWERS).unwrap();
    let options = words_from_str(EXTRA_GUESSES)
        .unwrap()
        .union(&answers)
        .unwrap();
    GameState::new(answers, options).unwrap()
}

fn clues(trace: &Trace) -> Vec<Clue> {
    trace
        .rounds
        .iter()
        .map(|round| Clue::new(round.guess.guess().clone(), round.feedback).unwrap())
        .collect()
}

#[rstest]
#[case::hard_mode(true)]
#[case::easy_mode(false)]
fn every_answer_is_solved(#[case] hard_mode: bool) {
    let initial = initial();
    let config = SolverConfig::default().with_hard_mode(hard_mode);
    let report = solve_all(initial.candidates(), &initial, None, &config, |_, _| {}).unwrap();

    assert!(report.failures.is_empty(), "{:?}", report.failures);
    assert_eq!(report.traces.len(), initial.candidates().len());
    for (trace, answer) in report.traces.iter().zip(initial.candidates().iter()) {
        assert_eq!(&trace.answer, answer);
        assert_eq!(trace.guesses().last(), Some(answer));
        assert!(trace.guess_count() <= config.max_rounds);
    }
}

#[test]
fn candidate_counts_follow_the_clues() {
    let initial = initial();
    let answers: Vec<Word> = initial.candidates().iter().cloned().collect();

    for answer in &answers {
        let trace = simulate(answer, &initial, &SolverConfig::default()).unwrap();
        let clues = clues(&trace);

        for (i, round) in trace.rounds.iter().enumerate() {
            let expected = answers
                .iter()
                .filter(|word| clues[..i].iter().all(|clue| clue.is_consistent_with(word)))
                .count();
            assert_eq!(round.candidates_before, expected, "{answer} round {}", i + 1);
        }

        // Every guess that misses leaves strictly fewer candidates
        for pair in trace.rounds.windows(2) {
            assert!(pair[1].candidates_before < pair[0].candidates_before);
        }
    }
}

#[test]
fn hard_mode_guesses_honor_earlier_clues() {
    let initial = initial();
    for answer in initial.candidates().iter() {
        let trace = simulate(answer, &initial, &SolverConfig::default()).unwrap();
        let clues = clues(&trace);
        for (i, clue) in clues.iter().enumerate().skip(1) {
            for earlier in &clues[..i] {
                assert!(
                    earlier.allows_as_next_guess(clue.guess()),
                    "{} breaks {earlier} on the way to {answer}",
                    clue.guess()
                );
            }
        }
    }
}

#[test]
fn solver_is_deterministic() {
    let initial = initial();
    let answer = Word::new("quilt").unwrap();
    let first: Vec<Word> = simulate(&answer, &initial, &SolverConfig::default())
        .unwrap()
        .guesses()
        .cloned()
        .collect();
    let second: Vec<Word> = simulate(&answer, &initial, &SolverConfig::default())
        .unwrap()
        .guesses()
        .cloned()
        .collect();
    assert_eq!(first, second);
}

#[test]
fn one_bad_answer_does_not_stop_the_batch() {
    let initial = initial();
    let answers = WordSet::new(["abbey", "zzzzz", "crane", "qqqqq", "zebra"]).unwrap();
    let report = solve_all(&answers, &initial, None, &SolverConfig::default(), |_, _| {}).unwrap();

    assert_eq!(report.attempted(), 5);
    let solved: Vec<&str> = report.traces.iter().map(|t| t.answer.text()).collect();
    assert_eq!(solved, ["abbey", "crane", "zebra"]);

    let failed: Vec<&str> = report.failures.iter().map(|(w, _)| w.text()).collect();
    assert_eq!(failed, ["qqqqq", "zzzzz"]);
    assert!(
        report
            .failures
            .iter()
            .all(|(w, err)| *err == Error::UnknownWord(w.to_string()))
    );
}

#[test]
fn tight_budget_is_reported_per_answer() {
    let initial = initial();
    let config = SolverConfig::default().with_max_rounds(2);
    let report = solve_all(initial.candidates(), &initial, None, &config, |_, _| {}).unwrap();

    assert_eq!(report.attempted(), initial.candidates().len());
    assert!(!report.failures.is_empty());
    for (_, err) in &report.failures {
        assert!(matches!(err, Error::BudgetExceeded { rounds: 2, .. }));
        assert_eq!(err.kind(), ErrorKind::Unsolvable);
    }
    assert!(report.traces.iter().all(|t| t.guess_count() <= 2));
    assert_eq!(
        report.distribution().values().sum::<usize>(),
        report.traces.len()
    );
}

#[test]
fn short_words_work_too() {
    let answers = words_from_str("cat\ncot\ncut\nbat\nbot\nbut\nhat\nhot\nhut\n").unwrap();
    let initial = GameState::new(answers.clone(), answers).unwrap();
    let report = solve_all(
        initial.candidates(),
        &initial,
        None,
        &SolverConfig::default(),
        |_, _| {},
    )
    .unwrap();
    assert!(report.failures.is_empty());
    assert_eq!(report.traces.len(), 9);
}
