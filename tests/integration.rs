// Integration tests (native) for the `word-guess` crate.
// These drive the round engine headlessly with an in-memory store, a manual
// scheduler and a presenter that records every notification.

use word_guess::{
    FixedIndex, GameConfig, GuessResult, ManualScheduler, MemoryStore, Outcome, Phase, Presenter, RandomSource,
    RoundEngine, RoundState, ScoreRecord, ScoreStore, SequenceIndex,
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
    Started(String),
    Display(String),
    Tick(u32),
    Ended(Outcome),
    Score(u32, u32),
}

#[derive(Default)]
struct Recorder {
    events: Vec<Event>,
}

impl Presenter for Recorder {
    fn on_round_started(&mut self, round: &RoundState) {
        self.events.push(Event::Started(round.secret_word().to_owned()));
    }
    fn on_guess_display_changed(&mut self, revealed: &[char]) {
        self.events.push(Event::Display(revealed.iter().collect()));
    }
    fn on_tick(&mut self, time_remaining: u32) {
        self.events.push(Event::Tick(time_remaining));
    }
    fn on_round_ended(&mut self, outcome: Outcome) {
        self.events.push(Event::Ended(outcome));
    }
    fn on_score_changed(&mut self, wins: u32, losses: u32) {
        self.events.push(Event::Score(wins, losses));
    }
}

fn kiwi_engine<S: ScoreStore>(store: S) -> RoundEngine<S, Recorder, ManualScheduler, FixedIndex> {
    let config = GameConfig { words: vec!["kiwi".into()], ..GameConfig::default() };
    RoundEngine::new(config, store, Recorder::default(), ManualScheduler::new(), FixedIndex(0))
}

fn play_to_loss<R: RandomSource>(engine: &mut RoundEngine<MemoryStore, Recorder, ManualScheduler, R>) {
    engine.start();
    for _ in 0..engine.config().duration_secs {
        engine.tick();
    }
}

#[test]
fn kiwi_is_won_with_three_distinct_letters_in_any_order() {
    let orders = [['k', 'i', 'w'], ['i', 'w', 'k'], ['w', 'k', 'i'], ['i', 'k', 'w']];
    for order in orders {
        let mut e = kiwi_engine(MemoryStore::new());
        e.start();
        for c in order {
            e.guess(c);
        }
        assert_eq!(e.state().revealed().iter().collect::<String>(), "kiwi");
        assert_eq!(e.state().outcome(), Some(Outcome::Win), "order {:?}", order);
        assert_eq!(e.score(), ScoreRecord::new(1, 0));
    }
}

#[test]
fn timeout_after_full_duration_records_one_loss() {
    let mut e = kiwi_engine(MemoryStore::new());
    e.start();
    e.guess('k');
    for _ in 0..19 {
        e.tick();
    }
    assert_eq!(e.state().phase(), Phase::Playing);
    assert_eq!(e.state().time_remaining(), 1);
    e.tick();
    assert_eq!(e.state().phase(), Phase::Ended);
    assert_eq!(e.state().outcome(), Some(Outcome::Loss));
    assert_eq!(e.score(), ScoreRecord::new(0, 1));
    assert_eq!(e.scheduler().live(), 0);
}

#[test]
fn notifications_follow_round_lifecycle() {
    let config = GameConfig { words: vec!["corn".into()], duration_secs: 2, ..GameConfig::default() };
    let mut e = RoundEngine::new(config, MemoryStore::new(), Recorder::default(), ManualScheduler::new(), FixedIndex(0));
    e.start();
    e.guess('o');
    e.guess('z');
    e.guess('Z');
    e.tick();
    e.tick();
    assert_eq!(
        e.presenter().events,
        vec![
            Event::Score(0, 0),
            Event::Started("corn".into()),
            Event::Display("____".into()),
            Event::Display("_o__".into()),
            Event::Display("_o__".into()),
            Event::Tick(1),
            Event::Tick(0),
            Event::Ended(Outcome::Loss),
            Event::Score(0, 1),
        ]
    );
}

#[test]
fn repeated_letter_refreshes_display_without_change() {
    let mut e = kiwi_engine(MemoryStore::new());
    e.start();
    assert_eq!(e.guess('i'), GuessResult::Revealed(2));
    assert_eq!(e.guess('i'), GuessResult::Repeated);
    assert_eq!(e.guess('x'), GuessResult::Miss);
    let displays = e.presenter().events.iter().filter(|ev| matches!(ev, Event::Display(_))).count();
    assert_eq!(displays, 4);
    assert_eq!(e.state().revealed(), &['_', 'i', '_', 'i']);
}

#[test]
fn score_survives_reload_from_store() {
    let mut e = kiwi_engine(MemoryStore::with_record(ScoreRecord::new(4, 2)));
    assert_eq!(e.score(), ScoreRecord::new(4, 2));
    e.start();
    for c in ['k', 'i', 'w'] {
        e.guess(c);
    }
    play_to_loss(&mut e);
    assert_eq!(e.score(), ScoreRecord::new(5, 3));
    assert_eq!(e.store().load(), Some(ScoreRecord::new(5, 3)));

    let raw = e.store().raw().unwrap();
    let reloaded = kiwi_engine(MemoryStore::with_raw(raw));
    assert_eq!(reloaded.score(), ScoreRecord::new(5, 3));
    assert_eq!(reloaded.presenter().events, vec![Event::Score(5, 3)]);
}

#[test]
fn corrupt_record_starts_from_zero() {
    for raw in ["", "{", "{\"wins\":1}", "[1,2]", "[5,9]", "\"5\"", "{\"wins\":1,\"losses\":-4}"] {
        let e = kiwi_engine(MemoryStore::with_raw(raw));
        assert_eq!(e.score(), ScoreRecord::default(), "raw {:?}", raw);
    }
}

#[test]
fn second_end_does_not_double_count() {
    let mut e = kiwi_engine(MemoryStore::new());
    e.start();
    for c in ['k', 'i', 'w'] {
        e.guess(c);
    }
    assert!(!e.end(Outcome::Win));
    assert!(!e.end(Outcome::Loss));
    e.tick();
    assert_eq!(e.score(), ScoreRecord::new(1, 0));
    assert_eq!(e.store().save_count(), 1);
}

#[test]
fn at_most_one_countdown_across_many_rounds() {
    let config = GameConfig { words: vec!["kiwi".into(), "corn".into(), "fennel".into()], duration_secs: 3, ..GameConfig::default() };
    let mut e = RoundEngine::new(config, MemoryStore::new(), Recorder::default(), ManualScheduler::new(), SequenceIndex::new(vec![2, 0, 1]));
    for round in 0..6 {
        assert!(e.start());
        assert!(!e.start());
        assert!(!e.start());
        assert_eq!(e.scheduler().live(), 1, "round {}", round);
        assert_eq!(e.state().revealed().len(), e.state().secret_word().chars().count());
        for _ in 0..3 {
            e.tick();
        }
        assert_eq!(e.scheduler().live(), 0);
    }
    assert_eq!(e.scheduler().registrations(), 6);
    assert_eq!(e.score(), ScoreRecord::new(0, 6));
}

#[test]
fn words_are_picked_through_the_random_source() {
    let config = GameConfig::default();
    let mut e = RoundEngine::new(config, MemoryStore::new(), (), ManualScheduler::new(), SequenceIndex::new(vec![2, 7]));
    e.start();
    assert_eq!(e.state().secret_word(), "watermelon");
    e.end(Outcome::Loss);
    e.start();
    assert_eq!(e.state().secret_word(), "fennel");
}

#[test]
fn reveal_uncovers_every_matching_position() {
    let config = GameConfig { words: vec!["mushrooms".into()], ..GameConfig::default() };
    let mut e = RoundEngine::new(config, MemoryStore::new(), (), ManualScheduler::new(), FixedIndex(0));
    e.start();
    for c in ['m', 's', 'o'] {
        e.guess(c);
        let word: Vec<char> = e.state().secret_word().chars().collect();
        for (i, w) in word.iter().enumerate() {
            if *w == c {
                assert_eq!(e.state().revealed()[i], c);
            }
        }
    }
    assert_eq!(e.state().display(), "m _ s _ _ o o m s");
}
