use fairsplit_domain::{
    Activity, ActivityId, EventId, Money, Participant, ParticipantId, RoundingMode, Settlement,
    SettlementContext, SettlementEngine,
};
use rstest::{fixture, rstest};

fn people(ids: &[&str]) -> Vec<Participant> {
    ids.iter()
        .map(|id| Participant::new(*id, "event", &id.to_uppercase()))
        .collect()
}

fn activity(id: &str, amount: Money, paid_by: &str, participants: &[&str]) -> Activity {
    Activity {
        id: ActivityId::from(id),
        event_id: EventId::from("event"),
        description: id.to_owned(),
        amount,
        paid_by: ParticipantId::from(paid_by),
        participants: participants.iter().copied().map(ParticipantId::from).collect(),
    }
}

fn pay(from: &str, to: &str, amount: Money) -> Settlement {
    Settlement {
        from: ParticipantId::from(from),
        to: ParticipantId::from(to),
        amount,
    }
}

#[fixture]
fn engine() -> SettlementEngine {
    SettlementEngine::default()
}

#[rstest]
fn single_participant_pays_for_self(engine: SettlementEngine) {
    let participants = people(&["a"]);
    let activities = vec![activity("lunch", Money::from_i64(25), "a", &["a"])];

    let balances = engine
        .balances(&participants, &activities)
        .expect("aggregation should succeed");
    let settlements = engine
        .settle(&participants, &activities)
        .expect("settlement should succeed");

    assert_eq!(balances.get(&ParticipantId::from("a")), Some(Money::ZERO));
    assert!(settlements.is_empty());
}

#[rstest]
fn two_people_split_evenly(engine: SettlementEngine) {
    let participants = people(&["a", "b"]);
    let activities = vec![activity("taxi", Money::from_i64(100), "a", &["a", "b"])];

    let balances = engine
        .balances(&participants, &activities)
        .expect("aggregation should succeed");
    assert_eq!(balances.get(&ParticipantId::from("a")), Some(Money::from_i64(50)));
    assert_eq!(balances.get(&ParticipantId::from("b")), Some(Money::from_i64(-50)));

    assert_eq!(
        engine.settle(&participants, &activities),
        Ok(vec![pay("b", "a", Money::from_i64(50))])
    );
}

#[rstest]
fn three_people_share_one_payer(engine: SettlementEngine) {
    let participants = people(&["a", "b", "c"]);
    let activities = vec![activity("hotel", Money::from_i64(90), "a", &["a", "b", "c"])];

    assert_eq!(
        engine.settle(&participants, &activities),
        Ok(vec![
            pay("b", "a", Money::from_i64(30)),
            pay("c", "a", Money::from_i64(30)),
        ])
    );
}

#[rstest]
#[case::half_up(RoundingMode::HalfUp)]
#[case::half_even(RoundingMode::HalfEven)]
fn thirds_round_to_cents(#[case] mode: RoundingMode) {
    let engine = SettlementEngine::new(SettlementContext {
        rounding_mode: mode,
        ..SettlementContext::cents_default()
    })
    .expect("valid context");
    let participants = people(&["a", "b", "c"]);
    let activities = vec![activity("snacks", Money::from_i64(10), "a", &["a", "b", "c"])];

    let settlements = engine
        .settle(&participants, &activities)
        .expect("settlement should succeed");

    assert_eq!(
        settlements,
        vec![
            pay("b", "a", Money::new(333, 2)),
            pay("c", "a", Money::new(333, 2)),
        ]
    );
    let settled: Money = settlements.iter().map(|s| s.amount).sum();
    let owed = Money::from_i64(10) - Money::from_i64(10).share_of(3).expect("non-zero count");
    assert!((owed - settled).abs() < Money::new(1, 2));
}

#[rstest]
fn debtor_drains_creditors_in_declaration_order(engine: SettlementEngine) {
    // c owes a 15 and b 30; a is drained first even though b is owed more.
    let participants = people(&["a", "b", "c"]);
    let activities = vec![
        activity("fuel", Money::from_i64(30), "a", &["a", "c"]),
        activity("food", Money::from_i64(60), "b", &["b", "c"]),
    ];

    let balances = engine
        .balances(&participants, &activities)
        .expect("aggregation should succeed");
    assert_eq!(balances.get(&ParticipantId::from("a")), Some(Money::from_i64(15)));
    assert_eq!(balances.get(&ParticipantId::from("b")), Some(Money::from_i64(30)));
    assert_eq!(balances.get(&ParticipantId::from("c")), Some(Money::from_i64(-45)));

    assert_eq!(
        engine.settle(&participants, &activities),
        Ok(vec![
            pay("c", "a", Money::from_i64(15)),
            pay("c", "b", Money::from_i64(30)),
        ])
    );
}

#[rstest]
fn reordering_participants_changes_pairing(engine: SettlementEngine) {
    let activities = vec![
        activity("fuel", Money::from_i64(40), "a", &["c", "d"]),
        activity("food", Money::from_i64(40), "b", &["c", "d"]),
    ];

    let declared = engine
        .settle(&people(&["a", "b", "c", "d"]), &activities)
        .expect("settlement should succeed");
    let reversed = engine
        .settle(&people(&["b", "a", "c", "d"]), &activities)
        .expect("settlement should succeed");

    assert_eq!(
        declared,
        vec![
            pay("c", "a", Money::from_i64(40)),
            pay("d", "b", Money::from_i64(40)),
        ]
    );
    assert_eq!(
        reversed,
        vec![
            pay("c", "b", Money::from_i64(40)),
            pay("d", "a", Money::from_i64(40)),
        ]
    );
}

#[rstest]
fn empty_event_has_no_settlements(engine: SettlementEngine) {
    assert_eq!(engine.settle(&[], &[]), Ok(vec![]));
    assert_eq!(engine.settle(&people(&["a", "b"]), &[]), Ok(vec![]));
}
