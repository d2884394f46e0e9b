//! Simulation driver tests — step recording, snapshots, conservation.

use ca_seir_core::{
    driver::{simulate_seir_ca_with_snapshots, Scenario},
    event::{NullSink, SimEvent},
    grid::{initialize_grid, CellState, StepCounts},
    rng::{FixedDraw, ScenarioRng},
    rule::SeirRates,
    snapshot::snapshot_steps,
};

fn scenario(beta: f64) -> Scenario {
    Scenario::new("x", SeirRates::new(beta, 0.5, 0.14))
}

#[test]
fn driver_returns_one_tally_per_step() {
    let g = initialize_grid(11);
    let mut rng = ScenarioRng::new(1, 0);
    let counts =
        simulate_seir_ca_with_snapshots(&g, &scenario(0.1), 10, &mut rng, &mut NullSink).unwrap();

    assert_eq!(counts.len(), 10);
    assert_eq!(counts[0], StepCounts::tally(&g), "step 0 must be the untouched initial grid");
    assert_eq!(counts[0].as_tuple(), (120, 0, 1, 0));
}

#[test]
fn zero_steps_records_nothing() {
    let g = initialize_grid(5);
    let counts = simulate_seir_ca_with_snapshots(
        &g, &scenario(0.1), 0, &mut FixedDraw(0.0), &mut NullSink,
    )
    .unwrap();
    assert!(counts.is_empty());
}

#[test]
fn initial_grid_is_left_untouched() {
    let g = initialize_grid(7);
    let before = g.clone();
    let _ = simulate_seir_ca_with_snapshots(
        &g, &scenario(0.35), 5, &mut FixedDraw(0.0), &mut NullSink,
    )
    .unwrap();
    assert_eq!(g, before);
}

#[test]
fn counts_are_conserved_every_step() {
    let g = initialize_grid(25);
    let mut rng = ScenarioRng::new(0xFEED, 3);
    let counts =
        simulate_seir_ca_with_snapshots(&g, &scenario(0.35), 80, &mut rng, &mut NullSink).unwrap();
    for (step, c) in counts.iter().enumerate() {
        assert_eq!(c.total(), 25 * 25, "conservation broken at step {step}: {c:?}");
    }
}

#[test]
fn recorded_counts_lag_the_transition_by_one_step() {
    let g = initialize_grid(5);
    let counts = simulate_seir_ca_with_snapshots(
        &g, &scenario(0.1), 3, &mut FixedDraw(0.0), &mut NullSink,
    )
    .unwrap();
    assert_eq!(counts[0].as_tuple(), (24, 0, 1, 0));
    assert_eq!(counts[1].as_tuple(), (16, 8, 0, 1));
    assert_eq!(counts[2].as_tuple(), (16, 0, 8, 1));
}

#[test]
fn snapshots_emitted_only_at_capture_steps() {
    let g = initialize_grid(9);
    let s = scenario(0.35).with_snapshots(snapshot_steps(12));
    let mut events: Vec<SimEvent> = Vec::new();
    let mut rng = ScenarioRng::new(9, 0);
    let counts = simulate_seir_ca_with_snapshots(&g, &s, 12, &mut rng, &mut events).unwrap();

    let captured: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            SimEvent::SnapshotCaptured(snap) => Some(snap),
            _ => None,
        })
        .collect();
    let steps: Vec<_> = captured.iter().map(|s| s.step).collect();
    assert_eq!(steps, vec![0, 4, 8, 11]);

    for snap in captured {
        assert_eq!(snap.scenario, "x");
        assert_eq!(
            StepCounts::tally(&snap.grid),
            counts[snap.step],
            "snapshot at step {} must match the recorded tally",
            snap.step
        );
    }
    assert_eq!(events.len(), 4, "driver emits snapshot events only");
}

#[test]
fn scenario_without_capture_steps_emits_nothing() {
    let g = initialize_grid(9);
    let mut events: Vec<SimEvent> = Vec::new();
    simulate_seir_ca_with_snapshots(&g, &scenario(0.35), 12, &mut FixedDraw(0.3), &mut events)
        .unwrap();
    assert!(events.is_empty());
}

#[test]
fn no_transmission_means_no_exposure() {
    let g = initialize_grid(21);
    let mut rng = ScenarioRng::new(1234, 0);
    let counts =
        simulate_seir_ca_with_snapshots(&g, &scenario(0.0), 50, &mut rng, &mut NullSink).unwrap();

    for (step, c) in counts.iter().enumerate() {
        assert_eq!(c.exposed, 0, "no cell may become Exposed with beta = 0 (step {step})");
        assert_eq!(c.susceptible, 21 * 21 - 1, "Susceptible must stay constant (step {step})");
        assert!(c.infected <= 1, "Infected may only decay from the seed (step {step})");
        assert_eq!(c.infected + c.recovered, 1);
    }
    let first_recovered = counts.iter().position(|c| c.get(CellState::Recovered) == 1);
    if let Some(step) = first_recovered {
        assert!(counts[step..].iter().all(|c| c.recovered == 1), "recovery is permanent");
    }
}
