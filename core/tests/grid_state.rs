//! Grid seeding, neighbour counting and tallying tests.

use ca_seir_core::grid::{count_infected_neighbors, initialize_grid, CellState, Grid, StepCounts};

fn all_infected(size: usize) -> Grid {
    let mut grid = Grid::new(size);
    for x in 0..size {
        for y in 0..size {
            grid.set(x, y, CellState::Infected);
        }
    }
    grid
}

#[test]
fn initialize_grid_seeds_single_infected_at_centre() {
    let grid = initialize_grid(5);
    assert_eq!(grid.size(), 5);
    for (x, y, state) in grid.iter() {
        if (x, y) == (2, 2) {
            assert_eq!(state, CellState::Infected, "centre must be Infected");
        } else {
            assert_eq!(state, CellState::Susceptible, "cell ({x}, {y}) should be Susceptible");
        }
    }
}

#[test]
fn even_sized_grid_seeds_at_floor_of_half() {
    let grid = initialize_grid(4);
    assert_eq!(grid.get(2, 2), CellState::Infected);
    assert_eq!(StepCounts::tally(&grid).as_tuple(), (15, 0, 1, 0));
}

#[test]
fn single_cell_grid_is_the_seed() {
    let grid = initialize_grid(1);
    assert_eq!(grid.get(0, 0), CellState::Infected);
    assert_eq!(count_infected_neighbors(&grid, 0, 0), 0);
}

#[test]
#[should_panic(expected = "grid size must be positive")]
fn zero_sized_grid_is_rejected() {
    let _ = initialize_grid(0);
}

#[test]
fn corner_cell_sees_at_most_three_neighbours() {
    let grid = all_infected(5);
    assert_eq!(count_infected_neighbors(&grid, 0, 0), 3);
    assert_eq!(count_infected_neighbors(&grid, 4, 4), 3);
    assert_eq!(count_infected_neighbors(&grid, 0, 4), 3);
    assert_eq!(count_infected_neighbors(&grid, 4, 0), 3);
}

#[test]
fn edge_cell_sees_at_most_five_neighbours() {
    let grid = all_infected(5);
    assert_eq!(count_infected_neighbors(&grid, 0, 2), 5);
    assert_eq!(count_infected_neighbors(&grid, 2, 0), 5);
    assert_eq!(count_infected_neighbors(&grid, 4, 2), 5);
    assert_eq!(count_infected_neighbors(&grid, 2, 4), 5);
}

#[test]
fn interior_cell_sees_full_moore_neighbourhood() {
    let grid = all_infected(5);
    assert_eq!(count_infected_neighbors(&grid, 2, 2), 8);
}

#[test]
fn counter_excludes_the_cell_itself_and_other_states() {
    let mut grid = initialize_grid(5);
    assert_eq!(count_infected_neighbors(&grid, 2, 2), 0, "own state must not count");

    grid.set(1, 1, CellState::Exposed);
    grid.set(3, 3, CellState::Recovered);
    assert_eq!(count_infected_neighbors(&grid, 2, 1), 1);
    assert_eq!(count_infected_neighbors(&grid, 0, 0), 0, "(2,2) is two cells away");
}

#[test]
fn no_wraparound_across_edges() {
    let mut grid = Grid::new(5);
    grid.set(0, 4, CellState::Infected);
    assert_eq!(count_infected_neighbors(&grid, 0, 0), 0);
    assert_eq!(count_infected_neighbors(&grid, 4, 4), 0);
    assert_eq!(count_infected_neighbors(&grid, 1, 3), 1);
}

#[test]
fn tally_counts_every_compartment() {
    let mut grid = initialize_grid(3);
    grid.set(0, 0, CellState::Exposed);
    grid.set(0, 1, CellState::Recovered);
    grid.set(0, 2, CellState::Recovered);
    let counts = StepCounts::tally(&grid);
    assert_eq!(counts.as_tuple(), (5, 1, 1, 2));
    assert_eq!(counts.total(), 9);
    assert_eq!(counts.get(CellState::Recovered), 2);
}
