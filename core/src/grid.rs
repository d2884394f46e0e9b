//! Grid state — the N×N matrix of compartment labels.
//!
//! RULES:
//!   - Every cell holds exactly one `CellState` at all times.
//!   - Dimensions are fixed at construction and never change.
//!   - Coordinates are `(x, y)` with `x` the row and `y` the column.
//!   - The neighbourhood is Moore (8 cells) with no wraparound.

use serde::{Deserialize, Serialize};

/// The four SEIR compartments. Discriminants are stable and match
/// the index order used by `StepCounts` and the rendering palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum CellState {
    Susceptible = 0,
    Exposed     = 1,
    Infected    = 2,
    Recovered   = 3,
}

impl CellState {
    pub const ALL: [CellState; 4] = [
        CellState::Susceptible,
        CellState::Exposed,
        CellState::Infected,
        CellState::Recovered,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Single-letter compartment label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Susceptible => "S",
            Self::Exposed     => "E",
            Self::Infected    => "I",
            Self::Recovered   => "R",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Susceptible => "Susceptible",
            Self::Exposed     => "Exposed",
            Self::Infected    => "Infected",
            Self::Recovered   => "Recovered",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size:  usize,
    cells: Vec<CellState>, // row-major, len == size * size
}

impl Grid {
    /// An all-Susceptible grid. Panics on size 0.
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "grid size must be positive");
        Self {
            size,
            cells: vec![CellState::Susceptible; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn in_bounds(&self, x: isize, y: isize) -> bool {
        let n = self.size as isize;
        (0..n).contains(&x) && (0..n).contains(&y)
    }

    pub fn get(&self, x: usize, y: usize) -> CellState {
        self.cells[self.offset(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, state: CellState) {
        let i = self.offset(x, y);
        self.cells[i] = state;
    }

    /// Iterate `(x, y, state)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, CellState)> + '_ {
        let n = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &s)| (i / n, i % n, s))
    }

    /// Row slices, top row first.
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks(self.size)
    }

    fn offset(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.size && y < self.size,
            "cell ({x}, {y}) outside {n}x{n} grid",
            n = self.size
        );
        x * self.size + y
    }
}

/// All Susceptible except a single Infected seed at `(size/2, size/2)`.
pub fn initialize_grid(size: usize) -> Grid {
    let mut grid = Grid::new(size);
    let centre = size / 2;
    grid.set(centre, centre, CellState::Infected);
    grid
}

/// Number of Infected cells among the in-bounds Moore neighbours of `(x, y)`.
pub fn count_infected_neighbors(grid: &Grid, x: usize, y: usize) -> u8 {
    debug_assert!(x < grid.size() && y < grid.size(), "cell ({x}, {y}) out of bounds");
    let mut count = 0;
    for dx in -1isize..=1 {
        for dy in -1isize..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            let nx = x as isize + dx;
            let ny = y as isize + dy;
            if grid.in_bounds(nx, ny) && grid.get(nx as usize, ny as usize) == CellState::Infected {
                count += 1;
            }
        }
    }
    count
}

/// Compartment tally for a single step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepCounts {
    pub susceptible: usize,
    pub exposed:     usize,
    pub infected:    usize,
    pub recovered:   usize,
}

impl StepCounts {
    /// Compartments absent from the grid tally to zero.
    pub fn tally(grid: &Grid) -> Self {
        let mut counts = Self::default();
        for (_, _, state) in grid.iter() {
            *counts.slot_mut(state) += 1;
        }
        counts
    }

    pub fn get(&self, state: CellState) -> usize {
        match state {
            CellState::Susceptible => self.susceptible,
            CellState::Exposed     => self.exposed,
            CellState::Infected    => self.infected,
            CellState::Recovered   => self.recovered,
        }
    }

    pub fn total(&self) -> usize {
        self.susceptible + self.exposed + self.infected + self.recovered
    }

    /// `(S, E, I, R)`.
    pub fn as_tuple(&self) -> (usize, usize, usize, usize) {
        (self.susceptible, self.exposed, self.infected, self.recovered)
    }

    fn slot_mut(&mut self, state: CellState) -> &mut usize {
        match state {
            CellState::Susceptible => &mut self.susceptible,
            CellState::Exposed     => &mut self.exposed,
            CellState::Infected    => &mut self.infected,
            CellState::Recovered   => &mut self.recovered,
        }
    }
}
