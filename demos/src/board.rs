//! Headless editing board: the state a front end keeps between clicks.
//!
//! The board mirrors the interactive flow of the desktop tool: place a start,
//! then a goal, then toggle walls, with the shortest path recomputed after
//! every edit. Generating a maze replaces all walls and resets placement.

use gridpath_core::{Bounds, Cell, GridError, ObstacleSet};
use gridpath_maze::{generate_maze, maze_walls};
use gridpath_paths::{ObstacleGrid, bfs_distances, find_path};
use rand::Rng;

pub const STATUS_START: &str = "Place Start Point";
pub const STATUS_GOAL: &str = "Place End Point";
pub const STATUS_WALLS: &str = "Place Walls";
pub const STATUS_NO_PATH: &str = "No Path Found";

/// What the next click does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Start,
    Goal,
    Wall,
}

/// How a single cell should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Empty,
    Wall,
    Start,
    Goal,
    Path,
}

#[derive(Debug, Clone)]
pub struct Board {
    bounds: Bounds,
    mode: Mode,
    start: Option<Cell>,
    goal: Option<Cell>,
    walls: ObstacleSet,
    path: Vec<Cell>,
    status: &'static str,
}

impl Board {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            mode: Mode::Start,
            start: None,
            goal: None,
            walls: ObstacleSet::new(),
            path: Vec::new(),
            status: STATUS_START,
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn start(&self) -> Option<Cell> {
        self.start
    }

    pub fn goal(&self) -> Option<Cell> {
        self.goal
    }

    pub fn walls(&self) -> &ObstacleSet {
        &self.walls
    }

    /// The current path, excluding the start and ending at the goal.
    pub fn path(&self) -> &[Cell] {
        &self.path
    }

    pub fn status(&self) -> &'static str {
        self.status
    }

    /// Apply a click on `cell` according to the current mode.
    ///
    /// Clicks that do not apply (a goal on a wall, a wall on the start) are
    /// ignored. Cells outside the board are rejected.
    pub fn click(&mut self, cell: Cell) -> Result<(), GridError> {
        self.bounds.check(cell)?;
        match self.mode {
            Mode::Start => {
                self.start = Some(cell);
                self.mode = Mode::Goal;
                self.status = STATUS_GOAL;
            }
            Mode::Goal => {
                if self.state_at(cell) != CellState::Empty {
                    log::debug!("goal ignored on occupied cell {cell}");
                    return Ok(());
                }
                self.goal = Some(cell);
                self.mode = Mode::Wall;
                self.status = STATUS_WALLS;
                self.recompute()?;
            }
            Mode::Wall => {
                if Some(cell) == self.start || Some(cell) == self.goal {
                    return Ok(());
                }
                if !self.walls.remove(&cell) {
                    self.walls.insert(cell);
                }
                self.recompute()?;
            }
        }
        Ok(())
    }

    /// Forget everything: no walls, no endpoints, back to placing the start.
    pub fn clear(&mut self) {
        *self = Self::new(self.bounds);
    }

    /// Replace the walls with a freshly generated maze and restart placement.
    pub fn load_maze(&mut self, rng: &mut impl Rng) {
        let maze = generate_maze(self.bounds, rng);
        self.clear();
        self.walls = maze_walls(&maze, self.bounds);
        log::info!(
            "loaded maze: {} open cells, {} walls",
            maze.len(),
            self.walls.len()
        );
    }

    /// The state of `cell` for display. Cells outside the board read as walls.
    pub fn state_at(&self, cell: Cell) -> CellState {
        if !self.bounds.contains(cell) {
            return CellState::Wall;
        }
        if Some(cell) == self.start {
            CellState::Start
        } else if Some(cell) == self.goal {
            CellState::Goal
        } else if self.walls.contains(&cell) {
            CellState::Wall
        } else if self.path.contains(&cell) {
            CellState::Path
        } else {
            CellState::Empty
        }
    }

    /// The open cell farthest from the start by walking distance, with its
    /// distance. Ties go to the first such cell in row-major order.
    pub fn farthest_from_start(&self) -> Option<(Cell, i32)> {
        let start = self.start?;
        let dist = bfs_distances(&ObstacleGrid::new(self.bounds, &self.walls), start);
        self.bounds
            .iter()
            .filter_map(|c| dist.get(&c).map(|&d| (c, d)))
            .fold(None, |best, (c, d)| match best {
                Some((_, bd)) if bd >= d => best,
                _ => Some((c, d)),
            })
    }

    fn recompute(&mut self) -> Result<(), GridError> {
        let (Some(start), Some(goal)) = (self.start, self.goal) else {
            return Ok(());
        };
        self.path = find_path(start, goal, &self.walls, self.bounds)?;
        self.status = if self.path.is_empty() {
            STATUS_NO_PATH
        } else {
            STATUS_WALLS
        };
        log::debug!("path {start} -> {goal}: {} steps", self.path.len());
        Ok(())
    }
}
