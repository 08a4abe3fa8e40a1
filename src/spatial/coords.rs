//! Grid coordinates, bounding-box dimensions and the six axis-aligned directions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Axis-aligned neighbour direction
///
/// Declaration order is the order in which neighbours are visited during
/// propagation and the order of compatibility lists in a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Negative x
    Left,
    /// Positive x
    Right,
    /// Negative y
    Down,
    /// Positive y
    Up,
    /// Negative z
    Back,
    /// Positive z
    Forward,
}

impl Direction {
    /// All directions in propagation order
    pub const ALL: [Self; 6] = [
        Self::Left,
        Self::Right,
        Self::Down,
        Self::Up,
        Self::Back,
        Self::Forward,
    ];

    /// Unit offset of this direction as `[dx, dy, dz]`
    pub const fn offset(self) -> [i32; 3] {
        match self {
            Self::Left => [-1, 0, 0],
            Self::Right => [1, 0, 0],
            Self::Down => [0, -1, 0],
            Self::Up => [0, 1, 0],
            Self::Back => [0, 0, -1],
            Self::Forward => [0, 0, 1],
        }
    }

    /// Direction pointing the other way along the same axis
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
            Self::Up => Self::Down,
            Self::Back => Self::Forward,
            Self::Forward => Self::Back,
        }
    }

    /// Stable index in `0..6`, matching [`Direction::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lower-case name used in catalog files and messages
    pub const fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Down => "down",
            Self::Up => "up",
            Self::Back => "back",
            Self::Forward => "forward",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Integer cell coordinate inside the grid bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridCoord {
    /// Column along the x axis
    pub x: usize,
    /// Row along the y axis (up)
    pub y: usize,
    /// Layer along the z axis (forward)
    pub z: usize,
}

impl GridCoord {
    /// Create a coordinate from its components
    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }

    /// Index usable with `ndarray::Array3`
    pub const fn index(self) -> [usize; 3] {
        [self.x, self.y, self.z]
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl FromStr for GridCoord {
    type Err = String;

    /// Parse `x,y,z`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [x, y, z] = parse_triple(s)?;
        Ok(Self::new(x, y, z))
    }
}

/// Extent of the grid bounding box along each axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSize {
    /// Cells along x
    pub x: usize,
    /// Cells along y
    pub y: usize,
    /// Cells along z
    pub z: usize,
}

impl GridSize {
    /// Create a size from its components
    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }

    /// Shape tuple usable with `ndarray` constructors
    pub const fn shape(self) -> (usize, usize, usize) {
        (self.x, self.y, self.z)
    }

    /// Total number of cells, saturating at `usize::MAX`
    pub const fn cell_count(self) -> usize {
        self.x.saturating_mul(self.y).saturating_mul(self.z)
    }

    /// Total number of cells, or `None` if the volume overflows
    pub const fn checked_cell_count(self) -> Option<usize> {
        match self.x.checked_mul(self.y) {
            Some(area) => area.checked_mul(self.z),
            None => None,
        }
    }

    /// Whether any axis has zero extent
    pub const fn is_degenerate(self) -> bool {
        self.x == 0 || self.y == 0 || self.z == 0
    }

    /// Check if a coordinate lies inside the bounding box
    pub const fn contains(self, coord: GridCoord) -> bool {
        coord.x < self.x && coord.y < self.y && coord.z < self.z
    }

    /// Position of a coordinate in scan order
    ///
    /// Scan order runs x fastest, then y, then z.
    pub const fn linear_index(self, coord: GridCoord) -> usize {
        (coord.z * self.y + coord.y) * self.x + coord.x
    }

    /// Neighbour of `coord` in `direction`, if it lies inside the box
    pub const fn neighbour(self, coord: GridCoord, direction: Direction) -> Option<GridCoord> {
        let (x, y, z) = (coord.x, coord.y, coord.z);
        let next = match direction {
            Direction::Left => {
                if x == 0 {
                    return None;
                }
                GridCoord::new(x - 1, y, z)
            }
            Direction::Right => GridCoord::new(x + 1, y, z),
            Direction::Down => {
                if y == 0 {
                    return None;
                }
                GridCoord::new(x, y - 1, z)
            }
            Direction::Up => GridCoord::new(x, y + 1, z),
            Direction::Back => {
                if z == 0 {
                    return None;
                }
                GridCoord::new(x, y, z - 1)
            }
            Direction::Forward => GridCoord::new(x, y, z + 1),
        };
        if self.contains(next) { Some(next) } else { None }
    }

    /// Whether `coord` sits on the outer face of the box that looks towards `direction`
    pub const fn is_on_face(self, coord: GridCoord, direction: Direction) -> bool {
        match direction {
            Direction::Left => coord.x == 0,
            Direction::Right => coord.x + 1 == self.x,
            Direction::Down => coord.y == 0,
            Direction::Up => coord.y + 1 == self.y,
            Direction::Back => coord.z == 0,
            Direction::Forward => coord.z + 1 == self.z,
        }
    }

    /// Iterate every coordinate in scan order
    pub fn coords(self) -> impl Iterator<Item = GridCoord> {
        (0..self.z).flat_map(move |z| {
            (0..self.y).flat_map(move |y| (0..self.x).map(move |x| GridCoord::new(x, y, z)))
        })
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.x, self.y, self.z)
    }
}

impl FromStr for GridSize {
    type Err = String;

    /// Parse `x,y,z`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [x, y, z] = parse_triple(s)?;
        Ok(Self::new(x, y, z))
    }
}

fn parse_triple(s: &str) -> Result<[usize; 3], String> {
    let mut parts = s.split(',').map(str::trim);
    let mut values = [0usize; 3];
    for value in &mut values {
        let part = parts
            .next()
            .ok_or_else(|| format!("expected three comma-separated values, got '{s}'"))?;
        *value = part
            .parse()
            .map_err(|e| format!("invalid component '{part}' in '{s}': {e}"))?;
    }
    if parts.next().is_some() {
        return Err(format!("expected three comma-separated values, got '{s}'"));
    }
    Ok(values)
}
