//! Level model
//!
//! A level file carries two parallel character grids: `static` (terrain tiles,
//! one color code per cell) and `items` (coins, start, goal, stars). Both are
//! validated up front so a broken file never produces a half-built level.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Character used for an empty cell in either grid
pub const BLANK: char = ' ';

/// Structural problems in level data
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MalformedLevelError {
    #[error("static grid has {static_rows} rows but items grid has {item_rows}")]
    RowCountMismatch { static_rows: usize, item_rows: usize },

    #[error("row {row}: static row is {static_len} cells wide but items row is {item_len}")]
    RowLengthMismatch {
        row: usize,
        static_len: usize,
        item_len: usize,
    },

    #[error("unknown terrain code {code:?} at row {row}, column {col}")]
    UnknownTerrainCode { row: usize, col: usize, code: char },

    #[error("unknown item code {code:?} at row {row}, column {col}")]
    UnknownItemCode { row: usize, col: usize, code: char },

    #[error("second start cell at row {row}, column {col}")]
    DuplicateStart { row: usize, col: usize },
}

/// Closed terrain palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileColor {
    Red,
    Blue,
    GreenOutlined,
    Orange,
    Purple,
    Yellow,
}

impl TileColor {
    pub const ALL: [TileColor; 6] = [
        TileColor::Red,
        TileColor::Blue,
        TileColor::GreenOutlined,
        TileColor::Orange,
        TileColor::Purple,
        TileColor::Yellow,
    ];

    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'r' => Some(TileColor::Red),
            'b' => Some(TileColor::Blue),
            'g' => Some(TileColor::GreenOutlined),
            'o' => Some(TileColor::Orange),
            'p' => Some(TileColor::Purple),
            'y' => Some(TileColor::Yellow),
            _ => None,
        }
    }

    pub fn code(&self) -> char {
        match self {
            TileColor::Red => 'r',
            TileColor::Blue => 'b',
            TileColor::GreenOutlined => 'g',
            TileColor::Orange => 'o',
            TileColor::Purple => 'p',
            TileColor::Yellow => 'y',
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TileColor::Red => "red",
            TileColor::Blue => "blue",
            TileColor::GreenOutlined => "green-outlined",
            TileColor::Orange => "orange",
            TileColor::Purple => "purple",
            TileColor::Yellow => "yellow",
        }
    }

    /// Red tiles hurt; every other color is plain wall
    pub fn is_hazard(&self) -> bool {
        *self == TileColor::Red
    }
}

/// Meaning of one character in either grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridCell {
    Empty,
    Wall(TileColor),
    Hazard(TileColor),
    Coin,
    Star,
    Start,
    Goal,
}

impl GridCell {
    /// Parse a `static` grid character
    pub fn from_terrain_code(code: char) -> Option<Self> {
        if code == BLANK {
            return Some(GridCell::Empty);
        }
        TileColor::from_code(code).map(|color| {
            if color.is_hazard() {
                GridCell::Hazard(color)
            } else {
                GridCell::Wall(color)
            }
        })
    }

    /// Parse an `items` grid character
    pub fn from_item_code(code: char) -> Option<Self> {
        match code {
            BLANK => Some(GridCell::Empty),
            'c' => Some(GridCell::Coin),
            's' => Some(GridCell::Start),
            'g' => Some(GridCell::Goal),
            '*' => Some(GridCell::Star),
            _ => None,
        }
    }

    /// Character this cell is written as in a level file
    pub fn code(&self) -> char {
        match self {
            GridCell::Empty => BLANK,
            GridCell::Wall(color) | GridCell::Hazard(color) => color.code(),
            GridCell::Coin => 'c',
            GridCell::Star => '*',
            GridCell::Start => 's',
            GridCell::Goal => 'g',
        }
    }
}

/// Level file as stored on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawLevel {
    pub name: String,
    #[serde(rename = "static")]
    pub static_rows: Vec<String>,
    #[serde(rename = "items")]
    pub item_rows: Vec<String>,
}

impl RawLevel {
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Parsed, validated level (read-only after load)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub name: String,
    /// Terrain cells, row-major
    pub terrain: Vec<Vec<GridCell>>,
    /// Item cells, row-major, same shape as `terrain`
    pub items: Vec<Vec<GridCell>>,
    /// Start cell (row, col), if the level marks one
    pub start: Option<(usize, usize)>,
    /// Number of coin cells
    pub coin_count: u32,
}

impl Level {
    /// Validate and parse raw level data
    pub fn load(raw: &RawLevel) -> Result<Self, MalformedLevelError> {
        if raw.static_rows.len() != raw.item_rows.len() {
            return Err(MalformedLevelError::RowCountMismatch {
                static_rows: raw.static_rows.len(),
                item_rows: raw.item_rows.len(),
            });
        }

        let mut terrain = Vec::with_capacity(raw.static_rows.len());
        let mut items = Vec::with_capacity(raw.item_rows.len());
        let mut start = None;
        let mut coin_count = 0u32;

        let rows = raw.static_rows.iter().zip(&raw.item_rows);
        for (row, (static_row, item_row)) in rows.enumerate() {
            let static_len = static_row.chars().count();
            let item_len = item_row.chars().count();
            if static_len != item_len {
                return Err(MalformedLevelError::RowLengthMismatch {
                    row,
                    static_len,
                    item_len,
                });
            }

            let terrain_row = static_row
                .chars()
                .enumerate()
                .map(|(col, code)| {
                    GridCell::from_terrain_code(code)
                        .ok_or(MalformedLevelError::UnknownTerrainCode { row, col, code })
                })
                .collect::<Result<Vec<_>, _>>()?;

            let mut item_cells = Vec::with_capacity(item_len);
            for (col, code) in item_row.chars().enumerate() {
                let cell = GridCell::from_item_code(code)
                    .ok_or(MalformedLevelError::UnknownItemCode { row, col, code })?;
                match cell {
                    GridCell::Coin => coin_count += 1,
                    GridCell::Start => {
                        if start.is_some() {
                            return Err(MalformedLevelError::DuplicateStart { row, col });
                        }
                        start = Some((row, col));
                    }
                    _ => {}
                }
                item_cells.push(cell);
            }

            terrain.push(terrain_row);
            items.push(item_cells);
        }

        log::info!(
            "Loaded level '{}': {} rows, {} coins",
            raw.name,
            terrain.len(),
            coin_count
        );

        Ok(Self {
            name: raw.name.clone(),
            terrain,
            items,
            start,
            coin_count,
        })
    }

    /// Parse a level from its JSON file form
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let raw = RawLevel::from_json(json)?;
        Ok(Self::load(&raw)?)
    }

    /// Load a level JSON file
    pub fn load_file(path: impl AsRef<Path>) -> crate::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Re-emit the level in file form (exact inverse of `load`)
    pub fn to_raw(&self) -> RawLevel {
        RawLevel {
            name: self.name.clone(),
            static_rows: encode_rows(&self.terrain),
            item_rows: encode_rows(&self.items),
        }
    }

    pub fn row_count(&self) -> usize {
        self.terrain.len()
    }

    /// Visit every non-empty cell of a grid with its (row, col, row_len)
    pub fn cells<'a>(
        grid: &'a [Vec<GridCell>],
    ) -> impl Iterator<Item = (usize, usize, usize, GridCell)> + 'a {
        grid.iter().enumerate().flat_map(|(row, cells)| {
            let row_len = cells.len();
            cells
                .iter()
                .enumerate()
                .filter(|(_, cell)| **cell != GridCell::Empty)
                .map(move |(col, cell)| (row, col, row_len, *cell))
        })
    }
}

fn encode_rows(grid: &[Vec<GridCell>]) -> Vec<String> {
    grid.iter()
        .map(|row| row.iter().map(GridCell::code).collect())
        .collect()
}
