//! Grid Cells and Candidate Regions

use crate::triangle::Triangle;
use crate::triangle::Vertex;

use std::cmp::Ordering;
use std::convert::TryFrom;

/// Largest number of cells a candidate region or mask may hold
pub const MAX_CELLS : usize = 1 << 24;

/// Unit square identified by its integer center
///
/// Cells order by row (y) first, then column (x)
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq,Hash)]
pub struct GridCell {
    pub x: i64,
    pub y: i64,
}

impl GridCell {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
    /// Cell shifted by (dx,dy)
    pub fn offset(&self, dx: i64, dy: i64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
    /// Center point of the cell
    pub fn center(&self) -> Vertex {
        Vertex::new(self.x as f64, self.y as f64)
    }
}

impl Ord for GridCell {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}
impl PartialOrd for GridCell {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<(i64,i64)> for GridCell {
    fn from(v: (i64,i64)) -> Self {
        Self::new(v.0, v.1)
    }
}

/// Inclusive rectangle of candidate cells
///
///     use tricover::{CandidateGrid, Triangle};
///
///     let tri = Triangle::new((1036,698), (1035,699), (1041,699));
///     let grid = CandidateGrid::around(&tri, 1);
///     assert_eq!(grid, CandidateGrid::new(1034, 697, 1042, 700));
///     assert_eq!(grid.len(), 9 * 4);
///
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct CandidateGrid {
    /// Minimum x value
    pub x1: i64,
    /// Minimum y value
    pub y1: i64,
    /// Maximum x value
    pub x2: i64,
    /// Maximum y value
    pub y2: i64,
}

impl CandidateGrid {
    /// Create a new region
    ///
    /// Corners are sorted before storing
    pub fn new(x1: i64, y1: i64, x2: i64, y2: i64) -> Self {
        let (x1, x2) = if x1 > x2 { (x2,x1) } else { (x1,x2) };
        let (y1, y2) = if y1 > y2 { (y2,y1) } else { (y1,y2) };
        Self { x1, y1, x2, y2 }
    }
    /// Bounding box of a triangle expanded by `margin` cells on each side
    ///
    /// Fractional bounds are widened to the enclosing integers
    pub fn around(tri: &Triangle, margin: i64) -> Self {
        let (x1, y1, x2, y2) = tri.bounds();
        Self::new((x1.floor() as i64).saturating_sub(margin),
                  (y1.floor() as i64).saturating_sub(margin),
                  (x2.ceil() as i64).saturating_add(margin),
                  (y2.ceil() as i64).saturating_add(margin))
    }
    /// Number of columns, saturating at `usize::MAX`
    pub fn width(&self) -> usize {
        span(self.x1, self.x2)
    }
    /// Number of rows, saturating at `usize::MAX`
    pub fn height(&self) -> usize {
        span(self.y1, self.y2)
    }
    /// Number of cells, saturating at `usize::MAX`
    pub fn len(&self) -> usize {
        self.width().saturating_mul(self.height())
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    pub fn contains(&self, c: GridCell) -> bool {
        c.x >= self.x1 && c.x <= self.x2 && c.y >= self.y1 && c.y <= self.y2
    }
    /// Column and row of a cell within the region
    pub fn index(&self, c: GridCell) -> Option<(usize,usize)> {
        if self.contains(c) {
            Some(((i128::from(c.x) - i128::from(self.x1)) as usize,
                  (i128::from(c.y) - i128::from(self.y1)) as usize))
        } else {
            None
        }
    }
    /// All cells, row by row
    pub fn cells(&self) -> impl Iterator<Item = GridCell> {
        let (x1, x2) = (self.x1, self.x2);
        (self.y1 ..= self.y2)
            .flat_map(move |y| (x1 ..= x2).map(move |x| GridCell::new(x,y)))
    }
}

fn span(lo: i64, hi: i64) -> usize {
    let n = i128::from(hi) - i128::from(lo) + 1;
    usize::try_from(n).unwrap_or(usize::MAX)
}

impl IntoIterator for CandidateGrid {
    type Item = GridCell;
    type IntoIter = Box<dyn Iterator<Item = GridCell>>;
    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.cells())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn grid_order_test() {
        let g = CandidateGrid::new(2, 1, 0, 0);
        let cells : Vec<_> = g.cells().map(|c| (c.x, c.y)).collect();
        assert_eq!(cells, vec![(0,0),(1,0),(2,0),(0,1),(1,1),(2,1)]);
        assert_eq!(g.index(GridCell::new(1,1)), Some((1,1)));
        assert_eq!(g.index(GridCell::new(3,1)), None);
        assert!(GridCell::new(5,0) < GridCell::new(0,1));
    }
    #[test]
    fn around_fractional_test() {
        let t = Triangle::new((0.5, 0.5), (2.5, 0.5), (0.5, 2.25));
        assert_eq!(CandidateGrid::around(&t, 0), CandidateGrid::new(0, 0, 3, 3));
    }
    #[test]
    fn huge_region_saturates() {
        let g = CandidateGrid::new(i64::MIN, 0, i64::MAX, 1);
        assert_eq!(g.width(), usize::MAX);
        assert_eq!(g.len(), usize::MAX);
        let t = Triangle::new((-1e300, 0.0), (1e300, 0.0), (0.0, 1e300));
        let g = CandidateGrid::around(&t, 1);
        assert_eq!((g.x1, g.x2), (i64::MIN, i64::MAX));
        assert!(g.len() > MAX_CELLS);
    }
}
