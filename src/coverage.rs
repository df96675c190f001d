//! Triangle Coverage
//!
//! A cell is covered when its center lies inside or on the boundary of
//! the triangle. The test uses the sign of two barycentric style
//! parameters, normalized by the sign of the triangle area so either
//! winding order gives the same result.

use crate::error::Error;
use crate::error::Result;
use crate::grid::CandidateGrid;
use crate::grid::GridCell;
use crate::grid::MAX_CELLS;
use crate::mask::CoverageMask;
use crate::scan::Scanline;
use crate::triangle::Triangle;
use crate::triangle::Winding;

use std::collections::BTreeSet;
use std::collections::btree_set;
use std::str::FromStr;

use tracing::debug;
use tracing::trace;

/// Handling of zero area triangles
#[derive(Debug,PartialEq,Eq,Copy,Clone)]
pub enum DegenerateRule {
    /// No cells are covered
    Empty,
    /// Run the inside test as is; only cells with both parameters exactly
    /// zero are covered, which is unreliable in floating point
    Exact,
    /// Return [Error::Degenerate](enum.Error.html#variant.Degenerate)
    Reject,
}
impl Default for DegenerateRule {
    fn default() -> DegenerateRule {
        DegenerateRule::Empty
    }
}
impl FromStr for DegenerateRule {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "empty" => Ok(DegenerateRule::Empty),
            "exact" => Ok(DegenerateRule::Exact),
            "reject" => Ok(DegenerateRule::Reject),
            _ => Err(Error::invalid(format!("unknown degenerate rule {:?}", s))),
        }
    }
}

/// Evaluation settings
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct CoverageConfig {
    /// Cells added around the triangle bounding box when building candidates
    pub margin: i64,
    pub degenerate: DegenerateRule,
    /// Reject triangles with an edge longer than this along either axis
    pub max_extent: Option<f64>,
    /// Triangles with this winding cover nothing
    pub cull: Option<Winding>,
    /// Largest candidate region `evaluate` will sweep
    pub max_cells: usize,
}
impl Default for CoverageConfig {
    fn default() -> Self {
        Self { margin: 1, degenerate: DegenerateRule::Empty,
               max_extent: None, cull: None, max_cells: MAX_CELLS }
    }
}
impl CoverageConfig {
    /// Check the settings are usable
    pub fn validate(&self) -> Result<()> {
        if self.margin < 0 {
            return Err(Error::invalid(format!("negative margin {}", self.margin)));
        }
        if let Some(limit) = self.max_extent {
            if !(limit >= 0.0) {
                return Err(Error::invalid(format!("bad extent limit {}", limit)));
            }
        }
        Ok(())
    }
    pub fn margin(mut self, margin: i64) -> Self {
        self.margin = margin;
        self
    }
    pub fn degenerate(mut self, rule: DegenerateRule) -> Self {
        self.degenerate = rule;
        self
    }
    pub fn max_extent(mut self, limit: f64) -> Self {
        self.max_extent = Some(limit);
        self
    }
    pub fn cull(mut self, winding: Winding) -> Self {
        self.cull = Some(winding);
        self
    }
    pub fn max_cells(mut self, n: usize) -> Self {
        self.max_cells = n;
        self
    }
}

/// Precomputed barycentric inside test for a single triangle
///
///     use tricover::{Barycentric, Triangle};
///
///     let bary = Barycentric::new(&Triangle::new((0,0), (2,0), (0,2)));
///     assert!(bary.contains(1.0, 1.0));   // On the hypotenuse
///     assert!(! bary.contains(2.0, 2.0));
///
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Barycentric {
    /// Signed area
    pub area: f64,
    /// -1 for negative area, 1 otherwise
    pub sign: f64,
    s0: f64,
    sx: f64,
    sy: f64,
    t0: f64,
    tx: f64,
    ty: f64,
}

impl Barycentric {
    pub fn new(tri: &Triangle) -> Self {
        let [a, b, c] = *tri.vertices();
        let area = tri.signed_area();
        let sign = if area < 0.0 { -1.0 } else { 1.0 };
        Self {
            area, sign,
            s0: a.y * c.x - a.x * c.y,
            sx: c.y - a.y,
            sy: a.x - c.x,
            t0: a.x * b.y - a.y * b.x,
            tx: a.y - b.y,
            ty: b.x - a.x,
        }
    }
    /// Parameters (s,t) at a point, sign normalized
    ///
    /// Both are zero at the first vertex; `s` reaches `2 |area|` at the
    /// second vertex and `t` at the third
    pub fn weights(&self, x: f64, y: f64) -> (f64, f64) {
        let s = (self.s0 + self.sx * x + self.sy * y) * self.sign;
        let t = (self.t0 + self.tx * x + self.ty * y) * self.sign;
        (s, t)
    }
    /// Check if a point is inside or on the boundary
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let (s, t) = self.weights(x, y);
        s >= 0.0 && t >= 0.0 && (s + t) <= 2.0 * self.area * self.sign
    }
    pub fn contains_cell(&self, c: GridCell) -> bool {
        self.contains(c.x as f64, c.y as f64)
    }
}

/// Set of covered cells
#[derive(Debug,Default,Clone,PartialEq,Eq)]
pub struct Coverage {
    cells: BTreeSet<GridCell>,
    grid: Option<CandidateGrid>,
}

impl Coverage {
    pub fn contains(&self, c: GridCell) -> bool {
        self.cells.contains(&c)
    }
    pub fn len(&self) -> usize {
        self.cells.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
    /// Covered cells, row by row
    pub fn iter(&self) -> btree_set::Iter<'_, GridCell> {
        self.cells.iter()
    }
    pub fn cells(&self) -> &BTreeSet<GridCell> {
        &self.cells
    }
    /// Candidate region the coverage was evaluated over, if it was a rectangle
    pub fn grid(&self) -> Option<CandidateGrid> {
        self.grid
    }
    /// Smallest region holding every covered cell
    pub fn extent(&self) -> Option<CandidateGrid> {
        let first = self.cells.iter().next()?;
        let mut g = CandidateGrid::new(first.x, first.y, first.x, first.y);
        for c in &self.cells {
            g.x1 = g.x1.min(c.x);
            g.x2 = g.x2.max(c.x);
            g.y2 = g.y2.max(c.y);
        }
        Some(g)
    }
    /// Coverage moved by (dx,dy)
    pub fn translate(&self, dx: i64, dy: i64) -> Self {
        let cells = self.cells.iter().map(|c| c.offset(dx, dy)).collect();
        let grid = self.grid.map(|g| CandidateGrid::new(g.x1 + dx, g.y1 + dy,
                                                        g.x2 + dx, g.y2 + dy));
        Self { cells, grid }
    }
    /// Horizontal runs of covered cells, one entry per non-empty row
    pub fn scanlines(&self) -> Vec<Scanline> {
        Scanline::from_cells(self.cells.iter().copied())
    }
    /// Mask over the evaluated region, or over the covered extent when
    /// the candidates were not a rectangle
    ///
    /// Fails when the region holds more than [MAX_CELLS](constant.MAX_CELLS.html)
    pub fn mask(&self) -> Result<CoverageMask> {
        let grid = self.grid
            .or_else(|| self.extent())
            .unwrap_or_default();
        CoverageMask::from_coverage(self, grid)
    }
}

impl<'a> IntoIterator for &'a Coverage {
    type Item = &'a GridCell;
    type IntoIter = btree_set::Iter<'a, GridCell>;
    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// Coverage evaluator
#[derive(Debug,Default,Copy,Clone)]
pub struct Evaluator {
    pub config: CoverageConfig,
}

impl Evaluator {
    pub fn new(config: CoverageConfig) -> Self {
        Self { config }
    }
    /// Cover the triangle's bounding box, expanded by the configured margin
    pub fn evaluate(&self, tri: &Triangle) -> Result<Coverage> {
        self.config.validate()?;
        let grid = CandidateGrid::around(tri, self.config.margin);
        if grid.len() > self.config.max_cells {
            return Err(Error::invalid(format!("candidate region {}x{} exceeds {} cells",
                                              grid.width(), grid.height(),
                                              self.config.max_cells)));
        }
        let mut cov = self.evaluate_points(tri, grid)?;
        cov.grid = Some(grid);
        Ok(cov)
    }
    /// Cover an explicit set of candidate cells
    pub fn evaluate_points<I>(&self, tri: &Triangle, points: I) -> Result<Coverage>
        where I: IntoIterator<Item = GridCell>
    {
        debug!("evaluate: {:?} area {}", tri.vertices(), tri.signed_area());
        self.config.validate()?;
        if let Some(limit) = self.config.max_extent {
            let extent = tri.max_edge_extent();
            if extent > limit {
                return Err(Error::OutOfRange { extent, limit });
            }
        }
        if tri.is_degenerate() {
            match self.config.degenerate {
                DegenerateRule::Empty => {
                    debug!("evaluate: degenerate triangle, no cells covered");
                    return Ok(Coverage::default());
                }
                DegenerateRule::Reject => {
                    let [a, b, c] = *tri.vertices();
                    return Err(Error::Degenerate(a.x, a.y, b.x, b.y, c.x, c.y));
                }
                DegenerateRule::Exact => {
                    debug!("evaluate: degenerate triangle, exact test");
                }
            }
        }
        if self.config.cull == Some(tri.winding()) {
            debug!("evaluate: {:?} triangle culled", tri.winding());
            return Ok(Coverage::default());
        }
        let cells = cover_cells(&Barycentric::new(tri), points);
        debug!("evaluate: {} cells covered", cells.len());
        Ok(Coverage { cells, grid: None })
    }
}

fn cover_cells<I>(bary: &Barycentric, points: I) -> BTreeSet<GridCell>
    where I: IntoIterator<Item = GridCell>
{
    points.into_iter()
        .filter(|&c| {
            let inside = bary.contains_cell(c);
            trace!("cell {} {} inside {}", c.x, c.y, inside);
            inside
        })
        .collect()
}

/// Cover a triangle with the default settings
///
/// Degenerate triangles cover nothing.
///
///     let tri = tricover::Triangle::new((1036,698), (1035,699), (1041,699));
///     let cov = tricover::cover(&tri).unwrap();
///     assert_eq!(cov.len(), 8);
///
pub fn cover(tri: &Triangle) -> Result<Coverage> {
    Evaluator::default().evaluate(tri)
}
