//! Triangle pixel coverage
//!
//! How does this work
//!    tri = Triangle::new(a, b, c)
//!    cov = Evaluator::new(config).evaluate(&tri)
//!  Evaluation
//!    CandidateGrid::around()  -- bounding box, expanded by margin
//!    Barycentric::new()       -- signed area, sign, s/t coefficients
//!    Barycentric::contains()  -- s >= 0, t >= 0, s + t <= 2 |area|
//!     Output: Set of covered GridCells (centers), row by row
//!  Inspection
//!    cov.scanlines()          -- horizontal spans per row
//!    cov.mask()               -- row-major mask, Display as '#' and '.'
//!      mask.to_file()         -- enlarged cells, written with `image`
//!
//! Cells are covered when their center lies inside or on an edge of
//! the triangle; the winding order of the vertices does not matter.
//!
//!     use tricover::{Evaluator, GridCell, Triangle};
//!
//!     let tri = Triangle::new((0,0), (2,0), (0,2));
//!     let cov = Evaluator::default().evaluate(&tri).unwrap();
//!     assert!(cov.contains(GridCell::new(1,1)));
//!     assert!(! cov.contains(GridCell::new(2,2)));
//!

pub mod error;
pub mod triangle;
pub mod grid;
pub mod coverage;
pub mod scan;
pub mod mask;
pub mod parse;

pub use error::*;
pub use triangle::*;
pub use grid::*;
pub use coverage::*;
pub use scan::*;
pub use mask::*;
pub use parse::*;
