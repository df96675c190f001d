//! Coverage Mask
//!
//! Row-major view of a coverage over a candidate region, for printing
//! or dumping to an image file.

use crate::coverage::Coverage;
use crate::error::Error;
use crate::error::Result;
use crate::grid::CandidateGrid;
use crate::grid::MAX_CELLS;

use std::convert::TryFrom;
use std::fmt;
use std::ops::Index;
use std::path::Path;

use tracing::debug;

/// Mask value of a covered cell
pub const COVERED : u8 = 255;

/// Coverage Mask
///
/// Data is stored as row-major order (C-format), one byte per cell
#[derive(Debug,Default,Clone,PartialEq,Eq)]
pub struct CoverageMask {
    /// One byte per cell, [COVERED](constant.COVERED.html) or 0
    pub data: Vec<u8>,
    /// Columns
    pub width: usize,
    /// Rows
    pub height: usize,
    /// Region the mask spans
    pub grid: CandidateGrid,
}

impl CoverageMask {
    /// Create an empty mask over a region
    ///
    /// Regions larger than [MAX_CELLS](constant.MAX_CELLS.html) are refused
    pub fn new(grid: CandidateGrid) -> Result<Self> {
        if grid.len() > MAX_CELLS {
            return Err(Error::invalid(format!("mask {}x{} exceeds {} cells",
                                              grid.width(), grid.height(), MAX_CELLS)));
        }
        let (width, height) = (grid.width(), grid.height());
        Ok(Self { data: vec![0u8; width * height], width, height, grid })
    }
    /// Mark the cells of a coverage that fall inside `grid`
    pub fn from_coverage(cov: &Coverage, grid: CandidateGrid) -> Result<Self> {
        let mut mask = Self::new(grid)?;
        for &c in cov {
            if let Some((col, row)) = grid.index(c) {
                mask.data[row * mask.width + col] = COVERED;
            }
        }
        Ok(mask)
    }
    pub fn is_covered(&self, col: usize, row: usize) -> bool {
        self[(col,row)] == COVERED
    }
    /// Number of covered cells
    pub fn count(&self) -> usize {
        self.data.iter().filter(|&&v| v == COVERED).count()
    }
    /// Grayscale image with each cell drawn as a `scale` x `scale` square
    ///
    /// Fails when the image would be wider or taller than `u32::MAX` pixels
    /// or hold more than [MAX_CELLS](constant.MAX_CELLS.html) pixels
    pub fn to_image(&self, scale: u32) -> Result<image::GrayImage> {
        let scale = scale.max(1);
        let size = |n: usize| u32::try_from(n).ok().and_then(|n| n.checked_mul(scale));
        let (w, h) = match (size(self.width), size(self.height)) {
            (Some(w), Some(h)) if (w as usize).saturating_mul(h as usize) <= MAX_CELLS => (w, h),
            _ => return Err(Error::invalid(format!("{}x{} mask at scale {} is too large",
                                                   self.width, self.height, scale))),
        };
        Ok(image::GrayImage::from_fn(w, h, |x,y| {
            let (col, row) = ((x / scale) as usize, (y / scale) as usize);
            image::Luma([self[(col,row)]])
        }))
    }
    /// Write the mask as an image, format taken from the file extension
    pub fn to_file<P: AsRef<Path>>(&self, filename: P, scale: u32) -> Result<()> {
        debug!("writing {}x{} mask at scale {} to {}",
               self.width, self.height, scale, filename.as_ref().display());
        self.to_image(scale)?.save(filename)?;
        Ok(())
    }
}

impl Index<(usize,usize)> for CoverageMask {
    type Output = u8;
    fn index(&self, index: (usize, usize)) -> &u8 {
        assert!(index.0 < self.width, "request {} >= {} width :: index", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index", index.1, self.height);
        &self.data[index.1 * self.width + index.0]
    }
}

/// One line per row, `#` for covered cells and `.` otherwise
impl fmt::Display for CoverageMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.width.max(1)) {
            let line : String = row.iter()
                .map(|&v| if v == COVERED { '#' } else { '.' })
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Triangle;
    #[test]
    fn mask_test() {
        let cov = crate::cover(&Triangle::new((0,0), (2,0), (0,2))).unwrap();
        let mask = cov.mask().unwrap();
        assert_eq!((mask.width, mask.height), (5, 5));
        assert_eq!(mask.count(), cov.len());
        assert!(mask.is_covered(1, 1));
        assert!(! mask.is_covered(0, 0));
        assert_eq!(mask.to_string(),
                   ".....\n.###.\n.##..\n.#...\n.....\n");
    }
    #[test]
    fn image_scale() {
        let cov = crate::cover(&Triangle::new((0,0), (2,0), (0,2))).unwrap();
        let img = cov.mask().unwrap().to_image(4).unwrap();
        assert_eq!(img.dimensions(), (20, 20));
        assert_eq!(img.get_pixel(4, 4)[0], COVERED);
        assert_eq!(img.get_pixel(3, 3)[0], 0);
    }
    #[test]
    fn image_too_large() {
        let mask = crate::cover(&Triangle::new((0,0), (2,0), (0,2))).unwrap().mask().unwrap();
        match mask.to_image(1_000_000_000) {
            Err(Error::InvalidInput(_)) => {}
            other => panic!("expected invalid input, got {:?}", other.map(|i| i.dimensions())),
        }
        assert!(mask.to_image(u32::MAX).is_err());
        assert!(mask.to_image(100).is_ok());
    }
    #[test]
    fn mask_too_large() {
        let grid = CandidateGrid::new(0, 0, 1 << 20, 1 << 20);
        assert!(CoverageMask::new(grid).is_err());
        assert!(CoverageMask::new(CandidateGrid::new(0, 0, 9, 9)).is_ok());
    }
}
