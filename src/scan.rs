//! Scanlines of covered cells

use crate::grid::GridCell;

use tracing::trace;

/// Horizontal run of covered cells
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct Span {
    pub x: i64,
    pub len: i64,
}

impl Span {
    /// Last x covered by the span
    pub fn x_end(&self) -> i64 {
        self.x + self.len - 1
    }
}

/// Row of covered cells split into maximal spans
#[derive(Debug,Default,Clone,PartialEq,Eq)]
pub struct Scanline {
    pub y: i64,
    pub spans: Vec<Span>,
}

impl Scanline {
    pub fn new(y: i64) -> Self {
        Self { y, spans: vec![] }
    }
    pub fn num_spans(&self) -> usize {
        self.spans.len()
    }
    /// Total cells covered in the row
    pub fn num_cells(&self) -> i64 {
        self.spans.iter().map(|s| s.len).sum()
    }
    /// Add a cell to the right of every cell already added
    ///
    /// Extends the last span when the cell is adjacent to it
    pub fn add_cell(&mut self, x: i64) {
        if let Some(cur) = self.spans.last_mut() {
            debug_assert!(x > cur.x_end());
            if x == cur.x_end() + 1 {
                cur.len += 1;
                return;
            }
        }
        self.spans.push(Span { x, len: 1 });
    }
    /// Build scanlines from cells sorted by row then column
    pub fn from_cells<I>(cells: I) -> Vec<Scanline>
        where I: IntoIterator<Item = GridCell>
    {
        let mut out : Vec<Scanline> = vec![];
        for c in cells {
            match out.last_mut() {
                Some(sl) if sl.y == c.y => sl.add_cell(c.x),
                _ => {
                    let mut sl = Scanline::new(c.y);
                    sl.add_cell(c.x);
                    out.push(sl);
                }
            }
        }
        for sl in &out {
            trace!("scanline y {} spans {:?}", sl.y, sl.spans);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn spans_merge() {
        let cells : [(i64,i64); 5] = [(0,0), (1,0), (2,0), (4,0), (1,2)];
        let sl = Scanline::from_cells(cells.iter().map(|&c| GridCell::from(c)));
        assert_eq!(sl.len(), 2);
        assert_eq!(sl[0].y, 0);
        assert_eq!(sl[0].spans, vec![Span { x: 0, len: 3 }, Span { x: 4, len: 1 }]);
        assert_eq!(sl[0].num_cells(), 4);
        assert_eq!(sl[1].y, 2);
        assert_eq!(sl[1].spans, vec![Span { x: 1, len: 1 }]);
    }
}
