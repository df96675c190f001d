//! Triangle Geometry

use crate::error::Error;
use crate::error::Result;

use std::str::FromStr;

/// Largest per-axis edge extent accepted by the target polygon rasterizer
///
/// Triangles with any edge spanning more than this along x or y are
/// dropped by the rasterizer before drawing.
pub const MAX_EDGE_EXTENT : f64 = 16383.0;

/// Point in screen space, y increases downward
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64,f64)> for Vertex {
    fn from(v: (f64,f64)) -> Self { Self::new(v.0, v.1) }
}
impl From<(f32,f32)> for Vertex {
    fn from(v: (f32,f32)) -> Self { Self::new(f64::from(v.0), f64::from(v.1)) }
}
impl From<(i32,i32)> for Vertex {
    fn from(v: (i32,i32)) -> Self { Self::new(f64::from(v.0), f64::from(v.1)) }
}
impl From<(i64,i64)> for Vertex {
    fn from(v: (i64,i64)) -> Self { Self::new(v.0 as f64, v.1 as f64) }
}

/// Vertex ordering as seen on screen (y down)
#[derive(Debug,PartialEq,Eq,Copy,Clone)]
pub enum Winding {
    Clockwise,
    CounterClockwise,
    /// Zero area, vertices are collinear
    Degenerate,
}

impl FromStr for Winding {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "cw" | "clockwise" => Ok(Winding::Clockwise),
            "ccw" | "counterclockwise" => Ok(Winding::CounterClockwise),
            "degenerate" => Ok(Winding::Degenerate),
            _ => Err(Error::invalid(format!("unknown winding {:?}", s))),
        }
    }
}

/// Three vertices in a fixed order
///
/// No winding order is required.
///
///     use tricover::Triangle;
///
///     let tri = Triangle::new((0,0), (2,0), (0,2));
///     assert_eq!(tri.signed_area(), 2.0);
///     assert_eq!(tri.reversed().signed_area(), -2.0);
///
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Triangle {
    v: [Vertex; 3],
}

impl Triangle {
    /// Create a new Triangle from three points
    pub fn new<V: Into<Vertex>>(a: V, b: V, c: V) -> Self {
        Self { v: [a.into(), b.into(), c.into()] }
    }
    /// Create a Triangle from a slice of exactly three finite vertices
    pub fn from_slice(v: &[Vertex]) -> Result<Self> {
        if v.len() != 3 {
            return Err(Error::invalid(format!("expected 3 vertices, found {}", v.len())));
        }
        if let Some(p) = v.iter().find(|p| ! p.is_finite()) {
            return Err(Error::invalid(format!("non-finite vertex ({}, {})", p.x, p.y)));
        }
        Ok(Self { v: [v[0], v[1], v[2]] })
    }
    pub fn vertices(&self) -> &[Vertex; 3] {
        &self.v
    }
    /// Same vertices, opposite winding
    pub fn reversed(&self) -> Self {
        Self { v: [self.v[2], self.v[1], self.v[0]] }
    }
    /// Move every vertex by (dx,dy)
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        let mut v = self.v;
        for p in v.iter_mut() {
            p.x += dx;
            p.y += dy;
        }
        Self { v }
    }
    /// Signed area
    ///
    /// Positive for clockwise (on screen), negative for counter-clockwise,
    /// zero when the vertices are collinear
    pub fn signed_area(&self) -> f64 {
        let [Vertex { x: x0, y: y0 },
             Vertex { x: x1, y: y1 },
             Vertex { x: x2, y: y2 }] = self.v;
        0.5 * (-(y1*x2) + y0*(x2-x1) + x0*(y1-y2) + x1*y2)
    }
    pub fn is_degenerate(&self) -> bool {
        self.signed_area() == 0.0
    }
    pub fn winding(&self) -> Winding {
        let a = self.signed_area();
        if a > 0.0 {
            Winding::Clockwise
        } else if a < 0.0 {
            Winding::CounterClockwise
        } else {
            Winding::Degenerate
        }
    }
    /// Bounding box as (min x, min y, max x, max y)
    pub fn bounds(&self) -> (f64,f64,f64,f64) {
        let mut b = (self.v[0].x, self.v[0].y, self.v[0].x, self.v[0].y);
        for p in &self.v[1..] {
            b.0 = b.0.min(p.x);
            b.1 = b.1.min(p.y);
            b.2 = b.2.max(p.x);
            b.3 = b.3.max(p.y);
        }
        b
    }
    /// Largest extent of any edge along either axis
    pub fn max_edge_extent(&self) -> f64 {
        let edges = [(0,1), (1,2), (2,0)];
        edges.iter()
            .map(|&(i,j)| (self.v[i], self.v[j]))
            .map(|(a,b)| (a.x - b.x).abs().max((a.y - b.y).abs()))
            .fold(0.0, f64::max)
    }
    /// Check all edges are within `limit` along both axes
    pub fn within_extent(&self, limit: f64) -> bool {
        self.max_edge_extent() <= limit
    }
}
