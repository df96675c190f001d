//! Reading triangles from text
//!
//! Coordinates are separated by commas, semicolons, whitespace or
//! parentheses, so all of these describe the same triangle:
//!
//!     use tricover::Triangle;
//!
//!     let a : Triangle = "1036,698 1035,699 1041,699".parse().unwrap();
//!     let b : Triangle = "(1036, 698), (1035, 699), (1041, 699)".parse().unwrap();
//!     assert_eq!(a, b);
//!

use crate::error::Error;
use crate::error::Result;
use crate::triangle::Triangle;
use crate::triangle::Vertex;

use std::str::FromStr;

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == ',' || c == ';' || c == '(' || c == ')'
}

/// Parse every coordinate in a string
pub fn parse_coords(s: &str) -> Result<Vec<f64>> {
    s.split(is_separator)
        .filter(|tok| ! tok.is_empty())
        .map(|tok| tok.parse::<f64>()
             .map_err(|_| Error::invalid(format!("not a number: {:?}", tok))))
        .collect()
}

/// Parse coordinates as (x,y) pairs
pub fn parse_vertices(s: &str) -> Result<Vec<Vertex>> {
    let v = parse_coords(s)?;
    if v.len() % 2 != 0 {
        return Err(Error::invalid(format!("odd number of coordinates ({})", v.len())));
    }
    Ok(v.chunks(2).map(|p| Vertex::new(p[0], p[1])).collect())
}

impl FromStr for Vertex {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        match parse_vertices(s)?.as_slice() {
            [p] if p.is_finite() => Ok(*p),
            [p] => Err(Error::invalid(format!("non-finite vertex ({}, {})", p.x, p.y))),
            v => Err(Error::invalid(format!("expected 1 vertex, found {}", v.len()))),
        }
    }
}

impl FromStr for Triangle {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        Triangle::from_slice(&parse_vertices(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn coords_test() {
        assert_eq!(parse_coords(" 1, 2;3 (4) ").unwrap(), vec![1.,2.,3.,4.]);
        assert!(parse_coords("").unwrap().is_empty());
        assert!(parse_coords("1,x").is_err());
        assert!(parse_vertices("1,2,3").is_err());
    }
    #[test]
    fn vertex_test() {
        assert_eq!("2.5,-1".parse::<Vertex>().unwrap(), Vertex::new(2.5, -1.0));
        assert!("2.5".parse::<Vertex>().is_err());
        assert!("1,2 3,4".parse::<Vertex>().is_err());
        assert!("inf,0".parse::<Vertex>().is_err());
    }
}
