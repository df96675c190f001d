//! Print the cells covered by a triangle
//!
//!     tricover [OPTIONS] [X,Y X,Y X,Y]
//!
//! Without coordinates the built-in debug triangle is used.

use tricover::CoverageConfig;
use tricover::DegenerateRule;
use tricover::Evaluator;
use tricover::Triangle;
use tricover::Winding;
use tricover::MAX_EDGE_EXTENT;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tracing::{debug, info};
use tracing_subscriber::{self, EnvFilter};

/// Triangle the debug view was written for
const DEBUG_TRIANGLE : [(i64,i64); 3] = [(1036,698), (1035,699), (1041,699)];

const USAGE : &str = "usage: tricover [--margin N] [--degenerate empty|exact|reject] \
                      [--cull cw|ccw] [--image PATH] [--scale N] [X,Y X,Y X,Y]";

#[derive(Debug)]
struct Args {
    triangle: Triangle,
    config: CoverageConfig,
    image: Option<PathBuf>,
    scale: u32,
}

fn value<I: Iterator<Item = String>>(args: &mut I, flag: &str) -> Result<String> {
    args.next().with_context(|| format!("{} requires a value", flag))
}

fn parse_args<I: Iterator<Item = String>>(mut args: I) -> Result<Args> {
    let mut config = CoverageConfig::default().max_extent(MAX_EDGE_EXTENT);
    let mut image = None;
    let mut scale = 32;
    let mut coords = vec![];
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--margin" => {
                let v = value(&mut args, &arg)?;
                config = config.margin(v.parse().with_context(|| format!("bad margin {:?}", v))?);
            }
            "--degenerate" => {
                let rule : DegenerateRule = value(&mut args, &arg)?.parse()?;
                config = config.degenerate(rule);
            }
            "--cull" => {
                let winding : Winding = value(&mut args, &arg)?.parse()?;
                config = config.cull(winding);
            }
            "--image" => image = Some(PathBuf::from(value(&mut args, &arg)?)),
            "--scale" => {
                let v = value(&mut args, &arg)?;
                scale = v.parse().with_context(|| format!("bad scale {:?}", v))?;
            }
            "-h" | "--help" => bail!("{}", USAGE),
            a if a.starts_with("--") => bail!("unknown option {}\n{}", a, USAGE),
            other => coords.push(other.to_string()),
        }
    }
    config.validate()?;
    let triangle = if coords.is_empty() {
        let [a, b, c] = DEBUG_TRIANGLE;
        Triangle::new(a, b, c)
    } else {
        coords.join(" ").parse()?
    };
    Ok(Args { triangle, config, image, scale })
}

/// Filter from `RUST_LOG`, falling back to `info` when unset or unparsable
fn log_filter(directives: Option<String>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok()))
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args(std::env::args().skip(1))?;
    debug!("{:?}", args);

    let tri = &args.triangle;
    let cov = Evaluator::new(args.config).evaluate(tri)?;
    let mask = cov.mask()?;
    let g = mask.grid;

    println!("triangle: {:?}", tri.vertices());
    println!("winding: {:?}, area {}", tri.winding(), tri.signed_area());
    println!("grid: x {}..={}, y {}..={} ({}x{})", g.x1, g.x2, g.y1, g.y2, mask.width, mask.height);
    println!("covered: {} cells", cov.len());
    for sl in cov.scanlines() {
        let spans : Vec<_> = sl.spans.iter()
            .map(|s| format!("{}..={}", s.x, s.x_end()))
            .collect();
        println!("  y {}: x {}", sl.y, spans.join(", "));
    }
    print!("{}", mask);

    if let Some(path) = &args.image {
        mask.to_file(path, args.scale)
            .with_context(|| format!("writing {}", path.display()))?;
        info!("wrote {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    fn args(v: &[&str]) -> Result<Args> {
        parse_args(v.iter().map(|s| s.to_string()))
    }
    #[test]
    fn default_triangle() {
        let a = args(&[]).unwrap();
        assert_eq!(a.triangle, Triangle::new((1036,698), (1035,699), (1041,699)));
        assert_eq!(a.config, CoverageConfig::default().max_extent(MAX_EDGE_EXTENT));
        assert_eq!(a.scale, 32);
        assert!(a.image.is_none());
    }
    #[test]
    fn options() {
        let a = args(&["--margin", "3", "--degenerate", "reject", "0,0", "2,0", "0,-2",
                       "--image", "out.png", "--scale", "8"]).unwrap();
        assert_eq!(a.triangle, Triangle::new((0,0), (2,0), (0,-2)));
        assert_eq!(a.config.margin, 3);
        assert_eq!(a.config.degenerate, DegenerateRule::Reject);
        assert_eq!(a.image, Some(PathBuf::from("out.png")));
        assert_eq!(a.scale, 8);
        assert_eq!(a.config.cull, None);
        let a = args(&["--cull", "ccw"]).unwrap();
        assert_eq!(a.config.cull, Some(Winding::CounterClockwise));
    }
    #[test]
    fn bad_input() {
        assert!(args(&["0,0", "1,1"]).is_err());
        assert!(args(&["0,0", "1,1", "a,b"]).is_err());
        assert!(args(&["--margin"]).is_err());
        assert!(args(&["--degenerate", "sometimes"]).is_err());
        assert!(args(&["--frobnicate"]).is_err());
        assert!(args(&["--margin", "-3"]).is_err());
        assert!(args(&["--cull", "sideways"]).is_err());
    }
    #[test]
    fn log_levels() {
        use tracing::level_filters::LevelFilter;
        let level = |v: Option<&str>| log_filter(v.map(String::from)).max_level_hint();
        assert_eq!(level(None), Some(LevelFilter::INFO));
        assert_eq!(level(Some("debug")), Some(LevelFilter::DEBUG));
        assert_eq!(level(Some("trace")), Some(LevelFilter::TRACE));
        assert_eq!(level(Some("tricover=debug")), Some(LevelFilter::DEBUG));
    }
    #[test]
    fn default_extent_limit() {
        let a = args(&["0,0", "16384,0", "0,1"]).unwrap();
        assert!(Evaluator::new(a.config).evaluate(&a.triangle).is_err());
        let a = args(&["0,0", "20,0", "0,20"]).unwrap();
        assert!(Evaluator::new(a.config).evaluate(&a.triangle).is_ok());
    }
}
