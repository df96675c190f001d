
extern crate tricover;

use tricover::{CandidateGrid, Coverage, Evaluator, Triangle};

fn triangles() -> Vec<Triangle> {
    vec![
        Triangle::new((1036,698), (1035,699), (1041,699)),
        Triangle::new((0,0), (2,0), (0,2)),
        Triangle::new((0,0), (7,3), (2,9)),
        Triangle::new((-5,-4), (6,-1), (1,8)),
        Triangle::new((3,3), (-7,5), (10,-6)),
    ]
}

fn cells(cov: &Coverage) -> Vec<(i64,i64)> {
    cov.iter().map(|c| (c.x, c.y)).collect()
}

#[test]
fn reversed_order() {
    for t in triangles() {
        let a = tricover::cover(&t).unwrap();
        let b = tricover::cover(&t.reversed()).unwrap();
        assert!(t.signed_area() * t.reversed().signed_area() < 0.0);
        assert_eq!(a, b);
    }
}

#[test]
fn any_vertex_order() {
    for t in triangles() {
        let [a, b, c] = *t.vertices();
        let base = cells(&tricover::cover(&t).unwrap());
        let orders = [[a,b,c], [a,c,b], [b,a,c], [b,c,a], [c,a,b], [c,b,a]];
        for o in orders.iter() {
            let p = Triangle::new(o[0], o[1], o[2]);
            assert_eq!(cells(&tricover::cover(&p).unwrap()), base, "{:?}", o);
        }
    }
}

#[test]
fn translated() {
    let ev = Evaluator::default();
    for t in triangles() {
        let cov = ev.evaluate(&t).unwrap();
        for &(dx,dy) in &[(1,0), (0,-3), (-17,250), (1000,-1000)] {
            let moved = ev.evaluate(&t.translate(dx as f64, dy as f64)).unwrap();
            assert_eq!(moved, cov.translate(dx, dy));
        }
    }
}

#[test]
fn translated_candidates() {
    let ev = Evaluator::default();
    let t = Triangle::new((0,0), (7,3), (2,9));
    let grid = CandidateGrid::new(-3, -3, 12, 12);
    let cov = ev.evaluate_points(&t, grid).unwrap();
    let moved_grid = CandidateGrid::new(-3 + 5, -3 - 8, 12 + 5, 12 - 8);
    let moved = ev.evaluate_points(&t.translate(5.0, -8.0), moved_grid).unwrap();
    assert_eq!(cells(&moved), cells(&cov.translate(5, -8)));
}
