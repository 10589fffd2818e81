use std::collections::BTreeSet;

use grid_core::{Area, Coordinate};

fn cells(points: &[(i32, i32)]) -> BTreeSet<Coordinate> {
    points.iter().copied().map(Coordinate::from).collect()
}

fn square_set(range: i32) -> BTreeSet<Coordinate> {
    (-range..=range)
        .flat_map(|x| (-range..=range).map(move |y| Coordinate::new(x, y)))
        .collect()
}

fn dir(x: i32, y: i32) -> Coordinate {
    Coordinate::new(x, y)
}

#[test]
fn point_is_origin_only() {
    assert_eq!(Area::point().coordinates(), &cells(&[(0, 0)]));
}

#[test]
fn square_one_has_nine_cells() {
    assert_eq!(Area::square(1, 0).coordinates(), &square_set(1));
}

#[test]
fn diamond_one_is_a_plus() {
    assert_eq!(
        Area::diamond(1, 0).coordinates(),
        &cells(&[(0, 0), (1, 0), (-1, 0), (0, 1), (0, -1)])
    );
}

#[test]
fn hollowing_is_a_set_difference() {
    for range in 1..6 {
        for inner_cut in 1..=range {
            let hollow = Area::square(range, inner_cut);
            let expected: BTreeSet<_> = square_set(range)
                .difference(&square_set(inner_cut - 1))
                .copied()
                .collect();
            assert_eq!(hollow.coordinates(), &expected, "square({range}, {inner_cut})");
        }
    }
    assert_eq!(Area::square(3, 2).len(), 40);
    assert_eq!(Area::diamond(3, 2).len(), 20);
}

#[test]
fn zero_range_with_inner_cut_is_empty() {
    assert!(Area::square(0, 1).is_empty());
    assert!(Area::diamond(0, 1).is_empty());
}

#[test]
fn circle_three() {
    assert_eq!(
        Area::circle(3, 0).coordinates(),
        &cells(&[
            (-3, -1),
            (-3, 0),
            (-3, 1),
            (-2, -2),
            (-2, -1),
            (-2, 0),
            (-2, 1),
            (-2, 2),
            (-1, -3),
            (-1, -2),
            (-1, -1),
            (-1, 0),
            (-1, 1),
            (-1, 2),
            (-1, 3),
            (0, -3),
            (0, -2),
            (0, -1),
            (0, 0),
            (0, 1),
            (0, 2),
            (0, 3),
            (1, -3),
            (1, -2),
            (1, -1),
            (1, 0),
            (1, 1),
            (1, 2),
            (1, 3),
            (2, -2),
            (2, -1),
            (2, 0),
            (2, 1),
            (2, 2),
            (3, -1),
            (3, 0),
            (3, 1),
        ])
    );
}

#[test]
fn circle_sizes() {
    let sizes: Vec<_> = (2..=5).map(|range| Area::circle(range, 0).len()).collect();
    assert_eq!(sizes, vec![21, 37, 69, 97]);
}

#[test]
fn cone_orthogonal() {
    assert_eq!(
        Area::cone(2, dir(1, 0), 0).coordinates(),
        &cells(&[
            (0, 0),
            (1, -1),
            (1, 0),
            (1, 1),
            (2, -2),
            (2, -1),
            (2, 0),
            (2, 1),
            (2, 2),
        ])
    );
    assert_eq!(Area::cone(3, dir(1, 0), 0).len(), 16);
    assert_eq!(Area::cone(3, dir(0, 1), 0).len(), 16);
}

#[test]
fn cone_diagonal_and_mirror() {
    let up_right = cells(&[
        (0, 0),
        (0, 1),
        (0, 2),
        (0, 3),
        (1, 0),
        (1, 1),
        (1, 2),
        (2, 0),
        (2, 1),
        (3, 0),
    ]);
    assert_eq!(Area::cone(3, dir(1, 1), 0).coordinates(), &up_right);

    let up_left: BTreeSet<_> = up_right.iter().map(|c| Coordinate::new(-c.x, c.y)).collect();
    assert_eq!(Area::cone(3, dir(-1, 1), 0).coordinates(), &up_left);
}

#[test]
fn hollow_cone_drops_its_tip() {
    assert_eq!(
        Area::cone(2, dir(1, 0), 1).coordinates(),
        &cells(&[(1, -1), (1, 0), (1, 1), (2, -2), (2, -1), (2, 0), (2, 1), (2, 2)])
    );
}

#[test]
fn drill_widens_across_origin() {
    assert_eq!(
        Area::drill(2, dir(0, -1), 0).coordinates(),
        &cells(&[
            (-2, 0),
            (-1, -1),
            (-1, 0),
            (0, -2),
            (0, -1),
            (0, 0),
            (1, -1),
            (1, 0),
            (2, 0),
        ])
    );
    assert_eq!(Area::drill(3, dir(1, 0), 0).len(), 16);

    let quadrant: BTreeSet<_> = (0..=3)
        .flat_map(|x| (0..=3).map(move |y| Coordinate::new(x, y)))
        .collect();
    assert_eq!(Area::drill(3, dir(1, 1), 0).coordinates(), &quadrant);
}

#[test]
fn half_square() {
    assert_eq!(Area::half_square(2, dir(0, 1), 0).len(), 15);
    assert_eq!(Area::half_square(2, dir(1, 0), 0).len(), 15);
    assert_eq!(Area::half_square(2, dir(1, 1), 0).len(), 9);
    assert_eq!(
        Area::half_square(1, dir(-1, 0), 0).coordinates(),
        &cells(&[(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 0), (0, 1)])
    );
}

#[test]
fn half_square_diagonal_is_a_quadrant() {
    assert_eq!(
        Area::half_square(2, dir(-1, 1), 0).coordinates(),
        &cells(&[
            (-2, 0),
            (-2, 1),
            (-2, 2),
            (-1, 0),
            (-1, 1),
            (-1, 2),
            (0, 0),
            (0, 1),
            (0, 2),
        ])
    );
}

#[test]
fn x_shapes() {
    assert_eq!(
        Area::x(2, 1, 0).coordinates(),
        &cells(&[
            (-2, -2),
            (-2, 2),
            (-1, -1),
            (-1, 1),
            (0, 0),
            (1, -1),
            (1, 1),
            (2, -2),
            (2, 2),
        ])
    );
    assert_eq!(Area::x(3, 2, 0).len(), 33);
    assert_eq!(Area::x(2, 2, 0).len(), 21);
    assert_eq!(
        Area::x(3, 1, 2).coordinates(),
        &cells(&[
            (-3, -3),
            (-3, 3),
            (3, -3),
            (3, 3),
            (-2, -2),
            (-2, 2),
            (2, -2),
            (2, 2),
        ])
    );
}

#[test]
fn x_without_thickness_is_empty() {
    for range in 0..6 {
        assert!(Area::x(range, 0, 0).is_empty(), "range {range}");
        assert!(Area::x(range, -2, 0).is_empty(), "range {range}");
    }
}

#[test]
fn orthogonal_lines() {
    assert_eq!(
        Area::line(3, dir(1, 0), 1, 0).coordinates(),
        &cells(&[(0, 0), (1, 0), (2, 0), (3, 0)])
    );
    assert_eq!(
        Area::line(3, dir(0, -1), 1, 0).coordinates(),
        &cells(&[(0, -3), (0, -2), (0, -1), (0, 0)])
    );

    let wide = Area::line(3, dir(0, 1), 2, 0);
    let expected: BTreeSet<_> = (-1..=1)
        .flat_map(|x| (0..=3).map(move |y| Coordinate::new(x, y)))
        .collect();
    assert_eq!(wide.coordinates(), &expected);

    // Past `range + 1` the perpendicular clip grows back.
    assert_eq!(Area::line(3, dir(0, 1), 6, 0).coordinates(), &expected);
    assert_eq!(
        Area::line(2, dir(1, 0), 5, 0).coordinates(),
        &cells(&[(0, 0), (1, 0), (2, 0)])
    );
}

#[test]
fn diagonal_lines() {
    assert_eq!(
        Area::line(3, dir(1, 1), 1, 0).coordinates(),
        &cells(&[(0, 0), (1, 1), (2, 2), (3, 3)])
    );
    assert_eq!(
        Area::line(3, dir(1, 1), 2, 0).coordinates(),
        &cells(&[
            (0, 0),
            (0, 1),
            (1, 0),
            (1, 1),
            (1, 2),
            (2, 1),
            (2, 2),
            (2, 3),
            (3, 2),
            (3, 3),
        ])
    );
    assert_eq!(Area::line(3, dir(1, 1), 0, 0).len(), 16);
}

#[test]
fn plus_signs() {
    assert_eq!(Area::plus_sign(3, 1, 0).len(), 13);
    assert_eq!(Area::plus_sign(3, 2, 0).len(), 33);
    assert_eq!(Area::plus_sign(3, 2, 1).len(), 28);
    assert_eq!(
        Area::plus_sign(2, 2, 1).coordinates(),
        &cells(&[
            (-2, -1),
            (-2, 0),
            (-2, 1),
            (-1, -2),
            (-1, 0),
            (-1, 2),
            (0, -2),
            (0, -1),
            (0, 1),
            (0, 2),
            (1, -2),
            (1, 0),
            (1, 2),
            (2, -1),
            (2, 0),
            (2, 1),
        ])
    );
}

#[test]
fn plus_sign_arms_are_axis_aligned() {
    let cross = Area::plus_sign(3, 1, 0);
    assert!(cross.coordinates().iter().all(|c| c.x == 0 || c.y == 0));
}
