use super::*;

#[test]
fn volume_test() {
    assert_eq!(Lattice::new(1).volume(), 1);
    assert_eq!(Lattice::new(3).volume(), 27);
    assert_eq!(Lattice::new(10).volume(), 1000);
}

#[test]
fn volume_empty_test() {
    assert_eq!(Lattice::new(0).volume(), 0);
    assert_eq!(Lattice::new(-4).volume(), 0);
}

#[test]
fn coords_empty_test() {
    assert!(Lattice::new(0).coords().next().is_none());
    assert!(Lattice::new(-2).coords().next().is_none());
}

#[test]
fn coords_order_test() {
    let coords: Vec<GridCoord> = Lattice::new(2).coords().collect();

    let expected = [
        (0, 0, 0),
        (0, 0, 1),
        (0, 1, 0),
        (0, 1, 1),
        (1, 0, 0),
        (1, 0, 1),
        (1, 1, 0),
        (1, 1, 1),
    ];

    assert_eq!(coords.len(), expected.len());

    for (coord, (i, j, k)) in coords.iter().zip(expected) {
        assert_eq!(*coord, GridCoord { i, j, k });
    }
}

#[test]
fn coords_bounds_test() {
    let lattice = Lattice::new(3);

    assert_eq!(lattice.coords().count() as u64, lattice.volume());

    for coord in lattice.coords() {
        assert!((0..3).contains(&coord.i));
        assert!((0..3).contains(&coord.j));
        assert!((0..3).contains(&coord.k));
    }
}
