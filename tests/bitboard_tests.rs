use battlegrid::{BitBoard, BitBoardError};

#[test]
fn insert_contains_remove() {
    let mut bb = BitBoard::<u16, 4>::new();
    assert!(bb.is_empty());

    bb.insert(1, 1).unwrap();
    assert!(bb.contains(1, 1).unwrap());
    assert_eq!(bb.len(), 1);

    bb.remove(1, 1).unwrap();
    assert!(!bb.contains(1, 1).unwrap());
    assert!(bb.is_empty());
}

#[test]
fn out_of_bounds_cells_are_rejected() {
    let mut bb = BitBoard::<u128, 10>::new();
    assert_eq!(
        bb.insert(10, 0).unwrap_err(),
        BitBoardError::IndexOutOfBounds { row: 10, col: 0 }
    );
    assert!(bb.contains(3, 10).is_err());
}

#[test]
fn from_cells_and_iter() {
    let bb = BitBoard::<u16, 4>::from_cells([(3, 3), (0, 1)]).unwrap();
    let cells: Vec<_> = bb.iter().collect();
    assert_eq!(cells, vec![(0, 1), (3, 3)]);
}

#[test]
fn complement_stays_on_the_board() {
    let bb = BitBoard::<u128, 10>::from_cells([(0, 0)]).unwrap();
    assert_eq!((!bb).len(), 99);
    let full = !BitBoard::<u128, 10>::new();
    assert_eq!(full.len(), 100);
    assert_eq!((full & bb).len(), 1);
    assert_eq!((bb | BitBoard::from_cells([(9, 9)]).unwrap()).len(), 2);
}
