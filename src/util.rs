use rand::RngCore;
use std::collections::BTreeSet;

/// `(row, col)`
pub type Cursor = (u16, u16);

pub const DIRS_8: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

pub fn rc_i((row, col): Cursor, size: u16) -> Option<usize> {
    if size <= row || size <= col {
        None
    } else {
        Some(row as usize * size as usize + col as usize)
    }
}

pub fn i_rc(index: usize, size: u16) -> Option<Cursor> {
    let s = size as usize;
    if index >= s * s {
        None
    } else {
        Some(((index / s) as u16, (index % s) as u16))
    }
}

/// In-bounds cells around `cursor` on a `size`×`size` board.
pub fn valid_neighbors(
    dirs: &[(i8, i8)],
    (row, col): Cursor,
    size: u16,
) -> impl Iterator<Item = Cursor> {
    dirs.iter()
        .map(|(dr, dc)| (*dr as i32, *dc as i32))
        .map(move |(dr, dc)| (row as i32 + dr, col as i32 + dc))
        .filter(move |(r, c)| (0..size as i32).contains(r) && (0..size as i32).contains(c))
        .map(|(r, c)| (r as u16, c as u16))
}

/// Vector of `size` entries where exactly `fills` random ones hold `value`
/// and the rest hold `init_value`.
pub fn fill_random<T: Copy>(
    rng: &mut impl RngCore,
    size: usize,
    fills: usize,
    init_value: T,
    value: T,
) -> Vec<T> {
    let fills = fills.min(size);
    // place whichever of the two values is rarer
    let (fills, init_value, value) = if fills > size / 2 {
        (size - fills, value, init_value)
    } else {
        (fills, init_value, value)
    };

    let mut ret = vec![init_value; size];
    let mut taken = BTreeSet::new();

    for _ in 0..fills {
        let mut r = rng.next_u32() as usize % (size - taken.len());

        for t in taken.iter() {
            r = if *t <= r { r + 1 } else { break };
        }
        ret[r] = value;
        taken.insert(r);
    }

    ret
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn index_conversion() {
        assert_eq!(rc_i((0, 0), 3), Some(0));
        assert_eq!(rc_i((1, 2), 3), Some(5));
        assert_eq!(rc_i((3, 0), 3), None);
        assert_eq!(rc_i((0, 3), 3), None);
        assert_eq!(i_rc(5, 3), Some((1, 2)));
        assert_eq!(i_rc(9, 3), None);
    }

    #[test]
    fn neighbors_clamp_at_edges() {
        let corner: Vec<_> = valid_neighbors(&DIRS_8, (0, 0), 3).collect();
        assert_eq!(corner.len(), 3);
        assert!(corner.contains(&(1, 1)));

        let edge = valid_neighbors(&DIRS_8, (0, 1), 3).count();
        assert_eq!(edge, 5);

        let center: Vec<_> = valid_neighbors(&DIRS_8, (1, 1), 3).collect();
        assert_eq!(center.len(), 8);
        assert!(!center.contains(&(1, 1)));

        assert_eq!(valid_neighbors(&DIRS_8, (0, 0), 1).count(), 0);
    }

    #[test]
    fn fill_random_places_exact_count() {
        let mut rng = StdRng::seed_from_u64(7);
        for fills in [0, 1, 10, 50, 51, 99, 100, 250] {
            let v = fill_random(&mut rng, 100, fills, false, true);
            assert_eq!(v.len(), 100);
            assert_eq!(v.iter().filter(|b| **b).count(), fills.min(100));
        }
        assert!(fill_random(&mut rng, 0, 3, false, true).is_empty());
    }
}
