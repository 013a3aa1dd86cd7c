use crate::util::fill_random;
use rand::RngCore;
use std::fmt::Write;

/// `size` rows of `.`/`*` holding exactly `mines` mines.
pub fn random_rows(rng: &mut impl RngCore, size: u16, mines: u32) -> Vec<String> {
    let size = size as usize;
    let cells = fill_random(rng, size * size, mines as usize, '.', '*');
    if size == 0 {
        return Vec::new();
    }
    cells
        .chunks_exact(size)
        .map(|row| row.iter().collect())
        .collect()
}

/// A complete test file of `cases` random boards.
pub fn test_file(rng: &mut impl RngCore, cases: u32, size: u16, mines: u32) -> String {
    let mut text = String::new();
    // writing to a String never fails
    let _ = writeln!(text, "{cases}");
    for _ in 0..cases {
        let _ = writeln!(text, "{size}");
        for row in random_rows(rng, size, mines) {
            let _ = writeln!(text, "{row}");
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::parse_cases;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn rows_have_requested_shape() {
        let mut rng = StdRng::seed_from_u64(1);
        let rows = random_rows(&mut rng, 6, 10);
        assert_eq!(rows.len(), 6);
        assert!(rows.iter().all(|r| r.len() == 6));
        let mines: usize = rows.iter().map(|r| r.matches('*').count()).sum();
        assert_eq!(mines, 10);
        assert!(random_rows(&mut rng, 0, 3).is_empty());
    }

    #[test_log::test]
    fn generated_file_parses_back() {
        let mut rng = StdRng::seed_from_u64(42);
        let text = test_file(&mut rng, 4, 8, 20);
        let grids = parse_cases(&text).unwrap();
        assert_eq!(grids.len(), 4);
        for grid in &grids {
            assert_eq!(grid.size(), 8);
            assert_eq!(grid.mine_count(), 20);
        }
    }

    #[test]
    fn same_seed_same_file() {
        let a = test_file(&mut StdRng::seed_from_u64(9), 3, 10, 30);
        let b = test_file(&mut StdRng::seed_from_u64(9), 3, 10, 30);
        assert_eq!(a, b);
    }
}
