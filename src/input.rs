use crate::grid::Grid;
use color_eyre::Result;
use color_eyre::eyre::{OptionExt, WrapErr};
use log::{debug, info};
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

/// Reads a whole test file; `-` reads stdin.
pub fn read_cases(path: &Path) -> Result<Vec<Grid>> {
    let text = if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .wrap_err("failed to read stdin")?;
        text
    } else {
        std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read {}", path.display()))?
    };
    let cases =
        parse_cases(&text).wrap_err_with(|| format!("malformed input {}", path.display()))?;
    info!("read {} cases from {}", cases.len(), path.display());
    Ok(cases)
}

/// Parses `T`, then `T` blocks of a size line `N` and `N` rows.
/// Every grid comes back with its mines counted.
pub fn parse_cases(text: &str) -> Result<Vec<Grid>> {
    let mut lines = NumberedLines::new(text);

    let cases: usize = lines.parse_next("test count")?;
    let mut grids = Vec::new();

    for case in 1..=cases {
        let size: usize = lines
            .parse_next("grid size")
            .wrap_err_with(|| format!("case #{case}"))?;

        let first_row = lines.number + 1;
        let rows = (0..size)
            .map(|_| lines.next_line("grid row"))
            .collect::<Result<Vec<_>>>()
            .wrap_err_with(|| format!("case #{case}"))?;

        let mut grid = Grid::from_rows(&rows)
            .wrap_err_with(|| format!("case #{case}, grid starting on line {first_row}"))?;
        grid.count_mines();
        debug!("case #{case}: {size}x{size} with {} mines", grid.mine_count());
        grids.push(grid);
    }

    Ok(grids)
}

struct NumberedLines<'a> {
    lines: std::str::Lines<'a>,
    /// 1-based number of the last line handed out
    number: usize,
}

impl<'a> NumberedLines<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines(),
            number: 0,
        }
    }

    fn next_line(&mut self, what: &str) -> Result<&'a str> {
        let line = self
            .lines
            .next()
            .ok_or_eyre(format!("unexpected end of input, expected {what}"))?;
        self.number += 1;
        Ok(line.trim_end_matches('\r'))
    }

    fn parse_next<T>(&mut self, what: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        let line = self.next_line(what)?;
        line.trim()
            .parse()
            .wrap_err_with(|| format!("line {}: invalid {what} {line:?}", self.number))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell_content::CellContent::Empty;

    const SAMPLE: &str = "2\n3\n..*\n..*\n**.\n5\n..*..\n..*..\n.*..*\n.*...\n.*...\n";

    #[test_log::test]
    fn parses_sample() {
        let mut grids = parse_cases(SAMPLE).unwrap();
        assert_eq!(grids.len(), 2);
        assert_eq!(grids[0].size(), 3);
        assert_eq!(grids[1].size(), 5);
        assert_eq!(grids[0].mine_count(), 4);
        // mines are counted on the way in
        assert_eq!(grids[0].get((1, 1)).unwrap().content, Empty(4));
        let answers: Vec<_> = grids.iter_mut().map(Grid::solve).collect();
        assert_eq!(answers, vec![2, 8]);
    }

    #[test]
    fn tolerates_crlf_and_padding() {
        let text = "1 \r\n 2\r\n.*\r\n..\r\n";
        let grids = parse_cases(text).unwrap();
        assert_eq!(grids.len(), 1);
        assert_eq!(grids[0].mine_count(), 1);
    }

    #[test]
    fn ignores_trailing_lines() {
        let grids = parse_cases("1\n1\n*\nleftover\n").unwrap();
        assert_eq!(grids.len(), 1);
    }

    #[test]
    fn zero_cases_and_zero_size() {
        assert!(parse_cases("0\n").unwrap().is_empty());
        let mut grids = parse_cases("1\n0\n").unwrap();
        assert_eq!(grids[0].solve(), 0);
    }

    #[test]
    fn bad_count_is_fatal() {
        let err = parse_cases("two\n").unwrap_err();
        assert!(format!("{err:?}").contains("line 1: invalid test count"));
        assert!(parse_cases("").is_err());
        assert!(parse_cases("-1\n").is_err());
    }

    #[test]
    fn short_file_is_fatal() {
        let err = parse_cases("2\n2\n..\n..\n").unwrap_err();
        let report = format!("{err:?}");
        assert!(report.contains("case #2"));
        assert!(report.contains("expected grid size"));

        let err = parse_cases("1\n3\n...\n...\n").unwrap_err();
        assert!(format!("{err:?}").contains("expected grid row"));
    }

    #[test]
    fn bad_row_names_its_line() {
        let err = parse_cases("1\n2\n..\n.#\n").unwrap_err();
        let report = format!("{err:?}");
        assert!(report.contains("grid starting on line 3"));
        assert!(report.contains("row 2, column 2"));
    }

    #[test]
    fn reads_from_file() {
        let path =
            std::env::temp_dir().join(format!("mineclicks-input-{}.in", std::process::id()));
        std::fs::write(&path, SAMPLE).unwrap();
        let grids = read_cases(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(grids.len(), 2);

        assert!(read_cases(Path::new("/nonexistent/mineclicks.in")).is_err());
    }
}
