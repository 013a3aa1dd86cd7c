use crate::action::Action;
use crate::action::Action::*;
use crate::grid::Grid;
use crate::output::Answer;
use crate::util::Cursor;
use log::debug;

/// Steps through the clicks of solved cases on a board that starts hidden.
#[derive(Debug)]
pub struct Replay {
    answers: Vec<Answer>,
    /// index into `answers`
    case: usize,
    /// clicks applied to `board`
    step: usize,
    board: Grid,
    pub action: Option<Action>,
}

impl Replay {
    /// `None` when there is nothing to replay.
    pub fn new(answers: Vec<Answer>) -> Option<Self> {
        let board = hidden(&answers.first()?.board);
        Some(Self {
            answers,
            case: 0,
            step: 0,
            board,
            action: None,
        })
    }

    pub fn board(&self) -> &Grid {
        &self.board
    }

    pub fn answer(&self) -> &Answer {
        &self.answers[self.case]
    }

    pub fn case_count(&self) -> usize {
        self.answers.len()
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn last_click(&self) -> Option<Cursor> {
        self.step
            .checked_sub(1)
            .map(|i| self.answer().clicks[i])
    }

    pub fn update(&mut self) {
        let Some(action) = self.action.take() else {
            return;
        };
        let clicks = self.answer().clicks.len();
        match action {
            NextClick => self.seek(self.step + 1),
            PreviousClick => self.seek(self.step.saturating_sub(1)),
            FirstClick => self.seek(0),
            LastClick => self.seek(clicks),
            NextCase => self.select_case((self.case + 1) % self.answers.len()),
            PreviousCase => {
                let n = self.answers.len();
                self.select_case((self.case + n - 1) % n)
            }
        }
    }

    fn select_case(&mut self, case: usize) {
        self.case = case;
        self.step = 0;
        self.board = hidden(&self.answer().board);
        debug!("viewing case #{}", self.answer().case);
    }

    /// Clicks only go forward, so stepping back replays from a hidden board.
    fn seek(&mut self, step: usize) {
        let step = step.min(self.answer().clicks.len());
        if step < self.step {
            self.board = hidden(&self.answer().board);
            self.step = 0;
        }
        while self.step < step {
            let cursor = self.answers[self.case].clicks[self.step];
            let revealed = self.board.click(cursor);
            debug!("click {} at {cursor:?} uncovered {revealed}", self.step + 1);
            self.step += 1;
        }
    }
}

fn hidden(board: &Grid) -> Grid {
    let mut board = board.clone();
    board.hide_all();
    board
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::parse_cases;
    use crate::output::solve_all;

    fn replay(text: &str) -> Replay {
        Replay::new(solve_all(parse_cases(text).unwrap())).unwrap()
    }

    fn act(replay: &mut Replay, action: Action) {
        replay.action = Some(action);
        replay.update();
    }

    #[test]
    fn nothing_to_replay() {
        assert!(Replay::new(Vec::new()).is_none());
    }

    #[test_log::test]
    fn steps_forward_and_back() {
        let mut replay = replay("1\n3\n..*\n..*\n**.\n");
        assert_eq!(replay.board().to_string(), "##*\n##*\n**#\n");
        assert_eq!(replay.last_click(), None);

        act(&mut replay, NextClick);
        assert_eq!(replay.step(), 1);
        assert_eq!(replay.last_click(), Some((0, 0)));
        assert_eq!(replay.board().to_string(), ".2*\n24*\n**#\n");

        act(&mut replay, NextClick);
        act(&mut replay, NextClick);
        assert_eq!(replay.step(), 2);
        assert!(replay.board().is_solved());

        act(&mut replay, PreviousClick);
        assert_eq!(replay.step(), 1);
        assert!(!replay.board().is_solved());

        act(&mut replay, LastClick);
        assert!(replay.board().is_solved());
        act(&mut replay, FirstClick);
        assert_eq!(replay.step(), 0);
        assert_eq!(replay.board().to_string(), "##*\n##*\n**#\n");
    }

    #[test]
    fn cases_wrap_around() {
        let mut replay = replay("2\n1\n.\n2\n**\n**\n");
        assert_eq!(replay.case_count(), 2);
        act(&mut replay, NextClick);
        assert_eq!(replay.step(), 1);

        act(&mut replay, NextCase);
        assert_eq!(replay.answer().case, 2);
        assert_eq!(replay.step(), 0);
        act(&mut replay, NextClick);
        assert_eq!(replay.step(), 0);

        act(&mut replay, NextCase);
        assert_eq!(replay.answer().case, 1);
        act(&mut replay, PreviousCase);
        assert_eq!(replay.answer().case, 2);
    }

    #[test]
    fn update_without_action_is_noop() {
        let mut replay = replay("1\n2\n..\n..\n");
        replay.update();
        assert_eq!(replay.step(), 0);
        assert!(replay.action.is_none());
    }
}
