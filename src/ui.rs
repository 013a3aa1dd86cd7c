use crate::action::Action::*;
use crate::cell_content::CellContent::*;
use crate::replay::Replay;
use crate::visibility::Visibility::*;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Position, Rect};
use ratatui::style::Color;
use ratatui::style::Color::*;
use ratatui::{
    DefaultTerminal, Frame,
    style::Stylize,
    text::Line,
    widgets::{Block, Paragraph},
};

pub fn main(replay: Replay) -> Result<()> {
    let terminal = ratatui::init();
    let result = App::new(replay).run(terminal);
    ratatui::restore();
    result
}

/// Terminal viewer replaying the solver's clicks.
#[derive(Debug)]
pub struct App {
    running: bool,
    replay: Replay,
}

impl App {
    pub fn new(replay: Replay) -> Self {
        Self {
            running: false,
            replay,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        self.running = true;
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
            self.replay.update();
        }
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        let board = self.replay.board();
        let answer = self.replay.answer();
        let size = board.size();
        let clicks = answer.clicks.len();
        let step = self.replay.step();

        let mut heading = format!("Case #{}/{}", answer.case, self.replay.case_count());
        let mut stats = format!("click {step}/{clicks}");
        if heading.len() as u16 > size {
            heading = format!("#{}", answer.case);
        }
        if stats.len() as u16 > size {
            stats = format!("{step}/{clicks}");
        }

        let title = Line::from(heading).bold().light_blue().centered();
        let bottom = if board.is_solved() {
            Line::from(stats).bold().light_green().centered()
        } else {
            Line::from(stats).centered()
        };

        let area = frame
            .area()
            .clamp(Rect::new(0, 0, size.saturating_add(2), size.saturating_add(2)));

        frame.render_widget(
            Paragraph::new("")
                .block(Block::bordered().title(title).title_bottom(bottom))
                .centered(),
            area,
        );

        if area.height < 2 || area.width < 2 {
            return;
        }

        for j in area.y + 1..area.y + area.height - 1 {
            for i in area.x + 1..area.x + area.width - 1 {
                let Some(cell) = board.get((j - area.y - 1, i - area.x - 1)) else {
                    continue;
                };

                const NUM_COLOR: Color = Black;

                let (char, bg, fg) = match (cell.content, cell.visibility) {
                    (Mine, _) => ('*', Black, LightRed),
                    (Empty(_), Hidden) => ('#', Reset, Reset),
                    (Empty(n), Show) => match n {
                        0 => (' ', Black, Reset),
                        1 => ('1', LightBlue, NUM_COLOR),
                        2 => ('2', LightCyan, NUM_COLOR),
                        3 => ('3', LightGreen, NUM_COLOR),
                        4 => ('4', LightYellow, NUM_COLOR),
                        5 => ('5', LightMagenta, NUM_COLOR),
                        6 => ('6', Gray, NUM_COLOR),
                        7 => ('7', White, NUM_COLOR),
                        8.. => ('8', LightRed, NUM_COLOR),
                    },
                };

                if let Some(c) = frame.buffer_mut().cell_mut((i, j)) {
                    c.set_char(char).set_fg(fg).set_bg(bg);
                }
            }
        }

        if let Some((row, col)) = self.replay.last_click() {
            let position = Position {
                x: area.x + 1 + col,
                y: area.y + 1 + row,
            };
            if area.contains(position) {
                frame.set_cursor_position(position);
            }
        }
    }

    fn handle_crossterm_events(&mut self) -> Result<()> {
        match event::read()? {
            // it's important to check KeyEventKind::Press to avoid handling key release events
            Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
            _ => {}
        }
        Ok(())
    }

    fn on_key_event(&mut self, key: KeyEvent) {
        let action = match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => {
                self.quit();
                return;
            }
            (_, KeyCode::Right | KeyCode::Char(' ')) => NextClick,
            (_, KeyCode::Left) => PreviousClick,
            (_, KeyCode::Home | KeyCode::Char('r')) => FirstClick,
            (_, KeyCode::End) => LastClick,
            (_, KeyCode::Char('n') | KeyCode::Down) => NextCase,
            (_, KeyCode::Char('p') | KeyCode::Up) => PreviousCase,
            _ => return,
        };
        self.replay.action = Some(action);
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
