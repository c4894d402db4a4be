use std::time::{Duration, Instant};

use crossterm::{event::Event, terminal};
use ratatui::{Frame, layout::Rect};
use tictactoe_engine::RandomAi;

use crate::{
    command::play::screen::PlayScreen,
    tui::{App, Tui},
};

const TICK_RATE: f64 = 10.0;

#[derive(Debug)]
pub struct PlayApp {
    screen: PlayScreen,
}

impl PlayApp {
    pub fn new(ai: RandomAi, ai_delay: Duration) -> Self {
        Self {
            screen: PlayScreen::new(ai, ai_delay),
        }
    }
}

impl App for PlayApp {
    fn init(&mut self, tui: &mut Tui) {
        tui.set_tick_rate(TICK_RATE);
        tui.enable_mouse_capture();
        if let Ok((width, height)) = terminal::size() {
            self.screen.set_area(Rect::new(0, 0, width, height));
        }
    }

    fn should_exit(&self) -> bool {
        self.screen.is_exiting()
    }

    fn handle_event(&mut self, _tui: &mut Tui, event: Event) {
        self.screen.handle_event(&event);
    }

    fn draw(&self, frame: &mut Frame) {
        self.screen.draw(frame);
    }

    fn update(&mut self, _tui: &mut Tui) {
        self.screen.update(Instant::now());
    }
}
