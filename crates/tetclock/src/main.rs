use std::time::Instant;

use chrono::Local;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{info, warn};
use ratatui::{DefaultTerminal, Frame};
use tetclock_config::Config;
use tetclock_core::{Rgba, Viewport};
use tetclock_fonts::Font;
use tetclock_render::{
    Cadence, CanvasView, PixelCanvas, Rasterizer, TEXT_INSET, TetrisClock,
};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let config = Config::load().unwrap_or_else(|err| {
        warn!("using default configuration: {err:#}");
        Config::default()
    });

    let terminal = ratatui::init();
    let result = App::new(&config).run(terminal);
    ratatui::restore();
    result
}

/// The main application which owns the clock, its canvas and both timers.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Falling-block clock state.
    clock: TetrisClock,
    /// Surface the clock draws on every frame.
    canvas: PixelCanvas,
    /// Color behind the blocks.
    background: Rgba,
    /// Coarse timer checking for a minute rollover.
    tick: Cadence,
    /// Per-frame timer driving the animation.
    frame: Cadence,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: &Config) -> Self {
        let rasterizer = Rasterizer::new(Font::default(), config.palette_colors(), TEXT_INSET);
        let now = Instant::now();
        Self {
            running: false,
            clock: TetrisClock::new(rasterizer, Viewport::default())
                .with_outline(config.outline_color()),
            canvas: PixelCanvas::new(0, 0),
            background: config.background_color(),
            tick: Cadence::new(config.tick_period(), now),
            frame: Cadence::new(config.frame_period(), now),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        let size = terminal.size()?;
        self.resize(size.width, size.height);

        self.running = true;
        while self.running {
            let now = Instant::now();
            if self.tick.is_due(now) {
                self.clock.tick(&Local::now());
            }
            if self.frame.is_due(now) {
                self.clock.step(&mut self.canvas);
                terminal.draw(|frame| self.render(frame))?;
            }
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Renders the canvas to the terminal.
    fn render(&self, frame: &mut Frame) {
        let view = CanvasView::new(&self.canvas).background(self.background);
        frame.render_widget(view, frame.area());
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Waits no longer than the nearest timer deadline.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        let now = Instant::now();
        let timeout = self.tick.remaining(now).min(self.frame.remaining(now));
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Resize(cols, rows) => self.resize(cols, rows),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            _ => {}
        }
    }

    /// Match the canvas to the terminal and rebuild the blocks for the current time.
    fn resize(&mut self, cols: u16, rows: u16) {
        let viewport = Viewport::from_terminal(cols, rows);
        info!("terminal is {cols}x{rows} cells");
        self.canvas.resize(viewport.width, viewport.height);
        self.clock.on_resize(viewport, &Local::now());
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tetclock_core::Surface;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    fn running_app() -> App {
        let mut app = App::new(&Config::default());
        app.running = true;
        app
    }

    #[test]
    fn test_quit_keys() {
        for event in [
            key(KeyCode::Char('q'), KeyModifiers::NONE),
            key(KeyCode::Esc, KeyModifiers::NONE),
            key(KeyCode::Char('c'), KeyModifiers::CONTROL),
        ] {
            let mut app = running_app();
            app.on_key_event(event);
            assert!(!app.running);
        }
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut app = running_app();
        app.on_key_event(key(KeyCode::Char('c'), KeyModifiers::NONE));
        app.on_key_event(key(KeyCode::Char('t'), KeyModifiers::NONE));
        assert!(app.running);
    }

    #[test]
    fn test_resize_rebuilds_canvas_and_blocks() {
        let mut app = running_app();
        app.resize(200, 60);

        assert_eq!(app.clock.viewport(), Viewport::new(800, 480));
        assert_eq!((app.canvas.width(), app.canvas.height()), (800, 480));
        assert!(!app.clock.active().is_empty());
        assert_eq!(app.clock.generation(), 1);

        app.resize(201, 60);
        assert_eq!(app.clock.generation(), 2);
    }
}
