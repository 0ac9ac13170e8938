use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;

use color_eyre::eyre::Result;
use futures::future;
use ratatui::backend::TestBackend;
use ratatui::prelude::*;

use crate::infrastructure::tui::{Event, Frame, TuiLike};

/// Scripted terminal backed by `TestBackend`
/// - enter/exit/suspend/resume only count calls (no raw mode).
/// - next() pops the event queue and yields `None` once it is empty.
/// - draw() renders into the backend buffer and counts frames.
pub struct TestTui {
    term: Terminal<TestBackend>,
    events: VecDeque<Event>,
    draws: usize,
    suspends: usize,
    entered: bool,
}

impl TestTui {
    pub fn new(width: u16, height: u16) -> Result<Self> {
        let backend = TestBackend::new(width, height);
        let term = Terminal::new(backend)?;
        Ok(Self {
            term,
            events: VecDeque::new(),
            draws: 0,
            suspends: 0,
            entered: false,
        })
    }

    pub fn with_events(
        width: u16,
        height: u16,
        events: impl IntoIterator<Item = Event>,
    ) -> Result<Self> {
        let mut this = Self::new(width, height)?;
        this.events.extend(events);
        Ok(this)
    }

    pub fn draw_count(&self) -> usize {
        self.draws
    }

    pub fn suspend_count(&self) -> usize {
        self.suspends
    }

    pub fn is_entered(&self) -> bool {
        self.entered
    }

    pub fn enqueue_event(&mut self, ev: Event) {
        self.events.push_back(ev);
    }

    /// Last rendered frame
    pub fn buffer(&self) -> &Buffer {
        self.term.backend().buffer()
    }

    /// One rendered row as plain text
    pub fn row(&self, y: u16) -> String {
        let buffer = self.buffer();
        (0..buffer.area.width)
            .filter_map(|x| buffer.cell((x, y)).map(|cell| cell.symbol().to_string()))
            .collect()
    }
}

impl TuiLike for TestTui {
    fn enter(&mut self) -> Result<()> {
        self.entered = true;
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        self.entered = false;
        Ok(())
    }

    fn suspend(&mut self) -> Result<()> {
        self.suspends += 1;
        self.exit()
    }

    fn resume(&mut self) -> Result<()> {
        self.enter()
    }

    fn size(&self) -> Result<Rect> {
        let area = self.buffer().area;
        Ok(Rect::new(0, 0, area.width, area.height))
    }

    fn draw(&mut self, f: &mut dyn FnMut(&mut Frame<'_>)) -> Result<()> {
        self.term.draw(|frame| f(frame))?;
        self.draws += 1;
        Ok(())
    }

    fn resize(&mut self, area: Rect) -> Result<()> {
        self.term.backend_mut().resize(area.width, area.height);
        self.term.resize(area)?;
        Ok(())
    }

    fn next(&mut self) -> Pin<Box<dyn Future<Output = Option<Event>> + Send + '_>> {
        let ev = self.events.pop_front();
        Box::pin(future::ready(ev))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn test_events_drain_in_order() -> Result<()> {
        let mut tui = TestTui::with_events(10, 3, [Event::Init, Event::Tick])?;
        assert_eq!(tui.next().await, Some(Event::Init));
        tui.enqueue_event(Event::Quit);
        assert_eq!(tui.next().await, Some(Event::Tick));
        assert_eq!(tui.next().await, Some(Event::Quit));
        assert_eq!(tui.next().await, None);
        Ok(())
    }

    #[test]
    fn test_resize_changes_size() -> Result<()> {
        let mut tui = TestTui::new(10, 3)?;
        assert_eq!(tui.size()?, Rect::new(0, 0, 10, 3));
        tui.resize(Rect::new(0, 0, 40, 12))?;
        assert_eq!(tui.size()?, Rect::new(0, 0, 40, 12));
        Ok(())
    }

    #[test]
    fn test_draw_counts_frames() -> Result<()> {
        let mut tui = TestTui::new(5, 1)?;
        tui.draw(&mut |frame| {
            frame.render_widget(Line::raw("hello"), frame.area());
        })?;
        assert_eq!(tui.draw_count(), 1);
        assert_eq!(tui.row(0), "hello");
        Ok(())
    }
}
