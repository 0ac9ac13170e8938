use ratatui::{prelude::*, widgets::Paragraph};
use unicode_width::UnicodeWidthStr;

pub const KEY_HINTS: &str = "←/→ select  ⇧←/⇧→ move  i insert  a add  m menu  q quit";

pub struct StatusBarWidget<'a> {
    message: Option<&'a str>,
    style: Style,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(message: Option<&'a str>, style: Style) -> Self {
        Self { message, style }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let message = self.message.unwrap_or_default();
        let message_width = u16::try_from(message.width()).unwrap_or(u16::MAX);
        let hints_width = u16::try_from(KEY_HINTS.width()).unwrap_or(u16::MAX);
        // Hints yield to the message when both do not fit
        let hints_width = if message_width.saturating_add(hints_width) < area.width {
            hints_width
        } else {
            0
        };
        let [message_area, hints_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(hints_width)]).areas(area);

        Paragraph::new(message)
            .style(self.style)
            .render(message_area, buf);
        Paragraph::new(Line::from(KEY_HINTS.dim()).right_aligned()).render(hints_area, buf);
    }
}
