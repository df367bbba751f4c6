use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::generation::StatusTone;
use crate::ui::app::App;
use crate::ui::theme;

const SPINNER: [char; 4] = ['|', '/', '-', '\\'];
const PLACEHOLDER: &str = "Your generated animation will appear here.";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    draw_prompt(frame, app, chunks[0]);
    draw_status(frame, app, chunks[1]);
    draw_result(frame, app, chunks[2]);
    draw_footer(frame, app, chunks[3]);
}

fn draw_prompt(frame: &mut Frame<'_>, app: &App, area: ratatui::layout::Rect) {
    let prompt = Paragraph::new(app.prompt())
        .style(Style::default().fg(theme::PROMPT_ACTIVE))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::GLOBAL_BORDER))
                .title(Span::styled(
                    " Describe your animation ",
                    Style::default().fg(theme::HEADER_TEXT),
                )),
        );
    frame.render_widget(prompt, area);

    // Keep the terminal cursor at the end of the input, clamped to the box.
    let inner_width = area.width.saturating_sub(2);
    let cursor_x = area.x + 1 + (app.prompt().len() as u16).min(inner_width.saturating_sub(1));
    frame.set_cursor_position((cursor_x, area.y + 1));
}

fn draw_status(frame: &mut Frame<'_>, app: &App, area: ratatui::layout::Rect) {
    let Some((text, tone)) = app.state().status_line() else {
        return;
    };

    let color = match tone {
        StatusTone::Pending => theme::STATUS_PENDING,
        StatusTone::Success => theme::STATUS_OK,
        StatusTone::Error => theme::STATUS_ERROR,
    };

    let line = if tone == StatusTone::Pending {
        let frame_char = SPINNER[(app.ticks_pending() % SPINNER.len() as u64) as usize];
        Line::from(vec![
            Span::styled(format!("{frame_char} "), Style::default().fg(color)),
            Span::styled(text, Style::default().fg(color)),
        ])
    } else {
        Line::from(Span::styled(text, Style::default().fg(color)))
    };

    frame.render_widget(Paragraph::new(line), area);
}

fn draw_result(frame: &mut Frame<'_>, app: &App, area: ratatui::layout::Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::GLOBAL_BORDER))
        .title(Span::styled(
            " Animation ",
            Style::default().fg(theme::HEADER_TEXT),
        ));

    let body = if let Some(url) = app.state().video_url() {
        Paragraph::new(vec![
            Line::from(Span::styled(
                "Playing in external player:",
                Style::default().fg(theme::HEADER_TEXT),
            )),
            Line::from(Span::styled(
                url.to_string(),
                Style::default().fg(theme::STATUS_OK),
            )),
        ])
        .wrap(Wrap { trim: false })
        .block(block)
    } else {
        Paragraph::new(Span::styled(
            PLACEHOLDER,
            Style::default()
                .fg(theme::PLACEHOLDER_TEXT)
                .add_modifier(Modifier::ITALIC),
        ))
        .block(block)
    };

    frame.render_widget(body, area);
}

fn draw_footer(frame: &mut Frame<'_>, app: &App, area: ratatui::layout::Rect) {
    let hint = if app.state().trigger_enabled() {
        "Enter: generate   Ctrl+U: clear   Esc: quit"
    } else {
        "Waiting for the server...   Esc: quit"
    };

    let footer = Paragraph::new(Span::styled(
        hint,
        Style::default().fg(theme::PLACEHOLDER_TEXT),
    ));
    frame.render_widget(footer, area);
}
