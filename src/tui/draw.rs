use ratatui::{
    backend::TestBackend,
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap,
    },
    Frame, Terminal,
};

use crate::tui::state::App;

// ── Drawing ───────────────────────────────────────────────────────────────────

pub fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    // Background
    f.render_widget(
        Block::default().style(Style::default().bg(Color::Rgb(15, 15, 25))),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // header
            Constraint::Min(0),    // conversation
            Constraint::Length(3), // draft input
            Constraint::Length(1), // footer
        ])
        .split(area);

    draw_header(f, chunks[0], app);
    draw_conversation(f, chunks[1], app);
    draw_input(f, chunks[2], app);
    draw_footer(f, chunks[3], app);
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let title = Line::from(vec![
        Span::styled(" chatpad", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::styled("  v", Style::default().fg(Color::DarkGray)),
        Span::styled(env!("CARGO_PKG_VERSION"), Style::default().fg(Color::DarkGray)),
        Span::styled(
            if app.echo { "   echo on" } else { "" },
            Style::default().fg(Color::Green),
        ),
    ]);
    let header = Paragraph::new(title)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::Rgb(50, 50, 80))),
        )
        .alignment(Alignment::Left);
    f.render_widget(header, area);
}

fn draw_footer(f: &mut Frame, area: Rect, app: &App) {
    let hint = if app.status.is_empty() {
        format!(" Enter Send   End Follow   Esc Quit   {} messages ", app.store.len())
    } else {
        format!(" {} ", app.status)
    };
    let footer = Paragraph::new(hint)
        .style(Style::default().fg(Color::DarkGray).bg(Color::Rgb(15, 15, 25)))
        .alignment(Alignment::Center);
    f.render_widget(footer, area);
}

fn draw_conversation(f: &mut Frame, area: Rect, app: &mut App) {
    // Pure projection of the log: timestamp column plus message text, with
    // continuation lines indented under their timestamp.
    let mut conv_lines: Vec<Line> = Vec::new();
    for msg in app.store.messages() {
        let mut first = true;
        for text_line in msg.text.lines() {
            if first {
                conv_lines.push(Line::from(vec![
                    Span::styled(
                        format!(" {} ", msg.timestamp),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(text_line.to_string(), Style::default().fg(Color::White)),
                ]));
                first = false;
            } else {
                // Indent matches the " HH:MM:SS " prefix width.
                conv_lines.push(Line::from(Span::styled(
                    format!("          {text_line}"),
                    Style::default().fg(Color::White),
                )));
            }
        }
    }

    // Scroll logic: auto-follow pins to the bottom; manual scrolling
    // overrides until the next append or an explicit End keypress.
    let conv_area_height = area.height.saturating_sub(2) as usize; // borders
    let conv_inner_width = area.width.saturating_sub(3) as usize; // borders + scrollbar
    // Wrap-aware row count: a line wider than the inner width occupies
    // ceil(width / inner_width) rendered rows.
    let total_lines: usize = conv_lines
        .iter()
        .map(|line| {
            let text_width: usize = line.spans.iter().map(|s| s.content.chars().count()).sum();
            if conv_inner_width == 0 || text_width == 0 {
                1
            } else {
                text_width.div_ceil(conv_inner_width)
            }
        })
        .sum::<usize>()
        .max(1);
    let max_scroll = if total_lines > conv_area_height {
        (total_lines - conv_area_height) as u16
    } else {
        0
    };
    let effective_scroll = if app.chat_scroll_manual {
        app.chat_scroll.min(max_scroll)
    } else {
        max_scroll
    };

    let conv_title = if app.chat_scroll_manual {
        " Conversation  [scrolled — End to resume follow] "
    } else {
        " Conversation "
    };
    let conv = Paragraph::new(conv_lines)
        .block(
            Block::default()
                .title(conv_title)
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Rgb(50, 50, 80))),
        )
        .wrap(Wrap { trim: false })
        .scroll((effective_scroll, 0));
    // Published geometry: the mount marker the scroll-to-end guard checks.
    app.conv_rect = Some(area);
    app.conv_max_scroll = max_scroll;
    if !app.chat_scroll_manual {
        app.chat_scroll = max_scroll;
    }
    f.render_widget(conv, area);

    if total_lines > conv_area_height {
        let mut scrollbar_state =
            ScrollbarState::new(max_scroll as usize).position(effective_scroll as usize);
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("▲"))
            .end_symbol(Some("▼"))
            .track_symbol(Some("│"))
            .thumb_symbol("█");
        f.render_stateful_widget(scrollbar, area, &mut scrollbar_state);
    }
}

fn draw_input(f: &mut Frame, area: Rect, app: &App) {
    let (before, cursor_ch, after) = app.input.draft.split_at_cursor();
    let input_line = Line::from(vec![
        Span::styled(before.to_string(), Style::default().fg(Color::White)),
        Span::styled(
            cursor_ch.to_string(),
            Style::default().add_modifier(Modifier::REVERSED),
        ),
        Span::styled(after.to_string(), Style::default().fg(Color::White)),
    ]);
    let input_widget = Paragraph::new(input_line).block(
        Block::default()
            .title(" Message ")
            .title_style(Style::default().fg(Color::Yellow))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(input_widget, area);
}

// ── Test helpers ──────────────────────────────────────────────────────────────

/// Render the current app state into an in-memory buffer using `TestBackend`.
/// Useful for unit tests that need to assert on rendered output without a
/// real terminal.
pub fn render_to_buffer(app: &mut App, width: u16, height: u16) -> Buffer {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("TestBackend terminal");
    terminal.draw(|f| draw(f, app)).expect("draw");
    terminal.backend().buffer().clone()
}
