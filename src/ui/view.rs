use crate::app::{AppMode, RenderState};
use crate::caption::presets;
use crate::ui::glyph::{BigCaption, GlyphSource};
use crate::ui::theme::{colors, to_color};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const PLACEHOLDER: &str = "请输入需要显示的文字";

pub fn render(frame: &mut Frame, state: &RenderState, glyphs: Option<&dyn GlyphSource>) {
    match state.mode {
        AppMode::Editing => render_editor(frame, state),
        AppMode::Preview => render_preview(frame, state, glyphs),
        AppMode::Fullscreen => render_fullscreen(frame, state, glyphs),
        AppMode::Quit => {}
    }
}

/// Visible chunk at the current font size, in the preset colors
pub fn render_caption<'a>(
    state: &'a RenderState,
    glyphs: Option<&'a dyn GlyphSource>,
) -> BigCaption<'a> {
    BigCaption {
        text: state.visible_chunk.as_deref().unwrap_or_default(),
        font_size_pt: state.font_size_pt,
        foreground: to_color(state.foreground),
        background: to_color(state.background),
        bold: state.bold,
        glyphs,
    }
}

pub fn render_end_button() -> Paragraph<'static> {
    Paragraph::new("结束  [Enter]")
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(colors::background())
                .bg(colors::button()),
        )
}

pub fn render_text_field(text: &str) -> Paragraph<'static> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::dimmed()));

    let line = if text.is_empty() {
        Line::from(Span::styled(PLACEHOLDER, Style::default().fg(colors::dimmed())))
    } else {
        Line::from(Span::styled(
            text.to_string(),
            Style::default().fg(colors::text()),
        ))
    };

    Paragraph::new(line).block(block)
}

/// One line per preset, drawn in its own colors, with a check mark on the
/// selected one.
pub fn render_preset_list(selected: usize) -> Paragraph<'static> {
    let lines: Vec<Line> = presets()
        .iter()
        .enumerate()
        .map(|(i, preset)| {
            let mark = if i == selected { "[x]" } else { "[ ]" };
            Line::from(vec![
                Span::styled(
                    format!(" F{} {mark} ", i + 1),
                    Style::default().fg(colors::text()),
                ),
                Span::styled(
                    format!(" {} ", preset.label),
                    Style::default()
                        .fg(to_color(preset.foreground))
                        .bg(to_color(preset.background)),
                ),
                Span::styled(
                    format!(" {}", preset.name),
                    Style::default().fg(colors::dimmed()),
                ),
            ])
        })
        .collect();

    Paragraph::new(lines)
}

pub fn render_font_gauge(state: &RenderState) -> Gauge<'static> {
    Gauge::default()
        .gauge_style(Style::default().fg(colors::accent()).bg(colors::dimmed()))
        .ratio(state.font_size_ratio())
        .label(format!("{:.0} pt", state.font_size_pt))
}

pub fn render_hints(mode: AppMode) -> Line<'static> {
    let hints = match mode {
        AppMode::Editing => "Enter 开始 · Ctrl-P 预览 · ↑/↓ F1-F5 配色 · Ctrl-V 粘贴 · Esc 退出",
        AppMode::Preview => "↑/↓ 字号 · Esc 结束预览",
        AppMode::Fullscreen => "任意键 显示结束按钮",
        AppMode::Quit => "",
    };
    Line::from(Span::styled(hints, Style::default().fg(colors::dimmed())))
        .alignment(Alignment::Center)
}

pub fn render_status(status: Option<&str>) -> Line<'static> {
    Line::from(Span::styled(
        status.unwrap_or_default().to_string(),
        Style::default().fg(colors::accent()),
    ))
    .alignment(Alignment::Center)
}

fn render_editor(frame: &mut Frame, state: &RenderState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(colors::background())),
        area,
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(presets().len() as u16 + 1),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    frame.render_widget(render_text_field(&state.text), rows[0]);

    frame.set_cursor_position((cursor_column(rows[0], &state.text), rows[0].y + 1));

    frame.render_widget(render_preset_list(state.preset_index), rows[1]);
    frame.render_widget(render_status(state.status.as_deref()), rows[3]);
    frame.render_widget(render_hints(state.mode), rows[4]);
}

/// Column after the last typed cell, kept inside the field's border.
pub fn cursor_column(field: Rect, text: &str) -> u16 {
    let text_width = u16::try_from(UnicodeWidthStr::width(text)).unwrap_or(u16::MAX);
    let max_x = field.x.saturating_add(field.width.saturating_sub(2));
    field.x.saturating_add(1).saturating_add(text_width).min(max_x)
}

fn render_preview(frame: &mut Frame, state: &RenderState, glyphs: Option<&dyn GlyphSource>) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(to_color(state.background))),
        area,
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    frame.render_widget(render_caption(state, glyphs), rows[0]);
    frame.render_widget(render_font_gauge(state), rows[1]);
    frame.render_widget(render_hints(state.mode), rows[2]);
}

fn render_fullscreen(frame: &mut Frame, state: &RenderState, glyphs: Option<&dyn GlyphSource>) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(to_color(state.background))),
        area,
    );

    // The end button takes the bottom row so a tall caption keeps its size.
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1), Constraint::Length(1)])
        .split(area);
    frame.render_widget(render_caption(state, glyphs), rows[0]);

    if state.overlay_visible {
        let button = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(25),
                Constraint::Percentage(50),
                Constraint::Percentage(25),
            ])
            .split(rows[1])[1];
        frame.render_widget(render_end_button(), button);
    }
}
