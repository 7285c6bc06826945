//! Main UI layout and rendering
//!
//! Composes the input panel, results panel and alert line into the final layout

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::app::{App, Focus, StatusLevel};

/// Draw the complete UI
pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    let alert_height = if app.form.alert.visible { 3 } else { 0 };

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Header/title
            Constraint::Min(9),               // Body
            Constraint::Length(alert_height), // Alert
            Constraint::Length(3),            // Status/help bar
        ])
        .split(area);

    render_header(frame, main_layout[0]);
    render_body(frame, main_layout[1], app);
    if app.form.alert.visible {
        render_alert(frame, main_layout[2], app);
    }
    render_footer(frame, main_layout[3], app);

    if app.show_help {
        render_help_overlay(frame, area);
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("Tegelcalculator - Offerte")
        .style(Style::default().fg(Color::Cyan).bold())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, area);
}

fn render_body(frame: &mut Frame, area: Rect, app: &App) {
    let body_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Inputs
            Constraint::Percentage(45), // Results
        ])
        .split(area);

    render_inputs(frame, body_layout[0], app);
    render_results(frame, body_layout[1], app);
}

fn focus_style(app: &App, control: Focus) -> Style {
    if app.focus == control {
        Style::default().fg(Color::Yellow).bold()
    } else {
        Style::default().fg(Color::White)
    }
}

fn text_field<'a>(app: &App, control: Focus, label: &'a str, value: &'a str) -> Line<'a> {
    let cursor = if app.focus == control { "_" } else { "" };
    Line::from(vec![
        Span::styled(format!("{:<14}", label), Style::default().bold()),
        Span::styled(format!("[{}{}]", value, cursor), focus_style(app, control)),
    ])
}

fn render_inputs(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Invoer ")
        .title_style(Style::default().fg(Color::Cyan).bold())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = vec![];

    lines.push(text_field(app, Focus::Area, "Oppervlakte", &app.form.area));
    lines.push(Line::from(Span::styled(
        format!("{:<14}m²", ""),
        Style::default().fg(Color::DarkGray),
    )));

    lines.push(Line::from(Span::styled(
        "Tegelgrootte",
        Style::default().bold(),
    )));
    for option in app.form.tile_size.options() {
        let style = if option.selected && app.focus == Focus::TileSize {
            Style::default().fg(Color::Yellow).bold()
        } else if option.selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let prefix = if option.selected { ">" } else { " " };
        lines.push(Line::from(Span::styled(
            format!(" {} {}", prefix, option.label),
            style,
        )));
    }

    lines.push(text_field(app, Focus::Grout, "Voegbreedte", &app.form.grout));
    lines.push(Line::from(""));

    let button_style = if app.focus == Focus::Calculate {
        Style::default().fg(Color::Black).bg(Color::Yellow).bold()
    } else {
        Style::default().fg(Color::Cyan)
    };
    lines.push(Line::from(Span::styled(" [ Bereken ] ", button_style)));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_results(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Resultaat ")
        .title_style(Style::default().fg(Color::Cyan).bold())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = app
        .form
        .output_rows()
        .iter()
        .map(|(label, value)| {
            let value_style = if *label == "Totaalprijs" {
                Style::default().fg(Color::Green).bold()
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(vec![
                Span::styled(format!("{:<13}", label), Style::default().bold()),
                Span::styled(value.to_string(), value_style),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_alert(frame: &mut Frame, area: Rect, app: &App) {
    let alert = Paragraph::new(app.form.alert.text.as_str())
        .style(Style::default().fg(Color::Red).bold())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        );
    frame.render_widget(alert, area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let content = if let Some(ref msg) = app.status_message {
        let style = match msg.level {
            StatusLevel::Error => Style::default().fg(Color::Red),
            StatusLevel::Success => Style::default().fg(Color::Green),
        };
        Paragraph::new(msg.text.as_str())
            .style(style)
            .wrap(Wrap { trim: true })
    } else {
        let help = match app.focus {
            Focus::Area | Focus::Grout => "type value | Backspace: delete | Tab: next | Enter: calculate | F1: help",
            Focus::TileSize => "up/down: choose tile | Tab: next | Enter: calculate | ?: help | q: quit",
            Focus::Calculate => "Space/Enter: calculate | Tab: next | ?: help | q: quit",
        };
        Paragraph::new(help).style(Style::default().fg(Color::DarkGray))
    };

    let block = Block::default().borders(Borders::TOP);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(content.alignment(Alignment::Center), inner);
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_width = 56u16.min(area.width);
    let popup_height = 18u16.min(area.height);
    let popup_x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let help_text = r#"
 Tile Quote - Keyboard

 NAVIGATION
   Tab / Shift+Tab  Next / previous control
   up/down          Choose tile size (selector)

 INPUT
   any key          Type into area or grout field
   Backspace / Del  Delete last char / clear field

 CALCULATE
   Enter            Calculate from any control
   Space            Press the Bereken button

 OTHER
   F1 (? outside fields)  Toggle this help
   Esc / Enter            Close this help
   q (outside fields)     Quit, Ctrl+C always quits
"#;

    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .title(" Help ")
                .title_style(Style::default().fg(Color::Cyan).bold())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .style(Style::default().bg(Color::Black)),
        );

    frame.render_widget(help, popup_area);
}
