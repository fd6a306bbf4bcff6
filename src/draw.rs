use log::error;
use tui::backend::Backend;
use tui::layout::{Alignment, Constraint, Layout, Rect};
use tui::style::{Color, Modifier, Style};
use tui::text::{Line, Span};
use tui::widgets::{Block, BorderType, Borders, Paragraph, Tabs};
use tui::{Frame, Terminal};
use tui_logger::TuiLoggerWidget;

use crate::app::{App, MenuItem};
use crate::state::network::{ERROR_CHAR, LoadingState};
use crate::ui::layout::LayoutAreas;
use nfl_api::{Slot, TeamStat, scoreboard, summary};

static TABS: &[&str; 2] = &["Scoreboard", "Game"];

const HELP_TEXT: &str = "Help: q=quit  1=Scoreboard  2=Game  j/k=move  Enter=open game  r=refresh  f=full screen  \"=logs  Esc=back";

pub fn draw<B>(terminal: &mut Terminal<B>, app: &mut App, loading: LoadingState)
where
    B: Backend,
{
    let current_size = terminal.size().unwrap_or_default();
    if current_size.width <= 10 || current_size.height <= 10 {
        return;
    }

    let mut layout = LayoutAreas::new(current_size);

    let result = terminal.draw(|f| {
        layout.update(f.area(), app.settings.full_screen, app.state.show_logs);

        if !app.settings.full_screen {
            draw_tabs(f, layout.tab_bar, app);
        }

        match app.state.active_tab {
            MenuItem::Scoreboard => draw_scoreboard(f, layout.main, app, loading),
            MenuItem::Game => draw_game(f, layout.main, app, loading),
            MenuItem::Help => draw_placeholder(f, layout.main, HELP_TEXT),
        }

        if let Some(logs) = layout.logs {
            draw_logs(f, logs);
        }

        draw_loading_spinner(f, f.area(), app, loading);
    });

    if let Err(e) = result {
        error!("draw failed: {e}");
    }
}

pub fn default_border<'a>(color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
}

fn draw_tabs(f: &mut Frame, tab_bar: [Rect; 2], app: &App) {
    let style = Style::default().fg(Color::White);
    let border_type = BorderType::Rounded;

    let tab_index = match app.state.active_tab {
        MenuItem::Scoreboard => 0,
        MenuItem::Game => 1,
        MenuItem::Help => 0,
    };

    let titles: Vec<Line> = TABS.iter().map(|t| Line::from(*t)).collect();
    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::BOTTOM | Borders::TOP)
                .border_type(border_type),
        )
        .highlight_style(Style::default().add_modifier(Modifier::UNDERLINED))
        .select(tab_index)
        .style(style);
    f.render_widget(tabs, tab_bar[0]);

    let help = Paragraph::new("Help: ? ")
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::RIGHT | Borders::BOTTOM | Borders::TOP)
                .border_type(border_type),
        )
        .style(style);
    f.render_widget(help, tab_bar[1]);
}

/// Message shown in place of a slot that holds no document.
fn absent_message(what: &str, loading: LoadingState) -> String {
    if loading.is_loading {
        format!("Loading {what}...")
    } else {
        format!("No {what} data available. Press r to retry.")
    }
}

fn draw_scoreboard(f: &mut Frame, area: Rect, app: &App, loading: LoadingState) {
    let block = default_border(Color::White).title(format!(" Scoreboard {} ", app.settings.date));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let store = &app.state.store;
    if !store.is_present(Slot::Scoreboard) {
        f.render_widget(
            Paragraph::new(absent_message("scoreboard", loading))
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center),
            inner,
        );
        return;
    }

    let board = store.scoreboard();
    let matchups = scoreboard::matchups(&board);
    if matchups.is_empty() {
        f.render_widget(Paragraph::new("No games on this date"), inner);
        return;
    }
    let scores = scoreboard::scores(&board);
    let states = scoreboard::states(&board);
    let kickoffs = scoreboard::kickoff_times(&board);

    let [key_legend, content] =
        Layout::vertical([Constraint::Length(2), Constraint::Fill(1)]).areas(inner);
    f.render_widget(
        Paragraph::new("j/k to move, Enter for game detail, r to refresh")
            .style(Style::default().fg(Color::DarkGray)),
        key_legend,
    );

    let lines: Vec<Line> = matchups
        .iter()
        .zip(&scores)
        .zip(states.iter().zip(&kickoffs))
        .enumerate()
        .map(|(idx, ((matchup, score), (state, kickoff)))| {
            let selected = idx == app.state.scoreboard.selected_event;
            let marker = if selected { ">" } else { " " };
            let style = if selected {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(format!("{marker} {matchup:<24}"), style),
                Span::raw(format!("{score:>9}  ")),
                Span::styled(format!("{:<5}", state_label(state)), state_style(state)),
                Span::styled(format!(" {kickoff}"), Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines), content);
}

fn state_label(state: &str) -> &str {
    match state {
        "pre" => "PRE",
        "in" => "LIVE",
        "post" => "FINAL",
        other => other,
    }
}

fn state_style(state: &str) -> Style {
    match state {
        "in" => Style::default().fg(Color::Green),
        "post" => Style::default().fg(Color::Gray),
        _ => Style::default().fg(Color::DarkGray),
    }
}

fn draw_game(f: &mut Frame, area: Rect, app: &App, loading: LoadingState) {
    let title = match app.state.game.event_id.as_deref() {
        Some(id) => format!(" Game {id} "),
        None => " Game ".to_string(),
    };
    let block = default_border(Color::White).title(title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let store = &app.state.store;
    if app.state.game.event_id.is_none() {
        f.render_widget(
            Paragraph::new("Select a game on the Scoreboard and press Enter"),
            inner,
        );
        return;
    }
    if !store.is_present(Slot::Summary) {
        f.render_widget(
            Paragraph::new(absent_message("game summary", loading))
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center),
            inner,
        );
        return;
    }

    let doc = store.summary();
    let heading = Style::default().add_modifier(Modifier::BOLD);
    let mut lines: Vec<Line> = Vec::new();

    let status = summary::status(&doc);
    lines.push(Line::from(vec![
        Span::styled(summary::quarter(&doc), heading),
        Span::raw(format!("  {}  ", summary::clock(&doc))),
        Span::styled(state_label(&status).to_string(), state_style(&status)),
    ]));
    let red_zone = summary::red_zone_status(&doc);
    if !red_zone.is_empty() {
        lines.push(Line::styled(red_zone, Style::default().fg(Color::Red)));
    }
    lines.push(Line::default());

    lines.push(Line::styled("Team Stats", heading));
    for stat in TeamStat::ALL {
        let values = summary::team_stat(&doc, stat);
        lines.push(Line::raw(format!("  {:<14} {}", stat.label(), values.join("   "))));
    }
    lines.push(Line::default());

    lines.push(Line::styled("Game Info", heading));
    for text in [summary::venue(&doc), summary::attendance(&doc), summary::weather(&doc)] {
        if !text.is_empty() {
            lines.push(Line::raw(format!("  {text}")));
        }
    }
    let officials = summary::officials(&doc);
    if !officials.is_empty() {
        lines.push(Line::raw(format!("  Officials: {}", officials.join(", "))));
    }
    lines.push(Line::default());

    lines.push(Line::styled("Scoring Plays (j/k scroll)", heading));
    let max_lines = inner.height.saturating_sub(lines.len() as u16) as usize;
    let offset = app.state.game.scroll_offset as usize;
    for play in summary::scoring_plays(&doc).into_iter().skip(offset).take(max_lines.max(1)) {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<12}", play.quarter), Style::default().fg(Color::DarkGray)),
            Span::raw(format!("{:>5}  {}", play.clock, play.description)),
        ]));
    }

    f.render_widget(Paragraph::new(lines), inner);
}

fn draw_logs(f: &mut Frame, area: Rect) {
    let logs = TuiLoggerWidget::default()
        .block(default_border(Color::DarkGray).title(" Logs "))
        .style_error(Style::default().fg(Color::Red))
        .style_warn(Style::default().fg(Color::Yellow))
        .style_debug(Style::default().fg(Color::DarkGray));
    f.render_widget(logs, area);
}

fn draw_placeholder(f: &mut Frame, area: Rect, msg: &str) {
    let block = default_border(Color::DarkGray);
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(
        Paragraph::new(msg)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        inner,
    );
}

fn draw_loading_spinner(f: &mut Frame, area: Rect, app: &App, loading: LoadingState) {
    if !loading.is_loading && loading.spinner_char != ERROR_CHAR {
        return;
    }
    let style = match loading.spinner_char {
        ERROR_CHAR => Style::default().fg(Color::Red),
        _ => Style::default().fg(Color::White),
    };
    let spinner = Paragraph::new(loading.spinner_char.to_string())
        .alignment(Alignment::Right)
        .style(style);
    let area = if app.settings.full_screen {
        Rect::new(area.width.saturating_sub(3), area.height.saturating_sub(2), 1, 1)
    } else {
        Rect::new(area.width.saturating_sub(11), 1, 1, 1)
    };
    f.render_widget(spinner, area);
}
