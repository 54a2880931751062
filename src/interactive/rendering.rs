//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use crate::output::formatters::{correct_mask, percent_bar, position_list};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Tabs, Wrap},
};

/// Letters listed in the distribution panel
const TOP_LETTERS: usize = 12;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Tabs
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_tabs(f, app, chunks[1]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[2]);

    render_ranking(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[3]);
    render_status(f, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔎 WORD SIEVE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = app
        .sessions
        .tabs()
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!("{} {} ({})", i + 1, tab.name, tab.constraints.size())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.sessions.active_index())
        .block(Block::default().borders(Borders::ALL).title(" Tabs "))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, area);
}

fn render_ranking(f: &mut Frame, app: &App, area: Rect) {
    let ranking = &app.ranking;
    let page = ranking.page(app.offset, app.page_size);

    let items: Vec<ListItem> = if page.is_empty() {
        vec![ListItem::new("No words match").style(Style::default().fg(Color::Red))]
    } else {
        page.iter()
            .enumerate()
            .map(|(i, entry)| {
                let mut spans = vec![
                    Span::styled(
                        format!("{:4}. ", app.offset + i + 1),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(
                        entry.word.to_string(),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  {:6.1}", entry.score),
                        Style::default().fg(Color::Yellow),
                    ),
                ];
                if entry.frequency > 0.0 {
                    spans.push(Span::styled(
                        format!("  {:.2}", entry.frequency),
                        Style::default().fg(Color::Cyan),
                    ));
                }
                ListItem::new(Line::from(spans))
            })
            .collect()
    };

    let last = (app.offset + page.len()).min(ranking.len());
    let title = format!(
        " Candidates {}-{} of {} | {} ",
        if page.is_empty() { 0 } else { app.offset + 1 },
        last,
        ranking.len(),
        app.strategy.name()
    );

    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Constraints
            Constraint::Min(5),    // Letters
            Constraint::Length(7), // Messages
        ])
        .split(area);

    render_constraints(f, app, chunks[0]);
    render_letters(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_constraints(f: &mut Frame, app: &App, area: Rect) {
    let constraints = &app.sessions.active().constraints;

    let includes = constraints
        .includes()
        .iter()
        .map(|(letter, positions)| {
            if positions.is_empty() {
                letter.to_string()
            } else {
                format!("{letter} not {}", position_list(positions))
            }
        })
        .collect::<Vec<_>>()
        .join(", ");
    let excludes: String = constraints.excludes().iter().collect();
    let using = constraints.using().map_or_else(String::new, |quota| {
        format!(
            "{} of {}",
            quota.min_matches,
            quota.letters.iter().collect::<String>()
        )
    });

    let content = vec![
        Line::from(vec![
            Span::raw("Known:    "),
            Span::styled(
                correct_mask(constraints),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("Present:  "),
            Span::styled(includes, Style::default().fg(Color::Yellow)),
        ]),
        Line::from(vec![
            Span::raw("Absent:   "),
            Span::styled(excludes, Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::raw("Using:    "),
            Span::styled(using, Style::default().fg(Color::Cyan)),
        ]),
    ];

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(format!(" Constraints ({} letters) ", constraints.size()))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_letters(f: &mut Frame, app: &App, area: Rect) {
    let distribution = &app.ranking.distribution;
    let lines: Vec<Line> = distribution
        .ranked()
        .into_iter()
        .take(TOP_LETTERS)
        .map(|(letter, percent)| {
            Line::from(vec![
                Span::styled(
                    format!("{letter} "),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(percent_bar(percent, 20), Style::default().fg(Color::Cyan)),
                Span::raw(format!(" {percent:5.1}%")),
            ])
        })
        .collect();

    let title = if app.ranking.used_baseline {
        " Letters (scored on baseline) "
    } else {
        " Letters "
    };
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let input = Paragraph::new(app.input_buffer.as_str())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(" Hint (c/i/x/s/f/u/clear/size, ';' joins) | Enter: apply | Esc: clear ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, area: Rect) {
    let help = Paragraph::new(
        "Tab/S-Tab: switch | ^T new | ^D dup | ^W close | Alt+1-9: go | ^S sort | PgUp/PgDn | ^Q quit",
    )
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
