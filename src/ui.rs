//! The UI renders the viewer session into something visible.
//!
//! The screen is a header banner, a navigation tree on the left (sections, with the active
//! section's subsections drawn beneath it using box-drawing characters), the content pane on the
//! right, and the related links and help bar along the bottom.

use crate::app_state::{AppState, Focus};
use crate::branding::Banner;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Renders the whole screen for the current session state.
pub fn draw(f: &mut Frame, app: &AppState) {
    let header_height = u16::try_from(app.banner.height()).unwrap_or(1).saturating_add(2);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height), // Banner
            Constraint::Min(0),                // Navigation and content
            Constraint::Length(3),             // Related links
            Constraint::Length(3),             // Help
        ])
        .split(f.area());

    draw_header(f, app, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(rows[1]);

    draw_navigation(f, app, columns[0]);
    draw_content(f, app, columns[1]);
    draw_links(f, app, rows[2]);
    draw_help(f, app, rows[3]);
}

/// Generate box-drawing prefix for a subsection row
fn get_tree_prefix(is_last: bool) -> &'static str {
    if is_last {
        "    └── "
    } else {
        "    ├── "
    }
}

fn focused_block(title: String, focused: bool) -> Block<'static> {
    let block = Block::default().borders(Borders::ALL).title(title);
    if focused {
        block.border_style(Style::default().fg(Color::Yellow))
    } else {
        block
    }
}

fn draw_header(f: &mut Frame, app: &AppState, area: Rect) {
    let lines: Vec<Line> = match &app.banner {
        Banner::Logo(rows) => rows.iter().map(|row| Line::raw(row.clone())).collect(),
        Banner::Label(label) => vec![Line::styled(
            label.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )],
    };
    let locale = app.selection.locale();
    let title = format!("{} ({})", locale.native_name(), locale.code());
    let header = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(header, area);
}

fn draw_navigation(f: &mut Frame, app: &AppState, area: Rect) {
    let locale = app.selection.locale();
    let mut items = Vec::new();

    for section in app.taxonomy.sections() {
        let active = section.id() == app.selection.section();
        let style = match (active, app.focus) {
            (true, Focus::Sections) => Style::default()
                .add_modifier(Modifier::REVERSED)
                .add_modifier(Modifier::BOLD),
            (true, _) => Style::default().add_modifier(Modifier::BOLD),
            (false, _) => Style::default(),
        };
        let marker = if active { "▾ " } else { "▸ " };
        let row = Line::from(vec![
            Span::raw(marker),
            Span::raw(section.title(locale).to_string()),
        ]);
        items.push(ListItem::new(row).style(style));

        if !active {
            continue;
        }

        let titles = section.subsection_titles(locale);
        for (index, title) in titles.iter().enumerate() {
            let is_current = index == app.selection.subsection();
            let style = match (is_current, app.focus) {
                (true, Focus::Subsections) => Style::default().add_modifier(Modifier::REVERSED),
                (true, _) => Style::default().fg(Color::Cyan),
                (false, _) => Style::default().fg(Color::DarkGray),
            };
            items.push(ListItem::new(Line::from(vec![
                Span::raw(get_tree_prefix(index + 1 == titles.len())),
                Span::styled((*title).to_string(), style),
            ])));
        }
    }

    let list = List::new(items).block(focused_block(
        "Sections".to_string(),
        matches!(app.focus, Focus::Sections | Focus::Subsections),
    ));
    f.render_widget(list, area);
}

/// ATX heading level of `line`, if it is one (`#` to `######` followed by a space).
fn heading_level(line: &str) -> Option<usize> {
    let trimmed = line.trim_start();
    let level = trimmed.bytes().take_while(|&b| b == b'#').count();
    let rest = trimmed.get(level..)?;
    ((1..=6).contains(&level) && rest.starts_with(' ')).then_some(level)
}

/// Style heading lines so the block structure is visible without a markdown renderer.
fn styled_body(body: &str) -> Vec<Line<'_>> {
    body.lines()
        .map(|line| match heading_level(line) {
            Some(1) => Line::styled(
                line,
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Some(_) => Line::styled(
                line,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            None => Line::raw(line),
        })
        .collect()
}

fn draw_content(f: &mut Frame, app: &AppState, area: Rect) {
    let page = &app.page;
    let title = format!("{} | {}", page.subsection_title, page.source_path);

    let paragraph = if page.missing {
        Paragraph::new(page.body.as_str()).style(Style::default().fg(Color::Yellow))
    } else {
        Paragraph::new(styled_body(&page.body))
    };

    let paragraph = paragraph
        .block(focused_block(title, app.focus == Focus::Content))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));
    f.render_widget(paragraph, area);
}

fn draw_links(f: &mut Frame, app: &AppState, area: Rect) {
    let spans: Vec<Span> = if app.page.links.is_empty() {
        vec![Span::styled(
            "No related links",
            Style::default().fg(Color::DarkGray),
        )]
    } else {
        app.page
            .links
            .iter()
            .enumerate()
            .flat_map(|(i, link)| {
                let separator = if i == 0 { "" } else { " | " };
                [
                    Span::raw(separator),
                    Span::styled(
                        link.label.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!(" {}", link.url)),
                ]
            })
            .collect()
    };

    let links = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Related"));
    f.render_widget(links, area);
}

fn draw_help(f: &mut Frame, app: &AppState, area: Rect) {
    let help_text = app.message.clone().unwrap_or_else(|| {
        "↑/↓: Navigate | Tab/←/→: Pane | l: Locale | r: Reload | PgUp/PgDn: Scroll | q: Quit"
            .to_string()
    });
    let help = Paragraph::new(help_text).block(Block::default().borders(Borders::ALL));
    f.render_widget(help, area);
}
