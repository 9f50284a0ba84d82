use crate::model::{landmarks, Unit, UnitStatus};
use crate::plan::schedule_total;
use crate::ui::app::{App, FocusPanel};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, List, ListItem, Paragraph, Row, Scrollbar, ScrollbarOrientation,
        ScrollbarState, Table,
    },
    Frame,
};

// Sales-deck palette
const BRAND_DARK: Color = Color::Rgb(0x1C, 0x2B, 0x3A); // header text
const BRAND_SELECT_BG: Color = Color::Rgb(0xD6, 0xE2, 0xEC); // selection background
const BRAND_AMBER: Color = Color::Rgb(0xC5, 0x8A, 0x2D); // focus / markers
const BRAND_GREEN: Color = Color::Rgb(0x6B, 0x8F, 0x4E); // counts, available
const BRAND_RED: Color = Color::Rgb(0xA8, 0x43, 0x3B); // sold
const BRAND_MUTED: Color = Color::Rgb(0x6E, 0x6A, 0x63); // footer

const HEADER_STYLE: Style = Style::new().fg(BRAND_DARK).add_modifier(Modifier::BOLD);
const SELECTED_STYLE: Style = Style::new()
    .bg(BRAND_SELECT_BG)
    .fg(BRAND_DARK)
    .add_modifier(Modifier::BOLD);
const COUNT_COLOR: Color = BRAND_GREEN;

pub fn draw_dashboard(frame: &mut Frame, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Min(10),   // Main content
        Constraint::Length(3), // Footer
    ])
    .split(frame.area());

    draw_header(frame, chunks[0], app);
    draw_main_content(frame, chunks[1], app);
    draw_footer(
        frame,
        chunks[2],
        " ←→ Panel | ↑↓ Move | Enter Detail | m Landmarks | q Quit ",
    );
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let title = format!(
        " {} | {} phases | {} units | {} firms ",
        app.inventory.name,
        app.inventory.phases.len(),
        app.inventory.total_units(),
        app.inventory.firms.len()
    );

    let header = Paragraph::new(title)
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

fn draw_main_content(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::horizontal([
        Constraint::Percentage(18), // Phases
        Constraint::Percentage(27), // Blocks
        Constraint::Percentage(55), // Units
    ])
    .split(area);

    draw_phases(frame, chunks[0], app);
    draw_blocks(frame, chunks[1], app);
    draw_units(frame, chunks[2], app);
}

fn draw_phases(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus_panel == FocusPanel::Phases;

    let items: Vec<ListItem> = app
        .inventory
        .phases
        .iter()
        .enumerate()
        .map(|(i, phase)| {
            let is_selected = i == app.selected_phase;
            let style = if is_selected && is_focused {
                SELECTED_STYLE
            } else if is_selected {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let marker = if is_selected && is_focused { " ◄" } else { "" };

            let content = Line::from(vec![
                Span::styled(phase.phase.label(), style),
                Span::raw(" "),
                Span::styled(
                    format!("({})", phase.total_units()),
                    Style::default().fg(COUNT_COLOR),
                ),
                Span::styled(marker, Style::default().fg(BRAND_AMBER)),
            ]);

            ListItem::new(content)
        })
        .collect();

    let border_style = if is_focused {
        Style::default().fg(BRAND_AMBER)
    } else {
        Style::default()
    };

    let list = List::new(items).block(
        Block::default()
            .title(" Phases ")
            .borders(Borders::ALL)
            .border_style(border_style),
    );

    frame.render_widget(list, area);
}

fn draw_blocks(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus_panel == FocusPanel::Blocks;

    let items: Vec<ListItem> = app
        .current_blocks()
        .iter()
        .enumerate()
        .map(|(i, block)| {
            let is_selected = i == app.selected_block;
            let style = if is_selected && is_focused {
                SELECTED_STYLE
            } else if is_selected {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let marker = if is_selected && is_focused { " ◄" } else { "" };
            let summary = block.summary();

            let content = Line::from(vec![
                Span::styled(format!("Block {}", block.name), style),
                Span::raw(" "),
                Span::styled(
                    format!("({})", summary.total),
                    Style::default().fg(COUNT_COLOR),
                ),
                Span::styled(
                    format!(" {}%", summary.occupancy_rate),
                    Style::default().fg(BRAND_AMBER),
                ),
                Span::styled(marker, Style::default().fg(BRAND_AMBER)),
            ]);

            ListItem::new(content)
        })
        .collect();

    let border_style = if is_focused {
        Style::default().fg(BRAND_AMBER)
    } else {
        Style::default()
    };

    let title = format!(" Blocks ({}) ", app.current_blocks().len());
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style),
    );

    frame.render_widget(list, area);
}

fn draw_units(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus_panel == FocusPanel::Units;

    let units: &[Unit] = app
        .selected_block_group()
        .map_or(&[], |block| &block.units);

    let block_name = app
        .selected_block_group()
        .map(|block| block.name.clone())
        .unwrap_or_default();

    // Subtract 3 for borders and header
    let visible_rows = (area.height as usize).saturating_sub(3);

    let scroll_offset = if app.selected_unit >= visible_rows {
        app.selected_unit - visible_rows + 1
    } else {
        0
    };

    let header = Row::new(vec!["Unit", "Net m²", "Total m²", "Status"])
        .style(HEADER_STYLE)
        .height(1);

    let rows: Vec<Row> = units
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(visible_rows)
        .map(|(i, unit)| {
            let is_selected = i == app.selected_unit;
            let style = if is_selected && is_focused {
                SELECTED_STYLE
            } else if is_selected {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(status_color(unit.status))
            };

            Row::new(vec![
                unit.unit_number.clone(),
                format!("{:.0}", unit.net_area),
                format!("{:.0}", unit.total_area()),
                unit.status.as_str().to_string(),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Percentage(25),
        Constraint::Percentage(20),
        Constraint::Percentage(20),
        Constraint::Percentage(35),
    ];

    let border_style = if is_focused {
        Style::default().fg(BRAND_AMBER)
    } else {
        Style::default()
    };

    let title = format!(" Block {} ({} units) ", block_name, units.len());
    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style),
    );

    frame.render_widget(table, area);

    if units.len() > visible_rows {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"));
        let mut scrollbar_state = ScrollbarState::new(units.len()).position(app.selected_unit);

        let scrollbar_area = Rect {
            x: area.x + area.width - 1,
            y: area.y + 2,
            width: 1,
            height: area.height - 3,
        };
        frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
    }
}

fn draw_footer(frame: &mut Frame, area: Rect, help: &str) {
    let footer = Paragraph::new(help)
        .style(Style::default().fg(BRAND_MUTED))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(footer, area);
}

const fn status_color(status: UnitStatus) -> Color {
    match status {
        UnitStatus::Available => BRAND_GREEN,
        UnitStatus::Sold => BRAND_RED,
        UnitStatus::Reserved => BRAND_AMBER,
    }
}

/// Group an amount with dot separators the way the sales sheets print TL
/// figures (14000000 → "14.000.000").
fn format_amount(amount: f64) -> String {
    let plain = format!("{amount:.0}");
    let (sign, digits) = plain
        .strip_prefix('-')
        .map_or(("", plain.as_str()), |rest| ("-", rest));

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped}")
}

pub fn draw_unit_detail(frame: &mut Frame, app: &App) {
    let unit = match app.selected_unit_ref() {
        Some(u) => u,
        None => return,
    };

    let chunks = Layout::vertical([
        Constraint::Length(3), // Header: unit name
        Constraint::Length(3), // Info line
        Constraint::Min(6),    // Properties
        Constraint::Length(3), // Footer
    ])
    .split(frame.area());

    let block_name = app
        .selected_block_group()
        .map(|block| block.name.clone())
        .unwrap_or_default();

    let header = Paragraph::new(format!(" Unit: {}-{} ", block_name, unit.unit_number))
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, chunks[0]);

    let phase_label = app
        .current_phase()
        .map_or("-", |phase| phase.phase.label());
    let unit_count = app
        .selected_block_group()
        .map_or(0, |block| block.units.len());

    let info_text = format!(
        "{phase_label}  |  Block {block_name}  |  Unit {}/{}  |  {}",
        app.selected_unit + 1,
        unit_count,
        unit.status.as_str()
    );
    let info_widget = Paragraph::new(info_text).block(Block::default().borders(Borders::ALL));
    frame.render_widget(info_widget, chunks[1]);

    // Property rows: areas and prices first, then the firm claim, then the
    // block summary
    let mut rows: Vec<Row> = vec![
        section_row("── Unit ──"),
        Row::new(vec!["Section".to_string(), unit.section.clone()]),
        Row::new(vec![
            "Gross area".to_string(),
            format!("{:.2} m²", unit.gross_area),
        ]),
        Row::new(vec![
            "Net area".to_string(),
            format!("{:.2} m²", unit.net_area),
        ]),
    ];
    if let Some(ground) = unit.ground_floor_area {
        rows.push(Row::new(vec![
            "Ground floor".to_string(),
            format!("{ground:.2} m²"),
        ]));
    }
    if let Some(normal) = unit.normal_floor_area {
        rows.push(Row::new(vec![
            "Normal floor".to_string(),
            format!("{normal:.2} m²"),
        ]));
    }
    rows.push(Row::new(vec![
        "Total area".to_string(),
        format!("{:.2} m²", unit.total_area()),
    ]));
    rows.push(Row::new(vec![
        "Price".to_string(),
        unit.price_tl
            .map_or_else(|| "-".to_string(), |p| format!("{} TL", format_amount(p))),
    ]));
    rows.push(Row::new(vec![
        "Price (USD)".to_string(),
        unit.price_usd
            .map_or_else(|| "-".to_string(), |p| format!("$ {}", format_amount(p))),
    ]));

    rows.push(section_row("── Occupant ──"));
    if let Some(firm) = app.firm_for_selected() {
        rows.push(Row::new(vec!["Firm".to_string(), firm.name.clone()]));
        rows.push(Row::new(vec![
            "Occupancy".to_string(),
            firm.occupancy.clone(),
        ]));
        rows.push(Row::new(vec![
            "Business line".to_string(),
            firm.business_line.clone(),
        ]));
        rows.push(Row::new(vec![
            "Covered units".to_string(),
            firm.unit_list.clone(),
        ]));
    } else {
        rows.push(Row::new(vec!["Firm".to_string(), "-".to_string()]));
    }

    if let Some(summary) = app.selected_block_summary() {
        rows.push(section_row("── Block ──"));
        rows.push(Row::new(vec![
            "Units".to_string(),
            format!(
                "{} total / {} sold / {} available / {} reserved",
                summary.total, summary.sold, summary.available, summary.reserved
            ),
        ]));
        rows.push(Row::new(vec![
            "Occupancy".to_string(),
            format!("{}%", summary.occupancy_rate),
        ]));
        rows.push(Row::new(vec![
            "Avg net area".to_string(),
            format!("{:.1} m²", summary.avg_area),
        ]));
    }

    let prop_widths = [Constraint::Percentage(35), Constraint::Percentage(65)];
    let prop_header = Row::new(vec!["Property", "Value"]).style(HEADER_STYLE);

    let prop_table = Table::new(rows, prop_widths).header(prop_header).block(
        Block::default()
            .title(" Details ")
            .borders(Borders::ALL),
    );
    frame.render_widget(prop_table, chunks[2]);

    draw_footer(
        frame,
        chunks[3],
        " Esc Back | ←→ Unit | Enter Payment Plan | q Quit ",
    );
}

fn section_row(title: &str) -> Row<'_> {
    Row::new(vec![title.to_string(), String::new()]).style(
        Style::default()
            .fg(BRAND_MUTED)
            .add_modifier(Modifier::ITALIC),
    )
}

pub fn draw_schedule(frame: &mut Frame, app: &App) {
    let unit = match app.selected_unit_ref() {
        Some(u) => u,
        None => return,
    };

    let items = app.schedule_for_selected();
    let total = schedule_total(&items);

    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Min(10),   // Schedule table
        Constraint::Length(3), // Footer
    ])
    .split(frame.area());

    let block_name = app
        .selected_block_group()
        .map(|block| block.name.clone())
        .unwrap_or_default();

    let header = Paragraph::new(format!(
        " Payment plan: {}-{} | 30% down + 20 installments | total {} TL ",
        block_name,
        unit.unit_number,
        format_amount(total)
    ))
    .style(HEADER_STYLE)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, chunks[0]);

    let visible_rows = (chunks[1].height as usize).saturating_sub(3);

    let schedule_header = Row::new(vec!["No", "Date", "Amount TL", "Description"])
        .style(HEADER_STYLE)
        .height(1);

    let rows: Vec<Row> = items
        .iter()
        .skip(app.schedule_scroll_offset)
        .take(visible_rows)
        .map(|item| {
            let style = if item.installment_no == 0 {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Row::new(vec![
                item.installment_no.to_string(),
                item.date.to_string(),
                format_amount(item.amount),
                item.description.clone(),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(4),
        Constraint::Percentage(25),
        Constraint::Percentage(30),
        Constraint::Percentage(40),
    ];

    let table = Table::new(rows, widths).header(schedule_header).block(
        Block::default()
            .title(format!(" Schedule ({} lines) ", items.len()))
            .borders(Borders::ALL),
    );
    frame.render_widget(table, chunks[1]);

    if items.len() > visible_rows {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"));
        let mut scrollbar_state =
            ScrollbarState::new(items.len()).position(app.schedule_scroll_offset);

        let scrollbar_area = Rect {
            x: chunks[1].x + chunks[1].width - 1,
            y: chunks[1].y + 2,
            width: 1,
            height: chunks[1].height - 3,
        };
        frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
    }

    let footer_text = app.status_message.as_ref().map_or_else(
        || " Esc Back | ↑↓ Scroll | s Save CSV | q Quit ".to_string(),
        |message| format!(" {message} "),
    );
    draw_footer(frame, chunks[2], &footer_text);
}

pub fn draw_landmarks(frame: &mut Frame, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Min(10),   // Landmark table
        Constraint::Length(3), // Footer
    ])
    .split(frame.area());

    let header = Paragraph::new(format!(" {} | Location & surroundings ", app.inventory.name))
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, chunks[0]);

    let table_header = Row::new(vec!["Kind", "Name", "Distance", "Coordinates"])
        .style(HEADER_STYLE)
        .height(1);

    let rows: Vec<Row> = landmarks()
        .iter()
        .map(|landmark| {
            Row::new(vec![
                landmark.kind.label().to_string(),
                landmark.name.to_string(),
                format!("{:.1} km", landmark.distance_km),
                format!("{:.4}, {:.4}", landmark.lat, landmark.lon),
            ])
        })
        .collect();

    let widths = [
        Constraint::Percentage(18),
        Constraint::Percentage(40),
        Constraint::Percentage(14),
        Constraint::Percentage(28),
    ];

    let table = Table::new(rows, widths).header(table_header).block(
        Block::default()
            .title(format!(" Landmarks ({}) ", landmarks().len()))
            .borders(Borders::ALL),
    );
    frame.render_widget(table, chunks[1]);

    draw_footer(frame, chunks[2], " Esc Back | q Quit ");
}
