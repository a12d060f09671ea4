// UI rendering logic
use crate::{help_ui, App, InputMode};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};
use storefront_core::{CatalogView, CategoryFilter, PageLabel, Product, SortOrder};

pub fn render(frame: &mut Frame, app: &mut App) {
    let view = app.view();

    let mut constraints = vec![
        Constraint::Length(3), // Header
        Constraint::Length(3), // Search input
        Constraint::Length(4), // Category + sort bar
        Constraint::Min(5),    // Products
    ];
    if view.show_pager() {
        constraints.push(Constraint::Length(3)); // Pager
    }
    constraints.push(Constraint::Length(1)); // Status bar

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.area());

    render_header(frame, app, &view, chunks[0]);
    render_search_input(frame, app, chunks[1]);
    render_filter_bar(frame, app, &view, chunks[2]);

    // Adaptive split: narrow terminals give the list more room
    let (list_pct, detail_pct) = if frame.area().width < 100 { (55, 45) } else { (45, 55) };
    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(list_pct),
            Constraint::Percentage(detail_pct),
        ])
        .split(chunks[3]);

    render_product_list(frame, app, &view, content_chunks[0]);
    render_detail(frame, app, content_chunks[1]);

    if view.show_pager() {
        render_pager(frame, &view, chunks[4]);
    }
    render_status_bar(frame, app, chunks[chunks.len() - 1]);

    if app.input_mode == InputMode::Help {
        help_ui::render_keybindings_help(frame, frame.area());
    }
}

fn render_header(frame: &mut Frame, app: &App, view: &CatalogView, area: Rect) {
    let count = if app.state.loading {
        "loading...".to_string()
    } else {
        format!(
            "{} of {} products · {} favorites",
            view.total_items,
            app.state.catalog.len(),
            app.state.favorites.len()
        )
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "🛍  Product Catalog",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(count, Style::default().fg(Color::DarkGray)),
    ]))
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

fn render_search_input(frame: &mut Frame, app: &App, area: Rect) {
    let is_active = app.input_mode == InputMode::Searching;

    let text = if app.search_input.is_empty() && !is_active {
        Span::styled("Search products...", Style::default().fg(Color::DarkGray))
    } else if is_active {
        Span::raw(format!("{}█", app.search_input))
    } else {
        Span::raw(app.search_input.as_str())
    };

    let border_style = if is_active {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let input = Paragraph::new(Line::from(text)).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Search (/)")
            .border_style(border_style),
    );

    frame.render_widget(input, area);
}

fn render_filter_bar(frame: &mut Frame, app: &App, view: &CatalogView, area: Rect) {
    let active = Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let inactive = Style::default().fg(Color::Gray);

    let selected = &app.state.criteria.category;
    let mut category_spans = vec![Span::styled("Category: ", Style::default().fg(Color::Yellow))];
    category_spans.push(Span::styled(
        " All ",
        if *selected == CategoryFilter::All { active } else { inactive },
    ));
    for category in &view.categories {
        let is_selected = matches!(selected, CategoryFilter::Only(c) if c == category);
        category_spans.push(Span::raw(" "));
        category_spans.push(Span::styled(
            format!(" {} ", category),
            if is_selected { active } else { inactive },
        ));
    }

    let current_sort = app.state.criteria.sort;
    let mut sort_spans = vec![Span::styled("Sort by Price: ", Style::default().fg(Color::Yellow))];
    for sort in [SortOrder::None, SortOrder::PriceAscending, SortOrder::PriceDescending] {
        sort_spans.push(Span::styled(
            format!(" {} ", sort.label()),
            if sort == current_sort { active } else { inactive },
        ));
        sort_spans.push(Span::raw(" "));
    }

    let bar = Paragraph::new(vec![Line::from(category_spans), Line::from(sort_spans)])
        .block(Block::default().borders(Borders::ALL).title("Filters (c: category, s: sort)"))
        .wrap(Wrap { trim: true });

    frame.render_widget(bar, area);
}

fn render_product_list(frame: &mut Frame, app: &mut App, view: &CatalogView, area: Rect) {
    if app.state.loading {
        let loading = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "Loading products...",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
        ])
        .block(Block::default().borders(Borders::ALL).title(" Products "))
        .alignment(Alignment::Center);

        frame.render_widget(loading, area);
        return;
    }

    if view.items.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("No products found", Style::default().add_modifier(Modifier::BOLD))),
            Line::from(Span::styled(
                "Try adjusting your filters or search term",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(Block::default().borders(Borders::ALL).title(" Products "))
        .alignment(Alignment::Center);

        frame.render_widget(empty, area);
        return;
    }

    let title_width = area.width.saturating_sub(16) as usize;
    let items: Vec<ListItem> = view
        .items
        .iter()
        .enumerate()
        .map(|(i, product)| {
            let is_selected = i == app.selected_index;
            let heart = if app.state.is_favorite(product.id) { "❤️ " } else { "🤍 " };

            let name_style = if is_selected {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            };

            let line1 = Line::from(vec![
                Span::raw(heart),
                Span::styled(truncate(&product.title, title_width), name_style),
            ]);

            let line2 = Line::from(vec![
                Span::raw("   "),
                Span::styled(
                    format_price(product.price),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
                Span::raw("  •  "),
                Span::styled(product.category.clone(), Style::default().fg(Color::Rgb(147, 112, 219))),
                Span::raw("  •  "),
                Span::styled(
                    format!("⭐ {}", product.rating.rate),
                    Style::default().fg(Color::Rgb(255, 215, 0)),
                ),
            ]);

            ListItem::new(vec![line1, line2])
        })
        .collect();

    let title = format!(" Products ({}) ", view.total_items);
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol(">> ");

    frame.render_stateful_widget(list, area, &mut app.list_state);
}

fn render_detail(frame: &mut Frame, app: &App, area: Rect) {
    let lines = match app.selected_product() {
        Some(product) => detail_lines(&product, app.state.is_favorite(product.id)),
        None => vec![Line::from(Span::styled(
            "Nothing selected",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let detail = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Details "))
        .wrap(Wrap { trim: true });

    frame.render_widget(detail, area);
}

fn detail_lines(product: &Product, is_favorite: bool) -> Vec<Line<'static>> {
    let label = |text: &str| Span::styled(format!("{:<10}", text), Style::default().fg(Color::Yellow));

    vec![
        Line::from(Span::styled(
            product.title.clone(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            label("Price"),
            Span::styled(format_price(product.price), Style::default().fg(Color::Green)),
        ]),
        Line::from(vec![label("Category"), Span::raw(product.category.clone())]),
        Line::from(vec![
            label("Rating"),
            Span::raw(format!("⭐ {} ({} reviews)", product.rating.rate, product.rating.count)),
        ]),
        Line::from(vec![
            label("Favorite"),
            Span::raw(if is_favorite { "❤️  yes (f to remove)" } else { "🤍 no (f to add)" }),
        ]),
        Line::from(vec![
            label("Image"),
            Span::styled(product.image.clone(), Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(""),
        Line::from(product.description.clone()),
    ]
}

fn render_pager(frame: &mut Frame, view: &CatalogView, area: Rect) {
    let enabled = Style::default().fg(Color::White).bg(Color::Blue);
    let disabled = Style::default().fg(Color::DarkGray);

    let mut spans = vec![
        Span::styled(" ← Prev ", if view.has_previous() { enabled } else { disabled }),
        Span::raw("  "),
    ];

    for label in &view.page_window {
        let style = match label {
            PageLabel::Page(n) if *n == view.current_page => Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            PageLabel::Page(_) => Style::default().fg(Color::Gray),
            PageLabel::Ellipsis => Style::default().fg(Color::DarkGray),
        };
        spans.push(Span::styled(format!(" {} ", label), style));
        spans.push(Span::raw(" "));
    }

    spans.push(Span::raw(" "));
    spans.push(Span::styled(" Next → ", if view.has_next() { enabled } else { disabled }));
    spans.push(Span::styled(
        format!("   {} / {}", view.current_page, view.total_pages),
        Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
    ));

    let pager = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    frame.render_widget(pager, area);
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let status = if let Some(message) = &app.status_message {
        Span::styled(message.clone(), Style::default().fg(Color::Red))
    } else {
        match app.input_mode {
            InputMode::Searching => Span::styled(
                "SEARCH MODE | type to filter | ENTER/ESC: done | Ctrl+U: clear",
                Style::default().fg(Color::Yellow),
            ),
            InputMode::Help => Span::styled("HELP | ?/ESC: close", Style::default().fg(Color::Cyan)),
            InputMode::Normal => Span::raw(
                "j/k: select | h/l: page | 1-9: jump | /: search | c: category | s: sort | f: favorite | ?: help | q: quit",
            ),
        }
    };

    frame.render_widget(Paragraph::new(Line::from(status)), area);
}

fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// Cut at a character boundary, marking the cut with an ellipsis
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars || max_chars < 4 {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars - 3).collect();
    format!("{}...", kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_two_decimals() {
        assert_eq!(format_price(29.99), "$29.99");
        assert_eq!(format_price(7.5), "$7.50");
        assert_eq!(format_price(0.0), "$0.00");
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Fjallraven Foldsack", 10), "Fjallra...");
        assert_eq!(truncate("ééééééééé", 6), "ééé...");
    }
}
