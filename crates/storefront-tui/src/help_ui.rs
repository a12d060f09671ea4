use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render keybindings help popup
pub fn render_keybindings_help(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    // Clear background
    frame.render_widget(Clear, popup_area);

    let help_text = Paragraph::new(keybindings_content())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Keybindings Help ")
                .title_alignment(Alignment::Center)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .alignment(Alignment::Left);

    frame.render_widget(help_text, popup_area);

    if popup_area.height < 3 || popup_area.width < 3 {
        return;
    }

    let footer_area = Rect {
        x: popup_area.x + 1,
        y: popup_area.y + popup_area.height - 1,
        width: popup_area.width - 2,
        height: 1,
    };

    let footer = Paragraph::new(Line::from(vec![
        Span::styled("Press ", Style::default().fg(Color::DarkGray)),
        Span::styled("? ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        Span::styled("or ", Style::default().fg(Color::DarkGray)),
        Span::styled("ESC ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        Span::styled("to close", Style::default().fg(Color::DarkGray)),
    ]))
    .alignment(Alignment::Center);

    frame.render_widget(footer, footer_area);
}

fn keybindings_content() -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let section = |title: &str| -> Line<'static> {
        Line::from(vec![Span::styled(
            format!(" {} ", title),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )])
    };

    let key = |k: &str, desc: &str| -> Line<'static> {
        Line::from(vec![
            Span::styled(
                format!("  {:12}", k),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::raw(desc.to_string()),
        ])
    };

    lines.push(section("Global"));
    lines.push(Line::from(""));
    lines.push(key("q", "Quit application"));
    lines.push(key("?", "Toggle this help"));
    lines.push(key("ESC", "Close popup / Clear status / Exit mode"));
    lines.push(Line::from(""));

    lines.push(section("Products"));
    lines.push(Line::from(""));
    lines.push(key("j / Down", "Select next product"));
    lines.push(key("k / Up", "Select previous product"));
    lines.push(key("f / Space", "Toggle favorite for selected product"));
    lines.push(Line::from(""));

    lines.push(section("Filters"));
    lines.push(Line::from(""));
    lines.push(key("/", "Search titles, descriptions and categories"));
    lines.push(key("c", "Cycle category (All first)"));
    lines.push(key("s", "Cycle price sort (None > Low to High > High to Low)"));
    lines.push(Line::from(""));

    lines.push(section("Pages"));
    lines.push(Line::from(""));
    lines.push(key("l / Right", "Next page"));
    lines.push(key("h / Left", "Previous page"));
    lines.push(key("g / G", "First / last page"));
    lines.push(key("1-9", "Jump to a page shown in the pager"));
    lines.push(Line::from(""));

    lines.push(section("Search Mode"));
    lines.push(Line::from(""));
    lines.push(key("type", "Results update as you type"));
    lines.push(key("Backspace", "Delete character"));
    lines.push(key("Ctrl+U", "Clear search"));
    lines.push(key("ENTER / ESC", "Back to browsing"));
    lines.push(Line::from(""));

    lines
}

/// Helper function to create a centered rect
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_stays_inside() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(60, 70, outer);

        assert_eq!(inner.width, 60);
        assert!(inner.height > 0 && inner.height < outer.height);
        assert_eq!(inner.x, 20);
        assert!(inner.y + inner.height <= outer.height);
    }

    #[test]
    fn test_help_lists_every_browse_key() {
        let text: String = keybindings_content()
            .iter()
            .flat_map(|line| line.spans.iter().map(|s| s.content.to_string()))
            .collect();

        for k in ["/", "c", "s", "g / G", "f / Space", "l / Right", "h / Left", "q"] {
            assert!(text.contains(k), "missing {}", k);
        }
    }
}
