// TUI event loop and terminal management
use crate::{App, InputMode};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use storefront_core::{load_catalog, CatalogSource, FavoritesStore, Intent};
use tracing::{debug, info};

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

/// Run the browser until the user quits
///
/// The catalog is fetched once, after the first (loading) frame is on screen.
pub async fn run_tui(
    mut app: App,
    source: &dyn CatalogSource,
    favorites: FavoritesStore,
) -> anyhow::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if app.mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app, source, &favorites).await;

    // Restore terminal, even when the loop failed
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn event_loop(
    terminal: &mut Tui,
    app: &mut App,
    source: &dyn CatalogSource,
    favorites: &FavoritesStore,
) -> anyhow::Result<()> {
    terminal.draw(|f| crate::ui::render(f, app))?;

    let catalog = load_catalog(source).await;
    info!("Catalog ready with {} products", catalog.len());
    app.dispatch(Intent::CatalogLoaded(catalog));

    let saved = favorites.load().await;
    app.dispatch(Intent::FavoritesLoaded(saved));

    loop {
        terminal.draw(|f| crate::ui::render(f, app))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                handle_key(app, key, favorites).await;
            }
            Event::Mouse(mouse) if app.mouse_enabled => match mouse.kind {
                MouseEventKind::ScrollDown => app.next_result(),
                MouseEventKind::ScrollUp => app.previous_result(),
                _ => {}
            },
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

async fn handle_key(app: &mut App, key: KeyEvent, favorites: &FavoritesStore) {
    match app.input_mode {
        InputMode::Help => match key.code {
            KeyCode::Esc | KeyCode::Char('?') => app.toggle_help(),
            KeyCode::Char('q') => app.quit(),
            _ => {}
        },
        InputMode::Searching => match key.code {
            KeyCode::Enter | KeyCode::Esc => app.enter_normal_mode(),
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.clear_search();
            }
            KeyCode::Char(c) => app.push_search_char(c),
            KeyCode::Backspace => app.pop_search_char(),
            _ => {}
        },
        InputMode::Normal => {
            app.clear_status();
            match key.code {
                KeyCode::Char('q') => app.quit(),
                KeyCode::Char('?') => app.toggle_help(),
                KeyCode::Char('/') => app.enter_search_mode(),
                KeyCode::Char('c') => app.cycle_category(),
                KeyCode::Char('s') => app.cycle_sort(),
                KeyCode::Char('l') | KeyCode::Right => app.next_page(),
                KeyCode::Char('h') | KeyCode::Left => app.previous_page(),
                KeyCode::Char('g') | KeyCode::Home => app.first_page(),
                KeyCode::Char('G') | KeyCode::End => app.last_page(),
                KeyCode::Char('j') | KeyCode::Down => app.next_result(),
                KeyCode::Char('k') | KeyCode::Up => app.previous_result(),
                KeyCode::Char(d) if d.is_ascii_digit() && d != '0' => {
                    if let Some(page) = d.to_digit(10) {
                        app.go_to_visible_page(page as usize);
                    }
                }
                KeyCode::Char('f') | KeyCode::Char(' ') => toggle_favorite(app, favorites).await,
                _ => {}
            }
        }
    }
}

/// Persist the toggle, then show whatever set the store handed back
async fn toggle_favorite(app: &mut App, favorites: &FavoritesStore) {
    let Some(product) = app.selected_product() else {
        app.set_status("No product selected");
        return;
    };

    debug!("Toggling favorite for product {}", product.id);
    let current = app.state.favorites.clone();
    let updated = favorites.toggle(&current, product.id).await;
    app.dispatch(Intent::FavoritesChanged(updated));
}
