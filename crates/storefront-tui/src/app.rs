// TUI application state and event handling
use ratatui::widgets::ListState;
use storefront_core::{BrowserState, CatalogView, Intent, Product};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,    // Browsing products
    Searching, // Typing in search box
    Help,      // Keybindings popup
}

pub struct App {
    pub should_quit: bool,
    pub input_mode: InputMode,
    /// What the user has typed; mirrored into the criteria on every keystroke
    pub search_input: String,
    pub state: BrowserState,
    /// Row within the current page
    pub selected_index: usize,
    pub list_state: ListState,
    pub status_message: Option<String>,
    pub mouse_enabled: bool,
}

impl App {
    pub fn new(page_size: usize) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            should_quit: false,
            input_mode: InputMode::Normal,
            search_input: String::new(),
            state: BrowserState::new(page_size),
            selected_index: 0,
            list_state,
            status_message: None,
            mouse_enabled: true,
        }
    }

    /// Feed an intent through the reducer
    ///
    /// Anything that can change which products are on screen puts the
    /// cursor back on the first row.
    pub fn dispatch(&mut self, intent: Intent) {
        let keeps_selection = matches!(
            intent,
            Intent::FavoritesLoaded(_) | Intent::FavoritesChanged(_)
        );

        let state = std::mem::take(&mut self.state);
        self.state = state.apply(intent);

        if keeps_selection {
            self.clamp_selection();
        } else {
            self.reset_selection();
        }
    }

    pub fn view(&self) -> CatalogView {
        self.state.view()
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn enter_search_mode(&mut self) {
        self.input_mode = InputMode::Searching;
    }

    pub fn enter_normal_mode(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn toggle_help(&mut self) {
        self.input_mode = match self.input_mode {
            InputMode::Help => InputMode::Normal,
            _ => InputMode::Help,
        };
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search_input.push(c);
        self.dispatch(Intent::SearchChanged(self.search_input.clone()));
    }

    pub fn pop_search_char(&mut self) {
        if self.search_input.pop().is_some() {
            self.dispatch(Intent::SearchChanged(self.search_input.clone()));
        }
    }

    pub fn clear_search(&mut self) {
        self.search_input.clear();
        self.dispatch(Intent::SearchChanged(String::new()));
    }

    pub fn cycle_category(&mut self) {
        let next = self.state.criteria.category.cycle(&self.state.catalog.categories());
        self.dispatch(Intent::CategorySelected(next));
    }

    pub fn cycle_sort(&mut self) {
        let next = self.state.criteria.sort.next();
        self.dispatch(Intent::SortSelected(next));
    }

    pub fn next_page(&mut self) {
        self.dispatch(Intent::NextPage);
    }

    pub fn previous_page(&mut self) {
        self.dispatch(Intent::PreviousPage);
    }

    pub fn first_page(&mut self) {
        self.dispatch(Intent::GoToPage(1));
    }

    pub fn last_page(&mut self) {
        let last = self.state.total_pages();
        self.dispatch(Intent::GoToPage(last));
    }

    /// Jump to a page only if the pager is currently showing it
    pub fn go_to_visible_page(&mut self, page: usize) {
        let visible = self
            .view()
            .page_window
            .iter()
            .any(|label| label.page() == Some(page));

        if visible {
            self.dispatch(Intent::GoToPage(page));
        }
    }

    pub fn next_result(&mut self) {
        let count = self.view().items.len();
        if count > 0 {
            self.selected_index = (self.selected_index + 1).min(count - 1);
            self.list_state.select(Some(self.selected_index));
        }
    }

    pub fn previous_result(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.list_state.select(Some(self.selected_index));
        }
    }

    pub fn selected_product(&self) -> Option<Product> {
        self.view().items.get(self.selected_index).cloned()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    fn reset_selection(&mut self) {
        self.selected_index = 0;
        self.list_state.select(Some(0));
    }

    fn clamp_selection(&mut self) {
        let count = self.view().items.len();
        self.selected_index = self.selected_index.min(count.saturating_sub(1));
        self.list_state.select(Some(self.selected_index));
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(storefront_core::state::DEFAULT_PAGE_SIZE)
    }
}
