// Browser state - one immutable value, updated by a pure reducer
use crate::{
    catalog::Catalog,
    favorites::{self, FavoriteSet},
    filter,
    models::{CategoryFilter, FilterCriteria, PageLabel, Product, ProductId, SortOrder},
    pagination,
};

/// Items per page when nothing else is configured
pub const DEFAULT_PAGE_SIZE: usize = 2;

/// Something the user (or a finished async call) wants to change
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    CatalogLoaded(Catalog),
    FavoritesLoaded(FavoriteSet),
    /// Result of an add/remove round-trip through the favorites store
    FavoritesChanged(FavoriteSet),
    SearchChanged(String),
    CategorySelected(CategoryFilter),
    SortSelected(SortOrder),
    GoToPage(usize),
    NextPage,
    PreviousPage,
}

/// Everything the presentation layer renders from
///
/// Derived collections are never stored here; `view()` recomputes them.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowserState {
    pub catalog: Catalog,
    pub criteria: FilterCriteria,
    pub current_page: usize,
    pub page_size: usize,
    pub favorites: FavoriteSet,
    /// True until the first catalog fetch resolves, success or not
    pub loading: bool,
}

impl BrowserState {
    pub fn new(page_size: usize) -> Self {
        Self {
            catalog: Catalog::default(),
            criteria: FilterCriteria::default(),
            current_page: 1,
            page_size,
            favorites: FavoriteSet::new(),
            loading: true,
        }
    }

    /// Next state after `intent`
    ///
    /// Catalog and criteria changes send the user back to page 1. Page moves
    /// are clamped to the pages that actually exist.
    pub fn apply(self, intent: Intent) -> Self {
        match intent {
            Intent::CatalogLoaded(catalog) => Self {
                catalog,
                current_page: 1,
                loading: false,
                ..self
            },
            Intent::FavoritesLoaded(favorites) | Intent::FavoritesChanged(favorites) => {
                Self { favorites, ..self }
            }
            Intent::SearchChanged(search) => {
                let criteria = FilterCriteria {
                    search,
                    ..self.criteria.clone()
                };
                self.with_criteria(criteria)
            }
            Intent::CategorySelected(category) => {
                let criteria = FilterCriteria {
                    category,
                    ..self.criteria.clone()
                };
                self.with_criteria(criteria)
            }
            Intent::SortSelected(sort) => {
                let criteria = FilterCriteria {
                    sort,
                    ..self.criteria.clone()
                };
                self.with_criteria(criteria)
            }
            Intent::GoToPage(page) => self.with_page(page),
            Intent::NextPage => {
                let page = self.current_page.saturating_add(1);
                self.with_page(page)
            }
            Intent::PreviousPage => {
                let page = self.current_page.saturating_sub(1);
                self.with_page(page)
            }
        }
    }

    fn with_criteria(self, criteria: FilterCriteria) -> Self {
        Self {
            criteria,
            current_page: 1,
            ..self
        }
    }

    fn with_page(self, page: usize) -> Self {
        let total = self.total_pages();
        Self {
            current_page: page.clamp(1, total),
            ..self
        }
    }

    /// Products matching the current criteria, in display order
    pub fn filtered(&self) -> Vec<Product> {
        filter::filter_and_sort(self.catalog.products(), &self.criteria)
    }

    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.filtered().len(), self.page_size)
    }

    pub fn is_favorite(&self, id: ProductId) -> bool {
        favorites::contains(&self.favorites, id)
    }

    /// Run the whole pipeline: filter, sort, paginate, build the pager row
    pub fn view(&self) -> CatalogView {
        let filtered = self.filtered();
        let total_pages = pagination::total_pages(filtered.len(), self.page_size);
        let current_page = self.current_page.clamp(1, total_pages);
        let items = pagination::paginate(&filtered, current_page, self.page_size).to_vec();

        CatalogView {
            items,
            current_page,
            total_pages,
            total_items: filtered.len(),
            page_window: pagination::page_window(current_page, total_pages),
            categories: self.catalog.categories(),
        }
    }
}

impl Default for BrowserState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// One render's worth of derived data
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView {
    /// Products on the current page
    pub items: Vec<Product>,
    pub current_page: usize,
    pub total_pages: usize,
    /// Matches across all pages
    pub total_items: usize,
    pub page_window: Vec<PageLabel>,
    pub categories: Vec<String>,
}

impl CatalogView {
    /// A single page needs no pager
    pub fn show_pager(&self) -> bool {
        self.total_pages > 1
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::tests::{product, sample_catalog};

    fn loaded(page_size: usize) -> BrowserState {
        BrowserState::new(page_size).apply(Intent::CatalogLoaded(Catalog::new(sample_catalog())))
    }

    fn ids(products: &[Product]) -> Vec<u32> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_new_state_is_loading() {
        let state = BrowserState::default();
        assert!(state.loading);
        assert_eq!(state.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(state.view().total_pages, 1);
        assert!(!state.view().show_pager());
    }

    #[test]
    fn test_catalog_loaded_ends_loading_even_when_empty() {
        let state = BrowserState::default().apply(Intent::CatalogLoaded(Catalog::default()));
        assert!(!state.loading);

        let view = state.view();
        assert!(view.items.is_empty());
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.page_window, vec![PageLabel::Page(1)]);
    }

    #[test]
    fn test_five_matches_two_per_page() {
        let catalog = Catalog::new(vec![
            product(1, "a", 1.0, "x"),
            product(2, "b", 2.0, "x"),
            product(3, "c", 3.0, "x"),
            product(4, "d", 4.0, "x"),
            product(5, "e", 5.0, "x"),
        ]);
        let mut state = BrowserState::new(2).apply(Intent::CatalogLoaded(catalog));

        let mut sizes = Vec::new();
        for page in 1..=3 {
            state = state.apply(Intent::GoToPage(page));
            let view = state.view();
            assert_eq!(view.total_pages, 3);
            sizes.push(view.items.len());
        }
        assert_eq!(sizes, vec![2, 2, 1]);
    }

    #[test]
    fn test_criteria_change_resets_page() {
        let state = loaded(2).apply(Intent::GoToPage(3));
        assert_eq!(state.current_page, 3);

        let searched = state.clone().apply(Intent::SearchChanged("jacket".into()));
        assert_eq!(searched.current_page, 1);
        assert_eq!(ids(&searched.view().items), vec![2, 6]);

        let sorted = state.clone().apply(Intent::SortSelected(SortOrder::PriceAscending));
        assert_eq!(sorted.current_page, 1);

        let categorized = state.apply(Intent::CategorySelected(CategoryFilter::Only("jewelery".into())));
        assert_eq!(categorized.current_page, 1);
        assert_eq!(categorized.view().total_items, 2);
    }

    #[test]
    fn test_catalog_reload_resets_page() {
        let state = loaded(2).apply(Intent::GoToPage(4));
        let reloaded = state.apply(Intent::CatalogLoaded(Catalog::new(sample_catalog())));
        assert_eq!(reloaded.current_page, 1);
    }

    #[test]
    fn test_page_navigation_is_clamped() {
        let state = loaded(2);
        assert_eq!(state.total_pages(), 4);

        let past_end = state.clone().apply(Intent::GoToPage(99));
        assert_eq!(past_end.current_page, 4);
        assert_eq!(past_end.view().items.len(), 1);

        let before_start = state.clone().apply(Intent::GoToPage(0));
        assert_eq!(before_start.current_page, 1);

        let stuck = state.apply(Intent::PreviousPage);
        assert_eq!(stuck.current_page, 1);

        let last = stuck
            .apply(Intent::NextPage)
            .apply(Intent::NextPage)
            .apply(Intent::NextPage)
            .apply(Intent::NextPage);
        assert_eq!(last.current_page, 4);
        assert!(!last.view().has_next());
        assert!(last.view().has_previous());
    }

    #[test]
    fn test_view_window_for_many_pages() {
        let state = loaded(1).apply(Intent::GoToPage(4));
        let view = state.view();

        assert_eq!(view.total_pages, 7);
        assert_eq!(
            view.page_window,
            vec![
                PageLabel::Page(1),
                PageLabel::Ellipsis,
                PageLabel::Page(3),
                PageLabel::Page(4),
                PageLabel::Page(5),
                PageLabel::Ellipsis,
                PageLabel::Page(7),
            ]
        );
    }

    #[test]
    fn test_favorites_are_the_source_of_truth() {
        let state = loaded(2);
        assert!(!state.is_favorite(3));

        let state = state.apply(Intent::FavoritesLoaded([3, 5].into_iter().collect()));
        assert!(state.is_favorite(3));
        assert!(state.is_favorite(5));

        let state = state.apply(Intent::FavoritesChanged([5].into_iter().collect()));
        assert!(!state.is_favorite(3));

        // Favorites changes do not move the user
        let paged = state.apply(Intent::GoToPage(2));
        let toggled = paged.apply(Intent::FavoritesChanged(FavoriteSet::new()));
        assert_eq!(toggled.current_page, 2);
    }

    #[test]
    fn test_view_exposes_sorted_categories() {
        let view = loaded(2).view();
        assert_eq!(view.categories.first().map(String::as_str), Some("electronics"));
        assert_eq!(view.total_items, 7);
    }
}
