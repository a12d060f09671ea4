// Filter/sort engine - turns the raw catalog into the list the user sees
use crate::models::{FilterCriteria, Product, SortOrder};
use std::collections::BTreeSet;

/// Apply category, search and price ordering to `products`
///
/// Always returns a fresh list; the input is left untouched. Sorting is
/// stable, so products with equal prices keep their catalog order.
pub fn filter_and_sort(products: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    let term = criteria.search.to_lowercase();

    let mut result: Vec<Product> = products
        .iter()
        .filter(|product| criteria.category.matches(&product.category))
        .filter(|product| term.is_empty() || matches_search(product, &term))
        .cloned()
        .collect();

    match criteria.sort {
        SortOrder::None => {}
        SortOrder::PriceAscending => result.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortOrder::PriceDescending => result.sort_by(|a, b| b.price.total_cmp(&a.price)),
    }

    result
}

/// `term` must already be lowercased
fn matches_search(product: &Product, term: &str) -> bool {
    product.title.to_lowercase().contains(term)
        || product.description.to_lowercase().contains(term)
        || product.category.to_lowercase().contains(term)
}

/// Distinct categories present in `products`, alphabetically
pub fn unique_categories(products: &[Product]) -> Vec<String> {
    products
        .iter()
        .map(|product| product.category.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::{CategoryFilter, Rating};

    pub(crate) fn product(id: u32, title: &str, price: f64, category: &str) -> Product {
        Product {
            id,
            title: title.to_string(),
            price,
            description: format!("Description of {}", title),
            category: category.to_string(),
            image: format!("https://example.com/{}.jpg", id),
            rating: Rating { rate: 4.0, count: 10 },
        }
    }

    /// 7 products across 4 categories; "shirt" appears in exactly two titles
    pub(crate) fn sample_catalog() -> Vec<Product> {
        vec![
            product(1, "Slim Fit T-Shirt", 22.3, "men's clothing"),
            product(2, "Cotton Jacket", 55.99, "men's clothing"),
            product(3, "Gold Bracelet", 695.0, "jewelery"),
            product(4, "Silver Ring", 10.99, "jewelery"),
            product(5, "Portable Hard Drive", 64.0, "electronics"),
            product(6, "Rain Jacket Windbreaker", 39.99, "women's clothing"),
            product(7, "Short Sleeve Shirt", 7.95, "women's clothing"),
        ]
    }

    fn criteria(category: CategoryFilter, sort: SortOrder, search: &str) -> FilterCriteria {
        FilterCriteria {
            category,
            sort,
            search: search.to_string(),
        }
    }

    fn ids(products: &[Product]) -> Vec<u32> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_default_criteria_is_identity() {
        let catalog = sample_catalog();
        let result = filter_and_sort(&catalog, &FilterCriteria::default());
        assert_eq!(result, catalog);
    }

    #[test]
    fn test_empty_catalog_yields_empty_list() {
        let result = filter_and_sort(&[], &criteria(CategoryFilter::All, SortOrder::PriceAscending, "x"));
        assert!(result.is_empty());
    }

    #[test]
    fn test_category_filter_is_exact_subset() {
        let catalog = sample_catalog();
        let selected = "jewelery";
        let result = filter_and_sort(
            &catalog,
            &criteria(CategoryFilter::Only(selected.to_string()), SortOrder::None, ""),
        );

        let expected: Vec<Product> = catalog
            .iter()
            .filter(|p| p.category == selected)
            .cloned()
            .collect();
        assert_eq!(result, expected);
    }

    #[test]
    fn test_search_shirt_across_all_categories() {
        let catalog = sample_catalog();
        let result = filter_and_sort(&catalog, &criteria(CategoryFilter::All, SortOrder::None, "shirt"));
        assert_eq!(ids(&result), vec![1, 7]);
    }

    #[test]
    fn test_search_is_case_insensitive_and_checks_all_fields() {
        let catalog = sample_catalog();

        let by_title = filter_and_sort(&catalog, &criteria(CategoryFilter::All, SortOrder::None, "JACKET"));
        assert_eq!(ids(&by_title), vec![2, 6]);

        // "women's clothing" contains "men's clothing" as a substring
        let by_category = filter_and_sort(&catalog, &criteria(CategoryFilter::All, SortOrder::None, "men's"));
        assert_eq!(ids(&by_category), vec![1, 2, 6, 7]);

        let by_description = filter_and_sort(
            &catalog,
            &criteria(CategoryFilter::All, SortOrder::None, "description of silver"),
        );
        assert_eq!(ids(&by_description), vec![4]);
    }

    #[test]
    fn test_category_and_search_combine() {
        let catalog = sample_catalog();
        let result = filter_and_sort(
            &catalog,
            &criteria(
                CategoryFilter::Only("women's clothing".to_string()),
                SortOrder::None,
                "shirt",
            ),
        );
        assert_eq!(ids(&result), vec![7]);
    }

    #[test]
    fn test_sort_ascending_and_descending_are_reverse() {
        let catalog = sample_catalog();

        let asc = filter_and_sort(&catalog, &criteria(CategoryFilter::All, SortOrder::PriceAscending, ""));
        let desc = filter_and_sort(&catalog, &criteria(CategoryFilter::All, SortOrder::PriceDescending, ""));

        let asc_prices: Vec<f64> = asc.iter().map(|p| p.price).collect();
        let mut desc_prices: Vec<f64> = desc.iter().map(|p| p.price).collect();
        desc_prices.reverse();

        assert_eq!(asc_prices, desc_prices);
        assert!(asc_prices.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_sort_is_stable_on_price_ties() {
        let catalog = vec![
            product(10, "A", 5.0, "x"),
            product(11, "B", 1.0, "x"),
            product(12, "C", 5.0, "x"),
            product(13, "D", 1.0, "x"),
        ];

        let asc = filter_and_sort(&catalog, &criteria(CategoryFilter::All, SortOrder::PriceAscending, ""));
        assert_eq!(ids(&asc), vec![11, 13, 10, 12]);

        let desc = filter_and_sort(&catalog, &criteria(CategoryFilter::All, SortOrder::PriceDescending, ""));
        assert_eq!(ids(&desc), vec![10, 12, 11, 13]);
    }

    #[test]
    fn test_source_catalog_is_not_mutated() {
        let catalog = sample_catalog();
        let snapshot = catalog.clone();
        let _ = filter_and_sort(&catalog, &criteria(CategoryFilter::All, SortOrder::PriceDescending, "a"));
        assert_eq!(catalog, snapshot);
    }

    #[test]
    fn test_unique_categories_sorted() {
        let categories = unique_categories(&sample_catalog());
        assert_eq!(
            categories,
            vec!["electronics", "jewelery", "men's clothing", "women's clothing"]
        );
    }
}
