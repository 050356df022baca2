//! Product name search
//!
//! Case-insensitive substring match on the trimmed query. No tokenization or
//! ranking; input order is preserved.

use shared::Product;

/// Normalized form of a query, `None` when it matches everything
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
}

/// Borrowing variant of [`search_products`]
pub fn search_refs<'a, I>(products: I, query: &str) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    match normalize_query(query) {
        None => products.into_iter().collect(),
        Some(needle) => products
            .into_iter()
            .filter(|p| p.material_name.to_lowercase().contains(&needle))
            .collect(),
    }
}

/// Products whose name contains `query`; an empty or blank query returns all
pub fn search_products(products: &[Product], query: &str) -> Vec<Product> {
    search_refs(products, query).into_iter().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::filter::select_by_category;
    use crate::catalog::tree::CategoryIndex;
    use shared::{CategoryNode, CategoryPath, ROOT_PARENT_ID};

    fn products() -> Vec<Product> {
        vec![
            Product::new(1, 40, "Бетон М300"),
            Product::new(2, 40, "Арматура А500С"),
            Product::new(3, 41, "бетон М350 на гравии"),
            Product::new(4, 41, "БЕТОНОСМЕСИТЕЛЬ"),
            Product::new(5, 50, "Cement CEM I 42,5"),
        ]
    }

    fn ids(products: &[&Product]) -> Vec<i64> {
        products.iter().map(|p| p.material_id).collect()
    }

    #[test]
    fn test_empty_query_is_identity() {
        let all = products();
        assert_eq!(search_products(&all, ""), all);
        assert_eq!(search_products(&all, "   \t"), all);
    }

    #[test]
    fn test_case_insensitive_cyrillic() {
        let all = products();
        assert_eq!(ids(&search_refs(&all, "БЕТОН")), vec![1, 3, 4]);
        assert_eq!(ids(&search_refs(&all, "  бетон ")), vec![1, 3, 4]);
        assert_eq!(ids(&search_refs(&all, "cem")), vec![5]);
    }

    #[test]
    fn test_substring_not_tokens() {
        let all = products();
        assert_eq!(ids(&search_refs(&all, "м300")), vec![1]);
        assert_eq!(ids(&search_refs(&all, "на грав")), vec![3]);
        assert!(search_refs(&all, "бетон арматура").is_empty());
    }

    #[test]
    fn test_category_and_search_commute() {
        let categories = vec![
            CategoryNode::new(10, ROOT_PARENT_ID, "Dept"),
            CategoryNode::new(20, 10, "Sec"),
            CategoryNode::new(30, 20, "Sub"),
            CategoryNode::new(40, 30, "Grp"),
            CategoryNode::new(41, 30, "Grp 2"),
        ];
        let index = CategoryIndex::build(&categories);
        let all = products();

        for selector in [
            CategoryPath::all(),
            CategoryPath::department(10),
            CategoryPath::group(40),
            CategoryPath::group(41),
        ] {
            for query in ["", "бетон", "БЕТОН", "а", "zzz"] {
                let category_first =
                    search_refs(select_by_category(&all, &index, &selector).unwrap(), query);
                let search_first: Vec<Product> = search_products(&all, query);
                let search_first = select_by_category(&search_first, &index, &selector).unwrap();
                assert_eq!(ids(&category_first), ids(&search_first));
            }
        }
    }
}
