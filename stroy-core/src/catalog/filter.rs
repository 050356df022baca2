//! Category filter
//!
//! A selector resolves to its most specific id; the product list is then
//! narrowed to products filed anywhere below that node.

use super::tree::CategoryIndex;
use shared::{CatalogError, CatalogResult, CategoryNode, CategoryPath, Product};
use std::collections::HashSet;

/// Ids reachable downward from `root`, `root` included.
///
/// An id absent from the index yields `{root}`. Reaching a node a second time
/// means the list is not a tree and fails with `MalformedCatalog`.
pub fn descendant_closure(index: &CategoryIndex, root: i64) -> CatalogResult<HashSet<i64>> {
    let mut closure = HashSet::from([root]);
    let mut stack = vec![root];

    while let Some(id) = stack.pop() {
        for &child in index.children(id) {
            if !closure.insert(child) {
                return Err(CatalogError::MalformedCatalog(format!(
                    "category {child} reached twice below {root}"
                )));
            }
            stack.push(child);
        }
    }

    Ok(closure)
}

/// Borrowing variant of [`filter_products`] over a prebuilt index
pub fn select_by_category<'a>(
    products: &'a [Product],
    index: &CategoryIndex,
    selector: &CategoryPath,
) -> CatalogResult<Vec<&'a Product>> {
    let Some((level, id)) = selector.most_specific() else {
        return Ok(products.iter().collect());
    };

    let closure = descendant_closure(index, id)?;
    let selected: Vec<&Product> = products
        .iter()
        .filter(|p| closure.contains(&p.material_tree_id))
        .collect();

    tracing::debug!(
        level = %level,
        id,
        categories = closure.len(),
        matched = selected.len(),
        "Category filter applied"
    );
    Ok(selected)
}

/// Products filed below the selector's most specific category.
///
/// An empty selector returns the list unchanged.
pub fn filter_products(
    products: &[Product],
    categories: &[CategoryNode],
    selector: &CategoryPath,
) -> CatalogResult<Vec<Product>> {
    if selector.is_empty() {
        return Ok(products.to_vec());
    }
    let index = CategoryIndex::build(categories);
    Ok(select_by_category(products, &index, selector)?
        .into_iter()
        .cloned()
        .collect())
}
