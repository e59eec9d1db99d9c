use crate::models::place::Place;

/// Something the search box can match against.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

impl Searchable for Place {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.location, &self.description]
    }
}

/// Case-insensitive substring match on any search field. An empty query
/// matches everything.
pub fn matches<T: Searchable>(item: &T, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    item.search_fields()
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Items matching `query`, in their original order.
pub fn filter<T: Searchable + Clone>(items: &[T], query: &str) -> Vec<T> {
    items
        .iter()
        .filter(|item| matches(*item, query))
        .cloned()
        .collect()
}
