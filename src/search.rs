//! Case-insensitive substring search over name and email.

pub trait Searchable {
    fn name(&self) -> &str;
    fn email(&self) -> &str;
}

pub fn matches<R: Searchable + ?Sized>(record: &R, query: &str) -> bool {
    let query = query.to_lowercase();
    query.is_empty() || folded_match(record, &query)
}

fn folded_match<R: Searchable + ?Sized>(record: &R, folded_query: &str) -> bool {
    record.name().to_lowercase().contains(folded_query)
        || record.email().to_lowercase().contains(folded_query)
}

/// Records whose name or email contains `query`, in their original order.
/// An empty query keeps everything.
pub fn filter_records<'r, R: Searchable>(records: &'r [R], query: &str) -> Vec<&'r R> {
    let query = query.to_lowercase();

    records
        .iter()
        .filter(|record| query.is_empty() || folded_match(*record, &query))
        .collect()
}
