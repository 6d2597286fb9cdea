//! Back-office dashboard figures computed from the full catalog.

use std::collections::HashMap;

use store::{Book, LibraryUser};

/// How many entries each breakdown keeps.
pub const TOP_N: usize = 8;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardStats {
    pub total_books: usize,
    pub available_books: usize,
    pub reserved_books: usize,
    pub total_users: usize,
    pub average_reservation_price: f64,
    pub classifications: Vec<(String, usize)>,
    pub tags: Vec<(String, usize)>,
}

impl DashboardStats {
    pub fn compute(books: &[Book], users: &[LibraryUser]) -> Self {
        let available_books = books.iter().filter(|b| b.is_available()).count();
        let average_reservation_price = if books.is_empty() {
            0.0
        } else {
            books
                .iter()
                .map(|b| b.reservation_price.unwrap_or(0.0))
                .sum::<f64>()
                / books.len() as f64
        };
        Self {
            total_books: books.len(),
            available_books,
            reserved_books: books.len() - available_books,
            total_users: users.len(),
            average_reservation_price,
            classifications: top_counts(books.iter().flat_map(Book::classifications), TOP_N),
            tags: top_counts(books.iter().flat_map(|b| b.tags.iter().cloned()), TOP_N),
        }
    }
}

/// Count occurrences and keep the `n` most frequent, ties by name.
pub fn top_counts(labels: impl IntoIterator<Item = String>, n: usize) -> Vec<(String, usize)> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for label in labels {
        *counts.entry(label).or_default() += 1;
    }
    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(stock: i64, price: Option<f64>, classification: Option<&str>, tags: &[&str]) -> Book {
        Book {
            stock,
            reservation_price: price,
            classification: classification.map(String::from),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_compute() {
        let books = vec![
            book(2, Some(4.0), Some("Roman, Histoire"), &["classique"]),
            book(0, Some(2.0), Some("Roman"), &["classique", "xixe"]),
            book(1, None, None, &[]),
        ];
        let users = vec![LibraryUser::default(); 4];
        let stats = DashboardStats::compute(&books, &users);

        assert_eq!(stats.total_books, 3);
        assert_eq!(stats.available_books, 2);
        assert_eq!(stats.reserved_books, 1);
        assert_eq!(stats.total_users, 4);
        assert!((stats.average_reservation_price - 2.0).abs() < f64::EPSILON);
        assert_eq!(stats.classifications[0], ("Roman".to_string(), 2));
        assert!(stats
            .classifications
            .contains(&("Unclassified".to_string(), 1)));
        assert_eq!(stats.tags[0], ("classique".to_string(), 2));
    }

    #[test]
    fn test_empty_catalog() {
        let stats = DashboardStats::compute(&[], &[]);
        assert_eq!(stats.average_reservation_price, 0.0);
        assert!(stats.tags.is_empty());
    }

    #[test]
    fn test_top_counts_truncates() {
        let labels = (0..12).map(|i| format!("t{i:02}"));
        let top = top_counts(labels, TOP_N);
        assert_eq!(top.len(), TOP_N);
        assert_eq!(top[0].0, "t00");
    }
}
