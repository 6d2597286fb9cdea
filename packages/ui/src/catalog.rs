//! Catalog list helpers: local filtering, pagination, tag selection and the
//! carousel window.

use store::Book;

/// Books per back-office page (three rows of three).
pub const PAGE_SIZE: usize = 9;

/// Case-insensitive match on title, author or genre.
pub fn matches_term(book: &Book, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    book.titre.to_lowercase().contains(&term)
        || book.auteur.to_lowercase().contains(&term)
        || book
            .genre
            .as_deref()
            .is_some_and(|g| g.to_lowercase().contains(&term))
}

pub fn filter_books(books: &[Book], term: &str) -> Vec<Book> {
    books
        .iter()
        .filter(|b| matches_term(b, term))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based, clamped into range.
    pub number: usize,
    pub total_pages: usize,
}

/// Slice out page `number` (1-based). Out-of-range numbers clamp to the
/// nearest page; an empty list has one empty page.
pub fn paginate<T: Clone>(items: &[T], number: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let total_pages = items.len().div_ceil(per_page).max(1);
    let number = number.clamp(1, total_pages);
    let start = (number - 1) * per_page;
    let end = (start + per_page).min(items.len());
    Page {
        items: items.get(start..end).map(<[T]>::to_vec).unwrap_or_default(),
        number,
        total_pages,
    }
}

/// Select `tag` if unselected, otherwise drop it.
pub fn toggle_tag(selected: &mut Vec<String>, tag: &str) {
    if let Some(pos) = selected.iter().position(|t| t == tag) {
        selected.remove(pos);
    } else {
        selected.push(tag.to_string());
    }
}

/// Title of the book with `id`, if the list has it.
pub fn title_of<'a>(books: &'a [Book], id: Option<&str>) -> Option<&'a str> {
    let id = id?;
    books.iter().find(|b| b.id == id).map(|b| b.titre.as_str())
}

/// Indices of the `visible` slides starting at `start`, wrapping around.
pub fn carousel_window(len: usize, start: usize, visible: usize) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }
    (0..visible.min(len)).map(|i| (start + i) % len).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(titre: &str, auteur: &str, genre: Option<&str>) -> Book {
        Book {
            id: titre.to_lowercase(),
            titre: titre.into(),
            auteur: auteur.into(),
            genre: genre.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_filter_by_title_author_genre() {
        let books = vec![
            book("Dune", "Frank Herbert", Some("Science-fiction")),
            book("Germinal", "Émile Zola", None),
            book("Foundation", "Isaac Asimov", Some("science-fiction")),
        ];
        assert_eq!(filter_books(&books, "").len(), 3);
        assert_eq!(filter_books(&books, "ZOLA")[0].titre, "Germinal");
        assert_eq!(filter_books(&books, "science").len(), 2);
        assert!(filter_books(&books, "tolkien").is_empty());
    }

    #[test]
    fn test_paginate() {
        let items: Vec<u32> = (1..=20).collect();
        let first = paginate(&items, 1, PAGE_SIZE);
        assert_eq!(first.items, (1..=9).collect::<Vec<_>>());
        assert_eq!(first.total_pages, 3);

        let last = paginate(&items, 3, PAGE_SIZE);
        assert_eq!(last.items, vec![19, 20]);

        let beyond = paginate(&items, 10, PAGE_SIZE);
        assert_eq!(beyond.number, 3);

        let empty = paginate::<u32>(&[], 1, PAGE_SIZE);
        assert_eq!(empty.total_pages, 1);
        assert!(empty.items.is_empty());
    }

    #[test]
    fn test_toggle_tag() {
        let mut selected = Vec::new();
        toggle_tag(&mut selected, "roman");
        toggle_tag(&mut selected, "poésie");
        toggle_tag(&mut selected, "roman");
        assert_eq!(selected, vec!["poésie".to_string()]);
    }

    #[test]
    fn test_title_of() {
        let books = vec![book("Dune", "Frank Herbert", None)];
        assert_eq!(title_of(&books, Some("dune")), Some("Dune"));
        assert_eq!(title_of(&books, Some("other")), None);
        assert_eq!(title_of(&books, None), None);
    }

    #[test]
    fn test_carousel_window_wraps() {
        assert_eq!(carousel_window(5, 3, 3), vec![3, 4, 0]);
        assert_eq!(carousel_window(2, 0, 4), vec![0, 1]);
        assert!(carousel_window(0, 0, 3).is_empty());
    }
}
