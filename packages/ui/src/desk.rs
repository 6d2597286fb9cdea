//! Clerk loan desk: paid reservations waiting for pickup, and loans.

use std::collections::{BTreeSet, HashMap};

use store::{Book, LibraryUser, Loan, Reservation};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeskTab {
    #[default]
    Reservations,
    ActiveLoans,
    ReturnedLoans,
}

/// Everything the desk shows, with the books and users it refers to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoanDesk {
    pub reservations: Vec<Reservation>,
    pub loans: Vec<Loan>,
    pub books: HashMap<String, Book>,
    pub users: HashMap<String, LibraryUser>,
}

impl LoanDesk {
    pub fn new(reservations: Vec<Reservation>, loans: Vec<Loan>) -> Self {
        Self {
            reservations,
            loans,
            ..Default::default()
        }
    }

    /// Book ids and user ids referenced by reservations and loans, deduplicated.
    pub fn referenced_ids(&self) -> (Vec<String>, Vec<String>) {
        let mut books = BTreeSet::new();
        let mut users = BTreeSet::new();
        for r in &self.reservations {
            books.extend(r.book_ref().map(String::from));
            users.extend(r.user_id.clone().filter(|id| !id.is_empty()));
        }
        for l in &self.loans {
            books.extend(l.book_id.clone().filter(|id| !id.is_empty()));
            users.extend(l.user_id.clone().filter(|id| !id.is_empty()));
        }
        (books.into_iter().collect(), users.into_iter().collect())
    }

    pub fn book(&self, id: Option<&str>) -> Option<&Book> {
        id.and_then(|id| self.books.get(id))
    }

    pub fn user(&self, id: Option<&str>) -> Option<&LibraryUser> {
        id.and_then(|id| self.users.get(id))
    }

    /// Paid reservations matching `term`.
    pub fn pending_reservations(&self, term: &str) -> Vec<&Reservation> {
        let term = term.trim().to_lowercase();
        self.reservations
            .iter()
            .filter(|r| r.is_paid())
            .filter(|r| self.matches(&term, r.book_ref(), r.user_id.as_deref(), None))
            .collect()
    }

    pub fn active_loans(&self, term: &str) -> Vec<&Loan> {
        self.loans_where(term, false)
    }

    pub fn returned_loans(&self, term: &str) -> Vec<&Loan> {
        self.loans_where(term, true)
    }

    fn loans_where(&self, term: &str, returned: bool) -> Vec<&Loan> {
        let term = term.trim().to_lowercase();
        self.loans
            .iter()
            .filter(|l| l.is_returned() == returned)
            .filter(|l| {
                self.matches(&term, l.book_id.as_deref(), l.user_id.as_deref(), Some(&l.status))
            })
            .collect()
    }

    fn matches(&self, term: &str, book_id: Option<&str>, user_id: Option<&str>, status: Option<&str>) -> bool {
        if term.is_empty() {
            return true;
        }
        let hit = |s: &str| s.to_lowercase().contains(term);
        self.book(book_id).is_some_and(|b| hit(&b.titre) || hit(&b.auteur))
            || self.user(user_id).is_some_and(|u| hit(&u.prenom) || hit(&u.nom))
            || user_id.is_some_and(hit)
            || status.is_some_and(hit)
    }

    /// A reservation became a loan.
    pub fn loan_created(&mut self, reservation_id: &str, loan: Loan) {
        self.reservations.retain(|r| r.id != reservation_id);
        self.loans.push(loan);
    }

    /// Replace a loan with the backend's returned version.
    pub fn loan_returned(&mut self, loan: Loan) {
        if let Some(slot) = self.loans.iter_mut().find(|l| l.id == loan.id) {
            *slot = loan;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reservation(id: &str, user: &str, book: &str, status: &str) -> Reservation {
        Reservation {
            id: id.into(),
            user_id: Some(user.into()),
            livre_id: Some(book.into()),
            status: status.into(),
            ..Default::default()
        }
    }

    fn loan(id: &str, user: &str, book: &str, returned: Option<&str>) -> Loan {
        Loan {
            id: id.into(),
            user_id: Some(user.into()),
            book_id: Some(book.into()),
            return_date: returned.map(String::from),
            status: if returned.is_some() { "returned" } else { "active" }.into(),
            ..Default::default()
        }
    }

    fn desk() -> LoanDesk {
        let mut desk = LoanDesk::new(
            vec![
                reservation("r1", "u1", "b1", "success"),
                reservation("r2", "u2", "b2", "pending"),
            ],
            vec![loan("l1", "u2", "b2", None), loan("l2", "u1", "b1", Some("2025-01-10"))],
        );
        desk.books.insert(
            "b1".into(),
            Book {
                id: "b1".into(),
                titre: "Les Misérables".into(),
                auteur: "Victor Hugo".into(),
                ..Default::default()
            },
        );
        desk.users.insert(
            "u2".into(),
            LibraryUser {
                id: "u2".into(),
                prenom: "Jeanne".into(),
                nom: "Valjean".into(),
                ..Default::default()
            },
        );
        desk
    }

    #[test]
    fn test_partitions() {
        let desk = desk();
        let pending = desk.pending_reservations("");
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, "r1");
        assert_eq!(desk.active_loans("")[0].id, "l1");
        assert_eq!(desk.returned_loans("")[0].id, "l2");
    }

    #[test]
    fn test_search() {
        let desk = desk();
        assert_eq!(desk.pending_reservations("hugo").len(), 1);
        assert!(desk.pending_reservations("valjean").is_empty());
        assert_eq!(desk.active_loans("JEANNE").len(), 1);
        assert_eq!(desk.returned_loans("returned").len(), 1);
        assert_eq!(desk.returned_loans("u1").len(), 1);
        assert!(desk.active_loans("u1").is_empty());
    }

    #[test]
    fn test_referenced_ids() {
        let (books, users) = desk().referenced_ids();
        assert_eq!(books, vec!["b1".to_string(), "b2".to_string()]);
        assert_eq!(users, vec!["u1".to_string(), "u2".to_string()]);
    }

    #[test]
    fn test_create_and_return() {
        let mut desk = desk();
        desk.loan_created("r1", loan("l3", "u1", "b1", None));
        assert!(desk.pending_reservations("").is_empty());
        assert_eq!(desk.active_loans("").len(), 2);

        desk.loan_returned(loan("l3", "u1", "b1", Some("2025-02-01")));
        assert_eq!(desk.active_loans("").len(), 1);
        assert_eq!(desk.returned_loans("").len(), 2);
    }
}
