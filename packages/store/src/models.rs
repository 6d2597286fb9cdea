//! # Domain records fetched from the LibraNet API
//!
//! The catalog, reservation, loan and user records the views display. They are
//! deserialised as the backend sends them and never validated or cached on the
//! client: each view fetches, renders and discards them.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Book`] | A catalog entry: bibliographic fields, prices, stock, free-text classification (comma separated) and tags, optional cover image path. |
//! | [`Reservation`] | A paid or pending reservation of a book for a date range. Older records name the book `livre_id`, newer ones `book_id`. |
//! | [`Loan`] | A physical loan created from a reservation, with due date, optional return date and late fine. |
//! | [`LibraryUser`] | A user account as listed in the back-office. |
//!
//! ## Helper functions
//!
//! - [`display_date`]: renders an ISO date or date-time in the visitor's language,
//!   falling back to the raw text when it does not parse.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::preferences::Language;

/// A catalog entry.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub titre: String,
    #[serde(default)]
    pub auteur: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub annee_publication: Option<i32>,
    #[serde(default)]
    pub purchase_price: Option<f64>,
    #[serde(default)]
    pub reservation_price: Option<f64>,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub classification: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Book {
    pub fn is_available(&self) -> bool {
        self.stock > 0
    }

    /// Classification labels, or `["Unclassified"]` when the book has none.
    pub fn classifications(&self) -> Vec<String> {
        let labels: Vec<String> = self
            .classification
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(String::from)
            .collect();
        if labels.is_empty() {
            vec!["Unclassified".to_string()]
        } else {
            labels
        }
    }
}

/// A reservation of one book by one user.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub livre_id: Option<String>,
    #[serde(default)]
    pub book_id: Option<String>,
    #[serde(default)]
    pub date_debut: String,
    #[serde(default)]
    pub date_fin: String,
    #[serde(default)]
    pub status: String,
}

impl Reservation {
    /// Status the payment provider reports once checkout succeeded.
    pub const PAID: &'static str = "success";

    /// The reserved book, whichever field the backend used.
    pub fn book_ref(&self) -> Option<&str> {
        self.book_id
            .as_deref()
            .or(self.livre_id.as_deref())
            .filter(|id| !id.is_empty())
    }

    pub fn is_paid(&self) -> bool {
        self.status == Self::PAID
    }
}

/// A loan of a physical copy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub book_id: Option<String>,
    #[serde(default)]
    pub loan_date: String,
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub return_date: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub fine: f64,
    #[serde(default)]
    pub fine_paid: bool,
}

impl Loan {
    pub fn is_returned(&self) -> bool {
        self.return_date.as_deref().is_some_and(|d| !d.is_empty())
    }

    /// Fine still owed, if any.
    pub fn outstanding_fine(&self) -> Option<f64> {
        (self.fine > 0.0 && !self.fine_paid).then_some(self.fine)
    }
}

/// A user account as the back-office lists it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LibraryUser {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub nom: String,
    #[serde(default)]
    pub prenom: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
}

impl LibraryUser {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.prenom, self.nom).trim().to_string()
    }
}

/// Render an ISO date or date-time for display.
pub fn display_date(raw: &str, language: Language) -> String {
    let raw = raw.trim();
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));
    match date {
        Ok(date) => match language {
            Language::Fr => date.format("%d/%m/%Y").to_string(),
            Language::En => date.format("%m/%d/%Y").to_string(),
        },
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_from_sparse_json() {
        let book: Book = serde_json::from_str(
            r#"{"id":"b1","titre":"Les Misérables","auteur":"Hugo","stock":0,"tags":["classic"]}"#,
        )
        .unwrap();
        assert_eq!(book.titre, "Les Misérables");
        assert!(!book.is_available());
        assert_eq!(book.classifications(), vec!["Unclassified"]);
        assert!(book.image_url.is_none());
    }

    #[test]
    fn test_book_classifications_split_and_trim() {
        let book = Book {
            classification: Some(" Roman, Histoire ,, ".to_string()),
            ..Default::default()
        };
        assert_eq!(book.classifications(), vec!["Roman", "Histoire"]);
    }

    #[test]
    fn test_reservation_book_ref_prefers_book_id() {
        let resv: Reservation = serde_json::from_str(
            r#"{"_id":"r1","user_id":"u1","livre_id":"old","book_id":"new","date_debut":"2025-01-01","date_fin":"2025-01-05","status":"success"}"#,
        )
        .unwrap();
        assert_eq!(resv.id, "r1");
        assert_eq!(resv.book_ref(), Some("new"));
        assert!(resv.is_paid());

        let legacy = Reservation {
            livre_id: Some("old".to_string()),
            ..Default::default()
        };
        assert_eq!(legacy.book_ref(), Some("old"));
        assert_eq!(Reservation::default().book_ref(), None);
    }

    #[test]
    fn test_loan_fine_and_return() {
        let loan: Loan = serde_json::from_str(
            r#"{"_id":"l1","user_id":"u1","book_id":"b1","loan_date":"2025-01-01T09:00:00","due_date":"2025-01-15T09:00:00","return_date":null,"status":"active","fine":2.5,"fine_paid":false}"#,
        )
        .unwrap();
        assert!(!loan.is_returned());
        assert_eq!(loan.outstanding_fine(), Some(2.5));

        let paid = Loan {
            fine: 2.5,
            fine_paid: true,
            return_date: Some("2025-01-20".to_string()),
            ..Default::default()
        };
        assert!(paid.is_returned());
        assert_eq!(paid.outstanding_fine(), None);
    }

    #[test]
    fn test_display_date_formats() {
        assert_eq!(display_date("2025-03-09", Language::Fr), "09/03/2025");
        assert_eq!(display_date("2025-03-09T14:30:00.123", Language::En), "03/09/2025");
        assert_eq!(display_date("2025-03-09T14:30:00+02:00", Language::Fr), "09/03/2025");
        assert_eq!(display_date("next tuesday", Language::Fr), "next tuesday");
    }

    #[test]
    fn test_user_full_name() {
        let user = LibraryUser {
            prenom: "Ada".to_string(),
            nom: "Lovelace".to_string(),
            ..Default::default()
        };
        assert_eq!(user.full_name(), "Ada Lovelace");
        assert_eq!(LibraryUser::default().full_name(), "");
    }
}
