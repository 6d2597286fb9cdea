//! Local checks run before a form is submitted.
//!
//! Each validator turns raw input into the request payload the client sends,
//! or a typed error the view renders in the current language.

use api::{BookForm, ReservationRequest, SignupRequest};
use chrono::NaiveDate;
use store::{Book, Language};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("missing field: {0}")]
    MissingField(&'static str),
    #[error("passwords do not match")]
    PasswordMismatch,
}

impl RegistrationError {
    pub fn message(&self, language: Language) -> String {
        match self {
            Self::MissingField(field) => {
                format!("{} : {field}", language.pick("Champ requis", "Required field"))
            }
            Self::PasswordMismatch => language
                .pick("Les mots de passe ne correspondent pas", "Passwords do not match")
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registration {
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl Registration {
    pub fn validate(&self) -> Result<SignupRequest, RegistrationError> {
        for (name, value) in [
            ("prenom", &self.prenom),
            ("nom", &self.nom),
            ("email", &self.email),
            ("password", &self.password),
        ] {
            if value.trim().is_empty() {
                return Err(RegistrationError::MissingField(name));
            }
        }
        if self.password != self.confirm_password {
            return Err(RegistrationError::PasswordMismatch);
        }
        Ok(SignupRequest {
            nom: self.nom.trim().to_string(),
            prenom: self.prenom.trim().to_string(),
            email: self.email.trim().to_string(),
            mot_de_passe: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReservationError {
    #[error("both dates are required")]
    MissingDates,
    #[error("invalid date: {0}")]
    InvalidDate(String),
    #[error("end date is before start date")]
    EndBeforeStart,
}

impl ReservationError {
    pub fn message(&self, language: Language) -> String {
        match self {
            Self::MissingDates => language
                .pick(
                    "Veuillez choisir une date de début et de fin",
                    "Please select both start and end dates",
                )
                .to_string(),
            Self::InvalidDate(raw) => {
                format!("{} : {raw}", language.pick("Date invalide", "Invalid date"))
            }
            Self::EndBeforeStart => language
                .pick(
                    "La date de fin doit suivre la date de début",
                    "End date must not be before start date",
                )
                .to_string(),
        }
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, ReservationError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| ReservationError::InvalidDate(raw.to_string()))
}

/// Build a reservation for `book_id` between two `YYYY-MM-DD` dates.
pub fn reservation_request(
    user_id: &str,
    book_id: &str,
    start: &str,
    end: &str,
) -> Result<ReservationRequest, ReservationError> {
    if start.trim().is_empty() || end.trim().is_empty() {
        return Err(ReservationError::MissingDates);
    }
    let (from, to) = (parse_date(start)?, parse_date(end)?);
    if to < from {
        return Err(ReservationError::EndBeforeStart);
    }
    Ok(ReservationRequest {
        user_id: user_id.to_string(),
        livre_id: book_id.to_string(),
        date_debut: from.format("%Y-%m-%d").to_string(),
        date_fin: to.format("%Y-%m-%d").to_string(),
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookFormError {
    #[error("missing field: {0}")]
    MissingField(&'static str),
    #[error("{0} must be a non-negative number")]
    InvalidNumber(&'static str),
}

impl BookFormError {
    pub fn message(&self, language: Language) -> String {
        match self {
            Self::MissingField(field) => {
                format!("{} : {field}", language.pick("Champ requis", "Required field"))
            }
            Self::InvalidNumber(field) => format!(
                "{field} : {}",
                language.pick("nombre positif attendu", "expected a non-negative number")
            ),
        }
    }
}

/// Book editor state, with numbers kept as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookDraft {
    pub titre: String,
    pub auteur: String,
    pub description: String,
    pub purchase_price: String,
    pub reservation_price: String,
    pub stock: String,
    pub classification: String,
    pub tags: Vec<String>,
}

impl BookDraft {
    pub fn from_book(book: &Book) -> Self {
        let number = |v: Option<f64>| v.map(|v| v.to_string()).unwrap_or_default();
        Self {
            titre: book.titre.clone(),
            auteur: book.auteur.clone(),
            description: book.description.clone().unwrap_or_default(),
            purchase_price: number(book.purchase_price),
            reservation_price: number(book.reservation_price),
            stock: book.stock.to_string(),
            classification: book.classification.clone().unwrap_or_default(),
            tags: book.tags.clone(),
        }
    }

    /// Add a trimmed tag unless it is blank or already present.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    pub fn validate(&self) -> Result<BookForm, BookFormError> {
        if self.titre.trim().is_empty() {
            return Err(BookFormError::MissingField("titre"));
        }
        if self.auteur.trim().is_empty() {
            return Err(BookFormError::MissingField("auteur"));
        }
        Ok(BookForm {
            titre: self.titre.trim().to_string(),
            auteur: self.auteur.trim().to_string(),
            description: self.description.trim().to_string(),
            purchase_price: price(&self.purchase_price, "purchase_price")?,
            reservation_price: price(&self.reservation_price, "reservation_price")?,
            stock: stock(&self.stock)?,
            classification: self.classification.trim().to_string(),
            tags: self.tags.clone(),
        })
    }
}

fn price(raw: &str, field: &'static str) -> Result<f64, BookFormError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0.0);
    }
    match raw.replace(',', ".").parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(BookFormError::InvalidNumber(field)),
    }
}

fn stock(raw: &str) -> Result<i64, BookFormError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0);
    }
    match raw.parse::<i64>() {
        Ok(v) if v >= 0 => Ok(v),
        _ => Err(BookFormError::InvalidNumber("stock")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration() -> Registration {
        Registration {
            nom: "Curie".into(),
            prenom: " Marie ".into(),
            email: "marie@example.org".into(),
            password: "radium".into(),
            confirm_password: "radium".into(),
        }
    }

    #[test]
    fn test_registration() {
        let request = registration().validate().unwrap();
        assert_eq!(request.prenom, "Marie");
        assert_eq!(request.mot_de_passe, "radium");

        let mismatch = Registration {
            confirm_password: "polonium".into(),
            ..registration()
        };
        assert_eq!(mismatch.validate(), Err(RegistrationError::PasswordMismatch));
        assert_eq!(
            mismatch.validate().unwrap_err().message(Language::En),
            "Passwords do not match"
        );

        let blank = Registration {
            email: "  ".into(),
            ..registration()
        };
        assert_eq!(blank.validate(), Err(RegistrationError::MissingField("email")));
    }

    #[test]
    fn test_reservation_dates() {
        let request = reservation_request("u1", "b1", "2025-03-01", "2025-03-01").unwrap();
        assert_eq!(request.livre_id, "b1");
        assert_eq!(request.date_fin, "2025-03-01");

        assert_eq!(
            reservation_request("u1", "b1", "", "2025-03-01"),
            Err(ReservationError::MissingDates)
        );
        assert_eq!(
            reservation_request("u1", "b1", "2025-03-05", "2025-03-01"),
            Err(ReservationError::EndBeforeStart)
        );
        assert!(matches!(
            reservation_request("u1", "b1", "tomorrow", "2025-03-01"),
            Err(ReservationError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_book_draft_tags() {
        let mut draft = BookDraft::default();
        assert!(draft.add_tag(" fantasy "));
        assert!(!draft.add_tag("fantasy"));
        assert!(!draft.add_tag("   "));
        assert!(draft.add_tag("classic"));
        draft.remove_tag("fantasy");
        assert_eq!(draft.tags, vec!["classic".to_string()]);
    }

    #[test]
    fn test_book_draft_validation() {
        let draft = BookDraft {
            titre: "Dune".into(),
            auteur: "Frank Herbert".into(),
            purchase_price: "12,50".into(),
            reservation_price: "".into(),
            stock: "3".into(),
            ..Default::default()
        };
        let form = draft.validate().unwrap();
        assert_eq!(form.purchase_price, 12.5);
        assert_eq!(form.reservation_price, 0.0);
        assert_eq!(form.stock, 3);

        let negative = BookDraft {
            stock: "-1".into(),
            ..draft.clone()
        };
        assert_eq!(negative.validate(), Err(BookFormError::InvalidNumber("stock")));

        let untitled = BookDraft {
            titre: " ".into(),
            ..draft
        };
        assert_eq!(untitled.validate(), Err(BookFormError::MissingField("titre")));
    }

    #[test]
    fn test_draft_from_book() {
        let book = Book {
            id: "b1".into(),
            titre: "Dune".into(),
            auteur: "Frank Herbert".into(),
            purchase_price: Some(20.0),
            stock: 2,
            tags: vec!["sf".into()],
            ..Default::default()
        };
        let draft = BookDraft::from_book(&book);
        assert_eq!(draft.purchase_price, "20");
        assert_eq!(draft.reservation_price, "");
        assert_eq!(draft.validate().unwrap().tags, vec!["sf".to_string()]);
    }
}
