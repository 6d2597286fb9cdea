//! Request and response bodies of the LibraNet routes.

use serde::{Deserialize, Serialize};
use store::{Book, Loan};

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub mot_de_passe: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignupRequest {
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub mot_de_passe: String,
}

/// Free-form acknowledgement some routes return.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

impl MessageResponse {
    pub fn text(&self) -> Option<&str> {
        self.message.as_deref().or(self.detail.as_deref())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub results: Vec<Book>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TagsResponse {
    #[serde(default)]
    pub all_tags: Vec<String>,
}

/// Catalog search: free text and/or tags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchQuery {
    pub text: String,
    pub tags: Vec<String>,
}

impl SearchQuery {
    /// No text and no tags: the caller wants the whole catalog.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty() && self.tags.is_empty()
    }

    /// Query-string pairs, tags repeated once per value.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        let text = self.text.trim();
        if !text.is_empty() {
            pairs.push(("query", text.to_string()));
        }
        for tag in &self.tags {
            pairs.push(("tags", tag.clone()));
        }
        pairs.push(("search_in_classification", "false".to_string()));
        pairs
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReservationRequest {
    pub user_id: String,
    pub livre_id: String,
    pub date_debut: String,
    pub date_fin: String,
}

/// Hosted payment page to send the browser to.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutResponse {
    pub checkout_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateLoanRequest {
    pub reservation_id: String,
    pub book_id: String,
    pub user_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ReturnLoanResponse {
    pub loan: Loan,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PasswordChange {
    pub old_password: String,
    pub new_password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileUpdate {
    pub prenom: String,
    pub nom: String,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct ChatRequest<'a> {
    pub question: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ChatResponse {
    pub answer: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClassifyRequest {
    pub book_id: String,
    pub title: String,
    pub description: String,
}

/// A cover image picked in the browser.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Fields of the create/edit book form, already parsed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookForm {
    pub titre: String,
    pub auteur: String,
    pub description: String,
    pub purchase_price: f64,
    pub reservation_price: f64,
    pub stock: i64,
    pub classification: String,
    pub tags: Vec<String>,
}

impl BookForm {
    /// Text fields in the order the backend's form parser lists them.
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("titre", self.titre.clone()),
            ("auteur", self.auteur.clone()),
            ("description", self.description.clone()),
            ("purchase_price", self.purchase_price.to_string()),
            ("reservation_price", self.reservation_price.to_string()),
            ("stock", self.stock.to_string()),
        ];
        if !self.classification.trim().is_empty() {
            fields.push(("classification", self.classification.trim().to_string()));
        }
        for tag in &self.tags {
            fields.push(("tags[]", tag.clone()));
        }
        fields
    }

    pub(crate) fn into_multipart(
        self,
        image: Option<ImageUpload>,
    ) -> Result<reqwest::multipart::Form, reqwest::Error> {
        let mut form = reqwest::multipart::Form::new();
        for (name, value) in self.text_fields() {
            form = form.text(name, value);
        }
        if let Some(image) = image {
            let mut part = reqwest::multipart::Part::bytes(image.bytes).file_name(image.file_name);
            if let Some(mime) = image.content_type {
                part = part.mime_str(&mime)?;
            }
            form = form.part("image", part);
        }
        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_pairs() {
        let query = SearchQuery {
            text: "  dune ".to_string(),
            tags: vec!["sf".to_string(), "classic".to_string()],
        };
        assert_eq!(
            query.to_pairs(),
            vec![
                ("query", "dune".to_string()),
                ("tags", "sf".to_string()),
                ("tags", "classic".to_string()),
                ("search_in_classification", "false".to_string()),
            ]
        );
        assert!(!query.is_empty());
    }

    #[test]
    fn test_search_tags_only() {
        let query = SearchQuery {
            text: "   ".to_string(),
            tags: vec!["poetry".to_string()],
        };
        assert_eq!(query.to_pairs()[0], ("tags", "poetry".to_string()));
        assert!(SearchQuery::default().is_empty());
    }

    #[test]
    fn test_book_form_fields() {
        let form = BookForm {
            titre: "Dune".to_string(),
            auteur: "Herbert".to_string(),
            description: String::new(),
            purchase_price: 12.5,
            reservation_price: 2.0,
            stock: 3,
            classification: String::new(),
            tags: vec!["sf".to_string()],
        };
        let fields = form.text_fields();
        assert!(fields.contains(&("purchase_price", "12.5".to_string())));
        assert!(fields.contains(&("reservation_price", "2".to_string())));
        assert!(fields.contains(&("tags[]", "sf".to_string())));
        assert!(!fields.iter().any(|(name, _)| *name == "classification"));
    }

    #[test]
    fn test_login_request_field_names() {
        let body = serde_json::to_value(LoginRequest {
            email: "a@b.c".to_string(),
            mot_de_passe: "secret".to_string(),
        })
        .unwrap();
        assert_eq!(body["mot_de_passe"], "secret");
    }

    #[test]
    fn test_message_response_text() {
        let resp: MessageResponse = serde_json::from_str(r#"{"detail":"Email verified"}"#).unwrap();
        assert_eq!(resp.text(), Some("Email verified"));
        assert_eq!(MessageResponse::default().text(), None);
    }
}
