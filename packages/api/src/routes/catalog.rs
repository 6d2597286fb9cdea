use reqwest::Method;
use store::Book;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{BookForm, ImageUpload, SearchQuery, SearchResponse, TagsResponse};

impl ApiClient {
    pub async fn list_books(&self) -> Result<Vec<Book>, ApiError> {
        self.send_json(self.anonymous_request(Method::GET, "/livres/get-all"))
            .await
    }

    pub async fn get_book(&self, id: &str) -> Result<Book, ApiError> {
        self.send_json(self.anonymous_request(Method::GET, &format!("/livres/get-by-id/{id}")))
            .await
    }

    /// Full-text and tag search. An empty query lists the whole catalog.
    pub async fn search_books(&self, query: &SearchQuery) -> Result<Vec<Book>, ApiError> {
        if query.is_empty() {
            return self.list_books().await;
        }
        let response: SearchResponse = self
            .send_json(
                self.anonymous_request(Method::GET, "/search")
                    .query(&query.to_pairs()),
            )
            .await?;
        Ok(response.results)
    }

    /// Every tag used in the catalog.
    pub async fn all_tags(&self) -> Result<Vec<String>, ApiError> {
        let response: TagsResponse = self
            .send_json(self.anonymous_request(Method::GET, "/debug/all-tags"))
            .await?;
        Ok(response.all_tags)
    }

    pub async fn create_book(&self, form: BookForm, image: Option<ImageUpload>) -> Result<(), ApiError> {
        let multipart = form.into_multipart(image)?;
        self.send_unit(self.request(Method::POST, "/livres/create").multipart(multipart))
            .await
    }

    pub async fn edit_book(&self, id: &str, form: BookForm, image: Option<ImageUpload>) -> Result<(), ApiError> {
        let multipart = form.into_multipart(image)?;
        self.send_unit(
            self.request(Method::PUT, &format!("/livres/edit/{id}"))
                .multipart(multipart),
        )
        .await
    }

    pub async fn delete_book(&self, id: &str) -> Result<(), ApiError> {
        self.send_unit(self.request(Method::DELETE, &format!("/livres/delete/{id}")))
            .await
    }
}
