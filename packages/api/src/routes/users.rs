use reqwest::Method;
use store::LibraryUser;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{PasswordChange, ProfileUpdate};

impl ApiClient {
    pub async fn list_users(&self) -> Result<Vec<LibraryUser>, ApiError> {
        self.send_json(self.request(Method::GET, "/utilisateurs/get-all"))
            .await
    }

    pub async fn user_info(&self, id: &str) -> Result<LibraryUser, ApiError> {
        self.send_json(self.request(Method::GET, &format!("/utilisateurs/get-user-info/{id}")))
            .await
    }

    pub async fn change_password(&self, change: &PasswordChange) -> Result<(), ApiError> {
        self.send_unit(
            self.request(Method::POST, "/utilisateurs/change-password")
                .json(change),
        )
        .await
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<(), ApiError> {
        self.send_unit(
            self.request(Method::PATCH, "/utilisateurs/update-profile")
                .json(update),
        )
        .await
    }
}
