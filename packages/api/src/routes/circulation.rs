use reqwest::Method;
use store::{Loan, Reservation};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{
    CheckoutResponse, CreateLoanRequest, MessageResponse, ReservationRequest, ReturnLoanResponse,
};

impl ApiClient {
    /// Open a reservation; the answer is the payment page to send the browser to.
    pub async fn create_reservation(&self, request: &ReservationRequest) -> Result<CheckoutResponse, ApiError> {
        self.send_json(self.request(Method::POST, "/reservations/create").json(request))
            .await
    }

    pub async fn my_reservations(&self) -> Result<Vec<Reservation>, ApiError> {
        self.send_json(self.request(Method::GET, "/reservations/my"))
            .await
    }

    pub async fn all_reservations(&self) -> Result<Vec<Reservation>, ApiError> {
        self.send_json(self.request(Method::GET, "/reservations/all"))
            .await
    }

    /// Confirm a completed checkout session.
    pub async fn confirm_reservation(&self, session_id: &str) -> Result<MessageResponse, ApiError> {
        self.send_json(
            self.anonymous_request(Method::GET, "/reservations/confirm")
                .query(&[("session_id", session_id)]),
        )
        .await
    }

    pub async fn my_loans(&self) -> Result<Vec<Loan>, ApiError> {
        self.send_json(self.request(Method::GET, "/loans/me"))
            .await
    }

    pub async fn all_loans(&self) -> Result<Vec<Loan>, ApiError> {
        self.send_json(self.request(Method::GET, "/loans/all"))
            .await
    }

    pub async fn create_loan(&self, request: &CreateLoanRequest) -> Result<Loan, ApiError> {
        self.send_json(self.request(Method::POST, "/loans/create").json(request))
            .await
    }

    /// Check a copy back in. The returned loan carries any late fine.
    pub async fn return_loan(&self, loan_id: &str) -> Result<Loan, ApiError> {
        let response: ReturnLoanResponse = self
            .send_json(self.request(Method::POST, &format!("/loans/return/{loan_id}")))
            .await?;
        Ok(response.loan)
    }

    /// Start payment of a late fine.
    pub async fn pay_fine(&self, loan_id: &str) -> Result<CheckoutResponse, ApiError> {
        self.send_json(self.request(Method::POST, &format!("/loans/loans/pay-fine/{loan_id}")))
            .await
    }
}
