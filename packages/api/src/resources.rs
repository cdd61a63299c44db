//! Inmate, booking and charge endpoints.
//!
//! Paths keep the backend's own spelling: the inmate list lives at
//! `/inmateProfile` while single-profile operations use `/inmateprofile/{id}`.

use session::KeyValueStore;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{BookingListItem, Charge, Inmate, ListQuery, NewBooking, Page, ReleaseRequest};

pub const INMATE_LIST_PATH: &str = "inmateProfile";
pub const INMATE_PATH: &str = "inmateprofile";
pub const BOOKING_PATH: &str = "booking";
pub const CHARGE_PATH: &str = "charge";

pub fn inmate_path(id: &str) -> String {
    format!("{INMATE_PATH}/{id}")
}

pub fn booking_path(id: &str) -> String {
    format!("{BOOKING_PATH}/{id}")
}

pub fn release_path(id: &str) -> String {
    format!("{BOOKING_PATH}/{id}/release")
}

impl<S: KeyValueStore> ApiClient<S> {
    pub async fn list_inmates(&self, query: &ListQuery) -> Result<Page<Inmate>, ApiError> {
        self.get_json_with_query(INMATE_LIST_PATH, query).await
    }

    pub async fn create_inmate(&self, inmate: &Inmate) -> Result<(), ApiError> {
        self.post_json(INMATE_PATH, inmate).await
    }

    pub async fn update_inmate(&self, inmate: &Inmate) -> Result<(), ApiError> {
        self.put_json(&inmate_path(&inmate.id), inmate).await
    }

    pub async fn delete_inmate(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&inmate_path(id)).await
    }

    pub async fn list_bookings(&self, query: &ListQuery) -> Result<Page<BookingListItem>, ApiError> {
        self.get_json_with_query(BOOKING_PATH, query).await
    }

    pub async fn create_booking(&self, booking: &NewBooking) -> Result<(), ApiError> {
        self.post_json(BOOKING_PATH, booking).await
    }

    pub async fn delete_booking(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&booking_path(id)).await
    }

    pub async fn release_booking(&self, id: &str, reason: &str) -> Result<(), ApiError> {
        let body = ReleaseRequest {
            release_reason: reason.trim().to_string(),
        };
        self.post_json(&release_path(id), &body).await
    }

    pub async fn list_charges(&self) -> Result<Vec<Charge>, ApiError> {
        self.get_json(CHARGE_PATH).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_server;
    use reqwest::Method;
    use session::{ApiConfig, MemoryStorage, TOKEN_KEY};

    #[test]
    fn test_paths() {
        assert_eq!(inmate_path("42"), "inmateprofile/42");
        assert_eq!(booking_path("b1"), "booking/b1");
        assert_eq!(release_path("b1"), "booking/b1/release");
    }

    #[test]
    fn test_list_query_string() {
        let client = ApiClient::new(&ApiConfig::default(), MemoryStorage::new());
        let request = client
            .request(Method::GET, INMATE_LIST_PATH)
            .query(&ListQuery::new(2, 10, "doe"))
            .build()
            .unwrap();
        assert_eq!(request.url().path(), "/api/inmateProfile");
        assert_eq!(request.url().query(), Some("pageNumber=2&pageSize=10&search=doe"));
    }

    #[tokio::test]
    async fn test_list_charges_sends_token() {
        let (base_url, server) =
            test_server::serve_once("200 OK", r#"[{"id":"c1","chargeName":"Theft"}]"#).await;
        let storage = MemoryStorage::new();
        storage.set(TOKEN_KEY, "T");
        let client = ApiClient::new(&ApiConfig { base_url }, storage);

        let charges = client.list_charges().await.unwrap();
        assert_eq!(
            charges,
            vec![Charge {
                id: "c1".to_string(),
                charge_name: "Theft".to_string(),
            }]
        );

        let request = server.await.unwrap().to_ascii_lowercase();
        assert!(request.starts_with("get /api/charge "));
        assert!(request.contains("authorization: bearer t"));
    }

    #[tokio::test]
    async fn test_delete_inmate_not_found() {
        let (base_url, server) =
            test_server::serve_once("404 Not Found", r#"{"message":"Inmate not found"}"#).await;
        let client = ApiClient::new(&ApiConfig { base_url }, MemoryStorage::new());

        let err = client.delete_inmate("42").await.unwrap_err();
        assert_eq!(err.user_message("Failed to delete inmate"), "Inmate not found");
        assert!(!err.is_unauthorized());

        let request = server.await.unwrap();
        assert!(request.starts_with("DELETE /api/inmateprofile/42 "));
    }
}
