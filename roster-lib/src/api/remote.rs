//! Wire format of the remote listing endpoint.

use serde::Deserialize;
use serde::Deserializer;

use super::UserPage;
use crate::error::FetchError;
use crate::model::Gender;
use crate::model::User;
use crate::model::UserId;

/// A user as returned by the listing endpoint.
///
/// The endpoint sends many more fields (address, company, ...); only the ones
/// the tables show are kept.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteUser {
    pub id: u64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default, deserialize_with = "lenient_age")]
    pub age: u32,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Reads any JSON number as an age so one odd row cannot fail the page.
/// Fractions are truncated; negative and null values become 0.
fn lenient_age<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let age = Option::<f64>::deserialize(deserializer)?;
    Ok(match age {
        Some(age) if age.is_finite() && age > 0.0 => age.min(f64::from(u32::MAX)) as u32,
        _ => 0,
    })
}

impl From<RemoteUser> for User {
    fn from(remote: RemoteUser) -> Self {
        User {
            id: UserId(remote.id),
            first_name: remote.first_name,
            last_name: remote.last_name,
            age: remote.age,
            gender: Gender::from_remote(&remote.gender),
            email: remote.email,
            phone: remote.phone.filter(|p| !p.trim().is_empty()),
        }
    }
}

/// Body of `GET /users?limit=..&skip=..`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListingResponse {
    pub users: Vec<RemoteUser>,
    pub total: usize,
    #[serde(default)]
    pub skip: usize,
    #[serde(default)]
    pub limit: usize,
}

impl From<ListingResponse> for UserPage {
    fn from(response: ListingResponse) -> Self {
        let rows = response.users.into_iter().map(User::from).collect();
        UserPage::new(rows, response.total)
    }
}

/// Parses a listing body into a [`UserPage`].
pub fn parse_listing(body: &str) -> Result<UserPage, FetchError> {
    serde_json::from_str::<ListingResponse>(body)
        .map(UserPage::from)
        .map_err(|e| FetchError::parse_with_body(e.to_string(), body))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "users": [
            {
                "id": 1,
                "firstName": "Emily",
                "lastName": "Johnson",
                "maidenName": "Smith",
                "age": 28,
                "gender": "female",
                "email": "emily.johnson@x.dummyjson.com",
                "phone": "+81 965-431-3024",
                "address": { "city": "Phoenix" }
            },
            {
                "id": 2,
                "firstName": "Michael",
                "lastName": "Williams",
                "age": 35,
                "gender": "male",
                "email": "michael.williams@x.dummyjson.com",
                "phone": ""
            }
        ],
        "total": 208,
        "skip": 0,
        "limit": 2
    }"#;

    #[test]
    fn test_parse_listing() {
        let page = parse_listing(BODY).unwrap();
        assert_eq!(page.total(), 208);
        assert_eq!(page.len(), 2);

        let emily = &page.rows()[0];
        assert_eq!(emily.id, UserId(1));
        assert_eq!(emily.first_name, "Emily");
        assert_eq!(emily.gender, Gender::Female);
        assert_eq!(emily.phone.as_deref(), Some("+81 965-431-3024"));
    }

    #[test]
    fn test_blank_phone_becomes_none() {
        let page = parse_listing(BODY).unwrap();
        assert_eq!(page.rows()[1].phone, None);
    }

    #[test]
    fn test_odd_ages_do_not_fail_the_page() {
        let body = r#"{
            "users": [
                { "id": 1, "age": -3 },
                { "id": 2, "age": 41.7 },
                { "id": 3, "age": null },
                { "id": 4 }
            ],
            "total": 4
        }"#;
        let page = parse_listing(body).unwrap();
        let ages: Vec<u32> = page.rows().iter().map(|u| u.age).collect();
        assert_eq!(ages, vec![0, 41, 0, 0]);
    }

    #[test]
    fn test_parse_error_keeps_body() {
        let err = parse_listing("{\"users\": 5}").unwrap_err();
        match err {
            FetchError::Parse { body, .. } => assert_eq!(body.as_deref(), Some("{\"users\": 5}")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
