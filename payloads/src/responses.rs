use crate::UserId;
use serde::{Deserialize, Serialize};

/// A user as returned by `GET /users` and `GET /users/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub username: String,
    pub email: String,
    pub address: Address,
    pub phone: String,
    pub website: String,
    pub company: Company,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: Geo,
}

/// Coordinates are strings on the wire, e.g. `"-37.3159"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub catch_phrase: String,
    pub bs: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_deserializes_from_upstream_shape() {
        let body = r#"{
            "id": 1,
            "name": "Alice Liddell",
            "username": "alice",
            "email": "alice@example.com",
            "address": {
                "street": "Rabbit Hole Lane",
                "suite": "Apt. 1",
                "city": "Oxford",
                "zipcode": "OX1 1AA",
                "geo": { "lat": "51.7520", "lng": "-1.2577" }
            },
            "phone": "555-0100",
            "website": "wonderland.example",
            "company": {
                "name": "Looking Glass",
                "catchPhrase": "Curiouser and curiouser",
                "bs": "tea parties"
            }
        }"#;

        let user: User = serde_json::from_str(body).unwrap();
        assert_eq!(user.id, UserId(1));
        assert_eq!(user.username, "alice");
        assert_eq!(user.company.catch_phrase, "Curiouser and curiouser");
        assert_eq!(user.address.geo.lng, "-1.2577");
    }

    #[test]
    fn company_serializes_catch_phrase_in_camel_case() {
        let company = Company {
            name: "Looking Glass".into(),
            catch_phrase: "Curiouser".into(),
            bs: "tea".into(),
        };
        let value = serde_json::to_value(&company).unwrap();
        assert_eq!(value["catchPhrase"], "Curiouser");
        assert!(value.get("catch_phrase").is_none());
    }
}
