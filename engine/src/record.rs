//! Record types matching the remote listing's JSON shape.

use crate::UserId;
use serde::{Deserialize, Serialize};

/// Geographic coordinates, kept as strings like the remote source serves them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

/// Postal address of a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: Geo,
}

/// Company affiliation of a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub catch_phrase: String,
    pub bs: String,
}

/// A user entry in the directory.
///
/// Identity is the id, unique across the merged view. Whether a record came
/// from the remote snapshot or the local overlay is positional, not a field:
/// overlay membership is what makes a record local.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: UserId,
    pub name: String,
    pub username: String,
    pub email: String,
    pub address: Address,
    pub phone: String,
    pub website: String,
    pub company: Company,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_remote_shape() {
        // Shape served by the remote listing endpoint
        let payload = json!({
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": {
                "street": "Kulas Light",
                "suite": "Apt. 556",
                "city": "Gwenborough",
                "zipcode": "92998-3874",
                "geo": {"lat": "-37.3159", "lng": "81.1496"}
            },
            "phone": "1-770-736-8031 x56442",
            "website": "hildegard.org",
            "company": {
                "name": "Romaguera-Crona",
                "catchPhrase": "Multi-layered client-server neural-net",
                "bs": "harness real-time e-markets"
            }
        });

        let user: UserRecord = serde_json::from_value(payload).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.username, "Bret");
        assert_eq!(user.address.geo.lat, "-37.3159");
        assert_eq!(user.company.catch_phrase, "Multi-layered client-server neural-net");
    }

    #[test]
    fn serialization_roundtrip() {
        let user = UserRecord {
            id: 7,
            name: "Jane Doe".into(),
            username: "janedoe".into(),
            email: "jane@example.com".into(),
            company: Company {
                name: "Acme".into(),
                ..Default::default()
            },
            ..Default::default()
        };

        let json = serde_json::to_string(&user).unwrap();
        let parsed: UserRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(user, parsed);
    }

    #[test]
    fn company_uses_camel_case_on_the_wire() {
        let company = Company {
            name: "Acme".into(),
            catch_phrase: "synergize".into(),
            bs: "".into(),
        };

        let json = serde_json::to_value(&company).unwrap();
        assert!(json.get("catchPhrase").is_some());
        assert!(json.get("catch_phrase").is_none());
    }
}
