//! Write inputs for the directory store.
//!
//! Changes are expressed as data handed to the store, not as direct record
//! manipulation by callers. [`NewUser`] creates an entry, [`UserPatch`]
//! shallow-merges into one.

use crate::{Address, Company, UserId, UserRecord};

/// Input for creating a directory entry.
///
/// Name and email are required (see [`crate::validate`]); the rest defaults
/// to empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub company: String,
}

impl NewUser {
    /// Create an input with the two required fields.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Default::default()
        }
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn website(mut self, website: impl Into<String>) -> Self {
        self.website = website.into();
        self
    }

    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.company = company.into();
        self
    }

    /// Materialize a full record under the given id.
    ///
    /// The username is the name lowercased with all whitespace stripped;
    /// address fields start empty, as does everything in the company besides
    /// its name.
    pub(crate) fn materialize(self, id: UserId) -> UserRecord {
        let username = derive_username(&self.name);
        UserRecord {
            id,
            name: self.name,
            username,
            email: self.email,
            address: Address::default(),
            phone: self.phone,
            website: self.website,
            company: Company {
                name: self.company,
                ..Default::default()
            },
        }
    }
}

fn derive_username(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// A partial update to a record.
///
/// Applying a patch is a shallow merge: present fields replace the record's
/// field wholesale (address and company as whole sub-structs), absent fields
/// are left untouched. The id is not patchable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub address: Option<Address>,
    pub company: Option<Company>,
}

impl UserPatch {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }

    pub fn address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }

    pub fn company(mut self, company: Company) -> Self {
        self.company = Some(company);
        self
    }

    /// Shallow-merge this patch into a record.
    pub fn apply_to(self, user: &mut UserRecord) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(username) = self.username {
            user.username = username;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(phone) = self.phone {
            user.phone = phone;
        }
        if let Some(website) = self.website {
            user.website = website;
        }
        if let Some(address) = self.address {
            user.address = address;
        }
        if let Some(company) = self.company {
            user.company = company;
        }
    }
}
