//! Client records and validated contact details.
//!
//! A [`Client`] is a [`Person`] value plus a generated unique identifier.
//! Contact details are validated at construction, so a `Person` in hand is
//! always a fully valid value; edits go through constructing a replacement
//! value rather than mutating fields in place.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// A unique identifier for a client.
///
/// Generated as a random UUID when a client is registered.
///
/// # Examples
///
/// ```
/// use hotelcore::ClientId;
///
/// let id = ClientId::new();
/// let parsed: ClientId = id.to_string().parse().unwrap();
/// assert_eq!(parsed, id);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(Uuid);

impl ClientId {
    /// Generates a new random client identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ClientId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ClientId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Basic contact details for a person.
///
/// All fields are validated at construction: name and phone must be
/// non-empty after trimming, and the email must contain an `@` with a
/// dot somewhere in the domain part.
///
/// # Examples
///
/// ```
/// use hotelcore::Person;
///
/// let person = Person::new("Alice Silva", "(11) 98765-4321", "alice@example.com").unwrap();
/// assert_eq!(person.name(), "Alice Silva");
///
/// // Invalid: no domain dot
/// assert!(Person::new("Alice", "555-0100", "alice@example").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    name: String,
    phone: String,
    email: String,
}

impl Person {
    /// Creates a new person value from validated contact details.
    ///
    /// Leading and trailing whitespace is trimmed from all fields.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The name is empty after trimming
    /// - The phone is empty after trimming
    /// - The email does not contain `@`, or its domain part has no dot
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError {
                field: "name".into(),
                message: "name must be non-empty after trimming whitespace".into(),
            });
        }

        let phone = phone.into().trim().to_string();
        if phone.is_empty() {
            return Err(ValidationError {
                field: "phone".into(),
                message: "phone must be non-empty after trimming whitespace".into(),
            });
        }

        let email = email.into().trim().to_string();
        let valid_email = match email.split_once('@') {
            Some((local, domain)) => !local.is_empty() && domain.contains('.'),
            None => false,
        };
        if !valid_email {
            return Err(ValidationError {
                field: "email".into(),
                message: format!("invalid email address: {email}"),
            });
        }

        Ok(Self { name, phone, email })
    }

    /// Returns the person's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the person's phone number.
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Returns the person's email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}

/// A hotel client: a person with a unique identifier.
///
/// Uses composition rather than inheritance; the contact details live in
/// the embedded [`Person`] value and accessors delegate to it.
///
/// # Examples
///
/// ```
/// use hotelcore::{Client, Person};
///
/// let person = Person::new("Bruno Costa", "(21) 91234-5678", "bruno@example.com").unwrap();
/// let client = Client::new(person);
/// assert_eq!(client.name(), "Bruno Costa");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    id: ClientId,
    #[serde(flatten)]
    person: Person,
}

impl Client {
    /// Registers a new client with a freshly generated identifier.
    #[must_use]
    pub fn new(person: Person) -> Self {
        Self {
            id: ClientId::new(),
            person,
        }
    }

    /// Reconstructs a client with a known identifier.
    ///
    /// Intended for loading persisted state and for tests; new registrations
    /// should use [`Client::new`].
    #[must_use]
    pub const fn with_id(id: ClientId, person: Person) -> Self {
        Self { id, person }
    }

    /// Returns the client's unique identifier.
    #[must_use]
    pub const fn id(&self) -> ClientId {
        self.id
    }

    /// Returns the embedded contact details.
    #[must_use]
    pub const fn person(&self) -> &Person {
        &self.person
    }

    /// Returns the client's name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.person.name()
    }

    /// Returns the client's phone number.
    #[must_use]
    pub fn phone(&self) -> &str {
        self.person.phone()
    }

    /// Returns the client's email address.
    #[must_use]
    pub fn email(&self) -> &str {
        self.person.email()
    }

    /// Returns a copy of this client with replaced contact details.
    ///
    /// The identifier is kept; the person value must already be validated.
    #[must_use]
    pub fn with_person(&self, person: Person) -> Self {
        Self {
            id: self.id,
            person,
        }
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.person.name(), self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person() -> Person {
        Person::new("Alice Silva", "(11) 98765-4321", "alice@example.com").unwrap()
    }

    #[test]
    fn test_person_valid() {
        let p = person();
        assert_eq!(p.name(), "Alice Silva");
        assert_eq!(p.phone(), "(11) 98765-4321");
        assert_eq!(p.email(), "alice@example.com");
    }

    #[test]
    fn test_person_trims_whitespace() {
        let p = Person::new("  Alice  ", " 555-0100 ", " alice@example.com ").unwrap();
        assert_eq!(p.name(), "Alice");
        assert_eq!(p.phone(), "555-0100");
        assert_eq!(p.email(), "alice@example.com");
    }

    #[test]
    fn test_person_empty_name() {
        let result = Person::new("   ", "555-0100", "alice@example.com");
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().field, "name");
    }

    #[test]
    fn test_person_empty_phone() {
        let result = Person::new("Alice", "", "alice@example.com");
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().field, "phone");
    }

    #[test]
    fn test_person_invalid_email() {
        for email in ["", "alice", "alice@", "@example.com", "alice@example"] {
            let result = Person::new("Alice", "555-0100", email);
            assert!(result.is_err(), "email {email:?} should be rejected");
            assert_eq!(result.unwrap_err().field, "email");
        }
    }

    #[test]
    fn test_client_id_unique() {
        assert_ne!(ClientId::new(), ClientId::new());
    }

    #[test]
    fn test_client_id_round_trip() {
        let id = ClientId::new();
        let parsed: ClientId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_client_delegates_to_person() {
        let client = Client::new(person());
        assert_eq!(client.name(), "Alice Silva");
        assert_eq!(client.email(), "alice@example.com");
        assert_eq!(client.person(), &person());
    }

    #[test]
    fn test_client_with_person_keeps_id() {
        let client = Client::new(person());
        let id = client.id();
        let updated = client.with_person(
            Person::new("Alice Souza", "(11) 98765-4321", "alice@example.com").unwrap(),
        );
        assert_eq!(updated.id(), id);
        assert_eq!(updated.name(), "Alice Souza");
    }

    #[test]
    fn test_client_serde() {
        let client = Client::new(person());
        let json = serde_json::to_string(&client).unwrap();
        // Flattened: contact fields sit next to the id
        assert!(json.contains("\"name\""));
        assert!(json.contains("\"email\""));
        let deserialized: Client = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, client);
    }
}
