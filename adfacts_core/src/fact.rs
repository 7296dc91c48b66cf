//! Typed facts extracted from ad text.
//!
//! A [`Claim`] is what a pattern recognises before the engine knows where it
//! matched; anchoring it to a [`Span`] turns it into a [`Fact`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::span::Span;

/// The kind of information a fact carries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Domain {
    /// City the property is in.
    City = 0,
    /// Studio, flat or single room.
    FlatType = 1,
    /// Number of rooms.
    RoomCount = 2,
    /// Asking price.
    Price = 3,
    /// Contact phone number.
    PhoneNumber = 4,
}

impl Domain {
    pub const ALL: [Self; 5] = [
        Self::City,
        Self::FlatType,
        Self::RoomCount,
        Self::Price,
        Self::PhoneNumber,
    ];

    /// Returns the string representation of this domain.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::City => "city",
            Self::FlatType => "flat_type",
            Self::RoomCount => "room_count",
            Self::Price => "price",
            Self::PhoneNumber => "phone_number",
        }
    }
}

impl FromStr for Domain {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "city" => Ok(Self::City),
            "flat_type" => Ok(Self::FlatType),
            "room_count" => Ok(Self::RoomCount),
            "price" => Ok(Self::Price),
            "phone_number" => Ok(Self::PhoneNumber),
            _ => Err("unknown fact domain"),
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value of a fact. Text domains carry strings, counting domains integers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FactValue {
    Text(String),
    Count(u64),
}

impl FactValue {
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Count(_) => None,
        }
    }

    #[must_use]
    pub const fn as_count(&self) -> Option<u64> {
        match self {
            Self::Count(count) => Some(*count),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for FactValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Count(count) => write!(f, "{count}"),
        }
    }
}

/// A recognised piece of information not yet tied to a position.
///
/// The constructors pair every domain with the value type it owns, so a
/// price can never hold text and a city never a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claim {
    domain: Domain,
    value: FactValue,
}

impl Claim {
    #[must_use]
    pub fn city(name: impl Into<String>) -> Self {
        Self::text(Domain::City, name)
    }

    #[must_use]
    pub fn flat_type(kind: impl Into<String>) -> Self {
        Self::text(Domain::FlatType, kind)
    }

    #[must_use]
    pub const fn room_count(rooms: u64) -> Self {
        Self {
            domain: Domain::RoomCount,
            value: FactValue::Count(rooms),
        }
    }

    #[must_use]
    pub const fn price(amount: u64) -> Self {
        Self {
            domain: Domain::Price,
            value: FactValue::Count(amount),
        }
    }

    #[must_use]
    pub fn phone_number(number: impl Into<String>) -> Self {
        Self::text(Domain::PhoneNumber, number)
    }

    fn text(domain: Domain, value: impl Into<String>) -> Self {
        Self {
            domain,
            value: FactValue::Text(value.into()),
        }
    }

    #[must_use]
    pub const fn domain(&self) -> Domain {
        self.domain
    }

    #[must_use]
    pub const fn value(&self) -> &FactValue {
        &self.value
    }

    /// Anchor the claim to the text range it was found in.
    #[must_use]
    pub fn at(self, origin: Span) -> Fact {
        Fact {
            domain: self.domain,
            value: self.value,
            origin,
        }
    }
}

/// A typed datum together with the range of input it came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Fact {
    domain: Domain,
    value: FactValue,
    origin: Span,
}

impl Fact {
    #[must_use]
    pub const fn domain(&self) -> Domain {
        self.domain
    }

    #[must_use]
    pub const fn value(&self) -> &FactValue {
        &self.value
    }

    #[must_use]
    pub const fn origin(&self) -> Span {
        self.origin
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={} at {}", self.domain, self.value, self.origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_round_trips_through_str() {
        for domain in Domain::ALL {
            assert_eq!(domain.as_str().parse::<Domain>(), Ok(domain));
        }
        assert!("start_date".parse::<Domain>().is_err());
    }

    #[test]
    fn test_domain_parse_ignores_case() {
        assert_eq!("Phone_Number".parse::<Domain>(), Ok(Domain::PhoneNumber));
    }

    #[test]
    fn test_claims_pair_domain_and_value() {
        assert_eq!(Claim::city("Warszawa").domain(), Domain::City);
        assert_eq!(Claim::price(1500).value().as_count(), Some(1500));
        assert_eq!(Claim::room_count(2).value().as_text(), None);
        assert_eq!(
            Claim::phone_number("123 456 789").value().as_text(),
            Some("123 456 789")
        );
    }

    #[test]
    fn test_anchoring_keeps_claim() {
        let fact = Claim::flat_type("studio").at(Span::new(10, 18));
        assert_eq!(fact.domain(), Domain::FlatType);
        assert_eq!(fact.value(), &FactValue::Text("studio".to_string()));
        assert_eq!(fact.origin(), Span::new(10, 18));
    }

    #[test]
    fn test_equal_facts_at_different_spans_differ() {
        let a = Claim::price(500).at(Span::new(0, 3));
        let b = Claim::price(500).at(Span::new(5, 8));
        assert_ne!(a, b);
    }

    #[test]
    fn test_fact_display() {
        let fact = Claim::room_count(3).at(Span::new(24, 32));
        assert_eq!(fact.to_string(), "room_count=3 at [24, 32)");
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_fact_serialization() {
        let fact = Claim::city("Warszawa").at(Span::new(13, 20));
        let json = serde_json::to_value(&fact).expect("fact should serialize");

        assert_eq!(json["domain"], "city");
        assert_eq!(json["value"], "Warszawa");
        assert_eq!(json["origin"]["start"], 13);
        assert_eq!(json["origin"]["end"], 20);
    }
}
