//! Core identifier and category types for PQBench
//!
//! Entity identifiers are UUID v4 newtypes; the run fingerprint is a
//! 256-bit BLAKE3 digest over the canonical submission payload.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generate a fresh random identifier
            pub fn generate() -> Self {
                Self(Uuid::new_v4())
            }

            /// Wrap an existing UUID
            pub fn from_uuid(id: Uuid) -> Self {
                Self(id)
            }

            /// Parse from string form
            pub fn parse(s: &str) -> Result<Self, uuid::Error> {
                Uuid::parse_str(s).map(Self)
            }

            /// Access the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }
    };
}

entity_id!(
    /// Identifier for a submitting researcher
    ResearcherId
);
entity_id!(
    /// Identifier for a submitted algorithm implementation
    AlgorithmId
);
entity_id!(
    /// Identifier for a single benchmark run
    BenchmarkId
);
entity_id!(
    /// Identifier for a leaderboard entry row
    EntryId
);

/// RunHash - reproducibility fingerprint of one benchmark submission
///
/// BLAKE3 over the canonical key-sorted serialization of
/// {algorithmId, metrics, environment, timestamp}. Not used for lookup
/// or deduplication.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RunHash {
    hash: [u8; 32],
}

impl RunHash {
    /// Wrap raw digest bytes
    pub fn new(hash: [u8; 32]) -> Self {
        Self { hash }
    }

    /// Hash arbitrary content with BLAKE3
    pub fn from_content(content: &[u8]) -> Self {
        let hash = blake3::hash(content);
        Self {
            hash: *hash.as_bytes(),
        }
    }

    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.hash
    }

    /// Convert to hex string
    pub fn to_hex(&self) -> String {
        hex::encode(self.hash)
    }

    /// Parse from hex string
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        if bytes.len() != 32 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut hash = [0u8; 32];
        hash.copy_from_slice(&bytes);
        Ok(Self { hash })
    }
}

impl fmt::Debug for RunHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RunHash({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for RunHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for RunHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for RunHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct HexVisitor;

        impl Visitor<'_> for HexVisitor {
            type Value = RunHash;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a 64-character hex string")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<RunHash, E> {
                RunHash::from_hex(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(HexVisitor)
    }
}

/// Cryptographic family an algorithm belongs to
///
/// Normalization bounds are computed within a single category; two
/// categories never cross-contaminate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Lattice,
    CodeBased,
    HashBased,
    Isogeny,
    Multivariate,
}

impl Category {
    /// All categories, in display order
    pub const ALL: [Category; 5] = [
        Category::Lattice,
        Category::CodeBased,
        Category::HashBased,
        Category::Isogeny,
        Category::Multivariate,
    ];

    /// Wire identifier (kebab-case, matches serde form)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lattice => "lattice",
            Self::CodeBased => "code-based",
            Self::HashBased => "hash-based",
            Self::Isogeny => "isogeny",
            Self::Multivariate => "multivariate",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Lattice => "Lattice-based",
            Self::CodeBased => "Code-based",
            Self::HashBased => "Hash-based",
            Self::Isogeny => "Isogeny-based",
            Self::Multivariate => "Multivariate",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lattice" => Ok(Self::Lattice),
            "code-based" => Ok(Self::CodeBased),
            "hash-based" => Ok(Self::HashBased),
            "isogeny" => Ok(Self::Isogeny),
            "multivariate" => Ok(Self::Multivariate),
            other => Err(format!("unknown category: {}", other)),
        }
    }
}
