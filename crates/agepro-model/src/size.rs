use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Advisory download size of a data product.
///
/// Serialized as a float when the export carried a size, and as the integer
/// `0` when the cell was empty or unreadable.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SizeMb {
    Megabytes(f64),
    #[default]
    Unknown,
}

impl SizeMb {
    /// Size in megabytes, `0.0` when unknown.
    pub fn megabytes(self) -> f64 {
        match self {
            Self::Megabytes(value) => value,
            Self::Unknown => 0.0,
        }
    }
}

impl Serialize for SizeMb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Megabytes(value) => serializer.serialize_f64(*value),
            Self::Unknown => serializer.serialize_u64(0),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SizeRepr {
    Integer(u64),
    Float(f64),
}

impl<'de> Deserialize<'de> for SizeMb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match SizeRepr::deserialize(deserializer)? {
            SizeRepr::Integer(0) => Self::Unknown,
            SizeRepr::Integer(value) => Self::Megabytes(value as f64),
            SizeRepr::Float(value) => Self::Megabytes(value),
        })
    }
}
