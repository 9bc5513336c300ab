use super::FixedString;
use crate::UnitTraits;

use core::{fmt, marker::PhantomData};

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, SeqAccess, Visitor},
};

#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl<const N: usize, T: UnitTraits<u8>> Serialize for FixedString<u8, N, T> {
    /// Serializes the content as a string when it is valid UTF-8, as bytes otherwise.
    #[inline]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.to_str() {
            Ok(s) => serializer.serialize_str(s),
            Err(_) => serializer.serialize_bytes(self.as_units()),
        }
    }
}

struct FixedStringVisitor<const N: usize, T>(PhantomData<fn() -> T>);

impl<'de, const N: usize, T: UnitTraits<u8>> Visitor<'de> for FixedStringVisitor<N, T> {
    type Value = FixedString<u8, N, T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a string or byte sequence (truncated to {} bytes)", N - 1)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(FixedString::from_units(v))
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
        Ok(FixedString::from_units(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut out = FixedString::new();
        while let Some(unit) = seq.next_element::<u8>()? {
            out.push_back(unit);
        }
        Ok(out)
    }
}

#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl<'de, const N: usize, T: UnitTraits<u8>> Deserialize<'de> for FixedString<u8, N, T> {
    /// Deserializes from a string, bytes or a sequence of bytes, truncating to
    /// [`FixedString::max_size`] bytes.
    #[inline]
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_bytes(FixedStringVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use crate::FixedStr;

    #[test]
    fn utf8_content_serializes_as_a_string() {
        let s = FixedStr::<8>::from("json");
        assert_eq!(serde_json::to_string(&s).unwrap(), "\"json\"");
    }

    #[test]
    fn invalid_utf8_serializes_as_bytes() {
        let s = FixedStr::<8>::from(&[b'a', 0xff][..]);
        assert_eq!(serde_json::to_string(&s).unwrap(), "[97,255]");
    }

    #[test]
    fn deserialization_truncates() {
        let s: FixedStr<4> = serde_json::from_str("\"truncate\"").unwrap();
        assert_eq!(s, "tru");

        let bytes: FixedStr<4> = serde_json::from_str("[104, 105]").unwrap();
        assert_eq!(bytes, "hi");
    }

    #[test]
    fn wrong_shape_is_rejected() {
        assert!(serde_json::from_str::<FixedStr<4>>("42").is_err());
    }
}
