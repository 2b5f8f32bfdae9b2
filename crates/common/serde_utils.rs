use serde::{de::Error, Deserialize, Deserializer, Serializer};

pub mod u64 {
    use super::*;

    /// Accepts either a JSON number or a decimal string, as genesis files
    /// encode 64 bit integers as strings
    pub mod num_or_dec_str {
        use super::*;

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum NumOrStr {
            Num(u64),
            Str(String),
        }

        pub fn deserialize<'de, D>(d: D) -> Result<u64, D::Error>
        where
            D: Deserializer<'de>,
        {
            match NumOrStr::deserialize(d)? {
                NumOrStr::Num(value) => Ok(value),
                NumOrStr::Str(value) => value
                    .parse()
                    .map_err(|_| D::Error::custom("Failed to deserialize u64 value")),
            }
        }

        pub fn serialize<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(&value.to_string())
        }
    }
}

pub mod i64 {
    use super::*;

    pub mod num_or_dec_str {
        use super::*;

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum NumOrStr {
            Num(i64),
            Str(String),
        }

        pub fn deserialize<'de, D>(d: D) -> Result<i64, D::Error>
        where
            D: Deserializer<'de>,
        {
            match NumOrStr::deserialize(d)? {
                NumOrStr::Num(value) => Ok(value),
                NumOrStr::Str(value) => value
                    .parse()
                    .map_err(|_| D::Error::custom("Failed to deserialize i64 value")),
            }
        }

        pub fn serialize<S>(value: &i64, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(&value.to_string())
        }
    }
}
