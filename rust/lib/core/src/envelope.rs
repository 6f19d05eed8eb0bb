use serde::{Deserialize, Serialize};

/// Response envelope shared by every endpoint:
///
/// ```json
/// {"status": 200, "message": "OK", "timestamp": "2025-01-01T00:00:00Z", "data": {...}}
/// ```
///
/// Stores read `data`; error paths read `message`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub timestamp: String,
    pub data: T,
}

impl<T> Envelope<T> {
    /// Wrap a payload in a 200 envelope. Used by stub backends and tests.
    pub fn ok(data: T) -> Self {
        Self {
            status: 200,
            message: "OK".to_string(),
            timestamp: String::new(),
            data,
        }
    }

    pub fn into_data(self) -> T {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_full_envelope() {
        let env: Envelope<Vec<String>> = serde_json::from_str(
            r#"{"status":200,"message":"OK","timestamp":"2025-05-01T10:00:00","data":["GA","SQ"]}"#,
        )
        .unwrap();
        assert_eq!(env.status, 200);
        assert_eq!(env.data, vec!["GA", "SQ"]);
    }

    #[test]
    fn missing_metadata_defaults() {
        let env: Envelope<u32> = serde_json::from_str(r#"{"data":5}"#).unwrap();
        assert_eq!(env.status, 0);
        assert!(env.message.is_empty());
        assert_eq!(env.into_data(), 5);
    }

    #[test]
    fn null_data_as_option() {
        let env: Envelope<Option<serde_json::Value>> =
            serde_json::from_str(r#"{"status":200,"message":"deleted","data":null}"#).unwrap();
        assert!(env.data.is_none());
        let env: Envelope<Option<serde_json::Value>> =
            serde_json::from_str(r#"{"status":200,"message":"deleted"}"#).unwrap();
        assert!(env.data.is_none());
    }
}
