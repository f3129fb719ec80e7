use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Storage model for a row of the `providers` table; NULL columns are `None`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Provider {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub provider_specialty: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_specialty_serializes_as_null() {
        let provider = Provider {
            first_name: Some("Jane".to_string()),
            last_name: Some("Doe".to_string()),
            provider_specialty: None,
        };

        assert_eq!(
            serde_json::to_value(&provider).unwrap(),
            serde_json::json!({
                "first_name": "Jane",
                "last_name": "Doe",
                "provider_specialty": null
            })
        );
    }
}
