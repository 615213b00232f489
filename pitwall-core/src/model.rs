use serde::{Deserialize, Serialize};

/// A driver row: car number, name and (optionally) team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Driver {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub team: Option<String>,
}

impl Driver {
    pub fn new(id: i64, name: impl Into<String>, team: Option<&str>) -> Self {
        Self {
            id,
            name: name.into(),
            team: team.map(str::to_owned),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_missing_team_as_null() {
        let driver = Driver::new(81, "Oscar Piastri", None);
        let json = serde_json::to_value(&driver).unwrap();
        assert_eq!(json["id"], 81);
        assert!(json["team"].is_null());
    }

    #[test]
    fn deserializes_without_team_field() {
        let driver: Driver = serde_json::from_str(r#"{"id": 4, "name": "Lando Norris"}"#).unwrap();
        assert_eq!(driver, Driver::new(4, "Lando Norris", None));
    }
}
