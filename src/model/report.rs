use super::Weekday;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// The single persisted document: report period, storage usage and one row
/// per tracked server. Every field is optional on input and unknown keys are
/// carried through untouched.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportDocument {
    #[serde(default, deserialize_with = "lenient_string")]
    pub start_date: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub end_date: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub space_used: String,
    #[serde(default, deserialize_with = "lenient_rows")]
    pub table_data: Vec<ServerRow>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServerRow {
    #[serde(default, deserialize_with = "lenient_string")]
    pub server_name: String,
    #[serde(rename = "Saturday", default, deserialize_with = "lenient_string")]
    pub saturday: String,
    #[serde(rename = "Sunday", default, deserialize_with = "lenient_string")]
    pub sunday: String,
    #[serde(rename = "Monday", default, deserialize_with = "lenient_string")]
    pub monday: String,
    #[serde(rename = "Tuesday", default, deserialize_with = "lenient_string")]
    pub tuesday: String,
    #[serde(rename = "Wednesday", default, deserialize_with = "lenient_string")]
    pub wednesday: String,
    #[serde(rename = "Thursday", default, deserialize_with = "lenient_string")]
    pub thursday: String,
    #[serde(rename = "Friday", default, deserialize_with = "lenient_string")]
    pub friday: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub ssl_expiry_date: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub server_status: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub remark: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ServerRow {
    pub fn day(&self, day: Weekday) -> &str {
        match day {
            Weekday::Saturday => &self.saturday,
            Weekday::Sunday => &self.sunday,
            Weekday::Monday => &self.monday,
            Weekday::Tuesday => &self.tuesday,
            Weekday::Wednesday => &self.wednesday,
            Weekday::Thursday => &self.thursday,
            Weekday::Friday => &self.friday,
        }
    }

    fn day_mut(&mut self, day: Weekday) -> &mut String {
        match day {
            Weekday::Saturday => &mut self.saturday,
            Weekday::Sunday => &mut self.sunday,
            Weekday::Monday => &mut self.monday,
            Weekday::Tuesday => &mut self.tuesday,
            Weekday::Wednesday => &mut self.wednesday,
            Weekday::Thursday => &mut self.thursday,
            Weekday::Friday => &mut self.friday,
        }
    }

    /// Replaces a field by its JSON key. Keys outside the known set end up
    /// in `extra`, the same way an untyped client would attach them.
    pub fn set_field(&mut self, field: &str, value: impl Into<String>) {
        let value = value.into();
        if let Ok(day) = field.parse::<Weekday>() {
            *self.day_mut(day) = value;
            return;
        }
        match field {
            "serverName" => self.server_name = value,
            "sslExpiryDate" => self.ssl_expiry_date = value,
            "serverStatus" => self.server_status = value,
            "remark" => self.remark = value,
            _ => {
                self.extra.insert(field.into(), Value::String(value));
            }
        }
    }
}

pub const SAVE_ACK_MESSAGE: &str = "Data saved successfully";

/// Body of a successful save response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SaveAck {
    pub message: String,
}

impl Default for SaveAck {
    fn default() -> Self {
        SaveAck {
            message: SAVE_ACK_MESSAGE.into(),
        }
    }
}

fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(str) => Ok(str),
        Value::Bool(bool) => Ok(bool.to_string()),
        Value::Number(number) => Ok(number.to_string()),
        other => Err(D::Error::custom(format!("expected a string, got {other}"))),
    }
}

fn lenient_rows<'de, D>(deserializer: D) -> std::result::Result<Vec<ServerRow>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<ServerRow>>::deserialize(deserializer)?.unwrap_or_default())
}
