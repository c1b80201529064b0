use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Report week columns, in the order they are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, AsRefStr)]
pub enum Weekday {
    Saturday,
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

/// Backup outcome recorded for a single day. Stored as plain text, so a row
/// may carry any string; only these values get a dedicated cell style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, AsRefStr)]
pub enum DayStatus {
    #[strum(serialize = "AUTOMATIC")]
    Automatic,
    #[strum(serialize = "MANUAL")]
    Manual,
    #[strum(serialize = "FAILED")]
    Failed,
    #[strum(serialize = "IN PROGRESS")]
    InProgress,
    #[strum(serialize = "N/A")]
    NotApplicable,
}

impl DayStatus {
    pub fn parse(value: &str) -> Option<DayStatus> {
        value.parse().ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, AsRefStr)]
pub enum ServerStatus {
    #[strum(serialize = "ONLINE")]
    Online,
    #[strum(serialize = "MAINTENANCE")]
    Maintenance,
    #[strum(serialize = "OFFLINE")]
    Offline,
    #[strum(serialize = "UNKNOWN")]
    Unknown,
}

impl ServerStatus {
    pub fn parse(value: &str) -> Option<ServerStatus> {
        value.parse().ok()
    }
}

#[cfg(test)]
mod test {
    use super::{DayStatus, ServerStatus, Weekday};
    use strum::IntoEnumIterator;

    #[test]
    fn weekday_order() {
        let days: Vec<String> = Weekday::iter().map(|it| it.to_string()).collect();
        assert_eq!(
            vec!["Saturday", "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday"],
            days,
        );
    }

    #[test]
    fn day_status_values() {
        assert_eq!(Some(DayStatus::Automatic), DayStatus::parse("AUTOMATIC"));
        assert_eq!(Some(DayStatus::InProgress), DayStatus::parse("IN PROGRESS"));
        assert_eq!(Some(DayStatus::NotApplicable), DayStatus::parse("N/A"));
        assert_eq!("IN PROGRESS", DayStatus::InProgress.as_ref());
        assert_eq!(None, DayStatus::parse(""));
        assert_eq!(None, DayStatus::parse("automatic"));
    }

    #[test]
    fn server_status_values() {
        assert_eq!(Some(ServerStatus::Maintenance), ServerStatus::parse("MAINTENANCE"));
        assert_eq!("OFFLINE", ServerStatus::Offline.to_string());
        assert_eq!(None, ServerStatus::parse("DOWN"));
    }
}
