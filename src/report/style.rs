use crate::model::DayStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub background: &'static str,
    pub color: &'static str,
}

impl CellStyle {
    pub fn css(&self) -> String {
        format!("background-color: {}; color: {};", self.background, self.color)
    }
}

/// Backup outcome colors. Any value missing here, the empty string
/// included, gets `DEFAULT_DAY_STYLE`.
pub const DAY_STATUS_STYLES: [(DayStatus, CellStyle); 5] = [
    (
        DayStatus::Automatic,
        CellStyle {
            background: "green",
            color: "white",
        },
    ),
    (
        DayStatus::Manual,
        CellStyle {
            background: "yellow",
            color: "black",
        },
    ),
    (
        DayStatus::Failed,
        CellStyle {
            background: "red",
            color: "white",
        },
    ),
    (
        DayStatus::NotApplicable,
        CellStyle {
            background: "purple",
            color: "white",
        },
    ),
    (
        DayStatus::InProgress,
        CellStyle {
            background: "#ffb6c1",
            color: "black",
        },
    ),
];

pub const DEFAULT_DAY_STYLE: CellStyle = CellStyle {
    background: "white",
    color: "white",
};

/// Server status shares the day status domain shape but is never colored.
pub const SERVER_STATUS_STYLE: CellStyle = CellStyle {
    background: "white",
    color: "black",
};

pub const REGULAR_STYLE: CellStyle = CellStyle {
    background: "white",
    color: "black",
};

pub fn day_style(value: &str) -> CellStyle {
    DayStatus::parse(value)
        .and_then(|status| DAY_STATUS_STYLES.iter().find(|(it, _)| *it == status))
        .map(|(_, style)| *style)
        .unwrap_or(DEFAULT_DAY_STYLE)
}
