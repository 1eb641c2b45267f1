use ansi_term::Colour;
use serde::{Deserialize, Serialize};

/// The four FMCSA duty-status categories. A driver is in exactly one of
/// these at any point of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DutyStatus {
    OffDuty,
    Sleeper,
    Driving,
    OnDuty,
}

impl DutyStatus {
    /// All statuses in graph order, top band first.
    pub const ALL: [DutyStatus; 4] = [
        DutyStatus::OffDuty,
        DutyStatus::Sleeper,
        DutyStatus::Driving,
        DutyStatus::OnDuty,
    ];

    /// Parse a backend status tag (`OFF_DUTY`, `SLEEPER`, ...).
    /// Unrecognized tags yield `None`, never a fallback status.
    pub fn from_tag(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "OFF_DUTY" => Some(Self::OffDuty),
            "SLEEPER" => Some(Self::Sleeper),
            "DRIVING" => Some(Self::Driving),
            "ON_DUTY" => Some(Self::OnDuty),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            DutyStatus::OffDuty => "OFF_DUTY",
            DutyStatus::Sleeper => "SLEEPER",
            DutyStatus::Driving => "DRIVING",
            DutyStatus::OnDuty => "ON_DUTY",
        }
    }

    /// Human label for table output and graph legends.
    pub fn label(&self) -> &'static str {
        match self {
            DutyStatus::OffDuty => "OFF DUTY",
            DutyStatus::Sleeper => "SLEEPER",
            DutyStatus::Driving => "DRIVING",
            DutyStatus::OnDuty => "ON DUTY",
        }
    }

    /// Fixed vertical plot position of the status band, in the
    /// 0-200-high graph-local coordinate space. The renderer's legend
    /// must use the same values.
    pub fn ordinate(&self) -> f64 {
        match self {
            DutyStatus::OffDuty => 30.0,
            DutyStatus::Sleeper => 70.0,
            DutyStatus::Driving => 110.0,
            DutyStatus::OnDuty => 150.0,
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.tag()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        Self::from_tag(s)
    }

    pub fn colour(&self) -> Colour {
        match self {
            DutyStatus::OffDuty => Colour::Green,
            DutyStatus::Sleeper => Colour::Purple,
            DutyStatus::Driving => Colour::Yellow,
            DutyStatus::OnDuty => Colour::Cyan,
        }
    }

    pub fn is_driving(&self) -> bool {
        matches!(self, DutyStatus::Driving)
    }
}
