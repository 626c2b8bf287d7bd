use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Status of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    Pending,
    #[serde(rename = "WIP")]
    Wip,
    Done,
}

impl TaskStatus {
    /// Position used by the status sort (Pending first, Done last)
    pub fn rank(&self) -> u8 {
        match self {
            Self::Pending => 0,
            Self::Wip => 1,
            Self::Done => 2,
        }
    }

    /// Label as stored on disk
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Wip => "WIP",
            Self::Done => "Done",
        }
    }

    pub fn all() -> &'static [TaskStatus] {
        &[TaskStatus::Pending, TaskStatus::Wip, TaskStatus::Done]
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "wip" => Ok(Self::Wip),
            "done" => Ok(Self::Done),
            other => Err(format!("unknown status '{}' (expected Pending, WIP or Done)", other)),
        }
    }
}

/// Display ordering for a project's task list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortMode {
    /// Pending, then WIP, then Done; manual order within a status
    #[default]
    Status,
    /// Case-insensitive by text
    Alphanumeric,
    /// By creation time
    Oldest,
}

impl SortMode {
    pub fn name(&self) -> &'static str {
        match self {
            SortMode::Status => "Status",
            SortMode::Alphanumeric => "Alphanumeric",
            SortMode::Oldest => "Oldest",
        }
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "status" => Ok(Self::Status),
            "alphanumeric" | "alpha" => Ok(Self::Alphanumeric),
            "oldest" => Ok(Self::Oldest),
            other => Err(format!("unknown sort mode '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_str() {
        assert_eq!("Pending".parse::<TaskStatus>(), Ok(TaskStatus::Pending));
        assert_eq!("wip".parse::<TaskStatus>(), Ok(TaskStatus::Wip));
        assert_eq!("DONE".parse::<TaskStatus>(), Ok(TaskStatus::Done));
        assert!("started".parse::<TaskStatus>().is_err());
    }

    #[test]
    fn test_status_rank() {
        assert!(TaskStatus::Pending.rank() < TaskStatus::Wip.rank());
        assert!(TaskStatus::Wip.rank() < TaskStatus::Done.rank());
    }

    #[test]
    fn test_status_serializes_as_label() {
        assert_eq!(serde_json::to_string(&TaskStatus::Wip).unwrap(), "\"WIP\"");
        let status: TaskStatus = serde_json::from_str("\"Done\"").unwrap();
        assert_eq!(status, TaskStatus::Done);
    }

    #[test]
    fn test_sort_mode_from_str() {
        assert_eq!("status".parse::<SortMode>(), Ok(SortMode::Status));
        assert_eq!("Alphanumeric".parse::<SortMode>(), Ok(SortMode::Alphanumeric));
        assert_eq!("alpha".parse::<SortMode>(), Ok(SortMode::Alphanumeric));
        assert_eq!("oldest".parse::<SortMode>(), Ok(SortMode::Oldest));
        assert!("newest".parse::<SortMode>().is_err());
    }
}
