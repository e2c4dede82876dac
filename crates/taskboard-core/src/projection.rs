//! Filter/Group Projection
//!
//! Derives what the dashboard shows from the reconciled list and the two
//! view settings.

use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::task::{ParseStatusError, Status, Task};

/// Status filter. Wire form `"all"` or a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Filter {
    #[default]
    All,
    Only(Status),
}

impl Filter {
    pub const OPTIONS: [Filter; 4] = [
        Filter::All,
        Filter::Only(Status::Todo),
        Filter::Only(Status::InProgress),
        Filter::Only(Status::Done),
    ];

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(status) => task.status == *status,
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            Filter::All => "filter.all",
            Filter::Only(status) => status.label_key(),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => f.write_str("all"),
            Filter::Only(status) => write!(f, "{status}"),
        }
    }
}

impl FromStr for Filter {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Filter::All),
            other => other.parse().map(Filter::Only),
        }
    }
}

impl TryFrom<String> for Filter {
    type Error = ParseStatusError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Filter> for String {
    fn from(filter: Filter) -> Self {
        filter.to_string()
    }
}

/// Grouping of the rendered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupMode {
    #[default]
    None,
    Status,
}

impl GroupMode {
    pub const OPTIONS: [GroupMode; 2] = [GroupMode::None, GroupMode::Status];

    pub fn as_str(&self) -> &'static str {
        match self {
            GroupMode::None => "none",
            GroupMode::Status => "status",
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            GroupMode::None => "group.none",
            GroupMode::Status => "group.status",
        }
    }
}

impl FromStr for GroupMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(GroupMode::None),
            "status" => Ok(GroupMode::Status),
            other => Err(format!("unknown group mode `{other}`")),
        }
    }
}

/// One bucket per status, each keeping the relative order of its input.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct StatusGroups {
    pub todo: Vec<Task>,
    #[serde(rename = "in-progress")]
    pub in_progress: Vec<Task>,
    pub done: Vec<Task>,
}

impl StatusGroups {
    pub fn get(&self, status: Status) -> &[Task] {
        match status {
            Status::Todo => &self.todo,
            Status::InProgress => &self.in_progress,
            Status::Done => &self.done,
        }
    }

    fn bucket_mut(&mut self, status: Status) -> &mut Vec<Task> {
        match status {
            Status::Todo => &mut self.todo,
            Status::InProgress => &mut self.in_progress,
            Status::Done => &mut self.done,
        }
    }

    pub fn len(&self) -> usize {
        self.todo.len() + self.in_progress.len() + self.done.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Serializes as `{"grouped": false, "tasks": [...]}` or
/// `{"grouped": true, "groups": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskView {
    Flat(Vec<Task>),
    Grouped(StatusGroups),
}

impl TaskView {
    pub fn is_grouped(&self) -> bool {
        matches!(self, TaskView::Grouped(_))
    }

    pub fn is_empty(&self) -> bool {
        match self {
            TaskView::Flat(tasks) => tasks.is_empty(),
            TaskView::Grouped(groups) => groups.is_empty(),
        }
    }
}

impl Serialize for TaskView {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("TaskView", 2)?;
        match self {
            TaskView::Flat(tasks) => {
                state.serialize_field("grouped", &false)?;
                state.serialize_field("tasks", tasks)?;
            }
            TaskView::Grouped(groups) => {
                state.serialize_field("grouped", &true)?;
                state.serialize_field("groups", groups)?;
            }
        }
        state.end()
    }
}

pub fn project(tasks: &[Task], filter: Filter, group: GroupMode) -> TaskView {
    let filtered = tasks.iter().filter(|task| filter.matches(task)).cloned();
    match group {
        GroupMode::None => TaskView::Flat(filtered.collect()),
        GroupMode::Status => {
            let mut groups = StatusGroups::default();
            for task in filtered {
                groups.bucket_mut(task.status).push(task);
            }
            TaskView::Grouped(groups)
        }
    }
}
