use lec_core::entities::{Module, ModuleProgress};
use lec_core::enums::ModuleProgressStatus;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleAction {
    Start,
    Continue,
    Review,
}

impl ModuleAction {
    #[must_use]
    pub const fn for_status(status: ModuleProgressStatus) -> Self {
        match status {
            ModuleProgressStatus::NotStarted => Self::Start,
            ModuleProgressStatus::InProgress => Self::Continue,
            ModuleProgressStatus::Completed => Self::Review,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::Continue => "Continue",
            Self::Review => "Review",
        }
    }
}

/// One line of the course outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleRow {
    pub module_id: String,
    pub position: u32,
    pub title: String,
    pub status: ModuleProgressStatus,
    pub action: ModuleAction,
    pub label: &'static str,
    pub locked: bool,
    pub completed_lessons: u32,
    pub total_lessons: u32,
}

/// Join modules with the user's progress, in position order.
///
/// Modules without a progress record count as not started. When the course
/// is `sequential`, a module is locked until the one before it is completed.
#[must_use]
pub fn module_rows(modules: &[Module], progress: &[ModuleProgress], sequential: bool) -> Vec<ModuleRow> {
    let mut ordered: Vec<&Module> = modules.iter().collect();
    ordered.sort_by_key(|module| module.position);

    let mut previous_completed = true;
    ordered
        .into_iter()
        .map(|module| {
            let record = progress.iter().find(|p| p.module_id == module.id);
            let status = record.map_or(ModuleProgressStatus::NotStarted, |p| p.status);
            let action = ModuleAction::for_status(status);
            let locked = sequential && !previous_completed;
            previous_completed = status == ModuleProgressStatus::Completed;

            ModuleRow {
                module_id: module.id.clone(),
                position: module.position,
                title: module.title.clone(),
                status,
                action,
                label: if locked { "Locked" } else { action.label() },
                locked,
                completed_lessons: record.map_or(0, |p| p.completed_lessons),
                total_lessons: record.map_or(module.lesson_count, |p| p.total_lessons),
            }
        })
        .collect()
}
