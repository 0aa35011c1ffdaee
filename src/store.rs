use crate::models::{ChatMessage, Feedback, Project, ProjectStatus};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// In-memory holder of all mutable application data for the process's
/// lifetime. Cloning the handle is cheap and every clone observes the same
/// data, so it is passed around the way a connection pool would be.
#[derive(Debug, Clone, Default)]
pub struct Store {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    projects: Vec<Project>,
    chat_messages: Vec<ChatMessage>,
    feedback: Vec<Feedback>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with the showcase projects the demo frontend expects.
    pub fn with_demo_projects() -> Self {
        let store = Self::new();
        store.insert_project(Project::new(
            "DevPortal".to_string(),
            "Modern web development platform".to_string(),
            "React + Vite".to_string(),
        ));
        store.insert_project(
            Project::new(
                "E-Commerce Site".to_string(),
                "Full-stack online shopping platform".to_string(),
                "Node.js + MongoDB".to_string(),
            )
            .with_status(ProjectStatus::Completed),
        );
        store.insert_project(
            Project::new(
                "Mobile App".to_string(),
                "Cross-platform mobile application".to_string(),
                "React Native".to_string(),
            )
            .with_status(ProjectStatus::InProgress),
        );
        store.insert_project(Project::new(
            "Data Dashboard".to_string(),
            "Analytics and reporting dashboard".to_string(),
            "Python + Flask".to_string(),
        ));
        store
    }

    /// Assigns the next id (current count + 1) and appends the project.
    pub fn insert_project(&self, mut project: Project) -> Project {
        let mut inner = self.write();
        project.id = inner.projects.len() as i32 + 1;
        inner.projects.push(project.clone());
        project
    }

    pub fn projects(&self) -> Vec<Project> {
        self.read().projects.clone()
    }

    pub fn project(&self, id: i32) -> Option<Project> {
        self.read().projects.iter().find(|p| p.id == id).cloned()
    }

    pub fn project_count(&self) -> usize {
        self.read().projects.len()
    }

    pub fn append_chat_message(&self, message: ChatMessage) {
        self.write().chat_messages.push(message);
    }

    /// Last `limit` chat messages in original (chronological) order.
    pub fn recent_chat_messages(&self, limit: usize) -> Vec<ChatMessage> {
        let inner = self.read();
        let messages = &inner.chat_messages;
        messages[messages.len().saturating_sub(limit)..].to_vec()
    }

    pub fn chat_message_count(&self) -> usize {
        self.read().chat_messages.len()
    }

    /// Assigns the next id (current count + 1) and appends the entry.
    pub fn insert_feedback(&self, mut feedback: Feedback) -> Feedback {
        let mut inner = self.write();
        feedback.id = inner.feedback.len() as i32 + 1;
        inner.feedback.push(feedback.clone());
        feedback
    }

    pub fn feedback_count(&self) -> usize {
        self.read().feedback.len()
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_ids_are_monotonic_from_one() {
        let store = Store::new();
        for expected in 1..=3 {
            let project = store.insert_project(Project::new(
                format!("p{expected}"),
                "".to_string(),
                "".to_string(),
            ));
            assert_eq!(project.id, expected);
        }
        assert_eq!(store.project_count(), 3);
    }

    #[test]
    fn clones_share_the_same_data() {
        let store = Store::new();
        let handle = store.clone();
        handle.insert_project(Project::new("shared".into(), "".into(), "".into()));
        assert_eq!(store.project_count(), 1);
    }

    #[test]
    fn recent_chat_messages_truncates_to_the_tail() {
        let store = Store::new();
        for i in 0..25 {
            store.append_chat_message(ChatMessage::from_user(None, format!("m{i}")));
        }
        let recent = store.recent_chat_messages(20);
        assert_eq!(recent.len(), 20);
        assert_eq!(recent.first().unwrap().message, "m5");
        assert_eq!(recent.last().unwrap().message, "m24");
    }

    #[test]
    fn recent_chat_messages_returns_all_when_short() {
        let store = Store::new();
        store.append_chat_message(ChatMessage::from_user(None, "only".into()));
        assert_eq!(store.recent_chat_messages(20).len(), 1);
    }

    #[test]
    fn feedback_ids_follow_count() {
        let store = Store::new();
        let first = store.insert_feedback(Feedback::new("a".into(), "a@x".into(), "hi".into()));
        let second = store.insert_feedback(Feedback::new("b".into(), "b@x".into(), "yo".into()));
        assert_eq!((first.id, second.id), (1, 2));
        assert_eq!(store.feedback_count(), 2);
    }

    #[test]
    fn demo_seed_contains_four_projects() {
        let store = Store::with_demo_projects();
        let projects = store.projects();
        assert_eq!(projects.len(), 4);
        assert_eq!(projects[1].status, ProjectStatus::Completed);
        assert_eq!(projects[2].status, ProjectStatus::InProgress);
    }
}
