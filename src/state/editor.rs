use crate::models::{User, UserUpdate};
use crate::state::session::{SessionError, SessionStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Viewing,
    Editing,
}

/// Transient edit session over the active user's profile. While editing,
/// all changes land in a local draft; the session store is only touched
/// by an explicit save.
#[derive(Debug, Clone)]
pub struct ProfileEditor {
    mode: EditorMode,
    draft: User,
    staged_photo: Option<String>,
}

impl ProfileEditor {
    /// Start in viewing mode over the given profile snapshot
    pub fn new(user: User) -> Self {
        Self {
            mode: EditorMode::Viewing,
            draft: user,
            staged_photo: None,
        }
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == EditorMode::Editing
    }

    /// Profile as currently displayed: the draft while editing, the last
    /// adopted snapshot otherwise
    pub fn draft(&self) -> &User {
        &self.draft
    }

    /// Mutable draft access, available only while editing
    pub fn draft_mut(&mut self) -> Option<&mut User> {
        match self.mode {
            EditorMode::Editing => Some(&mut self.draft),
            EditorMode::Viewing => None,
        }
    }

    /// Pending photo replacement, if one has been staged
    pub fn staged_photo(&self) -> Option<&str> {
        self.staged_photo.as_deref()
    }

    /// Enter editing mode: snapshot the current profile into the draft
    /// and drop any previously staged photo
    pub fn begin_edit(&mut self, current: &User) {
        self.draft = current.clone();
        self.staged_photo = None;
        self.mode = EditorMode::Editing;
    }

    /// Stage a pending photo replacement for the next save
    pub fn stage_photo(&mut self, reference: impl Into<String>) {
        self.staged_photo = Some(reference.into());
    }

    /// Commit the draft: merge it into the session store (staged photo
    /// winning over the previous one) and return to viewing mode
    pub fn save(&mut self, store: &mut SessionStore) -> Result<User, SessionError> {
        let photo = self
            .staged_photo
            .clone()
            .or_else(|| self.draft.photo.clone());

        let update = UserUpdate {
            name: Some(self.draft.name.clone()),
            goal: Some(self.draft.goal.clone()),
            age: Some(self.draft.age),
            weight: Some(self.draft.weight),
            height: Some(self.draft.height),
            fitness_level: Some(self.draft.fitness_level),
            preferred_workouts: Some(self.draft.preferred_workouts.clone()),
            weekly_goal: Some(self.draft.weekly_goal),
            photo,
        };

        let merged = store.merge_update(update)?;
        self.draft = merged.clone();
        self.staged_photo = None;
        self.mode = EditorMode::Viewing;
        Ok(merged)
    }

    /// Abandon the draft and any staged photo, restoring the given
    /// profile, and return to viewing mode
    pub fn cancel(&mut self, current: &User) {
        self.draft = current.clone();
        self.staged_photo = None;
        self.mode = EditorMode::Viewing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FitnessLevel;

    fn sample_user() -> User {
        User {
            name: "Alex".to_string(),
            email: "alex@example.com".to_string(),
            age: 31,
            weight: 80.0,
            height: 178.0,
            goal: "Lose weight".to_string(),
            fitness_level: FitnessLevel::Intermediate,
            preferred_workouts: vec![],
            weekly_goal: 4,
            photo: Some("avatars/alex.png".to_string()),
        }
    }

    #[test]
    fn draft_is_only_mutable_while_editing() {
        let mut editor = ProfileEditor::new(sample_user());
        assert!(editor.draft_mut().is_none());

        editor.begin_edit(&sample_user());
        assert!(editor.draft_mut().is_some());
    }

    #[test]
    fn cancel_discards_draft_changes() {
        let mut store = SessionStore::seeded(Some(sample_user()));
        let mut editor = ProfileEditor::new(sample_user());

        editor.begin_edit(&sample_user());
        if let Some(draft) = editor.draft_mut() {
            draft.name = "Changed".to_string();
        }
        editor.stage_photo("/tmp/new.png");

        let current = store.current_user().unwrap().clone();
        editor.cancel(&current);

        assert_eq!(editor.mode(), EditorMode::Viewing);
        assert_eq!(editor.draft().name, "Alex");
        assert!(editor.staged_photo().is_none());
        assert_eq!(store.current_user().unwrap().name, "Alex");
    }

    #[test]
    fn save_merges_draft_and_staged_photo() {
        let mut store = SessionStore::seeded(Some(sample_user()));
        let mut editor = ProfileEditor::new(sample_user());

        editor.begin_edit(&sample_user());
        if let Some(draft) = editor.draft_mut() {
            draft.weight = 74.0;
        }
        editor.stage_photo("/tmp/new.png");

        let merged = editor.save(&mut store).unwrap();

        assert_eq!(merged.weight, 74.0);
        assert_eq!(merged.photo.as_deref(), Some("/tmp/new.png"));
        assert_eq!(editor.mode(), EditorMode::Viewing);
        assert!(editor.staged_photo().is_none());
        assert_eq!(store.current_user().unwrap().weight, 74.0);
    }

    #[test]
    fn save_keeps_previous_photo_when_none_staged() {
        let mut store = SessionStore::seeded(Some(sample_user()));
        let mut editor = ProfileEditor::new(sample_user());

        editor.begin_edit(&sample_user());
        if let Some(draft) = editor.draft_mut() {
            draft.goal = "Build muscle".to_string();
        }

        let merged = editor.save(&mut store).unwrap();

        assert_eq!(merged.goal, "Build muscle");
        assert_eq!(merged.photo.as_deref(), Some("avatars/alex.png"));
    }

    #[test]
    fn save_without_session_propagates_the_error() {
        let mut store = SessionStore::seeded(None);
        let mut editor = ProfileEditor::new(sample_user());

        editor.begin_edit(&sample_user());
        let result = editor.save(&mut store);

        assert_eq!(result, Err(SessionError::NoActiveSession));
        assert!(editor.is_editing());
    }
}
