use std::collections::HashMap;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;
use crate::domain::ports::WizardRepository;
use crate::domain::services::wizard::Wizard;
use crate::error::AppError;

struct StoredWizard {
    wizard: Wizard,
    touched_at: DateTime<Utc>,
}

/// Process-local wizard sessions. Nothing survives a restart.
#[derive(Default)]
pub struct MemoryWizardRepo {
    sessions: RwLock<HashMap<Uuid, StoredWizard>>,
}

impl MemoryWizardRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl WizardRepository for MemoryWizardRepo {
    async fn load(&self, session_id: Uuid) -> Result<Option<Wizard>, AppError> {
        Ok(self.sessions.read().await.get(&session_id).map(|s| s.wizard.clone()))
    }

    async fn save(&self, session_id: Uuid, wizard: &Wizard) -> Result<(), AppError> {
        self.sessions.write().await.insert(session_id, StoredWizard {
            wizard: wizard.clone(),
            touched_at: Utc::now(),
        });
        Ok(())
    }

    async fn purge_idle(&self, idle_since: DateTime<Utc>) -> Result<usize, AppError> {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| s.touched_at >= idle_since);
        Ok(before - sessions.len())
    }
}
