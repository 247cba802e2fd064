use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};

use parking_lot::Mutex;
use ulid::Ulid;

use super::RubricForm;

/// Forms not touched for this long are dropped when new forms are opened.
pub const FORM_TTL: Duration = Duration::from_secs(2 * 60 * 60);

/// Upper bound on live forms; the least recently touched one goes first.
pub const MAX_FORMS: usize = 256;

struct Entry {
    form: RubricForm,
    touched: Instant,
}

/// In-memory rubric forms keyed by page session id.
#[derive(Clone)]
pub struct FormStore {
    forms: Arc<Mutex<HashMap<Ulid, Entry>>>,
    max_forms: usize,
}

impl Default for FormStore {
    fn default() -> Self {
        Self::with_limit(MAX_FORMS)
    }
}

impl FormStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(max_forms: usize) -> Self {
        Self {
            forms: Arc::default(),
            max_forms: max_forms.max(1),
        }
    }

    pub fn open(&self) -> Ulid {
        let id = Ulid::new();
        let now = Instant::now();

        let mut forms = self.forms.lock();
        let before = forms.len();
        forms.retain(|_, e| now.duration_since(e.touched) < FORM_TTL);
        if forms.len() < before {
            tracing::debug!("evicted {} idle rubric forms", before - forms.len());
        }
        while forms.len() >= self.max_forms {
            let Some(oldest) = forms
                .iter()
                .min_by_key(|(_, e)| e.touched)
                .map(|(id, _)| *id)
            else {
                break;
            };
            forms.remove(&oldest);
            tracing::debug!("rubric form limit reached, evicted {oldest}");
        }
        forms.insert(
            id,
            Entry {
                form: RubricForm::new(),
                touched: now,
            },
        );
        id
    }

    /// Runs `f` on the form under the store lock. `None` if the form is gone.
    pub fn with_form<T>(&self, id: Ulid, f: impl FnOnce(&mut RubricForm) -> T) -> Option<T> {
        let mut forms = self.forms.lock();
        let entry = forms.get_mut(&id)?;
        entry.touched = Instant::now();
        Some(f(&mut entry.form))
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.forms.lock().len()
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
