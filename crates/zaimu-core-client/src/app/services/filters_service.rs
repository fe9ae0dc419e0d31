// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::BTreeMap;
use std::future::Future;

use anyhow::Result;
use serde_json::json;
use tracing::warn;

use zaimu_proc_macros::InjectDependencies;

use crate::app::deps::{
    DynAppContext, DynClientEventDispatcher, DynFilterSnapshotsRepository,
    DynPreferencesService, DynSavedFiltersRepository, DynTimeProvider, WriteFailurePolicy,
};
use crate::client_event::Notification;
use crate::domain::shared::models::UserId;
use crate::domain::tasks::models::{FilterName, FilterPredicate, SavedFilter};
use crate::ClientEvent;

/// The built-in filter every account starts with. It cannot be deleted,
/// renamed or overwritten.
pub const SYSTEM_DEFAULT_FILTER_NAME: &str = "マイタスク";

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FilterError {
    #[error("A filter needs a name.")]
    MissingName,
    #[error("No filter named '{0}' exists.")]
    UnknownFilter(FilterName),
    #[error("The filter '{SYSTEM_DEFAULT_FILTER_NAME}' is built-in and cannot be modified.")]
    ProtectedFilter,
}

#[derive(InjectDependencies)]
pub struct FiltersService {
    #[inject]
    ctx: DynAppContext,
    #[inject]
    client_event_dispatcher: DynClientEventDispatcher,
    #[inject]
    saved_filters_repo: DynSavedFiltersRepository,
    #[inject]
    filter_snapshots_repo: DynFilterSnapshotsRepository,
    #[inject]
    preferences_service: DynPreferencesService,
    #[inject]
    time_provider: DynTimeProvider,
}

impl FiltersService {
    pub fn filters(&self) -> Vec<SavedFilter> {
        self.saved_filters_repo.get_all()
    }

    pub fn default_filter(&self) -> Option<SavedFilter> {
        let name = self.saved_filters_repo.default_filter_name()?;
        self.saved_filters_repo.get(&name)
    }

    /// Loads the saved filters from the backend and makes sure the built-in
    /// default exists.
    pub async fn restore(&self) -> Result<()> {
        let user_id = self.ctx.current_user_id()?;
        let preferences = self
            .preferences_service
            .load_filter_preferences(&user_id)
            .await?;

        self.saved_filters_repo
            .replace(preferences.filters, preferences.default_filter);
        self.ensure_system_default_filter().await?;

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::FiltersChanged);
        Ok(())
    }

    /// Creates or updates a saved filter.
    pub async fn save_filter(
        &self,
        name: FilterName,
        predicate: FilterPredicate,
    ) -> Result<(), FilterError> {
        if name.as_ref().trim().is_empty() {
            return Err(FilterError::MissingName);
        }

        if name.as_ref() == SYSTEM_DEFAULT_FILTER_NAME {
            return Err(FilterError::ProtectedFilter);
        }
        let previous = self.saved_filters_repo.get(&name);
        if previous.as_ref().is_some_and(|f| f.is_system_default) {
            return Err(FilterError::ProtectedFilter);
        }

        let filter = SavedFilter {
            name: name.clone(),
            predicate,
            is_system_default: false,
            created_at: previous
                .as_ref()
                .map(|f| f.created_at)
                .unwrap_or_else(|| self.time_provider.now()),
        };

        self.saved_filters_repo.put(filter.clone());
        self.dispatch_filters_changed();

        let repo = self.saved_filters_repo.clone();
        self.persist(
            |user_id| async move { self.preferences_service.save_filter(&user_id, &filter).await },
            move || match previous {
                Some(previous) => repo.put(previous),
                None => {
                    repo.delete(&name);
                }
            },
        )
        .await;

        Ok(())
    }

    /// Deletes a saved filter. If it was the default, the default
    /// designation is cleared as well.
    pub async fn delete_filter(&self, name: &FilterName) -> Result<(), FilterError> {
        if name.as_ref() == SYSTEM_DEFAULT_FILTER_NAME {
            return Err(FilterError::ProtectedFilter);
        }
        let Some(filter) = self.saved_filters_repo.get(name) else {
            return Err(FilterError::UnknownFilter(name.clone()));
        };
        if filter.is_system_default {
            return Err(FilterError::ProtectedFilter);
        }

        let was_default = self.saved_filters_repo.default_filter_name().as_ref() == Some(name);

        self.saved_filters_repo.delete(name);
        if was_default {
            self.saved_filters_repo.set_default_filter_name(None);
        }
        self.dispatch_filters_changed();

        let repo = self.saved_filters_repo.clone();
        let name = name.clone();
        self.persist(
            |user_id| async move {
                self.preferences_service.delete_filter(&user_id, &name).await?;
                if was_default {
                    self.preferences_service
                        .set_default_filter(&user_id, None)
                        .await?;
                }
                Ok(())
            },
            move || {
                let name = filter.name.clone();
                repo.put(filter);
                if was_default {
                    repo.set_default_filter_name(Some(name));
                }
            },
        )
        .await;

        Ok(())
    }

    /// Renames a saved filter, keeping the default designation intact when
    /// the renamed filter is the default.
    pub async fn rename_filter(
        &self,
        name: &FilterName,
        new_name: FilterName,
    ) -> Result<(), FilterError> {
        if name.as_ref() == SYSTEM_DEFAULT_FILTER_NAME
            || new_name.as_ref() == SYSTEM_DEFAULT_FILTER_NAME
        {
            return Err(FilterError::ProtectedFilter);
        }
        if new_name.as_ref().trim().is_empty() {
            return Err(FilterError::MissingName);
        }
        let Some(filter) = self.saved_filters_repo.get(name) else {
            return Err(FilterError::UnknownFilter(name.clone()));
        };
        if filter.is_system_default {
            return Err(FilterError::ProtectedFilter);
        }

        let was_default = self.saved_filters_repo.default_filter_name().as_ref() == Some(name);

        self.saved_filters_repo.delete(name);
        self.saved_filters_repo.put(SavedFilter {
            name: new_name.clone(),
            predicate: filter.predicate.clone(),
            is_system_default: false,
            created_at: filter.created_at,
        });
        if was_default {
            self.saved_filters_repo
                .set_default_filter_name(Some(new_name.clone()));
        }
        self.dispatch_filters_changed();

        let repo = self.saved_filters_repo.clone();
        let old_name = name.clone();
        let renamed = new_name.clone();
        self.persist(
            |user_id| async move {
                self.preferences_service
                    .rename_filter(&user_id, &old_name, &new_name)
                    .await?;
                if was_default {
                    self.preferences_service
                        .set_default_filter(&user_id, Some(new_name))
                        .await?;
                }
                Ok(())
            },
            move || {
                let name = filter.name.clone();
                repo.delete(&renamed);
                repo.put(filter);
                if was_default {
                    repo.set_default_filter_name(Some(name));
                }
            },
        )
        .await;

        Ok(())
    }

    /// Designates a saved filter as the default, or clears the designation.
    pub async fn set_default_filter(&self, name: Option<FilterName>) -> Result<(), FilterError> {
        if let Some(name) = &name {
            if self.saved_filters_repo.get(name).is_none() {
                return Err(FilterError::UnknownFilter(name.clone()));
            }
        }

        let previous = self.saved_filters_repo.default_filter_name();
        self.saved_filters_repo.set_default_filter_name(name.clone());
        self.dispatch_filters_changed();

        let repo = self.saved_filters_repo.clone();
        self.persist(
            |user_id| async move {
                self.preferences_service
                    .set_default_filter(&user_id, name)
                    .await
            },
            move || repo.set_default_filter_name(previous),
        )
        .await;

        Ok(())
    }

    /// Remembers the filter currently applied in a task view.
    pub fn save_view_snapshot(&self, view: &str, predicate: FilterPredicate) {
        let Ok(user_id) = self.ctx.current_user_id() else {
            return;
        };
        self.filter_snapshots_repo.put(&user_id, view, predicate);
    }

    /// The filter to apply when entering a task view: the view's snapshot
    /// if one exists, the default filter otherwise.
    pub fn initial_filter_for_view(&self, view: &str) -> FilterPredicate {
        if let Ok(user_id) = self.ctx.current_user_id() {
            if let Some(snapshot) = self.filter_snapshots_repo.get(&user_id, view) {
                return snapshot;
            }
        }
        self.default_filter()
            .map(|filter| filter.predicate)
            .unwrap_or_default()
    }

    async fn ensure_system_default_filter(&self) -> Result<()> {
        let name = FilterName::from(SYSTEM_DEFAULT_FILTER_NAME);
        if self.saved_filters_repo.get(&name).is_some() {
            return Ok(());
        }

        let user_id = self.ctx.current_user_id()?;
        let filter = SavedFilter {
            name: name.clone(),
            predicate: FilterPredicate {
                fields: BTreeMap::from([("assignee".to_string(), json!(user_id))]),
                hide_completed: true,
            },
            is_system_default: true,
            created_at: self.time_provider.now(),
        };

        self.saved_filters_repo.put(filter.clone());
        if self.saved_filters_repo.default_filter_name().is_none() {
            self.saved_filters_repo
                .set_default_filter_name(Some(name.clone()));
        }

        if let Err(err) = self.preferences_service.save_filter(&user_id, &filter).await {
            warn!("Failed to persist the built-in filter: {err}");
        }

        Ok(())
    }

    /// Applies the configured failure policy to a remote write that backs
    /// an already-applied local change.
    async fn persist<F, Fut>(&self, write: F, revert: impl FnOnce())
    where
        F: FnOnce(UserId) -> Fut,
        Fut: Future<Output = Result<()>>,
    {
        let Ok(user_id) = self.ctx.current_user_id() else {
            return;
        };

        let Err(err) = write(user_id).await else {
            return;
        };
        warn!("Failed to persist filter change: {err}");

        match self.ctx.config.write_failure_policy {
            WriteFailurePolicy::KeepOptimistic => {
                self.client_event_dispatcher
                    .dispatch_event(ClientEvent::NotificationPosted {
                        notification: Notification::warning(
                            "Your filter change couldn't be saved to the server.",
                        ),
                    });
            }
            WriteFailurePolicy::Revert => {
                revert();
                self.dispatch_filters_changed();
                self.client_event_dispatcher
                    .dispatch_event(ClientEvent::NotificationPosted {
                        notification: Notification::error(
                            "Your filter change couldn't be saved and was undone.",
                        ),
                    });
            }
        }
    }

    fn dispatch_filters_changed(&self) {
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::FiltersChanged);
    }
}
