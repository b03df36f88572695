//! Action handlers: one per navigation target

use crate::config::{Config, SortOrder};
use crate::dialog::{Dialog, NoticeLevel};
use crate::error::{AppError, Result};
use crate::listing;
use crate::router::{Action, Request, RouteError};
use crate::view::Directory;
use brainrot_catalogue::Catalogue;
use brainrot_core::DeleteOutcome;
use brainrot_store::CollectionStore;
use serde::Serialize;

/// What an action produced
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Response {
    /// Listing to display, if the action shows one
    pub directory: Option<Directory>,
    /// The collection changed and the current view should be reloaded
    pub refresh: bool,
}

impl Response {
    fn show(directory: Directory) -> Self {
        Self {
            directory: Some(directory),
            refresh: false,
        }
    }

    fn refresh() -> Self {
        Self {
            directory: None,
            refresh: true,
        }
    }

    fn nothing() -> Self {
        Self::default()
    }
}

/// The brainrot manager, wired to its documents and a dialog
pub struct App<D> {
    config: Config,
    catalogue: Catalogue,
    store: CollectionStore,
    dialog: D,
}

impl<D: Dialog> App<D> {
    pub fn new(config: Config, dialog: D) -> Self {
        let catalogue = Catalogue::new(config.catalogue_paths());
        let store = CollectionStore::new(config.bases_path());
        Self {
            config,
            catalogue,
            store,
            dialog,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &CollectionStore {
        &self.store
    }

    pub fn dialog(&self) -> &D {
        &self.dialog
    }

    pub fn into_dialog(self) -> D {
        self.dialog
    }

    /// Handle one navigation query string
    ///
    /// Never fails: errors are reported through the dialog.
    pub fn handle_query(&mut self, query: &str) -> Response {
        let request = Request::parse(query);
        match Action::from_request(&request) {
            Ok(action) => self.dispatch(action),
            Err(RouteError::UnknownAction(action)) => {
                tracing::warn!(action = %action, "ignoring unknown action");
                Response::nothing()
            }
            Err(e) => {
                self.report(&AppError::from(e));
                Response::nothing()
            }
        }
    }

    /// Run an action, reporting any failure through the dialog
    pub fn dispatch(&mut self, action: Action) -> Response {
        let span = tracing::info_span!("action", name = action.name().unwrap_or("menu"));
        let _enter = span.enter();

        match self.run(action) {
            Ok(response) => response,
            Err(e) => {
                self.report(&e);
                Response::nothing()
            }
        }
    }

    fn run(&mut self, action: Action) -> Result<Response> {
        match action {
            Action::Menu => Ok(Response::show(listing::root_menu(&self.config))),
            Action::Bases => self.show_bases(),
            Action::Traits => self.show_traits(),
            Action::Catalogue => self.show_catalogue(),
            Action::BaseBrainrots { base } => self.show_base_brainrots(&base),
            Action::AddBase => self.add_base(),
            Action::RenameBase { name } => self.rename_base(&name),
            Action::DeleteBase { name } => self.delete_base(&name),
            Action::AddBrainrot {
                base,
                brainrot,
                mutation,
                traits,
            } => self.add_brainrot(&base, brainrot.as_deref(), mutation.as_deref(), &traits),
            Action::DeleteBrainrot { base, id } => self.delete_brainrot(&base, &id),
            Action::MoveBrainrot { base, id } => self.move_brainrot(&base, &id),
        }
    }

    fn report(&mut self, error: &AppError) {
        tracing::error!(error = %error, "action failed");
        self.dialog.ok(error.heading(), &error.to_string());
    }

    fn show_bases(&mut self) -> Result<Response> {
        let bases = self.store.list_bases()?;
        Ok(Response::show(listing::bases(&self.config, &bases)))
    }

    fn show_traits(&mut self) -> Result<Response> {
        let traits = self.catalogue.load_traits()?;
        Ok(Response::show(listing::traits(&self.config, &traits)))
    }

    fn show_catalogue(&mut self) -> Result<Response> {
        let creatures = self.catalogue.load_catalogue()?;
        Ok(Response::show(listing::catalogue(&self.config, &creatures)))
    }

    fn show_base_brainrots(&mut self, base_name: &str) -> Result<Response> {
        let instances = match self.config.sort {
            SortOrder::Insertion => self.store.find_base(base_name)?.brainrots,
            SortOrder::IncomeDesc => self.store.instances_by_income(base_name)?,
        };
        if instances.is_empty() {
            self.dialog.notification(
                "No brainrots",
                &format!("Base {} is empty.", base_name),
                NoticeLevel::Info,
            );
        }
        Ok(Response::show(listing::base_brainrots(
            &self.config,
            base_name,
            &instances,
        )))
    }

    fn add_base(&mut self) -> Result<Response> {
        let Some(name) = self.dialog.input("Name of the new base:", "") else {
            return Ok(Response::nothing());
        };
        if !self.store.add_base(&name)? {
            return Ok(Response::nothing());
        }

        self.dialog
            .notification("Base added", &format!("{} was created.", name), NoticeLevel::Info);
        Ok(Response::refresh())
    }

    fn rename_base(&mut self, name: &str) -> Result<Response> {
        let Some(new_name) = self.dialog.input("New name for the base:", name) else {
            return Ok(Response::nothing());
        };
        if new_name.trim().is_empty() {
            return Ok(Response::nothing());
        }

        if !self.store.rename_base(name, &new_name)? {
            self.dialog.notification(
                "No change",
                &format!("Base '{}' not found.", name),
                NoticeLevel::Warning,
            );
            return Ok(Response::nothing());
        }

        self.dialog.notification(
            "Base renamed",
            &format!("{} → {}", name, new_name),
            NoticeLevel::Info,
        );
        Ok(Response::refresh())
    }

    fn delete_base(&mut self, name: &str) -> Result<Response> {
        if self.store.delete_base(name)? == 0 {
            self.dialog.notification(
                "No change",
                &format!("Base '{}' not found.", name),
                NoticeLevel::Warning,
            );
            return Ok(Response::nothing());
        }

        self.dialog
            .notification("Base deleted", &format!("{} was removed.", name), NoticeLevel::Info);
        Ok(Response::refresh())
    }

    /// Pick a creature, a mutation and traits, then add the instance
    ///
    /// Choices named in the request are looked up in the catalogue instead of
    /// prompted for; naming both the creature and the mutation skips the trait
    /// prompt too. Cancelling the creature or mutation step aborts without
    /// writing. Cancelling the trait step means no traits.
    fn add_brainrot(
        &mut self,
        base_name: &str,
        brainrot: Option<&str>,
        mutation: Option<&str>,
        traits: &[String],
    ) -> Result<Response> {
        let creature = match brainrot {
            Some(name) => self.catalogue.find_creature(name)?,
            None => {
                let mut creatures = self.catalogue.load_catalogue()?;
                let labels: Vec<String> = creatures.iter().map(listing::creature_choice).collect();
                let Some(index) = self
                    .dialog
                    .select("Select a brainrot to add", &labels)
                    .filter(|&i| i < creatures.len())
                else {
                    return Ok(Response::nothing());
                };
                creatures.swap_remove(index)
            }
        };

        let mutation_given = mutation.is_some();
        let mutation = match mutation {
            Some(name) => self.catalogue.find_mutation(name)?,
            None => {
                let mut mutations = self.catalogue.load_mutations()?;
                let labels: Vec<String> = mutations.iter().map(listing::mutation_choice).collect();
                let Some(index) = self
                    .dialog
                    .select("Select a mutation", &labels)
                    .filter(|&i| i < mutations.len())
                else {
                    return Ok(Response::nothing());
                };
                mutations.swap_remove(index)
            }
        };

        let chosen = if !traits.is_empty() {
            self.catalogue.find_traits(traits)?
        } else if brainrot.is_some() && mutation_given {
            Vec::new()
        } else {
            let all = self.catalogue.load_traits()?;
            let labels: Vec<String> = all.iter().map(listing::trait_choice).collect();
            self.dialog
                .multiselect("Select traits", &labels)
                .unwrap_or_default()
                .into_iter()
                .filter_map(|i| all.get(i).cloned())
                .collect()
        };

        let instance = self
            .store
            .add_creature_instance(base_name, &creature, mutation, chosen)?;

        self.dialog.notification(
            "Brainrot added",
            &format!("{} in {}", instance.name(), base_name),
            NoticeLevel::Info,
        );
        Ok(Response::refresh())
    }

    fn delete_brainrot(&mut self, base_name: &str, id: &str) -> Result<Response> {
        match self.store.delete_creature_instance(base_name, id)? {
            DeleteOutcome::Deleted(_) => {
                self.dialog.notification(
                    "Brainrot deleted",
                    &format!("{} removed from {}", id, base_name),
                    NoticeLevel::Info,
                );
                Ok(Response::refresh())
            }
            DeleteOutcome::NoChange => {
                self.dialog.notification(
                    "No change",
                    &format!("ID '{}' not found.", id),
                    NoticeLevel::Warning,
                );
                Ok(Response::nothing())
            }
        }
    }

    fn move_brainrot(&mut self, base_name: &str, id: &str) -> Result<Response> {
        let plan = self.store.move_candidates(base_name, id)?;
        let heading = format!("Move {} to which base?", plan.instance.name());
        let Some(choice) = self
            .dialog
            .select(&heading, &plan.targets)
            .filter(|&i| i < plan.targets.len())
        else {
            return Ok(Response::nothing());
        };

        let moved = self.store.move_creature_instance(base_name, id, choice)?;
        self.dialog.notification(
            "🔁 Brainrot moved",
            &format!("{} → {}", moved.name(), moved.base_name),
            NoticeLevel::Info,
        );
        Ok(Response::refresh())
    }
}
