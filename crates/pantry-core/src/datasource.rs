//! Shared, observable source of truth for the grocery list

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Mutex;

use pantry_domain::{GroceryItemCategory, GroceryUser};

/// Holds the authoritative user snapshot and category list, and pushes the
/// full category list to every subscriber on each change.
///
/// There is no diffing: each emission replaces a subscriber's entire base.
/// The state is internally synchronized, so the host may mutate it from any
/// thread; each subscriber observes emissions in mutation order.
pub struct GroceryDataSource {
    state: Mutex<State>,
    subscribers: Mutex<Vec<Sender<Vec<GroceryItemCategory>>>>,
    showing_all_groceries: bool,
}

struct State {
    user: GroceryUser,
    categories: Vec<GroceryItemCategory>,
}

impl GroceryDataSource {
    pub fn new(
        user: GroceryUser,
        categories: Vec<GroceryItemCategory>,
        showing_all_groceries: bool,
    ) -> Self {
        Self {
            state: Mutex::new(State { user, categories }),
            subscribers: Mutex::new(Vec::new()),
            showing_all_groceries,
        }
    }

    /// Whether the host is showing every grocery list, purchased included.
    pub fn showing_all_groceries(&self) -> bool {
        self.showing_all_groceries
    }

    /// Snapshot of the current categories.
    pub fn categories(&self) -> Vec<GroceryItemCategory> {
        self.state.lock().unwrap().categories.clone()
    }

    /// Snapshot of the current user.
    pub fn user(&self) -> GroceryUser {
        self.state.lock().unwrap().user
    }

    /// Replace the category list and fan the new snapshot out to subscribers.
    pub fn set_categories(&self, categories: Vec<GroceryItemCategory>) {
        self.state.lock().unwrap().categories = categories.clone();
        self.notify(categories);
    }

    /// Replace the user snapshot. User changes are read on demand by the
    /// controllers and are not pushed to category subscribers.
    pub fn set_user(&self, user: GroceryUser) {
        self.state.lock().unwrap().user = user;
    }

    /// Subscribe to category changes. Each emission is the full list.
    pub fn subscribe(&self) -> Receiver<Vec<GroceryItemCategory>> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.lock().unwrap().push(tx);
        rx
    }

    fn notify(&self, categories: Vec<GroceryItemCategory>) {
        // Subscribers whose receiving side was dropped are pruned here.
        self.subscribers
            .lock()
            .unwrap()
            .retain(|tx| tx.send(categories.clone()).is_ok());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantry_domain::CategoryColor;

    fn make_category(id: &str) -> GroceryItemCategory {
        GroceryItemCategory {
            id: id.into(),
            name: id.into(),
            items: vec![],
            color: CategoryColor::Green,
        }
    }

    fn make_datasource() -> GroceryDataSource {
        GroceryDataSource::new(GroceryUser::default(), vec![], true)
    }

    #[test]
    fn subscribers_receive_emissions_in_order() {
        let datasource = make_datasource();
        let rx = datasource.subscribe();

        datasource.set_categories(vec![make_category("first")]);
        datasource.set_categories(vec![make_category("second")]);

        assert_eq!(rx.recv().unwrap()[0].id, "first");
        assert_eq!(rx.recv().unwrap()[0].id, "second");
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn every_subscriber_gets_the_full_snapshot() {
        let datasource = make_datasource();
        let first = datasource.subscribe();
        let second = datasource.subscribe();

        datasource.set_categories(vec![make_category("a"), make_category("b")]);

        assert_eq!(first.recv().unwrap().len(), 2);
        assert_eq!(second.recv().unwrap().len(), 2);
    }

    #[test]
    fn dropped_subscribers_do_not_block_later_emissions() {
        let datasource = make_datasource();
        let rx = datasource.subscribe();
        drop(rx);

        let live = datasource.subscribe();
        datasource.set_categories(vec![make_category("a")]);

        assert_eq!(live.recv().unwrap().len(), 1);
    }

    #[test]
    fn snapshots_reflect_latest_state() {
        let datasource = make_datasource();

        assert!(datasource.categories().is_empty());
        assert!(!datasource.user().is_guest);

        datasource.set_categories(vec![make_category("a")]);
        datasource.set_user(GroceryUser {
            is_guest: true,
            can_add_new_items: false,
        });

        assert_eq!(datasource.categories().len(), 1);
        assert!(datasource.user().is_guest);
    }
}
