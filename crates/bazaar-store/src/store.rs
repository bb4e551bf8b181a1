//! # Store
//!
//! The process-wide state container: cart, aggregates, and auth status.
//!
//! ## Transition Discipline
//! Every mutation is a synchronous, atomic transition with no suspension
//! points: the in-memory state and its snapshot are updated under one lock,
//! then subscribers are notified. Two mutations never interleave.
//!
//! ## Failure Semantics
//! Mutations never fail. Invalid input (negative quantity, empty username)
//! is accepted without validation, and unknown ids are silent no-ops, the
//! same contract the storefront has always had. Snapshot load problems fall
//! back to the initial state; save problems are logged and absorbed, the
//! in-memory state staying authoritative.

use std::sync::Mutex;

use tracing::{debug, error, warn};

use bazaar_core::{Cart, CartItem, Money, User};

use crate::auth::{Authenticator, MockAuthenticator};
use crate::persist::{MemoryBackend, SnapshotBackend};
use crate::snapshot::{Snapshot, SNAPSHOT_KEY};
use crate::subscribe::{StoreEvent, SubscriberRegistry, SubscriptionId};

// =============================================================================
// State
// =============================================================================

/// The store's full mutable state. Owned exclusively by [`Store`]; the
/// presentation layer holds no independent copies.
#[derive(Debug, Default)]
struct StoreState {
    cart: Cart,
    current_user: Option<User>,
    is_authenticated: bool,
}

impl StoreState {
    fn from_snapshot(snapshot: Snapshot) -> Self {
        StoreState {
            cart: Cart::from_parts(snapshot.cart, snapshot.total_items, snapshot.total_price),
            current_user: snapshot.current_user,
            is_authenticated: snapshot.is_authenticated,
        }
    }

    fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            cart: self.cart.items().to_vec(),
            total_items: self.cart.total_items(),
            total_price: self.cart.total_price(),
            current_user: self.current_user.clone(),
            is_authenticated: self.is_authenticated,
        }
    }
}

// =============================================================================
// Store
// =============================================================================

/// The application state store.
///
/// Constructed once at process start with an injectable persistence backend
/// and (optionally) authentication policy; rehydrates from a prior snapshot
/// when one exists.
///
/// ```rust
/// use bazaar_store::{MemoryBackend, Store};
///
/// let store = Store::new(MemoryBackend::new());
/// assert_eq!(store.total_items(), 0);
/// assert!(store.login("alice", "any password"));
/// assert!(store.is_authenticated());
/// ```
pub struct Store {
    state: Mutex<StoreState>,
    subscribers: Mutex<SubscriberRegistry>,
    backend: Box<dyn SnapshotBackend>,
    authenticator: Box<dyn Authenticator>,
}

impl Store {
    /// Creates a store over `backend` with the mock authentication policy,
    /// rehydrating from the backend's snapshot slot if one exists.
    pub fn new(backend: impl SnapshotBackend + 'static) -> Self {
        Self::with_authenticator(backend, MockAuthenticator)
    }

    /// Creates a store with an explicit authentication policy.
    pub fn with_authenticator(
        backend: impl SnapshotBackend + 'static,
        authenticator: impl Authenticator + 'static,
    ) -> Self {
        let state = Self::rehydrate(&backend);
        Store {
            state: Mutex::new(state),
            subscribers: Mutex::new(SubscriberRegistry::new()),
            backend: Box::new(backend),
            authenticator: Box::new(authenticator),
        }
    }

    /// Convenience constructor for an ephemeral store (tests, demos).
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new())
    }

    fn rehydrate(backend: &dyn SnapshotBackend) -> StoreState {
        match backend.load(SNAPSHOT_KEY) {
            Ok(Some(json)) => match Snapshot::from_json(&json) {
                Ok(snapshot) => {
                    debug!(
                        lines = snapshot.cart.len(),
                        authenticated = snapshot.is_authenticated,
                        "rehydrated store from snapshot"
                    );
                    StoreState::from_snapshot(snapshot)
                }
                Err(e) => {
                    warn!(error = %e, "malformed snapshot, starting from initial state");
                    StoreState::default()
                }
            },
            Ok(None) => StoreState::default(),
            Err(e) => {
                warn!(error = %e, "snapshot load failed, starting from initial state");
                StoreState::default()
            }
        }
    }

    // -------------------------------------------------------------------------
    // Transition plumbing
    // -------------------------------------------------------------------------

    /// Applies `f` to the state, persists the result in the same transition,
    /// then notifies subscribers.
    fn mutate<R>(&self, event: StoreEvent, f: impl FnOnce(&mut StoreState) -> R) -> R {
        let result = {
            let mut state = self.state.lock().expect("store state mutex poisoned");
            let result = f(&mut state);
            self.persist(&state);
            result
        };

        self.subscribers
            .lock()
            .expect("store subscriber mutex poisoned")
            .notify(event);
        result
    }

    fn persist(&self, state: &StoreState) {
        match state.to_snapshot().to_json() {
            Ok(json) => {
                if let Err(e) = self.backend.save(SNAPSHOT_KEY, &json) {
                    error!(error = %e, "snapshot save failed, in-memory state unaffected");
                }
            }
            Err(e) => error!(error = %e, "snapshot encoding failed, in-memory state unaffected"),
        }
    }

    fn read<R>(&self, f: impl FnOnce(&StoreState) -> R) -> R {
        let state = self.state.lock().expect("store state mutex poisoned");
        f(&state)
    }

    // -------------------------------------------------------------------------
    // Cart mutations
    // -------------------------------------------------------------------------

    /// Adds an item to the cart: repeat ids bump the quantity, new ids insert
    /// a line with quantity 1. `total_price` grows by the incoming item's
    /// unit price either way (see [`Cart::add`]).
    pub fn add_to_cart(&self, item: CartItem) {
        debug!(item_id = item.id, price_cents = item.price_cents, "add_to_cart");
        self.mutate(StoreEvent::CartChanged, |state| state.cart.add(item));
    }

    /// Removes a line entirely, regardless of quantity. Unknown ids no-op.
    pub fn remove_from_cart(&self, item_id: u32) {
        debug!(item_id, "remove_from_cart");
        self.mutate(StoreEvent::CartChanged, |state| state.cart.remove(item_id));
    }

    /// Replaces a line's quantity; zero or negative removes the line.
    /// Unknown ids no-op.
    pub fn update_quantity(&self, item_id: u32, quantity: i64) {
        debug!(item_id, quantity, "update_quantity");
        self.mutate(StoreEvent::CartChanged, |state| {
            state.cart.set_quantity(item_id, quantity);
        });
    }

    /// Resets the cart to empty with zero aggregates.
    pub fn clear_cart(&self) {
        debug!("clear_cart");
        self.mutate(StoreEvent::CartChanged, |state| state.cart.clear());
    }

    // -------------------------------------------------------------------------
    // Auth mutations
    // -------------------------------------------------------------------------

    /// Signs in. Always succeeds under the configured policy; the returned
    /// flag mirrors the call signature the presentation layer expects.
    pub fn login(&self, username: &str, password: &str) -> bool {
        let user = self.authenticator.login(username, password);
        debug!(username = %user.username, is_admin = user.is_admin, "login");
        self.mutate(StoreEvent::AuthChanged, |state| {
            state.current_user = Some(user);
            state.is_authenticated = true;
        });
        true
    }

    /// Signs out. Clears the user and the flag; the cart is untouched.
    pub fn logout(&self) {
        debug!("logout");
        self.mutate(StoreEvent::AuthChanged, |state| {
            state.current_user = None;
            state.is_authenticated = false;
        });
    }

    /// Registers and immediately signs in as a normal user. Always succeeds.
    pub fn register(&self, username: &str, email: &str, password: &str) -> bool {
        let user = self.authenticator.register(username, email, password);
        debug!(username = %user.username, "register");
        self.mutate(StoreEvent::AuthChanged, |state| {
            state.current_user = Some(user);
            state.is_authenticated = true;
        });
        true
    }

    // -------------------------------------------------------------------------
    // Readers
    // -------------------------------------------------------------------------

    /// The cart lines in insertion order.
    pub fn cart_items(&self) -> Vec<CartItem> {
        self.read(|state| state.cart.items().to_vec())
    }

    /// Sum of all line quantities.
    pub fn total_items(&self) -> i64 {
        self.read(|state| state.cart.total_items())
    }

    /// Sum of all line totals, tracked incrementally.
    pub fn total_price(&self) -> Money {
        self.read(|state| state.cart.total_price())
    }

    /// The signed-in user, if any.
    pub fn current_user(&self) -> Option<User> {
        self.read(|state| state.current_user.clone())
    }

    /// Whether a user is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.read(|state| state.is_authenticated)
    }

    /// The full observable state as a snapshot value.
    pub fn snapshot(&self) -> Snapshot {
        self.read(StoreState::to_snapshot)
    }

    // -------------------------------------------------------------------------
    // Subscriptions
    // -------------------------------------------------------------------------

    /// Registers a change callback; it runs synchronously after each
    /// transition commits.
    pub fn subscribe(&self, f: impl Fn(StoreEvent) + Send + Sync + 'static) -> SubscriptionId {
        self.subscribers
            .lock()
            .expect("store subscriber mutex poisoned")
            .subscribe(Box::new(f))
    }

    /// Drops a change callback; `false` if the id was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.subscribers
            .lock()
            .expect("store subscriber mutex poisoned")
            .unsubscribe(id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::ADMIN_PASSWORD;
    use chrono::Utc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn test_item(id: u32, price_cents: i64) -> CartItem {
        CartItem {
            id,
            name: format!("Product {}", id),
            price_cents,
            quantity: 1,
            image: format!("https://img.example/{}.jpg", id),
            added_at: Utc::now(),
        }
    }

    #[test]
    fn test_initial_state() {
        let store = Store::in_memory();
        assert!(store.cart_items().is_empty());
        assert_eq!(store.total_items(), 0);
        assert_eq!(store.total_price(), Money::zero());
        assert!(store.current_user().is_none());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_cart_mutations_flow_through() {
        let store = Store::in_memory();

        store.add_to_cart(test_item(1, 69_999));
        store.add_to_cart(test_item(1, 69_999));
        store.add_to_cart(test_item(4, 2_499));

        assert_eq!(store.total_items(), 3);
        assert_eq!(store.total_price(), Money::from_cents(142_497));

        store.update_quantity(4, 3);
        assert_eq!(store.total_items(), 5);
        assert_eq!(store.total_price(), Money::from_cents(147_495));

        store.remove_from_cart(1);
        assert_eq!(store.total_items(), 3);
        assert_eq!(store.total_price(), Money::from_cents(7_497));

        store.clear_cart();
        assert_eq!(store.total_items(), 0);
        assert_eq!(store.total_price(), Money::zero());
    }

    #[test]
    fn test_login_admin_and_normal() {
        let store = Store::in_memory();

        assert!(store.login("alice", ADMIN_PASSWORD));
        let user = store.current_user().unwrap();
        assert_eq!(user.username, "alice");
        assert!(user.is_admin);
        assert!(store.is_authenticated());

        assert!(store.login("alice", "anything-else"));
        let user = store.current_user().unwrap();
        assert!(!user.is_admin);
        assert!(store.is_authenticated());
    }

    #[test]
    fn test_logout_keeps_cart() {
        let store = Store::in_memory();
        store.add_to_cart(test_item(1, 1000));
        store.login("alice", "pw");

        store.logout();

        assert!(store.current_user().is_none());
        assert!(!store.is_authenticated());
        assert_eq!(store.total_items(), 1);
    }

    #[test]
    fn test_register_logs_in_as_normal_user() {
        let store = Store::in_memory();

        assert!(store.register("bob", "bob@example.com", "pw"));

        let user = store.current_user().unwrap();
        assert_eq!(user.username, "bob");
        assert!(!user.is_admin);
        assert!(store.is_authenticated());
    }

    #[test]
    fn test_every_mutation_persists() {
        let backend = Arc::new(MemoryBackend::new());
        let store = Store::new(Arc::clone(&backend));

        store.add_to_cart(test_item(1, 500));

        let json = backend.load(SNAPSHOT_KEY).unwrap().unwrap();
        let persisted = Snapshot::from_json(&json).unwrap();
        assert_eq!(persisted, store.snapshot());

        store.login("alice", "pw");
        let json = backend.load(SNAPSHOT_KEY).unwrap().unwrap();
        let persisted = Snapshot::from_json(&json).unwrap();
        assert!(persisted.is_authenticated);
        assert_eq!(persisted, store.snapshot());
    }

    #[test]
    fn test_subscribers_observe_post_commit_state() {
        let store = Arc::new(Store::in_memory());
        let observed = Arc::new(AtomicUsize::new(0));

        let inner_store = Arc::clone(&store);
        let inner_observed = Arc::clone(&observed);
        let id = store.subscribe(move |event| {
            assert_eq!(event, StoreEvent::CartChanged);
            // The transition has committed: the new state is readable.
            inner_observed.store(inner_store.total_items() as usize, Ordering::SeqCst);
        });

        store.add_to_cart(test_item(1, 100));
        assert_eq!(observed.load(Ordering::SeqCst), 1);

        assert!(store.unsubscribe(id));
        store.add_to_cart(test_item(1, 100));
        assert_eq!(observed.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_auth_events_are_distinct() {
        let store = Store::in_memory();
        let events = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&events);
        store.subscribe(move |event| sink.lock().unwrap().push(event));

        store.login("alice", "pw");
        store.clear_cart();
        store.logout();

        let events = events.lock().unwrap();
        assert_eq!(
            *events,
            vec![
                StoreEvent::AuthChanged,
                StoreEvent::CartChanged,
                StoreEvent::AuthChanged,
            ]
        );
    }
}
