use std::cell::RefCell;
use std::rc::Rc;

/// Callback invoked with an owned copy of the collection after each change
pub type Listener<T> = Rc<dyn Fn(Vec<T>)>;

/// Synchronous publish/subscribe over a collection of `T`.
///
/// Listeners run in registration order and each gets its own clone of the
/// items, so a listener that mutates its copy cannot affect the others.
pub struct State<T> {
    listeners: RefCell<Vec<Listener<T>>>,
}

impl<T: Clone> State<T> {
    pub fn new() -> Self {
        Self {
            listeners: RefCell::new(Vec::new()),
        }
    }

    /// Register a listener for every future change. There is no way to remove one.
    pub fn add_listener<F>(&self, listener_fn: F)
    where
        F: Fn(Vec<T>) + 'static,
    {
        self.listeners.borrow_mut().push(Rc::new(listener_fn));
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Push a copy of `items` to every listener.
    pub fn notify(&self, items: &[T]) {
        self.notify_with(|| items.to_vec());
    }

    /// Push a fresh snapshot to every listener, taken right before each call.
    ///
    /// The listener list is copied before dispatch so a listener may register
    /// further listeners or trigger a nested notification. Listeners after a
    /// nested change see the collection as it is after that change.
    pub fn notify_with<F>(&self, snapshot: F)
    where
        F: Fn() -> Vec<T>,
    {
        let listeners: Vec<Listener<T>> = self.listeners.borrow().clone();

        for listener_fn in listeners {
            listener_fn(snapshot());
        }
    }
}

impl<T: Clone> Default for State<T> {
    fn default() -> Self {
        Self::new()
    }
}
