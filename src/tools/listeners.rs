use parking_lot::Mutex;
use std::fmt;

/// Handle returned on registration, used to remove a listener again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

type Callback<E> = Box<dyn FnMut(&E)>;

struct Inner<E> {
    next_id: u64,
    listeners: Vec<(ListenerId, Callback<E>)>,
}

/// Observer list notified synchronously in registration order.
///
/// Every add, remove and notification pass runs under the same lock, so a
/// notification never observes a half-mutated list. A listener must not add
/// or remove listeners on the registry that is currently notifying it.
pub struct ListenerRegistry<E> {
    inner: Mutex<Inner<E>>,
}

impl<E> ListenerRegistry<E> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                next_id: 0,
                listeners: vec![],
            }),
        }
    }

    pub fn add(&self, listener: impl FnMut(&E) + 'static) -> ListenerId {
        let mut inner = self.inner.lock();
        let id = ListenerId(inner.next_id);
        inner.next_id += 1;
        inner.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` if the id was not registered.
    pub fn remove(&self, id: ListenerId) -> bool {
        let mut inner = self.inner.lock();
        let before = inner.listeners.len();
        inner.listeners.retain(|(existing, _)| *existing != id);
        inner.listeners.len() != before
    }

    pub fn notify(&self, event: &E) {
        let mut inner = self.inner.lock();
        for (_, listener) in inner.listeners.iter_mut() {
            listener(event);
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E> Default for ListenerRegistry<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for ListenerRegistry<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("listeners", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn notifies_in_registration_order() {
        let registry = ListenerRegistry::<u32>::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        for tag in ["a", "b", "c"] {
            let log = log.clone();
            registry.add(move |v: &u32| log.borrow_mut().push(format!("{tag}{v}")));
        }
        registry.notify(&7);
        assert_eq!(*log.borrow(), vec!["a7", "b7", "c7"]);
    }

    #[test]
    fn removed_listener_is_not_called() {
        let registry = ListenerRegistry::<()>::new();
        let hits = Rc::new(RefCell::new(0));
        let h = hits.clone();
        let id = registry.add(move |_| *h.borrow_mut() += 1);
        assert!(registry.remove(id));
        assert!(!registry.remove(id));
        registry.notify(&());
        assert_eq!(*hits.borrow(), 0);
        assert!(registry.is_empty());
    }
}
