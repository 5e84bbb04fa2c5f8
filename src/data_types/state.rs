use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Single-threaded shared handle to view state.
///
/// Borrows must never be held across a listener notification.
pub type Shared<T> = Rc<RefCell<T>>;

pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

/// Redraw requests for one view.
///
/// Requests are counted and forwarded to an optional host hook; the host may
/// batch them, the counter only records that a redraw is due.
#[derive(Default)]
pub struct RepaintSignal {
    requests: Cell<u64>,
    hook: RefCell<Option<Box<dyn Fn()>>>,
}

impl RepaintSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) {
        self.requests.set(self.requests.get() + 1);
        if let Some(hook) = self.hook.borrow().as_ref() {
            hook();
        }
    }

    /// Total number of redraws requested so far.
    pub fn requests(&self) -> u64 {
        self.requests.get()
    }

    pub fn set_hook(&self, hook: impl Fn() + 'static) {
        *self.hook.borrow_mut() = Some(Box::new(hook));
    }
}

impl fmt::Debug for RepaintSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RepaintSignal")
            .field("requests", &self.requests.get())
            .field("has_hook", &self.hook.borrow().is_some())
            .finish()
    }
}
