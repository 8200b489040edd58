use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Projected display text of a field after one value-changing interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub position: usize,
    pub text: String,
}

type Subscriber = Box<dyn FnMut(&ChangeEvent)>;

/// "Value changed" channel of one widget.
///
/// Clones share the same subscriber list: the widget keeps one clone to publish and hands the
/// other to whoever wants to listen.
#[derive(Clone, Default)]
pub struct ChangeSource {
    subscribers: Rc<RefCell<Vec<Subscriber>>>,
}

impl ChangeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, subscriber: impl FnMut(&ChangeEvent) + 'static) {
        self.subscribers.borrow_mut().push(Box::new(subscriber));
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    /// Callbacks run with the list taken out, so they may subscribe or emit on this source.
    /// A nested emit only reaches subscribers added during the current run.
    pub(crate) fn emit(&self, event: &ChangeEvent) {
        let mut active = self.subscribers.take();
        for subscriber in active.iter_mut() {
            subscriber(event);
        }
        let mut subscribers = self.subscribers.borrow_mut();
        let added = std::mem::replace(&mut *subscribers, active);
        subscribers.extend(added);
    }
}

impl fmt::Debug for ChangeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeSource")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
