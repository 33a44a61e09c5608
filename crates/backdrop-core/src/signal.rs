use fnv::FnvHashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Single-threaded listener registry. Listeners run in no particular order.
pub struct Signal<T> {
    next_id: u64,
    listeners: FnvHashMap<u64, Box<dyn FnMut(&T)>>,
}

impl<T> Default for Signal<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            listeners: FnvHashMap::default(),
        }
    }
}

impl<T> Signal<T> {
    pub fn subscribe(&mut self, listener: impl FnMut(&T) + 'static) -> SubscriptionId {
        let id = self.next_id;
        self.next_id += 1;
        self.listeners.insert(id, Box::new(listener));
        SubscriptionId(id)
    }

    /// Returns false if the subscription was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.remove(&id.0).is_some()
    }

    pub fn emit(&mut self, value: &T) {
        for listener in self.listeners.values_mut() {
            listener(value);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn clear(&mut self) {
        self.listeners.clear();
    }
}
