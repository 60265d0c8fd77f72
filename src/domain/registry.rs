use super::body::{Body, BodyKey, BodyKind};

/// The authoritative body list.
///
/// Slots are reassigned every frame (`assign_ids`) and removal is
/// swap-with-last, so slot order is not stable. Anything that must survive
/// a frame holds a `BodyKey` instead.
#[derive(Clone, Debug)]
pub struct BodyRegistry {
    bodies: Vec<Body>,
    next_key: u32,
}

impl BodyRegistry {
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            next_key: 1,
        }
    }

    /// Insert a body, returning its stable key. The body gets the next slot
    /// as its id right away so it can take part in the current frame.
    pub fn add(&mut self, mut body: Body) -> BodyKey {
        let key = BodyKey(self.next_key);
        self.next_key = self.next_key.saturating_add(1);
        body.key = key;
        body.id = self.bodies.len();
        body.parent_id = body.owner.and_then(|owner| self.slot_of(owner));
        self.bodies.push(body);
        key
    }

    /// Re-derive per-frame ids from slot positions, and parent ids from owners.
    pub fn assign_ids(&mut self) {
        for (slot, body) in self.bodies.iter_mut().enumerate() {
            body.id = slot;
        }
        for i in 0..self.bodies.len() {
            let parent = self.bodies[i].owner.and_then(|owner| self.slot_of(owner));
            self.bodies[i].parent_id = parent;
        }
    }

    pub fn slot_of(&self, key: BodyKey) -> Option<usize> {
        self.bodies.iter().position(|b| b.key == key)
    }

    pub fn get(&self, key: BodyKey) -> Option<&Body> {
        self.bodies.iter().find(|b| b.key == key)
    }

    pub fn get_mut(&mut self, key: BodyKey) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.key == key)
    }

    /// Drop every collected body (swap-with-last, back to front).
    /// Returns how many were removed.
    pub fn remove_collected(&mut self) -> usize {
        let mut removed = 0;
        let mut i = self.bodies.len();
        while i > 0 {
            i -= 1;
            if self.bodies[i].collected {
                self.bodies.swap_remove(i);
                removed += 1;
            }
        }
        removed
    }

    /// Drop bodies matching `pred` (swap-with-last). Returns how many were removed.
    pub fn remove_where<F>(&mut self, mut pred: F) -> usize
    where
        F: FnMut(&Body) -> bool,
    {
        let before = self.bodies.len();
        let mut i = self.bodies.len();
        while i > 0 {
            i -= 1;
            if pred(&self.bodies[i]) {
                self.bodies.swap_remove(i);
            }
        }
        before - self.bodies.len()
    }

    pub fn count_where<F>(&self, pred: F) -> usize
    where
        F: Fn(&Body) -> bool,
    {
        self.bodies.iter().filter(|b| pred(b)).count()
    }

    pub fn collectible_count(&self) -> usize {
        self.count_where(|b| matches!(b.kind, BodyKind::Collectible))
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn clear(&mut self) {
        self.bodies.clear();
        self.next_key = 1;
    }
}

impl Default for BodyRegistry {
    fn default() -> Self {
        Self::new()
    }
}
