//! Feature storage in draw order.

use std::collections::HashMap;

use plotkit_core::FeatureId;

use super::types::Feature;

/// Features keyed by id; later insertions draw on top.
#[derive(Debug, Clone, Default)]
pub struct FeatureStore {
    features: HashMap<FeatureId, Feature>,
    draw_order: Vec<FeatureId>,
}

impl FeatureStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserting an id that already exists replaces it and moves it on top.
    pub fn insert(&mut self, feature: Feature) {
        let id = feature.id();
        if self.features.insert(id, feature).is_some() {
            self.draw_order.retain(|&other| other != id);
        }
        self.draw_order.push(id);
    }

    pub fn remove(&mut self, id: FeatureId) -> Option<Feature> {
        let removed = self.features.remove(&id)?;
        self.draw_order.retain(|&other| other != id);
        Some(removed)
    }

    pub fn get(&self, id: FeatureId) -> Option<&Feature> {
        self.features.get(&id)
    }

    pub fn get_mut(&mut self, id: FeatureId) -> Option<&mut Feature> {
        self.features.get_mut(&id)
    }

    pub fn contains(&self, id: FeatureId) -> bool {
        self.features.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Bottom to top.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Feature> {
        self.draw_order.iter().filter_map(|id| self.features.get(id))
    }

    pub fn clear(&mut self) {
        self.features.clear();
        self.draw_order.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::types::{Handle, HandleRole};
    use crate::model::Point;

    fn handle(role: HandleRole) -> Feature {
        Feature::Handle(Handle::new(FeatureId::new(), role, Point::new(0.0, 0.0), "x.png"))
    }

    #[test]
    fn test_draw_order() {
        let mut store = FeatureStore::new();
        let a = handle(HandleRole::Delete);
        let b = handle(HandleRole::Scale);
        let (a_id, b_id) = (a.id(), b.id());
        store.insert(a);
        store.insert(b);

        let order: Vec<_> = store.iter().map(Feature::id).collect();
        assert_eq!(order, vec![a_id, b_id]);
        let top = store.iter().next_back().map(Feature::id);
        assert_eq!(top, Some(b_id));

        assert!(store.remove(a_id).is_some());
        assert!(store.remove(a_id).is_none());
        assert_eq!(store.len(), 1);
    }
}
