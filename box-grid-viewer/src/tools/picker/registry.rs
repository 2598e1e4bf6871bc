use bevy::prelude::*;

/// Ordered index of every pickable marker entity.
///
/// Append-only: groups are never deleted, so nothing is ever removed.
/// Insertion order doubles as the tie-break order when two markers sit at the
/// same ray distance.
#[derive(Resource, Default)]
pub struct PickableRegistry {
    markers: Vec<Entity>,
}

impl PickableRegistry {
    pub fn register(&mut self, marker: Entity) {
        self.markers.push(marker);
    }

    pub fn all(&self) -> &[Entity] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_order_is_preserved() {
        let mut registry = PickableRegistry::default();
        let a = Entity::from_raw(1);
        let b = Entity::from_raw(2);
        let c = Entity::from_raw(3);

        registry.register(b);
        registry.register(a);
        registry.register(c);

        assert_eq!(registry.all(), &[b, a, c]);
        assert_eq!(registry.len(), 3);
        assert!(!registry.is_empty());
    }
}
