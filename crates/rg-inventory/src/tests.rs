//! Unit tests for rg-inventory.

#[cfg(test)]
mod model {
    use rg_core::Cell;

    use crate::{Receiver, Scenario, Sender};

    #[test]
    fn builders_accumulate() {
        let s = Sender::new("depot", Cell::new(0, 0))
            .with_resource("food", 4)
            .with_resource("food", 6)
            .with_resource("water", 1);
        assert_eq!(s.quantity("food"), 10);
        assert_eq!(s.quantity("water"), 1);
        assert_eq!(s.quantity("fuel"), 0);

        let r = Receiver::new("camp", Cell::new(1, 1)).with_need("food", 3);
        assert_eq!(r.need("food"), 3);
        assert!(!r.is_satisfied());
        assert!(Receiver::new("empty", Cell::new(0, 0)).is_satisfied());
    }

    #[test]
    fn scenario_totals() {
        let mut sc = Scenario::new(5);
        sc.senders.push(Sender::new("a", Cell::new(0, 0)).with_resource("food", 3));
        sc.senders.push(Sender::new("b", Cell::new(0, 1)).with_resource("food", 4));
        sc.receivers.push(Receiver::new("c", Cell::new(4, 4)).with_need("food", 9));
        assert_eq!(sc.supply("food"), 7);
        assert_eq!(sc.demand("food"), 9);
        assert!(sc.sender("b").is_some());
        assert!(sc.receiver("b").is_none());
    }
}

#[cfg(test)]
mod store {
    use rg_core::Cell;

    use crate::{EntityKind, InventoryError, InventoryStore, MemoryStore, Receiver, ResourceMap, Scenario, Sender};

    fn seeded() -> MemoryStore {
        let mut store = MemoryStore::new(10);
        store.add_sender(Sender::new("depot", Cell::new(0, 0)).with_resource("food", 10)).unwrap();
        store.add_receiver(Receiver::new("camp", Cell::new(9, 9)).with_need("food", 4)).unwrap();
        store
    }

    #[test]
    fn names_are_unique_per_kind() {
        let mut store = seeded();
        let dup = store.add_sender(Sender::new("depot", Cell::new(1, 1)));
        assert!(matches!(dup, Err(InventoryError::NameTaken { kind: EntityKind::Sender, .. })));
        // Same name in the other roster is fine.
        store.add_receiver(Receiver::new("depot", Cell::new(2, 2))).unwrap();
        assert!(store.names().contains(EntityKind::Receiver, "depot"));
    }

    #[test]
    fn remove_frees_the_name() {
        let mut store = seeded();
        let removed = store.remove_sender("depot").unwrap();
        assert_eq!(removed.quantity("food"), 10);
        assert!(store.snapshot().senders.is_empty());
        store.add_sender(Sender::new("depot", Cell::new(3, 3))).unwrap();
    }

    #[test]
    fn remove_unknown_fails() {
        let mut store = seeded();
        assert!(matches!(
            store.remove_receiver("nobody"),
            Err(InventoryError::UnknownName { kind: EntityKind::Receiver, .. })
        ));
    }

    #[test]
    fn out_of_bounds_rejected() {
        let mut store = seeded();
        assert!(matches!(
            store.add_sender(Sender::new("far", Cell::new(10, 0))),
            Err(InventoryError::OutOfBounds { .. })
        ));
        assert!(store.relocate_receiver("camp", Cell::new(0, 10)).is_err());
        assert!(matches!(store.add_obstacle(Cell::new(12, 12)), Err(InventoryError::ObstacleOutOfBounds { .. })));
        // A rejected add must not leak its name into the registry.
        assert!(!store.names().contains(EntityKind::Sender, "far"));
    }

    #[test]
    fn relocate_and_update_maps() {
        let mut store = seeded();
        store.relocate_sender("depot", Cell::new(5, 5)).unwrap();
        let mut needs = ResourceMap::new();
        needs.insert("water".into(), 2);
        store.set_needs("camp", needs).unwrap();

        let snap = store.snapshot();
        assert_eq!(snap.senders[0].position, Cell::new(5, 5));
        assert_eq!(snap.receivers[0].need("water"), 2);
        assert_eq!(snap.receivers[0].need("food"), 0);
        assert!(store.set_resources("ghost", ResourceMap::new()).is_err());
    }

    #[test]
    fn obstacles_toggle() {
        let mut store = seeded();
        assert!(store.add_obstacle(Cell::new(4, 4)).unwrap());
        assert!(!store.add_obstacle(Cell::new(4, 4)).unwrap());
        assert_eq!(store.snapshot().obstacles, vec![Cell::new(4, 4)]);
        assert!(store.remove_obstacle(Cell::new(4, 4)));
        assert!(!store.remove_obstacle(Cell::new(4, 4)));
    }

    #[test]
    fn commit_writes_back_by_name() {
        let mut store = seeded();
        let mut snap = store.snapshot();
        snap.senders[0].resources.insert("food".into(), 6);
        snap.receivers[0].needs.clear();
        // An entity the store no longer knows is ignored.
        snap.senders.push(Sender::new("transient", Cell::new(1, 1)).with_resource("food", 1));

        store.commit(&snap.senders, &snap.receivers).unwrap();
        let after = store.snapshot();
        assert_eq!(after.senders.len(), 1);
        assert_eq!(after.senders[0].quantity("food"), 6);
        assert!(after.receivers[0].is_satisfied());
    }

    #[test]
    fn snapshot_is_detached() {
        let store = seeded();
        let mut snap = store.snapshot();
        snap.senders[0].resources.clear();
        assert_eq!(store.snapshot().senders[0].quantity("food"), 10);
    }

    #[test]
    fn from_scenario_checks_names() {
        let mut sc = Scenario::new(4);
        sc.senders.push(Sender::new("a", Cell::new(0, 0)));
        sc.senders.push(Sender::new("a", Cell::new(1, 0)));
        assert!(MemoryStore::from_scenario(sc).is_err());
    }
}

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use rg_core::Cell;

    use crate::{EntityKind, InventoryError, Receiver, Sender, load_scenario, load_scenario_reader, save_resources};

    const LOCATIONS: &str = r#"{
        "n": 3,
        "obstacles": [[1, 1]],
        "senders":   [{ "name": "S", "x": 0, "y": 0 }],
        "receivers": [{ "name": "R", "x": 2, "y": 2 }, { "name": "Q", "x": 0, "y": 2 }]
    }"#;

    const RESOURCES: &str = r#"{
        "senders":   [{ "name": "S", "resources": { "food": 10 } },
                      { "name": "ghost", "resources": { "food": 99 } }],
        "receivers": [{ "name": "R", "needs": { "food": 4 } }]
    }"#;

    #[test]
    fn merges_locations_and_inventory() {
        let sc = load_scenario_reader(Cursor::new(LOCATIONS), Cursor::new(RESOURCES)).unwrap();
        assert_eq!(sc.size, 3);
        assert_eq!(sc.obstacles, vec![Cell::new(1, 1)]);
        assert_eq!(sc.senders.len(), 1);
        assert_eq!(sc.senders[0].position, Cell::new(0, 0));
        assert_eq!(sc.senders[0].quantity("food"), 10);
        assert_eq!(sc.receivers[0].need("food"), 4);
        // Located but no inventory entry → empty needs.
        assert!(sc.receivers[1].needs.is_empty());
    }

    #[test]
    fn duplicate_location_names_rejected() {
        let loc = r#"{ "n": 3, "senders": [{"name":"S","x":0,"y":0},{"name":"S","x":1,"y":0}] }"#;
        let r = load_scenario_reader(Cursor::new(loc), Cursor::new("{}"));
        assert!(matches!(r, Err(InventoryError::NameTaken { .. })));
    }

    #[test]
    fn duplicate_inventory_names_rejected() {
        let res = r#"{ "senders": [{ "name": "S", "resources": { "food": 10 } },
                                   { "name": "S", "resources": { "food": 1 } }] }"#;
        let r = load_scenario_reader(Cursor::new(LOCATIONS), Cursor::new(res));
        assert!(matches!(r, Err(InventoryError::NameTaken { kind: EntityKind::Sender, ref name }) if name == "S"));

        let res = r#"{ "receivers": [{ "name": "R", "needs": { "food": 4 } },
                                     { "name": "R", "needs": { "water": 2 } }] }"#;
        let r = load_scenario_reader(Cursor::new(LOCATIONS), Cursor::new(res));
        assert!(matches!(r, Err(InventoryError::NameTaken { kind: EntityKind::Receiver, ref name }) if name == "R"));
    }

    #[test]
    fn malformed_json_is_an_error() {
        let r = load_scenario_reader(Cursor::new("{ \"n\": "), Cursor::new("{}"));
        assert!(matches!(r, Err(InventoryError::Json(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let r = load_scenario(&dir.path().join("nope.json"), &dir.path().join("nope2.json"));
        assert!(matches!(r, Err(InventoryError::Io(_))));
    }

    #[test]
    fn save_then_reload_resources() {
        let dir = tempfile::tempdir().unwrap();
        let loc_path = dir.path().join("locations.json");
        let res_path = dir.path().join("resources.json");
        std::fs::write(&loc_path, LOCATIONS).unwrap();

        let senders = vec![Sender::new("S", Cell::new(0, 0)).with_resource("food", 6)];
        let receivers = vec![
            Receiver::new("R", Cell::new(2, 2)),
            Receiver::new("Q", Cell::new(0, 2)).with_need("water", 5),
        ];
        save_resources(&res_path, &senders, &receivers).unwrap();

        let sc = load_scenario(&loc_path, &res_path).unwrap();
        assert_eq!(sc.senders[0].quantity("food"), 6);
        assert!(sc.receivers[0].needs.is_empty());
        assert_eq!(sc.receivers[1].need("water"), 5);
    }
}

#[cfg(test)]
mod synth {
    use rg_core::CellSet;

    use crate::{SynthParams, generate};

    #[test]
    fn same_seed_same_scenario() {
        let p = SynthParams::default();
        assert_eq!(generate(&p, 11).unwrap(), generate(&p, 11).unwrap());
        assert_ne!(generate(&p, 11).unwrap(), generate(&p, 12).unwrap());
    }

    #[test]
    fn entities_on_distinct_free_cells() {
        let p = SynthParams { size: 12, obstacle_density: 0.4, senders: 10, receivers: 20, ..SynthParams::default() };
        let sc = generate(&p, 3).unwrap();
        let obstacles: CellSet = sc.obstacles.iter().copied().collect();
        let mut seen = CellSet::default();
        for pos in sc.senders.iter().map(|s| s.position).chain(sc.receivers.iter().map(|r| r.position)) {
            assert!(!obstacles.contains(&pos), "entity on obstacle {pos}");
            assert!(seen.insert(pos), "two entities share {pos}");
        }
        assert_eq!(sc.senders.len(), 10);
        assert_eq!(sc.receivers.len(), 20);
        assert!(sc.senders.iter().all(|s| !s.resources.is_empty()));
        assert!(sc.receivers.iter().all(|r| !r.needs.is_empty()));
    }

    #[test]
    fn too_crowded_fails() {
        let p = SynthParams { size: 2, obstacle_density: 0.0, senders: 3, receivers: 3, ..SynthParams::default() };
        assert!(generate(&p, 0).is_err());
    }

    #[test]
    fn bad_density_fails() {
        let p = SynthParams { obstacle_density: 1.0, ..SynthParams::default() };
        assert!(generate(&p, 0).is_err());
    }
}
