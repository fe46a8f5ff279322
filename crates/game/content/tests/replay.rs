use std::path::Path;

use farm_content::{ActionLoader, ConfigLoader, SnapshotLoader};
use farm_core::{
    ActionError, Duration, GameEngine, ItemName, Quantity, ResourceNodeKind, Timestamp,
};

const T0: Timestamp = Timestamp(1_700_000_000_000);

fn data(path: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data").join(path)
}

#[test]
fn harvest_day_replays_against_starter_farm() {
    let engine = GameEngine::new(ConfigLoader::embedded().unwrap());
    let mut state = SnapshotLoader::load(&data("snapshots/starter.json")).unwrap();
    let script = ActionLoader::load_script(&data("scripts/harvest_day.json")).unwrap();

    let mut rejected = Vec::new();
    for (index, step) in script.iter().enumerate() {
        let created_at = step.created_at.expect("bundled script is fully timestamped");
        match engine.execute_at(&state, &step.action, created_at) {
            Ok(next) => state = next,
            Err(error) => rejected.push((index, error.into_error())),
        }
    }

    assert_eq!(
        rejected,
        vec![(
            6,
            ActionError::StillRecovering {
                node: ResourceNodeKind::Gold
            }
        )]
    );

    assert_eq!(state.inventory.get(ItemName::Gold), Quantity::new(3));
    assert_eq!(state.inventory.get(ItemName::Stone), Quantity::new(9));
    assert_eq!(state.inventory.get(ItemName::Wood), Quantity::new(4));
    assert_eq!(state.inventory.get(ItemName::Pickaxe), Quantity::ONE);
    assert_eq!(state.coins, Quantity::new(180));

    // 40 + 90 * (1 + 0.05 observatory + 0.2 * 1.2 green chef hat)
    let bumpkin = state.bumpkin.as_ref().unwrap();
    assert_eq!(bumpkin.experience, "156.1".parse().unwrap());
    assert_eq!(bumpkin.activity_count("Stone Mined"), 2);
    assert_eq!(bumpkin.activity_count("Tree Chopped"), 13);

    // The second stone harvest ran with the totem built.
    assert_eq!(
        state.stones["0"].stock.harvested_at,
        Some(T0 + Duration::from_hours(2))
    );
}

#[test]
fn replay_digest_is_reproducible() {
    let engine = GameEngine::default();
    let start = SnapshotLoader::load(&data("snapshots/starter.json")).unwrap();
    let script = ActionLoader::load_script(&data("scripts/harvest_day.json")).unwrap();

    let run = || {
        script.iter().fold(start.clone(), |state, step| {
            let at = step.created_at.unwrap_or(T0);
            engine.execute_at(&state, &step.action, at).unwrap_or(state)
        })
    };

    assert_eq!(run().digest().unwrap(), run().digest().unwrap());
}
