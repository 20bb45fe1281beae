//! JSON 快照雙星核格規劃示例

use arkgrid::{GridPlanner, GridSnapshot, OptimizerConfig};

const SNAPSHOT: &str = r#"{
    "role": "Support",
    "order": {
        "inventory": [[5,4,3,2],[5,2],[5,4,3,2],[5],[2],[2],[],[],[],[],[],[],[],[]],
        "cores": [
            {"rarity": "Ancient", "target": 20, "min_value": 14},
            {"rarity": "Relic", "target": 20, "min_value": 10},
            {"rarity": "Legendary", "target": 14, "min_value": 0}
        ]
    },
    "chaos": {
        "inventory": [[4,4,1],[],[3,3],[],[],[5],[],[],[],[],[],[],[],[2]],
        "cores": [
            {"rarity": "Relic", "target": 20, "min_value": 10},
            {"rarity": "Legendary", "target": 14, "min_value": 0},
            {"rarity": "None", "target": 0, "min_value": 0}
        ]
    }
}"#;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let snapshot = GridSnapshot::from_json(SNAPSHOT)?;
    tracing::info!("職業定位: {:?}", snapshot.role);

    let planner = GridPlanner::new(OptimizerConfig::new().with_parallel(true));
    let plan = planner.plan(&snapshot)?;

    for (name, result) in [("秩序", &plan.order), ("混沌", &plan.chaos)] {
        match &result.best {
            Some(best) => println!(
                "{}: 戰力 {}，點數 {:?}，意志力 {:?}",
                name, best.power, best.capped_values, best.costs
            ),
            None => println!("{}: 無可行組合", name),
        }
    }
    println!("合計戰鬥力提升: {}", plan.total_combat_power_increase());

    println!("\n{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}
