//! 簡單三核心優化示例

use arkgrid::{
    Alignment, CoreSlot, GemInventory, JointOptimizer, OptimizerConfig, Rarity, Role, GEM_CATALOG,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    println!("=== 三核心星石優化示例 ===\n");

    // 星石庫存：每種星石的加成值
    let inventory = GemInventory::empty()
        .with_units(0, vec![5, 4, 3, 2])?
        .with_units(1, vec![5, 2])?
        .with_units(2, vec![5, 4, 3, 2])?
        .with_units(3, vec![5])?
        .with_units(4, vec![2])?
        .with_units(5, vec![2])?;

    println!("庫存共 {} 顆星石", inventory.total_units());

    let cores = [CoreSlot::new(Rarity::Ancient, 0); 3];
    let optimizer = JointOptimizer::new(OptimizerConfig::new().with_parallel(true));
    let result = optimizer.optimize(&inventory, &cores, Alignment::Order, Role::Damage)?;

    println!("候選組合數: {:?}", result.candidate_counts);
    println!("可行三元組: {}", result.feasible_triples);
    if let Some(ms) = result.calculation_time_ms {
        println!("計算耗時: {} ms", ms);
    }

    let Some(best) = result.best else {
        println!("\n找不到滿足條件的組合");
        return Ok(());
    };

    println!("\n最佳戰力: {}（戰鬥力提升 {}）", best.power, best.combat_power_increase);
    println!("加成合計: {}", best.bonus_total);
    for (i, combo) in best.combinations.iter().enumerate() {
        let gems: Vec<String> = combo
            .kinds()
            .into_iter()
            .map(|kind| GEM_CATALOG[kind].label())
            .collect();
        println!(
            "  核心 {}: 點數 {}（原始 {}），意志力 {}，星石 [{}]",
            i,
            best.capped_values[i],
            combo.value,
            combo.cost,
            gems.join(", ")
        );
    }

    Ok(())
}
