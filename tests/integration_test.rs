//! 集成測試

use arkgrid::{
    into_core_array, Alignment, ComboGenerator, Combination, CoreSlot, GemInventory, GridError,
    GridPlanner, GridSnapshot, JointOptimizer, OptimizerConfig, Rarity, Role, GEM_KIND_COUNT,
};
use arkgrid::Decimal;
use proptest::prelude::*;

/// 參考庫存：六種星石共 13 顆
fn reference_inventory() -> GemInventory {
    let mut units = vec![Vec::new(); GEM_KIND_COUNT];
    units[0] = vec![5, 4, 3, 2];
    units[1] = vec![5, 2];
    units[2] = vec![5, 4, 3, 2];
    units[3] = vec![5];
    units[4] = vec![2];
    units[5] = vec![2];
    GemInventory::from_units(units).unwrap()
}

#[test]
fn test_reference_scenario_end_to_end() {
    // 三個古代核心，輸出 / 秩序
    let cores = [CoreSlot::new(Rarity::Ancient, 0); 3];
    let result = JointOptimizer::default()
        .optimize(&reference_inventory(), &cores, Alignment::Order, Role::Damage)
        .unwrap();

    assert!(result.found);
    assert!(result.calculation_time_ms.is_some());

    let best = result.best.unwrap();
    println!("Power: {}, side nodes: {}", best.power, best.bonus_total);
    for (i, combo) in best.combinations.iter().enumerate() {
        println!("  Core {} - Points: {}, Will: {}", i, best.capped_values[i], combo.cost);
    }

    assert_eq!(best.power, Decimal::new(209_888, 2));
    assert_eq!(best.combat_power_increase, Decimal::new(209_888, 6));
    assert_eq!(best.total_gems(), 12);

    // 使用的單位不超過庫存
    let availability = reference_inventory().availability();
    for kind in 0..GEM_KIND_COUNT {
        assert!(best.usage[kind] as usize <= availability[kind]);
    }
}

#[test]
fn test_bonus_sum_matches_top_sorted_units() {
    // 單一種類、三個遺物核心都填滿 4 顆，共用 12 顆
    let bonuses = vec![7, 1, 9, 3, 3, 8, 0, 6, 2, 5, 4, 9, 1, 2];
    let inventory = GemInventory::empty().with_units(0, bonuses.clone()).unwrap();
    let cores = [CoreSlot::new(Rarity::Relic, 0); 3];

    let best = JointOptimizer::default()
        .optimize(&inventory, &cores, Alignment::Chaos, Role::Support)
        .unwrap()
        .best
        .unwrap();

    let mut sorted = bonuses;
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    let expected: u64 = sorted.iter().take(12).map(|&b| u64::from(b)).sum();

    assert_eq!(best.usage[0], 12);
    assert_eq!(best.bonus_total, expected);
    // 混沌輔助：600 + 600 + 233 + 加成 × 5.2
    let expected_centi = (600 + 600 + 233) * 100 + expected as i64 * 520;
    assert_eq!(best.power, Decimal::new(expected_centi, 2));
}

#[test]
fn test_none_rarity_everywhere() {
    let inventory = GemInventory::empty().with_units(0, vec![5, 4, 3, 2]).unwrap();
    let cores = [CoreSlot::new(Rarity::None, 0); 3];

    let result = JointOptimizer::default()
        .optimize(&inventory, &cores, Alignment::Order, Role::Damage)
        .unwrap();

    assert!(result.found);
    let best = result.best.unwrap();
    assert_eq!(best.combinations, [Combination::EMPTY; 3]);
    assert_eq!(best.bonus_total, 0);
    assert_eq!(best.power, Decimal::ZERO);
}

#[test]
fn test_exact_mode_agrees_when_lists_are_small() {
    let cores = [
        CoreSlot::new(Rarity::Relic, 10),
        CoreSlot::new(Rarity::Legendary, 10),
        CoreSlot::new(Rarity::Ancient, 14),
    ];
    let bounded = JointOptimizer::default()
        .optimize(&reference_inventory(), &cores, Alignment::Order, Role::Support)
        .unwrap();
    let exact = JointOptimizer::new(OptimizerConfig::new().without_candidate_limit())
        .optimize(&reference_inventory(), &cores, Alignment::Order, Role::Support)
        .unwrap();

    // 每個核心候選數都不到 300，截斷不生效
    assert!(bounded.candidate_counts.iter().all(|&n| n < 300));
    assert_eq!(bounded.best, exact.best);
}

#[test]
fn test_generator_feeds_optimizer_lists() {
    let inventory = reference_inventory();
    let core = CoreSlot::new(Rarity::Ancient, 0);
    let combos = ComboGenerator::for_core(&inventory, &core, &OptimizerConfig::default());

    assert_eq!(combos.len(), 122);
    assert!(combos.iter().all(|c| c.cost <= 17));
    assert_eq!(combos.last(), Some(&Combination::EMPTY));
}

#[test]
fn test_identical_inputs_identical_answer() {
    let cores = [
        CoreSlot::new(Rarity::Ancient, 0),
        CoreSlot::new(Rarity::Ancient, 0),
        CoreSlot::new(Rarity::Relic, 0),
    ];
    let optimizer = JointOptimizer::default();
    let first = optimizer
        .optimize(&reference_inventory(), &cores, Alignment::Chaos, Role::Damage)
        .unwrap();
    let second = optimizer
        .optimize(&reference_inventory(), &cores, Alignment::Chaos, Role::Damage)
        .unwrap();

    assert_eq!(first.best, second.best);
}

#[test]
fn test_snapshot_plan() {
    let json = r#"{
        "role": "Damage",
        "order": {
            "inventory": [[5,4,3,2],[5,2],[5,4,3,2],[5],[2],[2],[],[],[],[],[],[],[],[]],
            "cores": [
                {"rarity": "Ancient", "target": 20, "min_value": 0},
                {"rarity": "Ancient", "target": 20, "min_value": 0},
                {"rarity": "Ancient", "target": 20, "min_value": 0}
            ]
        },
        "chaos": {
            "inventory": [[5,4,3,2],[5,2],[5,4,3,2],[5],[2],[2],[],[],[],[],[],[],[],[]],
            "cores": [
                {"rarity": "Ancient", "target": 20, "min_value": 0},
                {"rarity": "Ancient", "target": 20, "min_value": 0},
                {"rarity": "Ancient", "target": 20, "min_value": 0}
            ]
        }
    }"#;

    let snapshot = GridSnapshot::from_json(json).unwrap();
    assert_eq!(snapshot.order.inventory, reference_inventory());

    let plan = GridPlanner::default().plan(&snapshot).unwrap();

    assert_eq!(plan.order.best.as_ref().unwrap().power, Decimal::new(209_888, 2));
    assert_eq!(plan.chaos.best.as_ref().unwrap().power, Decimal::new(94_888, 2));
    assert_eq!(
        plan.total_combat_power_increase(),
        Decimal::new(209_888 + 94_888, 6)
    );

    let encoded = serde_json::to_value(&plan).unwrap();
    assert_eq!(encoded["order"]["found"], serde_json::Value::Bool(true));
}

#[test]
fn test_invalid_inputs_fail_fast() {
    assert!(matches!(
        GemInventory::from_units(vec![vec![1]; 13]),
        Err(GridError::InvalidInventory(_))
    ));
    assert!(matches!(Rarity::try_from(7u8), Err(GridError::InvalidRarity(7))));
    assert!(matches!(
        into_core_array(vec![CoreSlot::new(Rarity::Relic, 0); 4]),
        Err(GridError::InvalidCoreCount(4))
    ));
}

/// 小庫存：每種最多 2 顆，只用前 4 種，候選數遠低於截斷上限
fn small_inventory() -> impl Strategy<Value = GemInventory> {
    proptest::collection::vec(proptest::collection::vec(0u32..6, 0..=2), 4).prop_map(|head| {
        let mut units = head;
        units.resize(GEM_KIND_COUNT, Vec::new());
        GemInventory::from_units(units).unwrap()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_small_inventory_truncation_is_lossless(
        inventory in small_inventory(),
        rarities in proptest::array::uniform3(0u8..4),
        is_order in any::<bool>(),
        is_support in any::<bool>(),
    ) {
        let cores = rarities.map(|r| CoreSlot::from_raw(r, 20, 0).unwrap());
        let alignment = Alignment::from_flag(is_order);
        let role = Role::from_flag(is_support);

        let bounded = JointOptimizer::default()
            .optimize(&inventory, &cores, alignment, role)
            .unwrap();
        let exact = JointOptimizer::new(OptimizerConfig::new().without_candidate_limit())
            .optimize(&inventory, &cores, alignment, role)
            .unwrap();

        prop_assert!(bounded.found);
        prop_assert_eq!(&bounded.best, &exact.best);

        let best = bounded.best.unwrap();
        prop_assert!(inventory.fits(&best.usage));
        for (i, combo) in best.combinations.iter().enumerate() {
            prop_assert!(combo.cost <= cores[i].cost_capacity());
            prop_assert_eq!(best.capped_values[i], cores[i].cap_value(combo.value));
        }
    }
}
