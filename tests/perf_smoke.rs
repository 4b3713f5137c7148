use wordfall_engine::{BubbleDescriptor, EngineCore};

#[test]
fn perf_smoke_step() {
    let mut core = EngineCore::new(800.0, 600.0);
    core.enable_perf_metrics(true);
    let list: Vec<BubbleDescriptor> = (1..=5)
        .map(|i| BubbleDescriptor {
            id: i,
            label: format!("word{i}"),
            icon: i % 2 == 0,
            just_added: false,
        })
        .collect();
    core.reconcile(&list);

    core.step(16.666);
    let stats = core.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.body_count(), 5);
    assert_eq!(stats.sub_steps(), 6);
}
