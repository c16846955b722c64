use staged_tree_viewer::config::{TreeConfig, TreeLayout};
use staged_tree_viewer::skeleton::SlotId;
use staged_tree_viewer::stage::StageTransition;
use staged_tree_viewer::visibility::resolve;
use staged_tree_viewer::{SceneConfig, TreeScene};

const FRAME: f32 = 1.0 / 60.0;

fn settle(scene: &mut TreeScene) {
    for _ in 0..240 {
        scene.update(FRAME);
    }
}

#[test]
fn test_walk_through_sample_tree() {
    let mut scene = TreeScene::new(&SceneConfig::default()).unwrap();
    let expected = [(1, 0), (3, 2), (7, 6), (12, 11)];

    for (stage, &(nodes, edges)) in expected.iter().enumerate() {
        if stage > 0 {
            assert_eq!(
                scene.increment_stage(),
                StageTransition::Changed { from: stage - 1, to: stage }
            );
        }
        settle(&mut scene);
        let frame = scene.frame();
        assert_eq!(frame.drawable_nodes().count(), nodes, "stage {}", stage);
        assert_eq!(frame.visible_edge_count(), edges, "stage {}", stage);
    }

    assert_eq!(scene.increment_stage(), StageTransition::AtBound);

    for _ in 0..3 {
        scene.decrement_stage();
    }
    settle(&mut scene);
    assert_eq!(scene.frame().drawable_nodes().count(), 1);
}

#[test]
fn test_generated_tree_visibility() {
    let config = SceneConfig {
        tree: TreeConfig {
            layout: TreeLayout::Generated { level_count: 6, spacing_x: 1.0 },
            ..TreeConfig::default()
        },
        ..SceneConfig::default()
    };
    let scene = TreeScene::new(&config).unwrap();
    let skeleton = scene.skeleton();
    assert_eq!(scene.max_stage(), 5);

    for stage in 0..=skeleton.max_stage() {
        let vis = resolve(skeleton, stage);
        assert_eq!(vis.visible_node_count(), (1 << (stage + 1)) - 1);
        for edge in &vis.edges {
            assert_eq!(edge.visible, vis.is_node_visible(edge.to));
        }
    }
    assert!(resolve(skeleton, 0).is_node_visible(SlotId::ROOT));
}

#[test]
fn test_invalid_config_is_rejected_up_front() {
    let yaml = "spring: { tension: 200, friction: 0 }";
    assert!(SceneConfig::from_yaml(yaml).is_err());

    let config = SceneConfig {
        tree: TreeConfig {
            layout: TreeLayout::Generated { level_count: 0, spacing_x: 2.0 },
            ..TreeConfig::default()
        },
        ..SceneConfig::default()
    };
    assert!(TreeScene::new(&config).is_err());
}
