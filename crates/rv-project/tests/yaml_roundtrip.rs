//! File round-trip tests for rv-project.

use rv_project::{EdgeDef, GraphDef, LATEST_VERSION, NodeDef, Project, load_yaml, save_yaml};

fn demo_project() -> Project {
    Project {
        version: LATEST_VERSION,
        name: "routing-demo".to_string(),
        graphs: vec![GraphDef {
            id: "demo".to_string(),
            name: "Reference routing graph".to_string(),
            nodes: (1..=5)
                .map(|i| NodeDef { id: i.to_string() })
                .collect(),
            edges: vec![
                EdgeDef {
                    u: "1".to_string(),
                    v: "2".to_string(),
                    weight: Some(4.5),
                },
                EdgeDef {
                    u: "1".to_string(),
                    v: "3".to_string(),
                    weight: Some(3.2),
                },
                EdgeDef {
                    u: "3".to_string(),
                    v: "5".to_string(),
                    weight: Some(2.7),
                },
            ],
        }],
    }
}

#[test]
fn save_then_load_preserves_project() {
    let path = std::env::temp_dir().join(format!("rv-project-roundtrip-{}.yaml", std::process::id()));
    let project = demo_project();

    save_yaml(&path, &project).unwrap();
    let loaded = load_yaml(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded, project);
}

#[test]
fn save_rejects_invalid_project() {
    let path = std::env::temp_dir().join(format!("rv-project-invalid-{}.yaml", std::process::id()));
    let mut project = demo_project();
    project.graphs[0].edges[0].weight = Some(-2.0);

    assert!(save_yaml(&path, &project).is_err());
    assert!(!path.exists());
}

#[test]
fn load_rejects_missing_file() {
    let path = std::env::temp_dir().join("rv-project-does-not-exist.yaml");
    assert!(load_yaml(&path).is_err());
}
