use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use rv_graph::WeightedGraph;
use rv_project::{GraphDef, Project};
use rv_render::GraphSnapshot;

mod error;
use error::{AppError, AppResult};

#[derive(Parser)]
#[command(name = "rv-cli")]
#[command(about = "RouteViz CLI - weighted graph routing and rendering tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate project file syntax and structure
    Validate {
        /// Path to the project YAML file
        project_path: PathBuf,
    },
    /// List graphs in a project
    Graphs {
        /// Path to the project YAML file
        project_path: PathBuf,
    },
    /// Compute the shortest route between two nodes
    Route {
        /// Path to the project YAML file
        project_path: PathBuf,
        /// Graph ID to route in
        graph_id: String,
        /// Start node
        start: String,
        /// End node
        end: String,
    },
    /// Render a graph as Graphviz DOT, optionally highlighting a route
    Render {
        /// Path to the project YAML file
        project_path: PathBuf,
        /// Graph ID to render
        graph_id: String,
        /// Highlight the shortest route between two nodes
        #[arg(long, num_args = 2, value_names = ["START", "END"])]
        route: Option<Vec<String>>,
        /// Output DOT file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Export a graph snapshot as JSON
    Export {
        /// Path to the project YAML file
        project_path: PathBuf,
        /// Graph ID to export
        graph_id: String,
        /// Include the shortest route between two nodes
        #[arg(long, num_args = 2, value_names = ["START", "END"])]
        route: Option<Vec<String>>,
        /// Output JSON file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { project_path } => cmd_validate(&project_path),
        Commands::Graphs { project_path } => cmd_graphs(&project_path),
        Commands::Route {
            project_path,
            graph_id,
            start,
            end,
        } => cmd_route(&project_path, &graph_id, &start, &end),
        Commands::Render {
            project_path,
            graph_id,
            route,
            output,
        } => cmd_render(&project_path, &graph_id, route, output.as_deref()),
        Commands::Export {
            project_path,
            graph_id,
            route,
            output,
        } => cmd_export(&project_path, &graph_id, route, output.as_deref()),
    }
}

fn cmd_validate(project_path: &Path) -> AppResult<()> {
    println!("Validating project: {}", project_path.display());
    let _ = load_project(project_path)?;
    println!("✓ Project is valid");
    Ok(())
}

fn cmd_graphs(project_path: &Path) -> AppResult<()> {
    let project = load_project(project_path)?;

    if project.graphs.is_empty() {
        println!("No graphs found in project");
    } else {
        println!("Graphs in project:");
        for def in &project.graphs {
            let graph = build_graph(def);
            println!(
                "  {} - {} ({} nodes, {} edges)",
                def.id,
                def.name,
                graph.node_count(),
                graph.edge_count()
            );
        }
    }
    Ok(())
}

fn cmd_route(project_path: &Path, graph_id: &str, start: &str, end: &str) -> AppResult<()> {
    let project = load_project(project_path)?;
    let def = find_graph(&project, graph_id)?;
    let graph = build_graph(def);

    // Routing failures are data outcomes, not process errors.
    match graph.shortest_path(&start.to_string(), &end.to_string()) {
        Ok(path) => {
            let cost = graph.path_cost(&path)?;
            println!("✓ Shortest route: {}", path.join(" -> "));
            println!("  Total cost: {}", cost);
        }
        Err(err) => println!("{}", err),
    }
    Ok(())
}

fn cmd_render(
    project_path: &Path,
    graph_id: &str,
    route: Option<Vec<String>>,
    output: Option<&Path>,
) -> AppResult<()> {
    let snapshot = build_snapshot(project_path, graph_id, route)?;
    let dot = rv_render::to_dot(&snapshot);
    write_output(&dot, output, "DOT")
}

fn cmd_export(
    project_path: &Path,
    graph_id: &str,
    route: Option<Vec<String>>,
    output: Option<&Path>,
) -> AppResult<()> {
    let snapshot = build_snapshot(project_path, graph_id, route)?;
    let json = rv_render::to_json(&snapshot)?;
    write_output(&json, output, "JSON")
}

fn load_project(path: &Path) -> AppResult<Project> {
    Ok(rv_project::load_yaml(path)?)
}

fn find_graph<'a>(project: &'a Project, graph_id: &str) -> AppResult<&'a GraphDef> {
    project
        .graphs
        .iter()
        .find(|g| g.id == graph_id)
        .ok_or_else(|| AppError::GraphNotFound(graph_id.to_string()))
}

/// Build the in-memory graph from its file definition.
///
/// Declared nodes are added first so insertion order follows the file;
/// edge endpoints missing from the node list are created implicitly.
fn build_graph(def: &GraphDef) -> WeightedGraph<String> {
    let mut graph = WeightedGraph::new();
    for node in &def.nodes {
        graph.add_node(node.id.clone());
    }
    for edge in &def.edges {
        match edge.weight {
            Some(weight) => graph.add_edge(edge.u.clone(), edge.v.clone(), weight),
            None => graph.add_unweighted_edge(edge.u.clone(), edge.v.clone()),
        }
    }
    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph compiled"
    );
    graph
}

fn build_snapshot(
    project_path: &Path,
    graph_id: &str,
    route: Option<Vec<String>>,
) -> AppResult<GraphSnapshot> {
    let project = load_project(project_path)?;
    let def = find_graph(&project, graph_id)?;
    let graph = build_graph(def);

    let mut snapshot = GraphSnapshot::from_graph(&graph);
    if let Some(endpoints) = route {
        // clap guarantees exactly two values
        match graph.shortest_path(&endpoints[0], &endpoints[1]) {
            Ok(path) => snapshot = snapshot.with_route(&path),
            Err(err) => println!("{}", err),
        }
    }
    Ok(snapshot)
}

fn write_output(content: &str, output: Option<&Path>, what: &str) -> AppResult<()> {
    if let Some(path) = output {
        std::fs::write(path, content)?;
        println!("✓ Wrote {} to {}", what, path.display());
    } else {
        print!("{}", content);
    }
    Ok(())
}
