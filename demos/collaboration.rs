use std::{env, fmt::Display, fs};

use costar::{
    centrality::{top_k, CentralityMap},
    collab::Credit,
    config::AnalysisConfig,
    graph::Graph,
    progress::Logged,
};
use itertools::Itertools;
use tracing_subscriber::EnvFilter;

const DEFAULT_CREDITS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/testdata/credits.json");

// Usage: collaboration [credits.json] [config.json]
//
// Progress is logged at debug level, e.g. `RUST_LOG=costar=debug`.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = env::args().skip(1);
    let credits_path = args.next().unwrap_or_else(|| DEFAULT_CREDITS.to_owned());

    let config: AnalysisConfig = match args.next() {
        Some(path) => {
            let json = fs::read_to_string(path).expect("couldn't read the config");
            serde_json::from_str(&json).expect("couldn't parse the config")
        }
        None => AnalysisConfig::default(),
    };
    config.validate().expect("invalid config");

    let json = fs::read_to_string(&credits_path).expect("couldn't read the credits");
    let credits: Vec<Credit<String>> =
        serde_json::from_str(&json).expect("couldn't parse the credits");

    println!("\nLoaded {} credits from {credits_path}", credits.len());

    let co_star = Graph::co_star(&credits);
    println!("\nCo-star graph, (vertices, edges): {:?}", co_star.info());
    report_structure(&co_star);
    report_centrality(&co_star, &config);

    let actor_director = Graph::actor_director(&credits);
    println!(
        "\nActor to director graph, (vertices, edges): {:?}",
        actor_director.info()
    );
    report_structure(&actor_director);
    report_centrality(&actor_director, &config);
}

fn report_structure(graph: &Graph<String>) {
    let components = graph.connected_components();
    println!(
        "Connected components: {}, sizes: [{}]",
        components.len(),
        components.iter().map(Vec::len).join(", ")
    );

    if graph.is_directed() {
        let strong = graph.strongly_connected_components();
        println!("Strongly connected components: {}", strong.len());
        return;
    }

    let tree = graph.minimum_spanning_tree_from_first();
    println!(
        "Minimum spanning tree from the first vertex: {} edges, total weight {}",
        tree.len(),
        tree.total_weight()
    );
}

fn report_centrality(graph: &Graph<String>, config: &AnalysisConfig) {
    let degree = graph
        .centrality()
        .configured(config)
        .degree(config.degree_mode);
    print_ranking(&format!("{} degree", config.degree_mode), &degree, config);

    let mut progress = Logged::from_config("betweenness", config);
    let betweenness = graph
        .centrality()
        .configured(config)
        .progress(&mut progress)
        .betweenness();
    print_ranking("betweenness", &betweenness, config);

    // Closeness is only meaningful within a component.
    let largest = graph.largest_component();
    let mut progress = Logged::from_config("closeness", config);
    let closeness = graph
        .centrality()
        .configured(config)
        .restrict_to(&largest)
        .progress(&mut progress)
        .closeness();
    print_ranking("closeness (largest component)", &closeness, config);
}

fn print_ranking<T: Clone + Ord + Display>(
    name: &str,
    centralities: &CentralityMap<T>,
    config: &AnalysisConfig,
) {
    println!("Top {} by {name}:", config.top_k);
    for (vertex, centrality) in top_k(centralities, config.top_k) {
        println!(
            "  {vertex}: {:.4} (normalized {:.4})",
            centrality.raw, centrality.normalized
        );
    }
}
