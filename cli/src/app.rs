use indicatif::{ProgressBar, ProgressStyle};
use pargraph_core::{Graph, GraphFormat, load_graph};
use std::{error::Error, path::PathBuf, time::Duration};

pub const GRAPH_PATH_ENV: &str = "PARGRAPH_GRAPH";
pub const DEFAULT_GRAPH_PATH: &str = "data/USA-road-d.NY.gr";

pub struct PargraphApp {
    pub graph_path: PathBuf,
}

impl PargraphApp {
    pub fn new(graph_path: Option<PathBuf>) -> Result<Self, Box<dyn Error>> {
        let graph_path = graph_path.unwrap_or_else(default_graph_path);

        if !graph_path.exists() {
            return Err(format!(
                "Graph file not found: {:?}. Pass --graph or set {}",
                graph_path, GRAPH_PATH_ENV
            )
            .into());
        }

        Ok(Self { graph_path })
    }

    pub fn load_graph(&self, format: GraphFormat, show_progress: bool) -> Result<Graph, Box<dyn Error>> {
        let spinner = if show_progress {
            let pb = ProgressBar::new_spinner();
            pb.set_style(ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {msg}")?);
            pb.set_message(format!("Loading {}", self.graph_path.display()));
            pb.enable_steady_tick(Duration::from_millis(100));
            Some(pb)
        } else {
            None
        };

        let graph = load_graph(&self.graph_path, format);

        if let Some(pb) = spinner {
            pb.finish_and_clear();
        }

        Ok(graph?)
    }
}

fn default_graph_path() -> PathBuf {
    std::env::var(GRAPH_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_GRAPH_PATH))
}
