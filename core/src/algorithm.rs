use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Two concurrent peers meeting in the middle
    #[default]
    Bidirectional,
    /// Plain breadth-first search from the source
    Unidirectional,
}

impl Algorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Bidirectional => "bidirectional",
            Algorithm::Unidirectional => "unidirectional",
        }
    }
}

impl From<&str> for Algorithm {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "unidirectional" | "bfs" => Algorithm::Unidirectional,
            _ => Algorithm::Bidirectional,
        }
    }
}

impl From<String> for Algorithm {
    fn from(s: String) -> Self {
        Algorithm::from(s.as_str())
    }
}
