use serde::{Deserialize, Serialize};

use crate::{CHUNK_OVERLAP, CHUNK_SIZE};

/// Chunking parameters handed to the ingestion pipeline.
///
/// Parameters only: the splitter that consumes them lives with the ingestion
/// service, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkingSettings {
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    #[serde(default = "default_chunk_overlap")]
    pub chunk_overlap: usize,
}

fn default_chunk_size() -> usize {
    CHUNK_SIZE
}

fn default_chunk_overlap() -> usize {
    CHUNK_OVERLAP
}

impl Default for ChunkingSettings {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            chunk_overlap: default_chunk_overlap(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MAX_CONCURRENCY, MODEL_NAME};

    #[test]
    fn test_constants_keep_their_fixed_values() {
        assert_eq!(MODEL_NAME, "gpt-3.5-turbo");
        assert_eq!(CHUNK_SIZE, 250);
        assert_eq!(CHUNK_OVERLAP, 0);
        assert_eq!(MAX_CONCURRENCY, 1);
    }

    #[test]
    fn test_default_mirrors_constants() {
        let settings = ChunkingSettings::default();
        assert_eq!(settings.chunk_size, CHUNK_SIZE);
        assert_eq!(settings.chunk_overlap, CHUNK_OVERLAP);
    }

    #[test]
    fn test_missing_fields_deserialize_to_defaults() {
        let settings: ChunkingSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, ChunkingSettings::default());
    }
}
