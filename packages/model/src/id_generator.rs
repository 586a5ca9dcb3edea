use crc32fast::Hasher;
use serde::{Deserialize, Serialize};

/// Derive a template seed from its name using CRC32
pub fn get_template_seed(name: &str) -> String {
    let mut buff = String::from(name);
    if !name.starts_with("template://") {
        buff = format!("template://{}", buff);
    }

    let mut hasher = Hasher::new();
    hasher.update(buff.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential ID generator for tree nodes within a template
///
/// The counter travels with the document, so ids stay unique for the
/// whole lifetime of a template, including across save and load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IDGenerator {
    seed: String,
    count: u64,
}

impl IDGenerator {
    pub fn new(name: &str) -> Self {
        Self {
            seed: get_template_seed(name),
            count: 0,
        }
    }

    pub fn from_seed(seed: String) -> Self {
        Self { seed, count: 0 }
    }

    /// Generate next sequential ID
    pub fn new_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }

    /// Make sure ids up to `count` are never minted again
    pub fn reserve(&mut self, count: u64) {
        self.count = self.count.max(count);
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// Number of ids minted so far
    pub fn count(&self) -> u64 {
        self.count
    }
}
