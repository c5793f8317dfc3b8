// Persistent per-account user-agent assignment
use crate::{o_info, o_warn};
use rand::seq::SliceRandom;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Pool of realistic mobile user agents to draw from. Assignments are stable
/// per session and unique across sessions sharing the same store file.
const USER_AGENT_POOL: &[&str] = &[
    "Mozilla/5.0 (Linux; Android 13; Pixel 7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.6099.144 Mobile Safari/537.36",
    "Mozilla/5.0 (Linux; Android 14; Pixel 8 Pro) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0.6167.101 Mobile Safari/537.36",
    "Mozilla/5.0 (Linux; Android 13; SM-G991B) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.6045.163 Mobile Safari/537.36",
    "Mozilla/5.0 (Linux; Android 12; SM-A525F) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/118.0.5993.80 Mobile Safari/537.36",
    "Mozilla/5.0 (Linux; Android 14; SM-S918B) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.6261.64 Mobile Safari/537.36",
    "Mozilla/5.0 (Linux; Android 13; 2211133G) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.6099.230 Mobile Safari/537.36",
    "Mozilla/5.0 (Linux; Android 12; M2101K6G) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/117.0.5938.60 Mobile Safari/537.36",
    "Mozilla/5.0 (Linux; Android 13; CPH2449) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0.6167.143 Mobile Safari/537.36",
    "Mozilla/5.0 (Linux; Android 14; ONEPLUS A6013) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.6099.115 Mobile Safari/537.36",
    "Mozilla/5.0 (Linux; Android 13; V2254A) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.6045.193 Mobile Safari/537.36",
];

pub struct UserAgentStore {
    storage_path: String,
    assignments: HashMap<String, String>,
}

impl UserAgentStore {
    pub fn new(storage_path: &str) -> Self {
        let mut store = Self {
            storage_path: storage_path.to_string(),
            assignments: HashMap::new(),
        };

        if let Err(e) = store.load_from_disk() {
            o_warn!("Failed to load user-agent store: {}", e);
            o_info!("Starting with empty user-agent store");
        }

        store
    }

    /// Return the stable user agent for a session, assigning and persisting a
    /// fresh one on first use. A new assignment is never a duplicate of one
    /// already held by another session in this store.
    pub fn get_or_create(&mut self, session_name: &str) -> Result<String, Box<dyn std::error::Error>> {
        if let Some(agent) = self.assignments.get(session_name) {
            return Ok(agent.clone());
        }

        o_info!("{} | Generating new user agent...", session_name);
        let mut rng = rand::thread_rng();
        let mut candidate = *USER_AGENT_POOL
            .choose(&mut rng)
            .ok_or("user agent pool is empty")?;
        let mut attempts = 0;
        while self.assignments.values().any(|a| a == candidate) {
            attempts += 1;
            if attempts > USER_AGENT_POOL.len() * 4 {
                // Pool exhausted; reuse is better than spinning forever.
                break;
            }
            candidate = *USER_AGENT_POOL.choose(&mut rng).unwrap();
        }

        self.assignments
            .insert(session_name.to_string(), candidate.to_string());
        self.save_to_disk()?;
        Ok(candidate.to_string())
    }

    pub fn assigned_count(&self) -> usize {
        self.assignments.len()
    }

    fn load_from_disk(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        if !Path::new(&self.storage_path).exists() {
            return Ok(()); // File doesn't exist yet, start fresh
        }

        let content = fs::read_to_string(&self.storage_path)?;
        self.assignments = serde_json::from_str(&content)?;
        Ok(())
    }

    fn save_to_disk(&self) -> Result<(), Box<dyn std::error::Error>> {
        let content = serde_json::to_string_pretty(&self.assignments)?;

        if let Some(parent) = Path::new(&self.storage_path).parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.storage_path, content)?;
        Ok(())
    }
}
