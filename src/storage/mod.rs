pub mod user_agent_store;

pub use user_agent_store::UserAgentStore;
