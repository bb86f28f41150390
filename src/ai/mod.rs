mod agent;
mod greedy;
mod random;

pub use agent::{play_agent_move, Agent};
pub use greedy::{bot_move_tiger, GreedyTiger};
pub use random::RandomAgent;
