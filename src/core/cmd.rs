use serde::{Deserialize, Serialize};

use crate::core::notification::LikeNotification;

/// Side effects requested by `update`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    /// Deliver a notification to the remote endpoint
    Notify {
        seq: u64,
        notification: LikeNotification,
    },

    // Logging related
    LogError {
        message: String,
    },
    LogDebug {
        message: String,
    },

    // Batch command (execute multiple commands together)
    Batch(Vec<Cmd>),

    None,
}

impl Cmd {
    /// Flatten nested batches into a plain list, dropping `None`
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            Cmd::None => vec![],
            cmd => vec![cmd],
        }
    }
}
