use common::games::snake::ScoreReporter;
use common::log_warn;
use tokio::sync::mpsc;

use crate::state::ClientCommand;

/// Hands finished runs to the API task; the game never waits on the network.
pub struct ApiScoreReporter {
    command_tx: mpsc::UnboundedSender<ClientCommand>,
}

impl ApiScoreReporter {
    pub fn new(command_tx: mpsc::UnboundedSender<ClientCommand>) -> Self {
        Self { command_tx }
    }
}

impl ScoreReporter for ApiScoreReporter {
    fn submit(&mut self, score: u32) {
        if self.command_tx.send(ClientCommand::SubmitScore(score)).is_err() {
            log_warn!("Score {} dropped, API task is gone", score);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_queues_command() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut reporter = ApiScoreReporter::new(tx);
        reporter.submit(17);
        assert!(matches!(rx.try_recv(), Ok(ClientCommand::SubmitScore(17))));
    }

    #[test]
    fn test_submit_without_receiver_does_not_panic() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        ApiScoreReporter::new(tx).submit(3);
    }
}
