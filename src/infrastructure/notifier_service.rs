use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tokio_util::sync::CancellationToken;

use crate::{
    core::{
        msg::Msg,
        notification::{LikeNotification, NotifyOutcome},
    },
    infrastructure::notifier::Notifier,
};

/// One queued notification
#[derive(Debug)]
pub struct NotifyJob {
    pub seq: u64,
    pub notification: LikeNotification,
    reply: oneshot::Sender<NotifyOutcome>,
}

impl NotifyJob {
    /// Report the outcome to the widget's message channel and to the waiting `Delivery`
    fn settle(self, msg_tx: &mpsc::UnboundedSender<Msg>, outcome: NotifyOutcome) {
        let _ = msg_tx.send(Msg::NotificationSettled {
            seq: self.seq,
            liked: self.notification.liked,
            outcome: outcome.clone(),
        });
        let _ = self.reply.send(outcome);
    }
}

/// Resolves once the corresponding notification has settled
#[derive(Debug)]
pub struct Delivery {
    seq: u64,
    rx: oneshot::Receiver<NotifyOutcome>,
}

impl Delivery {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub async fn outcome(self) -> NotifyOutcome {
        self.rx.await.unwrap_or(NotifyOutcome::Abandoned)
    }
}

/// Cheap, cloneable submission side of a `NotifierService`
#[derive(Debug, Clone)]
pub struct NotifierHandle {
    job_tx: mpsc::UnboundedSender<NotifyJob>,
    msg_tx: mpsc::UnboundedSender<Msg>,
}

impl NotifierHandle {
    /// Queue a notification without waiting for it.
    ///
    /// If the service has stopped, the job settles as `Abandoned` right away
    /// through the same channels a delivered job would use.
    pub fn submit(&self, seq: u64, notification: LikeNotification) -> Delivery {
        let (reply, rx) = oneshot::channel();
        let job = NotifyJob {
            seq,
            notification,
            reply,
        };
        if let Err(mpsc::error::SendError(job)) = self.job_tx.send(job) {
            log::warn!("Notifier stopped; dropping like status #{seq}");
            job.settle(&self.msg_tx, NotifyOutcome::Abandoned);
        }
        Delivery { seq, rx }
    }

    pub fn is_closed(&self) -> bool {
        self.job_tx.is_closed()
    }
}

pub type NewNotifierService = (
    NotifierHandle,    // submission side
    CancellationToken, // shutdown signal
    NotifierService,
);

/// Background worker delivering notifications of one widget.
///
/// Jobs are delivered one at a time in submission order, so the endpoint
/// always observes the user's choices in click order.
pub struct NotifierService {
    notifier: Arc<dyn Notifier>,
    // Incoming channels
    job_rx: mpsc::UnboundedReceiver<NotifyJob>,
    cancel_token: CancellationToken,
    // Outgoing channels
    msg_tx: mpsc::UnboundedSender<Msg>,
}

impl NotifierService {
    pub fn new(notifier: Arc<dyn Notifier>, msg_tx: mpsc::UnboundedSender<Msg>) -> NewNotifierService {
        let (job_tx, job_rx) = mpsc::unbounded_channel();
        let cancel_token = CancellationToken::new();

        (
            NotifierHandle {
                job_tx,
                msg_tx: msg_tx.clone(),
            },
            cancel_token.clone(),
            Self {
                notifier,
                job_rx,
                cancel_token,
                msg_tx,
            },
        )
    }

    /// Run the service in a background task
    pub fn run(self) -> tokio::task::JoinHandle<()> {
        tokio::spawn(self.run_service())
    }

    async fn run_service(mut self) {
        loop {
            tokio::select! {
                biased;

                _ = self.cancel_token.cancelled() => {
                    log::info!("NotifierService received cancellation signal");
                    break;
                }

                job = self.job_rx.recv() => {
                    let Some(job) = job else {
                        log::debug!("NotifierService: all handles dropped");
                        break;
                    };
                    self.deliver(job).await;
                }
            }
        }

        // Anything still queued will never be sent
        self.job_rx.close();
        while let Ok(job) = self.job_rx.try_recv() {
            job.settle(&self.msg_tx, NotifyOutcome::Abandoned);
        }
    }

    async fn deliver(&self, job: NotifyJob) {
        log::debug!(
            "NotifierService: submitting like status #{} ({:?})",
            job.seq,
            job.notification
        );
        let outcome = tokio::select! {
            result = self.notifier.notify(job.notification) => match result {
                Ok(()) => NotifyOutcome::Delivered,
                Err(e) => e.outcome(),
            },
            _ = self.cancel_token.cancelled() => NotifyOutcome::Abandoned,
        };
        job.settle(&self.msg_tx, outcome);
    }
}
