//! Test doubles for exercising widgets without a network

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
    time::Duration,
};

use futures::future::BoxFuture;
use reqwest::StatusCode;
use tokio::{sync::mpsc, task::JoinHandle};
use tokio_util::sync::CancellationToken;

use crate::{
    core::{msg::Msg, notification::LikeNotification},
    infrastructure::{
        notifier::{NotifyError, Notifier},
        notifier_service::NotifierService,
    },
    presentation::controller::{ClassListAdapter, ElementIds},
    widget::FeedbackWidget,
};

/// Scripted response for a single `notify` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    Ok,
    Status(u16),
}

/// Notifier that records every payload and answers from a script.
///
/// Without a script every call succeeds. A per-call delay can be scripted to
/// provoke overlapping requests.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<LikeNotification>>,
    script: Mutex<VecDeque<(Reply, Duration)>>,
    fallback: Option<u16>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails with the given HTTP status
    pub fn failing_with(status: u16) -> Self {
        Self {
            fallback: Some(status),
            ..Self::default()
        }
    }

    /// Queue a reply for the next unscripted call
    pub fn script(self, reply: Reply, delay: Duration) -> Self {
        if let Ok(mut script) = self.script.lock() {
            script.push_back((reply, delay));
        }
        self
    }

    pub fn sent(&self) -> Vec<LikeNotification> {
        self.sent.lock().map(|sent| sent.clone()).unwrap_or_default()
    }

    fn next_reply(&self) -> (Reply, Duration) {
        let scripted = self.script.lock().ok().and_then(|mut s| s.pop_front());
        scripted.unwrap_or_else(|| match self.fallback {
            Some(status) => (Reply::Status(status), Duration::ZERO),
            None => (Reply::Ok, Duration::ZERO),
        })
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: LikeNotification) -> BoxFuture<'_, Result<(), NotifyError>> {
        Box::pin(async move {
            let (reply, delay) = self.next_reply();
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            if let Ok(mut sent) = self.sent.lock() {
                sent.push(notification);
            }
            match reply {
                Reply::Ok => Ok(()),
                Reply::Status(code) => Err(NotifyError::Rejected {
                    status: StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                }),
            }
        })
    }
}

/// A widget wired to a running notifier service over a class-list surface
pub struct WidgetHarness {
    pub widget: FeedbackWidget<ClassListAdapter>,
    pub msg_rx: mpsc::UnboundedReceiver<Msg>,
    cancel: CancellationToken,
    service: Option<JoinHandle<()>>,
}

impl WidgetHarness {
    /// Must be called inside a tokio runtime
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self::with_adapter(notifier, ClassListAdapter::new(ElementIds::default()))
    }

    /// Same as `new`, rendering into the given element registry
    pub fn with_adapter(notifier: Arc<dyn Notifier>, adapter: ClassListAdapter) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        let (handle, cancel, service) = NotifierService::new(notifier, msg_tx);
        let service = Some(service.run());
        let widget = FeedbackWidget::new(adapter, handle);
        Self {
            widget,
            msg_rx,
            cancel,
            service,
        }
    }

    /// Shut the notifier service down and wait for it to finish
    pub async fn stop_notifier(&mut self) {
        self.cancel.cancel();
        if let Some(service) = self.service.take() {
            let _ = service.await;
        }
    }

    /// Feed the next settlement message back into the widget
    pub async fn settle_next(&mut self) -> Option<Msg> {
        let msg = self.msg_rx.recv().await?;
        self.widget.dispatch(msg.clone());
        Some(msg)
    }
}
