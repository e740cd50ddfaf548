use crate::core::extractor::{field_to_string, read_event_message};
use crate::core::prober::HttpProber;
use crate::domain::model::{ProbeOutcome, ProbeResponse, SqsEvent};
use crate::domain::ports::Notify;
use crate::utils::error::Result;

pub struct ProbeHandler<N: Notify> {
    prober: HttpProber,
    notifier: N,
}

impl<N: Notify> ProbeHandler<N> {
    pub fn new(prober: HttpProber, notifier: N) -> Self {
        Self { prober, notifier }
    }

    /// One invocation: extract, probe, notify.
    ///
    /// A probe failure does not abort the run; its status marker and error
    /// text stand in for the status line in the notification. A publish
    /// failure is returned to the caller so the runtime can fail the
    /// invocation and let the queue redeliver.
    pub async fn handle(&self, event: SqsEvent) -> Result<ProbeResponse> {
        let fields = read_event_message(&event);
        let target_url = field_to_string(&fields, "targetUrl");
        let topic_arn = field_to_string(&fields, "topicArn");

        let outcome = match self.prober.get_data(&target_url).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!(url = %target_url, "probe failed: {}", e);
                ProbeOutcome {
                    status: e.probe_status().to_string(),
                    body: e.to_string(),
                }
            }
        };

        tracing::info!(%topic_arn, status = %outcome.status, "publishing probe status");

        let subject = format!("Status calling : {}", target_url);
        let message = format!("Call status of `{}` : {}", target_url, outcome.status);

        let publish_receipt = self.notifier.publish(&topic_arn, &subject, &message).await?;

        Ok(ProbeResponse {
            target_url,
            probe_status: outcome.status,
            publish_receipt,
        })
    }
}
