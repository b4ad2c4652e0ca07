//! Conversation session state and message flow.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::debug;

use recicla_core::types::{Message, Sender};
use recicla_geo::{LocationFinder, SEARCHING_MESSAGE};

use crate::markup;
use crate::response::{Reply, ResponseGenerator};

/// Pause between a user message and the bot reply, so responses feel
/// composed rather than instantaneous.
const DEFAULT_RESPONSE_DELAY: Duration = Duration::from_millis(500);

/// Receives every appended message together with its rendered HTML form.
///
/// The transcript records raw text; presentation layers decide which form to
/// show.
pub trait TranscriptSink: Send + Sync {
    fn append_message(&self, message: &Message, rendered_html: &str);

    /// Clear the input field after a user message is accepted. No-op by
    /// default for surfaces without an input field.
    fn clear_input(&self) {}

    /// Move focus to the input field. No-op by default.
    fn focus_input(&self) {}
}

/// Append-only record of one conversation.
#[derive(Debug, Default, Clone)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    fn push(&mut self, message: Message) {
        self.messages.push(message);
    }
}

/// One conversation session.
///
/// Cheap to clone; clones share the same transcript. Each submission
/// schedules its bot reply on a background task and returns the task's
/// [`JoinHandle`]. The handle is for observation only: dropping it detaches
/// the task, it does not cancel the pending reply.
#[derive(Clone)]
pub struct ChatController {
    inner: Arc<Inner>,
}

struct Inner {
    generator: ResponseGenerator,
    finder: Arc<LocationFinder>,
    sink: Arc<dyn TranscriptSink>,
    transcript: Mutex<Transcript>,
    response_delay: Duration,
}

impl ChatController {
    pub fn new(finder: Arc<LocationFinder>, sink: Arc<dyn TranscriptSink>) -> Self {
        Self::with_response_delay(finder, sink, DEFAULT_RESPONSE_DELAY)
    }

    pub fn with_response_delay(
        finder: Arc<LocationFinder>,
        sink: Arc<dyn TranscriptSink>,
        response_delay: Duration,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                generator: ResponseGenerator::new(),
                finder,
                sink,
                transcript: Mutex::new(Transcript::default()),
                response_delay,
            }),
        }
    }

    /// Submit one user message.
    ///
    /// Blank input is ignored and returns `None`. Otherwise the trimmed
    /// message is appended immediately, the bot reply is scheduled after the
    /// response delay, and the reply task's handle is returned. Deferred
    /// replies append the searching notice first and the lookup outcome when
    /// it resolves; a session without a position capability gets the
    /// unsupported-guidance text instead, with no searching notice.
    pub async fn submit(&self, input: &str) -> Option<JoinHandle<()>> {
        let text = input.trim();
        if text.is_empty() {
            return None;
        }

        debug!(len = text.len(), "user message submitted");
        self.inner.append(text, Sender::User).await;
        self.inner.sink.clear_input();

        let reply = self.inner.generator.generate(text);
        let inner = Arc::clone(&self.inner);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(inner.response_delay).await;
            match reply {
                Reply::Immediate(text) => inner.append(&text, Sender::Bot).await,
                Reply::Deferred { material } => {
                    if !inner.finder.has_provider() {
                        inner
                            .append(&LocationFinder::unsupported_message(), Sender::Bot)
                            .await;
                        return;
                    }
                    inner.append(SEARCHING_MESSAGE, Sender::Bot).await;
                    let resolved = inner.finder.resolve(material).await;
                    inner.append(&resolved, Sender::Bot).await;
                }
            }
        });
        Some(handle)
    }

    /// Snapshot of the transcript so far.
    pub async fn transcript(&self) -> Transcript {
        self.inner.transcript.lock().await.clone()
    }
}

impl Inner {
    async fn append(&self, text: &str, sender: Sender) {
        let message = Message::new(text, sender);
        self.sink.append_message(&message, &markup::to_html(text));
        self.transcript.lock().await.push(message);
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use recicla_geo::FixedPositionProvider;
    use std::sync::Mutex as StdMutex;

    #[derive(Default)]
    struct CollectingSink {
        events: StdMutex<Vec<(Sender, String, String)>>,
        input_clears: StdMutex<usize>,
    }

    impl TranscriptSink for CollectingSink {
        fn append_message(&self, message: &Message, rendered_html: &str) {
            self.events.lock().unwrap().push((
                message.sender,
                message.text.clone(),
                rendered_html.to_string(),
            ));
        }

        fn clear_input(&self) {
            *self.input_clears.lock().unwrap() += 1;
        }
    }

    fn controller() -> (ChatController, Arc<CollectingSink>) {
        controller_with_finder(LocationFinder::new())
    }

    fn controller_with_finder(finder: LocationFinder) -> (ChatController, Arc<CollectingSink>) {
        let sink = Arc::new(CollectingSink::default());
        let controller = ChatController::new(Arc::new(finder), sink.clone());
        (controller, sink)
    }

    async fn submit_and_wait(controller: &ChatController, input: &str) {
        controller
            .submit(input)
            .await
            .expect("reply task scheduled")
            .await
            .expect("reply task panicked");
    }

    // ---- input handling ----

    #[tokio::test]
    async fn test_blank_input_is_ignored() {
        let (controller, sink) = controller();
        assert!(controller.submit("").await.is_none());
        assert!(controller.submit("   \n\t").await.is_none());
        assert!(controller.transcript().await.is_empty());
        assert!(sink.events.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_input_is_trimmed_before_recording() {
        let (controller, _sink) = controller();
        submit_and_wait(&controller, "  olá  ").await;
        let transcript = controller.transcript().await;
        assert_eq!(transcript.messages()[0].text, "olá");
    }

    // ---- immediate replies ----

    #[tokio::test(start_paused = true)]
    async fn test_greeting_exchange() {
        let (controller, sink) = controller();
        submit_and_wait(&controller, "olá").await;

        let transcript = controller.transcript().await;
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.messages()[0].sender, Sender::User);
        assert_eq!(transcript.messages()[1].sender, Sender::Bot);
        assert_eq!(
            transcript.messages()[1].text,
            "Olá! Como posso ajudar você com reciclagem hoje?"
        );

        let events = sink.events.lock().unwrap();
        assert_eq!(events.len(), 2);
        // The input is cleared once, when the user message is accepted.
        assert_eq!(*sink.input_clears.lock().unwrap(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_sink_receives_rendered_html() {
        let (controller, sink) = controller();
        submit_and_wait(&controller, "onde descarto vidro na minha cidade?").await;

        let events = sink.events.lock().unwrap();
        let (_, text, html) = &events[1];
        assert!(text.contains("**Para reciclar VIDRO:**"));
        assert!(html.contains("<strong>Para reciclar VIDRO:</strong>"));
        assert!(html.contains("<br>"));
    }

    // ---- deferred replies ----

    #[tokio::test(start_paused = true)]
    async fn test_nearby_lookup_appends_notice_then_results() {
        let finder =
            LocationFinder::with_provider(Arc::new(FixedPositionProvider::new(-23.5, -46.6)));
        let (controller, _sink) = controller_with_finder(finder);
        submit_and_wait(&controller, "ponto de reciclagem perto de mim").await;

        let transcript = controller.transcript().await;
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript.messages()[1].text, SEARCHING_MESSAGE);
        assert_eq!(transcript.messages()[1].sender, Sender::Bot);
        assert!(transcript.messages()[2]
            .text
            .starts_with("📍 **Pontos de Reciclagem Próximos:**"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_nearby_lookup_without_capability_skips_notice() {
        let (controller, _sink) = controller();
        submit_and_wait(&controller, "ponto de reciclagem perto de mim").await;

        let transcript = controller.transcript().await;
        assert_eq!(transcript.len(), 2);
        assert!(transcript.messages()[1]
            .text
            .starts_with("📍 Seu navegador não suporta geolocalização."));
    }

    // ---- transcript properties ----

    #[tokio::test(start_paused = true)]
    async fn test_transcript_grows_append_only_with_unique_ids() {
        let (controller, _sink) = controller();
        submit_and_wait(&controller, "olá").await;
        submit_and_wait(&controller, "dica").await;

        let transcript = controller.transcript().await;
        assert_eq!(transcript.len(), 4);
        for (i, a) in transcript.messages().iter().enumerate() {
            for b in &transcript.messages()[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
        // Exchange order is preserved.
        assert_eq!(transcript.messages()[0].text, "olá");
        assert_eq!(transcript.messages()[2].text, "dica");
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_waits_for_response_delay() {
        let (controller, _sink) = controller();
        let handle = controller.submit("olá").await.expect("scheduled");

        // Only the user message is visible before the delay elapses.
        let transcript = controller.transcript().await;
        assert_eq!(transcript.len(), 1);

        handle.await.expect("reply task panicked");
        assert_eq!(controller.transcript().await.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_clones_share_one_transcript() {
        let (controller, _sink) = controller();
        let clone = controller.clone();
        submit_and_wait(&controller, "olá").await;
        assert_eq!(clone.transcript().await.len(), 2);
    }
}
