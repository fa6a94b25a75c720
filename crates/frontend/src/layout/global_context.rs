use contracts::domain::a001_chat_message::ChatMessage;
use contracts::domain::a002_topic_session::{OcrMode, TopicSession};
use contracts::shared::turn::{TurnCounter, TurnToken};
use contracts::usecases::u501_init_topic::NO_TOPIC;
use leptos::prelude::*;
use web_sys::File;

/// App-wide chat state shared through Leptos context.
///
/// Everything the sidebar, the transcript, the composer and the sales modal
/// need to agree on lives here. Handlers go through the methods below rather
/// than poking at individual signals.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub session: RwSignal<TopicSession>,
    pub messages: RwSignal<Vec<ChatMessage>>,
    /// Typing placeholders currently shown.
    pub typing: RwSignal<u32>,
    /// An ask call is in flight.
    pub asking: RwSignal<bool>,
    /// Composer text.
    pub draft: RwSignal<String>,

    pub topic_input: RwSignal<String>,
    pub compare_input: RwSignal<String>,
    pub ocr_mode: RwSignal<String>,
    pub primary_file: RwSignal<Option<File>, LocalStorage>,
    pub compare_file: RwSignal<Option<File>, LocalStorage>,
    pub topic_status: RwSignal<String>,
    pub compare_status: RwSignal<String>,
    /// Bumped to re-create the file pickers, which cannot be cleared through
    /// a binding.
    pub form_epoch: RwSignal<u32>,

    pub rag_on: RwSignal<bool>,
    pub compare_on: RwSignal<bool>,

    /// Advanced by new chat and clear; guards chat-bound answers.
    turns: StoredValue<TurnCounter>,
    /// Advanced by clear only; guards topic setup answers.
    resets: StoredValue<TurnCounter>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        let session = TopicSession::new();
        Self {
            rag_on: RwSignal::new(session.rag_enabled),
            compare_on: RwSignal::new(session.compare_mode),
            session: RwSignal::new(session),
            messages: RwSignal::new(Vec::new()),
            typing: RwSignal::new(0),
            asking: RwSignal::new(false),
            draft: RwSignal::new(String::new()),
            topic_input: RwSignal::new(String::new()),
            compare_input: RwSignal::new(String::new()),
            ocr_mode: RwSignal::new(OcrMode::default().as_str().to_string()),
            primary_file: RwSignal::new_local(None),
            compare_file: RwSignal::new_local(None),
            topic_status: RwSignal::new(NO_TOPIC.to_string()),
            compare_status: RwSignal::new(String::new()),
            form_epoch: RwSignal::new(0),
            turns: StoredValue::new(TurnCounter::new()),
            resets: StoredValue::new(TurnCounter::new()),
        }
    }

    /// Token for a request started now.
    pub fn turn_token(&self) -> TurnToken {
        self.turns.with_value(|t| t.current())
    }

    pub fn is_current(&self, token: TurnToken) -> bool {
        self.turns.with_value(|t| t.is_current(token))
    }

    /// Token that survives a new chat but not a full clear.
    pub fn session_token(&self) -> TurnToken {
        self.resets.with_value(|t| t.current())
    }

    pub fn is_same_session(&self, token: TurnToken) -> bool {
        self.resets.with_value(|t| t.is_current(token))
    }

    pub fn push_user(&self, text: &str) {
        self.messages.update(|m| m.push(ChatMessage::user(text)));
    }

    /// Append an assistant bubble and harvest any price it quotes.
    pub fn push_assistant(&self, text: impl Into<String>, sources: Vec<String>) {
        let message = ChatMessage::assistant(text, sources);
        self.session
            .update(|s| s.note_assistant_text(&message.text));
        self.messages.update(|m| m.push(message));
    }

    pub fn show_typing(&self) {
        self.typing.update(|n| *n += 1);
    }

    pub fn hide_typing(&self) {
        self.typing.update(|n| *n = n.saturating_sub(1));
    }

    /// Empty the transcript and invalidate every in-flight request.
    fn reset_transcript(&self) {
        self.turns.update_value(|t| {
            t.advance();
        });
        self.messages.set(Vec::new());
        self.typing.set(0);
        self.draft.set(String::new());
    }

    /// New conversation on the same topic.
    pub fn start_new_chat(&self, time_label: &str) {
        self.reset_transcript();
        self.session.update(|s| s.start_new_chat(time_label));
        log::debug!("new chat started");
    }

    /// Forget the topic, the comparison pair and everything typed so far.
    pub fn clear_all(&self) {
        self.reset_transcript();
        self.resets.update_value(|t| {
            t.advance();
        });
        self.session.update(|s| s.clear());
        self.primary_file.set(None);
        self.compare_file.set(None);
        self.topic_input.set(String::new());
        self.compare_input.set(String::new());
        self.topic_status.set(NO_TOPIC.to_string());
        self.compare_status.set(String::new());
        self.form_epoch.update(|e| *e += 1);
        log::debug!("session cleared");
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}
