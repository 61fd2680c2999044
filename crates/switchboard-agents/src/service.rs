//! Chat service: the request flow shared by every API operation.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use switchboard_common::{ChatError, SessionId};
use tracing::info;

use crate::catalog::{AgentCatalog, AgentDetail, AgentKind};
use crate::dispatch::Dispatcher;
use crate::router::AgentRouter;
use crate::session::SessionStore;
use crate::tools::{ToolDetail, ToolRegistry};
use crate::{Message, ToolCall};

#[derive(Debug, Clone, Serialize)]
pub struct NewSession {
    pub session_id: SessionId,
    pub created_at: DateTime<Utc>,
}

/// Result of one chat turn.
#[derive(Debug, Clone)]
pub struct ChatOutcome {
    pub reply: String,
    pub agent_used: AgentKind,
    pub tool_calls: Vec<ToolCall>,
    pub timestamp: DateTime<Utc>,
}

/// Owns the catalog, router, tools and sessions. Cheap to clone.
#[derive(Clone)]
pub struct ChatService {
    catalog: Arc<AgentCatalog>,
    router: Arc<AgentRouter>,
    dispatcher: Arc<Dispatcher>,
    sessions: SessionStore,
}

impl ChatService {
    pub fn new(tools: ToolRegistry, sessions: SessionStore) -> Self {
        Self {
            catalog: Arc::new(AgentCatalog::new()),
            router: Arc::new(AgentRouter::new()),
            dispatcher: Arc::new(Dispatcher::new(tools)),
            sessions,
        }
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub async fn new_session(&self) -> NewSession {
        let (session_id, created_at) = self.sessions.create().await;
        NewSession {
            session_id,
            created_at,
        }
    }

    /// Run one chat turn and record it in the session history.
    ///
    /// The session lock is not held while the agent runs, so a slow tool
    /// does not stall other sessions.
    pub async fn chat(
        &self,
        session_id: &SessionId,
        message: &str,
        agent: Option<&str>,
    ) -> Result<ChatOutcome, ChatError> {
        self.sessions.touch(session_id).await?;
        let user_message = Message::user(message);

        let kind = self.router.select(message, agent);
        let out = self.dispatcher.run(kind, message).await;

        let assistant_message = Message::assistant(out.reply.clone(), kind, out.tool_calls.clone());
        let timestamp = assistant_message.timestamp;
        self.sessions
            .append_turn(session_id, user_message, assistant_message)
            .await?;

        info!(session = %session_id, agent = %kind.name(), tools = out.tool_calls.len(), "Agent replied");

        Ok(ChatOutcome {
            reply: out.reply,
            agent_used: kind,
            tool_calls: out.tool_calls,
            timestamp,
        })
    }

    pub async fn history(&self, session_id: &SessionId) -> Result<Vec<Message>, ChatError> {
        self.sessions.get_history(session_id).await
    }

    pub fn agents(&self) -> &[AgentDetail] {
        self.catalog.list()
    }

    pub fn tools(&self) -> Vec<ToolDetail> {
        self.dispatcher.tools().tools()
    }

    /// Run a tool directly, outside any session.
    pub async fn call_tool(
        &self,
        name: &str,
        args: &serde_json::Value,
    ) -> Result<ToolCall, ChatError> {
        self.dispatcher.tools().call(name, args).await
    }
}

impl Default for ChatService {
    fn default() -> Self {
        Self::new(ToolRegistry::default(), SessionStore::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::DEFAULT_EXPIRATION;
    use crate::Role;
    use tokio::time::{advance, Duration};

    fn service() -> ChatService {
        ChatService::new(ToolRegistry::without_latency(), SessionStore::default())
    }

    #[tokio::test]
    async fn chat_turn_appends_user_then_assistant() {
        let svc = service();
        let session = svc.new_session().await;

        let out = svc
            .chat(&session.session_id, "what is 2 + 2", None)
            .await
            .unwrap();
        assert_eq!(out.agent_used, AgentKind::MathWhiz);
        assert!(out.reply.contains('4'));
        assert_eq!(out.tool_calls.len(), 1);
        assert_eq!(out.tool_calls[0].args["op"], "add");

        let history = svc.history(&session.session_id).await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].role, Role::User);
        assert_eq!(history[0].content, "what is 2 + 2");
        assert!(history[0].tool_calls.is_empty());
        assert_eq!(history[1].role, Role::Assistant);
        assert_eq!(history[1].content, out.reply);
        assert_eq!(history[1].agent_used.as_deref(), Some("MathWhiz"));
        assert_eq!(history[1].tool_calls, out.tool_calls);
        assert_eq!(history[1].timestamp, out.timestamp);
        assert!(history[0].timestamp <= history[1].timestamp);
    }

    #[tokio::test]
    async fn override_contradicting_keywords_wins() {
        let svc = service();
        let session = svc.new_session().await;
        let out = svc
            .chat(&session.session_id, "calculate 3 * 3", Some("Generalist"))
            .await
            .unwrap();
        assert_eq!(out.agent_used, AgentKind::Generalist);
        assert!(out.tool_calls.is_empty());
    }

    #[tokio::test]
    async fn prose_with_slash_is_searched_not_calculated() {
        let svc = service();
        let session = svc.new_session().await;
        let out = svc
            .chat(&session.session_id, "search for cats / dogs", None)
            .await
            .unwrap();
        assert_eq!(out.agent_used, AgentKind::WebResearcher);
        assert_eq!(out.tool_calls.len(), 1);
        assert_eq!(out.tool_calls[0].tool, "web_search");
    }

    #[tokio::test]
    async fn chat_on_unknown_session_is_not_found() {
        let svc = service();
        let err = svc
            .chat(&SessionId::from("missing"), "hi", None)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Session 'missing' not found.");
    }

    #[tokio::test(start_paused = true)]
    async fn chat_on_expired_session_is_not_found_and_stays_gone() {
        let svc = service();
        let session = svc.new_session().await;
        advance(DEFAULT_EXPIRATION + Duration::from_secs(1)).await;

        let err = svc.chat(&session.session_id, "hi", None).await.unwrap_err();
        assert!(matches!(err, ChatError::SessionExpired(_)));
        assert!(err.is_not_found());

        let err = svc.history(&session.session_id).await.unwrap_err();
        assert!(matches!(err, ChatError::SessionNotFound(_)));
    }

    #[tokio::test]
    async fn catalog_is_unaffected_by_chat() {
        let svc = service();
        let session = svc.new_session().await;
        for msg in ["hello", "search cats", "1 + 1"] {
            svc.chat(&session.session_id, msg, None).await.unwrap();
        }
        assert_eq!(svc.agents().len(), 3);
        assert_eq!(svc.agents(), AgentCatalog::new().list());
    }

    #[tokio::test]
    async fn concurrent_turns_keep_pairs_together() {
        let svc = service();
        let session = svc.new_session().await;

        let mut handles = Vec::new();
        for i in 0..8 {
            let svc = svc.clone();
            let id = session.session_id.clone();
            handles.push(tokio::spawn(async move {
                svc.chat(&id, &format!("{i} + {i}"), None).await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let history = svc.history(&session.session_id).await.unwrap();
        assert_eq!(history.len(), 16);
        for pair in history.chunks(2) {
            assert_eq!(pair[0].role, Role::User);
            assert_eq!(pair[1].role, Role::Assistant);
            let call = &pair[1].tool_calls[0];
            let n = pair[0].content.split(' ').next().unwrap();
            assert_eq!(call.args["a"], serde_json::json!(n.parse::<f64>().unwrap()));
        }
    }

    #[tokio::test]
    async fn call_tool_by_name() {
        let svc = service();
        let call = svc
            .call_tool("calculator", &serde_json::json!({"a": 10, "b": 4, "op": "divide"}))
            .await
            .unwrap();
        assert!(call.result.unwrap().contains("2.5"));
        assert_eq!(svc.tools().len(), 3);
    }
}
