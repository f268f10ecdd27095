//! Chat service: the request-level collaborator around the response orchestrator.
//!
//! ## Modules
//!
//! - [`models`] – ChatRequest, ChatResponse, ChatRecord
//! - [`repository`] – ChatRepository trait and InMemoryChatRepository
//! - [`resolver`] – UserResolver trait and StaticUserResolver
//! - [`service`] – ChatService

pub mod models;
pub mod repository;
pub mod resolver;
pub mod service;

pub use models::{ChatRecord, ChatRequest, ChatResponse};
pub use repository::{ChatRepository, InMemoryChatRepository};
pub use resolver::{StaticUserResolver, UserResolver};
pub use service::ChatService;
