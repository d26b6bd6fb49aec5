//! Firebase Backend Access
//!
//! REST clients for the two hosted services the app delegates to: Cloud
//! Firestore (documents) and the Identity Toolkit (accounts), plus the
//! snapshot subscription layer on top of the document client.

pub mod auth;
pub mod error;
pub mod firestore;
pub mod listen;

pub use auth::{AuthClient, Session};
pub use error::FirebaseError;
pub use firestore::{Document, Fields, Firestore, Value};
pub use listen::Subscription;
