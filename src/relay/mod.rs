//! Pure halves of the AI report relay: what gets sent to the completion service and
//! how its streamed reply is cut back into cards. Nothing here touches the network.

pub mod prompt;
pub mod request;
pub mod sections;
pub mod stream;
