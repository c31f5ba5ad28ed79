pub mod page_query;
pub mod session_id;
pub mod validated_json;

pub use page_query::PageQuery;
pub use session_id::{SessionId, SESSION_COOKIE};
pub use validated_json::ValidatedJson;
