pub mod request;
pub mod response;

pub use request::{ConnectionConfig, ConnectionField, QueryRequest};
pub use response::{display_value, interpret_reply, QueryReply, QueryResult, Row};

use crate::usecases::common::UseCaseMetadata;

/// Path of the query endpoint on the Query Service
pub const QUERY_PATH: &str = "/query";

/// Shown when submit is invoked with a blank prompt
pub const EMPTY_PROMPT_MESSAGE: &str = "Please enter a prompt before submitting.";

pub struct QueryConsole;

impl UseCaseMetadata for QueryConsole {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "query_console"
    }

    fn display_name() -> &'static str {
        "Interact with DataBase"
    }

    fn description() -> &'static str {
        "Turns a natural-language prompt into SQL and runs it against the given database"
    }
}
