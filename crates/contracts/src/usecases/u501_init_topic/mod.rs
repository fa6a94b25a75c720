pub mod request;
pub mod response;

pub use request::{
    CompareInitRequest, InitTopicRequest, RagToggleRequest, COMPARE_INIT_PATH, INIT_TOPIC_PATH,
    RAG_PATH,
};
pub use response::{
    pair_failure_line, topic_failure_line, InitTopicData, RagState, TopicMeta, NO_TOPIC, PAIR_PENDING,
    PAIR_READY, TOPIC_PENDING,
};
