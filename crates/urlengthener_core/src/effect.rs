use crate::RequestId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue `GET <origin><path_and_query>` and report back with
    /// `Msg::LengthenCompleted` carrying the same `request_id`.
    Lengthen {
        request_id: RequestId,
        path_and_query: String,
    },
    /// Show a blocking, user-visible error notification.
    Alert(String),
}
