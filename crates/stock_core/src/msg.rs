#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the ticker input box.
    QueryChanged(String),
    /// User submitted the current ticker.
    Submitted,
    /// User dismissed the error banner.
    Dismissed,
    /// Engine delivered the analysis for a request.
    FetchSucceeded {
        request_id: crate::RequestId,
        result: crate::AnalysisResult,
    },
    /// Engine gave up on a request (transport error, non-2xx status, timeout, bad payload).
    FetchFailed { request_id: crate::RequestId },
    /// UI/render tick; drives the loading spinner.
    Tick,
}
