use crate::RequestId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue `GET {base}/api/stock/{symbol}` and report back with `request_id`.
    FetchAnalysis { request_id: RequestId, symbol: String },
}
