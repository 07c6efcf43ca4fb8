use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
pub struct FlushResponse {
    pub flushed: bool,
}
