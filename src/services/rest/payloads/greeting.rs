use serde::Serialize;

#[derive(Serialize)]
pub struct GreetingPayload {
    pub message: String,
}
