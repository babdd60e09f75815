use uuid::Uuid;

///
/// Authenticated caller, retrieved from the JWT by the auth middleware
/// and stored in request extensions.
///
#[derive(Debug, Clone, Copy)]
pub struct User {
    pub id: Uuid,
}

impl User {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}
