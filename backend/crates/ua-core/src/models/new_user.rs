/// A validated user that has not been persisted yet.
///
/// Only `validate_new_user` hands these out, so holding one means the
/// email and name already passed field validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub(crate) email: String,
    pub(crate) name: String,
}

impl NewUser {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
