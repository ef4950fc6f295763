//! Routing definitions for the Reelbox UI.
use crate::features::profile::actions::ContactEdit;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Profile,
    #[at("/change-email")]
    ChangeEmail,
    #[at("/change-phone-number")]
    ChangePhoneNumber,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<ContactEdit> for Route {
    fn from(edit: ContactEdit) -> Self {
        match edit {
            ContactEdit::Email => Self::ChangeEmail,
            ContactEdit::PhoneNumber => Self::ChangePhoneNumber,
        }
    }
}
